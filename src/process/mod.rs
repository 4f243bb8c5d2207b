// file: src/process/mod.rs
// version: 1.0.0
// guid: 2b6f03d8-9c47-41ea-b1f5-7e05a82c64d9

//! Process termination handler
//!
//! Resolves a target process by id or by name and delivers a termination
//! signal through a [`ProcessProvider`].

pub mod matcher;
pub mod provider;

pub use matcher::NameMatcher;
pub use provider::{ProcessProvider, ProcessRecord, SystemProcessProvider};

use crate::{ProcvolError, Result};
use tracing::debug;

/// Validated termination target.
///
/// Exactly one targeting mode is representable, so the "id xor name" flag
/// invariant cannot be violated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationRequest {
    ByIdentifier(u32),
    ByName(String),
}

impl TerminationRequest {
    /// Build a request from the two optional `kill` flags.
    pub fn from_flags(id: Option<u32>, name: Option<String>) -> Result<Self> {
        match (id, name) {
            (Some(_), Some(_)) => Err(ProcvolError::invalid_arguments(
                "either the id or the name flag must be provided, not both",
            )),
            (Some(id), None) => Ok(Self::ByIdentifier(id)),
            (None, Some(name)) if name.is_empty() => {
                Err(ProcvolError::invalid_arguments("name flag cannot be empty"))
            }
            (None, Some(name)) => Ok(Self::ByName(name)),
            (None, None) => Err(ProcvolError::invalid_arguments(
                "one of the id or name flags must be provided",
            )),
        }
    }
}

/// Terminate the process(es) selected by `request`.
pub fn terminate(
    request: &TerminationRequest,
    provider: &mut dyn ProcessProvider,
    matcher: NameMatcher,
) -> Result<()> {
    match request {
        TerminationRequest::ByIdentifier(pid) => terminate_by_id(*pid, provider),
        TerminationRequest::ByName(name) => terminate_by_name(name, provider, matcher),
    }
}

fn terminate_by_id(pid: u32, provider: &mut dyn ProcessProvider) -> Result<()> {
    let record = provider.find(pid).ok_or_else(|| {
        ProcvolError::process_lookup_failed(format!(
            "process {} does not exist or is not accessible",
            pid
        ))
    })?;

    debug!("terminating process {} ({:?})", record.pid, record.name);
    provider
        .terminate(pid)
        .map_err(|reason| ProcvolError::TerminationFailed {
            failures: vec![reason],
        })
}

fn terminate_by_name(
    target: &str,
    provider: &mut dyn ProcessProvider,
    matcher: NameMatcher,
) -> Result<()> {
    let records = provider.list()?;

    let mut found = false;
    let mut failures = Vec::new();

    for record in records {
        // Unreadable and empty names are skipped; a partial read does not
        // fail the overall scan.
        let Some(name) = record.name.as_deref() else {
            continue;
        };
        if name.is_empty() || !matcher.matches(name, target) {
            continue;
        }

        found = true;
        if let Err(reason) = provider.terminate(record.pid) {
            debug!("failed to terminate process {}: {}", record.pid, reason);
            failures.push(reason);
        }
    }

    if !found {
        return Err(ProcvolError::ProcessNotFound(target.to_string()));
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(ProcvolError::TerminationFailed { failures })
    }
}
