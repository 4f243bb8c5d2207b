// file: src/process/provider.rs
// version: 1.0.0
// guid: 61a8d4b0-3c2f-47e9-85b1-f92e06d73ca8

//! Process table access
//!
//! Uses the sysinfo crate for cross-platform process management.

use crate::Result;
use sysinfo::{Pid, System};

/// Snapshot of one running process.
#[derive(Debug, Clone)]
pub struct ProcessRecord {
    pub pid: u32,
    /// Display name; `None` when the name could not be read.
    pub name: Option<String>,
}

/// Access to the live process table.
pub trait ProcessProvider {
    /// Look up one process by identifier.
    fn find(&mut self, pid: u32) -> Option<ProcessRecord>;

    /// Enumerate all running processes.
    fn list(&mut self) -> Result<Vec<ProcessRecord>>;

    /// Send a termination signal; `Err` carries the OS reason text.
    fn terminate(&mut self, pid: u32) -> std::result::Result<(), String>;
}

/// sysinfo-backed provider over the live process table.
///
/// The table is snapshotted once at construction; termination acts on the
/// snapshot, so a process that exited in between surfaces as a signal
/// failure rather than a panic.
pub struct SystemProcessProvider {
    system: System,
}

impl SystemProcessProvider {
    pub fn new() -> Self {
        let mut system = System::new();
        system.refresh_all();
        Self { system }
    }
}

impl Default for SystemProcessProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessProvider for SystemProcessProvider {
    fn find(&mut self, pid: u32) -> Option<ProcessRecord> {
        self.system.process(Pid::from_u32(pid)).map(|process| {
            let name = process.name().to_string_lossy().to_string();
            ProcessRecord {
                pid,
                name: (!name.is_empty()).then_some(name),
            }
        })
    }

    fn list(&mut self) -> Result<Vec<ProcessRecord>> {
        Ok(self
            .system
            .processes()
            .iter()
            .map(|(pid, process)| {
                let name = process.name().to_string_lossy().to_string();
                ProcessRecord {
                    pid: pid.as_u32(),
                    name: (!name.is_empty()).then_some(name),
                }
            })
            .collect())
    }

    fn terminate(&mut self, pid: u32) -> std::result::Result<(), String> {
        match self.system.process(Pid::from_u32(pid)) {
            Some(process) if process.kill() => Ok(()),
            Some(_) => Err(format!("failed to signal process {}", pid)),
            None => Err(format!("process {} no longer exists", pid)),
        }
    }
}
