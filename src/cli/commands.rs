// file: src/cli/commands.rs
// version: 1.0.0
// guid: c58d912e-7f4a-4b06-9a2d-83e1f6c07b94

//! Command implementations for the CLI

use crate::{
    process::{self, NameMatcher, SystemProcessProvider, TerminationRequest},
    volume::{self, SystemVolumeProvider},
    Result,
};
use tracing::info;

/// Terminate a process by id or by name
pub fn kill_command(id: Option<u32>, name: Option<String>) -> Result<()> {
    // Flag validation happens before the live process table is touched.
    let request = TerminationRequest::from_flags(id, name)?;

    let mut provider = SystemProcessProvider::new();
    process::terminate(&request, &mut provider, NameMatcher::for_current_platform())?;

    println!("Process killed successfully.");
    Ok(())
}

/// List mounted volumes as tab-indented JSON on stdout
pub fn volumes_command() -> Result<()> {
    let mut provider = SystemVolumeProvider::new();
    let records = volume::collect(&mut provider)?;
    info!("found {} mounted volumes", records.len());

    let rendered = volume::render(&records)?;
    println!("{}", rendered);
    Ok(())
}
