// file: src/cli/args.rs
// version: 1.0.0
// guid: 9d37ab52-6e01-4c48-a3b7-51f98c0d2e76

//! Command line argument definitions

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "procvol")]
#[command(about = "Terminate processes by id or name and list mounted volumes")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Terminate a process by process id or process name
    Kill {
        /// Kill process by process ID
        #[arg(long)]
        id: Option<u32>,

        /// Kill process by process name; every matching process is signalled
        #[arg(long)]
        name: Option<String>,
    },

    /// List the mounted filesystem volumes
    Volumes,
}
