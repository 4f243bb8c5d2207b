// file: src/volume/mod.rs
// version: 1.0.0
// guid: f02c6a18-5d93-4e7b-a4c0-19b8e53d27f6

//! Volume enumeration handler
//!
//! Discovers mounted partitions through a [`VolumeProvider`] and renders
//! them as tab-indented JSON.

pub mod provider;

pub use provider::{Partition, SystemVolumeProvider, UsageStats, VolumeProvider};

use crate::{ProcvolError, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

/// One mounted volume with capacity statistics.
#[derive(Debug, Clone, Serialize)]
pub struct VolumeRecord {
    pub name: String,
    pub total: u64,
    pub used: u64,
    pub available: u64,
    pub use_percent: f64,
    pub mount: String,
}

/// Collect a usage record for every resolvable mounted partition.
///
/// A partition whose usage query fails is omitted; only a failure of the
/// initial enumeration aborts the command.
pub fn collect(provider: &mut dyn VolumeProvider) -> Result<Vec<VolumeRecord>> {
    let partitions = provider.partitions()?;

    let mut records = Vec::with_capacity(partitions.len());
    for partition in partitions {
        let stats = match provider.usage(&partition.mount_point) {
            Ok(stats) => stats,
            Err(err) => {
                debug!("skipping partition {}: {}", partition.device, err);
                continue;
            }
        };

        records.push(VolumeRecord {
            name: partition.device,
            total: stats.total,
            used: stats.used,
            available: stats.available,
            use_percent: stats.use_percent,
            mount: partition.mount_point.to_string_lossy().to_string(),
        });
    }

    Ok(records)
}

/// Render records as a tab-indented JSON array.
pub fn render(records: &[VolumeRecord]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;

    String::from_utf8(buf)
        .map_err(|e| ProcvolError::system(format!("volume report is not valid UTF-8: {}", e)))
}
