// file: src/volume/provider.rs
// version: 1.0.0
// guid: ad5e92c7-60b4-4f31-b8d6-74f0c3a1e925

//! Filesystem mount table access
//!
//! Uses the sysinfo crate for cross-platform disk enumeration.

use crate::{ProcvolError, Result};
use std::path::{Path, PathBuf};
use sysinfo::Disks;

/// One mounted partition as reported by the mount table.
#[derive(Debug, Clone)]
pub struct Partition {
    pub device: String,
    pub mount_point: PathBuf,
}

/// Usage statistics for one mount point.
#[derive(Debug, Clone, Copy)]
pub struct UsageStats {
    pub total: u64,
    pub used: u64,
    pub available: u64,
    pub use_percent: f64,
}

/// Access to the mount table and per-mount usage statistics.
pub trait VolumeProvider {
    /// Enumerate mounted partitions.
    fn partitions(&mut self) -> Result<Vec<Partition>>;

    /// Query usage statistics for one mount point.
    ///
    /// Fails when the mount point is no longer resolvable.
    fn usage(&mut self, mount_point: &Path) -> Result<UsageStats>;
}

/// sysinfo-backed provider over the live mount table.
pub struct SystemVolumeProvider {
    disks: Disks,
}

impl SystemVolumeProvider {
    pub fn new() -> Self {
        Self {
            disks: Disks::new_with_refreshed_list(),
        }
    }
}

impl Default for SystemVolumeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl VolumeProvider for SystemVolumeProvider {
    fn partitions(&mut self) -> Result<Vec<Partition>> {
        self.disks.refresh_list();
        Ok(self
            .disks
            .iter()
            .map(|disk| Partition {
                device: disk.name().to_string_lossy().to_string(),
                mount_point: disk.mount_point().to_path_buf(),
            })
            .collect())
    }

    fn usage(&mut self, mount_point: &Path) -> Result<UsageStats> {
        self.disks.refresh();
        let disk = self
            .disks
            .iter()
            .find(|disk| disk.mount_point() == mount_point)
            .ok_or_else(|| {
                ProcvolError::system(format!(
                    "mount point {} is not available",
                    mount_point.display()
                ))
            })?;

        let total = disk.total_space();
        let available = disk.available_space();
        let used = total.saturating_sub(available);
        let use_percent = if total > 0 {
            used as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        Ok(UsageStats {
            total,
            used,
            available,
            use_percent,
        })
    }
}
