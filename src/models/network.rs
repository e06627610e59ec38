// Network interface models

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterface {
    /// Stable OS identifier, e.g. "en0" or "eth0".
    pub name: String,
    /// Human label, e.g. "Wi-Fi" or "Ethernet".
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    pub is_up: bool,
    /// Instantaneous rates in bytes/sec.
    pub download_speed: u64,
    pub upload_speed: u64,
    /// Cumulative counters, monotonically non-decreasing while the interface
    /// persists.
    pub total_downloaded: u64,
    pub total_uploaded: u64,
}

/// Interfaces in OS discovery order (not guaranteed stable across snapshots)
/// plus aggregates computed upstream by the sampler. The aggregates should
/// equal the sums over `interfaces` but nothing here enforces that.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInfo {
    pub interfaces: Vec<NetworkInterface>,
    pub total_download: u64,
    pub total_upload: u64,
    pub download_speed: u64,
    pub upload_speed: u64,
}
