// CPU, memory and root snapshot models

use serde::{Deserialize, Serialize};

use super::NetworkInfo;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuInfo {
    pub name: String,
    pub cores: u32,
    /// Aggregate usage percentage, 0-100.
    pub usage: f64,
    /// Per-core usage percentages; one entry per core, sampler order.
    pub core_usage: Vec<f64>,
    /// Current frequency in GHz.
    pub frequency: f64,
    /// Absent when no temperature sensor is available. Absent and 0.0 mean
    /// different things here, so this stays an Option on the wire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryInfo {
    pub total: u64,
    pub used: u64,
    pub available: u64,
    pub usage_percent: f64,
    /// Present only when a swap/page file exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swap_total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swap_used: Option<u64>,
}

/// One point-in-time sample. Built wholesale by the sampler, immutable after
/// construction, discarded after display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStats {
    /// Epoch milliseconds at sample time.
    pub timestamp: u64,
    pub cpu: CpuInfo,
    pub memory: MemoryInfo,
    pub network: NetworkInfo,
}
