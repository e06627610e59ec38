// Snapshot models produced by the sampler, consumed read-only by the frontend

mod network;
mod system;

pub use network::{NetworkInfo, NetworkInterface};
pub use system::{CpuInfo, MemoryInfo, SystemStats};
