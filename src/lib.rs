// Presentation-layer contracts for the system monitor frontend

pub mod format;
pub mod iface;
pub mod models;
