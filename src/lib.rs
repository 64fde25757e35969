pub mod model;
pub mod simulator;

pub use model::{evaluate, HardwareConfig, ModelError, SimResult, Workload};
pub use simulator::sim::mode::{OutputFormat, SimConfig};
pub use simulator::utils::log::init_log;
