pub mod error;
pub mod estimators;
pub mod hardware;
pub mod model;
pub mod workload;

pub use error::ModelError;
pub use estimators::{ComputeTimes, CpuBound};
pub use hardware::HardwareConfig;
pub use model::{evaluate, PowerBreakdown, SimResult};
pub use workload::Workload;
