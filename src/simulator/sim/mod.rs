pub mod mode;

pub use mode::{OutputFormat, SimConfig};
