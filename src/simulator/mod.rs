pub mod config;
pub mod sim;
pub mod simulator;
pub mod utils;

pub use simulator::{SimError, Simulator};
pub use utils::log::init_log;
