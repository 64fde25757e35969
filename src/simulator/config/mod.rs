pub mod config;

pub use config::{
  load_and_merge_configs, load_config_file, merge_config, AppConfig, ConfigError, HardwareSection, WorkloadSection,
};
