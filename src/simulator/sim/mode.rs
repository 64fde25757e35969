use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
  /// Grid table, two decimals per float column
  #[default]
  Table,
  /// Full result including power breakdown
  Json,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SimConfig {
  pub format: OutputFormat,
}
