use chiplet_sim::simulator::config::{load_and_merge_configs, AppConfig, HardwareSection, WorkloadSection};
use chiplet_sim::simulator::{SimError, Simulator};
use chiplet_sim::{init_log, OutputFormat, SimConfig};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Chiplet package latency and power estimator
#[derive(Parser, Debug)]
#[command(name = "chiplet-sim")]
#[command(version)]
#[command(about = "Chiplet architecture simulator: CPU + NPU dies, interconnect and shared memory", long_about = None)]
struct Args {
  /// TOML scenario file with [hardware] and [workload] tables; flags override it
  #[arg(long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Number of CPU dies
  #[arg(long = "cpu_dies", required_unless_present = "config")]
  cpu_dies: Option<u32>,

  /// CPU cores per die
  #[arg(long = "cpu_cores", required_unless_present = "config")]
  cpu_cores: Option<u32>,

  /// Number of NPU dies
  #[arg(long = "npu_dies", required_unless_present = "config")]
  npu_dies: Option<u32>,

  /// NPU cores per die
  #[arg(long = "npu_cores", required_unless_present = "config")]
  npu_cores: Option<u32>,

  /// Interconnect bandwidth (GB/s)
  #[arg(long = "interconnect_bw", required_unless_present = "config")]
  interconnect_bw: Option<f64>,

  /// Memory bandwidth (GB/s)
  #[arg(long = "memory_bw", required_unless_present = "config")]
  memory_bw: Option<f64>,

  /// CPU FLOPS per inference
  #[arg(long = "cpu_flops", required_unless_present = "config")]
  cpu_flops: Option<f64>,

  /// NPU FLOPS per inference
  #[arg(long = "npu_flops", required_unless_present = "config")]
  npu_flops: Option<f64>,

  /// Inference frequency (inferences/s)
  #[arg(long = "inference_freq", required_unless_present = "config")]
  inference_freq: Option<f64>,

  /// Linux task DMIPS
  #[arg(long = "linux_dmips", required_unless_present = "config")]
  linux_dmips: Option<f64>,

  /// Data size per inference (GB)
  #[arg(long = "data_size", required_unless_present = "config")]
  data_size: Option<f64>,

  /// Output format
  #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
  format: OutputFormat,

  /// Quiet mode (only warnings and errors are logged)
  #[arg(short, long)]
  quiet: bool,
}

impl Args {
  fn overrides(&self) -> AppConfig {
    AppConfig {
      hardware: HardwareSection {
        cpu_dies: self.cpu_dies,
        cpu_cores: self.cpu_cores,
        npu_dies: self.npu_dies,
        npu_cores: self.npu_cores,
        interconnect_bw: self.interconnect_bw,
        memory_bw: self.memory_bw,
      },
      workload: WorkloadSection {
        cpu_flops: self.cpu_flops,
        npu_flops: self.npu_flops,
        inference_freq: self.inference_freq,
        linux_dmips: self.linux_dmips,
        data_size: self.data_size,
      },
    }
  }
}

fn main() -> ExitCode {
  let args = Args::parse();
  init_log(args.quiet);

  let (hardware, workload) = match load_and_merge_configs(args.config.as_deref(), args.overrides()) {
    Ok(inputs) => inputs,
    Err(e) => {
      log::error!("{}", e);
      return ExitCode::from(2);
    },
  };

  let config = SimConfig { format: args.format };

  let simulator = Simulator::new(config, hardware, workload);
  let stdout = std::io::stdout();
  match simulator.run_and_report(&mut stdout.lock()) {
    Ok(_) => {},
    Err(e @ SimError::Model(_)) => {
      log::error!("{}", e);
      return ExitCode::from(2);
    },
    Err(e @ SimError::Io(_)) => {
      log::error!("{}", e);
      return ExitCode::FAILURE;
    },
  }

  ExitCode::SUCCESS
}
