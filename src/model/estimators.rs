//! Stage estimators. Every function is pure and returns milliseconds for
//! time terms and watts for power terms.

use super::hardware::HardwareConfig;
use super::workload::Workload;
use serde::Serialize;

/// Fixed number of coherence operations issued per inference
pub const COHERENCE_OPS_PER_INFERENCE: f64 = 10.0;
/// Memory bandwidth derating per core sharing a die-level memory port
pub const MEMORY_CONTENTION_PER_CORE: f64 = 0.2;
/// One MAC counts as a multiply and an add
pub const FLOPS_PER_MAC: f64 = 2.0;

const GHZ: f64 = 1e9;
const BITS_PER_GB: f64 = 8e9;
const MS_PER_S: f64 = 1000.0;

/// Which CPU demand sets the CPU stage time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CpuBound {
  Linux,
  Inference,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputeTimes {
  pub cpu_time_linux_ms: f64,
  pub cpu_time_ai_ms: f64,
  /// max of the Linux and inference terms
  pub cpu_time_ms: f64,
  pub npu_time_ms: f64,
  pub cpu_bound: CpuBound,
}

/// Transfer time over the die-to-die link and the average link power
pub fn interconnect_overhead(config: &HardwareConfig, workload: &Workload) -> (f64, f64) {
  let data_size_gb = workload.data_size_per_inference();
  let time_ms =
    (data_size_gb / config.interconnect_bw() + HardwareConfig::INTERCONNECT_LATENCY) * MS_PER_S;

  let data_bits = data_size_gb * BITS_PER_GB;
  let power_w = data_bits * HardwareConfig::INTERCONNECT_POWER_PER_BIT * workload.inference_freq();

  (time_ms, power_w)
}

/// Per-inference coherence latency and the average coherence power.
///
/// The time term is a latency and ignores `inference_freq`; the power term
/// is an average over time and scales with it.
pub fn coherence_overhead(_config: &HardwareConfig, workload: &Workload) -> (f64, f64) {
  let time_ms = COHERENCE_OPS_PER_INFERENCE * HardwareConfig::COHERENCE_LATENCY * MS_PER_S;
  let power_w =
    COHERENCE_OPS_PER_INFERENCE * HardwareConfig::COHERENCE_POWER_PER_OP * workload.inference_freq();

  (time_ms, power_w)
}

/// CPU and NPU stage times.
///
/// The CPU pool serves the background OS load and the inference compute at
/// the same time, so its stage time is the larger of the two, not their sum.
pub fn compute_time(config: &HardwareConfig, workload: &Workload) -> ComputeTimes {
  let total_cpu_cores = config.total_cpu_cores();
  let cpu_flops_per_core = HardwareConfig::CPU_FREQ * GHZ;
  let cpu_time_linux_ms =
    workload.linux_dmips() / (total_cpu_cores * HardwareConfig::CPU_DMIPS_PER_CORE) * MS_PER_S;
  let cpu_time_ai_ms = workload.cpu_flops() / (total_cpu_cores * cpu_flops_per_core) * MS_PER_S;

  let (cpu_time_ms, cpu_bound) = if cpu_time_linux_ms > cpu_time_ai_ms {
    (cpu_time_linux_ms, CpuBound::Linux)
  } else {
    (cpu_time_ai_ms, CpuBound::Inference)
  };

  let total_npu_cores = config.total_npu_cores();
  let npu_flops_per_core = HardwareConfig::NPU_MACS_PER_CORE * HardwareConfig::NPU_FREQ * GHZ * FLOPS_PER_MAC;
  let npu_time_ms = workload.npu_flops() / (total_npu_cores * npu_flops_per_core) * MS_PER_S;

  ComputeTimes {
    cpu_time_linux_ms,
    cpu_time_ai_ms,
    cpu_time_ms,
    npu_time_ms,
    cpu_bound,
  }
}

/// Nominal memory bandwidth derated by the per-die core count
pub fn effective_memory_bw(config: &HardwareConfig) -> f64 {
  // contention is local to one die's memory port, so cores per die, not total cores
  let cores_per_die = f64::from(config.cpu_cores_per_die()) + f64::from(config.npu_cores_per_die());
  config.memory_bw() / (1.0 + MEMORY_CONTENTION_PER_CORE * cores_per_die)
}

pub fn memory_time(config: &HardwareConfig, workload: &Workload) -> f64 {
  workload.data_size_per_inference() / effective_memory_bw(config) * MS_PER_S
}

/// Aggregate synchronization cost, scaled by the inference rate
pub fn sync_time(_config: &HardwareConfig, workload: &Workload) -> f64 {
  HardwareConfig::SYNC_LATENCY * workload.inference_freq() * MS_PER_S
}
