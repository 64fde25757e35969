use super::error::{check_count, check_positive, ModelError};

/// Chiplet package description: CPU dies, NPU dies, interconnect and memory
///
/// Only the topology and the two bandwidths are caller supplied, every
/// per-operation cost is a fixed associated constant.
#[derive(Clone, Debug, PartialEq)]
pub struct HardwareConfig {
  cpu_dies: u32,
  cpu_cores_per_die: u32,
  npu_dies: u32,
  npu_cores_per_die: u32,
  /// GB/s
  interconnect_bw: f64,
  /// GB/s
  memory_bw: f64,
}

impl HardwareConfig {
  /// Per-transfer interconnect latency (s)
  pub const INTERCONNECT_LATENCY: f64 = 50e-9;
  /// Interconnect energy (J/bit)
  pub const INTERCONNECT_POWER_PER_BIT: f64 = 2e-12;
  /// Latency of one coherence operation (s)
  pub const COHERENCE_LATENCY: f64 = 20e-9;
  /// W per coherence operation
  pub const COHERENCE_POWER_PER_OP: f64 = 0.05;
  /// Cross-die synchronization latency (s)
  pub const SYNC_LATENCY: f64 = 5e-6;
  /// GHz
  pub const CPU_FREQ: f64 = 2.5;
  /// GHz
  pub const NPU_FREQ: f64 = 1.5;
  pub const CPU_DMIPS_PER_CORE: f64 = 4000.0;
  pub const NPU_MACS_PER_CORE: f64 = 2048.0;
  /// W/core
  pub const CPU_POWER_PER_CORE: f64 = 3.0;
  /// W/core
  pub const NPU_POWER_PER_CORE: f64 = 1.0;
  /// W, drawn unconditionally
  pub const MEMORY_POWER: f64 = 5.0;

  pub fn new(
    cpu_dies: u32,
    cpu_cores_per_die: u32,
    npu_dies: u32,
    npu_cores_per_die: u32,
    interconnect_bw: f64,
    memory_bw: f64,
  ) -> Result<Self, ModelError> {
    Ok(Self {
      cpu_dies: check_count("cpu_dies", cpu_dies)?,
      cpu_cores_per_die: check_count("cpu_cores_per_die", cpu_cores_per_die)?,
      npu_dies: check_count("npu_dies", npu_dies)?,
      npu_cores_per_die: check_count("npu_cores_per_die", npu_cores_per_die)?,
      interconnect_bw: check_positive("interconnect_bw", interconnect_bw)?,
      memory_bw: check_positive("memory_bw", memory_bw)?,
    })
  }

  pub fn cpu_dies(&self) -> u32 {
    self.cpu_dies
  }

  pub fn cpu_cores_per_die(&self) -> u32 {
    self.cpu_cores_per_die
  }

  pub fn npu_dies(&self) -> u32 {
    self.npu_dies
  }

  pub fn npu_cores_per_die(&self) -> u32 {
    self.npu_cores_per_die
  }

  pub fn interconnect_bw(&self) -> f64 {
    self.interconnect_bw
  }

  pub fn memory_bw(&self) -> f64 {
    self.memory_bw
  }

  /// CPU cores across all CPU dies
  pub fn total_cpu_cores(&self) -> f64 {
    f64::from(self.cpu_dies) * f64::from(self.cpu_cores_per_die)
  }

  /// NPU cores across all NPU dies
  pub fn total_npu_cores(&self) -> f64 {
    f64::from(self.npu_dies) * f64::from(self.npu_cores_per_die)
  }
}
