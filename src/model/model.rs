use super::error::{check_finite_result, ModelError};
use super::estimators::{
  coherence_overhead, compute_time, interconnect_overhead, memory_time, sync_time, ComputeTimes, CpuBound,
};
use super::hardware::HardwareConfig;
use super::workload::Workload;
use serde::Serialize;

/// Average power per component (W)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerBreakdown {
  pub cpu_w: f64,
  pub npu_w: f64,
  pub interconnect_w: f64,
  pub coherence_w: f64,
  pub memory_w: f64,
  pub total_w: f64,
}

/// One evaluation of the package model. Times in ms, power in W.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimResult {
  pub cpu_dies: u32,
  pub cpu_cores_per_die: u32,
  pub npu_dies: u32,
  pub npu_cores_per_die: u32,
  pub cpu_time_ms: f64,
  pub cpu_time_linux_ms: f64,
  pub cpu_time_ai_ms: f64,
  pub cpu_bound: CpuBound,
  pub npu_time_ms: f64,
  pub interconnect_time_ms: f64,
  pub coherence_time_ms: f64,
  pub sync_time_ms: f64,
  pub memory_time_ms: f64,
  pub total_time_ms: f64,
  pub total_power_w: f64,
  pub power: PowerBreakdown,
}

/// Sum of every power term. No overlap discount is applied, unlike time.
pub fn power_rollup(config: &HardwareConfig, interconnect_w: f64, coherence_w: f64) -> PowerBreakdown {
  let cpu_w = config.total_cpu_cores() * HardwareConfig::CPU_POWER_PER_CORE;
  let npu_w = config.total_npu_cores() * HardwareConfig::NPU_POWER_PER_CORE;
  let memory_w = HardwareConfig::MEMORY_POWER;

  PowerBreakdown {
    cpu_w,
    npu_w,
    interconnect_w,
    coherence_w,
    memory_w,
    total_w: cpu_w + npu_w + interconnect_w + coherence_w + memory_w,
  }
}

/// Evaluate the package model once.
///
/// CPU and NPU run in parallel so only the slower one lands on the critical
/// path; interconnect, coherence, sync and memory are serialized after it.
///
/// Fails with `ModelError::NonFiniteResult` when valid but extreme inputs
/// (e.g. a tiny bandwidth with a huge data size) overflow a stage.
pub fn evaluate(config: &HardwareConfig, workload: &Workload) -> Result<SimResult, ModelError> {
  let ComputeTimes {
    cpu_time_linux_ms,
    cpu_time_ai_ms,
    cpu_time_ms,
    npu_time_ms,
    cpu_bound,
  } = compute_time(config, workload);
  let (interconnect_time_ms, interconnect_w) = interconnect_overhead(config, workload);
  let (coherence_time_ms, coherence_w) = coherence_overhead(config, workload);
  let sync_time_ms = sync_time(config, workload);
  let memory_time_ms = memory_time(config, workload);

  let total_time_ms =
    cpu_time_ms.max(npu_time_ms) + interconnect_time_ms + coherence_time_ms + sync_time_ms + memory_time_ms;

  let power = power_rollup(config, interconnect_w, coherence_w);

  for (field, value) in [
    ("cpu_time_ms", cpu_time_ms),
    ("npu_time_ms", npu_time_ms),
    ("interconnect_time_ms", interconnect_time_ms),
    ("coherence_time_ms", coherence_time_ms),
    ("sync_time_ms", sync_time_ms),
    ("memory_time_ms", memory_time_ms),
    ("total_time_ms", total_time_ms),
    ("interconnect_power_w", interconnect_w),
    ("coherence_power_w", coherence_w),
    ("total_power_w", power.total_w),
  ] {
    check_finite_result(field, value)?;
  }

  Ok(SimResult {
    cpu_dies: config.cpu_dies(),
    cpu_cores_per_die: config.cpu_cores_per_die(),
    npu_dies: config.npu_dies(),
    npu_cores_per_die: config.npu_cores_per_die(),
    cpu_time_ms,
    cpu_time_linux_ms,
    cpu_time_ai_ms,
    cpu_bound,
    npu_time_ms,
    interconnect_time_ms,
    coherence_time_ms,
    sync_time_ms,
    memory_time_ms,
    total_time_ms,
    total_power_w: power.total_w,
    power,
  })
}
