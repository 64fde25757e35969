use super::sim::mode::{OutputFormat, SimConfig};
use super::utils::report::{render_json, render_table};
use crate::model::estimators::{coherence_overhead, compute_time, interconnect_overhead, memory_time, sync_time};
use crate::model::{evaluate, HardwareConfig, ModelError, SimResult, Workload};
use log::{debug, info};
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
  #[error(transparent)]
  Model(#[from] ModelError),

  #[error("failed to write report: {0}")]
  Io(#[from] io::Error),
}

/// Evaluates one package configuration against one workload
pub struct Simulator {
  config: SimConfig,
  hardware: HardwareConfig,
  workload: Workload,
}

impl Simulator {
  pub fn new(config: SimConfig, hardware: HardwareConfig, workload: Workload) -> Self {
    Self {
      config,
      hardware,
      workload,
    }
  }

  pub fn run(&self) -> Result<SimResult, ModelError> {
    let hw = &self.hardware;
    let wl = &self.workload;
    info!(
      "Package: {} CPU die(s) x {} core(s), {} NPU die(s) x {} core(s), interconnect {} GB/s, memory {} GB/s",
      hw.cpu_dies(),
      hw.cpu_cores_per_die(),
      hw.npu_dies(),
      hw.npu_cores_per_die(),
      hw.interconnect_bw(),
      hw.memory_bw()
    );
    info!(
      "Workload: cpu_flops={} npu_flops={} freq={}/s linux_dmips={} data={} GB",
      wl.cpu_flops(),
      wl.npu_flops(),
      wl.inference_freq(),
      wl.linux_dmips(),
      wl.data_size_per_inference()
    );

    if log::log_enabled!(log::Level::Debug) {
      self.log_stages();
    }

    let result = evaluate(hw, wl)?;
    info!(
      "Total time {:.4} ms, total power {:.4} W",
      result.total_time_ms, result.total_power_w
    );
    Ok(result)
  }

  fn log_stages(&self) {
    let (hw, wl) = (&self.hardware, &self.workload);
    let compute = compute_time(hw, wl);
    debug!(
      "[compute] cpu linux={:.6} ms ai={:.6} ms bound={:?}, npu={:.6} ms",
      compute.cpu_time_linux_ms, compute.cpu_time_ai_ms, compute.cpu_bound, compute.npu_time_ms
    );
    let (ic_ms, ic_w) = interconnect_overhead(hw, wl);
    debug!("[interconnect] {:.6} ms, {:.6} W", ic_ms, ic_w);
    let (coh_ms, coh_w) = coherence_overhead(hw, wl);
    debug!("[coherence] {:.6} ms, {:.6} W", coh_ms, coh_w);
    debug!("[sync] {:.6} ms", sync_time(hw, wl));
    debug!("[memory] {:.6} ms", memory_time(hw, wl));
  }

  /// Evaluate and render the result to `out` in the configured format
  pub fn run_and_report<W: Write>(&self, out: &mut W) -> Result<SimResult, SimError> {
    let result = self.run()?;
    let rendered = match self.config.format {
      OutputFormat::Table => render_table(std::slice::from_ref(&result)),
      OutputFormat::Json => render_json(&result).map_err(io::Error::other)?,
    };
    writeln!(out, "{}", rendered)?;
    Ok(result)
  }
}
