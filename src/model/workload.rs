use super::error::{check_demand, check_positive, ModelError};

/// Recurring inference demand plus a steady background OS load
#[derive(Clone, Debug, PartialEq)]
pub struct Workload {
  /// FLOPs per inference executed on the CPU dies
  cpu_flops: f64,
  /// FLOPs per inference executed on the NPU dies
  npu_flops: f64,
  /// inferences/s
  inference_freq: f64,
  /// concurrent background demand, not per inference
  linux_dmips: f64,
  /// GB moved per inference
  data_size_per_inference: f64,
}

impl Workload {
  pub fn new(
    cpu_flops: f64,
    npu_flops: f64,
    inference_freq: f64,
    linux_dmips: f64,
    data_size_per_inference: f64,
  ) -> Result<Self, ModelError> {
    Ok(Self {
      cpu_flops: check_demand("cpu_flops", cpu_flops)?,
      npu_flops: check_demand("npu_flops", npu_flops)?,
      inference_freq: check_positive("inference_freq", inference_freq)?,
      linux_dmips: check_demand("linux_dmips", linux_dmips)?,
      data_size_per_inference: check_demand("data_size_per_inference", data_size_per_inference)?,
    })
  }

  pub fn cpu_flops(&self) -> f64 {
    self.cpu_flops
  }

  pub fn npu_flops(&self) -> f64 {
    self.npu_flops
  }

  pub fn inference_freq(&self) -> f64 {
    self.inference_freq
  }

  pub fn linux_dmips(&self) -> f64 {
    self.linux_dmips
  }

  pub fn data_size_per_inference(&self) -> f64 {
    self.data_size_per_inference
  }
}
