use crate::model::{HardwareConfig, ModelError, Workload};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("cannot read scenario file {path:?}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("cannot parse scenario file {path:?}: {source}")]
  Parse {
    path: PathBuf,
    #[source]
    source: toml::de::Error,
  },

  #[error("missing required value '{field}', pass --{field} or set it in the scenario file")]
  Missing { field: &'static str },

  #[error(transparent)]
  Invalid(#[from] ModelError),
}

/// 硬件配置部分，所有字段均可缺省
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HardwareSection {
  pub cpu_dies: Option<u32>,
  pub cpu_cores: Option<u32>,
  pub npu_dies: Option<u32>,
  pub npu_cores: Option<u32>,
  pub interconnect_bw: Option<f64>,
  pub memory_bw: Option<f64>,
}

/// 负载配置部分
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct WorkloadSection {
  pub cpu_flops: Option<f64>,
  pub npu_flops: Option<f64>,
  pub inference_freq: Option<f64>,
  pub linux_dmips: Option<f64>,
  pub data_size: Option<f64>,
}

/// 统一的场景配置
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
  #[serde(default)]
  pub hardware: HardwareSection,
  #[serde(default)]
  pub workload: WorkloadSection,
}

/// 从指定文件加载配置
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigError> {
  let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
    path: path.to_path_buf(),
    source,
  })?;

  toml::from_str::<AppConfig>(&content).map_err(|source| ConfigError::Parse {
    path: path.to_path_buf(),
    source,
  })
}

/// 合并两个配置（后者覆盖前者）
pub fn merge_config(mut base: AppConfig, override_config: AppConfig) -> AppConfig {
  let hw = override_config.hardware;
  base.hardware.cpu_dies = hw.cpu_dies.or(base.hardware.cpu_dies);
  base.hardware.cpu_cores = hw.cpu_cores.or(base.hardware.cpu_cores);
  base.hardware.npu_dies = hw.npu_dies.or(base.hardware.npu_dies);
  base.hardware.npu_cores = hw.npu_cores.or(base.hardware.npu_cores);
  base.hardware.interconnect_bw = hw.interconnect_bw.or(base.hardware.interconnect_bw);
  base.hardware.memory_bw = hw.memory_bw.or(base.hardware.memory_bw);

  let wl = override_config.workload;
  base.workload.cpu_flops = wl.cpu_flops.or(base.workload.cpu_flops);
  base.workload.npu_flops = wl.npu_flops.or(base.workload.npu_flops);
  base.workload.inference_freq = wl.inference_freq.or(base.workload.inference_freq);
  base.workload.linux_dmips = wl.linux_dmips.or(base.workload.linux_dmips);
  base.workload.data_size = wl.data_size.or(base.workload.data_size);

  base
}

fn require<T>(value: Option<T>, field: &'static str) -> Result<T, ConfigError> {
  value.ok_or(ConfigError::Missing { field })
}

impl AppConfig {
  /// 验证配置并构造模型输入
  pub fn to_model(&self) -> Result<(HardwareConfig, Workload), ConfigError> {
    let hw = &self.hardware;
    let hardware = HardwareConfig::new(
      require(hw.cpu_dies, "cpu_dies")?,
      require(hw.cpu_cores, "cpu_cores")?,
      require(hw.npu_dies, "npu_dies")?,
      require(hw.npu_cores, "npu_cores")?,
      require(hw.interconnect_bw, "interconnect_bw")?,
      require(hw.memory_bw, "memory_bw")?,
    )?;

    let wl = &self.workload;
    let workload = Workload::new(
      require(wl.cpu_flops, "cpu_flops")?,
      require(wl.npu_flops, "npu_flops")?,
      require(wl.inference_freq, "inference_freq")?,
      require(wl.linux_dmips, "linux_dmips")?,
      require(wl.data_size, "data_size")?,
    )?;

    Ok((hardware, workload))
  }
}

/// 加载并合并配置
///
/// 流程：
/// 1. 如果提供了场景文件，加载它
/// 2. 应用CLI参数覆写
/// 3. 验证并构造模型输入
pub fn load_and_merge_configs(
  scenario_path: Option<&Path>,
  cli: AppConfig,
) -> Result<(HardwareConfig, Workload), ConfigError> {
  let base = match scenario_path {
    Some(path) => load_config_file(path)?,
    None => AppConfig::default(),
  };

  merge_config(base, cli).to_model()
}
