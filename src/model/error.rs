use thiserror::Error;

/// Rejected model input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
  /// Die or core count of zero
  #[error("{field} must be a positive integer, got {value}")]
  NonPositiveCount { field: &'static str, value: u32 },

  /// Bandwidth or rate that is zero, negative or not finite
  #[error("{field} must be a positive finite number, got {value}")]
  NonPositiveValue { field: &'static str, value: f64 },

  /// Demand volume that is negative or not finite
  #[error("{field} must be a non-negative finite number, got {value}")]
  NegativeDemand { field: &'static str, value: f64 },

  /// Inputs are individually valid but an output overflows
  #[error("{field} is not finite for these inputs, check bandwidth and demand magnitudes")]
  NonFiniteResult { field: &'static str },
}

pub(crate) fn check_count(field: &'static str, value: u32) -> Result<u32, ModelError> {
  if value == 0 {
    return Err(ModelError::NonPositiveCount { field, value });
  }
  Ok(value)
}

pub(crate) fn check_positive(field: &'static str, value: f64) -> Result<f64, ModelError> {
  if !value.is_finite() || value <= 0.0 {
    return Err(ModelError::NonPositiveValue { field, value });
  }
  Ok(value)
}

pub(crate) fn check_demand(field: &'static str, value: f64) -> Result<f64, ModelError> {
  if !value.is_finite() || value < 0.0 {
    return Err(ModelError::NegativeDemand { field, value });
  }
  // -0.0 passes the sign check, fold it to 0.0
  Ok(value + 0.0)
}

pub(crate) fn check_finite_result(field: &'static str, value: f64) -> Result<f64, ModelError> {
  if !value.is_finite() {
    return Err(ModelError::NonFiniteResult { field });
  }
  Ok(value)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_check_count() {
    assert_eq!(check_count("cpu_dies", 2), Ok(2));
    assert_eq!(
      check_count("cpu_dies", 0),
      Err(ModelError::NonPositiveCount { field: "cpu_dies", value: 0 })
    );
  }

  #[test]
  fn test_check_positive_rejects_zero_and_nan() {
    assert!(check_positive("memory_bw", 0.0).is_err());
    assert!(check_positive("memory_bw", -1.0).is_err());
    assert!(check_positive("memory_bw", f64::NAN).is_err());
    assert!(check_positive("memory_bw", f64::INFINITY).is_err());
    assert_eq!(check_positive("memory_bw", 100.0), Ok(100.0));
  }

  #[test]
  fn test_check_demand_allows_zero() {
    assert_eq!(check_demand("data_size", 0.0), Ok(0.0));
    assert!(check_demand("data_size", -0.5).is_err());
  }

  #[test]
  fn test_check_demand_folds_negative_zero() {
    let value = check_demand("npu_flops", -0.0).unwrap();
    assert_eq!(value, 0.0);
    assert!(value.is_sign_positive());
  }

  #[test]
  fn test_check_finite_result() {
    assert_eq!(check_finite_result("total_time_ms", 1.5), Ok(1.5));
    assert_eq!(
      check_finite_result("total_time_ms", f64::INFINITY),
      Err(ModelError::NonFiniteResult { field: "total_time_ms" })
    );
    assert!(check_finite_result("total_power_w", f64::NAN).is_err());
  }

  #[test]
  fn test_error_message() {
    let err = ModelError::NonPositiveValue { field: "interconnect_bw", value: 0.0 };
    assert_eq!(err.to_string(), "interconnect_bw must be a positive finite number, got 0");
  }
}
