use std::process::{Command, Output};

const REFERENCE_ARGS: [&str; 22] = [
  "--cpu_dies",
  "2",
  "--cpu_cores",
  "4",
  "--npu_dies",
  "1",
  "--npu_cores",
  "8",
  "--interconnect_bw",
  "64",
  "--memory_bw",
  "100",
  "--cpu_flops",
  "1e9",
  "--npu_flops",
  "2e10",
  "--inference_freq",
  "30",
  "--linux_dmips",
  "2000",
  "--data_size",
  "0.01",
];

fn run(args: &[&str]) -> Output {
  Command::new(env!("CARGO_BIN_EXE_chiplet-sim"))
    .args(args)
    .env_remove("RUST_LOG")
    .output()
    .expect("failed to launch chiplet-sim")
}

/// Reference args with one flag's value replaced
fn with_value(flag: &str, value: &str) -> Vec<String> {
  let mut args: Vec<String> = REFERENCE_ARGS.iter().map(|a| a.to_string()).collect();
  let pos = args.iter().position(|a| a == flag).unwrap();
  args[pos] = format!("{}={}", flag, value);
  args.remove(pos + 1);
  args
}

#[test]
fn test_table_on_stdout_logs_on_stderr() {
  let out = run(&REFERENCE_ARGS);
  assert!(out.status.success());

  let stdout = String::from_utf8(out.stdout).unwrap();
  let stderr = String::from_utf8(out.stderr).unwrap();
  assert!(stdout.starts_with("+-"));
  assert!(stdout.contains("Total Time (ms)"));
  assert!(stdout.contains(" 62.50 |"));
  assert!(!stdout.contains("INFO"));
  assert!(stderr.contains("Total time"));
}

#[test]
fn test_quiet_json_output() {
  let mut args = REFERENCE_ARGS.to_vec();
  args.extend(["--format", "json", "--quiet"]);
  let out = run(&args);
  assert!(out.status.success());

  let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
  assert_eq!(value["cpu_dies"], 2);
  assert!(out.stderr.is_empty());
}

#[test]
fn test_missing_flag_is_usage_error() {
  let out = run(&REFERENCE_ARGS[..20]);
  assert_eq!(out.status.code(), Some(2));
  assert!(out.stdout.is_empty());
}

#[test]
fn test_invalid_value_exits_2() {
  let args = with_value("--memory_bw", "0");
  let args: Vec<&str> = args.iter().map(String::as_str).collect();
  let out = run(&args);
  assert_eq!(out.status.code(), Some(2));
  assert!(out.stdout.is_empty());
  assert!(String::from_utf8(out.stderr).unwrap().contains("memory_bw"));
}

#[test]
fn test_overflowing_result_exits_2() {
  let mut args = with_value("--interconnect_bw", "1e-300");
  args = args.into_iter().map(|a| if a == "0.01" { "1e300".to_string() } else { a }).collect();
  let args: Vec<&str> = args.iter().map(String::as_str).collect();
  let out = run(&args);
  assert_eq!(out.status.code(), Some(2));
  assert!(out.stdout.is_empty());
  assert!(String::from_utf8(out.stderr).unwrap().contains("not finite"));
}

#[test]
fn test_scenario_file_with_override() {
  let scenario = concat!(env!("CARGO_MANIFEST_DIR"), "/configs/reference.toml");
  let out = run(&["--config", scenario, "--npu_dies", "2", "--format", "json"]);
  assert!(out.status.success());

  let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
  assert_eq!(value["npu_dies"], 2);
  assert_eq!(value["cpu_dies"], 2);
}
