use env_logger::{Builder, Env, Target};

/// Initialize the global logger on stderr.
///
/// `RUST_LOG` takes precedence; otherwise the level is `info`, or `warn`
/// in quiet mode. Safe to call more than once.
pub fn init_log(quiet: bool) {
  let default_level = if quiet { "warn" } else { "info" };
  // tests share one process, so only the first call installs the logger
  let _ = Builder::from_env(Env::default().default_filter_or(default_level))
    .target(Target::Stderr)
    .format_timestamp(None)
    .try_init();
}
