use {
  super::*,
  tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

fn level(verbosity: u8) -> &'static str {
  match verbosity {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  }
}

/// `directives` (the value of `RUST_LOG`) take precedence over `verbosity`
/// when they parse.
fn filter(verbosity: u8, directives: Option<&str>) -> EnvFilter {
  directives
    .and_then(|directives| EnvFilter::try_new(directives).ok())
    .unwrap_or_else(|| EnvFilter::new(format!("typespeed={}", level(verbosity))))
}

/// Sends logs to `path`, since the terminal belongs to the interface.
pub(crate) fn init(verbosity: u8, path: &Path) -> Result {
  let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

  let filter = filter(verbosity, directives.as_deref());

  let file = OpenOptions::new()
    .create(true)
    .append(true)
    .open(path)
    .with_context(|| format!("failed to open log file {}", path.display()))?;

  tracing_subscriber::registry()
    .with(filter)
    .with(
      fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true),
    )
    .try_init()
    .map_err(|error| anyhow!("failed to initialize logging: {error}"))?;

  Ok(())
}
