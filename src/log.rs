use std::ffi::OsString;

use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Diagnostics stay silent unless this variable holds a filter directive.
pub const LOG_ENV: &str = "TRAMPOLINE_LOG";

fn filter_from(value: Option<OsString>) -> Result<Option<EnvFilter>> {
  let Some(value) = value.filter(|v| !v.is_empty()) else {
    return Ok(None);
  };
  Ok(Some(EnvFilter::try_new(value.to_string_lossy())?))
}

/// Install a stderr subscriber if diagnostics were asked for.
///
/// Diagnostics must never get in the way of the launch, so a bad directive
/// only costs one line on stderr.
pub fn initialize_logging() {
  if let Err(e) = try_initialize_logging() {
    eprintln!("trampoline: ignoring {LOG_ENV}: {e}");
  }
}

/// Never touches the filesystem: we may be running setuid on behalf of
/// another user.
fn try_initialize_logging() -> Result<()> {
  let Some(filter) = filter_from(std::env::var_os(LOG_ENV))? else {
    return Ok(());
  };
  let stderr_subscriber = tracing_subscriber::fmt::layer()
    .with_writer(std::io::stderr)
    .with_target(false)
    .with_ansi(false)
    .with_filter(filter);
  tracing_subscriber::registry()
    .with(stderr_subscriber)
    .with(ErrorLayer::default())
    .try_init()?;
  Ok(())
}
