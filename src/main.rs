mod log;

use std::process;

use tracing::error;
use trampoline_core::{LaunchConfig, launch};

fn main() -> color_eyre::Result<()> {
  color_eyre::install()?;
  log::initialize_logging();

  let config = LaunchConfig::builtin();
  let Err(err) = launch(&config, std::env::args_os());
  error!(errno = ?err.errno(), "{err}");
  process::exit(err.exit_code());
}
