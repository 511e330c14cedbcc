use std::{env, process};

use trampoline_core::{LaunchConfig, launch};

// Same as the trampoline, but the target is picked by the test at run time.
fn main() {
  let dir = env::var_os("LAUNCH_FIXTURE_DIR").expect("LAUNCH_FIXTURE_DIR not set");
  let binary = env::var_os("LAUNCH_FIXTURE_BINARY").expect("LAUNCH_FIXTURE_BINARY not set");
  let config = LaunchConfig::new(dir, binary).unwrap();
  let Err(err) = launch(&config, env::args_os());
  eprintln!("{err}");
  process::exit(err.exit_code());
}
