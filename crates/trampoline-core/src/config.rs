//! Where the trampoline jumps to.
//!
//! The location is baked in at compile time through `TRAMPOLINE_BINDIR` and
//! `TRAMPOLINE_BINARY`. It is never read from the environment at run time.

use std::{
  ffi::{OsStr, OsString},
  os::unix::ffi::OsStrExt,
  path::{Component, Path, PathBuf},
};

use snafu::{Snafu, ensure};

pub const DEFAULT_BINDIR: &str = "/usr/local/bin";
pub const DEFAULT_BINARY: &str = "usage.pl";

/// Base directory the target lives in, as configured at build time.
pub const BINDIR: &str = match option_env!("TRAMPOLINE_BINDIR") {
  Some(dir) => dir,
  None => DEFAULT_BINDIR,
};

/// File name of the target, as configured at build time.
pub const BINARY: &str = match option_env!("TRAMPOLINE_BINARY") {
  Some(binary) => binary,
  None => DEFAULT_BINARY,
};

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum ConfigError {
  #[snafu(display("Base directory must not be empty."))]
  EmptyBaseDir,
  #[snafu(display("Base directory {} contains a NUL byte.", dir.display()))]
  NulInBaseDir { dir: PathBuf },
  #[snafu(display("Target binary name {binary:?} is not a single file name."))]
  InvalidBinaryName { binary: OsString },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
  base_dir: PathBuf,
  binary: OsString,
}

impl LaunchConfig {
  pub fn new(
    base_dir: impl Into<PathBuf>,
    binary: impl Into<OsString>,
  ) -> Result<Self, ConfigError> {
    let base_dir = base_dir.into();
    let binary = binary.into();
    ensure!(!base_dir.as_os_str().is_empty(), EmptyBaseDirSnafu);
    ensure!(
      !base_dir.as_os_str().as_bytes().contains(&0),
      NulInBaseDirSnafu { dir: base_dir }
    );
    ensure!(
      is_bare_file_name(&binary),
      InvalidBinaryNameSnafu { binary }
    );
    Ok(Self { base_dir, binary })
  }

  /// The configuration compiled into this build.
  ///
  /// `build.rs` rejects invalid overrides, so this cannot fail.
  pub fn builtin() -> Self {
    Self {
      base_dir: PathBuf::from(BINDIR),
      binary: OsString::from(BINARY),
    }
  }

  pub fn base_dir(&self) -> &Path {
    &self.base_dir
  }

  pub fn binary(&self) -> &OsStr {
    &self.binary
  }

  /// `<base_dir>/<binary>`
  pub fn target_path(&self) -> PathBuf {
    self.base_dir.join(&self.binary)
  }
}

impl Default for LaunchConfig {
  fn default() -> Self {
    Self::builtin()
  }
}

fn is_bare_file_name(name: &OsStr) -> bool {
  if name.as_bytes().contains(&0) {
    return false;
  }
  let mut components = Path::new(name).components();
  matches!(
    (components.next(), components.next()),
    (Some(Component::Normal(c)), None) if c == name
  )
}
