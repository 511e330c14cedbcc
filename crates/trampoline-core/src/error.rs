use std::{ffi::NulError, path::PathBuf};

use nix::{
  errno::Errno,
  unistd::{Gid, Uid},
};
use snafu::Snafu;

use crate::exit::{CREDENTIALS_EXIT_CODE, EXEC_FAILURE_EXIT_CODE};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum LaunchError {
  #[snafu(display("Failed to set real and saved ids to effective ids {uid}:{gid}."))]
  NormalizeCredentials { uid: Uid, gid: Gid, source: Errno },
  #[snafu(display("Argument {index} contains a NUL byte."))]
  InvalidArgument { index: usize, source: NulError },
  #[snafu(display("Failed to exec {}.", path.display()))]
  Exec { path: PathBuf, source: Errno },
}

impl LaunchError {
  /// The code the trampoline exits with when launching fails.
  ///
  /// Everything that prevents the exec from happening, apart from the
  /// credential step, belongs to one "exec failed" class.
  pub fn exit_code(&self) -> i32 {
    match self {
      Self::NormalizeCredentials { .. } => CREDENTIALS_EXIT_CODE,
      Self::InvalidArgument { .. } | Self::Exec { .. } => EXEC_FAILURE_EXIT_CODE,
    }
  }

  pub fn errno(&self) -> Option<Errno> {
    match self {
      Self::NormalizeCredentials { source, .. } | Self::Exec { source, .. } => Some(*source),
      Self::InvalidArgument { .. } => None,
    }
  }
}
