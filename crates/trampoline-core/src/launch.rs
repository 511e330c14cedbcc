use std::{
  convert::Infallible,
  ffi::{CString, OsString},
  os::unix::ffi::OsStringExt,
  path::{Path, PathBuf},
};

use nix::unistd::execv;
use snafu::ResultExt;
use tracing::{debug, trace, warn};

use crate::{
  config::LaunchConfig,
  error::{ExecSnafu, InvalidArgumentSnafu, LaunchError},
  privilege::normalize_credentials,
};

/// A prepared hand-over to the target: its path and the argument vector it
/// will receive, both already in the form `execv` wants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launch {
  path: PathBuf,
  target: CString,
  argv: Vec<CString>,
}

impl Launch {
  /// Prepare a launch of `config`'s target with `argv` passed through verbatim,
  /// argv[0] included.
  pub fn new<I>(config: &LaunchConfig, argv: I) -> Result<Self, LaunchError>
  where
    I: IntoIterator<Item = OsString>,
  {
    let path = config.target_path();
    // LaunchConfig rejects NUL in both the directory and the file name.
    let target = CString::new(path.clone().into_os_string().into_vec())
      .expect("validated target path contains no NUL");
    let argv = argv
      .into_iter()
      .enumerate()
      .map(|(index, arg)| CString::new(arg.into_vec()).context(InvalidArgumentSnafu { index }))
      .collect::<Result<Vec<_>, _>>()?;
    debug!("prepared launch of {}", path.display());
    Ok(Self { path, target, argv })
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn target(&self) -> &CString {
    &self.target
  }

  pub fn argv(&self) -> &[CString] {
    &self.argv
  }

  /// Normalize credentials, then replace the process image with the target.
  ///
  /// Only returns if something went wrong.
  pub fn exec(self) -> Result<Infallible, LaunchError> {
    normalize_credentials()?;
    trace!("exec {:?} with argv {:?}", self.target, self.argv);
    let Err(errno) = execv(&self.target, &self.argv);
    warn!("exec {} failed: {errno}", self.path.display());
    Err(errno).context(ExecSnafu { path: self.path })
  }
}

/// Hand the process over to the target named by `config`, forwarding `argv`.
pub fn launch<I>(config: &LaunchConfig, argv: I) -> Result<Infallible, LaunchError>
where
  I: IntoIterator<Item = OsString>,
{
  Launch::new(config, argv)?.exec()
}
