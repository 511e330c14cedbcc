//! Credential normalization performed before handing over to the target.

use nix::unistd::{Gid, Uid, getegid, geteuid, getresgid, getresuid, setresgid, setresuid};
use snafu::ResultExt;
use tracing::debug;

use crate::error::{LaunchError, NormalizeCredentialsSnafu};

/// A snapshot of the real, effective and saved ids of this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credentials {
  pub ruid: Uid,
  pub euid: Uid,
  pub suid: Uid,
  pub rgid: Gid,
  pub egid: Gid,
  pub sgid: Gid,
}

impl Credentials {
  pub fn current() -> Result<Self, nix::Error> {
    let uid = getresuid()?;
    let gid = getresgid()?;
    Ok(Self {
      ruid: uid.real,
      euid: uid.effective,
      suid: uid.saved,
      rgid: gid.real,
      egid: gid.effective,
      sgid: gid.saved,
    })
  }

  /// Whether real, effective and saved ids agree for both user and group.
  pub fn is_uniform(&self) -> bool {
    self.ruid == self.euid
      && self.euid == self.suid
      && self.rgid == self.egid
      && self.egid == self.sgid
  }
}

/// Set the real and saved user and group ids to the effective ones.
///
/// For a setuid binary this makes the elevated identity permanent for the
/// exec'd target. For an ordinary process it changes nothing. The group is
/// switched first: after the uid changes we may lose the right to do it.
///
/// Returns the `(uid, gid)` pair that was applied.
pub fn normalize_credentials() -> Result<(Uid, Gid), LaunchError> {
  let uid = geteuid();
  let gid = getegid();
  debug!("normalizing credentials to {uid}:{gid}");
  setresgid(gid, gid, gid).context(NormalizeCredentialsSnafu { uid, gid })?;
  setresuid(uid, uid, uid).context(NormalizeCredentialsSnafu { uid, gid })?;
  Ok((uid, gid))
}
