//! Exit status of a trampoline whose exec failed.
//!
//! `execv(3)` returns `-1` on failure. The trampoline has always run that
//! return value through `WEXITSTATUS` and exited with the result, even
//! though the macro is meant for statuses reported by `waitpid`. The numeric
//! outcome is kept stable here so callers that check for it keep working.

use nix::libc;

/// What `execv(3)` returns when it fails.
pub const EXEC_FAILURE_SENTINEL: libc::c_int = -1;

/// Exit code after a failed exec: `WEXITSTATUS(-1)`, i.e. 255.
pub const EXEC_FAILURE_EXIT_CODE: i32 = wait_exit_status(EXEC_FAILURE_SENTINEL);

/// Exit code when the real and saved ids could not be set.
pub const CREDENTIALS_EXIT_CODE: i32 = 1;

/// The exit status byte of a wait status, as `WEXITSTATUS` extracts it.
pub const fn wait_exit_status(status: libc::c_int) -> i32 {
  (status & 0xff00) >> 8
}
