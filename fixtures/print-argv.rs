use std::{
  io::Write,
  os::unix::ffi::OsStrExt,
};

// Writes every argument followed by a NUL byte, argv[0] included.
fn main() {
  let mut out = std::io::stdout().lock();
  for arg in std::env::args_os() {
    out.write_all(arg.as_bytes()).unwrap();
    out.write_all(b"\0").unwrap();
  }
  out.flush().unwrap();
}
