const BINDIR_ENV: &str = "TRAMPOLINE_BINDIR";
const BINARY_ENV: &str = "TRAMPOLINE_BINARY";

fn main() {
  println!("cargo:rerun-if-env-changed={BINDIR_ENV}");
  println!("cargo:rerun-if-env-changed={BINARY_ENV}");

  if let Some(dir) = std::env::var_os(BINDIR_ENV) {
    let dir = dir
      .into_string()
      .unwrap_or_else(|_| panic!("{BINDIR_ENV} must be valid UTF-8"));
    assert!(!dir.is_empty(), "{BINDIR_ENV} must not be empty");
    assert!(!dir.contains('\0'), "{BINDIR_ENV} must not contain NUL");
  }

  if let Some(binary) = std::env::var_os(BINARY_ENV) {
    let binary = binary
      .into_string()
      .unwrap_or_else(|_| panic!("{BINARY_ENV} must be valid UTF-8"));
    assert!(
      !binary.is_empty() && binary != "." && binary != "..",
      "{BINARY_ENV} must name a file"
    );
    assert!(
      !binary.contains('/') && !binary.contains('\0'),
      "{BINARY_ENV} must be a bare file name, got {binary:?}"
    );
  }
}
