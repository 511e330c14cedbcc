pub mod config;
pub mod error;
pub mod exit;
pub mod launch;
pub mod privilege;

pub use config::{ConfigError, LaunchConfig};
pub use error::LaunchError;
pub use launch::{Launch, launch};
pub use privilege::{Credentials, normalize_credentials};
