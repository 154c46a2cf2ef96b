#[cfg(feature = "cli")]
pub mod cli;
pub mod file;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use file::FileConfig;

/// Base URL used when neither the command line nor a config file names one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
