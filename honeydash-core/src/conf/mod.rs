mod error;
mod loader;
pub mod types;


pub use error::ConfigError;
pub use loader::{CONFIG_FILE_NAME, LOG_PATH_ENV, load_config, parse_config};
pub use types::{DashboardConfig, ServerConfig, SourceConfig};
