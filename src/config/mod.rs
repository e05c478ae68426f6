pub mod config;
pub mod logging;
pub mod store;

pub use config::{load_config, print_schema, BackendConfig, Config, ConfigV1};
pub use logging::LoggingConfig;
pub use store::{FileStoreConfig, StoreConfig};
