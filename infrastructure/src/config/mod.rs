//! Configuration: raw TOML structures and the multi-source loader.

pub mod file_config;
pub mod loader;

pub use file_config::{
    FileBackendConfig, FileConfig, FileLoggingConfig, FileOutputConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
