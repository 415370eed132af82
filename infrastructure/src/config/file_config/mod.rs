//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file and
//! are deserialized directly. Every section and field has a default, so a
//! missing file and an empty file behave the same.

mod backend;
mod logging;
mod output;
mod repl;

pub use backend::FileBackendConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend connection settings
    pub backend: FileBackendConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Transcript logging settings
    pub logging: FileLoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[backend]
base_url = "http://summarizer.internal:8080"
timeout_secs = 300

[repl]
show_progress = false
history_file = "~/.local/share/recap/history.txt"

[output]
color = false
raw = true

[logging]
conversation_log = "/tmp/recap.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.backend.base_url, "http://summarizer.internal:8080");
        assert_eq!(config.backend.timeout_secs, 300);
        // Unset fields keep their defaults
        assert_eq!(config.backend.connect_timeout_secs, 10);
        assert!(!config.repl.show_progress);
        assert!(!config.output.color);
        assert!(config.output.raw);
        assert_eq!(
            config.logging.conversation_log.as_deref(),
            Some("/tmp/recap.jsonl")
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[backend]
base_url = "http://localhost:9999"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.backend.base_url, "http://localhost:9999");
        // Defaults apply everywhere else
        assert!(config.repl.show_progress);
        assert!(config.output.color);
        assert!(!config.output.raw);
        assert!(config.logging.conversation_log.is_none());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.backend.base_url, "http://127.0.0.1:5000");
        assert!(config.repl.show_progress);
        assert!(config.repl.history_file.is_none());
        assert!(!config.output.raw);
    }
}
