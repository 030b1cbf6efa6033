#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use taplog::libs::config::{BackendPreference, Config, StorageConfig};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_lifecycle(_ctx: &mut ConfigTestContext) {
        // A fresh home has no file and reads as the default configuration.
        let config = Config::read().unwrap();
        assert!(config.storage.is_none());

        let written = Config {
            storage: Some(StorageConfig {
                backend: BackendPreference::Flat,
                data_dir: Some(PathBuf::from("/tmp/taplog-data")),
            }),
        };
        written.save().unwrap();

        let reread = Config::read().unwrap();
        let storage = reread.storage.unwrap();
        assert_eq!(storage.backend, BackendPreference::Flat);
        assert_eq!(storage.data_dir, Some(PathBuf::from("/tmp/taplog-data")));
    }

    #[test]
    fn test_backend_preference_serialization() {
        assert_eq!(serde_json::to_string(&BackendPreference::Auto).unwrap(), "\"auto\"");
        assert_eq!(serde_json::to_string(&BackendPreference::Sqlite).unwrap(), "\"sqlite\"");
        assert_eq!(serde_json::to_string(&BackendPreference::Flat).unwrap(), "\"flat\"");

        let parsed: BackendPreference = serde_json::from_str("\"sqlite\"").unwrap();
        assert_eq!(parsed, BackendPreference::Sqlite);
    }

    #[test]
    fn test_backend_preference_display() {
        assert_eq!(BackendPreference::Auto.to_string(), "auto");
        assert_eq!(BackendPreference::Sqlite.to_string(), "sqlite");
        assert_eq!(BackendPreference::Flat.to_string(), "flat");
    }

    #[test]
    fn test_missing_backend_defaults_to_auto() {
        let config: Config = serde_json::from_str(r#"{"storage": {}}"#).unwrap();
        assert_eq!(config.storage.unwrap().backend, BackendPreference::Auto);
    }
}
