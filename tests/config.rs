#[cfg(test)]
mod tests {
    use shiftbook::libs::config::{Config, ExportConfig, ShiftDefaults, CONFIG_FILE_NAME};
    use shiftbook::libs::data_storage::DataStorage;
    use shiftbook::libs::export::ExportFormat;
    use shiftbook::libs::shift::ShiftType;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Points the data directory at a temporary home.
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

    // A single test per binary: the data directory comes from process-wide
    // environment variables.
    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_lifecycle(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.shift_defaults().break_minutes, 60);
        assert!(!Config::delete().unwrap());

        let config = Config {
            shift: Some(ShiftDefaults {
                start: "06:00".to_string(),
                end: "14:00".to_string(),
                break_minutes: 30,
                shift_type: ShiftType::Leave,
            }),
            export: Some(ExportConfig {
                title: "Night team".to_string(),
                format: ExportFormat::Csv,
            }),
        };
        config.save().unwrap();
        assert!(DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap().exists());
        assert_eq!(Config::read().unwrap(), config);

        assert!(Config::delete().unwrap());
        assert_eq!(Config::read().unwrap(), Config::default());
    }
}
