use libcli::system::shell::{ArgOverflow, DEFAULT_BANNER, DEFAULT_PROMPT, ShellConfig, ShellError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShellConfig::default();

        assert_eq!(config, ShellConfig::DEFAULT);
        assert_eq!(config.banner, DEFAULT_BANNER);
        assert_eq!(config.prompt, DEFAULT_PROMPT);
        assert!(config.echo);
        assert_eq!(config.arg_overflow, ArgOverflow::Reject);
    }

    #[test]
    fn test_from_json_full_document() {
        let json = r#"{"banner":"sensor-node v2","prompt":"$ ","echo":false,"arg_overflow":"truncate"}"#;
        let config = ShellConfig::from_json(json).unwrap();

        assert_eq!(config.banner, "sensor-node v2");
        assert_eq!(config.prompt, "$ ");
        assert!(!config.echo);
        assert_eq!(config.arg_overflow, ArgOverflow::Truncate);
    }

    #[test]
    fn test_from_json_missing_fields_use_defaults() {
        let config = ShellConfig::from_json(r#"{"echo":false}"#).unwrap();

        assert_eq!(config.banner, DEFAULT_BANNER);
        assert_eq!(config.prompt, DEFAULT_PROMPT);
        assert!(!config.echo);
        assert_eq!(config.arg_overflow, ArgOverflow::Reject);
    }

    #[test]
    fn test_from_json_empty_object() {
        let config = ShellConfig::from_json("{}").unwrap();
        assert_eq!(config, ShellConfig::DEFAULT);
    }

    #[test]
    fn test_from_json_malformed() {
        assert_eq!(
            ShellConfig::from_json(r#"{"echo":"#),
            Err(ShellError::InvalidConfig)
        );
        assert_eq!(ShellConfig::from_json("not json"), Err(ShellError::InvalidConfig));
    }

    #[test]
    fn test_from_json_unknown_policy() {
        assert_eq!(
            ShellConfig::from_json(r#"{"arg_overflow":"ignore"}"#),
            Err(ShellError::InvalidConfig)
        );
    }

    #[test]
    fn test_from_json_wrong_type() {
        assert_eq!(
            ShellConfig::from_json(r#"{"echo":"yes"}"#),
            Err(ShellError::InvalidConfig)
        );
    }
}
