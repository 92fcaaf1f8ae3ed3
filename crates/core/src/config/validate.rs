use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Base URL is non-empty and uses http or https
/// - No timeout is 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let base_url = config.server.base_url.trim();
    if base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "server.base_url cannot be empty".to_string(),
        ));
    }
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(ConfigError::ValidationError(format!(
            "server.base_url must start with http:// or https:// (got {})",
            base_url
        )));
    }

    let timeouts = &config.timeouts;
    for (name, value) in [
        ("connect_secs", timeouts.connect_secs),
        ("read_secs", timeouts.read_secs),
        ("write_secs", timeouts.write_secs),
    ] {
        if value == 0 {
            return Err(ConfigError::ValidationError(format!(
                "timeouts.{} cannot be 0",
                name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ServerConfig, TimeoutConfig};

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_empty_base_url_fails() {
        let config = Config {
            server: ServerConfig {
                base_url: "  ".to_string(),
            },
            timeouts: TimeoutConfig::default(),
        };
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_validate_unsupported_scheme_fails() {
        let config = Config {
            server: ServerConfig {
                base_url: "ftp://10.0.2.2:8000".to_string(),
            },
            timeouts: TimeoutConfig::default(),
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("http://"));
    }

    #[test]
    fn test_validate_zero_timeout_fails() {
        let config = Config {
            server: ServerConfig::default(),
            timeouts: TimeoutConfig {
                connect_secs: 120,
                read_secs: 0,
                write_secs: 120,
            },
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("timeouts.read_secs"));
    }
}
