use std::env;

use crate::domain::Severity;
use crate::error::LevelCtlError;

pub const DEFAULT_HTTP_PORT: u16 = 9600;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// HTTP server port (log level control + health)
    pub http_port: u16,
    /// Threshold the gate starts with; reset to this on every restart
    pub log_level: Severity,
}

impl Settings {
    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LevelCtlError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let http_port = match lookup("HTTP_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                LevelCtlError::Config(format!("HTTP_PORT must be a port number, got '{raw}': {e}"))
            })?,
            None => DEFAULT_HTTP_PORT,
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(raw) => raw
                .parse::<Severity>()
                .map_err(|e| LevelCtlError::Config(format!("LOG_LEVEL: {e}")))?,
            None => Severity::default(),
        };

        let settings = Settings {
            http_port,
            log_level,
        };

        // Validate settings before returning
        settings.validate()?;

        Ok(settings)
    }

    /// Validates the settings and returns an error if invalid.
    pub fn validate(&self) -> Result<(), LevelCtlError> {
        validate_port(self.http_port)
    }
}

/// Validates that the port is in valid range (1-65535).
fn validate_port(port: u16) -> Result<(), LevelCtlError> {
    if port == 0 {
        return Err(LevelCtlError::Config("Port cannot be 0".into()));
    }
    Ok(())
}

pub fn get_configuration() -> Result<Settings, LevelCtlError> {
    Settings::from_lookup(|name| env::var(name).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings.http_port, DEFAULT_HTTP_PORT);
        assert_eq!(settings.log_level, Severity::Info);
    }

    #[test]
    fn test_reads_port_and_level() {
        let settings =
            Settings::from_lookup(lookup_from(&[("HTTP_PORT", "8080"), ("LOG_LEVEL", "DEBUG")]))
                .unwrap();
        assert_eq!(settings.http_port, 8080);
        assert_eq!(settings.log_level, Severity::Debug);
    }

    #[test]
    fn test_invalid_log_level_fails() {
        let err = Settings::from_lookup(lookup_from(&[("LOG_LEVEL", "verbose")])).unwrap_err();
        assert!(err.to_string().contains("LOG_LEVEL"));
        assert!(err.to_string().contains("verbose"));
    }

    #[test]
    fn test_non_numeric_port_fails() {
        let err = Settings::from_lookup(lookup_from(&[("HTTP_PORT", "http")])).unwrap_err();
        assert!(err.to_string().contains("HTTP_PORT"));
    }

    #[test]
    fn test_validate_port_valid() {
        assert!(validate_port(80).is_ok());
        assert!(validate_port(9600).is_ok());
        assert!(validate_port(65535).is_ok());
        assert!(validate_port(1).is_ok());
    }

    #[test]
    fn test_validate_port_zero_fails() {
        let result = validate_port(0);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Port cannot be 0"));
    }

    #[test]
    fn test_zero_port_from_env_fails() {
        assert!(Settings::from_lookup(lookup_from(&[("HTTP_PORT", "0")])).is_err());
    }
}
