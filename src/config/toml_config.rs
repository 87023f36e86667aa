use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_range,
    validate_socket_addr, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub server: ServerConfig,
    pub model: ModelConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub classifier_path: String,
    pub label_encoder_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub ttl_seconds: u64,
    pub capacity: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Compact,
    Json,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:5000".to_string(),
            max_body_bytes: 16 * 1024,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            classifier_path: "models/diet_model.json".to_string(),
            label_encoder_path: "models/label_encoder.json".to_string(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "planner_session".to_string(),
            ttl_seconds: 600,
            capacity: 1024,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl PlannerConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PlannerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay verbatim.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").map_err(|e| PlannerError::ConfigError {
            message: format!("Invalid environment variable pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_socket_addr("server.bind", &self.server.bind)?;
        validate_range("server.max_body_bytes", self.server.max_body_bytes, 256, 1024 * 1024)?;

        validate_path("model.classifier_path", &self.model.classifier_path)?;
        validate_path("model.label_encoder_path", &self.model.label_encoder_path)?;

        validate_non_empty_string("session.cookie_name", &self.session.cookie_name)?;
        if !self
            .session
            .cookie_name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(PlannerError::InvalidConfigValueError {
                field: "session.cookie_name".to_string(),
                value: self.session.cookie_name.clone(),
                reason: "Cookie names may only contain letters, digits, '_' and '-'".to_string(),
            });
        }
        validate_range("session.ttl_seconds", self.session.ttl_seconds, 1, 86_400)?;
        validate_positive_number("session.capacity", self.session.capacity, 1)?;

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(PlannerError::InvalidConfigValueError {
                field: "logging.level".to_string(),
                value: self.logging.level.clone(),
                reason: format!("Valid levels: {}", LOG_LEVELS.join(", ")),
            });
        }

        Ok(())
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session.ttl_seconds)
    }

    pub fn session_capacity(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.session.capacity).unwrap_or(NonZeroUsize::MIN)
    }

    pub fn log_level(&self) -> String {
        self.logging.level.to_ascii_lowercase()
    }
}

impl Validate for PlannerConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[server]
bind = "0.0.0.0:8080"
max_body_bytes = 4096

[model]
classifier_path = "/srv/models/forest.json"
label_encoder_path = "/srv/models/classes.json"

[session]
cookie_name = "sid"
ttl_seconds = 120
capacity = 10

[logging]
level = "debug"
format = "json"
"#;

        let config = PlannerConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.server.max_body_bytes, 4096);
        assert_eq!(config.model.classifier_path, "/srv/models/forest.json");
        assert_eq!(config.session.cookie_name, "sid");
        assert_eq!(config.session_ttl(), Duration::from_secs(120));
        assert_eq!(config.session_capacity().get(), 10);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = PlannerConfig::from_toml_str("[server]\nbind = \"127.0.0.1:9000\"\n").unwrap();

        assert_eq!(config.server.bind, "127.0.0.1:9000");
        assert_eq!(config.server.max_body_bytes, 16 * 1024);
        assert_eq!(config.model.classifier_path, "models/diet_model.json");
        assert_eq!(config.session.cookie_name, "planner_session");
        assert_eq!(config.logging.format, LogFormat::Compact);
        assert!(config.validate().is_ok());

        let empty = PlannerConfig::from_toml_str("").unwrap();
        assert_eq!(empty.server.bind, "127.0.0.1:5000");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("DIET_PLANNER_TEST_MODEL_DIR", "/opt/models");

        let toml_content = r#"
[model]
classifier_path = "${DIET_PLANNER_TEST_MODEL_DIR}/forest.json"
label_encoder_path = "${DIET_PLANNER_TEST_UNSET_VAR}/classes.json"
"#;

        let config = PlannerConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.model.classifier_path, "/opt/models/forest.json");
        assert_eq!(
            config.model.label_encoder_path,
            "${DIET_PLANNER_TEST_UNSET_VAR}/classes.json"
        );

        std::env::remove_var("DIET_PLANNER_TEST_MODEL_DIR");
    }

    #[test]
    fn test_config_validation() {
        let bad_bind = PlannerConfig::from_toml_str("[server]\nbind = \"localhost\"\n").unwrap();
        assert!(bad_bind.validate().is_err());

        let zero_capacity = PlannerConfig::from_toml_str("[session]\ncapacity = 0\n").unwrap();
        assert!(zero_capacity.validate().is_err());

        let bad_cookie = PlannerConfig::from_toml_str("[session]\ncookie_name = \"a b\"\n").unwrap();
        assert!(bad_cookie.validate().is_err());

        let bad_level = PlannerConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(bad_level.validate().is_err());

        let empty_path = PlannerConfig::from_toml_str("[model]\nclassifier_path = \"\"\n").unwrap();
        assert!(empty_path.validate().is_err());
    }

    #[test]
    fn test_unknown_log_format_fails_to_parse() {
        let err = PlannerConfig::from_toml_str("[logging]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(err, PlannerError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_sample_config_is_valid() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/planner.toml");
        let config = PlannerConfig::from_file(path).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.model.classifier_path, "models/diet_model.json");
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[session]\nttl_seconds = 30\n")
            .unwrap();

        let config = PlannerConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.session.ttl_seconds, 30);
    }
}
