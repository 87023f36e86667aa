use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing form field: {field}")]
    MissingField { field: String },

    #[error("Invalid form field '{field}' = '{value}': {reason}")]
    InvalidField {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Model artifact '{path}' is unusable: {message}")]
    ModelArtifactError { path: String, message: String },

    #[error("Prediction failed: {message}")]
    PredictionError { message: String },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Model,
    Io,
    Server,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PlannerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PlannerError::IoError(_) => ErrorCategory::Io,
            PlannerError::SerializationError(_) => ErrorCategory::Model,
            PlannerError::ConfigError { .. }
            | PlannerError::ConfigValidationError { .. }
            | PlannerError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PlannerError::MissingField { .. } | PlannerError::InvalidField { .. } => {
                ErrorCategory::Input
            }
            PlannerError::ModelArtifactError { .. } | PlannerError::PredictionError { .. } => {
                ErrorCategory::Model
            }
            PlannerError::ServerError { .. } => ErrorCategory::Server,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Model => match self {
                PlannerError::PredictionError { .. } => ErrorSeverity::Medium,
                _ => ErrorSeverity::High,
            },
            ErrorCategory::Io => ErrorSeverity::Medium,
            ErrorCategory::Server => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PlannerError::IoError(_) => {
                "Check that the file exists and the process can read it".to_string()
            }
            PlannerError::SerializationError(_) => {
                "Re-export the model artifact as JSON from the training pipeline".to_string()
            }
            PlannerError::ConfigError { .. } | PlannerError::ConfigValidationError { .. } => {
                "Review the TOML configuration file for syntax errors".to_string()
            }
            PlannerError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' in the configuration", field)
            }
            PlannerError::MissingField { field } => {
                format!("Fill in the '{}' field and submit again", field)
            }
            PlannerError::InvalidField { field, .. } => {
                format!("Enter a valid value for '{}'", field)
            }
            PlannerError::ModelArtifactError { path, .. } => {
                format!("Replace '{}' with an artifact exported for six input features", path)
            }
            PlannerError::PredictionError { .. } => {
                "Check that the classifier and label encoder were exported together".to_string()
            }
            PlannerError::ServerError { .. } => {
                "Check that the bind address is free and reachable".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Input => format!("Please check your input: {}", self),
            ErrorCategory::Model => format!("The prediction model could not be used: {}", self),
            ErrorCategory::Io => format!("A file could not be read: {}", self),
            ErrorCategory::Server => format!("The web server could not start: {}", self),
        }
    }

    pub fn missing_field(field: &str) -> Self {
        PlannerError::MissingField {
            field: field.to_string(),
        }
    }

    pub fn invalid_field(field: &str, value: &str, reason: impl Into<String>) -> Self {
        PlannerError::InvalidField {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
