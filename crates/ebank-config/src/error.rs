//! Error types for ebank-config

use thiserror::Error;

/// Why a configuration could not be used
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Cannot read {path}: {message}")]
    IoError { path: String, message: String },

    #[error("Invalid YAML format: {message}")]
    InvalidYaml { message: String },

    #[error("Invalid field value: {field} - {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::FileNotFound { .. } => "FILE_NOT_FOUND",
            ConfigError::IoError { .. } => "IO_ERROR",
            ConfigError::InvalidYaml { .. } => "INVALID_YAML",
            ConfigError::InvalidValue { .. } => "INVALID_VALUE",
        }
    }

    /// Startup report: message, offending field and what to try next
    pub fn to_details(&self) -> ConfigErrorDetails {
        let (field, suggestions) = match self {
            ConfigError::FileNotFound { .. } => (
                None,
                vec![
                    "Check the --config path.".to_string(),
                    "Run with --print-default-config to generate a starting file.".to_string(),
                ],
            ),
            ConfigError::IoError { .. } => (
                None,
                vec!["Make sure the path is a regular file the server user can read.".to_string()],
            ),
            ConfigError::InvalidYaml { .. } => (
                None,
                vec!["Check indentation and quoting in the config file.".to_string()],
            ),
            ConfigError::InvalidValue { field, reason } => (Some(field.clone()), vec![reason.clone()]),
        };
        ConfigErrorDetails {
            code: self.code(),
            message: self.to_string(),
            field,
            suggestions,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigErrorDetails {
    pub code: &'static str,
    pub message: String,
    pub field: Option<String>,
    pub suggestions: Vec<String>,
}

impl std::fmt::Display for ConfigErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(field) = &self.field {
            write!(f, "\nField: {}", field)?;
        }
        for (i, suggestion) in self.suggestions.iter().enumerate() {
            if i == 0 {
                write!(f, "\nSuggestions:")?;
            }
            write!(f, "\n  - {}", suggestion)?;
        }
        Ok(())
    }
}
