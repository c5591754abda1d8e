//! Error types for ebank-core
//!
//! Every error carries the message the user should see; the backend failure
//! that caused it, if any, is kept as the source for logging.

use ebank_client::ClientError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Form input rejected before reaching the backend
    ValidationError,
    /// Account lookup returned 404
    AccountNotFound,
    /// Backend answered with a failure status
    BackendError,
    /// Backend could not be reached or sent garbage
    BackendUnavailable,
    /// Configuration error
    ConfigError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::ValidationError => write!(f, "VALIDATION_ERROR"),
            ErrorCode::AccountNotFound => write!(f, "ACCOUNT_NOT_FOUND"),
            ErrorCode::BackendError => write!(f, "BACKEND_ERROR"),
            ErrorCode::BackendUnavailable => write!(f, "BACKEND_UNAVAILABLE"),
            ErrorCode::ConfigError => write!(f, "CONFIG_ERROR"),
        }
    }
}

/// Detailed error information for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Backend status, when the backend answered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_status: Option<u16>,
    /// Suggestions for resolution
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ErrorDetails {
    /// Create a new error detail
    pub fn new(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            backend_status: None,
            suggestions: vec![],
        }
    }

    pub fn with_backend_status(mut self, status: Option<u16>) -> Self {
        self.backend_status = status;
        self
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(status) = self.backend_status {
            write!(f, " (backend status {})", status)?;
        }
        if !self.suggestions.is_empty() {
            write!(f, "\nSuggestions:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n  - {}", suggestion)?;
            }
        }
        Ok(())
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Informational, e.g. an unknown account id
    Info,
    /// Warning - the user can fix it
    Warning,
    /// Error - operation failed
    Error,
    /// Critical - application cannot work
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "info"),
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
            ErrorSeverity::Critical => write!(f, "critical"),
        }
    }
}

/// Main error type for ebank-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("{message}")]
    ValidationError { message: String },

    #[error("Account not found")]
    AccountNotFound { id: String },

    #[error("{message}")]
    BackendError {
        message: String,
        #[source]
        source: ClientError,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::ValidationError {
            message: message.into(),
        }
    }

    pub fn backend(message: impl Into<String>, source: ClientError) -> Self {
        CoreError::BackendError {
            message: message.into(),
            source,
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::ValidationError { .. } => ErrorCode::ValidationError,
            CoreError::AccountNotFound { .. } => ErrorCode::AccountNotFound,
            CoreError::BackendError { source, .. } => match source {
                ClientError::Transport { .. } | ClientError::Decode { .. } | ClientError::InvalidUrl { .. } => {
                    ErrorCode::BackendUnavailable
                }
                ClientError::NotFound { .. } | ClientError::Status { .. } => ErrorCode::BackendError,
            },
            CoreError::ConfigError { .. } => ErrorCode::ConfigError,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self.code() {
            ErrorCode::ValidationError => ErrorSeverity::Warning,
            ErrorCode::AccountNotFound => ErrorSeverity::Info,
            ErrorCode::BackendError => ErrorSeverity::Error,
            ErrorCode::BackendUnavailable => ErrorSeverity::Error,
            ErrorCode::ConfigError => ErrorSeverity::Critical,
        }
    }

    /// Message shown to the user
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Status reported by the backend, if it answered
    pub fn backend_status(&self) -> Option<u16> {
        match self {
            CoreError::BackendError { source, .. } => source.status(),
            CoreError::AccountNotFound { .. } => Some(404),
            _ => None,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let mut details = ErrorDetails::new(self.code(), self.user_message())
            .with_backend_status(self.backend_status());

        match self {
            CoreError::AccountNotFound { id } => {
                details = details.with_suggestion(format!("Check that account '{}' exists.", id));
                details = details.with_suggestion(
                    "Use the /api/accounts endpoint to list all accounts.".to_string(),
                );
            }
            CoreError::BackendError { source, .. } => {
                if matches!(self.code(), ErrorCode::BackendUnavailable) {
                    details = details.with_suggestion(
                        "Check that the banking backend is running and backend.base_url is correct.".to_string(),
                    );
                }
                if let Some(body) = source.body_text() {
                    details = details.with_suggestion(format!("Backend said: {}", body));
                }
            }
            CoreError::ConfigError { message } => {
                details = details.with_suggestion(message.clone());
            }
            CoreError::ValidationError { .. } => {}
        }

        details
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

/// Reason text for a failed form submission: the backend's response body when
/// it sent one, the transport error otherwise, `fallback` for bare statuses.
pub(crate) fn submission_reason(error: &ClientError, fallback: &str) -> String {
    match error {
        ClientError::Status { .. } => error
            .body_text()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string()),
        ClientError::NotFound { .. } => fallback.to_string(),
        ClientError::Transport { .. } | ClientError::Decode { .. } | ClientError::InvalidUrl { .. } => {
            error.to_string()
        }
    }
}

/// Reason text for a failed page load; status bodies are not shown.
pub(crate) fn load_reason(error: &ClientError, fallback: &str) -> String {
    match error {
        ClientError::Status { .. } | ClientError::NotFound { .. } => fallback.to_string(),
        _ => error.to_string(),
    }
}

/// Error context for reporting
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Operation being performed
    pub operation: String,
    /// Additional context data
    pub data: serde_json::Value,
}

impl ErrorContext {
    /// Create a new error context
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            data: serde_json::json!({}),
        }
    }

    /// Add context data
    pub fn with_data(mut self, key: &str, value: serde_json::Value) -> Self {
        self.data[key] = value;
        self
    }
}

/// Error logger trait
pub trait ErrorLogger: Send + Sync {
    /// Log an error
    fn log_error(&self, error: &CoreError, context: &ErrorContext);
}

/// Default error logger using log crate
#[derive(Debug, Default)]
pub struct DefaultErrorLogger;

impl ErrorLogger for DefaultErrorLogger {
    fn log_error(&self, error: &CoreError, context: &ErrorContext) {
        match error.severity() {
            ErrorSeverity::Info | ErrorSeverity::Warning => log::warn!(
                target: "ebank::error",
                "[{}] {} - Operation: {} - Data: {}",
                error.code(),
                error,
                context.operation,
                context.data
            ),
            ErrorSeverity::Error | ErrorSeverity::Critical => {
                let cause = match error {
                    CoreError::BackendError { source, .. } => source.to_string(),
                    _ => String::new(),
                };
                log::error!(
                    target: "ebank::error",
                    "[{}] {} ({}) - Operation: {} - Data: {}",
                    error.code(),
                    error,
                    cause,
                    context.operation,
                    context.data
                )
            }
        }
    }
}

// ==================== Tests ====================
