//! Error types for ebank-client

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Backend unreachable: {message}")]
    Transport { message: String },

    #[error("Invalid response body: {message}")]
    Decode { message: String },

    #[error("Invalid backend URL: {url}")]
    InvalidUrl { url: String },
}

impl ClientError {
    /// HTTP status reported by the backend, if the request got that far
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::NotFound { .. } => Some(404),
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Response body text of a failed request, when the backend sent one
    pub fn body_text(&self) -> Option<&str> {
        match self {
            ClientError::Status { body, .. } if !body.trim().is_empty() => Some(body.trim()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound { .. })
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ClientError::Decode {
                message: error.to_string(),
            }
        } else {
            ClientError::Transport {
                message: error.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_and_body_text() {
        let err = ClientError::Status {
            status: 400,
            body: "  Balance not sufficient \n".to_string(),
        };
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.body_text(), Some("Balance not sufficient"));

        let empty = ClientError::Status {
            status: 500,
            body: "   ".to_string(),
        };
        assert_eq!(empty.body_text(), None);
    }

    #[test]
    fn test_not_found() {
        let err = ClientError::NotFound {
            resource: "account ACC-1".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "Not found: account ACC-1");
    }
}
