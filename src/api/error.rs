use thiserror::Error;

use super::Action;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Backend answered with a non-success status
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },

    /// Request never completed
    #[error("network error: {0}")]
    Network(String),

    #[error("could not encode request: {0}")]
    Payload(String),

    #[error("unexpected response body: {0}")]
    Decode(String),

    /// Same action already outstanding
    #[error("{0:?} is already in progress")]
    Busy(Action),

    /// A newer request of the same action was issued meanwhile
    #[error("{0:?} was superseded by a newer request")]
    Superseded(Action),
}

impl ApiError {
    /// Text for the transient notification
    pub fn user_message(&self, action: Action) -> String {
        match self {
            ApiError::Rejected { message: Some(message), .. } if action.shows_server_message() => {
                message.clone()
            }
            ApiError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            _ => action.fallback_message().to_string(),
        }
    }

    /// Duplicate or stale requests are dropped without telling the user
    pub fn is_silent(&self) -> bool {
        matches!(self, ApiError::Busy(_) | ApiError::Superseded(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_errors_surface_verbatim() {
        let err = ApiError::Rejected {
            status: 400,
            message: Some("Username already exists".into()),
        };
        assert_eq!(err.user_message(Action::Register), "Username already exists");
        assert_eq!(err.user_message(Action::LogFood), "Failed to log food");
    }

    #[test]
    fn test_missing_message_uses_fallback() {
        let err = ApiError::Rejected { status: 500, message: None };
        assert_eq!(err.user_message(Action::Login), "Login failed");
    }

    #[test]
    fn test_network_error_is_distinct() {
        let err = ApiError::Network("TypeError: Failed to fetch".into());
        assert_eq!(err.user_message(Action::GenerateMealPlan), NETWORK_ERROR_MESSAGE);
        assert!(!err.is_silent());
        assert!(ApiError::Busy(Action::Login).is_silent());
    }
}
