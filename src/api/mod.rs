//! Backend HTTP Client
//!
//! One-shot JSON request/response wrappers, organized by domain.
//! No retries, no timeouts: each call either completes or surfaces an
//! [`ApiError`] that the caller turns into a notification.

mod auth;
mod error;
mod foods;
mod meal_plan;
mod profile;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

// Re-export all public items
pub use auth::*;
pub use error::*;
pub use foods::*;
pub use meal_plan::*;
pub use profile::*;

/// User actions that reach the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Login,
    Register,
    Recommend,
    LoadFavorites,
    ToggleFavorite,
    LogFood,
    GenerateMealPlan,
    SaveDayPlan,
    UpdateProfile,
}

impl Action {
    /// Message shown when the backend rejects the request
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Action::Login => "Login failed",
            Action::Register => "Registration failed",
            Action::Recommend => "Failed to get recommendations",
            Action::LoadFavorites => "Failed to load favorites",
            Action::ToggleFavorite => "Failed to update favorites",
            Action::LogFood => "Failed to log food",
            Action::GenerateMealPlan => "Failed to generate meal plan",
            Action::SaveDayPlan => "Failed to save meal plan",
            Action::UpdateProfile => "Failed to update profile",
        }
    }

    /// Auth forms echo the backend's own error text
    pub fn shows_server_message(&self) -> bool {
        matches!(self, Action::Login | Action::Register)
    }
}

/// Generic success body (`{"message": ...}`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    /// `base` is prepended to every endpoint path ("" = same origin)
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        log::debug!("POST {}", url);
        let request = Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::Payload(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_response(status, &text)
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let url = self.url(path);
        log::debug!("GET {}", url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_response(status, &text)
    }
}

/// Turn a completed exchange into a typed body or a rejection
pub(crate) fn decode_response<R: DeserializeOwned>(status: u16, body: &str) -> Result<R, ApiError> {
    if (200..300).contains(&status) {
        let body = if body.trim().is_empty() { "{}" } else { body };
        return serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()));
    }
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty());
    Err(ApiError::Rejected { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_body_decoded() {
        let ack: Ack = decode_response(200, r#"{"message":"Food logged successfully"}"#).unwrap();
        assert_eq!(ack.message.as_deref(), Some("Food logged successfully"));

        let empty: Ack = decode_response(204, "").unwrap();
        assert_eq!(empty, Ack::default());
    }

    #[test]
    fn test_rejection_carries_server_error() {
        let err = decode_response::<Ack>(401, r#"{"error":"Invalid credentials"}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected { status: 401, message: Some("Invalid credentials".into()) }
        );
    }

    #[test]
    fn test_rejection_with_html_body_has_no_message() {
        let err = decode_response::<Ack>(500, "<html>oops</html>").unwrap_err();
        assert_eq!(err, ApiError::Rejected { status: 500, message: None });
    }

    #[test]
    fn test_malformed_success_body_is_decode_error() {
        let err = decode_response::<Vec<String>>(200, r#"{"favorites":1}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_url_joins_base() {
        assert_eq!(ApiClient::new("").url("/login"), "/login");
        assert_eq!(
            ApiClient::new("https://food.example").url("/login"),
            "https://food.example/login"
        );
    }
}
