//! Auth Endpoints
//!
//! `/login` and `/register`.

use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};

// ========================
// Payloads
// ========================

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub age: Option<u32>,
    pub gender: String,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub activity_level: String,
    pub dietary_goal: String,
    pub health_conditions: Vec<String>,
    pub preferred_cuisines: Vec<String>,
    pub allergies: Vec<String>,
    pub disliked_foods: Vec<String>,
    pub favorite_foods: Vec<String>,
}

/// Successful auth answer
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AuthRedirect {
    #[serde(default)]
    pub redirect: Option<String>,
}

impl AuthRedirect {
    pub const DEFAULT_TARGET: &'static str = "/dashboard";

    pub fn target(&self) -> &str {
        self.redirect
            .as_deref()
            .filter(|r| !r.is_empty())
            .unwrap_or(Self::DEFAULT_TARGET)
    }
}

/// Split a comma separated food list, dropping blanks
pub fn parse_food_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect()
}

// ========================
// Commands
// ========================

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthRedirect, ApiError> {
        self.post_json("/login", request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthRedirect, ApiError> {
        self.post_json("/register", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_food_list() {
        assert_eq!(
            parse_food_list(" mushrooms, ,olives,, liver "),
            vec!["mushrooms", "olives", "liver"]
        );
        assert!(parse_food_list("").is_empty());
    }

    #[test]
    fn test_redirect_target_defaults_to_dashboard() {
        assert_eq!(AuthRedirect::default().target(), "/dashboard");
        let redirect: AuthRedirect =
            serde_json::from_str(r#"{"message":"Login successful","redirect":"/profile"}"#)
                .unwrap();
        assert_eq!(redirect.target(), "/profile");
    }

    #[test]
    fn test_register_payload_uses_backend_field_names() {
        let request = RegisterRequest {
            username: "ana".into(),
            email: "ana@example.com".into(),
            password: "secret".into(),
            age: Some(31),
            gender: "female".into(),
            weight: Some(60.5),
            height: Some(168.0),
            activity_level: "moderate".into(),
            dietary_goal: "maintain".into(),
            health_conditions: vec![],
            preferred_cuisines: vec!["italian".into()],
            allergies: vec![],
            disliked_foods: vec![],
            favorite_foods: vec!["pasta".into()],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["activity_level"], "moderate");
        assert_eq!(value["preferred_cuisines"][0], "italian");
        assert_eq!(value["age"], 31);
    }
}
