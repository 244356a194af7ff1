//! Frontend Configuration
//!
//! Defaults can be overridden by the page through a `window.nutriConfig` object.

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::models::NutritionTargets;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix for backend endpoints ("" = same origin)
    pub api_base: String,
    /// localStorage key of the recently viewed list
    pub recently_viewed_key: String,
    pub recently_viewed_capacity: usize,
    /// Entries shown in the recently viewed panel
    pub recently_viewed_display: usize,
    pub notification_timeout_ms: u32,
    pub redirect_delay_ms: u32,
    pub default_plan_days: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            recently_viewed_key: "recentlyViewed".to_string(),
            recently_viewed_capacity: 10,
            recently_viewed_display: 5,
            notification_timeout_ms: 5000,
            redirect_delay_ms: 1000,
            default_plan_days: 7,
        }
    }
}

impl AppConfig {
    /// Read `window.nutriConfig`, then a `<script id="nutri-config">` JSON
    /// block, falling back to defaults
    pub fn load() -> Self {
        if let Some(value) = window_property("nutriConfig") {
            return serde_wasm_bindgen::from_value::<AppConfig>(value)
                .map(AppConfig::sanitized)
                .unwrap_or_else(|e| {
                    log::warn!("Ignoring malformed nutriConfig: {}", e);
                    AppConfig::default()
                });
        }
        match inline_config_block() {
            Some(json) => AppConfig::from_json(&json),
            None => AppConfig::default(),
        }
    }

    /// Parse a JSON config document
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str::<AppConfig>(json)
            .map(AppConfig::sanitized)
            .unwrap_or_else(|e| {
                log::warn!("Ignoring malformed config: {}", e);
                AppConfig::default()
            })
    }

    fn sanitized(mut self) -> Self {
        let defaults = AppConfig::default();
        if self.recently_viewed_capacity == 0 {
            self.recently_viewed_capacity = defaults.recently_viewed_capacity;
        }
        if self.recently_viewed_key.trim().is_empty() {
            self.recently_viewed_key = defaults.recently_viewed_key;
        }
        self.recently_viewed_display =
            self.recently_viewed_display.min(self.recently_viewed_capacity);
        if self.default_plan_days == 0 {
            self.default_plan_days = defaults.default_plan_days;
        }
        self.api_base = self.api_base.trim_end_matches('/').to_string();
        self
    }
}

/// Server-rendered targets from `window.userNutritionStats`, if present
pub fn load_nutrition_targets() -> Option<NutritionTargets> {
    let value = window_property("userNutritionStats")?;
    match serde_wasm_bindgen::from_value::<NutritionTargets>(value) {
        Ok(targets) => Some(targets),
        Err(e) => {
            log::warn!("Ignoring malformed userNutritionStats: {}", e);
            None
        }
    }
}

fn inline_config_block() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id("nutri-config")?
        .text_content()
}

fn window_property(name: &str) -> Option<JsValue> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name)).ok()?;
    if value.is_undefined() || value.is_null() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"api_base":"/api/","notification_timeout_ms":3000}"#);
        assert_eq!(config.api_base, "/api");
        assert_eq!(config.notification_timeout_ms, 3000);
        assert_eq!(config.recently_viewed_key, "recentlyViewed");
        assert_eq!(config.recently_viewed_capacity, 10);
    }

    #[test]
    fn test_malformed_config_falls_back() {
        assert_eq!(AppConfig::from_json("{not json"), AppConfig::default());
    }

    #[test]
    fn test_display_never_exceeds_capacity() {
        let config =
            AppConfig::from_json(r#"{"recently_viewed_capacity":3,"recently_viewed_display":5}"#);
        assert_eq!(config.recently_viewed_display, 3);

        let config = AppConfig::from_json(r#"{"recently_viewed_capacity":0}"#);
        assert_eq!(config.recently_viewed_capacity, 10);
    }
}
