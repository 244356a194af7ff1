//! Food Endpoints
//!
//! Recommendations, favorites and food logging.

use serde::{Deserialize, Serialize};

use super::{Ack, ApiClient, ApiError};
use crate::meal_plan::DayPlan;
use crate::models::Recommendation;

// ========================
// Payloads
// ========================

/// Filter value meaning "no restriction"
pub const ANY_FILTER: &str = "all";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationQuery {
    pub meal_type: String,
    pub category: Option<String>,
    pub cuisine: Option<String>,
    pub sort_by: String,
}

impl RecommendationQuery {
    /// Build from raw select values; "all" becomes null for category and cuisine
    pub fn from_filters(meal_type: &str, category: &str, cuisine: &str, sort_by: &str) -> Self {
        let restrict = |value: &str| {
            let value = value.trim();
            if value.is_empty() || value == ANY_FILTER {
                None
            } else {
                Some(value.to_string())
            }
        };
        let meal_type = if meal_type.trim().is_empty() { ANY_FILTER } else { meal_type.trim() };
        let sort_by = if sort_by.trim().is_empty() { "score" } else { sort_by.trim() };
        Self {
            meal_type: meal_type.to_string(),
            category: restrict(category),
            cuisine: restrict(cuisine),
            sort_by: sort_by.to_string(),
        }
    }
}

impl Default for RecommendationQuery {
    fn default() -> Self {
        Self::from_filters(ANY_FILTER, ANY_FILTER, ANY_FILTER, "score")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodLogEntry {
    pub food_name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub meal_type: String,
}

impl FoodLogEntry {
    pub fn new(food: &Recommendation, meal_type: &str) -> Self {
        Self {
            food_name: food.name.clone(),
            calories: food.calories,
            protein: food.protein,
            carbs: food.carbs,
            fat: food.fat,
            meal_type: meal_type.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ToggleFavoriteArgs<'a> {
    food_name: &'a str,
}

#[derive(Serialize)]
struct SaveDayPlanArgs<'a> {
    day: &'a str,
    plan: &'a DayPlan,
}

#[derive(Deserialize)]
struct RecommendationsBody {
    #[serde(default)]
    recommendations: Vec<Recommendation>,
}

#[derive(Deserialize)]
struct FavoritesBody {
    #[serde(default)]
    favorites: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ToggleFavoriteResult {
    #[serde(default)]
    pub message: String,
    /// "added" or "removed"
    #[serde(default)]
    pub action: Option<String>,
}

impl ToggleFavoriteResult {
    /// Favorite state the server reports after the toggle, if it says
    pub fn now_favorite(&self) -> Option<bool> {
        match self.action.as_deref() {
            Some("added") => Some(true),
            Some("removed") => Some(false),
            _ => None,
        }
    }
}

// ========================
// Commands
// ========================

impl ApiClient {
    pub async fn get_recommendations(
        &self,
        query: &RecommendationQuery,
    ) -> Result<Vec<Recommendation>, ApiError> {
        let body: RecommendationsBody = self.post_json("/get_recommendations", query).await?;
        Ok(body.recommendations)
    }

    pub async fn get_favorites(&self) -> Result<Vec<String>, ApiError> {
        let body: FavoritesBody = self.get_json("/get_favorites").await?;
        Ok(body.favorites)
    }

    pub async fn toggle_favorite(&self, food_name: &str) -> Result<ToggleFavoriteResult, ApiError> {
        self.post_json("/toggle_favorite", &ToggleFavoriteArgs { food_name }).await
    }

    pub async fn log_food(&self, entry: &FoodLogEntry) -> Result<Ack, ApiError> {
        self.post_json("/log_food", entry).await
    }

    pub async fn save_day_plan(&self, day: &str, plan: &DayPlan) -> Result<Ack, ApiError> {
        self.post_json("/save_day_plan", &SaveDayPlanArgs { day, plan }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_filters_become_null() {
        let query = RecommendationQuery::from_filters("lunch", "all", "italian", "");
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["meal_type"], "lunch");
        assert!(value["category"].is_null());
        assert_eq!(value["cuisine"], "italian");
        assert_eq!(value["sort_by"], "score");
    }

    #[test]
    fn test_default_query_matches_initial_load() {
        let query = RecommendationQuery::default();
        assert_eq!(query.meal_type, "all");
        assert_eq!(query.category, None);
        assert_eq!(query.cuisine, None);
    }

    #[test]
    fn test_recommendations_body_decodes() {
        let json = r#"{"recommendations":[{"name":"Greek Salad","score":8.76,
            "category":"Salad","meal_suitability":"lunch","calories":320,
            "protein":12,"carbs":18,"fat":22,"is_favorite":true}]}"#;
        let body: RecommendationsBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.recommendations.len(), 1);
        assert!(body.recommendations[0].is_favorite);
    }

    #[test]
    fn test_log_entry_copies_macros() {
        let food: Recommendation = serde_json::from_str(
            r#"{"name":"Toast","calories":80,"protein":3,"carbs":15,"fat":1}"#,
        )
        .unwrap();
        let entry = FoodLogEntry::new(&food, "breakfast");
        assert_eq!(entry.food_name, "Toast");
        assert_eq!(entry.carbs, 15.0);
        assert_eq!(entry.meal_type, "breakfast");
    }

    #[test]
    fn test_toggle_result_reports_direction() {
        let added: ToggleFavoriteResult =
            serde_json::from_str(r#"{"message":"Added to favorites","action":"added"}"#).unwrap();
        assert_eq!(added.now_favorite(), Some(true));

        let removed: ToggleFavoriteResult =
            serde_json::from_str(r#"{"action":"removed"}"#).unwrap();
        assert_eq!(removed.now_favorite(), Some(false));

        let bare: ToggleFavoriteResult = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
        assert_eq!(bare.now_favorite(), None);
    }
}
