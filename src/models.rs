//! Frontend Models
//!
//! Data structures matching backend payloads.

use serde::{Deserialize, Deserializer, Serialize};

/// Food record returned by `/get_recommendations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub meal_suitability: String,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_score: Option<f64>,
}

/// Entry of the recently viewed list, also the persisted shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewedItem {
    pub name: String,
    /// `JSON.stringify` writes NaN as null
    #[serde(default, deserialize_with = "null_as_zero")]
    pub calories: f64,
    #[serde(default)]
    pub category: Option<String>,
}

fn null_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

impl ViewedItem {
    pub fn new(name: impl Into<String>, calories: f64, category: Option<String>) -> Self {
        Self {
            name: name.into(),
            calories,
            category,
        }
    }
}

impl From<&Recommendation> for ViewedItem {
    fn from(food: &Recommendation) -> Self {
        let category = if food.category.is_empty() {
            None
        } else {
            Some(food.category.clone())
        };
        Self::new(food.name.clone(), food.calories, category)
    }
}

/// Daily targets rendered by the server into `window.userNutritionStats`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionTargets {
    pub daily_calories: f64,
    pub daily_protein: f64,
    pub daily_carbs: f64,
    pub daily_fat: f64,
    #[serde(default)]
    pub bmi: f64,
}

impl Default for NutritionTargets {
    fn default() -> Self {
        Self {
            daily_calories: 2200.0,
            daily_protein: 82.0,
            daily_carbs: 275.0,
            daily_fat: 49.0,
            bmi: 24.5,
        }
    }
}

/// Today's intake. The backend does not report it yet, so the dashboard
/// shows a fixed sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyIntake {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Default for DailyIntake {
    fn default() -> Self {
        Self {
            calories: 1850.0,
            protein: 75.0,
            carbs: 220.0,
            fat: 45.0,
        }
    }
}

/// Meal slots in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == value)
    }
}

/// Profile fields editable after registration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub weight: f64,
    pub height: f64,
    pub activity_level: String,
    pub dietary_goal: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_accepts_sparse_payload() {
        let food: Recommendation =
            serde_json::from_str(r#"{"name":"Oatmeal","calories":150.4}"#).unwrap();
        assert_eq!(food.name, "Oatmeal");
        assert_eq!(food.protein, 0.0);
        assert!(!food.is_favorite);
        assert!(food.description.is_none());
    }

    #[test]
    fn test_viewed_item_from_recommendation_drops_empty_category() {
        let food: Recommendation = serde_json::from_str(r#"{"name":"Tea","calories":2}"#).unwrap();
        let item = ViewedItem::from(&food);
        assert_eq!(item.category, None);
        assert_eq!(item.calories, 2.0);
    }

    #[test]
    fn test_meal_type_parse() {
        assert_eq!(MealType::parse("dinner"), Some(MealType::Dinner));
        assert_eq!(MealType::parse("brunch"), None);
    }
}
