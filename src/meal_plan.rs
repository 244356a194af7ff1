//! Meal Plan Models
//!
//! Generated plans, per-day totals and the period summary.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::MealType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Meals of one day, keyed by meal type on the wire
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<Meal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch: Option<Meal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dinner: Option<Meal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snack: Option<Meal>,
}

impl DayPlan {
    pub fn meal(&self, meal_type: MealType) -> Option<&Meal> {
        match meal_type {
            MealType::Breakfast => self.breakfast.as_ref(),
            MealType::Lunch => self.lunch.as_ref(),
            MealType::Dinner => self.dinner.as_ref(),
            MealType::Snack => self.snack.as_ref(),
        }
    }

    /// Present meals in breakfast, lunch, dinner, snack order
    pub fn meals(&self) -> impl Iterator<Item = (MealType, &Meal)> + '_ {
        MealType::ALL
            .into_iter()
            .filter_map(move |t| self.meal(t).map(|m| (t, m)))
    }

    pub fn totals(&self) -> MacroTotals {
        self.meals().fold(MacroTotals::default(), |acc, (_, m)| acc.add(m))
    }

    pub fn is_empty(&self) -> bool {
        self.meals().next().is_none()
    }
}

/// Day label ("Day 1", "Monday", ...) to plan, in backend order
pub type MealPlan = IndexMap<String, DayPlan>;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MacroTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroTotals {
    fn add(self, meal: &Meal) -> Self {
        Self {
            calories: self.calories + meal.calories,
            protein: self.protein + meal.protein,
            carbs: self.carbs + meal.carbs,
            fat: self.fat + meal.fat,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionSummary {
    #[serde(default)]
    pub avg_calories: f64,
    #[serde(default)]
    pub avg_protein: f64,
    #[serde(default)]
    pub avg_carbs: f64,
    #[serde(default)]
    pub avg_fat: f64,
    #[serde(default)]
    pub total_calories: f64,
}

impl NutritionSummary {
    /// Per-day averages over the whole plan; `None` for an empty plan
    pub fn from_plan(plan: &MealPlan) -> Option<Self> {
        if plan.is_empty() {
            return None;
        }
        let days = plan.len() as f64;
        let total = plan.values().fold(MacroTotals::default(), |acc, day| {
            let t = day.totals();
            MacroTotals {
                calories: acc.calories + t.calories,
                protein: acc.protein + t.protein,
                carbs: acc.carbs + t.carbs,
                fat: acc.fat + t.fat,
            }
        });
        Some(Self {
            avg_calories: (total.calories / days).round(),
            avg_protein: (total.protein / days).round(),
            avg_carbs: (total.carbs / days).round(),
            avg_fat: (total.fat / days).round(),
            total_calories: total.calories.round(),
        })
    }
}

/// Body of a `/generate_meal_plan` response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GeneratedPlan {
    #[serde(default)]
    pub meal_plan: MealPlan,
    #[serde(default)]
    pub nutrition_summary: Option<serde_json::Value>,
}

impl GeneratedPlan {
    /// Backend summary when usable, otherwise computed from the plan
    pub fn summary(&self) -> Option<NutritionSummary> {
        let provided = self
            .nutrition_summary
            .as_ref()
            .filter(|v| v.as_object().is_some_and(|o| !o.is_empty()))
            .and_then(|v| serde_json::from_value::<NutritionSummary>(v.clone()).ok());
        provided.or_else(|| NutritionSummary::from_plan(&self.meal_plan))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(name: &str, calories: f64) -> Meal {
        Meal {
            name: name.to_string(),
            calories,
            protein: 10.0,
            carbs: 20.0,
            fat: 5.0,
            description: None,
        }
    }

    #[test]
    fn test_day_total_adds_present_meals() {
        let day = DayPlan {
            breakfast: Some(meal("Oats", 300.0)),
            lunch: Some(meal("Salad", 500.0)),
            ..DayPlan::default()
        };
        let totals = day.totals();
        assert_eq!(totals.calories, 800.0);
        assert_eq!(totals.protein, 20.0);
    }

    #[test]
    fn test_meals_follow_display_order() {
        let json = r#"{"snack":{"name":"Nuts"},"breakfast":{"name":"Eggs","calories":200}}"#;
        let day: DayPlan = serde_json::from_str(json).unwrap();
        let order: Vec<MealType> = day.meals().map(|(t, _)| t).collect();
        assert_eq!(order, vec![MealType::Breakfast, MealType::Snack]);
        assert_eq!(day.meal(MealType::Snack).unwrap().calories, 0.0);
    }

    #[test]
    fn test_plan_keeps_backend_day_order() {
        let json = r#"{"meal_plan":{"Day 2":{},"Day 1":{},"Day 10":{}}}"#;
        let generated: GeneratedPlan = serde_json::from_str(json).unwrap();
        let days: Vec<&str> = generated.meal_plan.keys().map(String::as_str).collect();
        assert_eq!(days, vec!["Day 2", "Day 1", "Day 10"]);
    }

    #[test]
    fn test_summary_computed_when_backend_omits_it() {
        let mut plan = MealPlan::new();
        plan.insert(
            "Day 1".into(),
            DayPlan {
                breakfast: Some(meal("A", 300.0)),
                lunch: Some(meal("B", 500.0)),
                ..Default::default()
            },
        );
        plan.insert(
            "Day 2".into(),
            DayPlan { dinner: Some(meal("C", 601.0)), ..Default::default() },
        );
        let generated = GeneratedPlan {
            meal_plan: plan,
            nutrition_summary: Some(serde_json::json!({})),
        };

        let summary = generated.summary().unwrap();
        assert_eq!(summary.total_calories, 1401.0);
        assert_eq!(summary.avg_calories, 701.0);
        assert_eq!(summary.avg_protein, 15.0);
    }

    #[test]
    fn test_backend_summary_preferred() {
        let json = r#"{"meal_plan":{"Day 1":{"lunch":{"name":"X","calories":100}}},
                       "nutrition_summary":{"avg_calories":1,"avg_protein":2,"avg_carbs":3,
                                            "avg_fat":4,"total_calories":5}}"#;
        let generated: GeneratedPlan = serde_json::from_str(json).unwrap();
        assert_eq!(generated.summary().unwrap().total_calories, 5.0);
    }

    #[test]
    fn test_empty_plan_has_no_summary() {
        assert_eq!(GeneratedPlan::default().summary(), None);
    }

    #[test]
    fn test_day_plan_serializes_without_missing_meals() {
        let day = DayPlan { lunch: Some(meal("Wrap", 450.0)), ..Default::default() };
        let value = serde_json::to_value(&day).unwrap();
        assert!(value.get("breakfast").is_none());
        assert_eq!(value["lunch"]["name"], "Wrap");
    }
}
