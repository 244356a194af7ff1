//! Meal Plan Endpoint

use serde::Serialize;

use super::{ApiClient, ApiError};
use crate::meal_plan::GeneratedPlan;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealPlanRequest {
    pub days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calorie_target: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet_type: Option<String>,
}

impl MealPlanRequest {
    /// `days` falls back to `default_days` when the input is blank or zero
    pub fn from_inputs(
        days: &str,
        calorie_target: &str,
        diet_type: &str,
        default_days: u32,
    ) -> Self {
        let days = days.trim().parse::<u32>().ok().filter(|d| *d > 0).unwrap_or(default_days);
        let calorie_target = calorie_target.trim().parse::<u32>().ok().filter(|c| *c > 0);
        let diet_type = Some(diet_type.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        Self {
            days,
            calorie_target,
            diet_type,
        }
    }
}

impl ApiClient {
    pub async fn generate_meal_plan(
        &self,
        request: &MealPlanRequest,
    ) -> Result<GeneratedPlan, ApiError> {
        self.post_json("/generate_meal_plan", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_omitted() {
        let request = MealPlanRequest::from_inputs("", "", "", 7);
        assert_eq!(serde_json::to_string(&request).unwrap(), r#"{"days":7}"#);
    }

    #[test]
    fn test_inputs_parsed() {
        let request = MealPlanRequest::from_inputs("3", "1800", "vegetarian", 7);
        assert_eq!(request.days, 3);
        assert_eq!(request.calorie_target, Some(1800));
        assert_eq!(request.diet_type.as_deref(), Some("vegetarian"));
    }
}
