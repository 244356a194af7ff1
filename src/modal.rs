//! Modal Dialogs
//!
//! At most one dialog is open; the open dialog owns the data it shows, so
//! handing a food from the info dialog to the log dialog needs no globals.

use crate::meal_plan::DayPlan;
use crate::models::Recommendation;

#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    FoodInfo(Recommendation),
    LogFood(Recommendation),
    DayDetails { day: String, plan: DayPlan },
}

impl Modal {
    /// "Log This Food" from the info dialog
    pub fn log_from_info(&self) -> Option<Modal> {
        match self {
            Modal::FoodInfo(food) => Some(Modal::LogFood(food.clone())),
            _ => None,
        }
    }

    pub fn title(&self) -> String {
        match self {
            Modal::FoodInfo(food) => food.name.clone(),
            Modal::LogFood(food) => format!("Log {}", food.name),
            Modal::DayDetails { day, .. } => format!("{} Details", day),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food() -> Recommendation {
        serde_json::from_str(r#"{"name":"Lentil Soup","calories":230}"#).unwrap()
    }

    #[test]
    fn test_info_hands_off_to_log() {
        let info = Modal::FoodInfo(food());
        assert_eq!(info.log_from_info(), Some(Modal::LogFood(food())));
        assert_eq!(Modal::LogFood(food()).log_from_info(), None);
    }

    #[test]
    fn test_titles() {
        assert_eq!(Modal::LogFood(food()).title(), "Log Lentil Soup");
        let details = Modal::DayDetails { day: "Day 3".into(), plan: DayPlan::default() };
        assert_eq!(details.title(), "Day 3 Details");
    }
}
