//! Chart Specifications
//!
//! Declarative Chart.js configurations for the dashboard and meal plan
//! pages. Building a spec is pure; mounting it happens in [`binding`].

pub mod binding;
mod registry;

use serde_json::{json, Value};

use crate::meal_plan::NutritionSummary;
use crate::nutrition::MacroSplit;

pub use registry::{ChartRegistry, Disposable};

/// Canvas ids of the charts a page can host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartSlot {
    Macro,
    CalorieTrend,
    NutrientTrend,
    PlanMacro,
}

impl ChartSlot {
    pub fn canvas_id(&self) -> &'static str {
        match self {
            ChartSlot::Macro => "macroChart",
            ChartSlot::CalorieTrend => "calorieTrendChart",
            ChartSlot::NutrientTrend => "nutrientTrendChart",
            ChartSlot::PlanMacro => "planMacroChart",
        }
    }
}

/// Config plus the bits JSON cannot express
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub config: Value,
    /// Tooltip renders "label: value%"
    pub percent_tooltip: bool,
}

pub const WEEK_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

// Sample week until intake history is available from the backend
const SAMPLE_WEEK_CALORIES: [f64; 7] = [2100.0, 2200.0, 1950.0, 2300.0, 2050.0, 2400.0, 1900.0];
const SAMPLE_TREND_CALORIES: [f64; 7] = [2100.0, 2250.0, 1950.0, 2300.0, 2100.0, 2450.0, 2000.0];
const SAMPLE_TREND_PROTEIN: [f64; 7] = [130.0, 145.0, 125.0, 150.0, 140.0, 160.0, 135.0];
const SAMPLE_TREND_CARBS: [f64; 7] = [250.0, 270.0, 230.0, 280.0, 260.0, 300.0, 240.0];

const FONT_FAMILY: &str = "'Poppins', sans-serif";

fn tooltip_style() -> Value {
    json!({
        "backgroundColor": "rgba(255, 255, 255, 0.9)",
        "titleColor": "#1f2937",
        "bodyColor": "#1f2937",
        "borderColor": "#e5e7eb",
        "borderWidth": 1,
        "padding": 10
    })
}

/// Doughnut of macro calorie shares
pub fn macro_doughnut(split: MacroSplit) -> ChartSpec {
    let config = json!({
        "type": "doughnut",
        "data": {
            "labels": ["Protein", "Carbohydrates", "Fat"],
            "datasets": [{
                "data": split.as_array(),
                "backgroundColor": ["#10b981", "#3b82f6", "#f59e0b"],
                "borderColor": ["#ffffff", "#ffffff", "#ffffff"],
                "borderWidth": 2,
                "hoverOffset": 4
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": {
                    "position": "bottom",
                    "labels": {
                        "usePointStyle": true,
                        "padding": 20,
                        "font": { "family": FONT_FAMILY, "size": 12 }
                    }
                },
                "tooltip": tooltip_style()
            },
            "cutout": "75%"
        }
    });
    ChartSpec {
        config,
        percent_tooltip: true,
    }
}

/// Week of consumed calories against a flat target line
pub fn calorie_trend(target_calories: f64) -> ChartSpec {
    let target = [target_calories; 7];
    let mut tooltip = tooltip_style();
    tooltip["mode"] = json!("index");
    tooltip["intersect"] = json!(false);

    let config = json!({
        "type": "line",
        "data": {
            "labels": WEEK_LABELS,
            "datasets": [
                {
                    "label": "Calories Consumed",
                    "data": SAMPLE_WEEK_CALORIES,
                    "borderColor": "#4361ee",
                    "backgroundColor": "rgba(67, 97, 238, 0.1)",
                    "tension": 0.4,
                    "fill": true,
                    "pointBackgroundColor": "#ffffff",
                    "pointBorderColor": "#4361ee",
                    "pointBorderWidth": 2,
                    "pointRadius": 4,
                    "pointHoverRadius": 6
                },
                {
                    "label": "Daily Target",
                    "data": target,
                    "borderColor": "#10b981",
                    "backgroundColor": "transparent",
                    "borderDash": [5, 5],
                    "borderWidth": 2,
                    "pointRadius": 0,
                    "tension": 0
                }
            ]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": {
                    "position": "top",
                    "align": "end",
                    "labels": { "usePointStyle": true, "boxWidth": 8 }
                },
                "tooltip": tooltip
            },
            "scales": {
                "x": { "grid": { "display": false } },
                "y": {
                    "beginAtZero": false,
                    "grid": { "borderDash": [2, 2], "color": "#f3f4f6" },
                    "title": { "display": true, "text": "Calories" }
                }
            },
            "interaction": { "intersect": false, "mode": "nearest" }
        }
    });
    ChartSpec {
        config,
        percent_tooltip: false,
    }
}

/// Calories on the left axis, protein and carbs in grams on the right
pub fn nutrient_trend() -> ChartSpec {
    let config = json!({
        "type": "line",
        "data": {
            "labels": WEEK_LABELS,
            "datasets": [
                {
                    "label": "Calories",
                    "data": SAMPLE_TREND_CALORIES,
                    "borderColor": "#4361ee",
                    "backgroundColor": "rgba(67, 97, 238, 0.1)",
                    "borderWidth": 2,
                    "yAxisID": "y",
                    "tension": 0.4,
                    "fill": true
                },
                {
                    "label": "Protein",
                    "data": SAMPLE_TREND_PROTEIN,
                    "borderColor": "#10b981",
                    "backgroundColor": "transparent",
                    "borderWidth": 2,
                    "yAxisID": "y1",
                    "borderDash": [5, 5],
                    "tension": 0.4
                },
                {
                    "label": "Carbs",
                    "data": SAMPLE_TREND_CARBS,
                    "borderColor": "#3b82f6",
                    "backgroundColor": "transparent",
                    "borderWidth": 2,
                    "yAxisID": "y1",
                    "tension": 0.4
                }
            ]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "interaction": { "mode": "index", "intersect": false },
            "plugins": {
                "legend": {
                    "position": "top",
                    "align": "end",
                    "labels": {
                        "usePointStyle": true,
                        "boxWidth": 8,
                        "font": { "family": FONT_FAMILY }
                    }
                },
                "tooltip": tooltip_style()
            },
            "scales": {
                "x": { "grid": { "display": false } },
                "y": {
                    "type": "linear",
                    "display": true,
                    "position": "left",
                    "title": { "display": true, "text": "Calories" },
                    "grid": { "borderDash": [2, 2], "color": "#f3f4f6" }
                },
                "y1": {
                    "type": "linear",
                    "display": true,
                    "position": "right",
                    "title": { "display": true, "text": "Grams (Protein/Carbs)" },
                    "grid": { "drawOnChartArea": false }
                }
            }
        }
    });
    ChartSpec {
        config,
        percent_tooltip: false,
    }
}

/// Average macro grams of a generated plan (placeholder grams without one)
pub fn plan_macro_doughnut(summary: Option<&NutritionSummary>) -> ChartSpec {
    let grams = match summary {
        Some(s) => [s.avg_protein, s.avg_carbs, s.avg_fat],
        None => [30.0, 50.0, 20.0],
    };
    let config = json!({
        "type": "doughnut",
        "data": {
            "labels": ["Protein", "Carbs", "Fat"],
            "datasets": [{
                "data": grams,
                "backgroundColor": ["#198754", "#ffc107", "#dc3545"],
                "borderWidth": 0
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": {
                    "position": "bottom",
                    "labels": { "usePointStyle": true, "padding": 20 }
                }
            },
            "cutout": "70%"
        }
    });
    ChartSpec {
        config,
        percent_tooltip: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_doughnut_carries_split() {
        let spec = macro_doughnut(MacroSplit::from_grams(100.0, 100.0, 0.0));
        assert_eq!(spec.config["type"], "doughnut");
        assert_eq!(spec.config["data"]["datasets"][0]["data"], json!([50, 50, 0]));
        assert!(spec.percent_tooltip);
    }

    #[test]
    fn test_calorie_trend_target_line() {
        let spec = calorie_trend(1800.0);
        let target = &spec.config["data"]["datasets"][1]["data"];
        assert_eq!(target.as_array().unwrap().len(), 7);
        assert!(target.as_array().unwrap().iter().all(|v| v == 1800.0));
        assert_eq!(spec.config["options"]["plugins"]["tooltip"]["mode"], "index");
    }

    #[test]
    fn test_nutrient_trend_uses_dual_axis() {
        let spec = nutrient_trend();
        let datasets = spec.config["data"]["datasets"].as_array().unwrap();
        let axes: Vec<&str> = datasets.iter().map(|d| d["yAxisID"].as_str().unwrap()).collect();
        assert_eq!(axes, vec!["y", "y1", "y1"]);
        assert_eq!(spec.config["options"]["scales"]["y1"]["position"], "right");
    }

    #[test]
    fn test_plan_macro_doughnut_placeholder_and_summary() {
        let placeholder = plan_macro_doughnut(None);
        assert_eq!(placeholder.config["data"]["datasets"][0]["data"], json!([30.0, 50.0, 20.0]));

        let summary = NutritionSummary {
            avg_calories: 2000.0,
            avg_protein: 90.0,
            avg_carbs: 240.0,
            avg_fat: 70.0,
            total_calories: 14000.0,
        };
        let spec = plan_macro_doughnut(Some(&summary));
        assert_eq!(spec.config["data"]["datasets"][0]["data"], json!([90.0, 240.0, 70.0]));
    }
}
