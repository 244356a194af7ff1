//! Plan Nutrition Summary
//!
//! Period averages and the plan macro doughnut.

use leptos::prelude::*;

use super::chart_canvas::ChartCanvas;
use crate::charts::{plan_macro_doughnut, ChartSlot};
use crate::meal_plan::NutritionSummary;
use crate::store::{use_page_store, PageStateStoreFields};

#[component]
pub fn NutritionSummaryPanel() -> impl IntoView {
    let store = use_page_store();
    let summary = store.plan_summary();
    let spec = Signal::derive(move || plan_macro_doughnut(summary.get().as_ref()));

    let stat = move |label: &'static str, unit: &'static str, pick: fn(&NutritionSummary) -> f64| {
        view! {
            <li class="list-group-item d-flex justify-content-between">
                <span>{label}</span>
                <strong>
                    {move || summary
                        .get()
                        .map(|s| format!("{}{}", pick(&s).round() as i64, unit))
                        .unwrap_or_else(|| "-".to_string())}
                </strong>
            </li>
        }
    };

    view! {
        <div class="card mb-4" id="nutritionSummary">
            <div class="card-header">"Nutrition Summary"</div>
            <ul class="list-group list-group-flush">
                {stat("Avg. calories", " kcal", |s| s.avg_calories)}
                {stat("Avg. protein", "g", |s| s.avg_protein)}
                {stat("Avg. carbs", "g", |s| s.avg_carbs)}
                {stat("Avg. fat", "g", |s| s.avg_fat)}
                {stat("Total calories", " kcal", |s| s.total_calories)}
            </ul>
            <div class="card-body">
                <ChartCanvas slot=ChartSlot::PlanMacro spec=spec class="chart-sm" />
            </div>
        </div>
    }
}
