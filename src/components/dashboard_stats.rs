//! Dashboard Stats
//!
//! Target cards, today's calorie progress and the BMI badge.

use leptos::prelude::*;

use crate::models::MealType;
use crate::nutrition::{bar_width, calorie_progress, BmiStatus, ProgressTone};
use crate::store::{use_page_store, PageStateStoreFields};

#[component]
fn StatCard(label: &'static str, value: Signal<String>, unit: &'static str) -> impl IntoView {
    view! {
        <div class="col-md-3 col-6 mb-3">
            <div class="card stat-card h-100">
                <div class="card-body text-center">
                    <h6 class="text-muted">{label}</h6>
                    <h3 class="mb-0">{move || value.get()}<small class="ms-1">{unit}</small></h3>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn DashboardStats() -> impl IntoView {
    let store = use_page_store();
    let targets = store.targets();

    let grams = move |f: fn(&crate::models::NutritionTargets) -> f64| {
        Signal::derive(move || format!("{}", f(&targets.get()).round() as i64))
    };

    view! {
        <div class="row">
            <StatCard label="Daily Calories" value=grams(|t| t.daily_calories) unit="kcal" />
            <StatCard label="Protein" value=grams(|t| t.daily_protein) unit="g" />
            <StatCard label="Carbs" value=grams(|t| t.daily_carbs) unit="g" />
            <StatCard label="Fat" value=grams(|t| t.daily_fat) unit="g" />
        </div>
        <div class="row">
            <div class="col-md-8 mb-3">
                <CalorieProgress />
            </div>
            <div class="col-md-4 mb-3">
                <BmiIndicator />
            </div>
        </div>
    }
}

#[component]
pub fn CalorieProgress() -> impl IntoView {
    let store = use_page_store();
    let percentage =
        Memo::new(move |_| calorie_progress(&store.intake().get(), &store.targets().get()));

    view! {
        <div class="card h-100">
            <div class="card-body">
                <h6 class="card-title">"Today's Calories"</h6>
                <div class="progress" style="height: 20px;">
                    <div
                        class=move || format!("progress-bar {}", ProgressTone::for_percentage(percentage.get()).css_class())
                        role="progressbar"
                        style:width=move || format!("{}%", bar_width(percentage.get()))
                    >
                        {move || format!("{}%", percentage.get().round() as i64)}
                    </div>
                </div>
                <p class="text-muted mt-2 mb-0">
                    {move || {
                        let intake = store.intake().get();
                        let targets = store.targets().get();
                        format!("{} / {} kcal", intake.calories.round() as i64, targets.daily_calories.round() as i64)
                    }}
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn BmiIndicator() -> impl IntoView {
    let store = use_page_store();
    let bmi = move || store.targets().get().bmi;
    let status = move || BmiStatus::classify(bmi());

    view! {
        <div class="card h-100">
            <div class="card-body text-center">
                <h6 class="card-title">"BMI"</h6>
                <h3>{move || format!("{:.1}", bmi())}</h3>
                <span id="bmiStatus" class=move || status().badge_class()>{move || status().label()}</span>
            </div>
        </div>
    }
}

/// One button per meal slot; `on_pick` receives the meal type value
#[component]
pub fn QuickRecommendButtons(#[prop(into)] on_pick: Callback<String>) -> impl IntoView {
    view! {
        <div class="btn-group flex-wrap mb-3" role="group">
            {MealType::ALL.iter().map(|meal| {
                let meal = *meal;
                view! {
                    <button
                        type="button"
                        class="btn btn-outline-primary"
                        on:click=move |_| on_pick.run(meal.as_str().to_string())
                    >
                        {meal.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
