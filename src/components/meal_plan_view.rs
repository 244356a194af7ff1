//! Meal Plan View
//!
//! One card per day in backend order with meals and day totals.

use leptos::prelude::*;

use super::loading::LoadingSpinner;
use crate::actions;
use crate::context::use_session;
use crate::meal_plan::DayPlan;
use crate::modal::Modal;
use crate::store::{use_page_store, PageStateStoreFields};

#[component]
pub fn MealPlanView() -> impl IntoView {
    let store = use_page_store();

    view! {
        <div id="mealPlanContainer" class="row">
            {move || {
                if let Some(message) = store.plan_loading().get() {
                    return view! { <LoadingSpinner message=message /> }.into_any();
                }
                match store.meal_plan().get() {
                    Some(plan) if !plan.is_empty() => plan
                        .into_iter()
                        .map(|(day, day_plan)| view! { <DayCard day=day plan=day_plan /> })
                        .collect_view()
                        .into_any(),
                    _ => view! {
                        <div class="col-12">
                            <p class="text-center text-muted">
                                "No meal plan yet. Generate one to get started."
                            </p>
                        </div>
                    }
                    .into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn DayCard(day: String, plan: DayPlan) -> impl IntoView {
    let ctx = use_session();
    let totals = plan.totals();
    let meals: Vec<_> = plan
        .meals()
        .map(|(t, m)| (t.label(), m.name.clone(), m.calories.round() as i64))
        .collect();

    let details = Modal::DayDetails { day: day.clone(), plan: plan.clone() };
    let save_day = day.clone();

    view! {
        <div class="col-md-6 col-lg-4 mb-4">
            <div class="card day-card h-100">
                <div class="card-header d-flex justify-content-between align-items-center">
                    <h5 class="mb-0">{day}</h5>
                    <span class="badge bg-primary">{format!("{} kcal", totals.calories.round() as i64)}</span>
                </div>
                <ul class="list-group list-group-flush">
                    {meals.into_iter().map(|(label, name, calories)| view! {
                        <li class="list-group-item">
                            <small class="text-muted d-block">{label}</small>
                            <div class="d-flex justify-content-between">
                                <span>{name}</span>
                                <span>{format!("{} kcal", calories)}</span>
                            </div>
                        </li>
                    }).collect_view()}
                </ul>
                <div class="card-body small text-muted">
                    {format!(
                        "P: {}g | C: {}g | F: {}g",
                        totals.protein.round() as i64,
                        totals.carbs.round() as i64,
                        totals.fat.round() as i64,
                    )}
                </div>
                <div class="card-footer bg-transparent d-flex gap-2">
                    <button
                        class="btn btn-sm btn-outline-primary"
                        on:click=move |_| ctx.open(details.clone())
                    >
                        "View Details"
                    </button>
                    <button
                        class="btn btn-sm btn-outline-success"
                        on:click=move |_| actions::save_day_plan(ctx, save_day.clone(), plan.clone())
                    >
                        "Log Day"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// "Save plan" placeholder until the backend stores whole plans
#[component]
pub fn SavePlanButton() -> impl IntoView {
    let ctx = use_session();

    view! {
        <button
            type="button"
            class="btn btn-outline-primary"
            id="saveMealPlan"
            on:click=move |_| ctx.notifier.info("Save Meal Plan feature coming soon!")
        >
            "Save Plan"
        </button>
    }
}
