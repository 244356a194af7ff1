//! Modal Host
//!
//! Renders whichever dialog the session holds open. Each dialog reads its
//! data from the [`Modal`] value, so re-opening re-binds everything.

use leptos::prelude::*;

use crate::actions;
use crate::context::use_session;
use crate::meal_plan::{DayPlan, Meal};
use crate::modal::Modal;
use crate::models::{MealType, Recommendation};

#[component]
pub fn ModalHost() -> impl IntoView {
    let ctx = use_session();

    view! {
        {move || ctx.modal.get().map(|modal| {
            let title = modal.title();
            let body = match modal.clone() {
                Modal::FoodInfo(food) => view! { <FoodInfoBody food=food modal=modal /> }.into_any(),
                Modal::LogFood(food) => view! { <LogFoodBody food=food /> }.into_any(),
                Modal::DayDetails { day, plan } => view! { <DayDetailsBody day=day plan=plan /> }.into_any(),
            };
            view! { <ModalFrame title=title>{body}</ModalFrame> }
        })}
    }
}

#[component]
fn ModalFrame(title: String, children: Children) -> impl IntoView {
    let ctx = use_session();

    view! {
        <div class="modal-backdrop fade show"></div>
        <div class="modal fade show d-block" tabindex="-1" role="dialog">
            <div class="modal-dialog modal-dialog-centered" role="document">
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title">{title}</h5>
                        <button
                            type="button"
                            class="btn-close"
                            aria-label="Close"
                            on:click=move |_| ctx.close_modal()
                        ></button>
                    </div>
                    {children()}
                </div>
            </div>
        </div>
    }
}

fn macro_row(calories: f64, protein: f64, carbs: f64, fat: f64) -> impl IntoView {
    view! {
        <div class="row text-center my-3">
            <div class="col"><strong>{calories.round() as i64}</strong><br/><small>"kcal"</small></div>
            <div class="col"><strong>{format!("{}g", protein.round() as i64)}</strong><br/><small>"Protein"</small></div>
            <div class="col"><strong>{format!("{}g", carbs.round() as i64)}</strong><br/><small>"Carbs"</small></div>
            <div class="col"><strong>{format!("{}g", fat.round() as i64)}</strong><br/><small>"Fat"</small></div>
        </div>
    }
}

#[component]
fn FoodInfoBody(food: Recommendation, modal: Modal) -> impl IntoView {
    let ctx = use_session();
    let handoff = modal.log_from_info();

    view! {
        <div class="modal-body">
            <p class="mb-1">
                <span class="badge bg-light text-dark me-1">{food.category.clone()}</span>
                <span class="badge bg-light text-dark">{food.meal_suitability.clone()}</span>
            </p>
            {macro_row(food.calories, food.protein, food.carbs, food.fat)}
            {food.health_score.map(|score| view! {
                <p class="mb-1">{format!("Health score: {:.1}", score)}</p>
            })}
            {food.description.clone().map(|text| view! { <p class="text-muted">{text}</p> })}
        </div>
        <div class="modal-footer">
            <button type="button" class="btn btn-secondary" on:click=move |_| ctx.close_modal()>
                "Close"
            </button>
            <button
                type="button"
                class="btn btn-success"
                id="logFromInfoBtn"
                on:click=move |_| {
                    if let Some(next) = handoff.clone() {
                        ctx.open(next);
                    }
                }
            >
                "Log This Food"
            </button>
        </div>
    }
}

#[component]
fn LogFoodBody(food: Recommendation) -> impl IntoView {
    let ctx = use_session();
    let meal_type = RwSignal::new(MealType::Breakfast.as_str().to_string());
    let summary = format!("{} ({} kcal)", food.name, food.calories.round() as i64);

    view! {
        <div class="modal-body">
            <p>{summary}</p>
            <label class="form-label" for="logMealType">"Meal type"</label>
            <select
                class="form-select"
                id="logMealType"
                on:change=move |ev| meal_type.set(event_target_value(&ev))
                prop:value=move || meal_type.get()
            >
                {MealType::ALL.iter().map(|m| view! {
                    <option value=m.as_str()>{m.label()}</option>
                }).collect_view()}
            </select>
        </div>
        <div class="modal-footer">
            <button type="button" class="btn btn-secondary" on:click=move |_| ctx.close_modal()>
                "Cancel"
            </button>
            <button
                type="button"
                class="btn btn-success"
                id="confirmLogFood"
                on:click=move |_| {
                    let meal = MealType::parse(&meal_type.get_untracked())
                        .unwrap_or(MealType::Breakfast);
                    actions::log_food(ctx, food.clone(), meal.as_str().to_string());
                }
            >
                "Log Food"
            </button>
        </div>
    }
}

#[component]
fn DayDetailsBody(day: String, plan: DayPlan) -> impl IntoView {
    let ctx = use_session();
    let meals: Vec<(MealType, Meal)> = plan.meals().map(|(t, m)| (t, m.clone())).collect();

    view! {
        <div class="modal-body">
            {meals.into_iter().map(|(meal_type, meal)| view! {
                <div class="meal-detail mb-3">
                    <h6 class="text-primary mb-1">{meal_type.label()}</h6>
                    <div class="fw-semibold">{meal.name.clone()}</div>
                    {macro_row(meal.calories, meal.protein, meal.carbs, meal.fat)}
                    {meal.description.clone().map(|text| view! { <p class="small text-muted">{text}</p> })}
                </div>
            }).collect_view()}
        </div>
        <div class="modal-footer">
            <button type="button" class="btn btn-secondary" on:click=move |_| ctx.close_modal()>
                "Close"
            </button>
            <button
                type="button"
                class="btn btn-success"
                on:click=move |_| actions::save_day_plan(ctx, day.clone(), plan.clone())
            >
                "Log All Meals"
            </button>
        </div>
    }
}
