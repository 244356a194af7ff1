//! Recommendation Card Component

use leptos::prelude::*;

use crate::actions;
use crate::context::use_session;
use crate::modal::Modal;
use crate::models::{Recommendation, ViewedItem};
use crate::store::use_page_store;

#[component]
pub fn RecommendationCard(food: Recommendation) -> impl IntoView {
    let ctx = use_session();
    let store = use_page_store();

    let name = food.name.clone();
    let is_favorite = {
        let name = name.clone();
        move || ctx.favorites.with(|book| book.is_favorite(&name))
    };
    let is_pending = {
        let name = name.clone();
        move || ctx.favorites.with(|book| book.is_pending(&name))
    };
    let favorite_label = is_favorite.clone();
    let info_food = food.clone();
    let log_food = food.clone();

    view! {
        <div class="col-md-6 col-lg-4 mb-4">
            <div class="card recommendation-card h-100">
                <div class="card-body">
                    <div class="d-flex justify-content-between align-items-start">
                        <h5 class="card-title">{food.name.clone()}</h5>
                        <span class="badge bg-primary">{format!("{:.1}", food.score)}</span>
                    </div>
                    <p class="card-text text-muted mb-2">
                        <span class="badge bg-light text-dark me-1">{food.category.clone()}</span>
                        <span class="badge bg-light text-dark">{food.meal_suitability.clone()}</span>
                    </p>
                    <div class="nutrition-info d-flex justify-content-between small">
                        <span>{format!("{} kcal", food.calories.round() as i64)}</span>
                        <span>{format!("P: {}g", food.protein.round() as i64)}</span>
                        <span>{format!("C: {}g", food.carbs.round() as i64)}</span>
                        <span>{format!("F: {}g", food.fat.round() as i64)}</span>
                    </div>
                </div>
                <div class="card-footer bg-transparent d-flex gap-2">
                    <button
                        class="btn btn-sm btn-outline-info"
                        on:click=move |_| {
                            ctx.record_view(ViewedItem::from(&info_food));
                            ctx.open(Modal::FoodInfo(info_food.clone()));
                        }
                    >
                        "Info"
                    </button>
                    <button
                        class=move || if is_favorite() { "btn btn-sm btn-danger" } else { "btn btn-sm btn-outline-danger" }
                        disabled=is_pending
                        on:click=move |_| actions::toggle_favorite(ctx, store, name.clone())
                    >
                        {move || if favorite_label() { "Saved" } else { "Save" }}
                    </button>
                    <button
                        class="btn btn-sm btn-outline-success"
                        on:click=move |_| ctx.open(Modal::LogFood(log_food.clone()))
                    >
                        "Log"
                    </button>
                </div>
            </div>
        </div>
    }
}
