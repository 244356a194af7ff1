//! User Actions
//!
//! Request workflows shared by several components: each one issues the
//! backend call, updates the page store and reports the outcome.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{Action, FoodLogEntry, MealPlanRequest, RecommendationQuery};
use crate::context::SessionContext;
use crate::meal_plan::DayPlan;
use crate::models::{ProfileUpdate, Recommendation};
use crate::store::{
    store_set_favorites, store_set_plan, store_set_recommendations, PageStateStoreFields, PageStore,
};

pub fn load_recommendations(ctx: SessionContext, store: PageStore, query: RecommendationQuery) {
    *store.recommendations_loading().write() =
        Some("Finding the perfect meals for you...".to_string());
    spawn_local(async move {
        let api = ctx.api();
        let result = ctx
            .run_latest(Action::Recommend, async move { api.get_recommendations(&query).await })
            .await;
        match result {
            Ok(recommendations) => {
                log::info!("Loaded {} recommendations", recommendations.len());
                ctx.favorites.update(|book| {
                    for food in &recommendations {
                        book.seed(&food.name, food.is_favorite);
                    }
                });
                store_set_recommendations(&store, recommendations);
            }
            Err(e) if e.is_silent() => {}
            Err(e) => {
                *store.recommendations_loading().write() = None;
                ctx.report(Action::Recommend, &e);
            }
        }
    });
}

/// Refresh the favorites panel; failures only reach the log
pub fn load_favorites(ctx: SessionContext, store: PageStore) {
    spawn_local(async move {
        let api = ctx.api();
        let result = ctx
            .run_latest(Action::LoadFavorites, async move { api.get_favorites().await })
            .await;
        match result {
            Ok(favorites) => {
                ctx.favorites.update(|book| book.sync(favorites.clone()));
                store_set_favorites(&store, favorites);
            }
            Err(e) if e.is_silent() => {}
            Err(e) => log::error!("Error loading favorites: {}", e),
        }
    });
}

/// Two-phase favorite toggle: flip locally, then confirm or roll back
pub fn toggle_favorite(ctx: SessionContext, store: PageStore, food_name: String) {
    let mut pending = None;
    ctx.favorites.update(|book| pending = book.begin(&food_name));
    let Some(toggle) = pending else {
        log::debug!("Favorite toggle for {} still pending", food_name);
        return;
    };

    spawn_local(async move {
        match ctx.api().toggle_favorite(&toggle.food_name).await {
            Ok(result) => {
                ctx.favorites.update(|book| {
                    book.confirm(&toggle);
                    if let Some(now) = result.now_favorite() {
                        book.seed(&toggle.food_name, now);
                    }
                });
                if !result.message.is_empty() {
                    ctx.notifier.success(result.message);
                }
                load_favorites(ctx, store);
            }
            Err(e) => {
                ctx.favorites.update(|book| book.rollback(&toggle));
                ctx.report(Action::ToggleFavorite, &e);
            }
        }
    });
}

/// Log `food` under `meal_type`; closes the dialog on success
pub fn log_food(ctx: SessionContext, food: Recommendation, meal_type: String) {
    spawn_local(async move {
        let entry = FoodLogEntry::new(&food, &meal_type);
        let api = ctx.api();
        match ctx.run(Action::LogFood, async move { api.log_food(&entry).await }).await {
            Ok(_) => {
                ctx.notifier.success("Food logged successfully!");
                ctx.close_modal();
            }
            Err(e) => ctx.report(Action::LogFood, &e),
        }
    });
}

pub fn generate_meal_plan(ctx: SessionContext, store: PageStore, request: MealPlanRequest) {
    *store.plan_loading().write() = Some("Generating your personalized meal plan...".to_string());
    spawn_local(async move {
        let api = ctx.api();
        let result = ctx
            .run(Action::GenerateMealPlan, async move { api.generate_meal_plan(&request).await })
            .await;
        match result {
            Ok(generated) => {
                log::info!("Generated meal plan with {} days", generated.meal_plan.len());
                store_set_plan(&store, generated);
            }
            Err(e) if e.is_silent() => {}
            Err(e) => {
                *store.plan_loading().write() = None;
                ctx.report(Action::GenerateMealPlan, &e);
            }
        }
    });
}

/// Log every meal of `day` after the user confirms
pub fn save_day_plan(ctx: SessionContext, day: String, plan: DayPlan) {
    if !confirm(&format!("Are you sure you want to log all meals for {}?", day)) {
        return;
    }
    spawn_local(async move {
        let api = ctx.api();
        let request_day = day.clone();
        match ctx
            .run(Action::SaveDayPlan, async move { api.save_day_plan(&request_day, &plan).await })
            .await
        {
            Ok(_) => ctx.notifier.success(format!("All meals for {} logged successfully!", day)),
            Err(e) => ctx.report(Action::SaveDayPlan, &e),
        }
    });
}

pub fn update_profile(ctx: SessionContext, update: ProfileUpdate) {
    spawn_local(async move {
        let api = ctx.api();
        let result = ctx
            .run(Action::UpdateProfile, async move { api.update_profile(&update).await })
            .await;
        match result {
            Ok(_) => ctx.notifier.success("Profile updated successfully!"),
            Err(e) => ctx.report(Action::UpdateProfile, &e),
        }
    });
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
