//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::grocery::GroceryList;
use crate::meal_plan::{GeneratedPlan, MealPlan, NutritionSummary};
use crate::models::{DailyIntake, NutritionTargets, Recommendation};

/// Data fetched for the current page, with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    /// Last recommendation result
    pub recommendations: Vec<Recommendation>,
    /// Spinner message while recommendations load
    pub recommendations_loading: Option<String>,
    /// Favorite food names from the server
    pub favorites: Vec<String>,
    pub meal_plan: Option<MealPlan>,
    pub plan_summary: Option<NutritionSummary>,
    pub grocery_list: GroceryList,
    pub plan_loading: Option<String>,
    pub targets: NutritionTargets,
    pub intake: DailyIntake,
}

impl PageState {
    pub fn new(targets: NutritionTargets) -> Self {
        Self {
            targets,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_recommendations(store: &PageStore, recommendations: Vec<Recommendation>) {
    *store.recommendations().write() = recommendations;
    *store.recommendations_loading().write() = None;
}

pub fn store_set_favorites(store: &PageStore, favorites: Vec<String>) {
    *store.favorites().write() = favorites;
}

/// Install a freshly generated plan with its summary and grocery list
pub fn store_set_plan(store: &PageStore, generated: GeneratedPlan) {
    let summary = generated.summary();
    *store.grocery_list().write() = GroceryList::for_plan(&generated.meal_plan);
    *store.plan_summary().write() = summary;
    *store.meal_plan().write() = Some(generated.meal_plan);
    *store.plan_loading().write() = None;
}
