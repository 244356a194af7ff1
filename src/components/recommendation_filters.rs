//! Recommendation Filters
//!
//! Meal type, category, cuisine and sort selects. Every change re-queries.

use leptos::prelude::*;

use super::form_controls::SelectInput;
use super::options::{CATEGORIES, CUISINES, MEAL_TYPE_FILTERS, SORT_OPTIONS};
use crate::api::{RecommendationQuery, ANY_FILTER};

#[derive(Clone, Copy)]
pub struct FilterState {
    pub meal_type: RwSignal<String>,
    pub category: RwSignal<String>,
    pub cuisine: RwSignal<String>,
    pub sort_by: RwSignal<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self {
            meal_type: RwSignal::new(ANY_FILTER.to_string()),
            category: RwSignal::new(ANY_FILTER.to_string()),
            cuisine: RwSignal::new(ANY_FILTER.to_string()),
            sort_by: RwSignal::new("score".to_string()),
        }
    }

    pub fn query(&self) -> RecommendationQuery {
        RecommendationQuery::from_filters(
            &self.meal_type.get(),
            &self.category.get(),
            &self.cuisine.get(),
            &self.sort_by.get(),
        )
    }

    fn query_untracked(&self) -> RecommendationQuery {
        RecommendationQuery::from_filters(
            &self.meal_type.get_untracked(),
            &self.category.get_untracked(),
            &self.cuisine.get_untracked(),
            &self.sort_by.get_untracked(),
        )
    }
}

#[component]
pub fn RecommendationFilters(
    filters: FilterState,
    /// Called with the fresh query on "Find", "Refresh" and every change
    #[prop(into)]
    on_search: Callback<RecommendationQuery>,
) -> impl IntoView {
    // Tracks all four selects; runs once on mount for the initial query
    Effect::new(move |_| on_search.run(filters.query()));

    view! {
        <div class="card mb-4 filter-card">
            <div class="card-body">
                <div class="row g-2 align-items-end">
                    <div class="col-md-3">
                        <label class="form-label" for="mealTypeFilter">"Meal type"</label>
                        <SelectInput id="mealTypeFilter" options=MEAL_TYPE_FILTERS value=filters.meal_type />
                    </div>
                    <div class="col-md-3">
                        <label class="form-label" for="categoryFilter">"Category"</label>
                        <SelectInput id="categoryFilter" options=CATEGORIES value=filters.category />
                    </div>
                    <div class="col-md-2">
                        <label class="form-label" for="cuisineFilter">"Cuisine"</label>
                        <SelectInput
                            id="cuisineFilter"
                            options=CUISINES
                            value=filters.cuisine
                            any_label="All cuisines"
                        />
                    </div>
                    <div class="col-md-2">
                        <label class="form-label" for="sortBy">"Sort by"</label>
                        <SelectInput id="sortBy" options=SORT_OPTIONS value=filters.sort_by />
                    </div>
                    <div class="col-md-2 d-flex gap-2">
                        <button
                            type="button"
                            class="btn btn-primary"
                            id="findRecommendations"
                            on:click=move |_| on_search.run(filters.query_untracked())
                        >
                            "Find"
                        </button>
                        <button
                            type="button"
                            class="btn btn-outline-secondary"
                            id="refreshRecommendations"
                            on:click=move |_| on_search.run(filters.query_untracked())
                        >
                            "Refresh"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

