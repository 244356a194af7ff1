use leptos::prelude::*;

use crate::actions;
use crate::components::{
    FavoritesList, FilterState, RecentlyViewedList, RecommendationFilters, RecommendationList,
};
use crate::context::use_session;
use crate::store::use_page_store;

#[component]
pub fn RecommendationsPage() -> impl IntoView {
    let ctx = use_session();
    let store = use_page_store();
    let filters = FilterState::new();

    actions::load_favorites(ctx, store);

    view! {
        <div class="container py-4">
            <h1 class="mb-4">"Recommendations"</h1>
            <RecommendationFilters
                filters=filters
                on_search=move |query| actions::load_recommendations(ctx, store, query)
            />
            <div class="row">
                <div class="col-lg-9">
                    <RecommendationList />
                </div>
                <div class="col-lg-3">
                    <FavoritesList />
                    <RecentlyViewedList />
                </div>
            </div>
        </div>
    }
}
