//! Recommendation List Component

use leptos::prelude::*;

use super::loading::LoadingSpinner;
use super::recommendation_card::RecommendationCard;
use crate::store::{use_page_store, PageStateStoreFields};

#[component]
pub fn RecommendationList() -> impl IntoView {
    let store = use_page_store();

    view! {
        <div id="recommendationsContainer" class="row">
            {move || match store.recommendations_loading().get() {
                Some(message) => view! { <LoadingSpinner message=message /> }.into_any(),
                None => {
                    let foods = store.recommendations().get();
                    if foods.is_empty() {
                        view! {
                            <div class="col-12">
                                <p class="text-center text-muted">
                                    "No recommendations available. Try updating your preferences."
                                </p>
                            </div>
                        }
                        .into_any()
                    } else {
                        foods
                            .into_iter()
                            .map(|food| view! { <RecommendationCard food=food /> })
                            .collect_view()
                            .into_any()
                    }
                }
            }}
        </div>
    }
}
