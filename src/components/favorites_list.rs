//! Favorites List Component

use leptos::prelude::*;

use crate::store::{use_page_store, PageStateStoreFields};

#[component]
pub fn FavoritesList() -> impl IntoView {
    let store = use_page_store();

    view! {
        <div class="card mb-4">
            <div class="card-header">"Favorites"</div>
            <ul id="favoritesList" class="list-group list-group-flush">
                {move || {
                    let favorites = store.favorites().get();
                    if favorites.is_empty() {
                        view! {
                            <li class="list-group-item text-muted">"No favorites saved yet"</li>
                        }
                        .into_any()
                    } else {
                        favorites
                            .into_iter()
                            .map(|name| view! { <li class="list-group-item">{name}</li> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </ul>
        </div>
    }
}
