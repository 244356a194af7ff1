//! Loading Spinner Component

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="text-center py-5 loading-state">
            <div class="spinner-border text-primary" role="status">
                <span class="visually-hidden">"Loading..."</span>
            </div>
            <p class="mt-3 text-muted">{message}</p>
        </div>
    }
}
