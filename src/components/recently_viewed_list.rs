//! Recently Viewed List
//!
//! Re-reads storage whenever the session bumps `recent_version`.

use leptos::prelude::*;

use crate::context::use_session;
use crate::recently_viewed::{recent_rows, RecentRow};

#[component]
pub fn RecentlyViewedList() -> impl IntoView {
    let ctx = use_session();
    let limit = ctx.config().recently_viewed_display;

    let rows = move || {
        ctx.recent_version.track();
        recent_rows(&ctx.recently_viewed().list(), limit)
    };

    view! {
        <div class="card mb-4">
            <div class="card-header">"Recently Viewed"</div>
            <ul id="recentlyViewedList" class="list-group list-group-flush">
                {move || rows().into_iter().map(|row| match row {
                    RecentRow::Entry { name, calories, category } => view! {
                        <li class="list-group-item d-flex justify-content-between align-items-center">
                            <div>
                                <div class="fw-semibold">{name}</div>
                                <small class="text-muted">{category}</small>
                            </div>
                            <span class="badge bg-light text-dark">{format!("{} kcal", calories)}</span>
                        </li>
                    }.into_any(),
                    RecentRow::Empty => view! {
                        <li class="list-group-item text-muted">"No items viewed yet"</li>
                    }.into_any(),
                }).collect_view()}
            </ul>
        </div>
    }
}
