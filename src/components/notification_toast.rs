//! Notification Toast Component

use leptos::prelude::*;

use crate::context::use_session;

/// Fixed-position toast for the current notification
#[component]
pub fn NotificationToast() -> impl IntoView {
    let notifier = use_session().notifier;

    view! {
        {move || notifier.current().map(|n| {
            let class = n.class();
            view! {
                <div class=class role="alert">
                    {n.message}
                    <button
                        type="button"
                        class="btn-close"
                        aria-label="Close"
                        on:click=move |_| notifier.dismiss()
                    ></button>
                </div>
            }
        })}
    }
}
