use leptos::prelude::*;

use crate::components::ProfileForm;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <div class="container py-4">
            <h1 class="mb-4">"Profile"</h1>
            <div class="card">
                <div class="card-body">
                    <ProfileForm />
                </div>
            </div>
        </div>
    }
}
