use leptos::prelude::*;

use crate::components::{LoginForm, RegisterForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthTab {
    Login,
    Register,
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let (tab, set_tab) = signal(AuthTab::Login);
    let tab_class = move |t: AuthTab| {
        if tab.get() == t { "nav-link active" } else { "nav-link" }
    };

    view! {
        <div class="container auth-container py-5">
            <div class="row justify-content-center">
                <div class="col-lg-6">
                    <div class="card shadow-sm">
                        <div class="card-header">
                            <ul class="nav nav-tabs card-header-tabs">
                                <li class="nav-item">
                                    <button class=move || tab_class(AuthTab::Login) on:click=move |_| set_tab.set(AuthTab::Login)>
                                        "Login"
                                    </button>
                                </li>
                                <li class="nav-item">
                                    <button class=move || tab_class(AuthTab::Register) on:click=move |_| set_tab.set(AuthTab::Register)>
                                        "Register"
                                    </button>
                                </li>
                            </ul>
                        </div>
                        <div class="card-body">
                            <Show
                                when=move || tab.get() == AuthTab::Login
                                fallback=|| view! { <RegisterForm /> }
                            >
                                <LoginForm />
                            </Show>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
