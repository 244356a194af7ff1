//! Login and Registration Forms

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::form_controls::{CheckboxGroup, SelectInput};
use super::options::{
    ACTIVITY_LEVELS, ALLERGIES, CUISINES, DIETARY_GOALS, GENDERS, HEALTH_CONDITIONS,
};
use crate::api::{parse_food_list, Action, AuthRedirect, LoginRequest, RegisterRequest};
use crate::context::{use_session, SessionContext};

/// Navigate after the success toast had a moment on screen
fn redirect_later(ctx: SessionContext, redirect: AuthRedirect) {
    let target = redirect.target().to_string();
    let delay = ctx.config().redirect_delay_ms;
    spawn_local(async move {
        TimeoutFuture::new(delay).await;
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(&target) {
                log::error!("Redirect to {} failed: {:?}", target, e);
            }
        }
    });
}

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_session();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = LoginRequest {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        spawn_local(async move {
            let api = ctx.api();
            match ctx.run(Action::Login, async move { api.login(&request).await }).await {
                Ok(redirect) => {
                    ctx.notifier.success("Login successful!");
                    redirect_later(ctx, redirect);
                }
                Err(e) => ctx.report(Action::Login, &e),
            }
        });
    };

    view! {
        <form id="loginForm" class="auth-form" on:submit=on_submit>
            <div class="mb-3">
                <label class="form-label" for="loginUsername">"Username"</label>
                <input
                    class="form-control"
                    id="loginUsername"
                    type="text"
                    required
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
            </div>
            <div class="mb-3">
                <label class="form-label" for="loginPassword">"Password"</label>
                <input
                    class="form-control"
                    id="loginPassword"
                    type="password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </div>
            <button type="submit" class="btn btn-primary w-100">"Login"</button>
        </form>
    }
}

#[component]
pub fn RegisterForm() -> impl IntoView {
    let ctx = use_session();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let age = RwSignal::new(String::new());
    let gender = RwSignal::new("other".to_string());
    let weight = RwSignal::new(String::new());
    let height = RwSignal::new(String::new());
    let activity = RwSignal::new("moderate".to_string());
    let goal = RwSignal::new("maintain".to_string());
    let health_conditions = RwSignal::new(Vec::<String>::new());
    let cuisines = RwSignal::new(Vec::<String>::new());
    let allergies = RwSignal::new(Vec::<String>::new());
    let disliked = RwSignal::new(String::new());
    let favorites = RwSignal::new(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = RegisterRequest {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            age: age.get_untracked().trim().parse().ok(),
            gender: gender.get_untracked(),
            weight: weight.get_untracked().trim().parse().ok(),
            height: height.get_untracked().trim().parse().ok(),
            activity_level: activity.get_untracked(),
            dietary_goal: goal.get_untracked(),
            health_conditions: health_conditions.get_untracked(),
            preferred_cuisines: cuisines.get_untracked(),
            allergies: allergies.get_untracked(),
            disliked_foods: parse_food_list(&disliked.get_untracked()),
            favorite_foods: parse_food_list(&favorites.get_untracked()),
        };
        spawn_local(async move {
            let api = ctx.api();
            match ctx.run(Action::Register, async move { api.register(&request).await }).await {
                Ok(redirect) => {
                    ctx.notifier.success("Registration successful!");
                    redirect_later(ctx, redirect);
                }
                Err(e) => ctx.report(Action::Register, &e),
            }
        });
    };

    let text_input = move |id: &'static str,
                           label: &'static str,
                           kind: &'static str,
                           value: RwSignal<String>| {
        view! {
            <div class="col-md-6 mb-3">
                <label class="form-label" for=id>{label}</label>
                <input
                    class="form-control"
                    id=id
                    type=kind
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </div>
        }
    };

    view! {
        <form id="registerForm" class="auth-form" on:submit=on_submit>
            <div class="row">
                {text_input("registerUsername", "Username", "text", username)}
                {text_input("registerEmail", "Email", "email", email)}
                {text_input("registerPassword", "Password", "password", password)}
                {text_input("registerAge", "Age", "number", age)}
                <div class="col-md-6 mb-3">
                    <label class="form-label" for="registerGender">"Gender"</label>
                    <SelectInput id="registerGender" options=GENDERS value=gender />
                </div>
                {text_input("registerWeight", "Weight (kg)", "number", weight)}
                {text_input("registerHeight", "Height (cm)", "number", height)}
                <div class="col-md-6 mb-3">
                    <label class="form-label" for="registerActivity">"Activity level"</label>
                    <SelectInput id="registerActivity" options=ACTIVITY_LEVELS value=activity />
                </div>
                <div class="col-md-6 mb-3">
                    <label class="form-label" for="registerGoal">"Dietary goal"</label>
                    <SelectInput id="registerGoal" options=DIETARY_GOALS value=goal />
                </div>
            </div>

            <div class="mb-3">
                <label class="form-label">"Health conditions"</label>
                <CheckboxGroup name="healthConditions" options=HEALTH_CONDITIONS selected=health_conditions />
            </div>
            <div class="mb-3">
                <label class="form-label">"Preferred cuisines"</label>
                <CheckboxGroup name="preferredCuisines" options=CUISINES selected=cuisines />
            </div>
            <div class="mb-3">
                <label class="form-label">"Allergies"</label>
                <CheckboxGroup name="allergies" options=ALLERGIES selected=allergies />
            </div>

            <div class="row">
                {text_input("dislikedFoods", "Disliked foods (comma separated)", "text", disliked)}
                {text_input("favoriteFoodsInput", "Favorite foods (comma separated)", "text", favorites)}
            </div>

            <button type="submit" class="btn btn-success w-100">"Create account"</button>
        </form>
    }
}
