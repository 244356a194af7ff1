//! Meal Plan Generation Form

use leptos::prelude::*;

use super::options::DIET_TYPES;
use crate::actions;
use crate::api::MealPlanRequest;
use crate::context::use_session;
use crate::store::use_page_store;

/// `compact` drops the field labels for the dashboard sidebar
#[component]
pub fn MealPlanForm(#[prop(optional)] compact: bool) -> impl IntoView {
    let ctx = use_session();
    let store = use_page_store();
    let default_days = ctx.config().default_plan_days;

    let days = RwSignal::new(default_days.to_string());
    let calorie_target = RwSignal::new(String::new());
    let diet_type = RwSignal::new(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = MealPlanRequest::from_inputs(
            &days.get_untracked(),
            &calorie_target.get_untracked(),
            &diet_type.get_untracked(),
            default_days,
        );
        actions::generate_meal_plan(ctx, store, request);
    };

    let label = move |for_id: &'static str, text: &'static str| {
        (!compact).then(|| view! { <label class="form-label" for=for_id>{text}</label> })
    };

    view! {
        <form id="mealPlanForm" class="meal-plan-form" on:submit=on_submit>
            <div class="row g-2 align-items-end">
                <div class="col-md-3">
                    {label("planDays", "Days")}
                    <input
                        class="form-control"
                        id="planDays"
                        type="number"
                        min="1"
                        max="14"
                        placeholder="Days"
                        prop:value=move || days.get()
                        on:input=move |ev| days.set(event_target_value(&ev))
                    />
                </div>
                <div class="col-md-4">
                    {label("calorieTarget", "Calorie target")}
                    <input
                        class="form-control"
                        id="calorieTarget"
                        type="number"
                        placeholder="Calories / day"
                        prop:value=move || calorie_target.get()
                        on:input=move |ev| calorie_target.set(event_target_value(&ev))
                    />
                </div>
                <div class="col-md-3">
                    {label("dietType", "Diet type")}
                    <select
                        class="form-select"
                        id="dietType"
                        on:change=move |ev| diet_type.set(event_target_value(&ev))
                        prop:value=move || diet_type.get()
                    >
                        <option value="">"Any diet"</option>
                        {DIET_TYPES.iter().map(|(v, l)| view! { <option value=*v>{*l}</option> }).collect_view()}
                    </select>
                </div>
                <div class="col-md-2">
                    <button type="submit" class="btn btn-primary w-100">"Generate"</button>
                </div>
            </div>
        </form>
    }
}
