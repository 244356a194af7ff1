//! Profile Update Form

use leptos::prelude::*;

use super::form_controls::SelectInput;
use super::options::{ACTIVITY_LEVELS, DIETARY_GOALS};
use crate::actions;
use crate::context::use_session;
use crate::models::ProfileUpdate;

fn positive(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite() && *v > 0.0)
}

/// Validated update, or `None` when weight or height is unusable
pub fn build_profile_update(
    weight: &str,
    height: &str,
    activity_level: &str,
    dietary_goal: &str,
) -> Option<ProfileUpdate> {
    Some(ProfileUpdate {
        weight: positive(weight)?,
        height: positive(height)?,
        activity_level: activity_level.to_string(),
        dietary_goal: dietary_goal.to_string(),
    })
}

#[component]
pub fn ProfileForm() -> impl IntoView {
    let ctx = use_session();
    let weight = RwSignal::new(String::new());
    let height = RwSignal::new(String::new());
    let activity = RwSignal::new("moderate".to_string());
    let goal = RwSignal::new("maintain".to_string());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match build_profile_update(
            &weight.get_untracked(),
            &height.get_untracked(),
            &activity.get_untracked(),
            &goal.get_untracked(),
        ) {
            Some(update) => actions::update_profile(ctx, update),
            None => ctx.notifier.warning("Please enter a valid weight and height"),
        }
    };

    view! {
        <form id="profileForm" on:submit=on_submit>
            <div class="row">
                <div class="col-md-6 mb-3">
                    <label class="form-label" for="profileWeight">"Weight (kg)"</label>
                    <input
                        class="form-control"
                        id="profileWeight"
                        type="number"
                        step="0.1"
                        prop:value=move || weight.get()
                        on:input=move |ev| weight.set(event_target_value(&ev))
                    />
                </div>
                <div class="col-md-6 mb-3">
                    <label class="form-label" for="profileHeight">"Height (cm)"</label>
                    <input
                        class="form-control"
                        id="profileHeight"
                        type="number"
                        step="0.1"
                        prop:value=move || height.get()
                        on:input=move |ev| height.set(event_target_value(&ev))
                    />
                </div>
                <div class="col-md-6 mb-3">
                    <label class="form-label" for="profileActivity">"Activity level"</label>
                    <SelectInput id="profileActivity" options=ACTIVITY_LEVELS value=activity />
                </div>
                <div class="col-md-6 mb-3">
                    <label class="form-label" for="profileGoal">"Dietary goal"</label>
                    <SelectInput id="profileGoal" options=DIETARY_GOALS value=goal />
                </div>
            </div>
            <button type="submit" class="btn btn-primary">"Update Profile"</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_profile_update() {
        let update = build_profile_update(" 72.5 ", "180", "active", "muscle_gain").unwrap();
        assert_eq!(update.weight, 72.5);
        assert_eq!(update.height, 180.0);
        assert_eq!(update.activity_level, "active");
    }

    #[test]
    fn test_rejects_blank_or_non_positive_measurements() {
        assert!(build_profile_update("", "180", "active", "maintain").is_none());
        assert!(build_profile_update("70", "0", "active", "maintain").is_none());
        assert!(build_profile_update("-3", "170", "active", "maintain").is_none());
        assert!(build_profile_update("abc", "170", "active", "maintain").is_none());
    }
}
