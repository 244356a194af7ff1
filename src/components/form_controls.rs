//! Form Controls
//!
//! Select and checkbox-group inputs bound to signals.

use leptos::prelude::*;

/// `<select>` over static (value, label) options
#[component]
pub fn SelectInput(
    options: &'static [(&'static str, &'static str)],
    value: RwSignal<String>,
    /// Extra leading "all" option with this label
    #[prop(optional)]
    any_label: Option<&'static str>,
    #[prop(optional, into)] id: String,
) -> impl IntoView {
    view! {
        <select
            class="form-select"
            id=id
            on:change=move |ev| value.set(event_target_value(&ev))
            prop:value=move || value.get()
        >
            {any_label.map(|label| view! {
                <option value="all" selected=move || value.get() == "all">{label}</option>
            })}
            {options.iter().map(|(v, label)| {
                let v = *v;
                view! {
                    <option value=v selected=move || value.get() == v>{*label}</option>
                }
            }).collect_view()}
        </select>
    }
}

/// Checkboxes sharing `name`; `selected` holds the checked values
#[component]
pub fn CheckboxGroup(
    name: &'static str,
    options: &'static [(&'static str, &'static str)],
    selected: RwSignal<Vec<String>>,
) -> impl IntoView {
    view! {
        <div class="checkbox-group">
            {options.iter().map(|(v, label)| {
                let v = *v;
                let id = format!("{}-{}", name, v);
                view! {
                    <div class="form-check form-check-inline">
                        <input
                            class="form-check-input"
                            type="checkbox"
                            id=id.clone()
                            name=name
                            value=v
                            prop:checked=move || selected.get().iter().any(|s| s == v)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                selected.update(|values| {
                                    values.retain(|s| s != v);
                                    if checked {
                                        values.push(v.to_string());
                                    }
                                });
                            }
                        />
                        <label class="form-check-label" for=id>{*label}</label>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
