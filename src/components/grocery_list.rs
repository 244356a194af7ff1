//! Grocery List Component

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::{use_session, SessionContext};
use crate::grocery::GroceryList;
use crate::store::{use_page_store, PageStateStoreFields};

const EXPORT_FILE_NAME: &str = "grocery-list.txt";

fn download(list: &GroceryList) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("{:?}", e))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "not an anchor".to_string())?;
    anchor.set_href(&list.export_data_url());
    anchor.set_download(EXPORT_FILE_NAME);
    anchor.click();
    Ok(())
}

fn export(ctx: SessionContext, list: &GroceryList) {
    if list.is_empty() {
        ctx.notifier.warning("Generate a meal plan first");
        return;
    }
    if let Err(e) = download(list) {
        log::error!("Grocery export failed: {}", e);
    }
}

#[component]
pub fn GroceryListPanel() -> impl IntoView {
    let ctx = use_session();
    let store = use_page_store();
    let list = store.grocery_list();

    view! {
        <div class="card mb-4" id="groceryList">
            <div class="card-header d-flex justify-content-between align-items-center">
                <span>"Grocery List"</span>
                <button
                    type="button"
                    class="btn btn-sm btn-outline-secondary"
                    id="exportGroceryList"
                    on:click=move |_| list.with_untracked(|l| export(ctx, l))
                >
                    "Export"
                </button>
            </div>
            <div class="card-body">
                {move || {
                    let current = list.get();
                    if current.is_empty() {
                        return view! {
                            <p class="text-muted mb-0">"Generate a meal plan to see your grocery list"</p>
                        }
                        .into_any();
                    }
                    let groups = current
                        .groups()
                        .map(|(category, items)| view! {
                            <div class="grocery-category mb-3">
                                <h6 class="text-primary">{category.to_string()}</h6>
                                {items.iter().map(|item| {
                                    let id = item.element_id();
                                    view! {
                                        <div class="form-check">
                                            <input class="form-check-input" type="checkbox" id=id.clone() />
                                            <label class="form-check-label" for=id>
                                                {format!("{} ({})", item.name, item.quantity)}
                                            </label>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        })
                        .collect_view()
                        .into_any();
                    groups
                }}
            </div>
        </div>
    }
}
