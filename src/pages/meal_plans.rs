use leptos::prelude::*;

use crate::components::{
    GroceryListPanel, MealPlanForm, MealPlanView, NutritionSummaryPanel, SavePlanButton,
};

#[component]
pub fn MealPlansPage() -> impl IntoView {
    view! {
        <div class="container py-4">
            <div class="d-flex justify-content-between align-items-center mb-4">
                <h1 class="mb-0">"Meal Plans"</h1>
                <SavePlanButton />
            </div>
            <div class="card mb-4">
                <div class="card-body">
                    <MealPlanForm />
                </div>
            </div>
            <div class="row">
                <div class="col-lg-8">
                    <MealPlanView />
                </div>
                <div class="col-lg-4">
                    <NutritionSummaryPanel />
                    <GroceryListPanel />
                </div>
            </div>
        </div>
    }
}
