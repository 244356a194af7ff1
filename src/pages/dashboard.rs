//! Dashboard Page
//!
//! Targets, progress, charts and quick access to the other workflows.

use leptos::prelude::*;

use crate::actions;
use crate::api::{RecommendationQuery, ANY_FILTER};
use crate::charts::{calorie_trend, macro_doughnut, nutrient_trend, ChartSlot};
use crate::components::{
    ChartCanvas, DashboardStats, MealPlanForm, MealPlanView, ProfileForm, QuickRecommendButtons,
    RecommendationList,
};
use crate::context::use_session;
use crate::nutrition::MacroSplit;
use crate::store::{use_page_store, PageStateStoreFields};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_session();
    let store = use_page_store();
    let targets = store.targets();

    let macro_spec =
        Signal::derive(move || macro_doughnut(MacroSplit::from_targets(&targets.get())));
    let calorie_spec = Signal::derive(move || calorie_trend(targets.get().daily_calories));
    let nutrient_spec = Signal::derive(nutrient_trend);

    let recommend = move |meal_type: String| {
        let query = RecommendationQuery::from_filters(&meal_type, ANY_FILTER, ANY_FILTER, "score");
        actions::load_recommendations(ctx, store, query);
    };

    view! {
        <div class="container py-4">
            <h1 class="mb-4">"Dashboard"</h1>
            <DashboardStats />

            <div class="row">
                <div class="col-lg-4 mb-4">
                    <div class="card h-100">
                        <div class="card-header">"Macro Targets"</div>
                        <div class="card-body">
                            <ChartCanvas slot=ChartSlot::Macro spec=macro_spec />
                        </div>
                    </div>
                </div>
                <div class="col-lg-8 mb-4">
                    <div class="card h-100">
                        <div class="card-header">"Calories This Week"</div>
                        <div class="card-body">
                            <ChartCanvas slot=ChartSlot::CalorieTrend spec=calorie_spec />
                        </div>
                    </div>
                </div>
            </div>

            <div class="card mb-4">
                <div class="card-header">"Nutrient Trends"</div>
                <div class="card-body">
                    <ChartCanvas slot=ChartSlot::NutrientTrend spec=nutrient_spec />
                </div>
            </div>

            <section class="mb-4">
                <h4>"Quick Recommendations"</h4>
                <QuickRecommendButtons on_pick=recommend />
                <RecommendationList />
            </section>

            <section class="mb-4">
                <h4>"Meal Plan"</h4>
                <MealPlanForm compact=true />
                <div class="mt-3">
                    <MealPlanView />
                </div>
            </section>

            <section class="mb-4">
                <h4>"Update Profile"</h4>
                <ProfileForm />
            </section>
        </div>
    }
}
