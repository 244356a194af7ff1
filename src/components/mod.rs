//! UI Components
//!
//! Reusable Leptos components.

mod auth_forms;
mod chart_canvas;
mod dashboard_stats;
mod favorites_list;
mod form_controls;
mod grocery_list;
mod loading;
mod meal_plan_form;
mod meal_plan_view;
mod modal_host;
mod notification_toast;
mod nutrition_summary;
mod options;
mod profile_form;
mod recently_viewed_list;
mod recommendation_card;
mod recommendation_filters;
mod recommendation_list;

pub use auth_forms::{LoginForm, RegisterForm};
pub use chart_canvas::ChartCanvas;
pub use dashboard_stats::{DashboardStats, QuickRecommendButtons};
pub use favorites_list::FavoritesList;
pub use grocery_list::GroceryListPanel;
pub use meal_plan_form::MealPlanForm;
pub use meal_plan_view::{MealPlanView, SavePlanButton};
pub use modal_host::ModalHost;
pub use notification_toast::NotificationToast;
pub use nutrition_summary::NutritionSummaryPanel;
pub use profile_form::ProfileForm;
pub use recently_viewed_list::RecentlyViewedList;
pub use recommendation_filters::{FilterState, RecommendationFilters};
pub use recommendation_list::RecommendationList;
