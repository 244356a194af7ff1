//! Pages
//!
//! One top-level component per server-rendered route.

mod auth;
mod dashboard;
mod meal_plans;
mod profile;
mod recommendations;

pub use auth::AuthPage;
pub use dashboard::DashboardPage;
pub use meal_plans::MealPlansPage;
pub use profile::ProfilePage;
pub use recommendations::RecommendationsPage;
