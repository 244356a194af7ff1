//! Nutrition Frontend App
//!
//! Picks the page from the URL path and provides the session and store.

use leptos::prelude::*;

use crate::components::{ModalHost, NotificationToast};
use crate::config::{load_nutrition_targets, AppConfig};
use crate::context::SessionContext;
use crate::pages::{AuthPage, DashboardPage, MealPlansPage, ProfilePage, RecommendationsPage};
use crate::store::PageState;
use reactive_stores::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Auth,
    Dashboard,
    Recommendations,
    MealPlans,
    Profile,
}

impl Page {
    /// Route for a pathname; unknown paths show the auth page
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "/dashboard" => Page::Dashboard,
            "/recommendations" => Page::Recommendations,
            "/meal-plans" => Page::MealPlans,
            "/profile" => Page::Profile,
            _ => Page::Auth,
        }
    }
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    let targets = load_nutrition_targets();
    let page = Page::from_path(&current_path());
    log::info!("Rendering {:?} page", page);

    let session = SessionContext::new(config, targets);
    provide_context(session);
    on_cleanup(move || session.dispose_charts());
    provide_context(Store::new(PageState::new(session.targets_or_default())));

    let content = match page {
        Page::Auth => view! { <AuthPage /> }.into_any(),
        Page::Dashboard => view! { <DashboardPage /> }.into_any(),
        Page::Recommendations => view! { <RecommendationsPage /> }.into_any(),
        Page::MealPlans => view! { <MealPlansPage /> }.into_any(),
        Page::Profile => view! { <ProfilePage /> }.into_any(),
    };

    view! {
        <NotificationToast />
        {content}
        <ModalHost />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths() {
        assert_eq!(Page::from_path("/dashboard"), Page::Dashboard);
        assert_eq!(Page::from_path("/recommendations/"), Page::Recommendations);
        assert_eq!(Page::from_path("/meal-plans"), Page::MealPlans);
        assert_eq!(Page::from_path("/profile"), Page::Profile);
    }

    #[test]
    fn test_root_and_unknown_paths_show_auth() {
        assert_eq!(Page::from_path("/"), Page::Auth);
        assert_eq!(Page::from_path(""), Page::Auth);
        assert_eq!(Page::from_path("/admin"), Page::Auth);
    }
}
