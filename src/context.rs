//! Session Context
//!
//! Per-page state provided via Leptos Context API: configuration, the API
//! client, chart handles, the open modal, favorites and in-flight actions.

use std::future::Future;

use leptos::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::api::{Action, ApiClient, ApiError};
use crate::charts::binding::{self, JsChart};
use crate::charts::{ChartRegistry, ChartSlot, ChartSpec};
use crate::config::AppConfig;
use crate::favorites::FavoriteBook;
use crate::in_flight::InFlightSet;
use crate::modal::Modal;
use crate::models::{NutritionTargets, ViewedItem};
use crate::notification::Notifier;
use crate::recently_viewed::RecentlyViewedStore;
use crate::storage::BrowserStorage;

#[derive(Clone, Copy)]
pub struct SessionContext {
    config: StoredValue<AppConfig>,
    api: StoredValue<ApiClient>,
    /// Server-rendered targets, read once at startup
    pub targets: Option<NutritionTargets>,
    pub notifier: Notifier,
    /// Dialog currently shown (None = closed)
    pub modal: RwSignal<Option<Modal>>,
    pub favorites: RwSignal<FavoriteBook>,
    /// Bumped after each recently viewed change so readers re-render
    pub recent_version: RwSignal<u32>,
    charts: StoredValue<ChartRegistry<JsChart>, LocalStorage>,
    in_flight: StoredValue<InFlightSet>,
}

impl SessionContext {
    pub fn new(config: AppConfig, targets: Option<NutritionTargets>) -> Self {
        let api = ApiClient::new(config.api_base.clone());
        let notifier = Notifier::new(config.notification_timeout_ms);
        Self {
            config: StoredValue::new(config),
            api: StoredValue::new(api),
            targets,
            notifier,
            modal: RwSignal::new(None),
            favorites: RwSignal::new(FavoriteBook::default()),
            recent_version: RwSignal::new(0),
            charts: StoredValue::new_local(ChartRegistry::default()),
            in_flight: StoredValue::new(InFlightSet::default()),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn targets_or_default(&self) -> NutritionTargets {
        self.targets.unwrap_or_default()
    }

    // ========================
    // Requests
    // ========================

    /// Run `request` unless the same action is already outstanding
    pub async fn run<T, F>(&self, action: Action, request: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let mut started = false;
        self.in_flight.update_value(|set| started = set.try_begin(action));
        if !started {
            log::debug!("Ignoring duplicate {:?}", action);
            return Err(ApiError::Busy(action));
        }
        let result = request.await;
        self.in_flight.update_value(|set| set.finish(action));
        result
    }

    /// Run a query; the answer is discarded if a newer one was issued
    pub async fn run_latest<T, F>(&self, action: Action, request: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let mut ticket = 0;
        self.in_flight.update_value(|set| ticket = set.issue(action));
        let result = request.await;
        if self.in_flight.with_value(|set| set.is_current(action, ticket)) {
            result
        } else {
            Err(ApiError::Superseded(action))
        }
    }

    /// Surface a failed request as a notification
    pub fn report(&self, action: Action, err: &ApiError) {
        if err.is_silent() {
            return;
        }
        log::error!("{:?} failed: {}", action, err);
        self.notifier.error(err.user_message(action));
    }

    // ========================
    // Recently viewed
    // ========================

    pub fn recently_viewed(&self) -> RecentlyViewedStore<BrowserStorage> {
        let config = self.config();
        RecentlyViewedStore::new(
            BrowserStorage,
            config.recently_viewed_key,
            config.recently_viewed_capacity,
        )
    }

    pub fn record_view(&self, item: ViewedItem) {
        self.recently_viewed().add(item);
        self.recent_version.update(|v| *v = v.wrapping_add(1));
    }

    // ========================
    // Modals
    // ========================

    pub fn open(&self, modal: Modal) {
        self.modal.set(Some(modal));
    }

    pub fn close_modal(&self) {
        self.modal.set(None);
    }

    // ========================
    // Charts
    // ========================

    /// Draw `spec` into `canvas`, replacing whatever the slot held
    pub fn mount_chart(&self, slot: ChartSlot, canvas: &HtmlCanvasElement, spec: &ChartSpec) {
        // Chart.js refuses a canvas that still has a chart attached
        self.dispose_chart(slot);
        match binding::mount(canvas, spec) {
            Ok(chart) => self.charts.update_value(|charts| {
                charts.replace(slot, chart);
                log::debug!("Drew {:?} ({} charts live)", slot, charts.len());
            }),
            Err(e) => log::warn!("Could not draw {:?}: {}", slot, e),
        }
    }

    pub fn dispose_chart(&self, slot: ChartSlot) {
        self.charts.update_value(|charts| charts.dispose(slot));
    }

    pub fn dispose_charts(&self) {
        self.charts.update_value(|charts| charts.dispose_all());
    }
}

/// Get the session context
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
