use crate::config::AppConfig;
use crate::data::read_catalog_embedded;
use crate::explain::ExplainResult;
use crate::loader::LoadResult;
use crate::model::{AppState, Certification};
use crate::proctor::{self, PageEvent, ProctorMonitor, Verdict};
use crate::routes::{self, Route};
use crate::runner::QuizRunner;
use crate::storage::{KeyValueStore, platform_store};
use crate::task::{self, Task};
use egui_commonmark::CommonMarkCache;
use serde::{Deserialize, Serialize};

// Submodules
pub mod actions;
pub mod explain;
pub mod loading;
pub mod navigation;
pub mod proctoring;
pub mod view_models;

pub use explain::ExplainDialog;

/// Preferences kept by eframe between runs; quiz progress lives in the store.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct UiPrefs {
    pub dark_mode: bool,
    pub search: String,
}

impl Default for UiPrefs {
    fn default() -> Self {
        Self {
            dark_mode: true,
            search: String::new(),
        }
    }
}

/// A question resource being fetched for a certification.
pub struct PendingLoad {
    pub cert_id: String,
    pub url: String,
    pub task: Option<Task<LoadResult>>,
}

pub struct MockTestApp {
    pub config: AppConfig,
    pub store: Box<dyn KeyValueStore>,
    pub catalog: Vec<Certification>,
    pub prefs: UiPrefs,
    pub state: AppState,
    pub route: Route,
    pub runner: Option<QuizRunner>,
    pub loading: Option<PendingLoad>,
    pub load_error: Option<String>,
    pub monitor: Option<ProctorMonitor>,
    pub proctor_warning: Option<String>,
    pub explain: Option<ExplainDialog>,
    pub coming_soon: Option<Certification>,
    pub show_notice: bool,
    pub cm_cache: CommonMarkCache,
    pub last_focused: Option<bool>,
}

impl MockTestApp {
    pub fn new(config: AppConfig, prefs: UiPrefs) -> Self {
        let store = platform_store(&config);
        Self::with_store(config, store, prefs)
    }

    /// Entry point for both runners: prefs from eframe storage, settings
    /// from the environment, first view from the route.
    pub fn from_creation_context(cc: &eframe::CreationContext<'_>) -> Self {
        let prefs = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        let mut app = Self::new(AppConfig::from_env(), prefs);
        app.follow_route(routes::current_route());
        app
    }

    /// App over an explicit store; the landing page shows first and any
    /// pending termination notice is picked up.
    pub fn with_store(
        config: AppConfig,
        mut store: Box<dyn KeyValueStore>,
        prefs: UiPrefs,
    ) -> Self {
        let show_notice = proctor::take_notice(store.as_mut());
        let catalog = read_catalog_embedded();
        log::info!("catalog has {} certifications", catalog.len());

        Self {
            config,
            store,
            catalog,
            prefs,
            state: AppState::Landing,
            route: Route::Landing,
            runner: None,
            loading: None,
            load_error: None,
            monitor: None,
            proctor_warning: None,
            explain: None,
            coming_soon: None,
            show_notice,
            cm_cache: CommonMarkCache::default(),
            last_focused: None,
        }
    }

    /// Background results and page events, once per frame before drawing.
    pub fn tick(&mut self) -> bool {
        let mut changed = self.poll_loading();
        changed |= self.poll_explanation();
        changed
    }

    pub fn is_busy(&self) -> bool {
        self.loading.as_ref().is_some_and(|l| l.task.is_some())
            || self.explain.as_ref().is_some_and(ExplainDialog::is_loading)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::storage::MemoryStore;

    pub fn test_app() -> MockTestApp {
        MockTestApp::with_store(
            AppConfig::default(),
            Box::new(MemoryStore::new()),
            UiPrefs::default(),
        )
    }
}
