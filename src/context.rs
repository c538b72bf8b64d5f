//! Application Context
//!
//! Shared state provided via Leptos Context API. Components call the
//! command methods here instead of touching the controller directly.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::controller::ListController;
use crate::filter::FilterView;
use crate::models::RowId;
use crate::prompt::{report, BrowserPrompter};
use crate::storage::{ItemStorage, LocalStorage};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Rows, edit state and input text
    pub list: RwSignal<ListController<LocalStorage>>,
    /// Current filter query and the rows it hid
    pub filter: RwSignal<FilterView>,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Self {
        let storage = ItemStorage::new(LocalStorage, config.storage_key.clone());
        Self {
            list: RwSignal::new(ListController::new(storage, config.confirm_message.clone())),
            filter: RwSignal::new(FilterView::new()),
        }
    }

    /// Replay persisted items into the list
    pub fn load(&self) {
        self.list.update(|list| list.load());
    }

    /// Add or update, depending on the edit state
    pub fn submit(&self) {
        if let Some(result) = self.list.try_update(|list| list.submit_input()) {
            report(result, &BrowserPrompter);
        }
    }

    pub fn select(&self, id: RowId) {
        self.list.update(|list| {
            list.select_for_edit(id);
        });
    }

    pub fn delete(&self, id: RowId) {
        if let Some(result) = self.list.try_update(|list| list.delete(id, &BrowserPrompter)) {
            report(result, &BrowserPrompter);
        }
    }

    pub fn clear_all(&self) {
        self.list.update(|list| list.clear_all());
    }

    pub fn set_input(&self, text: String) {
        self.list.update(|list| list.set_input(text));
    }

    /// Re-run the filter over the rows rendered right now
    pub fn apply_filter(&self, query: String) {
        let list = self.list;
        self.filter.update(|filter| list.with_untracked(|list| filter.apply(query, list.rows())));
    }
}
