//! App Configuration
//!
//! Optional overrides read from `<script id="app-config" type="application/json">`.
//! Every field falls back to its default.

use log::LevelFilter;
use serde::Deserialize;

/// Id of the element holding the JSON config
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// localStorage key holding the item list
    pub storage_key: String,
    /// Question asked before deleting an item
    pub confirm_message: String,
    /// `error`, `warn`, `info`, `debug`, `trace` or `off`
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: "items".to_string(),
            confirm_message: "Are you sure?".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Config from the page; defaults when the element is absent or empty.
    /// Malformed JSON is returned as an error so the caller can log it once
    /// the logger is up.
    pub fn load() -> Result<Self, serde_json::Error> {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        Self::from_page_text(raw.as_deref())
    }

    pub fn from_page_text(raw: Option<&str>) -> Result<Self, serde_json::Error> {
        match raw {
            Some(json) if !json.trim().is_empty() => Self::from_json(json),
            _ => Ok(Self::default()),
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
