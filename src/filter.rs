//! Filter View
//!
//! Case-insensitive substring filter over rendered rows. Visibility is
//! decided when the query changes; rows rendered afterwards stay visible
//! until the next query. Hidden rows stay rendered and stored.

use std::collections::HashSet;

use crate::models::{Row, RowId};
use crate::rows::Rows;

/// True when `text` contains `query`, ignoring case. Empty query matches all.
pub fn matches(text: &str, query: &str) -> bool {
    text.to_lowercase().contains(&query.to_lowercase())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterView {
    query: String,
    hidden: HashSet<RowId>,
}

impl FilterView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the query and hide the currently rendered rows that miss it
    pub fn apply(&mut self, query: impl Into<String>, rows: &Rows) {
        self.query = query.into();
        self.hidden = rows
            .iter()
            .filter(|row| !matches(&row.text, &self.query))
            .map(|row| row.id)
            .collect();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_visible(&self, row: &Row) -> bool {
        !self.hidden.contains(&row.id)
    }

    pub fn visible_ids(&self, rows: &Rows) -> Vec<RowId> {
        rows.iter()
            .filter(|row| self.is_visible(row))
            .map(|row| row.id)
            .collect()
    }

    /// CSS `display` value for a row
    pub fn display(&self, row: &Row) -> &'static str {
        if self.is_visible(row) { "flex" } else { "none" }
    }
}
