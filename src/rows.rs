//! Rendered Rows
//!
//! Ordered set of rows currently shown in the list. The `ItemList`
//! component projects it into `<li>` elements.

use crate::models::{Row, RowId};

#[derive(Debug, Clone, Default)]
pub struct Rows {
    rows: Vec<Row>,
    next_id: u32,
}

impl Rows {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all rows with one row per item, in order
    pub fn render_all(&mut self, items: &[String]) {
        self.rows.clear();
        for item in items {
            self.render_one(item);
        }
    }

    /// Append a row without touching existing ones
    pub fn render_one(&mut self, text: &str) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push(Row { id, text: text.to_string() });
        id
    }

    /// Remove every row showing `text`, returns how many went
    pub fn remove_text(&mut self, text: &str) -> usize {
        let before = self.rows.len();
        self.rows.retain(|row| row.text != text);
        before - self.rows.len()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn get(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    pub fn texts(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.text.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
