//! UI Chrome
//!
//! Visibility and labels of the controls around the list.

use crate::models::SubmitMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chrome {
    pub clear_visible: bool,
    pub filter_visible: bool,
    pub mode: SubmitMode,
}

impl Chrome {
    pub fn from_rows(row_count: usize, mode: SubmitMode) -> Self {
        let has_rows = row_count > 0;
        Self {
            clear_visible: has_rows,
            filter_visible: has_rows,
            mode,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            SubmitMode::Add => "Add Item",
            SubmitMode::Update => "Update Item",
        }
    }

    pub fn submit_icon(&self) -> &'static str {
        match self.mode {
            SubmitMode::Add => "fa-solid fa-plus",
            SubmitMode::Update => "fa-solid fa-pen",
        }
    }

    pub fn submit_color(&self) -> &'static str {
        match self.mode {
            SubmitMode::Add => "#333",
            SubmitMode::Update => "#228B22",
        }
    }

    /// `display` for the clear button and the filter field
    pub fn controls_display(&self) -> &'static str {
        if self.clear_visible { "block" } else { "none" }
    }
}
