//! List Models
//!
//! Rendered rows and the edit cursor.

/// Opaque handle for a rendered row, never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub u32);

/// One rendered item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: RowId,
    pub text: String,
}

/// Which row, if any, the form is currently updating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Normal,
    Editing(RowId),
}

impl EditState {
    pub fn target(&self) -> Option<RowId> {
        match self {
            EditState::Normal => None,
            EditState::Editing(id) => Some(*id),
        }
    }

    pub fn mode(&self) -> SubmitMode {
        match self {
            EditState::Normal => SubmitMode::Add,
            EditState::Editing(_) => SubmitMode::Update,
        }
    }
}

/// What the submit button does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    Add,
    Update,
}
