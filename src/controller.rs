//! List Controller
//!
//! Command handlers for the list. Each command updates storage and the
//! rendered rows together, then refreshes the form state.
//!
//! Submit is a small state machine over [`EditState`]:
//! - `Normal`: reject empty or duplicate text, otherwise append.
//! - `Editing(row)`: drop the row's old text everywhere, append the new text.

use crate::chrome::Chrome;
use crate::error::{ListError, ListResult};
use crate::models::{EditState, Row, RowId, SubmitMode};
use crate::prompt::Prompter;
use crate::rows::Rows;
use crate::storage::{ItemStorage, KeyValueStore};

/// Result of a successful submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submitted {
    Added(RowId),
    Updated { previous: String, row: RowId },
}

#[derive(Debug, Clone)]
pub struct ListController<S> {
    storage: ItemStorage<S>,
    rows: Rows,
    edit: EditState,
    input: String,
    confirm_message: String,
}

impl<S: KeyValueStore> ListController<S> {
    pub fn new(storage: ItemStorage<S>, confirm_message: impl Into<String>) -> Self {
        Self {
            storage,
            rows: Rows::new(),
            edit: EditState::Normal,
            input: String::new(),
            confirm_message: confirm_message.into(),
        }
    }

    /// Startup: replay the persisted snapshot into rows
    pub fn load(&mut self) {
        let items = self.storage.load();
        log::info!(target: "list", "loaded {} items from '{}'", items.len(), self.storage.key());
        self.rows.render_all(&items);
        self.refresh();
    }

    /// Submit whatever the input field holds
    pub fn submit_input(&mut self) -> ListResult<Submitted> {
        let text = self.input.clone();
        self.submit(&text)
    }

    pub fn submit(&mut self, text: &str) -> ListResult<Submitted> {
        if text.is_empty() {
            return Err(ListError::EmptyItem);
        }

        let editing = self
            .edit
            .target()
            .and_then(|id| self.rows.get(id))
            .map(|row| row.text.clone());

        let submitted = match editing {
            Some(previous) => {
                // Old text goes everywhere it appears; new text lands at the end
                let mut items = self.storage.load();
                items.retain(|i| *i != previous);
                items.push(text.to_string());
                self.storage.save(&items)?;

                self.rows.remove_text(&previous);
                let row = self.rows.render_one(text);
                log::info!(target: "list", "updated '{}' -> '{}'", previous, text);
                Submitted::Updated { previous, row }
            }
            None => {
                if self.storage.contains(text) {
                    return Err(ListError::Duplicate(text.to_string()));
                }
                self.storage.add(text)?;

                let row = self.rows.render_one(text);
                log::info!(target: "list", "added '{}'", text);
                Submitted::Added(row)
            }
        };

        self.refresh();
        Ok(submitted)
    }

    /// Put a row into edit. Returns false for unknown rows.
    pub fn select_for_edit(&mut self, id: RowId) -> bool {
        let Some(row) = self.rows.get(id) else {
            return false;
        };
        self.input = row.text.clone();
        self.edit = EditState::Editing(id);
        log::debug!(target: "list", "editing '{}'", self.input);
        true
    }

    /// Remove a row's text from rows and storage after confirmation.
    /// Returns whether anything was deleted.
    pub fn delete(&mut self, id: RowId, prompter: &impl Prompter) -> ListResult<bool> {
        let Some(text) = self.rows.get(id).map(|row| row.text.clone()) else {
            return Ok(false);
        };
        if !prompter.confirm(&self.confirm_message) {
            log::debug!(target: "list", "delete of '{}' declined", text);
            return Ok(false);
        }

        self.storage.remove(&text)?;
        let removed = self.rows.remove_text(&text);
        log::info!(target: "list", "deleted '{}' ({} rows)", text, removed);

        self.refresh();
        Ok(true)
    }

    pub fn clear_all(&mut self) {
        self.rows.clear();
        self.storage.clear();
        log::info!(target: "list", "cleared all items");
        self.refresh();
    }

    /// Back to add mode with an empty input
    pub fn refresh(&mut self) {
        self.edit = EditState::Normal;
        self.input.clear();
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn rows(&self) -> &Rows {
        &self.rows
    }

    pub fn row_list(&self) -> Vec<Row> {
        self.rows.iter().cloned().collect()
    }

    pub fn edit_state(&self) -> EditState {
        self.edit
    }

    pub fn is_editing(&self, id: RowId) -> bool {
        self.edit == EditState::Editing(id)
    }

    pub fn mode(&self) -> SubmitMode {
        self.edit.mode()
    }

    pub fn chrome(&self) -> Chrome {
        Chrome::from_rows(self.rows.len(), self.mode())
    }

    #[cfg(test)]
    pub(crate) fn storage(&self) -> &ItemStorage<S> {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::report;
    use crate::prompt::scripted::ScriptedPrompter;
    use crate::storage::memory::MemoryStore;

    fn controller_with(items: &[&str]) -> ListController<MemoryStore> {
        let mut controller = ListController::new(ItemStorage::new(MemoryStore::default(), "items"), "Are you sure?");
        for item in items {
            controller.submit(item).unwrap();
        }
        controller
    }

    fn row_id(controller: &ListController<MemoryStore>, text: &str) -> RowId {
        controller.rows().iter().find(|row| row.text == text).unwrap().id
    }

    fn assert_settled(controller: &ListController<MemoryStore>) {
        let chrome = controller.chrome();
        let has_rows = !controller.rows().is_empty();
        assert_eq!(chrome.clear_visible, has_rows);
        assert_eq!(chrome.filter_visible, has_rows);
        assert_eq!(controller.mode(), SubmitMode::Add);
        assert_eq!(controller.edit_state(), EditState::Normal);
        assert_eq!(controller.input(), "");
    }

    #[test]
    fn test_adds_persist_in_order() {
        let controller = controller_with(&["milk", "eggs", "bread"]);

        assert_eq!(controller.storage().load(), vec!["milk", "eggs", "bread"]);
        assert_eq!(controller.rows().texts(), vec!["milk", "eggs", "bread"]);
        assert_settled(&controller);
    }

    #[test]
    fn test_load_replays_snapshot() {
        let store = MemoryStore::with("items", r#"["milk","eggs"]"#);
        let mut controller = ListController::new(ItemStorage::new(store, "items"), "Are you sure?");
        controller.load();

        assert_eq!(controller.rows().texts(), vec!["milk", "eggs"]);
        assert_settled(&controller);
    }

    #[test]
    fn test_load_with_corrupt_snapshot_starts_empty() {
        let store = MemoryStore::with("items", "not json");
        let mut controller = ListController::new(ItemStorage::new(store, "items"), "Are you sure?");
        controller.load();

        assert!(controller.rows().is_empty());
        assert!(!controller.chrome().clear_visible);
    }

    #[test]
    fn test_duplicate_add_is_rejected() {
        let mut controller = controller_with(&["milk"]);
        controller.set_input("milk");

        let err = controller.submit("milk").unwrap_err();
        assert_eq!(err, ListError::Duplicate("milk".to_string()));
        assert_eq!(err.to_string(), "That item already exists!");
        assert_eq!(controller.storage().load(), vec!["milk"]);
        assert_eq!(controller.rows().len(), 1);
        assert_eq!(controller.input(), "milk");
    }

    #[test]
    fn test_empty_submit_is_rejected_in_both_states() {
        let mut controller = controller_with(&["milk"]);
        assert_eq!(controller.submit(""), Err(ListError::EmptyItem));

        let milk = row_id(&controller, "milk");
        controller.select_for_edit(milk);
        assert_eq!(controller.submit(""), Err(ListError::EmptyItem));

        assert_eq!(controller.storage().load(), vec!["milk"]);
        assert_eq!(controller.rows().texts(), vec!["milk"]);
        assert!(controller.is_editing(milk));
    }

    #[test]
    fn test_select_for_edit() {
        let mut controller = controller_with(&["milk", "eggs"]);
        let eggs = row_id(&controller, "eggs");

        assert!(controller.select_for_edit(eggs));
        assert_eq!(controller.input(), "eggs");
        assert_eq!(controller.mode(), SubmitMode::Update);
        assert_eq!(controller.chrome().submit_label(), "Update Item");

        // Only one row can be in edit
        let milk = row_id(&controller, "milk");
        controller.select_for_edit(milk);
        assert!(controller.is_editing(milk));
        assert!(!controller.is_editing(eggs));

        assert!(!controller.select_for_edit(RowId(999)));
        assert!(controller.is_editing(milk));
    }

    #[test]
    fn test_edit_moves_item_to_end() {
        let mut controller = controller_with(&["milk", "eggs"]);
        let milk = row_id(&controller, "milk");
        controller.select_for_edit(milk);

        let submitted = controller.submit("bread").unwrap();
        assert!(matches!(submitted, Submitted::Updated { ref previous, .. } if previous == "milk"));
        assert_eq!(controller.storage().load(), vec!["eggs", "bread"]);
        assert_eq!(controller.rows().texts(), vec!["eggs", "bread"]);
        assert_settled(&controller);
    }

    #[test]
    fn test_edit_skips_duplicate_check() {
        let mut controller = controller_with(&["milk", "eggs"]);
        let milk = row_id(&controller, "milk");
        controller.select_for_edit(milk);

        controller.submit("eggs").unwrap();
        assert_eq!(controller.storage().load(), vec!["eggs", "eggs"]);
        assert_eq!(controller.rows().len(), 2);
    }

    #[test]
    fn test_confirmed_delete_removes_all_matches() {
        let store = MemoryStore::with("items", r#"["eggs","bread","eggs"]"#);
        let mut controller = ListController::new(ItemStorage::new(store, "items"), "Are you sure?");
        controller.load();
        let eggs = row_id(&controller, "eggs");
        let prompter = ScriptedPrompter::answering(true);

        assert_eq!(controller.delete(eggs, &prompter), Ok(true));
        assert_eq!(prompter.confirms.borrow().as_slice(), ["Are you sure?"]);
        assert_eq!(controller.storage().load(), vec!["bread"]);
        assert_eq!(controller.rows().texts(), vec!["bread"]);
        assert_settled(&controller);
    }

    #[test]
    fn test_declined_delete_changes_nothing() {
        let mut controller = controller_with(&["eggs", "bread"]);
        let eggs = row_id(&controller, "eggs");
        controller.select_for_edit(eggs);
        let prompter = ScriptedPrompter::answering(false);

        assert_eq!(controller.delete(eggs, &prompter), Ok(false));
        assert_eq!(controller.storage().load(), vec!["eggs", "bread"]);
        assert_eq!(controller.rows().len(), 2);
        assert!(controller.is_editing(eggs));
    }

    #[test]
    fn test_delete_unknown_row_does_not_prompt() {
        let mut controller = controller_with(&["eggs"]);
        let prompter = ScriptedPrompter::answering(true);

        assert_eq!(controller.delete(RowId(42), &prompter), Ok(false));
        assert!(prompter.confirms.borrow().is_empty());
    }

    #[test]
    fn test_last_delete_hides_controls() {
        let mut controller = controller_with(&["eggs"]);
        let eggs = row_id(&controller, "eggs");

        controller.delete(eggs, &ScriptedPrompter::answering(true)).unwrap();
        assert!(controller.rows().is_empty());
        assert_settled(&controller);
    }

    #[test]
    fn test_clear_all() {
        let mut controller = controller_with(&["milk", "eggs"]);
        let milk = row_id(&controller, "milk");
        controller.select_for_edit(milk);

        controller.clear_all();
        assert!(controller.rows().is_empty());
        assert_eq!(controller.storage().store().raw("items"), None);
        assert_settled(&controller);

        // Clearing an empty list is fine too
        controller.clear_all();
        assert!(controller.rows().is_empty());
    }

    #[test]
    fn test_storage_failure_leaves_rows_untouched() {
        let mut controller = controller_with(&["milk"]);
        controller.storage().store().fail_writes.set(true);

        let err = controller.submit("eggs").unwrap_err();
        assert!(matches!(err, ListError::Storage(_)));
        assert_eq!(controller.rows().texts(), vec!["milk"]);

        let milk = row_id(&controller, "milk");
        let result = controller.delete(milk, &ScriptedPrompter::answering(true));
        assert!(result.is_err());
        assert_eq!(controller.rows().texts(), vec!["milk"]);
    }

    #[test]
    fn test_rejected_submit_alerts_user() {
        let mut controller = controller_with(&["milk"]);
        let prompter = ScriptedPrompter::answering(true);

        controller.set_input("milk");
        assert_eq!(report(controller.submit_input(), &prompter), None);
        controller.set_input("");
        assert_eq!(report(controller.submit_input(), &prompter), None);

        assert_eq!(
            prompter.alerts.borrow().as_slice(),
            ["That item already exists!", "Please add an item"]
        );
        assert_eq!(controller.storage().load(), vec!["milk"]);
    }

    #[test]
    fn test_accepted_submit_does_not_alert() {
        let mut controller = controller_with(&[]);
        let prompter = ScriptedPrompter::answering(true);

        controller.set_input("eggs");
        let submitted = report(controller.submit_input(), &prompter);
        assert!(matches!(submitted, Some(Submitted::Added(_))));
        assert!(prompter.alerts.borrow().is_empty());
        assert_eq!(controller.input(), "");
    }
}
