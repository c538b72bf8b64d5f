//! User Prompts
//!
//! Blocking notifications and confirmations.

use crate::error::{ListError, ListResult};

pub trait Prompter {
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
}

/// `window.alert` / `window.confirm`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPrompter;

impl Prompter for BrowserPrompter {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// Log a failed command and alert the user. Passes successes through.
pub fn report<T>(result: ListResult<T>, prompter: &impl Prompter) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            match &e {
                ListError::Storage(_) => log::error!(target: "list", "{}", e),
                _ => log::warn!(target: "list", "rejected: {:?}", e),
            }
            prompter.alert(&e.to_string());
            None
        }
    }
}
