//! UI Components
//!
//! Leptos components for the list page.

mod item_form;
mod filter_input;
mod item_list;
mod item_row;
mod clear_button;

pub use item_form::ItemForm;
pub use filter_input::FilterInput;
pub use item_list::ItemList;
pub use item_row::ItemRow;
pub use clear_button::ClearButton;
