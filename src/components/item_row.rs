//! Item Row Component
//!
//! One `<li>` per rendered row. Clicking the row selects it for editing,
//! clicking the × button deletes it.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Row;

#[component]
pub fn ItemRow(row: Row) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = row.id;
    let text = row.text.clone();

    let is_editing = move || ctx.list.with(|list| list.is_editing(id));
    let display = move || format!("display: {};", ctx.filter.with(|filter| filter.display(&row)));

    view! {
        <li
            class=move || if is_editing() { "edit-mode" } else { "" }
            style=display
            on:click=move |_| ctx.select(id)
        >
            {text}
            <button
                class="remove-item btn-link text-red"
                on:click=move |ev| {
                    ev.stop_propagation();
                    ctx.delete(id);
                }
            >
                <i class="fa-solid fa-xmark"></i>
            </button>
        </li>
    }
}
