//! Item List Component
//!
//! Renders the controller's rows in order, keyed by row id.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::context::AppContext;

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let rows = move || ctx.list.with(|list| list.row_list());

    view! {
        <ul id="item-list" class="items">
            <For
                each=rows
                key=|row| row.id
                children=move |row| view! { <ItemRow row=row /> }
            />
        </ul>
    }
}
