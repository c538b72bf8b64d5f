//! Clear All Button Component

use leptos::prelude::*;

use crate::context::AppContext;

/// Removes every item; hidden while the list is empty
#[component]
pub fn ClearButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <button
            id="clear"
            class="btn-clear"
            style=move || format!("display: {};", ctx.list.with(|list| list.chrome().controls_display()))
            on:click=move |_| ctx.clear_all()
        >
            "Clear All"
        </button>
    }
}
