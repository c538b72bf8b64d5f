//! Filter Input Component

use leptos::prelude::*;

use crate::context::AppContext;

/// Filter field, hidden while the list is empty
#[component]
pub fn FilterInput() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div
            class="filter"
            style=move || format!("display: {};", ctx.list.with(|list| list.chrome().controls_display()))
        >
            <input
                type="text"
                class="form-input-filter"
                id="filter"
                placeholder="Filter Items"
                prop:value=move || ctx.filter.with(|filter| filter.query().to_string())
                on:input=move |ev| ctx.apply_filter(event_target_value(&ev))
            />
        </div>
    }
}
