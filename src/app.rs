//! Item List App
//!
//! Root component: form, filter, list and clear button.

use leptos::prelude::*;

use crate::components::{ClearButton, FilterInput, ItemForm, ItemList};
use crate::config::AppConfig;
use crate::context::AppContext;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ctx = AppContext::new(&config);
    provide_context(ctx);

    // One-time startup replay from localStorage
    ctx.load();

    let item_count = move || {
        ctx.list.with(|list| {
            let total = list.rows().len();
            let shown = ctx.filter.with(|filter| filter.visible_ids(list.rows()).len());
            if shown == total {
                format!("{} items", total)
            } else {
                format!("{} of {} items", shown, total)
            }
        })
    };

    view! {
        <div class="container">
            <header>
                <h1>"Shopping List"</h1>
            </header>

            <ItemForm />
            <FilterInput />
            <ItemList />
            <ClearButton />

            <p class="item-count">{item_count}</p>
        </div>
    }
}
