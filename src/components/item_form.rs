//! Item Form Component
//!
//! Text input plus a submit button that switches between add and update.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let chrome = move || ctx.list.with(|list| list.chrome());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <form id="item-form" on:submit=on_submit>
            <div class="form-control">
                <input
                    type="text"
                    class="form-input"
                    id="item-input"
                    name="item"
                    placeholder="Enter Item"
                    prop:value=move || ctx.list.with(|list| list.input().to_string())
                    on:input=move |ev| ctx.set_input(event_target_value(&ev))
                />
            </div>
            <div class="form-control">
                <button
                    type="submit"
                    class="btn"
                    style=move || format!("background-color: {};", chrome().submit_color())
                >
                    <i class=move || chrome().submit_icon()></i>
                    " "
                    {move || chrome().submit_label()}
                </button>
            </div>
        </form>
    }
}
