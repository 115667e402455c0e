//! Search Bar Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Free-text filter over name, role and email
#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_app_context();
    let term = Memo::new(move |_| ctx.view_state().search_term);

    view! {
        <div class="search-bar">
            <input
                type="search"
                placeholder="Search by name, role, or email..."
                prop:value=move || term.get()
                on:input=move |ev| ctx.set_search_term(event_target_value(&ev))
            />
            {move || (!term.get().is_empty()).then(|| view! {
                <button class="search-clear" on:click=move |_| ctx.set_search_term(String::new())>
                    "×"
                </button>
            })}
        </div>
    }
}
