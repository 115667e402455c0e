//! Employee Directory App
//!
//! Root component: header, search, table, and whichever modal is open.

use leptos::prelude::*;

use directory_core::{Directory, Modal, RecordStore, StoreConfig};

use crate::components::{DeleteConfirmation, EmployeeForm, EmployeeTable, SearchBar};
use crate::context::AppContext;
use crate::storage::BrowserStorage;

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = RecordStore::load(BrowserStorage, StoreConfig::default());
    let ctx = AppContext::new(Directory::new(store));

    // Provide context to all children
    provide_context(ctx);

    let modal = Memo::new(move |_| ctx.modal());
    let summary = Memo::new(move |_| ctx.summary());

    view! {
        <div class="app-layout">
            <header class="app-header">
                <div>
                    <h1>"Employee Management System"</h1>
                    <p class="subtitle">"Manage your team efficiently"</p>
                </div>
                <button class="primary-btn add-btn" on:click=move |_| ctx.start_add()>
                    "+ Add Employee"
                </button>
            </header>

            <main class="main-content">
                <SearchBar />
                <p class="result-count">{move || summary.get()}</p>
                <EmployeeTable />
            </main>

            // At most one modal, driven by the controller state
            {move || match modal.get() {
                Modal::Idle => view! { <div></div> }.into_any(),
                Modal::FormOpen { .. } => view! { <EmployeeForm /> }.into_any(),
                Modal::ConfirmingDelete { .. } => view! { <DeleteConfirmation /> }.into_any(),
            }}
        </div>
    }
}
