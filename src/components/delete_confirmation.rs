//! Delete Confirmation Component
//!
//! Modal dialog asking before a record is removed.

use leptos::prelude::*;

use crate::context::use_app_context;

/// Confirm/cancel dialog for the record pending deletion
#[component]
pub fn DeleteConfirmation() -> impl IntoView {
    let ctx = use_app_context();
    let name = ctx.pending_delete_name().unwrap_or_default();

    view! {
        <div class="modal-backdrop">
            <div class="modal delete-modal">
                <h3>"Delete Employee"</h3>
                <p>
                    "Are you sure you want to delete "
                    <span class="employee-name">{name}</span>
                    "? This action cannot be undone."
                </p>
                <div class="modal-actions">
                    <button class="cancel-btn" on:click=move |_| ctx.cancel_delete()>"Cancel"</button>
                    <button class="danger-btn" on:click=move |_| ctx.confirm_delete()>"Delete"</button>
                </div>
            </div>
        </div>
    }
}
