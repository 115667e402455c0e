//! Employee Form Component
//!
//! Modal form for adding a new employee or editing an existing one.

use leptos::prelude::*;

use directory_core::EmployeeDraft;

use crate::context::use_app_context;

/// Add/edit form, prefilled from the record being edited
#[component]
pub fn EmployeeForm() -> impl IntoView {
    let ctx = use_app_context();
    let editing = ctx.is_editing();
    let initial = ctx.form_draft();

    let name = RwSignal::new(initial.name);
    let role = RwSignal::new(initial.role);
    let email = RwSignal::new(initial.email);
    let phone = RwSignal::new(initial.phone);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit(EmployeeDraft {
            name: name.get(),
            role: role.get(),
            email: email.get(),
            phone: phone.get(),
        });
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal form-modal">
                <h2>{if editing { "Edit Employee" } else { "Add New Employee" }}</h2>
                <form class="employee-form" on:submit=on_submit>
                    <FormField label="Name" input_type="text" value=name />
                    <FormField label="Role" input_type="text" value=role />
                    <FormField label="Email" input_type="email" value=email />
                    <FormField label="Phone" input_type="tel" value=phone />
                    <div class="modal-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| ctx.close_form()>
                            "Cancel"
                        </button>
                        <button type="submit" class="primary-btn">
                            {if editing { "Update Employee" } else { "Add Employee" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Labelled input bound to a field signal
#[component]
fn FormField(label: &'static str, input_type: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <input
                type=input_type
                required=true
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}
