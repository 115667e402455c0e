//! Employee Table Component
//!
//! Sortable list of the visible employees with per-row edit/delete.

use leptos::prelude::*;

use directory_core::view::sort_indicator;
use directory_core::{Employee, SortField, SortSpec};

use crate::context::use_app_context;

/// Clickable column header; clicking the active column flips direction
#[component]
fn SortHeader(field: SortField, sort: Memo<SortSpec>) -> impl IntoView {
    let ctx = use_app_context();
    let header_class = move || if sort.get().field == field { "sortable active" } else { "sortable" };

    view! {
        <th class=header_class on:click=move |_| ctx.toggle_sort(field)>
            {field.label()}
            <span class="sort-indicator">{move || sort_indicator(sort.get(), field)}</span>
        </th>
    }
}

#[component]
fn EmployeeRow(employee: Employee) -> impl IntoView {
    let ctx = use_app_context();
    let id = employee.id;
    let mailto = format!("mailto:{}", employee.email);
    let tel = format!("tel:{}", employee.phone);

    view! {
        <tr class="employee-row">
            <td class="name-cell">{employee.name}</td>
            <td>{employee.role}</td>
            <td><a href=mailto>{employee.email}</a></td>
            <td><a href=tel>{employee.phone}</a></td>
            <td class="actions-cell">
                <button class="edit-btn" on:click=move |_| ctx.start_edit(id)>"Edit"</button>
                <button class="delete-btn" on:click=move |_| ctx.request_delete(id)>"Delete"</button>
            </td>
        </tr>
    }
}

#[component]
fn EmptyState(searching: Memo<bool>) -> impl IntoView {
    view! {
        <div class="empty-state">
            <h3>"No employees found"</h3>
            <p>
                {move || if searching.get() {
                    "Try adjusting your search terms"
                } else {
                    "Get started by adding a new employee"
                }}
            </p>
        </div>
    }
}

/// Employee table, or an empty-state panel when nothing matches
#[component]
pub fn EmployeeTable() -> impl IntoView {
    let ctx = use_app_context();
    let rows = Memo::new(move |_| ctx.visible());
    let sort = Memo::new(move |_| ctx.view_state().sort);
    let searching = Memo::new(move |_| !ctx.view_state().search_term.is_empty());

    view! {
        <Show
            when=move || !rows.get().is_empty()
            fallback=move || view! { <EmptyState searching=searching /> }
        >
            <table class="employee-table">
                <thead>
                    <tr>
                        {SortField::ALL
                            .into_iter()
                            .map(|field| view! { <SortHeader field=field sort=sort /> })
                            .collect_view()}
                        <th class="actions-col">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    // Key on every displayed field so an edit re-renders its row
                    <For
                        each=move || rows.get()
                        key=|e| (e.id, e.name.clone(), e.role.clone(), e.email.clone(), e.phone.clone())
                        children=move |employee| view! { <EmployeeRow employee=employee /> }
                    />
                </tbody>
            </table>
        </Show>
    }
}
