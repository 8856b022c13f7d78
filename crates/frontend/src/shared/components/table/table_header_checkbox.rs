//! Select-all checkbox for the table header
//!
//! Shows checked / unchecked / indeterminate depending on how many of the
//! visible rows are selected; clicking toggles between "select all visible"
//! and "clear all visible".

use leptos::prelude::event_target_checked;
use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;
use wasm_bindgen::JsCast;

#[component]
pub fn TableHeaderCheckbox<T>(
    /// Rows currently shown in the table
    #[prop(into)]
    items: Signal<Vec<T>>,

    /// Selected record ids
    #[prop(into)]
    selected: Signal<HashSet<i64>>,

    /// Extracts the record id from a row
    get_id: Callback<T, i64>,

    /// Callback on toggle (true = select all visible, false = clear visible)
    on_change: Callback<bool>,

    /// Extra header content rendered next to the checkbox
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let checkbox_state = Signal::derive(move || {
        let current_items = items.get();
        let sel = selected.get();

        if current_items.is_empty() {
            return CheckboxState::Unchecked;
        }

        let selected_count = current_items
            .iter()
            .filter(|&item| sel.contains(&get_id.run(item.clone())))
            .count();

        if selected_count == 0 {
            CheckboxState::Unchecked
        } else if selected_count == current_items.len() {
            CheckboxState::Checked
        } else {
            CheckboxState::Indeterminate
        }
    });

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // The indeterminate flag has no HTML attribute, so it is set on the DOM
    // node directly.
    Effect::new(move |_| {
        if let Some(input) = checkbox_ref.get() {
            let state = checkbox_state.get();
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                let is_indeterminate = matches!(state, CheckboxState::Indeterminate);
                input_el.set_indeterminate(is_indeterminate);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || matches!(checkbox_state.get(), CheckboxState::Checked)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run(checked);
                }
            />
            {children.map(|c| c())}
        </TableHeaderCell>
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}
