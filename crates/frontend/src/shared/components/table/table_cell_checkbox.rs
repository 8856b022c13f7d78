//! Row-selection checkbox cell

use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;

/// Checkbox cell bound to a selected-id set
///
/// Stops click propagation so toggling never triggers a row click.
#[component]
pub fn TableCellCheckbox(
    /// Id of the row's record
    item_id: i64,

    /// Selected record ids
    #[prop(into)]
    selected: Signal<HashSet<i64>>,

    /// Callback on toggle (item_id, checked)
    on_change: Callback<(i64, bool)>,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || selected.get().contains(&item_id)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run((item_id, checked));
                }
            />
        </TableCell>
    }
}
