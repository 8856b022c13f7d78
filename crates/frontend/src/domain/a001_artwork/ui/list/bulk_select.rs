use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Parses the popover input and bounds it to `1..=total`
///
/// Empty or non-numeric input yields nothing; the form simply stays open.
fn parse_requested(raw: &str, total: usize) -> Option<usize> {
    let n: usize = raw.trim().parse().ok()?;
    if n == 0 || total == 0 {
        return None;
    }
    Some(n.min(total))
}

/// Popover form requesting a bulk selection
///
/// A chevron button in the header row toggles a small panel with a numeric
/// input bounded by the collection total. Submitting runs the callback with
/// the bounded count and closes the panel.
#[component]
pub fn BulkSelectPopover(
    /// Collection-wide record count, upper bound of the input
    #[prop(into)]
    total: Signal<usize>,

    /// Callback with the requested row count
    on_submit: Callback<usize>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let value = RwSignal::new(String::new());

    let submit = move || {
        if let Some(requested) = parse_requested(&value.get(), total.get()) {
            on_submit.run(requested);
            value.set(String::new());
            open.set(false);
        }
    };

    view! {
        <div class="bulk-select" on:click=|e| e.stop_propagation()>
            <button
                class="bulk-select__trigger"
                title="Select rows across pages"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {icon("chevron-down")}
            </button>
            <Show when=move || open.get()>
                <div class="bulk-select__panel">
                    <input
                        type="number"
                        class="form__input bulk-select__input"
                        placeholder="Select rows..."
                        min="1"
                        max=move || total.get().to_string()
                        prop:value=move || value.get()
                        on:input=move |ev| value.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                submit();
                            }
                        }
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| submit()
                    >
                        "Submit"
                    </Button>
                </div>
            </Show>
        </div>
    }
}
