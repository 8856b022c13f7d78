use super::bulk_select::BulkSelectPopover;
use super::selection::{take_first, SelectionSet};
use crate::domain::a001_artwork::api;
use crate::shared::components::pagination_controls::{pages_for, PaginationControls};
use crate::shared::components::table::{TableCellCheckbox, TableHeaderCheckbox};
use contracts::domain::a001_artwork::{Artwork, ArtworkListResponse, PAGE_SIZE};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

fn text_or_dash(value: &Option<String>) -> String {
    match value {
        Some(s) if !s.is_empty() => s.clone(),
        _ => "—".to_string(),
    }
}

fn year_or_dash(value: Option<i32>) -> String {
    match value {
        Some(year) => year.to_string(),
        None => "—".to_string(),
    }
}

/// Folds a page fetch result into the new displayed rows and, on success,
/// the new collection total
///
/// A failure yields an empty page and no total update, so the last known
/// total stays in place. The selection is never part of this fold; it is
/// independent of the displayed page.
fn apply_page_result(
    result: Result<ArtworkListResponse, String>,
) -> (Vec<Artwork>, Option<usize>) {
    match result {
        Ok(resp) => {
            let total = resp.pagination.total as usize;
            (resp.data, Some(total))
        }
        Err(_) => (Vec::new(), None),
    }
}

#[component]
pub fn ArtworkList() -> impl IntoView {
    let (rows, set_rows) = signal(Vec::<Artwork>::new());
    let (loading, set_loading) = signal(true);

    // Pagination (1-indexed)
    let (page, set_page) = signal(1usize);
    let (total_count, set_total_count) = signal(0usize);

    // Selection survives page changes; records carry their own data
    let selection = RwSignal::new(SelectionSet::new());
    let selected_ids = Signal::derive(move || selection.get().ids());

    let total_pages = Signal::derive(move || pages_for(total_count.get(), PAGE_SIZE));

    // Load the current page on mount and on every page change. A failed
    // fetch degrades to an empty page; the last known total is retained.
    Effect::new(move |_| {
        let current = page.get();
        set_loading.set(true);

        spawn_local(async move {
            let result = api::fetch_artworks(current).await;
            if let Err(e) = &result {
                log::warn!("artworks page {} load failed: {}", current, e);
            }

            let (new_rows, new_total) = apply_page_result(result);
            if let Some(total) = new_total {
                set_total_count.set(total);
            }
            set_rows.set(new_rows);
            set_loading.set(false);
        });
    });

    let on_page_change = Callback::new(move |new_page: usize| {
        set_page.set(new_page);
    });

    // Header checkbox scope is the visible page only: clearing removes just
    // the visible rows from the selection.
    let on_toggle_all = Callback::new(move |check_all: bool| {
        let current = rows.get_untracked();
        selection.update(|sel| {
            if check_all {
                for record in current {
                    sel.insert(record);
                }
            } else {
                for record in &current {
                    sel.remove(record.id);
                }
            }
        });
    });

    // Bulk selection: one page of lookahead at most. A request past the
    // loaded rows fetches the next page once and slices the concatenation;
    // a failed lookahead behaves as an empty next page.
    let on_bulk_select = Callback::new(move |requested: usize| {
        let current = rows.get_untracked();

        if requested <= current.len() {
            selection.set(SelectionSet::from_records(take_first(&current, &[], requested)));
            return;
        }

        let next_page = page.get_untracked() + 1;
        spawn_local(async move {
            let lookahead = match api::fetch_artworks(next_page).await {
                Ok(resp) => resp.data,
                Err(e) => {
                    log::warn!("bulk selection lookahead page {} failed: {}", next_page, e);
                    Vec::new()
                }
            };
            selection.set(SelectionSet::from_records(take_first(
                &current, &lookahead, requested,
            )));
        });
    });

    view! {
        <div class="page artwork-gallery">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Artworks"</h1>
                </div>
            </div>

            <div class="page__content">
                <Show
                    when=move || !loading.get()
                    fallback=|| view! {
                        <div style="padding: 48px; text-align: center;">
                            <p>"Loading..."</p>
                        </div>
                    }
                >
                    <Show
                        when=move || !rows.get().is_empty()
                        fallback=|| view! {
                            <div style="padding: 48px; text-align: center;">
                                <p>"No artworks to display"</p>
                            </div>
                        }
                    >
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCheckbox
                                        items=rows
                                        selected=selected_ids
                                        get_id=Callback::new(|a: Artwork| a.id)
                                        on_change=on_toggle_all
                                    >
                                        <BulkSelectPopover
                                            total=total_count
                                            on_submit=on_bulk_select
                                        />
                                    </TableHeaderCheckbox>
                                    <TableHeaderCell resizable=true min_width=220.0>
                                        "Title"
                                    </TableHeaderCell>
                                    <TableHeaderCell resizable=true min_width=140.0>
                                        "Place of Origin"
                                    </TableHeaderCell>
                                    <TableHeaderCell resizable=true min_width=220.0>
                                        "Artist"
                                    </TableHeaderCell>
                                    <TableHeaderCell resizable=true min_width=180.0>
                                        "Inscriptions"
                                    </TableHeaderCell>
                                    <TableHeaderCell min_width=100.0>
                                        "Start Date"
                                    </TableHeaderCell>
                                    <TableHeaderCell min_width=100.0>
                                        "End Date"
                                    </TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || {
                                    rows.get()
                                        .into_iter()
                                        .map(|row| {
                                            let id = row.id;
                                            let title = text_or_dash(&row.title);
                                            let origin = text_or_dash(&row.place_of_origin);
                                            let artist = text_or_dash(&row.artist_display);
                                            let inscriptions = text_or_dash(&row.inscriptions);
                                            let date_start = year_or_dash(row.date_start);
                                            let date_end = year_or_dash(row.date_end);

                                            let record = row.clone();
                                            let on_toggle = Callback::new(move |(record_id, checked): (i64, bool)| {
                                                if checked {
                                                    let record = record.clone();
                                                    selection.update(|sel| sel.insert(record));
                                                } else {
                                                    selection.update(|sel| sel.remove(record_id));
                                                }
                                            });

                                            view! {
                                                <TableRow>
                                                    <TableCellCheckbox
                                                        item_id=id
                                                        selected=selected_ids
                                                        on_change=on_toggle
                                                    />
                                                    <TableCell>
                                                        <TableCellLayout>{title}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>{origin}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>{artist}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>{inscriptions}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>{date_start}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>{date_end}</TableCellLayout>
                                                    </TableCell>
                                                </TableRow>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </TableBody>
                        </Table>
                    </Show>
                </Show>

                <div class="table__footer">
                    <span class="table__selection-info">
                        {move || {
                            let selected = selection.get().len();
                            format!("Selected: {} of {}", selected, total_count.get())
                        }}
                    </span>
                    <PaginationControls
                        current_page=page
                        total_pages=total_pages
                        total_count=total_count
                        on_page_change=on_page_change
                    />
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_page_result, text_or_dash, year_or_dash, SelectionSet};
    use contracts::domain::a001_artwork::{Artwork, ArtworkListResponse, PaginationInfo};

    fn artwork(id: i64) -> Artwork {
        Artwork {
            id,
            title: Some(format!("Artwork {}", id)),
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }

    fn listing(start: i64, len: usize, total: u64) -> ArtworkListResponse {
        ArtworkListResponse {
            data: (start..start + len as i64).map(artwork).collect(),
            pagination: PaginationInfo {
                total,
                limit: 12,
                offset: 0,
                total_pages: 0,
                current_page: 0,
            },
        }
    }

    #[test]
    fn dashes_for_missing_values() {
        assert_eq!(text_or_dash(&None), "—");
        assert_eq!(text_or_dash(&Some(String::new())), "—");
        assert_eq!(text_or_dash(&Some("France".to_string())), "France");
        assert_eq!(year_or_dash(None), "—");
        assert_eq!(year_or_dash(Some(1877)), "1877");
    }

    #[test]
    fn successful_page_load_replaces_rows_and_total() {
        let (rows, total) = apply_page_result(Ok(listing(13, 12, 126260)));

        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0].id, 13);
        assert_eq!(total, Some(126260));
    }

    #[test]
    fn failed_page_load_shows_empty_page_and_keeps_total() {
        let (rows, total) = apply_page_result(Err("HTTP error: 503".to_string()));

        assert!(rows.is_empty());
        assert_eq!(total, None);
    }

    #[test]
    fn page_navigation_leaves_selection_untouched() {
        // Selected records carry their own data; replacing the displayed
        // page only produces new rows and never edits the set.
        let mut selection = SelectionSet::new();
        selection.insert(artwork(1));
        selection.insert(artwork(2));

        let (rows, _) = apply_page_result(Ok(listing(13, 12, 126260)));

        assert_eq!(rows[0].id, 13);
        assert_eq!(selection.len(), 2);
        assert!(selection.contains(1));
        assert!(selection.contains(2));
    }
}
