//! Selection model of the artwork list
//!
//! The selection lives apart from the displayed page: selected records carry
//! their own data, so paging away and back never invalidates them. Checkmarks
//! are rendered per row by id lookup, which keeps the display order equal to
//! table iteration order rather than selection time.

use contracts::domain::a001_artwork::Artwork;
use std::collections::HashSet;

/// Set of selected artworks, keyed by record id
///
/// Insertion ignores duplicate ids, so the set always holds at most one
/// record per key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    items: Vec<Artwork>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole selection, deduplicating by id
    pub fn from_records(records: Vec<Artwork>) -> Self {
        let mut set = Self::new();
        for record in records {
            set.insert(record);
        }
        set
    }

    pub fn contains(&self, id: i64) -> bool {
        self.items.iter().any(|a| a.id == id)
    }

    pub fn insert(&mut self, record: Artwork) {
        if !self.contains(record.id) {
            self.items.push(record);
        }
    }

    pub fn remove(&mut self, id: i64) {
        self.items.retain(|a| a.id != id);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ids(&self) -> HashSet<i64> {
        self.items.iter().map(|a| a.id).collect()
    }
}

/// First `requested` records of the current page followed by the lookahead
/// page, in fetch order
///
/// Requests beyond the combined length are truncated to what is available,
/// without error. The lookahead is a single page: requests past two pages'
/// worth of rows still yield at most that many records.
pub fn take_first(current: &[Artwork], lookahead: &[Artwork], requested: usize) -> Vec<Artwork> {
    current
        .iter()
        .chain(lookahead.iter())
        .take(requested)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork(id: i64) -> Artwork {
        Artwork {
            id,
            title: Some(format!("Artwork {}", id)),
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: Some(1900),
            date_end: Some(1901),
        }
    }

    fn page(start: i64, len: usize) -> Vec<Artwork> {
        (start..start + len as i64).map(artwork).collect()
    }

    #[test]
    fn takes_prefix_of_current_page() {
        let current = page(1, 12);

        let taken = take_first(&current, &[], 5);

        assert_eq!(taken.len(), 5);
        let ids: Vec<i64> = taken.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn spans_into_lookahead_page() {
        let current = page(1, 12);
        let next = page(13, 12);

        let taken = take_first(&current, &next, 15);

        assert_eq!(taken.len(), 15);
        assert_eq!(taken[11].id, 12);
        assert_eq!(taken[12].id, 13);
        assert_eq!(taken[14].id, 15);
    }

    #[test]
    fn truncates_past_combined_length() {
        let current = page(1, 12);
        let next = page(13, 7);

        let taken = take_first(&current, &next, 100);

        assert_eq!(taken.len(), 19);
        assert_eq!(taken.last().unwrap().id, 19);
    }

    #[test]
    fn failed_lookahead_degrades_to_current_page() {
        let current = page(1, 12);

        // a failed lookahead fetch behaves as an empty next page
        let taken = take_first(&current, &[], 15);

        assert_eq!(taken.len(), 12);
    }

    #[test]
    fn insert_ignores_duplicate_ids() {
        let mut set = SelectionSet::new();
        set.insert(artwork(1));
        set.insert(artwork(2));
        set.insert(artwork(1));

        assert_eq!(set.len(), 2);
        assert!(set.contains(1));
        assert!(set.contains(2));
    }

    #[test]
    fn remove_drops_only_the_given_id() {
        let mut set = SelectionSet::from_records(page(1, 3));
        set.remove(2);

        assert_eq!(set.len(), 2);
        assert!(set.contains(1));
        assert!(!set.contains(2));
        assert!(set.contains(3));
    }

    #[test]
    fn from_records_deduplicates() {
        let mut records = page(1, 3);
        records.push(artwork(2));

        let set = SelectionSet::from_records(records);

        assert_eq!(set.len(), 3);
        assert_eq!(set.ids(), HashSet::from([1, 2, 3]));
    }
}
