//! Filter selections for the dashboard widgets
//!
//! Each dimension (book, house, relationship type) is selected independently
//! and defaults to [`Selection::All`]. A filtered view is the set of rows
//! matching every active dimension, so the order filters are applied in
//! never matters.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::record::CharacterRecord;

/// Label the selectors show for "no filter"
pub const ALL_LABEL: &str = "All";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T> Selection<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl Selection<String> {
    /// Widget value to selection: `"All"`, blank or missing means no filter
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(str::trim) {
            None | Some("") | Some(ALL_LABEL) => Selection::All,
            Some(value) => Selection::Only(value.to_string()),
        }
    }

    /// True when unfiltered, or when `value` equals the selected value
    pub fn accepts(&self, value: Option<&str>) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => value == Some(wanted.as_str()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Selection::All => ALL_LABEL,
            Selection::Only(value) => value,
        }
    }
}

/// Active selections across all filter widgets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    pub book: Selection<String>,
    pub house: Selection<String>,
    pub relationship: Selection<String>,
}

impl FilterSet {
    pub fn from_labels(book: Option<&str>, house: Option<&str>, relationship: Option<&str>) -> Self {
        Self {
            book: Selection::from_label(book),
            house: Selection::from_label(house),
            relationship: Selection::from_label(relationship),
        }
    }

    pub fn with_book(mut self, book: Selection<String>) -> Self {
        self.book = book;
        self
    }

    pub fn with_house(mut self, house: Selection<String>) -> Self {
        self.house = house;
        self
    }

    pub fn with_relationship(mut self, relationship: Selection<String>) -> Self {
        self.relationship = relationship;
        self
    }

    pub fn is_unfiltered(&self) -> bool {
        self.book.is_all() && self.house.is_all() && self.relationship.is_all()
    }

    /// Row-level predicate; the house is compared by its display label so
    /// `"Unknown"` selects rows without a house
    pub fn matches(&self, record: &CharacterRecord) -> bool {
        self.book.accepts(record.book.as_deref())
            && self.house.accepts(Some(record.house_label()))
            && self.relationship.accepts(record.relationship_type.as_deref())
    }

    /// Rows matching every active selection, in table order
    pub fn apply<'a, I>(&self, rows: I) -> Vec<&'a CharacterRecord>
    where
        I: IntoIterator<Item = &'a CharacterRecord>,
    {
        rows.into_iter().filter(|r| self.matches(r)).collect()
    }
}

// ============================================================================
// Selector Options
// ============================================================================

/// Values offered by the selectors, `"All"` excluded
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub books: Vec<String>,
    pub houses: Vec<String>,
    pub relationships: Vec<String>,
}

impl FilterOptions {
    pub fn from_rows(rows: &[CharacterRecord]) -> Self {
        Self {
            books: book_options(rows),
            houses: house_options(rows),
            relationships: relationship_options(rows),
        }
    }
}

fn sorted_unique<'a, F>(rows: &'a [CharacterRecord], field: F) -> Vec<String>
where
    F: Fn(&'a CharacterRecord) -> Option<&'a str>,
{
    rows.iter()
        .filter_map(field)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

pub fn book_options(rows: &[CharacterRecord]) -> Vec<String> {
    sorted_unique(rows, |r| r.book.as_deref())
}

pub fn house_options(rows: &[CharacterRecord]) -> Vec<String> {
    sorted_unique(rows, |r| r.house.as_deref())
}

pub fn relationship_options(rows: &[CharacterRecord]) -> Vec<String> {
    sorted_unique(rows, |r| r.relationship_type.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, book: Option<&str>, house: Option<&str>, rel: Option<&str>) -> CharacterRecord {
        CharacterRecord {
            book: book.map(str::to_string),
            house: house.map(str::to_string),
            relationship_type: rel.map(str::to_string),
            ..CharacterRecord::new(name)
        }
    }

    fn sample() -> Vec<CharacterRecord> {
        vec![
            row("Paul", Some("Dune"), Some("House Atreides"), Some("Parent")),
            row("Feyd-Rautha", Some("Dune"), Some("House Harkonnen"), None),
            row("Leto II", Some("Children of Dune"), Some("House Atreides"), None),
            row("Stilgar", Some("Dune"), None, Some("Ally")),
        ]
    }

    fn names(rows: Vec<&CharacterRecord>) -> Vec<&str> {
        rows.into_iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_unfiltered_keeps_everything() {
        let rows = sample();
        let filters = FilterSet::default();
        assert!(filters.is_unfiltered());
        assert_eq!(filters.apply(&rows).len(), rows.len());
    }

    #[test]
    fn test_single_dimension() {
        let rows = sample();
        let filters = FilterSet::from_labels(Some("Dune"), None, None);
        assert_eq!(names(filters.apply(&rows)), vec!["Paul", "Feyd-Rautha", "Stilgar"]);
    }

    #[test]
    fn test_unknown_house_selects_missing() {
        let rows = sample();
        let filters = FilterSet::from_labels(None, Some("Unknown"), None);
        assert_eq!(names(filters.apply(&rows)), vec!["Stilgar"]);
    }

    #[test]
    fn test_filters_commute() {
        let rows = sample();
        let book = Selection::Only("Dune".to_string());
        let house = Selection::Only("House Atreides".to_string());

        let book_then_house = FilterSet::default()
            .with_book(book.clone())
            .apply(&rows)
            .into_iter()
            .filter(|r| FilterSet::default().with_house(house.clone()).matches(r))
            .collect::<Vec<_>>();
        let house_then_book = FilterSet::default()
            .with_house(house.clone())
            .apply(&rows)
            .into_iter()
            .filter(|r| FilterSet::default().with_book(book.clone()).matches(r))
            .collect::<Vec<_>>();
        let combined = FilterSet::default().with_book(book).with_house(house).apply(&rows);

        assert_eq!(book_then_house, house_then_book);
        assert_eq!(book_then_house, combined);
        assert_eq!(names(combined), vec!["Paul"]);
    }

    #[test]
    fn test_empty_result() {
        let rows = sample();
        let filters = FilterSet::from_labels(Some("Children of Dune"), Some("House Harkonnen"), None);
        assert!(filters.apply(&rows).is_empty());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Selection::from_label(Some("All")), Selection::All);
        assert_eq!(Selection::from_label(Some("  ")), Selection::All);
        assert_eq!(Selection::from_label(None), Selection::All);
        assert_eq!(
            Selection::from_label(Some("Dune")),
            Selection::Only("Dune".to_string())
        );
        assert_eq!(Selection::<String>::All.label(), "All");
    }

    #[test]
    fn test_options_sorted_unique() {
        let options = FilterOptions::from_rows(&sample());
        assert_eq!(options.books, vec!["Children of Dune", "Dune"]);
        assert_eq!(options.houses, vec!["House Atreides", "House Harkonnen"]);
        assert_eq!(options.relationships, vec!["Ally", "Parent"]);
    }
}
