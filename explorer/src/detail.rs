//! Character picker and detail panel

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::record::CharacterRecord;

/// Everything the detail panel shows for one character.
///
/// Absent values stay `None` and are rendered blank; `lifespan` is only set
/// when both years resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDetail {
    pub name: String,
    pub house: String,
    pub culture: Option<String>,
    pub book: Option<String>,
    pub born: Option<i32>,
    pub died: Option<i32>,
    pub lifespan: Option<i32>,
    pub description: Option<String>,
    pub url: Option<String>,
}

impl From<&CharacterRecord> for CharacterDetail {
    fn from(record: &CharacterRecord) -> Self {
        Self {
            name: record.name.clone(),
            house: record.house_label().to_string(),
            culture: record.culture.clone(),
            book: record.book.clone(),
            born: record.born,
            died: record.died,
            lifespan: record.lifespan(),
            description: record.detail.clone(),
            url: record.url.clone(),
        }
    }
}

/// Picker contents: distinct names in the view, sorted
pub fn character_names(view: &[&CharacterRecord]) -> Vec<String> {
    view.iter()
        .map(|r| r.name.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Detail for the first row named `name` in the view
pub fn character_detail(view: &[&CharacterRecord], name: &str) -> Option<CharacterDetail> {
    view.iter()
        .find(|r| r.name == name)
        .map(|r| CharacterDetail::from(*r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    #[test]
    fn test_names_sorted_unique() {
        let rows = vec![
            CharacterRecord::new("Stilgar"),
            CharacterRecord::new("Chani"),
            CharacterRecord::new("Stilgar"),
        ];
        let view: Vec<&CharacterRecord> = rows.iter().collect();
        assert_eq!(character_names(&view), vec!["Chani", "Stilgar"]);
        assert!(character_names(&[]).is_empty());
    }

    #[test]
    fn test_detail_lifespan_from_annotation() {
        let row = CharacterRecord {
            detail: Some("(10148 AG - 10191 AG)".into()),
            ..CharacterRecord::new("Leto Atreides I")
        };
        let dataset = Dataset::new(vec![row], Vec::new());
        let view: Vec<&CharacterRecord> = dataset.rows().iter().collect();

        let detail = character_detail(&view, "Leto Atreides I").unwrap();
        assert_eq!(detail.born, Some(10148));
        assert_eq!(detail.died, Some(10191));
        assert_eq!(detail.lifespan, Some(43));
        assert_eq!(detail.house, "Unknown");
        assert_eq!(detail.url, None);
    }

    #[test]
    fn test_detail_without_years() {
        let rows = vec![CharacterRecord::new("Shadout Mapes")];
        let view: Vec<&CharacterRecord> = rows.iter().collect();

        let detail = character_detail(&view, "Shadout Mapes").unwrap();
        assert_eq!(detail.lifespan, None);
        assert!(character_detail(&view, "Piter De Vries").is_none());
    }
}
