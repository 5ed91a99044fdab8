//! Chart data: summary metrics, categorical counts and the lifespan timeline
//!
//! Charts are emitted as plain series; drawing them is the frontend's job.
//! Categorical charts and the timeline count each character once (first
//! row per name).

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::dataset::unique_by_name;
use crate::palette::house_color;
use crate::record::{CharacterRecord, EventMarker};

// ============================================================================
// Summary
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_rows: usize,
    pub total_characters: usize,
    pub unique_houses: usize,
    pub unique_cultures: usize,
    pub books: usize,
}

/// Headline counts; absent values are not counted as a category
pub fn summary(rows: &[CharacterRecord]) -> SummaryStats {
    fn distinct<'a>(rows: &'a [CharacterRecord], field: impl Fn(&'a CharacterRecord) -> Option<&'a str>) -> usize {
        rows.iter().filter_map(field).collect::<HashSet<_>>().len()
    }

    SummaryStats {
        total_rows: rows.len(),
        total_characters: distinct(rows, |r| Some(r.name.as_str())),
        unique_houses: distinct(rows, |r| r.house.as_deref()),
        unique_cultures: distinct(rows, |r| r.culture.as_deref()),
        books: distinct(rows, |r| r.book.as_deref()),
    }
}

// ============================================================================
// Categorical Bars
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// Count labels, most frequent first; ties keep first-seen order
fn count_labels<'a, I>(labels: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();
    for label in labels {
        match index.get(label) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(label, counts.len());
                counts.push(CategoryCount {
                    label: label.to_string(),
                    count: 1,
                });
            }
        }
    }
    // stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Characters per house, missing houses grouped under `"Unknown"`
pub fn house_counts(view: &[&CharacterRecord]) -> Vec<CategoryCount> {
    count_labels(
        unique_by_name(view.iter().copied())
            .into_iter()
            .map(|r| r.house_label()),
    )
}

/// The `top_n` largest cultures, missing cultures grouped under `"Unknown"`
pub fn culture_counts(view: &[&CharacterRecord], top_n: usize) -> Vec<CategoryCount> {
    let mut counts = count_labels(
        unique_by_name(view.iter().copied())
            .into_iter()
            .map(|r| r.culture_label()),
    );
    counts.truncate(top_n);
    counts
}

// ============================================================================
// Lifespan Timeline
// ============================================================================

/// One horizontal bar from birth to death
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineBar {
    pub name: String,
    pub house: String,
    pub color: String,
    pub born: i32,
    pub died: i32,
    pub lifespan: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub bars: Vec<TimelineBar>,
    pub events: Vec<EventMarker>,
}

/// Bars for characters with both years resolved, ordered by birth year then name
pub fn lifespan_bars(view: &[&CharacterRecord]) -> Vec<TimelineBar> {
    let mut bars: Vec<TimelineBar> = unique_by_name(view.iter().copied())
        .into_iter()
        .filter_map(|r| {
            let (born, died) = (r.born?, r.died?);
            let house = r.house_label();
            Some(TimelineBar {
                name: r.name.clone(),
                house: house.to_string(),
                color: house_color(house).to_string(),
                born,
                died,
                lifespan: died.checked_sub(born)?,
            })
        })
        .collect();
    bars.sort_by(|a, b| a.born.cmp(&b.born).then_with(|| a.name.cmp(&b.name)));
    bars
}

/// Timeline for a view. Events are sorted by year and limited to the span
/// the bars cover; with no bars every event is kept.
pub fn timeline(view: &[&CharacterRecord], events: &[EventMarker]) -> Timeline {
    let bars = lifespan_bars(view);
    let span = bars
        .iter()
        .map(|b| (b.born.min(b.died), b.born.max(b.died)))
        .reduce(|(lo, hi), (b_lo, b_hi)| (lo.min(b_lo), hi.max(b_hi)));

    let mut events: Vec<EventMarker> = events
        .iter()
        .filter(|e| span.map_or(true, |(lo, hi)| (lo..=hi).contains(&e.year)))
        .cloned()
        .collect();
    events.sort_by_key(|e| e.year);

    Timeline { bars, events }
}
