//! Year Backfill
//!
//! Fills missing birth/death years from `(... AG)` annotations in a
//! character's description, then closes single-sided gaps with a one-year
//! offset. Everything here is a pure function of `(text, born, died)`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// `(<born> AG - <died> AG)`, either side signed
static RANGE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(\s*([+-]?\d+)\s*AG\s*-\s*([+-]?\d+)\s*AG\s*\)").expect("valid range pattern")
});

/// `(<year> AG)`, unsigned: a birth year
static BIRTH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\s*(\d+)\s*AG\s*\)").expect("valid birth pattern"));

/// `(-<year> AG)`: a death year
static DEATH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\s*-(\d+)\s*AG\s*\)").expect("valid death pattern"));

/// Birth and death years of one character, each independently known or absent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearSpan {
    pub born: Option<i32>,
    pub died: Option<i32>,
}

impl YearSpan {
    pub const UNKNOWN: YearSpan = YearSpan {
        born: None,
        died: None,
    };

    pub fn new(born: Option<i32>, died: Option<i32>) -> Self {
        Self { born, died }
    }

    /// `died - born`, only when both ends are known
    pub fn lifespan(&self) -> Option<i32> {
        match (self.born, self.died) {
            (Some(born), Some(died)) => died.checked_sub(born),
            _ => None,
        }
    }

    /// Keep every known field of `self`; take the rest from `other`
    pub fn or(self, other: YearSpan) -> YearSpan {
        YearSpan {
            born: self.born.or(other.born),
            died: self.died.or(other.died),
        }
    }
}

/// Read a year annotation out of free text.
///
/// Rules are tried in priority order (range, birth, death) and the first
/// occurrence of the first matching rule wins. Text without an annotation
/// yields [`YearSpan::UNKNOWN`].
pub fn extract_years(text: Option<&str>) -> YearSpan {
    let Some(text) = text else {
        return YearSpan::UNKNOWN;
    };

    let range = RANGE_PATTERN.captures_iter(text).find_map(|caps| {
        let born = parse_year(&caps[1])?;
        let died = parse_year(&caps[2])?;
        Some(YearSpan::new(Some(born), Some(died)))
    });
    if let Some(span) = range {
        return span;
    }

    if let Some(born) = first_year(&BIRTH_PATTERN, text) {
        return YearSpan::new(Some(born), None);
    }

    if let Some(died) = first_year(&DEATH_PATTERN, text) {
        return YearSpan::new(None, Some(died));
    }

    YearSpan::UNKNOWN
}

fn first_year(pattern: &Regex, text: &str) -> Option<i32> {
    pattern
        .captures_iter(text)
        .find_map(|caps| parse_year(&caps[1]))
}

fn parse_year(digits: &str) -> Option<i32> {
    digits.trim_start_matches('+').parse().ok()
}

/// Fill absent years from the text annotation; known years are kept as-is
pub fn fill_from_text(text: Option<&str>, born: Option<i32>, died: Option<i32>) -> YearSpan {
    let current = YearSpan::new(born, died);
    if current.born.is_some() && current.died.is_some() {
        return current;
    }
    current.or(extract_years(text))
}

/// Derive a missing end from the known one (`born = died - 1`, `died = born + 1`)
pub fn reconcile(span: YearSpan) -> YearSpan {
    match (span.born, span.died) {
        (None, Some(died)) => YearSpan::new(died.checked_sub(1), Some(died)),
        (Some(born), None) => YearSpan::new(Some(born), born.checked_add(1)),
        _ => span,
    }
}

/// Best-effort birth/death years for one record
pub fn resolve_years(text: Option<&str>, born: Option<i32>, died: Option<i32>) -> YearSpan {
    reconcile(fill_from_text(text, born, died))
}
