//! Table loading
//!
//! Reads the character table and the timeline event table from delimited
//! text. Records are decoded permissively: invalid UTF-8 is replaced rather
//! than rejected, rows may have a ragged field count, and the usual
//! spreadsheet null markers count as absent cells.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use tracing::{debug, warn};

use crate::error::{ExplorerError, Result};
use crate::record::{CharacterRecord, EventMarker};

/// Cell contents treated as missing values
const NULL_MARKERS: &[&str] = &["NA", "N/A", "NaN", "nan", "null", "NULL", "None", "-"];

// Accepted header spellings per column, compared after normalization
const NAME_COLUMNS: &[&str] = &["character", "name"];
const HOUSE_COLUMNS: &[&str] = &["house_allegiance", "house", "allegiance"];
const CULTURE_COLUMNS: &[&str] = &["culture"];
const BOOK_COLUMNS: &[&str] = &["book"];
const BORN_COLUMNS: &[&str] = &["born"];
const DIED_COLUMNS: &[&str] = &["died"];
const DETAIL_COLUMNS: &[&str] = &["detail", "description"];
const URL_COLUMNS: &[&str] = &["url"];
const TARGET_COLUMNS: &[&str] = &["to", "target", "relationship_target"];
const RELATIONSHIP_COLUMNS: &[&str] = &["relationship", "relationship_type", "type"];
const YEAR_COLUMNS: &[&str] = &["year"];
const EVENT_COLUMNS: &[&str] = &["event", "label"];

/// Column positions of the character table, resolved from its header row
struct CharacterColumns {
    name: usize,
    house: Option<usize>,
    culture: Option<usize>,
    book: Option<usize>,
    born: Option<usize>,
    died: Option<usize>,
    detail: Option<usize>,
    url: Option<usize>,
    target: Option<usize>,
    relationship: Option<usize>,
}

impl CharacterColumns {
    fn resolve(headers: &ByteRecord, source: &Path) -> Result<Self> {
        let headers = normalized_headers(headers);
        let find = |aliases: &[&str]| find_column(&headers, aliases);

        Ok(Self {
            name: find(NAME_COLUMNS).ok_or_else(|| ExplorerError::MissingColumn {
                path: source.to_path_buf(),
                column: "Character",
            })?,
            house: find(HOUSE_COLUMNS),
            culture: find(CULTURE_COLUMNS),
            book: find(BOOK_COLUMNS),
            born: find(BORN_COLUMNS),
            died: find(DIED_COLUMNS),
            detail: find(DETAIL_COLUMNS),
            url: find(URL_COLUMNS),
            target: find(TARGET_COLUMNS),
            relationship: find(RELATIONSHIP_COLUMNS),
        })
    }

    fn record(&self, row: &ByteRecord) -> Option<CharacterRecord> {
        let name = text_cell(row, Some(self.name))?;
        Some(CharacterRecord {
            name,
            house: text_cell(row, self.house),
            culture: text_cell(row, self.culture),
            book: text_cell(row, self.book),
            born: year_cell(row, self.born),
            died: year_cell(row, self.died),
            detail: text_cell(row, self.detail),
            url: text_cell(row, self.url),
            relationship_target: text_cell(row, self.target),
            relationship_type: text_cell(row, self.relationship),
        })
    }
}

/// Load the character table from `path`
pub fn load_characters(path: &Path) -> Result<Vec<CharacterRecord>> {
    let file = open_table(path)?;
    read_characters(file, path)
}

/// Parse a character table from any reader; `source` is only used in errors and logs
pub fn read_characters<R: Read>(reader: R, source: &Path) -> Result<Vec<CharacterRecord>> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rdr.byte_headers().map_err(|e| csv_error(source, e))?;
    let columns = CharacterColumns::resolve(headers, source)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for row in rdr.byte_records() {
        let row = row.map_err(|e| csv_error(source, e))?;
        match columns.record(&row) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!("Skipped {} rows without a character name in {}", skipped, source.display());
    }
    debug!("Read {} character rows from {}", records.len(), source.display());
    Ok(records)
}

/// Load the `(Year, Event)` table from `path`
pub fn load_events(path: &Path) -> Result<Vec<EventMarker>> {
    let file = open_table(path)?;
    read_events(file, path)
}

/// Parse an event table from any reader. Rows whose year is not numeric are skipped.
pub fn read_events<R: Read>(reader: R, source: &Path) -> Result<Vec<EventMarker>> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = normalized_headers(rdr.byte_headers().map_err(|e| csv_error(source, e))?);
    let year_idx = find_column(&headers, YEAR_COLUMNS).ok_or_else(|| ExplorerError::MissingColumn {
        path: source.to_path_buf(),
        column: "Year",
    })?;
    let label_idx = find_column(&headers, EVENT_COLUMNS).ok_or_else(|| ExplorerError::MissingColumn {
        path: source.to_path_buf(),
        column: "Event",
    })?;

    let mut events = Vec::new();
    for row in rdr.byte_records() {
        let row = row.map_err(|e| csv_error(source, e))?;
        let label = text_cell(&row, Some(label_idx)).unwrap_or_default();
        match year_cell(&row, Some(year_idx)) {
            Some(year) => events.push(EventMarker { year, label }),
            None => warn!("Skipping event without a numeric year: {:?}", label),
        }
    }

    debug!("Read {} timeline events from {}", events.len(), source.display());
    Ok(events)
}

fn open_table(path: &Path) -> Result<File> {
    if !path.exists() {
        return Err(ExplorerError::DataFileMissing(path.to_path_buf()));
    }
    File::open(path).map_err(|source| ExplorerError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn csv_error(path: &Path, source: csv::Error) -> ExplorerError {
    ExplorerError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

fn normalized_headers(headers: &ByteRecord) -> Vec<String> {
    headers
        .iter()
        .map(|h| {
            String::from_utf8_lossy(h)
                .trim_start_matches('\u{feff}')
                .trim()
                .to_lowercase()
                .replace(' ', "_")
        })
        .collect()
}

fn find_column(headers: &[String], aliases: &[&str]) -> Option<usize> {
    aliases
        .iter()
        .find_map(|alias| headers.iter().position(|h| h == alias))
}

/// Trimmed, lossily-decoded cell text; `None` for blank or null-marker cells
fn text_cell(row: &ByteRecord, idx: Option<usize>) -> Option<String> {
    let raw = row.get(idx?)?;
    let text = String::from_utf8_lossy(raw);
    let text = text.trim();
    if text.is_empty() || NULL_MARKERS.contains(&text) {
        return None;
    }
    Some(text.to_string())
}

/// Whole-number year from an integer or float cell (`10191` or `10191.0`)
fn year_cell(row: &ByteRecord, idx: Option<usize>) -> Option<i32> {
    parse_year_value(&text_cell(row, idx)?)
}

pub(crate) fn parse_year_value(text: &str) -> Option<i32> {
    if let Ok(year) = text.parse::<i32>() {
        return Some(year);
    }
    let value = text.parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }
    let rounded = value.round();
    if rounded < i32::MIN as f64 || rounded > i32::MAX as f64 {
        return None;
    }
    Some(rounded as i32)
}
