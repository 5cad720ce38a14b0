//! Story export loading.
//!
//! Rows are positional: the header is read and thrown away without being
//! checked, and rows of any width are accepted.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::DeckError;

/// Raw fields of one CSV line, in column order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoryRow {
    fields: Vec<String>,
}

impl StoryRow {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Field at `index`, or `None` when the row is too short.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<&StringRecord> for StoryRow {
    fn from(record: &StringRecord) -> Self {
        Self::new(record.iter().map(str::to_owned).collect())
    }
}

/// Reads every data row of the export at `path`.
pub fn load_rows(path: &Path) -> Result<Vec<StoryRow>, DeckError> {
    let file = std::fs::File::open(path)?;
    let rows = parse_rows(file)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "Loaded story rows");
    Ok(rows)
}

/// Parses CSV content, dropping the first row as the header.
pub fn parse_rows<R: Read>(reader: R) -> Result<Vec<StoryRow>, DeckError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(StoryRow::from(&record));
    }
    Ok(rows)
}
