use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::Result;

/// Parsed contents of one uploaded file. `headers` is present only in header
/// mode; `rows` never contains fully empty lines.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn column_count(&self) -> usize {
        self.headers
            .as_ref()
            .map(|h| h.len())
            .or_else(|| self.rows.first().map(|r| r.len()))
            .unwrap_or(0)
    }

    pub fn header_index(&self, name: &str) -> Option<usize> {
        self.headers.as_ref()?.iter().position(|h| h == name)
    }
}

pub fn parse_file(path: &Path, has_headers: bool) -> Result<RawTable> {
    let file = File::open(path)?;
    parse_reader(BufReader::new(file), has_headers)
}

/// A malformed file surfaces as `TellerError::Csv`; a well-formed file with no
/// data rows yields an empty `rows`, which is not an error at this stage.
pub fn parse_reader<R: Read>(reader: R, has_headers: bool) -> Result<RawTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = if has_headers {
        Some(rdr.headers()?.iter().map(str::to_string).collect())
    } else {
        None
    };

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if record.iter().all(|f| f.is_empty()) {
            continue;
        }
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(RawTable { headers, rows })
}
