use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::models::CleanRecord;

pub const DEFAULT_OUTPUT: &str = "processed_transactions.csv";

/// Serialize the full record set as UTF-8, comma-delimited CSV with a
/// `date,description,amount` header row. Whole-set only, no incremental export.
pub fn write_csv<W: Write>(records: &[CleanRecord], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn export_to_path(records: &[CleanRecord], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(records, file)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, description: &str, amount: f64) -> CleanRecord {
        CleanRecord {
            date: date.to_string(),
            description: description.to_string(),
            amount,
        }
    }

    #[test]
    fn test_write_csv_emits_canonical_header() {
        let records = vec![
            record("2024-03-21", "BOOKS", -30.0),
            record("2024-03-22", "PAYCHECK", 2500.0),
        ];
        let mut out = Vec::new();
        write_csv(&records, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("date,description,amount"));
        assert_eq!(lines.next(), Some("2024-03-21,BOOKS,-30.0"));
        assert_eq!(lines.next(), Some("2024-03-22,PAYCHECK,2500.0"));
    }

    #[test]
    fn test_write_csv_quotes_embedded_commas() {
        let records = vec![record("2024-03-21", "BOOKS, USED", -30.0)];
        let mut out = Vec::new();
        write_csv(&records, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"BOOKS, USED\""));
    }

    #[test]
    fn test_export_to_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_OUTPUT);
        export_to_path(&[record("2024-03-21", "BOOKS", -30.0)], &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("date,description,amount\n"));
    }
}
