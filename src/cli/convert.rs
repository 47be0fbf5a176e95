use std::path::Path;

use crate::error::{Result, TellerError};
use crate::exporter;
use crate::mapping::ColumnMapping;
use crate::parser::parse_file;
use crate::pipeline::process;

pub fn run(
    file: &str,
    headers: bool,
    date_col: Option<&str>,
    description_col: Option<&str>,
    amount_col: Option<&str>,
    output: Option<&str>,
) -> Result<()> {
    let mapping = ColumnMapping::from_flags(headers, date_col, description_col, amount_col)?;
    let table = parse_file(Path::new(file), headers)?;
    let (records, stats) = process(&table, &mapping);

    if records.is_empty() {
        return Err(TellerError::NoValidTransactions(file.to_string()));
    }

    let out = output.unwrap_or(exporter::DEFAULT_OUTPUT);
    exporter::export_to_path(&records, Path::new(out))?;

    println!(
        "Wrote {} of {} rows to {out} ({} dropped)",
        records.len(),
        stats.input_rows,
        stats.dropped()
    );
    Ok(())
}
