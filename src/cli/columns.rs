use std::path::Path;

use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::parser::parse_file;

/// Show what can be mapped: every column position, its header name (header
/// mode), and a sample value from the first data row.
pub fn run(file: &str, headers: bool) -> Result<()> {
    let table = parse_file(Path::new(file), headers)?;

    let count = table.column_count();
    if count == 0 {
        println!("{file}: no columns found");
        return Ok(());
    }

    let first_row = table.rows.first();
    let mut out = Table::new();
    out.set_header(vec!["Index", "Header", "First Row"]);
    for i in 0..count {
        let header = table
            .headers
            .as_ref()
            .and_then(|h| h.get(i))
            .cloned()
            .unwrap_or_default();
        let sample = first_row.and_then(|r| r.get(i)).cloned().unwrap_or_default();
        out.add_row(vec![Cell::new(i), Cell::new(header), Cell::new(sample)]);
    }
    println!("{}: {} data rows\n{out}", file, table.rows.len());
    Ok(())
}
