use std::path::Path;

use crate::db::{count_transactions, get_connection, init_db, insert_batch};
use crate::error::{Result, TellerError};
use crate::mapping::ColumnMapping;
use crate::parser::parse_file;
use crate::pipeline::{account_from_filename, build_transactions, process, ImportPolicy};
use crate::settings::get_data_dir;

pub fn run(
    file: &str,
    headers: bool,
    date_col: Option<&str>,
    description_col: Option<&str>,
    amount_col: Option<&str>,
    account: Option<&str>,
    category: Option<&str>,
) -> Result<()> {
    let path = Path::new(file);
    let mapping = ColumnMapping::from_flags(headers, date_col, description_col, amount_col)?;
    let table = parse_file(path, headers)?;
    let (records, stats) = process(&table, &mapping);

    if records.is_empty() {
        return Err(TellerError::NoValidTransactions(file.to_string()));
    }

    let mut policy = ImportPolicy::default();
    if let Some(c) = category {
        policy.default_category = c.to_string();
    }
    let account = account
        .map(str::to_string)
        .unwrap_or_else(|| account_from_filename(path));
    let batch = build_transactions(records, &policy, &account);

    let mut conn = get_connection(&get_data_dir().join("teller.db"))?;
    init_db(&conn)?;
    let imported = insert_batch(&mut conn, &batch)?;

    println!(
        "Imported {imported} transactions into '{account}' ({} dropped)",
        stats.dropped()
    );
    // Refreshed store view, in place of the original's full-page reload.
    println!("Store now holds {} transactions.", count_transactions(&conn)?);
    Ok(())
}
