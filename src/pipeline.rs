use std::path::Path;

use crate::dates::normalize;
use crate::mapping::ColumnMapping;
use crate::models::{CleanRecord, NewTransaction};
use crate::parser::RawTable;

// ---------------------------------------------------------------------------
// Amount parsing
// ---------------------------------------------------------------------------

/// Parse a statement amount. Strips `$`, thousands commas, and stray quotes;
/// `(x)` is accounting notation for negative. A value that does not parse to
/// a finite number drops the row — never coerced to zero or NaN.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let s = raw.replace(',', "").replace('"', "").replace('$', "");
    let s = s.trim();
    if let Some(inner) = s.strip_prefix('(').and_then(|v| v.strip_suffix(')')) {
        return parse_finite(inner.trim()).map(|v| -v);
    }
    parse_finite(s)
}

fn parse_finite(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

// ---------------------------------------------------------------------------
// Row pipeline
// ---------------------------------------------------------------------------

/// Per-reason drop counts for one processing run. Rows are only ever dropped,
/// never fabricated, so `input_rows - dropped() == surviving records`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessStats {
    pub input_rows: usize,
    pub dropped_columns: usize,
    pub dropped_date: usize,
    pub dropped_amount: usize,
}

impl ProcessStats {
    pub fn dropped(&self) -> usize {
        self.dropped_columns + self.dropped_date + self.dropped_amount
    }
}

/// Run the full row pipeline: column mapping, date normalization, amount
/// parsing. Pure and order-preserving; rejected rows are counted, not kept.
pub fn process(table: &RawTable, mapping: &ColumnMapping) -> (Vec<CleanRecord>, ProcessStats) {
    let mut stats = ProcessStats {
        input_rows: table.rows.len(),
        ..Default::default()
    };
    let mut records = Vec::with_capacity(table.rows.len());

    for row in &table.rows {
        let Some((raw_date, raw_description, raw_amount)) = mapping.select(table, row) else {
            stats.dropped_columns += 1;
            continue;
        };
        let Some(date) = normalize(raw_date) else {
            stats.dropped_date += 1;
            continue;
        };
        let Some(amount) = parse_amount(raw_amount) else {
            stats.dropped_amount += 1;
            continue;
        };
        records.push(CleanRecord {
            date,
            description: raw_description.trim().to_string(),
            amount,
        });
    }
    (records, stats)
}

// ---------------------------------------------------------------------------
// Import policy
// ---------------------------------------------------------------------------

/// Named defaulting policy applied when records head for the store, so tests
/// can substitute values instead of relying on inline literals.
#[derive(Debug, Clone)]
pub struct ImportPolicy {
    pub default_category: String,
}

impl Default for ImportPolicy {
    fn default() -> Self {
        Self {
            default_category: "Uncategorized".to_string(),
        }
    }
}

/// Account name derived from the source file: final extension stripped.
pub fn account_from_filename(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string()
}

pub fn build_transactions(
    records: Vec<CleanRecord>,
    policy: &ImportPolicy,
    account: &str,
) -> Vec<NewTransaction> {
    records
        .into_iter()
        .map(|r| NewTransaction {
            date: r.date,
            description: r.description,
            amount: r.amount,
            category: policy.default_category.clone(),
            account: account.to_string(),
        })
        .collect()
}
