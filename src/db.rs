use std::path::Path;

use rusqlite::Connection;

use crate::error::Result;
use crate::models::{NewTransaction, StoredTransaction};

// The CHECK mirrors the pipeline's canonical-date invariant; a record that
// somehow bypasses normalization is refused here, failing the whole batch.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS transactions (
    id INTEGER PRIMARY KEY,
    date TEXT NOT NULL CHECK (date GLOB '[0-9][0-9][0-9][0-9]-[0-9][0-9]-[0-9][0-9]'),
    description TEXT NOT NULL,
    amount REAL NOT NULL,
    category TEXT NOT NULL DEFAULT 'Uncategorized',
    account TEXT NOT NULL,
    created_at TEXT DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);
CREATE INDEX IF NOT EXISTS idx_transactions_account ON transactions(account);
";

pub fn get_connection(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}

pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// Insert a batch inside one SQL transaction: either every row lands or none
/// does. No retry, no partial import.
pub fn insert_batch(conn: &mut Connection, rows: &[NewTransaction]) -> Result<usize> {
    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO transactions (date, description, amount, category, account) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        for row in rows {
            stmt.execute(rusqlite::params![
                row.date,
                row.description,
                row.amount,
                row.category,
                row.account
            ])?;
        }
    }
    tx.commit()?;
    Ok(rows.len())
}

pub fn count_transactions(conn: &Connection) -> Result<i64> {
    Ok(conn.query_row("SELECT count(*) FROM transactions", [], |r| r.get(0))?)
}

pub fn list_transactions(
    conn: &Connection,
    account: Option<&str>,
    month: Option<&str>,
) -> Result<Vec<StoredTransaction>> {
    let mut clauses = Vec::new();
    let mut params: Vec<String> = Vec::new();
    if let Some(a) = account {
        params.push(a.to_string());
        clauses.push(format!("account = ?{}", params.len()));
    }
    if let Some(m) = month {
        params.push(format!("{m}%"));
        clauses.push(format!("date LIKE ?{}", params.len()));
    }
    let filter = if clauses.is_empty() {
        "1=1".to_string()
    } else {
        clauses.join(" AND ")
    };
    let sql = format!(
        "SELECT id, date, description, amount, category, account, created_at \
         FROM transactions WHERE {filter} ORDER BY date, id"
    );
    let mut stmt = conn.prepare(&sql)?;
    let param_values: Vec<&dyn rusqlite::types::ToSql> = params
        .iter()
        .map(|p| p as &dyn rusqlite::types::ToSql)
        .collect();
    let rows = stmt.query_map(param_values.as_slice(), |row| {
        Ok(StoredTransaction {
            id: row.get(0)?,
            date: row.get(1)?,
            description: row.get(2)?,
            amount: row.get(3)?,
            category: row.get(4)?,
            account: row.get(5)?,
            created_at: row.get(6)?,
        })
    })?;
    Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
}

pub struct MonthTotal {
    pub month: String,
    pub total: f64,
    pub count: i64,
}

/// Net amount per calendar month of one year, for the spending chart.
pub fn monthly_totals(conn: &Connection, year: i32) -> Result<Vec<MonthTotal>> {
    let mut stmt = conn.prepare(
        "SELECT substr(date, 1, 7) AS month, SUM(amount), count(*) \
         FROM transactions WHERE date LIKE ?1 \
         GROUP BY month ORDER BY month",
    )?;
    let rows = stmt.query_map([format!("{year:04}-%")], |row| {
        Ok(MonthTotal {
            month: row.get(0)?,
            total: row.get(1)?,
            count: row.get(2)?,
        })
    })?;
    Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
}
