use chrono::Datelike;
use colored::Colorize;

use crate::db::{get_connection, monthly_totals};
use crate::error::Result;
use crate::fmt::money;
use crate::settings::get_data_dir;

const BAR_WIDTH: usize = 40;

pub fn run(year: Option<i32>) -> Result<()> {
    let year = year.unwrap_or_else(|| chrono::Local::now().year());
    let conn = get_connection(&get_data_dir().join("teller.db"))?;
    let totals = monthly_totals(&conn, year)?;

    if totals.is_empty() {
        println!("No transactions in {year}.");
        return Ok(());
    }

    let max = totals
        .iter()
        .map(|t| t.total.abs())
        .fold(f64::MIN_POSITIVE, f64::max);

    println!("Monthly net, {year}");
    for t in &totals {
        let width = ((t.total.abs() / max) * BAR_WIDTH as f64).round() as usize;
        // Pad before colorizing so ANSI codes don't skew the alignment.
        let bar = format!("{:<w$}", "\u{2588}".repeat(width.max(1)), w = BAR_WIDTH);
        let bar = if t.total < 0.0 { bar.red() } else { bar.green() };
        println!("{}  {}  {} ({} txns)", t.month, bar, money(t.total), t.count);
    }
    Ok(())
}
