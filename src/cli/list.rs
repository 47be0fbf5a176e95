use comfy_table::{Cell, Table};

use crate::db::{get_connection, list_transactions};
use crate::error::Result;
use crate::fmt::signed_money;
use crate::settings::get_data_dir;

pub fn run(account: Option<&str>, month: Option<&str>) -> Result<()> {
    let conn = get_connection(&get_data_dir().join("teller.db"))?;
    let rows = list_transactions(&conn, account, month)?;

    if rows.is_empty() {
        println!("No transactions found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Date", "Description", "Amount", "Category", "Account"]);
    let mut net = 0.0;
    for t in &rows {
        net += t.amount;
        table.add_row(vec![
            Cell::new(&t.date),
            Cell::new(&t.description),
            Cell::new(signed_money(t.amount)),
            Cell::new(&t.category),
            Cell::new(&t.account),
        ]);
    }
    println!("{table}");
    println!("{} transactions, net {}", rows.len(), signed_money(net));
    Ok(())
}
