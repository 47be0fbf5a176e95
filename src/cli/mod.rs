pub mod chart;
pub mod columns;
pub mod convert;
pub mod import;
pub mod init;
pub mod list;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "teller", about = "Bank-statement CSV cleaner and importer.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up teller: choose a data directory and initialize the database.
    Init {
        /// Path for teller data (default: ~/Documents/teller)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Show the column positions and header names available in a CSV file.
    Columns {
        /// Path to the CSV file to inspect
        file: String,
        /// Treat the first row as a header row
        #[arg(long)]
        headers: bool,
    },
    /// Clean a statement CSV and write the normalized rows back out.
    Convert {
        /// Path to the CSV file to clean
        file: String,
        /// Treat the first row as a header row and map columns by name
        #[arg(long)]
        headers: bool,
        /// Date column: zero-based index, or header name with --headers
        #[arg(long = "date-col")]
        date_col: Option<String>,
        /// Description column: zero-based index, or header name with --headers
        #[arg(long = "description-col")]
        description_col: Option<String>,
        /// Amount column: zero-based index, or header name with --headers
        #[arg(long = "amount-col")]
        amount_col: Option<String>,
        /// Output path (default: processed_transactions.csv)
        #[arg(long)]
        output: Option<String>,
    },
    /// Clean a statement CSV and store the transactions.
    Import {
        /// Path to the CSV file to import
        file: String,
        /// Treat the first row as a header row and map columns by name
        #[arg(long)]
        headers: bool,
        /// Date column: zero-based index, or header name with --headers
        #[arg(long = "date-col")]
        date_col: Option<String>,
        /// Description column: zero-based index, or header name with --headers
        #[arg(long = "description-col")]
        description_col: Option<String>,
        /// Amount column: zero-based index, or header name with --headers
        #[arg(long = "amount-col")]
        amount_col: Option<String>,
        /// Account name (default: source filename without extension)
        #[arg(long)]
        account: Option<String>,
        /// Category assigned to every imported row (default: Uncategorized)
        #[arg(long)]
        category: Option<String>,
    },
    /// List stored transactions.
    List {
        /// Filter by account name
        #[arg(long)]
        account: Option<String>,
        /// Filter by month: YYYY-MM
        #[arg(long)]
        month: Option<String>,
    },
    /// Monthly net-spending bar chart.
    Chart {
        /// Year to chart (default: current year)
        #[arg(long)]
        year: Option<i32>,
    },
}
