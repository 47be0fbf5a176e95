mod cli;
mod dates;
mod db;
mod error;
mod exporter;
mod fmt;
mod mapping;
mod models;
mod parser;
mod pipeline;
mod settings;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Columns { file, headers } => cli::columns::run(&file, headers),
        Commands::Convert {
            file,
            headers,
            date_col,
            description_col,
            amount_col,
            output,
        } => cli::convert::run(
            &file,
            headers,
            date_col.as_deref(),
            description_col.as_deref(),
            amount_col.as_deref(),
            output.as_deref(),
        ),
        Commands::Import {
            file,
            headers,
            date_col,
            description_col,
            amount_col,
            account,
            category,
        } => cli::import::run(
            &file,
            headers,
            date_col.as_deref(),
            description_col.as_deref(),
            amount_col.as_deref(),
            account.as_deref(),
            category.as_deref(),
        ),
        Commands::List { account, month } => cli::list::run(account.as_deref(), month.as_deref()),
        Commands::Chart { year } => cli::chart::run(year),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
