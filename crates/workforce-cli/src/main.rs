//! Workforce CLI
//!
//! Command-line interface for employee and review records

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use workforce_core::logging_facility::{self, Profile};
use workforce_store::db::DEFAULT_DB_PATH;
use workforce_store::StoreConfig;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "workforce")]
#[command(about = "Workforce - employee and performance review records", long_about = None)]
struct Cli {
    /// SQLite database file
    #[arg(long, global = true, env = "WORKFORCE_DB", default_value = DEFAULT_DB_PATH)]
    db: PathBuf,

    /// Log output format: pretty or json
    #[arg(long, global = true, default_value = "pretty")]
    log_format: Profile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create the employees and reviews tables if missing
    Init,
    /// Drop and recreate both tables
    Reset,
    /// Reset the tables and load sample data
    Seed,
    /// Employee operations
    Employee(commands::employee::EmployeeArgs),
    /// Review operations
    Review(commands::review::ReviewArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_format);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let conn = StoreConfig::new(cli.db).open()?;

    match cli.command {
        Commands::Init => commands::tables::init(&conn),
        Commands::Reset => commands::tables::reset(&conn),
        Commands::Seed => commands::seed::execute(&conn),
        Commands::Employee(args) => commands::employee::execute(args, &conn),
        Commands::Review(args) => commands::review::execute(args, &conn),
    }
}
