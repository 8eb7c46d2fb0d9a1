//! Review commands
//!
//! Usage: workforce review <add|list|show|update|delete>

use clap::{Args, Subcommand};
use rusqlite::Connection;
use workforce_store::{ReviewRepository, SqliteEmployeeLookup};

use super::print_json;

#[derive(Debug, Args)]
pub struct ReviewArgs {
    #[command(subcommand)]
    pub command: ReviewCommand,
}

#[derive(Debug, Subcommand)]
pub enum ReviewCommand {
    /// Add a review for an existing employee
    Add {
        #[arg(long)]
        year: i64,
        #[arg(long)]
        summary: String,
        #[arg(long)]
        employee_id: i64,
    },
    /// List reviews, optionally for one employee
    List {
        #[arg(long)]
        employee: Option<i64>,
        #[arg(long)]
        json: bool,
    },
    /// Show one review
    Show {
        id: i64,
        #[arg(long)]
        json: bool,
    },
    /// Change fields of an existing review
    Update {
        id: i64,
        #[arg(long)]
        year: Option<i64>,
        #[arg(long)]
        summary: Option<String>,
        #[arg(long)]
        employee_id: Option<i64>,
    },
    /// Delete a review
    Delete { id: i64 },
}

pub fn execute(args: ReviewArgs, conn: &Connection) -> Result<(), Box<dyn std::error::Error>> {
    let lookup = SqliteEmployeeLookup::new(conn);
    let mut reviews = ReviewRepository::new();

    match args.command {
        ReviewCommand::Add {
            year,
            summary,
            employee_id,
        } => {
            let review = reviews.create(conn, year, summary, employee_id, &lookup)?;
            println!("✓ Created {}", review);
        }
        ReviewCommand::List { employee, json } => {
            let listed = match employee {
                Some(employee_id) => reviews.find_by_employee_id(conn, employee_id)?,
                None => reviews.get_all(conn)?,
            };
            if json {
                print_json(&listed)?;
            } else {
                for review in listed {
                    println!("{}", review);
                }
            }
        }
        ReviewCommand::Show { id, json } => {
            let review = reviews
                .find_by_id(conn, id)?
                .ok_or_else(|| format!("Review {} not found", id))?;
            if json {
                print_json(review)?;
            } else {
                println!("{}", review);
            }
        }
        ReviewCommand::Update {
            id,
            year,
            summary,
            employee_id,
        } => {
            if reviews.find_by_id(conn, id)?.is_none() {
                return Err(format!("Review {} not found", id).into());
            }

            let review = reviews
                .get_mut(id)
                .ok_or_else(|| format!("Review {} not found", id))?;
            if let Some(year) = year {
                review.set_year(year)?;
            }
            if let Some(summary) = summary {
                review.set_summary(summary)?;
            }
            if let Some(employee_id) = employee_id {
                review.set_employee_id(employee_id, &lookup)?;
            }

            reviews.update(conn, id)?;
            if let Some(review) = reviews.get(id) {
                println!("✓ Updated {}", review);
            }
        }
        ReviewCommand::Delete { id } => {
            if reviews.find_by_id(conn, id)?.is_none() {
                return Err(format!("Review {} not found", id).into());
            }
            let review = reviews.delete(conn, id)?;
            println!("✓ Deleted review {} ({})", id, review.summary());
        }
    }

    Ok(())
}
