//! Employee commands
//!
//! Usage: workforce employee <add|list|show|delete|reviews>

use clap::{Args, Subcommand};
use rusqlite::Connection;
use workforce_store::{EmployeeRepository, ReviewRepository};

use super::print_json;

#[derive(Debug, Args)]
pub struct EmployeeArgs {
    #[command(subcommand)]
    pub command: EmployeeCommand,
}

#[derive(Debug, Subcommand)]
pub enum EmployeeCommand {
    /// Add an employee
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        job_title: String,
    },
    /// List all employees
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show one employee
    Show {
        id: i64,
        #[arg(long)]
        json: bool,
    },
    /// Delete an employee (their reviews are deleted by the database)
    Delete { id: i64 },
    /// List the reviews written for an employee
    Reviews {
        id: i64,
        #[arg(long)]
        json: bool,
    },
}

pub fn execute(args: EmployeeArgs, conn: &Connection) -> Result<(), Box<dyn std::error::Error>> {
    let mut employees = EmployeeRepository::new();

    match args.command {
        EmployeeCommand::Add { name, job_title } => {
            let employee = employees.create(conn, name, job_title)?;
            println!("✓ Created {}", employee);
        }
        EmployeeCommand::List { json } => {
            let all = employees.get_all(conn)?;
            if json {
                print_json(&all)?;
            } else {
                for employee in all {
                    println!("{}", employee);
                }
            }
        }
        EmployeeCommand::Show { id, json } => {
            let employee = employees
                .find_by_id(conn, id)?
                .ok_or_else(|| format!("Employee {} not found", id))?;
            if json {
                print_json(employee)?;
            } else {
                println!("{}", employee);
            }
        }
        EmployeeCommand::Delete { id } => {
            if employees.find_by_id(conn, id)?.is_none() {
                return Err(format!("Employee {} not found", id).into());
            }
            let employee = employees.delete(conn, id)?;
            println!("✓ Deleted {} (was id {})", employee.name(), id);
        }
        EmployeeCommand::Reviews { id, json } => {
            if employees.find_by_id(conn, id)?.is_none() {
                return Err(format!("Employee {} not found", id).into());
            }
            let mut reviews = ReviewRepository::new();
            let written = employees.reviews(conn, id, &mut reviews)?;
            if json {
                print_json(&written)?;
            } else {
                for review in written {
                    println!("{}", review);
                }
            }
        }
    }

    Ok(())
}
