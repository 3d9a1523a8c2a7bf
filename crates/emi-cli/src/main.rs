mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::loan::{AnalyzeArgs, ScheduleArgs, SummaryArgs, ValidateArgs};

/// EMI and loan amortization calculations
#[derive(Parser)]
#[command(
    name = "emi",
    version,
    about = "EMI and loan amortization calculations",
    long_about = "A CLI for equated monthly installment (EMI) calculations with \
                  decimal precision. Computes payment summaries, full \
                  month-by-month amortization schedules, and advisory input \
                  diagnostics for fixed-rate loans."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the EMI summary (installment, total payment, total interest)
    Summary(SummaryArgs),
    /// Generate the month-by-month amortization schedule
    Schedule(ScheduleArgs),
    /// Check loan parameters against the input rules
    Validate(ValidateArgs),
    /// Full analysis: summary and schedule in one envelope
    Analyze(AnalyzeArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Summary(args) => commands::loan::run_summary(args),
        Commands::Schedule(args) => commands::loan::run_schedule(args),
        Commands::Validate(args) => commands::loan::run_validate(args),
        Commands::Analyze(args) => commands::loan::run_analyze(args),
        Commands::Version => {
            println!("emi {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
