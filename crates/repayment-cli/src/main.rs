mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::calculate::CalculateArgs;
use commands::format::{FormatAmountArgs, FormatCurrencyArgs};

/// Mortgage repayment calculations with decimal precision
#[derive(Parser)]
#[command(
    name = "mortgage",
    version,
    about = "Mortgage repayment calculations with decimal precision",
    long_about = "Computes monthly and total mortgage repayments (amortising \
                  annuity or interest-only) from a loan amount, term, and \
                  interest rate, with the same validation and display \
                  formatting the calculator form applies."
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
    /// Validate a loan form and compute the repayment figures
    Calculate(CalculateArgs),
    /// Apply the amount-field grouping transform to a raw value
    FormatAmount(FormatAmountArgs),
    /// Render a number as a two-decimal grouped currency string
    FormatCurrency(FormatCurrencyArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Calculate(args) => commands::calculate::run_calculate(args),
        Commands::FormatAmount(args) => commands::format::run_format_amount(args),
        Commands::FormatCurrency(args) => commands::format::run_format_currency(args),
        Commands::Version => {
            println!("mortgage {}", env!("CARGO_PKG_VERSION"));
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
