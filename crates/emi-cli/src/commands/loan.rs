use clap::Args;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use emi_core::emi::{calculate_analysis, calculate_summary};
use emi_core::schedule::amortization_schedule;
use emi_core::types::LoanParameters;
use emi_core::validation::validate_loan;

use crate::input;

/// Loan parameters shared by every subcommand.
#[derive(Args)]
pub struct LoanParamArgs {
    /// Path to a JSON file with loan parameters
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal in whole currency units
    #[arg(long, allow_hyphen_values = true)]
    pub principal: Option<Decimal>,

    /// Nominal annual interest rate as a percentage (e.g. 8.5)
    #[arg(long, allow_hyphen_values = true)]
    pub rate: Option<Decimal>,

    /// Loan tenure in months
    #[arg(long)]
    pub tenure_months: Option<u32>,
}

/// Arguments for the EMI summary
#[derive(Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub loan: LoanParamArgs,
}

/// Arguments for the amortization schedule
#[derive(Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub loan: LoanParamArgs,

    /// Emit only the first N entries (the full schedule by default)
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Arguments for input validation
#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub loan: LoanParamArgs,
}

/// Arguments for the combined analysis
#[derive(Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub loan: LoanParamArgs,
}

/// One exported schedule row. Field order and names define the CSV contract:
/// Month,EMI,Principal,Interest,Balance with two-decimal amounts.
#[derive(Debug, Serialize, Deserialize)]
struct ScheduleRow {
    #[serde(rename = "Month")]
    month: u32,
    #[serde(rename = "EMI")]
    emi: String,
    #[serde(rename = "Principal")]
    principal: String,
    #[serde(rename = "Interest")]
    interest: String,
    #[serde(rename = "Balance")]
    balance: String,
}

fn get_params(args: &LoanParamArgs) -> Result<LoanParameters, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_json(path);
    }

    if let (Some(principal), Some(rate), Some(tenure_months)) =
        (args.principal, args.rate, args.tenure_months)
    {
        return Ok(LoanParameters {
            principal,
            annual_rate_pct: rate,
            tenure_months,
        });
    }

    if let Some(data) = input::stdin::read_stdin()? {
        let params: LoanParameters = serde_json::from_value(data)?;
        return Ok(params);
    }

    Err("Provide --principal, --rate and --tenure-months, or --input file, or pipe JSON via stdin".into())
}

/// Two-decimal display string, rounding half away from zero.
fn two_dp(value: Decimal) -> String {
    format!(
        "{:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

pub fn run_summary(args: SummaryArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let params = get_params(&args.loan)?;
    let output = calculate_summary(&params)?;
    Ok(serde_json::to_value(output)?)
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let params = get_params(&args.loan)?;
    let schedule = amortization_schedule(&params);

    let rows: Vec<ScheduleRow> = schedule
        .iter()
        .take(args.limit.unwrap_or(usize::MAX))
        .map(|entry| ScheduleRow {
            month: entry.month,
            emi: two_dp(entry.installment),
            principal: two_dp(entry.principal_component),
            interest: two_dp(entry.interest_component),
            balance: two_dp(entry.remaining_balance),
        })
        .collect();

    Ok(serde_json::to_value(rows)?)
}

pub fn run_validate(args: ValidateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let params = get_params(&args.loan)?;
    let issues = validate_loan(&params);
    Ok(serde_json::to_value(issues)?)
}

pub fn run_analyze(args: AnalyzeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let params = get_params(&args.loan)?;
    let output = calculate_analysis(&params)?;
    Ok(serde_json::to_value(output)?)
}
