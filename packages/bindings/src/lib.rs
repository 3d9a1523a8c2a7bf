use napi::Result as NapiResult;
use napi_derive::napi;

use emi_core::types::{Currency, LoanParameters};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_params(params_json: &str) -> NapiResult<LoanParameters> {
    serde_json::from_str(params_json).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

#[napi]
pub fn loan_summary(params_json: String) -> NapiResult<String> {
    let params = parse_params(&params_json)?;
    let output = emi_core::emi::calculate_summary(&params).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn amortization_schedule(params_json: String) -> NapiResult<String> {
    let params = parse_params(&params_json)?;
    let schedule = emi_core::schedule::amortization_schedule(&params);
    serde_json::to_string(&schedule).map_err(to_napi_error)
}

#[napi]
pub fn analyze_loan(params_json: String) -> NapiResult<String> {
    let params = parse_params(&params_json)?;
    let output = emi_core::emi::calculate_analysis(&params).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Validation and display formatting
// ---------------------------------------------------------------------------

#[napi]
pub fn validate_loan(params_json: String) -> NapiResult<String> {
    let params = parse_params(&params_json)?;
    let issues = emi_core::validation::validate_loan(&params);
    serde_json::to_string(&issues).map_err(to_napi_error)
}

#[napi]
pub fn format_currency(amount: String, currency_code: Option<String>) -> NapiResult<String> {
    let amount: rust_decimal::Decimal = amount.parse().map_err(to_napi_error)?;
    let currency = match currency_code {
        None => Currency::default(),
        Some(code) => {
            serde_json::from_value(serde_json::Value::String(code)).map_err(to_napi_error)?
        }
    };
    Ok(emi_core::format::format_currency(amount, &currency))
}
