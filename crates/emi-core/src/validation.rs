use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::LoanParameters;

/// Largest accepted principal.
const MAX_PRINCIPAL: Decimal = dec!(100_000_000);
/// Annual rates above this are flagged as suspicious but still computed.
const HIGH_RATE_PCT: Decimal = dec!(50);
/// 50 years of monthly installments.
const MAX_TENURE_MONTHS: u32 = 600;

/// Input field a validation issue refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanField {
    Principal,
    AnnualRatePct,
    TenureMonths,
}

/// Advisory diagnostic for one input field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub field: LoanField,
    pub message: String,
}

impl ValidationIssue {
    fn new(field: LoanField, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// Check loan parameters against the input rules.
///
/// Every rule is evaluated independently and all violations are reported, in
/// rule-table order. Issues never block the calculation itself: the
/// calculation functions handle out-of-range input through their own
/// degenerate-case policy.
pub fn validate_loan(params: &LoanParameters) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if params.principal <= Decimal::ZERO {
        issues.push(ValidationIssue::new(
            LoanField::Principal,
            "Principal amount must be greater than 0",
        ));
    }
    if params.principal > MAX_PRINCIPAL {
        issues.push(ValidationIssue::new(
            LoanField::Principal,
            "Principal amount is too large",
        ));
    }
    if params.annual_rate_pct <= Decimal::ZERO {
        issues.push(ValidationIssue::new(
            LoanField::AnnualRatePct,
            "Interest rate must be greater than 0",
        ));
    }
    if params.annual_rate_pct > HIGH_RATE_PCT {
        issues.push(ValidationIssue::new(
            LoanField::AnnualRatePct,
            "Interest rate seems unusually high",
        ));
    }
    if params.tenure_months == 0 {
        issues.push(ValidationIssue::new(
            LoanField::TenureMonths,
            "Loan tenure must be greater than 0",
        ));
    }
    if params.tenure_months > MAX_TENURE_MONTHS {
        issues.push(ValidationIssue::new(
            LoanField::TenureMonths,
            "Loan tenure cannot exceed 50 years",
        ));
    }

    issues
}
