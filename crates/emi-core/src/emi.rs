use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::schedule::{amortization_schedule, AmortizationEntry};
use crate::types::{with_metadata, ComputationOutput, LoanParameters, Money, Rate};
use crate::validation::validate_loan;
use crate::EmiCalcResult;

/// Percent-per-annum to fraction-per-month divisor (100 × 12).
const RATE_DIVISOR: Decimal = dec!(1200);

/// Periodic rate fraction for a quoted annual percentage.
pub(crate) fn monthly_rate(annual_rate_pct: Rate) -> Rate {
    annual_rate_pct / RATE_DIVISOR
}

/// Fixed monthly payment (EMI) for a loan.
///
/// EMI = P · r · (1+r)^n / ((1+r)^n − 1), with r the monthly rate fraction
/// and n the tenure in months.
///
/// Total over its whole input domain: a non-positive principal, rate, or
/// tenure yields zero rather than an error, a vanishing denominator falls
/// back to straight-line principal / n, and a growth factor too large for
/// Decimal degrades to the perpetuity limit P·r.
pub fn monthly_installment(principal: Money, annual_rate_pct: Rate, tenure_months: u32) -> Money {
    if principal <= Decimal::ZERO || annual_rate_pct <= Decimal::ZERO || tenure_months == 0 {
        return Decimal::ZERO;
    }

    let rate = monthly_rate(annual_rate_pct);
    let growth = match (Decimal::ONE + rate).checked_powi(tenure_months as i64) {
        Some(g) => g,
        // (1+r)^n overflowed: the annuity formula tends to P·r as the
        // growth factor grows without bound.
        None => return principal * rate,
    };
    let denominator = growth - Decimal::ONE;

    if denominator.is_zero() {
        // Unreachable for positive rates; kept as a numeric safety net.
        return principal / Decimal::from(tenure_months);
    }

    // The factor stays near 1 for large growth; multiplying it last keeps
    // the intermediates bounded for extreme rates.
    let annuity_factor = growth / denominator;
    principal * rate * annuity_factor
}

/// Summary figures for a loan, shaped for direct display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmiSummary {
    /// Constant payment for every period.
    pub monthly_installment: Money,
    /// Installment × tenure.
    pub total_payment: Money,
    /// Total payment minus principal.
    pub total_interest: Money,
    /// Input principal echoed back for display convenience.
    pub principal_amount: Money,
}

/// Calculate the EMI summary for a loan.
///
/// For degenerate inputs the installment is zero and `total_interest` comes
/// out as −principal; that is propagated as-is, not special-cased.
pub fn loan_summary(params: &LoanParameters) -> EmiSummary {
    let installment =
        monthly_installment(params.principal, params.annual_rate_pct, params.tenure_months);
    let total_payment = installment * Decimal::from(params.tenure_months);
    let total_interest = total_payment - params.principal;

    EmiSummary {
        monthly_installment: installment,
        total_payment,
        total_interest,
        principal_amount: params.principal,
    }
}

/// EMI summary wrapped in the standard output envelope.
///
/// Validation findings are advisory: they surface as envelope warnings while
/// the calculation proceeds with the inputs exactly as given.
pub fn calculate_summary(
    params: &LoanParameters,
) -> EmiCalcResult<ComputationOutput<EmiSummary>> {
    let start = Instant::now();

    let warnings = validation_warnings(params);
    let summary = loan_summary(params);

    let elapsed = start.elapsed().as_micros() as u64;

    with_metadata(
        "Fixed-payment annuity (EMI) formula",
        params,
        warnings,
        elapsed,
        summary,
    )
}

/// Summary plus full amortization schedule, recomputed together in full —
/// the shape a form-driven consumer re-requests on every input change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanAnalysis {
    pub summary: EmiSummary,
    pub schedule: Vec<AmortizationEntry>,
}

/// Full loan analysis (summary + schedule) in the standard envelope.
pub fn calculate_analysis(
    params: &LoanParameters,
) -> EmiCalcResult<ComputationOutput<LoanAnalysis>> {
    let start = Instant::now();

    let warnings = validation_warnings(params);
    let analysis = LoanAnalysis {
        summary: loan_summary(params),
        schedule: amortization_schedule(params),
    };

    let elapsed = start.elapsed().as_micros() as u64;

    with_metadata(
        "Fixed-payment annuity (EMI) amortization",
        params,
        warnings,
        elapsed,
        analysis,
    )
}

fn validation_warnings(params: &LoanParameters) -> Vec<String> {
    validate_loan(params)
        .into_iter()
        .map(|issue| issue.message)
        .collect()
}
