use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::emi::{monthly_installment, monthly_rate};
use crate::types::{LoanParameters, Money};

const MONTHS_PER_YEAR: u32 = 12;

/// One month of an amortization schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationEntry {
    /// 1-based month number.
    pub month: u32,
    /// Constant payment, identical across every entry.
    pub installment: Money,
    /// Portion of the installment that retires principal.
    pub principal_component: Money,
    /// Interest accrued on the balance carried into this month.
    pub interest_component: Money,
    /// Balance after this month's payment, clamped at zero.
    pub remaining_balance: Money,
    /// 1-based year the month falls in (ceil(month / 12)), for grouping.
    pub year_index: u32,
}

/// Month-by-month amortization schedule for a loan.
///
/// The installment is computed once and held constant; each entry splits it
/// into interest on the running balance and the principal remainder, then
/// rolls the balance forward. The loop always emits exactly `tenure_months`
/// entries: should the balance reach zero early, later entries carry zero
/// interest and a full-installment principal component against a balance
/// clamped at zero. A zero tenure yields an empty schedule.
pub fn amortization_schedule(params: &LoanParameters) -> Vec<AmortizationEntry> {
    let installment =
        monthly_installment(params.principal, params.annual_rate_pct, params.tenure_months);
    let rate = monthly_rate(params.annual_rate_pct);

    let mut schedule = Vec::with_capacity(params.tenure_months as usize);
    let mut balance = params.principal;

    for month in 1..=params.tenure_months {
        let interest_component = balance * rate;
        let principal_component = installment - interest_component;
        balance = (balance - principal_component).max(Decimal::ZERO);

        schedule.push(AmortizationEntry {
            month,
            installment,
            principal_component,
            interest_component,
            remaining_balance: balance,
            year_index: (month + MONTHS_PER_YEAR - 1) / MONTHS_PER_YEAR,
        });
    }

    schedule
}
