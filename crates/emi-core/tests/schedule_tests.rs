use emi_core::emi::monthly_installment;
use emi_core::schedule::amortization_schedule;
use emi_core::types::LoanParameters;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Amortization schedule tests
// ===========================================================================

fn standard_loan() -> LoanParameters {
    // 1M at 8.5% over 20 years, the canonical home-loan scenario
    LoanParameters {
        principal: dec!(1_000_000),
        annual_rate_pct: dec!(8.5),
        tenure_months: 240,
    }
}

#[test]
fn test_schedule_length_matches_tenure() {
    let schedule = amortization_schedule(&standard_loan());
    assert_eq!(schedule.len(), 240);

    // Months run 1..=240 with no gaps
    for (i, entry) in schedule.iter().enumerate() {
        assert_eq!(entry.month, (i + 1) as u32);
    }
}

#[test]
fn test_year_index_grouping() {
    let schedule = amortization_schedule(&standard_loan());

    assert_eq!(schedule[0].year_index, 1);
    assert_eq!(schedule[11].year_index, 1); // month 12
    assert_eq!(schedule[12].year_index, 2); // month 13
    assert_eq!(schedule[239].year_index, 20); // month 240
}

#[test]
fn test_components_sum_to_installment() {
    let params = standard_loan();
    let installment = monthly_installment(params.principal, params.annual_rate_pct, 240);
    let schedule = amortization_schedule(&params);

    for entry in &schedule {
        assert_eq!(entry.installment, installment);
        // principal + interest reconstitute the installment (last-digit
        // rounding of the 96-bit mantissa aside)
        let recombined = entry.principal_component + entry.interest_component;
        assert!((recombined - installment).abs() < dec!(0.000001));
    }
}

#[test]
fn test_balance_monotone_and_cleared() {
    let schedule = amortization_schedule(&standard_loan());

    let mut previous = dec!(1_000_000);
    for entry in &schedule {
        assert!(entry.remaining_balance <= previous);
        assert!(entry.remaining_balance >= Decimal::ZERO);
        previous = entry.remaining_balance;
    }

    // Fully paid down by the final installment
    let last = schedule.last().unwrap();
    assert!(last.remaining_balance < dec!(0.01));
}

#[test]
fn test_conservation_of_payments() {
    let params = standard_loan();
    let installment = monthly_installment(params.principal, params.annual_rate_pct, 240);
    let schedule = amortization_schedule(&params);

    let total_principal: Decimal = schedule.iter().map(|e| e.principal_component).sum();
    let total_interest: Decimal = schedule.iter().map(|e| e.interest_component).sum();

    // Principal + interest over the full schedule equals installment × tenure
    let total_paid = total_principal + total_interest;
    assert!((total_paid - installment * dec!(240)).abs() < dec!(0.01));

    // And the principal components retire exactly the borrowed amount
    assert!((total_principal - dec!(1_000_000)).abs() < dec!(0.01));
}

#[test]
fn test_schedule_is_deterministic() {
    let params = standard_loan();
    assert_eq!(amortization_schedule(&params), amortization_schedule(&params));
}

#[test]
fn test_zero_tenure_yields_empty_schedule() {
    let params = LoanParameters {
        principal: dec!(1_000_000),
        annual_rate_pct: dec!(8.5),
        tenure_months: 0,
    };
    assert!(amortization_schedule(&params).is_empty());
}

#[test]
fn test_degenerate_rate_keeps_balance_flat() {
    // A zero rate gives a zero installment; every entry carries zeroed
    // components and the balance stays where it started, clamp untouched.
    let params = LoanParameters {
        principal: dec!(250_000),
        annual_rate_pct: dec!(0),
        tenure_months: 12,
    };
    let schedule = amortization_schedule(&params);

    assert_eq!(schedule.len(), 12);
    for entry in &schedule {
        assert_eq!(entry.installment, Decimal::ZERO);
        assert_eq!(entry.principal_component, Decimal::ZERO);
        assert_eq!(entry.interest_component, Decimal::ZERO);
        assert_eq!(entry.remaining_balance, dec!(250_000));
    }
}

#[test]
fn test_negative_principal_clamps_to_zero_balance() {
    // Degenerate installment of zero against a negative opening balance:
    // the interest component goes negative and the clamp floors the
    // running balance at zero from month one.
    let params = LoanParameters {
        principal: dec!(-5),
        annual_rate_pct: dec!(12),
        tenure_months: 3,
    };
    let schedule = amortization_schedule(&params);

    assert_eq!(schedule.len(), 3);
    assert_eq!(schedule[0].interest_component, dec!(-0.05));
    assert_eq!(schedule[0].remaining_balance, Decimal::ZERO);
    assert_eq!(schedule[2].remaining_balance, Decimal::ZERO);
}

#[test]
fn test_short_loan_exact_shape() {
    // 1200 at 12% over 2 months: r = 0.01, EMI = 1200·0.01·1.01²/(1.01²−1)
    let params = LoanParameters {
        principal: dec!(1200),
        annual_rate_pct: dec!(12),
        tenure_months: 2,
    };
    let schedule = amortization_schedule(&params);

    assert_eq!(schedule.len(), 2);

    let first = &schedule[0];
    assert_eq!(first.interest_component, dec!(12)); // 1200 × 1%
    assert!((first.installment - dec!(609.02)).abs() < dec!(0.01));

    let last = &schedule[1];
    assert!(last.remaining_balance < dec!(0.000001));
}
