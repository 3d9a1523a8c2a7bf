use emi_core::types::LoanParameters;
use emi_core::validation::{validate_loan, LoanField};
use rust_decimal_macros::dec;

// ===========================================================================
// Input validation tests
// ===========================================================================

fn loan(principal: rust_decimal::Decimal, rate: rust_decimal::Decimal, tenure: u32) -> LoanParameters {
    LoanParameters {
        principal,
        annual_rate_pct: rate,
        tenure_months: tenure,
    }
}

#[test]
fn test_clean_input_has_no_issues() {
    assert!(validate_loan(&loan(dec!(1_000_000), dec!(8.5), 240)).is_empty());
}

#[test]
fn test_every_rule_fires_independently() {
    // Negative principal, excessive rate, excessive tenure: exactly three
    // issues, one per field, in rule-table order.
    let issues = validate_loan(&loan(dec!(-5), dec!(60), 700));

    assert_eq!(issues.len(), 3);

    assert_eq!(issues[0].field, LoanField::Principal);
    assert_eq!(issues[0].message, "Principal amount must be greater than 0");

    assert_eq!(issues[1].field, LoanField::AnnualRatePct);
    assert_eq!(issues[1].message, "Interest rate seems unusually high");

    assert_eq!(issues[2].field, LoanField::TenureMonths);
    assert_eq!(issues[2].message, "Loan tenure cannot exceed 50 years");
}

#[test]
fn test_principal_too_large() {
    let issues = validate_loan(&loan(dec!(150_000_000), dec!(8.5), 240));

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].field, LoanField::Principal);
    assert_eq!(issues[0].message, "Principal amount is too large");
}

#[test]
fn test_zero_rate_and_tenure() {
    let issues = validate_loan(&loan(dec!(100_000), dec!(0), 0));

    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].field, LoanField::AnnualRatePct);
    assert_eq!(issues[0].message, "Interest rate must be greater than 0");
    assert_eq!(issues[1].field, LoanField::TenureMonths);
    assert_eq!(issues[1].message, "Loan tenure must be greater than 0");
}

#[test]
fn test_ceilings_are_inclusive() {
    // Values exactly at the ceilings pass
    assert!(validate_loan(&loan(dec!(100_000_000), dec!(50), 600)).is_empty());
    // One past each ceiling fails
    assert_eq!(validate_loan(&loan(dec!(100_000_001), dec!(8.5), 240)).len(), 1);
    assert_eq!(validate_loan(&loan(dec!(1_000_000), dec!(50.1), 240)).len(), 1);
    assert_eq!(validate_loan(&loan(dec!(1_000_000), dec!(8.5), 601)).len(), 1);
}

#[test]
fn test_issue_serialization_shape() {
    // Consumers render issues beside the offending field; the JSON contract
    // is a flat {field, message} pair with snake_case field names.
    let issues = validate_loan(&loan(dec!(-1), dec!(8.5), 240));
    let json = serde_json::to_value(&issues).unwrap();

    assert_eq!(json[0]["field"], "principal");
    assert_eq!(json[0]["message"], "Principal amount must be greater than 0");
}
