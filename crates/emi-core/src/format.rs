use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::{Currency, Money};

impl Currency {
    /// Symbol prefixed to formatted amounts.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "₹",
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
        }
    }

    /// INR groups by lakh/crore (12,34,56,789) rather than by thousands.
    fn indian_grouping(&self) -> bool {
        matches!(self, Currency::INR)
    }
}

/// Format an amount as whole-unit currency, e.g. `₹8,679`.
///
/// Rounds half away from zero to zero decimal places. Display-only: the
/// rounded value must never feed back into further arithmetic.
pub fn format_currency(amount: Money, currency: &Currency) -> String {
    let (digits, negative) = whole_unit_digits(amount);
    let grouped = if currency.indian_grouping() {
        group_indian(&digits)
    } else {
        group_thousands(&digits)
    };

    if negative {
        format!("-{}{}", currency.symbol(), grouped)
    } else {
        format!("{}{}", currency.symbol(), grouped)
    }
}

/// Format a bare number rounded to whole units with thousands grouping.
pub fn format_number(amount: Money) -> String {
    let (digits, negative) = whole_unit_digits(amount);
    let grouped = group_thousands(&digits);

    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Digits of the amount rounded to whole units, plus its sign.
fn whole_unit_digits(amount: Money) -> (String, bool) {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    (rounded.abs().to_string(), negative)
}

/// 1234567 -> 1,234,567
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// 12345678 -> 1,23,45,678: the last three digits, then pairs.
fn group_indian(digits: &str) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(len - 3);
    let head_len = head.len();
    let mut out = String::with_capacity(len + len / 2);

    for (i, ch) in head.chars().enumerate() {
        if i > 0 && (head_len - i) % 2 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push(',');
    out.push_str(tail);

    out
}
