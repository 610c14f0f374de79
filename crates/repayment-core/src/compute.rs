//! The repayment computation: amortising annuity or interest-only, in
//! `rust_decimal::Decimal` with no intermediate rounding.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use std::time::Instant;

use crate::error::CalculatorError;
use crate::types::{with_metadata, ComputationOutput, LoanInput, RepaymentResult, RepaymentType};
use crate::CalcResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);

/// Compute the monthly and total repayment for a validated loan.
///
/// `monthly_rate = annual_rate_percent / 100 / 12`, `months = term_years × 12`
/// (fractional months tolerated, `powd` handles the non-integer exponent).
/// For the amortising branch the annuity denominator `(1+i)^n − 1` is zero at
/// a 0% rate; `Decimal` has no NaN to carry that 0/0 through, so it surfaces
/// as [`CalculatorError::UndefinedResult`] rather than a defaulted figure.
/// Total is always `monthly × months`, for both repayment types.
pub fn calculate_repayment(
    input: &LoanInput,
) -> CalcResult<ComputationOutput<RepaymentResult>> {
    let start = Instant::now();
    let warnings = collect_warnings(input);

    let monthly_rate = input.annual_rate_percent / PERCENT / MONTHS_PER_YEAR;
    let months = input.term_years * MONTHS_PER_YEAR;

    let (monthly_payment, methodology) = match input.repayment_type {
        RepaymentType::Repayment => {
            let growth = (Decimal::ONE + monthly_rate).powd(months);
            let denominator = growth - Decimal::ONE;
            if denominator.is_zero() {
                return Err(CalculatorError::UndefinedResult {
                    context: format!(
                        "annuity denominator (1 + {monthly_rate})^{months} - 1 is zero"
                    ),
                });
            }
            (
                input.principal * monthly_rate * growth / denominator,
                "Amortising annuity (level payment)",
            )
        }
        RepaymentType::InterestOnly => {
            (input.principal * monthly_rate, "Interest-only")
        }
    };

    let result = RepaymentResult {
        monthly_payment,
        total_repayment: monthly_payment * months,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(methodology, input, warnings, elapsed, result))
}

fn collect_warnings(input: &LoanInput) -> Vec<String> {
    let mut warnings = Vec::new();
    if input.principal <= Decimal::ZERO {
        warnings.push(format!(
            "principal {} is not positive; figures will not describe a real loan",
            input.principal
        ));
    }
    if input.term_years.fract() != Decimal::ZERO {
        warnings.push(format!(
            "term {} years is not a whole number of years",
            input.term_years
        ));
    }
    warnings
}
