//! Form validation: four raw strings in, a `LoanInput` or per-field
//! messages out.
//!
//! The policy is presence-only, matching the form it serves: zero or
//! negative principal, a zero rate, and a zero term all validate. Range
//! problems surface later as computation warnings or an undefined result,
//! never as silent rejection here.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::format::strip_separators;
use crate::types::{FieldErrors, FormField, LoanInput, ParsedField, RawLoanForm, RepaymentType};

/// Message shown beside every empty required field.
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Message for a present but unparseable numeric field.
pub const NOT_A_NUMBER_MESSAGE: &str = "Must be a number";

/// Message for a present but unrecognised repayment type.
pub const UNKNOWN_TYPE_MESSAGE: &str = "Must be 'repayment' or 'interest-only'";

/// Parse one numeric form field into a discriminated outcome. The amount
/// field is comma-stripped before parsing; term and rate are plain decimals.
pub fn parse_field(field: FormField, raw: &str) -> ParsedField {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ParsedField::Missing;
    }

    let cleaned = match field {
        FormField::Amount => strip_separators(trimmed),
        _ => trimmed.to_string(),
    };

    match Decimal::from_str(&cleaned) {
        Ok(value) => ParsedField::Valid(value),
        Err(_) => ParsedField::Invalid(NOT_A_NUMBER_MESSAGE.to_string()),
    }
}

/// Validate the whole form. All-or-nothing: if any field is missing or
/// malformed, every offending field gets a message and no `LoanInput` is
/// produced, so computation is never attempted on a partial form.
pub fn validate(form: &RawLoanForm) -> Result<LoanInput, FieldErrors> {
    let mut errors = FieldErrors::default();

    let principal = numeric_field(FormField::Amount, &form.amount, &mut errors);
    let term_years = numeric_field(FormField::Term, &form.term, &mut errors);
    let annual_rate_percent = numeric_field(FormField::Rate, &form.rate, &mut errors);
    let repayment_type = type_field(&form.repayment_type, &mut errors);

    match (principal, term_years, annual_rate_percent, repayment_type) {
        (Some(principal), Some(term_years), Some(annual_rate_percent), Some(repayment_type))
            if errors.is_empty() =>
        {
            Ok(LoanInput {
                principal,
                annual_rate_percent,
                term_years,
                repayment_type,
            })
        }
        _ => Err(errors),
    }
}

fn numeric_field(field: FormField, raw: &str, errors: &mut FieldErrors) -> Option<Decimal> {
    match parse_field(field, raw) {
        ParsedField::Valid(value) => Some(value),
        ParsedField::Missing => {
            errors.insert(field, REQUIRED_MESSAGE);
            None
        }
        ParsedField::Invalid(message) => {
            errors.insert(field, message);
            None
        }
    }
}

fn type_field(raw: &str, errors: &mut FieldErrors) -> Option<RepaymentType> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.insert(FormField::Type, REQUIRED_MESSAGE);
        return None;
    }
    match RepaymentType::from_str(trimmed) {
        Ok(repayment_type) => Some(repayment_type),
        Err(_) => {
            errors.insert(FormField::Type, UNKNOWN_TYPE_MESSAGE);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn filled_form() -> RawLoanForm {
        RawLoanForm {
            amount: "300,000".into(),
            term: "25".into(),
            rate: "5.25".into(),
            repayment_type: "repayment".into(),
        }
    }

    #[test]
    fn accepts_a_complete_form() {
        let loan = validate(&filled_form()).unwrap();
        assert_eq!(loan.principal, dec!(300000));
        assert_eq!(loan.term_years, dec!(25));
        assert_eq!(loan.annual_rate_percent, dec!(5.25));
        assert_eq!(loan.repayment_type, RepaymentType::Repayment);
    }

    #[test]
    fn every_empty_field_gets_the_required_message() {
        let errors = validate(&RawLoanForm::default()).unwrap_err();
        assert_eq!(errors.len(), 4);
        for field in [
            FormField::Amount,
            FormField::Term,
            FormField::Rate,
            FormField::Type,
        ] {
            assert_eq!(errors.get(field), Some(REQUIRED_MESSAGE));
        }
    }

    #[test]
    fn one_missing_field_blocks_the_whole_form() {
        let mut form = filled_form();
        form.term = String::new();
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FormField::Term), Some(REQUIRED_MESSAGE));
        assert_eq!(errors.get(FormField::Amount), None);
    }

    #[test]
    fn whitespace_counts_as_missing() {
        let mut form = filled_form();
        form.rate = "   ".into();
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.get(FormField::Rate), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn no_range_checks_beyond_presence() {
        let mut form = filled_form();
        form.amount = "0".into();
        form.rate = "0".into();
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn fractional_terms_are_accepted() {
        let mut form = filled_form();
        form.term = "12.5".into();
        let loan = validate(&form).unwrap();
        assert_eq!(loan.term_years, dec!(12.5));
    }

    #[test]
    fn unparseable_numbers_are_reported_not_missing() {
        let mut form = filled_form();
        form.amount = "12a3".into();
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.get(FormField::Amount), Some(NOT_A_NUMBER_MESSAGE));
    }

    #[test]
    fn unknown_type_is_reported() {
        let mut form = filled_form();
        form.repayment_type = "balloon".into();
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.get(FormField::Type), Some(UNKNOWN_TYPE_MESSAGE));
    }

    #[test]
    fn grouped_amount_parses_after_stripping() {
        assert_eq!(
            parse_field(FormField::Amount, "1,000,000"),
            ParsedField::Valid(dec!(1000000))
        );
    }
}
