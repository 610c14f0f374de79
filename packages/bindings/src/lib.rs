//! Node bindings for the repayment calculator core. The web form calls
//! these four functions; everything crosses the boundary as JSON strings
//! so Decimal values stay exact.

use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde_json::json;
use std::str::FromStr;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Validate the four raw form fields.
///
/// Returns `{"ok": LoanInput}` when the form is complete, otherwise
/// `{"errors": {field: message, …}}` so the page can render each message
/// beside its field.
#[napi]
pub fn validate_loan(form_json: String) -> NapiResult<String> {
    let form: repayment_core::RawLoanForm =
        serde_json::from_str(&form_json).map_err(to_napi_error)?;
    let outcome = match repayment_core::validate::validate(&form) {
        Ok(loan) => json!({ "ok": loan }),
        Err(errors) => json!({ "errors": errors }),
    };
    serde_json::to_string(&outcome).map_err(to_napi_error)
}

/// Compute monthly and total repayment for a validated loan.
#[napi]
pub fn calculate_repayment(input_json: String) -> NapiResult<String> {
    let input: repayment_core::LoanInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = repayment_core::compute::calculate_repayment(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Grouping transform for the live amount field. `null` means the edit
/// contained an invalid character and the field should keep its value.
#[napi]
pub fn format_amount_input(raw: String) -> Option<String> {
    repayment_core::format::format_amount_input(&raw)
}

/// Two-decimal grouped currency display string for a computed figure,
/// passed as a decimal string.
#[napi]
pub fn format_currency(value: String) -> NapiResult<String> {
    let value = Decimal::from_str(&value).map_err(to_napi_error)?;
    Ok(repayment_core::format::format_currency(value))
}
