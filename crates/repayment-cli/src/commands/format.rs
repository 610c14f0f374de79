use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::str::FromStr;

use repayment_core::format::{format_amount_input, format_currency};

#[derive(Args)]
pub struct FormatAmountArgs {
    /// Raw amount-field value (e.g. 1000000 or 1,0000.5)
    pub value: String,
}

#[derive(Args)]
pub struct FormatCurrencyArgs {
    /// Decimal value to render (e.g. 584.5908)
    pub value: String,
}

pub fn run_format_amount(args: FormatAmountArgs) -> Result<Value, Box<dyn std::error::Error>> {
    match format_amount_input(&args.value) {
        Some(formatted) => Ok(json!({ "result": { "formatted": formatted } })),
        None => Err(format!("'{}' is not a valid amount edit", args.value).into()),
    }
}

pub fn run_format_currency(args: FormatCurrencyArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let value = Decimal::from_str(&args.value)
        .map_err(|e| format!("'{}' is not a decimal number: {e}", args.value))?;
    Ok(json!({ "result": { "formatted": format_currency(value) } }))
}
