use clap::Args;
use serde_json::Value;

use repayment_core::compute::calculate_repayment;
use repayment_core::validate::validate;
use repayment_core::RawLoanForm;

use crate::input;

#[derive(Args)]
pub struct CalculateArgs {
    /// Loan amount, grouped or plain (e.g. 300,000)
    #[arg(long)]
    pub amount: Option<String>,

    /// Term in years
    #[arg(long)]
    pub term: Option<String>,

    /// Annual interest rate as a percentage (e.g. 5.25)
    #[arg(long)]
    pub rate: Option<String>,

    /// Repayment type: repayment or interest-only
    #[arg(long = "type")]
    pub repayment_type: Option<String>,

    /// Read the form as JSON from a file instead of flags
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_calculate(args: CalculateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let form = resolve_form(&args)?;

    // Omitted flags become empty fields, so the per-field required messages
    // surface exactly as the form shows them.
    let loan = match validate(&form) {
        Ok(loan) => loan,
        Err(errors) => {
            let lines: Vec<String> = errors
                .iter()
                .map(|(field, message)| format!("{field}: {message}"))
                .collect();
            return Err(format!("invalid form\n{}", lines.join("\n")).into());
        }
    };

    let result = calculate_repayment(&loan)?;
    Ok(serde_json::to_value(result)?)
}

fn resolve_form(args: &CalculateArgs) -> Result<RawLoanForm, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::read_json(path);
    }
    let no_flags = args.amount.is_none()
        && args.term.is_none()
        && args.rate.is_none()
        && args.repayment_type.is_none();
    if no_flags {
        if let Some(data) = input::read_stdin()? {
            return Ok(serde_json::from_value(data)?);
        }
    }
    Ok(RawLoanForm {
        amount: args.amount.clone().unwrap_or_default(),
        term: args.term.clone().unwrap_or_default(),
        rate: args.rate.clone().unwrap_or_default(),
        repayment_type: args.repayment_type.clone().unwrap_or_default(),
    })
}
