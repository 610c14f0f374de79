use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates as the user enters them: percentages (5.25 = 5.25%).
pub type Rate = Decimal;

/// Year fractions or counts
pub type Years = Decimal;

/// How the loan is repaid over the term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepaymentType {
    /// Level monthly payment covering interest and principal.
    Repayment,
    /// Monthly payment covers interest only; principal is untouched.
    InterestOnly,
}

impl RepaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepaymentType::Repayment => "repayment",
            RepaymentType::InterestOnly => "interest-only",
        }
    }
}

impl FromStr for RepaymentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "repayment" => Ok(RepaymentType::Repayment),
            "interest-only" => Ok(RepaymentType::InterestOnly),
            other => Err(format!("unknown repayment type '{other}'")),
        }
    }
}

impl fmt::Display for RepaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully validated set of loan parameters, ready for computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    /// Borrowed amount.
    pub principal: Money,
    /// Annual interest rate as a percentage (5.25 = 5.25%).
    pub annual_rate_percent: Rate,
    /// Loan term in years. Fractional terms are tolerated.
    pub term_years: Years,
    pub repayment_type: RepaymentType,
}

/// The computed repayment figures. Derived, immutable, rebuilt from scratch
/// on every calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepaymentResult {
    /// Level monthly payment over the term.
    pub monthly_payment: Money,
    /// monthly_payment × (term_years × 12), for both repayment types.
    pub total_repayment: Money,
}

/// Raw form state exactly as the presentation layer holds it: four strings,
/// the amount possibly comma-grouped. Empty string means the field is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawLoanForm {
    pub amount: String,
    pub term: String,
    pub rate: String,
    #[serde(rename = "type")]
    pub repayment_type: String,
}

/// The four form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormField {
    Amount,
    Term,
    Rate,
    Type,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Amount => "amount",
            FormField::Term => "term",
            FormField::Rate => "rate",
            FormField::Type => "type",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation messages, keyed by field in display order.
/// Serializes to a JSON object (`{"amount": "This field is required", …}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors {
    pub fields: BTreeMap<FormField, String>,
}

impl FieldErrors {
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.fields.insert(field, message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.fields.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.fields.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Outcome of parsing one numeric form field.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedField {
    Valid(Decimal),
    Missing,
    /// Present but not a number. Unreachable through the original UI, which
    /// filters keystrokes; reachable via the CLI and bindings.
    Invalid(String),
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
