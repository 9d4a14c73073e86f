use std::fmt;
use thiserror::Error;

/// Reasons `calculate_debt_scenarios` refuses an input. Checked before any
/// simulation runs, so an error never comes with partial results.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValidationError {
    #[error("Debt amount must be greater than 0")]
    DebtAmount,

    #[error("Interest rate cannot be negative")]
    InterestRate,

    #[error("Minimum payment percentage must be greater than 0")]
    MinPaymentPercent,

    #[error("Minimum payment amount must be greater than 0")]
    MinPaymentAmount,

    #[error("Fixed payment amount must be a finite number")]
    FixedPaymentAmount,

    #[error("Fixed payment amount must be greater than or equal to first minimum payment")]
    FixedPaymentBelowMinimum { fixed_payment: f64, first_min_payment: f64 },
}

/// The five raw fields collected by the form layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    DebtAmount,
    InterestRate,
    MinPaymentPercent,
    MinPaymentAmount,
    FixedPaymentAmount,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::DebtAmount => "Current Debt Amount",
            Field::InterestRate => "Annual Interest Rate (%)",
            Field::MinPaymentPercent => "Minimum Payment Percentage (%)",
            Field::MinPaymentAmount => "Minimum Payment Amount",
            Field::FixedPaymentAmount => "Fixed Payment Amount",
        };
        write!(f, "{}", label)
    }
}

/// A form field that failed to parse or is out of bounds.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct FormError {
    pub field: Field,
    pub message: String,
}

impl FormError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
