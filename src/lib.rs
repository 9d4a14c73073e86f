//! Credit card repayment projections.
//!
//! `calculate_debt_scenarios` simulates paying a card balance down three ways
//! (minimum payments, the first minimum payment held fixed, and a chosen fixed
//! payment) and returns the month-by-month plan and totals for each.

pub mod chart;
#[cfg(feature = "serde")]
pub mod config;
pub mod currency;
pub mod error;
pub mod form;
pub mod scenario;
pub mod summary;

pub use currency::format_currency;
pub use error::{Field, FormError, ValidationError};
pub use form::DebtForm;
pub use scenario::{calculate_debt_scenarios, DebtInput, DebtScenario, PaymentPlanEntry};
