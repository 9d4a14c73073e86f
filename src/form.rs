//! Raw form input. Each field is parsed and bounds-checked on its own so the
//! caller gets a message naming the field, before the engine is invoked.

use crate::error::{Field, FormError};
use crate::scenario::{first_min_payment, DebtInput};
use log::debug;

/// The five fields as typed by the user.
#[derive(Clone, PartialEq, Debug)]
pub struct DebtForm {
    pub debt_amount: String,
    pub interest_rate: String,
    pub min_payment_percent: String,
    pub min_payment_amount: String,
    pub fixed_payment_amount: String,
}

impl Default for DebtForm {
    fn default() -> Self {
        Self {
            debt_amount: "5000".to_string(),
            interest_rate: "18.9".to_string(),
            min_payment_percent: "2".to_string(),
            min_payment_amount: "25".to_string(),
            fixed_payment_amount: "200".to_string(),
        }
    }
}

impl From<&DebtInput> for DebtForm {
    fn from(input: &DebtInput) -> Self {
        Self {
            debt_amount: input.debt_amount.to_string(),
            interest_rate: input.interest_rate.to_string(),
            min_payment_percent: input.min_payment_percent.to_string(),
            min_payment_amount: input.min_payment_amount.to_string(),
            fixed_payment_amount: input.fixed_payment_amount.to_string(),
        }
    }
}

impl DebtForm {
    pub fn parse(&self) -> Result<DebtInput, FormError> {
        let debt_amount = parse_field(&self.debt_amount, Field::DebtAmount, |v| v > 0.)?;
        let interest_rate = parse_field(&self.interest_rate, Field::InterestRate, |v| v >= 0.)?;
        let min_payment_percent =
            parse_field(&self.min_payment_percent, Field::MinPaymentPercent, |v| v > 0.)?;
        let min_payment_amount =
            parse_field(&self.min_payment_amount, Field::MinPaymentAmount, |v| v > 0.)?;
        let fixed_payment_amount =
            parse_field(&self.fixed_payment_amount, Field::FixedPaymentAmount, |v| v > 0.)?;

        let input = DebtInput::new(
            debt_amount,
            interest_rate,
            min_payment_percent,
            min_payment_amount,
            fixed_payment_amount,
        );

        let first = first_min_payment(&input);
        if fixed_payment_amount < first {
            return Err(FormError::new(
                Field::FixedPaymentAmount,
                format!(
                    "Fixed payment must be at least {:.2} (the first minimum payment)",
                    first
                ),
            ));
        }

        debug!("form parsed into {:?}", input);
        Ok(input)
    }
}

fn invalid_message(field: Field) -> &'static str {
    match field {
        Field::DebtAmount => "Please enter a valid debt amount greater than 0",
        Field::InterestRate => "Please enter a valid interest rate (0 or greater)",
        Field::MinPaymentPercent => {
            "Please enter a valid minimum payment percentage greater than 0"
        }
        Field::MinPaymentAmount => "Please enter a valid minimum payment amount greater than 0",
        Field::FixedPaymentAmount => "Please enter a valid fixed payment amount greater than 0",
    }
}

// NaN and infinities never pass `in_bounds`, parse failures share its message
fn parse_field(raw: &str, field: Field, in_bounds: impl Fn(f64) -> bool) -> Result<f64, FormError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && in_bounds(value) => Ok(value),
        _ => Err(FormError::new(field, invalid_message(field))),
    }
}

#[cfg(test)]
mod tests {
    use super::DebtForm;
    use crate::error::Field;
    use crate::scenario::DebtInput;
    use test_log::test;

    fn form_with(edit: impl FnOnce(&mut DebtForm)) -> DebtForm {
        let mut form = DebtForm::default();
        edit(&mut form);
        form
    }

    #[test]
    fn test_defaults_parse() {
        assert_eq!(
            DebtForm::default().parse(),
            Ok(DebtInput::new(5000., 18.9, 2., 25., 200.))
        );
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let form = form_with(|f| f.debt_amount = "  1200.50 ".to_string());
        assert_eq!(form.parse().unwrap().debt_amount, 1200.5);
    }

    #[test]
    fn test_zero_interest_allowed() {
        let form = form_with(|f| f.interest_rate = "0".to_string());
        assert_eq!(form.parse().unwrap().interest_rate, 0.);
    }

    #[test]
    fn test_field_errors() {
        let cases = [
            (form_with(|f| f.debt_amount = "abc".to_string()), Field::DebtAmount),
            (form_with(|f| f.debt_amount = "0".to_string()), Field::DebtAmount),
            (form_with(|f| f.debt_amount = "NaN".to_string()), Field::DebtAmount),
            (form_with(|f| f.interest_rate = "-1".to_string()), Field::InterestRate),
            (form_with(|f| f.interest_rate = String::new()), Field::InterestRate),
            (form_with(|f| f.min_payment_percent = "0".to_string()), Field::MinPaymentPercent),
            (form_with(|f| f.min_payment_amount = "-5".to_string()), Field::MinPaymentAmount),
            (form_with(|f| f.fixed_payment_amount = "inf".to_string()), Field::FixedPaymentAmount),
        ];

        for (form, field) in cases {
            assert_eq!(form.parse().unwrap_err().field, field);
        }
    }

    #[test]
    fn test_error_messages() {
        let form = form_with(|f| f.min_payment_amount = "x".to_string());
        assert_eq!(
            form.parse().unwrap_err().to_string(),
            "Please enter a valid minimum payment amount greater than 0"
        );
    }

    #[test]
    fn test_fixed_below_first_minimum() {
        let form = form_with(|f| f.fixed_payment_amount = "99.5".to_string());
        let err = form.parse().unwrap_err();
        assert_eq!(err.field, Field::FixedPaymentAmount);
        assert_eq!(
            err.to_string(),
            "Fixed payment must be at least 100.00 (the first minimum payment)"
        );
    }

    #[test]
    fn test_first_error_wins() {
        let form = form_with(|f| {
            f.interest_rate = "-3".to_string();
            f.fixed_payment_amount = "0".to_string();
        });
        assert_eq!(form.parse().unwrap_err().field, Field::InterestRate);
    }

    #[test]
    fn test_from_input() {
        let input = DebtInput::new(1200., 0., 2., 25., 100.);
        assert_eq!(DebtForm::from(&input).parse(), Ok(input));
    }
}
