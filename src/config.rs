//! JSON input files for the command line front end. Keys follow the
//! `DebtInput` record (`debtAmount`, `interestRate`, ...); any key left out
//! keeps the value already in the form.

use crate::form::DebtForm;
use log::info;
use serde::Deserialize;
use std::{fs::File, io::BufReader, io::Read, path::Path};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct InputFile {
    pub debt_amount: Option<f64>,
    pub interest_rate: Option<f64>,
    pub min_payment_percent: Option<f64>,
    pub min_payment_amount: Option<f64>,
    pub fixed_payment_amount: Option<f64>,
}

impl InputFile {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        info!("reading input file {}", path.display());
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Overwrites the form fields this file sets.
    pub fn apply(&self, form: &mut DebtForm) {
        let fields = [
            (self.debt_amount, &mut form.debt_amount),
            (self.interest_rate, &mut form.interest_rate),
            (self.min_payment_percent, &mut form.min_payment_percent),
            (self.min_payment_amount, &mut form.min_payment_amount),
            (self.fixed_payment_amount, &mut form.fixed_payment_amount),
        ];
        for (value, field) in fields {
            if let Some(value) = value {
                *field = value.to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, InputFile};
    use crate::form::DebtForm;
    use crate::scenario::DebtInput;
    use test_log::test;

    #[test]
    fn test_partial_file() {
        let file = InputFile::from_reader(r#"{ "debtAmount": 1200, "interestRate": 0 }"#.as_bytes())
            .unwrap();
        assert_eq!(file.debt_amount, Some(1200.));
        assert_eq!(file.fixed_payment_amount, None);

        let mut form = DebtForm::default();
        file.apply(&mut form);
        assert_eq!(form.parse(), Ok(DebtInput::new(1200., 0., 2., 25., 200.)));
    }

    #[test]
    fn test_full_file() {
        let json = r#"{
            "debtAmount": 5000,
            "interestRate": 18.9,
            "minPaymentPercent": 2,
            "minPaymentAmount": 25,
            "fixedPaymentAmount": 300
        }"#;
        let mut form = DebtForm::default();
        InputFile::from_reader(json.as_bytes()).unwrap().apply(&mut form);
        assert_eq!(form.parse().unwrap().fixed_payment_amount, 300.);
    }

    #[test]
    fn test_bad_files() {
        assert!(matches!(
            InputFile::from_reader("{ not json".as_bytes()),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            InputFile::from_reader(r#"{ "debt": 5 }"#.as_bytes()),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            InputFile::from_path(std::path::Path::new("/nonexistent/debt.json")),
            Err(ConfigError::Io(_))
        ));
    }
}
