use crate::currency::format_currency;
use crate::scenario::DebtScenario;
#[cfg(feature = "serde")]
use serde::Serialize;
use std::fmt;

/// Headline figures for one scenario.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "camelCase"))]
pub struct ScenarioSummary {
    pub name: String,
    pub months: u32,
    pub years: f64,
    pub total_interest: f64,
    pub total_paid: f64,
    pub paid_off: bool,
}

impl ScenarioSummary {
    pub fn from_scenario(scenario: &DebtScenario) -> Self {
        Self {
            name: scenario.name.clone(),
            months: scenario.months,
            years: f64::from(scenario.months) / 12.,
            total_interest: scenario.total_interest,
            total_paid: scenario.total_paid,
            paid_off: scenario.is_paid_off(),
        }
    }
}

impl fmt::Display for ScenarioSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} months ({:.1} years), total interest {}, total paid {}",
            self.name,
            self.months,
            self.years,
            format_currency(self.total_interest),
            format_currency(self.total_paid)
        )?;
        if !self.paid_off {
            write!(f, " (not paid off within 50 years)")?;
        }
        Ok(())
    }
}

/// Interest avoided by choosing `other` over `baseline`.
pub fn interest_saved(baseline: &DebtScenario, other: &DebtScenario) -> f64 {
    baseline.total_interest - other.total_interest
}

#[cfg(test)]
mod tests {
    use super::{interest_saved, ScenarioSummary};
    use crate::scenario::{calculate_debt_scenarios, DebtInput};
    use test_log::test;

    #[test]
    fn test_summary_display() {
        let input = DebtInput::new(1200., 0., 2., 25., 100.);
        let scenarios = calculate_debt_scenarios(&input).unwrap();

        let summary = ScenarioSummary::from_scenario(&scenarios[2]);
        assert_eq!(summary.months, 12);
        assert_eq!(summary.years, 1.);
        assert!(summary.paid_off);
        assert_eq!(
            summary.to_string(),
            "Fixed Payment: 12 months (1.0 years), total interest $0.00, total paid $1,200.00"
        );
    }

    #[test]
    fn test_summary_not_paid_off() {
        let input = DebtInput::new(5000., 30., 1., 25., 50.);
        let scenarios = calculate_debt_scenarios(&input).unwrap();

        let summary = ScenarioSummary::from_scenario(&scenarios[0]);
        assert!(!summary.paid_off);
        assert_eq!(summary.years, 50.);
        assert!(summary
            .to_string()
            .ends_with("(not paid off within 50 years)"));
    }

    #[test]
    fn test_interest_saved() {
        let input = DebtInput::new(5000., 18.9, 2., 25., 200.);
        let scenarios = calculate_debt_scenarios(&input).unwrap();

        let first_min_saving = interest_saved(&scenarios[0], &scenarios[1]);
        assert!(first_min_saving > 0.);
        assert!(interest_saved(&scenarios[0], &scenarios[2]) > first_min_saving);
        assert_eq!(interest_saved(&scenarios[2], &scenarios[2]), 0.);
    }
}
