use crate::scenario::DebtScenario;
#[cfg(feature = "serde")]
use serde::Serialize;

/// Outstanding balance of every scenario at the end of one month.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BalancePoint {
    pub month: u32,
    /// One balance per scenario, in the order the scenarios were given.
    pub balances: Vec<f64>,
}

/// Lines up the scenarios month by month for plotting. Month 0 holds the
/// opening balance and scenarios that are already paid off read 0.
pub fn balance_series(scenarios: &[DebtScenario]) -> Vec<BalancePoint> {
    let max_months = match scenarios.iter().map(|s| s.payment_plan.len()).max() {
        Some(months) => months,
        None => return Vec::new(),
    };

    (0..=max_months)
        .map(|month| BalancePoint {
            month: month as u32,
            balances: scenarios
                .iter()
                .map(|scenario| balance_at(scenario, month))
                .collect(),
        })
        .collect()
}

fn balance_at(scenario: &DebtScenario, month: usize) -> f64 {
    let plan = &scenario.payment_plan;
    if month == 0 {
        plan.first().map(|entry| entry.starting_balance).unwrap_or(0.)
    } else {
        plan.get(month - 1)
            .map(|entry| entry.ending_balance)
            .unwrap_or(0.)
    }
}

#[cfg(test)]
mod tests {
    use super::balance_series;
    use crate::scenario::{calculate_debt_scenarios, DebtInput, DebtScenario};
    use test_log::test;

    #[test]
    fn test_empty() {
        assert!(balance_series(&[]).is_empty());
    }

    #[test]
    fn test_series_pads_paid_off_scenarios() {
        let input = DebtInput::new(1200., 0., 2., 25., 100.);
        let scenarios = calculate_debt_scenarios(&input).unwrap();
        let series = balance_series(&scenarios);

        let longest = scenarios.iter().map(|s| s.months).max().unwrap();
        assert_eq!(series.len(), longest as usize + 1);

        assert_eq!(series[0].month, 0);
        assert_eq!(series[0].balances, vec![1200., 1200., 1200.]);

        // the fixed 100/month plan is done after 12 months
        assert_eq!(series[1].balances[2], 1100.);
        assert_eq!(series[12].balances[2], 0.);
        assert_eq!(series[13].balances[2], 0.);
        assert_eq!(series.last().unwrap().balances[0], scenarios[0].final_balance());
    }

    #[test]
    fn test_empty_plan_reads_zero() {
        let empty = DebtScenario::new("Empty", "#000000", Vec::new(), 0., 0.);
        let series = balance_series(&[empty]);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].balances, vec![0.]);
    }
}
