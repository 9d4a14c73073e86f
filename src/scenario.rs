use crate::error::ValidationError;
use chrono::{Months, NaiveDate};
use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hard cap on simulated months (50 years). Inputs whose payments never
/// outrun the accruing interest stop here.
pub const MAX_MONTHS: u32 = 600;

/// A balance at or below this is treated as paid off.
pub const PAID_OFF_THRESHOLD: f64 = 0.01;

pub const MINIMUM_PAYMENTS: &str = "Minimum Payments";
pub const FIRST_MIN_PAYMENT: &str = "First Min Payment";
pub const FIXED_PAYMENT: &str = "Fixed Payment";

const MINIMUM_PAYMENTS_COLOR: &str = "#ea384c";
const FIRST_MIN_PAYMENT_COLOR: &str = "#FEF7CD";
const FIXED_PAYMENT_COLOR: &str = "#1EAEDB";

/// Credit card debt parameters for one calculation. Rates and percentages
/// are in percent, i.e. 18.9 for 18.9%.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct DebtInput {
    pub debt_amount: f64,
    pub interest_rate: f64,
    pub min_payment_percent: f64,
    pub min_payment_amount: f64,
    pub fixed_payment_amount: f64,
}

impl DebtInput {
    pub fn new(
        debt_amount: f64,
        interest_rate: f64,
        min_payment_percent: f64,
        min_payment_amount: f64,
        fixed_payment_amount: f64,
    ) -> Self {
        Self {
            debt_amount,
            interest_rate,
            min_payment_percent,
            min_payment_amount,
            fixed_payment_amount,
        }
    }
}

/// One simulated month of a payment plan.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct PaymentPlanEntry {
    pub month_number: u32,
    pub starting_balance: f64,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub ending_balance: f64,
}

impl PaymentPlanEntry {
    pub fn new(
        month_number: u32,
        starting_balance: f64,
        payment: f64,
        interest: f64,
        principal: f64,
        ending_balance: f64,
    ) -> Self {
        Self {
            month_number,
            starting_balance,
            payment,
            interest,
            principal,
            ending_balance,
        }
    }
}

impl fmt::Display for PaymentPlanEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            concat!(
                "month {}, starting balance ${:.2}, payment ${:.2}, interest ${:.2}, ",
                "principal ${:.2}, ending balance ${:.2}"
            ),
            self.month_number,
            self.starting_balance,
            self.payment,
            self.interest,
            self.principal,
            self.ending_balance
        )
    }
}

/// The full payment plan for one repayment strategy plus its totals.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct DebtScenario {
    pub name: String,
    pub color: String,
    pub payment_plan: Vec<PaymentPlanEntry>,
    pub total_paid: f64,
    pub total_interest: f64,
    pub months: u32,
}

impl DebtScenario {
    pub fn new(
        name: &str,
        color: &str,
        payment_plan: Vec<PaymentPlanEntry>,
        total_paid: f64,
        total_interest: f64,
    ) -> Self {
        let months = payment_plan.len() as u32;
        Self {
            name: name.to_string(),
            color: color.to_string(),
            payment_plan,
            total_paid,
            total_interest,
            months,
        }
    }

    /// Balance left after the last simulated month.
    pub fn final_balance(&self) -> f64 {
        self.payment_plan
            .last()
            .map(|entry| entry.ending_balance)
            .unwrap_or(0.)
    }

    /// `false` only when the plan ran into `MAX_MONTHS` with money still owed.
    pub fn is_paid_off(&self) -> bool {
        !(self.months >= MAX_MONTHS && self.final_balance() > PAID_OFF_THRESHOLD)
    }

    /// Plan entry for a 1-based month number.
    pub fn get_entry(&self, month_number: u32) -> Option<&PaymentPlanEntry> {
        if month_number == 0 {
            return None;
        }
        self.payment_plan.get(month_number as usize - 1)
    }

    /// Date of the final payment when the first payment is due one month
    /// after `start`. `None` if the debt is never paid off.
    pub fn payoff_date(&self, start: NaiveDate) -> Option<NaiveDate> {
        if !self.is_paid_off() {
            return None;
        }
        start.checked_add_months(Months::new(self.months))
    }
}

/// How the nominal monthly payment is chosen.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum PaymentRule {
    /// Percentage of the current balance, never below `floor`.
    Minimum { percent: f64, floor: f64 },
    /// The same amount every month.
    Fixed(f64),
}

impl PaymentRule {
    pub fn nominal_payment(&self, balance: f64) -> f64 {
        match *self {
            PaymentRule::Minimum { percent, floor } => (balance * (percent / 100.)).max(floor),
            PaymentRule::Fixed(amount) => amount,
        }
    }
}

/// Annual percentage rate spread evenly over 12 months.
pub fn monthly_interest_rate(input: &DebtInput) -> f64 {
    input.interest_rate / 100. / 12.
}

/// Minimum payment due on the original debt amount.
pub fn first_min_payment(input: &DebtInput) -> f64 {
    PaymentRule::Minimum {
        percent: input.min_payment_percent,
        floor: input.min_payment_amount,
    }
    .nominal_payment(input.debt_amount)
}

// finite and strictly above zero; NaN fails both
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.
}

/// Checks every precondition in order and hands the input back unchanged.
/// NaN and infinite fields are rejected with their field's error.
pub fn validate(input: &DebtInput) -> Result<DebtInput, ValidationError> {
    if !is_positive(input.debt_amount) {
        return Err(ValidationError::DebtAmount);
    }
    if !(input.interest_rate.is_finite() && input.interest_rate >= 0.) {
        return Err(ValidationError::InterestRate);
    }
    if !is_positive(input.min_payment_percent) {
        return Err(ValidationError::MinPaymentPercent);
    }
    if !is_positive(input.min_payment_amount) {
        return Err(ValidationError::MinPaymentAmount);
    }
    if !input.fixed_payment_amount.is_finite() {
        return Err(ValidationError::FixedPaymentAmount);
    }

    let first_min_payment = first_min_payment(input);
    if input.fixed_payment_amount < first_min_payment {
        return Err(ValidationError::FixedPaymentBelowMinimum {
            fixed_payment: input.fixed_payment_amount,
            first_min_payment,
        });
    }
    Ok(*input)
}

/// Runs the three repayment strategies: minimum payments, the first minimum
/// payment held fixed, and the caller's fixed payment, in that order.
pub fn calculate_debt_scenarios(input: &DebtInput) -> Result<[DebtScenario; 3], ValidationError> {
    let input = &validate(input)?;
    let first_min_payment = first_min_payment(input);
    debug!(
        "calculating scenarios for {:?}, first minimum payment {:.2}",
        input, first_min_payment
    );

    let minimum = PaymentRule::Minimum {
        percent: input.min_payment_percent,
        floor: input.min_payment_amount,
    };

    Ok([
        simulate(input, minimum, MINIMUM_PAYMENTS, MINIMUM_PAYMENTS_COLOR),
        simulate(
            input,
            PaymentRule::Fixed(first_min_payment),
            FIRST_MIN_PAYMENT,
            FIRST_MIN_PAYMENT_COLOR,
        ),
        simulate(
            input,
            PaymentRule::Fixed(input.fixed_payment_amount),
            FIXED_PAYMENT,
            FIXED_PAYMENT_COLOR,
        ),
    ])
}

// month-by-month simulation shared by every payment rule
fn simulate(input: &DebtInput, rule: PaymentRule, name: &str, color: &str) -> DebtScenario {
    let monthly_rate = monthly_interest_rate(input);

    let mut payment_plan: Vec<PaymentPlanEntry> = Vec::new();
    let mut balance = input.debt_amount; // outstanding balance at the start of the month
    let mut month_number = 1; // 1-based month counter
    let mut total_paid = 0.;
    let mut total_interest = 0.;

    while balance > PAID_OFF_THRESHOLD && month_number <= MAX_MONTHS {
        let interest = balance * monthly_rate;

        // the final month pays off what is owed and no more
        let payment = rule.nominal_payment(balance).min(balance + interest);
        let principal = payment - interest;
        let ending_balance = balance - principal;

        trace!(
            "{} month {}, interest {}, payment {}, end bal {}",
            name,
            month_number,
            interest,
            payment,
            ending_balance
        );

        payment_plan.push(PaymentPlanEntry::new(
            month_number,
            balance,
            payment,
            interest,
            principal,
            ending_balance,
        ));

        total_paid += payment;
        total_interest += interest;
        balance = ending_balance;
        month_number += 1;
    }

    if balance > PAID_OFF_THRESHOLD {
        debug!(
            "{} not paid off after {} months, balance {:.2}",
            name, MAX_MONTHS, balance
        );
    }

    DebtScenario::new(name, color, payment_plan, total_paid, total_interest)
}
