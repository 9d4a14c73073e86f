use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use debt_danger::{
    calculate_debt_scenarios,
    chart::{balance_series, BalancePoint},
    config::InputFile,
    format_currency,
    summary::{interest_saved, ScenarioSummary},
    DebtForm, DebtScenario,
};
use log::{info, LevelFilter};
use serde::Serialize;
use simple_logger::SimpleLogger;
use std::{path::PathBuf, process::ExitCode};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Schedule {
    All,
    Minimum,
    FirstMin,
    Fixed,
}

impl Schedule {
    // positions in the scenario array
    fn indices(self) -> &'static [usize] {
        match self {
            Schedule::All => &[0, 1, 2],
            Schedule::Minimum => &[0],
            Schedule::FirstMin => &[1],
            Schedule::Fixed => &[2],
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "debt-danger",
    version,
    about = "Compare minimum payments against fixed payments on credit card debt"
)]
struct Cli {
    /// Current debt amount
    #[arg(long, allow_hyphen_values = true)]
    debt_amount: Option<String>,

    /// Annual interest rate (%)
    #[arg(long, allow_hyphen_values = true)]
    interest_rate: Option<String>,

    /// Minimum payment percentage (%)
    #[arg(long = "min-percent", allow_hyphen_values = true)]
    min_payment_percent: Option<String>,

    /// Minimum payment amount
    #[arg(long = "min-amount", allow_hyphen_values = true)]
    min_payment_amount: Option<String>,

    /// Fixed payment amount, at least the first minimum payment
    #[arg(long = "fixed-payment", allow_hyphen_values = true)]
    fixed_payment_amount: Option<String>,

    /// JSON file with any of the inputs (debtAmount, interestRate, ...)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Print the monthly schedule
    #[arg(long, value_enum)]
    schedule: Option<Schedule>,

    /// Print balances month by month for every scenario
    #[arg(long)]
    chart: bool,

    /// Show payoff dates, first payment one month after this date (YYYY-MM-DD)
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

impl Cli {
    // defaults, then the config file, then flags
    fn form(&self) -> Result<DebtForm> {
        let mut form = DebtForm::default();

        if let Some(path) = &self.config {
            InputFile::from_path(path)
                .with_context(|| format!("cannot read {}", path.display()))?
                .apply(&mut form);
        }

        let flags = [
            (&self.debt_amount, &mut form.debt_amount),
            (&self.interest_rate, &mut form.interest_rate),
            (&self.min_payment_percent, &mut form.min_payment_percent),
            (&self.min_payment_amount, &mut form.min_payment_amount),
            (&self.fixed_payment_amount, &mut form.fixed_payment_amount),
        ];
        for (flag, field) in flags {
            if let Some(value) = flag {
                field.clone_from(value);
            }
        }
        Ok(form)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    scenarios: &'a [DebtScenario],
    summaries: Vec<ScenarioSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    balances: Option<Vec<BalancePoint>>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = SimpleLogger::new()
        .with_level(cli.log_level.into())
        .init()
    {
        eprintln!("warning: logger not initialised: {}", err);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let input = cli.form()?.parse()?;
    info!("input {:?}", input);

    let scenarios = calculate_debt_scenarios(&input)?;

    if cli.json {
        let report = Report {
            scenarios: &scenarios,
            summaries: scenarios.iter().map(ScenarioSummary::from_scenario).collect(),
            balances: cli.chart.then(|| balance_series(&scenarios)),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    show_summary(&scenarios, cli.start_date);

    if cli.chart {
        println!();
        show_chart(&scenarios);
    }

    if let Some(schedule) = cli.schedule {
        for &i in schedule.indices() {
            println!();
            show_schedule(&scenarios[i]);
        }
    }
    Ok(())
}

fn show_summary(scenarios: &[DebtScenario], start_date: Option<NaiveDate>) {
    println!("Payment Plan Summary");
    for scenario in scenarios {
        println!("  {}", ScenarioSummary::from_scenario(scenario));
        if let Some(start) = start_date {
            match scenario.payoff_date(start) {
                Some(date) => println!("    paid off {}", date.format("%B %Y")),
                None => println!("    not paid off"),
            }
        }
    }

    if let [baseline, rest @ ..] = scenarios {
        for other in rest {
            println!(
                "  {} saves {} in interest over {}",
                other.name,
                format_currency(interest_saved(baseline, other)),
                baseline.name
            );
        }
    }
}

fn show_chart(scenarios: &[DebtScenario]) {
    print!("{:>6}", "Month");
    for scenario in scenarios {
        print!(" {:>18}", scenario.name);
    }
    println!();

    for point in balance_series(scenarios) {
        print!("{:>6}", point.month);
        for balance in &point.balances {
            print!(" {:>18}", format_currency(*balance));
        }
        println!();
    }
}

fn show_schedule(scenario: &DebtScenario) {
    println!("Payment Schedule: {}", scenario.name);
    println!(
        "{:>6} {:>16} {:>12} {:>12} {:>12} {:>16}",
        "Month", "Starting Balance", "Payment", "Interest", "Principal", "Ending Balance"
    );
    for entry in &scenario.payment_plan {
        println!(
            "{:>6} {:>16} {:>12} {:>12} {:>12} {:>16}",
            entry.month_number,
            format_currency(entry.starting_balance),
            format_currency(entry.payment),
            format_currency(entry.interest),
            format_currency(entry.principal),
            format_currency(entry.ending_balance)
        );
    }
}

// the engine's records must be shareable with a host that runs scenarios in parallel
#[cfg(test)]
fn is_normal<T: Sized + Send + Sync + Unpin>() {}

#[test]
fn normal_types() {
    is_normal::<DebtScenario>();
    is_normal::<debt_danger::DebtInput>();
    is_normal::<debt_danger::PaymentPlanEntry>();
}
