/// Formats an amount as US dollars with two decimals and thousands
/// separators, e.g. `$1,234.56` or `-$5.50`.
pub fn format_currency(amount: f64) -> String {
    // whole cents, half away from zero
    let cents = (amount.abs() * 100.).round();
    let negative = amount < 0. && cents > 0.;

    let dollars = (cents / 100.).trunc() as u64;
    let cents = (cents % 100.) as u64;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!(
        "{}${}.{:02}",
        if negative { "-" } else { "" },
        grouped,
        cents
    )
}
