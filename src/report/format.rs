//! Display formatting at the output boundary
//!
//! Values are rounded here only; the engine keeps full precision.

/// Format an amount as Brazilian reais: `R$ 1.234.567,89`
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "R$ -".to_string();
    }

    let cents = (value.abs() * 100.0).round() as u64;
    let units = cents / 100;
    let fraction = cents % 100;

    let digits = units.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, grouped, fraction)
}

/// Format a month count as "X years and Y months"; `None` means not reached
pub fn format_months(months: Option<u32>) -> String {
    match months {
        Some(m) => format!("{} and {}", plural(m / 12, "year"), plural(m % 12, "month")),
        None => "not reached".to_string(),
    }
}

fn plural(count: u32, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

/// Format a percentage with a fixed number of decimals: `42%`
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}
