//! Text formatting utilities for the ouvrage viewer.
//!
//! Money and quantity formatting for the line table, plus process memory
//! readout for the status bar.

use sysinfo::{Pid, ProcessRefreshKind, RefreshKind, System};

/// Formats a monetary amount with thousands separators and a currency code.
///
/// # Examples
/// ```
/// assert_eq!(format_money(1234.5, "EUR"), "1,234.50 EUR");
/// assert_eq!(format_money(-80.0, "EUR"), "-80.00 EUR");
/// ```
pub fn format_money(amount: f64, currency: &str) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    let chars: Vec<char> = digits.chars().collect();
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{frac:02} {currency}")
}

/// Formats a quantity, dropping the fraction when it is whole.
pub fn format_quantity(qty: f64) -> String {
    if (qty - qty.round()).abs() < 1e-9 {
        format!("{}", qty.round() as i64)
    } else {
        format!("{qty:.2}")
    }
}

/// Formats a percentage with one decimal.
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.1} %")
}

/// Gets the current process memory usage in megabytes.
///
/// Returns 0.0 if the process information cannot be retrieved.
pub fn get_current_memory_mb() -> f64 {
    let mut sys = System::new_with_specifics(
        RefreshKind::new().with_processes(ProcessRefreshKind::new().with_memory()),
    );
    sys.refresh_processes_specifics(ProcessRefreshKind::new().with_memory());

    if let Some(process) = sys.process(Pid::from_u32(std::process::id())) {
        process.memory() as f64 / (1024.0 * 1024.0)
    } else {
        0.0
    }
}

/// Formats memory usage in MB as a human-readable string.
pub fn format_memory_mb(memory_mb: f64) -> String {
    if memory_mb > 1024.0 {
        format!("Memory: {:.2} GB", memory_mb / 1024.0)
    } else {
        format!("Memory: {:.1} MB", memory_mb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(format_money(0.0, "EUR"), "0.00 EUR");
        assert_eq!(format_money(1234567.891, "EUR"), "1,234,567.89 EUR");
        assert_eq!(format_money(-1234.5, "USD"), "-1,234.50 USD");
    }

    #[test]
    fn quantity_drops_whole_fraction() {
        assert_eq!(format_quantity(3.0), "3");
        assert_eq!(format_quantity(2.5), "2.50");
    }

    #[test]
    fn percent_one_decimal() {
        assert_eq!(format_percent(36.0), "36.0 %");
        assert_eq!(format_percent(-5.25), "-5.2 %");
    }

    #[test]
    fn memory_format_switches_units() {
        assert_eq!(format_memory_mb(512.5), "Memory: 512.5 MB");
        assert_eq!(format_memory_mb(2048.0), "Memory: 2.00 GB");
    }
}
