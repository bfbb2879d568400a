//! Output formatting utilities.

use colored::Colorize;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Prints a list result.
///
/// Tables show `rows`; JSON and CSV serialize `data`; minimal prints
/// `summary` alone.
pub fn print_rows<R: Tabled, S: Serialize>(
    title: &str,
    rows: &[R],
    data: &[S],
    summary: &str,
    format: OutputFormat,
    quiet: bool,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            if !quiet {
                print_header(title);
            }
            print_table(rows);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(data)?),
        OutputFormat::Csv => print_csv(data)?,
        OutputFormat::Minimal => println!("{summary}"),
    }
    Ok(())
}

/// Prints a single result.
///
/// Tables show `rows` as metric/value pairs; JSON and CSV serialize `data`;
/// minimal prints `summary` alone.
pub fn print_report<S: Serialize>(
    title: &str,
    rows: &[KeyValue],
    data: &S,
    summary: &str,
    format: OutputFormat,
    quiet: bool,
) -> anyhow::Result<()> {
    print_rows(title, rows, std::slice::from_ref(data), summary, format, quiet)
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) {
    if data.is_empty() {
        println!("No results.");
        return;
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{table}");
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Currency amount rounded to cents with thousands separators.
pub fn format_amount(value: f64) -> String {
    match Decimal::from_f64(value) {
        Some(amount) => group_thousands(&format!("{:.2}", amount.round_dp(2))),
        None => value.to_string(),
    }
}

/// Whole currency units, truncated toward zero.
pub fn format_whole(value: Option<Decimal>) -> String {
    value.map_or_else(|| "NaN".to_string(), |v| group_thousands(&v.to_string()))
}

fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Rate given as a fraction, shown in percent.
pub fn format_rate(fraction: f64) -> String {
    format!("{:.6}%", fraction * 100.0)
}

/// Tenor in years.
pub fn format_tenor(tenor: f64) -> String {
    format!("{tenor}Y")
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("-123456789.50"), "-123,456,789.50");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(-0.5), "-0.50");
    }

    #[test]
    fn test_format_rate_and_tenor() {
        assert_eq!(format_rate(0.019275), "1.927500%");
        assert_eq!(format_tenor(0.25), "0.25Y");
        assert_eq!(format_tenor(5.0), "5Y");
    }
}
