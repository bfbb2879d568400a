//! Curve command implementation.
//!
//! Shows the schedule points of the built curve.

use anyhow::Result;
use clap::Args;
use parswap_curves::CurvePoint;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::JobArgs;
use crate::output::{format_rate, format_tenor, print_rows};

/// Arguments for the curve command.
#[derive(Args, Debug)]
pub struct CurveArgs {
    #[command(flatten)]
    pub job: JobArgs,

    /// Only show points whose tenor is quoted
    #[arg(long)]
    pub quoted_only: bool,
}

#[derive(Tabled)]
struct CurveRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Tenor")]
    tenor: String,
    #[tabled(rename = "Swap Rate")]
    swap_rate: String,
    #[tabled(rename = "Discount Factor")]
    discount_factor: String,
    #[tabled(rename = "Zero Rate")]
    zero_rate: String,
}

impl From<&CurvePoint> for CurveRow {
    fn from(point: &CurvePoint) -> Self {
        Self {
            date: point.date.to_string(),
            tenor: format_tenor(point.tenor),
            swap_rate: format_rate(point.swap_rate),
            discount_factor: format!("{:.12}", point.discount_factor),
            zero_rate: format!("{:.6}%", point.zero_rate),
        }
    }
}

/// Execute the curve command.
pub fn execute(args: &CurveArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let inputs = args.job.load()?;
    let curve = &inputs.curve;

    let points: Vec<CurvePoint> = curve
        .pillars()
        .filter(|p| !args.quoted_only || curve.par_rates().contains(p.tenor))
        .collect();
    let rows: Vec<CurveRow> = points.iter().map(CurveRow::from).collect();

    let summary = points
        .last()
        .map(|p| p.discount_factor.to_string())
        .unwrap_or_default();

    let title = format!(
        "Par Swap Curve {} ({})",
        curve.settlement_date(),
        curve.calendar().name()
    );
    print_rows(&title, &rows, &points, &summary, format, quiet)
}
