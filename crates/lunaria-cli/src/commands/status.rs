//! Status and prediction display for the selected user.

use clap::Args;
use lunaria_core::{classify, predict};
use serde::Serialize;

use super::{open_store, parse_date};
use crate::display;

#[derive(Args)]
pub struct StatusArgs {
    /// Date to classify (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub date: Option<String>,
    /// User index (default: 0)
    #[arg(long, default_value = "0")]
    pub user: usize,
    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct StatusReport {
    user: String,
    date: chrono::NaiveDate,
    status: lunaria_core::CycleStatus,
    last_period_start: Option<chrono::NaiveDate>,
    next_period_start: Option<chrono::NaiveDate>,
    ovulation_date: Option<chrono::NaiveDate>,
    cycle_day: Option<i64>,
    cycle_length: u16,
    /// Raw fraction; can be negative or above 1 when off-cycle.
    progress: Option<f64>,
}

pub fn run(args: StatusArgs) -> Result<(), Box<dyn std::error::Error>> {
    let date = match args.date {
        Some(s) => parse_date(&s)?,
        None => chrono::Local::now().date_naive(),
    };

    let store = open_store(args.user)?;
    let user = store.current_user();

    let progress = predict::cycle_progress(&user, date);
    let report = StatusReport {
        user: user.name.clone(),
        date,
        status: classify(&user, date),
        last_period_start: predict::last_period_start(&user),
        next_period_start: predict::next_period_start(&user),
        ovulation_date: predict::ovulation_date(&user),
        cycle_day: progress.map(|p| p.day),
        cycle_length: user.cycle_length,
        progress: progress.map(|p| p.fraction),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} on {}", report.user, report.date);
    println!("status: {}", display::status_label(report.status));
    if let Some(p) = progress {
        let pct = (display::clamp_fraction(p.fraction) * 100.0).round();
        println!("cycle day {} of {} ({pct}%)", p.day, p.cycle_length);
    }
    match (report.next_period_start, report.ovulation_date) {
        (Some(next), Some(ovulation)) => {
            println!("next period: {next}");
            println!("ovulation: {ovulation}");
        }
        _ => println!("no predictions yet (no cycles recorded)"),
    }
    Ok(())
}
