//! Status classification: which phase a calendar date falls into.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::User;
use crate::predict;

/// Half-width of the ovulation window in days (window is the predicted
/// date plus/minus this, inclusive).
pub const OVULATION_WINDOW_DAYS: u64 = 2;

/// Phase a given date is classified into for the selected user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleStatus {
    Period,
    Ovulation,
    Normal,
}

/// Classify `date` against the user's recorded cycles and predictions.
///
/// A cycle with no recorded end date is treated as running through
/// `start + period_length` days, inclusive. Period windows win over the
/// ovulation window when they overlap: any matching cycle returns
/// immediately, and cycles are scanned in insertion order without sorting.
pub fn classify(user: &User, date: NaiveDate) -> CycleStatus {
    for cycle in &user.cycles {
        let end = cycle.end_date.or_else(|| {
            cycle
                .start_date
                .checked_add_days(Days::new(u64::from(user.period_length)))
        });
        if let Some(end) = end {
            if date >= cycle.start_date && date <= end {
                return CycleStatus::Period;
            }
        }
    }

    if let Some(ovulation) = predict::ovulation_date(user) {
        let window_start = ovulation.checked_sub_days(Days::new(OVULATION_WINDOW_DAYS));
        let window_end = ovulation.checked_add_days(Days::new(OVULATION_WINDOW_DAYS));
        if let (Some(start), Some(end)) = (window_start, window_end) {
            if date >= start && date <= end {
                return CycleStatus::Ovulation;
            }
        }
    }

    CycleStatus::Normal
}
