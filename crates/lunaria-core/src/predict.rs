//! Prediction arithmetic over a user's recorded cycles.
//!
//! Pure functions of the user's history and configured lengths. Every
//! function returns `None` when the user has no recorded cycles; callers
//! render that as "no prediction available" rather than treating it as an
//! error. All arithmetic is on calendar days (`NaiveDate`), never on
//! wall-clock instants.

use chrono::{Days, NaiveDate};

use crate::model::User;

/// Days between the predicted next period start and ovulation (luteal
/// phase). Fixed offset, not configurable per user.
pub const LUTEAL_PHASE_DAYS: u64 = 14;

/// Start date of the most recent recorded cycle.
///
/// When several cycles share the maximal start date, the latest-inserted
/// record wins (`max_by_key` keeps the last maximal element).
pub fn last_period_start(user: &User) -> Option<NaiveDate> {
    user.cycles
        .iter()
        .max_by_key(|c| c.start_date)
        .map(|c| c.start_date)
}

/// Predicted start of the next period: last start + configured cycle length.
pub fn next_period_start(user: &User) -> Option<NaiveDate> {
    last_period_start(user)?.checked_add_days(Days::new(u64::from(user.cycle_length)))
}

/// Predicted ovulation date: next period start minus the luteal phase.
pub fn ovulation_date(user: &User) -> Option<NaiveDate> {
    next_period_start(user)?.checked_sub_days(Days::new(LUTEAL_PHASE_DAYS))
}

/// Position of `today` within the current predicted cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleProgress {
    /// Whole days elapsed since the last period start. Signed: negative
    /// when `today` precedes the last recorded start.
    pub days_since_start: i64,
    /// 1-based cycle day for display (`days_since_start + 1`).
    pub day: i64,
    /// Configured cycle length the fraction is relative to.
    pub cycle_length: u16,
    /// `days_since_start / cycle_length`, unclamped. Exceeds 1.0 when the
    /// user is overdue; the display layer clamps to [0, 1] for rendering.
    pub fraction: f64,
}

/// Cycle-day progress relative to the last recorded period start.
pub fn cycle_progress(user: &User, today: NaiveDate) -> Option<CycleProgress> {
    let last = last_period_start(user)?;
    let days_since_start = (today - last).num_days();
    Some(CycleProgress {
        days_since_start,
        day: days_since_start + 1,
        cycle_length: user.cycle_length,
        fraction: days_since_start as f64 / f64::from(user.cycle_length),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FlowIntensity, MenstrualCycle};
    use proptest::prelude::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn user_with_starts(starts: &[NaiveDate]) -> User {
        let mut user = User::new("Ada");
        for &start in starts {
            user.cycles
                .push(MenstrualCycle::new(start, None, FlowIntensity::Medium, ""));
        }
        user
    }

    #[test]
    fn no_cycles_means_no_predictions() {
        let user = User::new("Ada");
        assert_eq!(last_period_start(&user), None);
        assert_eq!(next_period_start(&user), None);
        assert_eq!(ovulation_date(&user), None);
        assert_eq!(cycle_progress(&user, d(2024, 1, 1)), None);
    }

    #[test]
    fn last_start_is_maximum_not_latest_inserted() {
        let user = user_with_starts(&[d(2024, 2, 1), d(2024, 1, 1), d(2024, 1, 15)]);
        assert_eq!(last_period_start(&user), Some(d(2024, 2, 1)));
    }

    #[test]
    fn equal_starts_tie_break_to_latest_inserted() {
        let mut user = user_with_starts(&[d(2024, 1, 1), d(2024, 1, 1)]);
        user.cycles[1].notes = "second".into();
        let winner = user
            .cycles
            .iter()
            .max_by_key(|c| c.start_date)
            .unwrap();
        assert_eq!(winner.notes, "second");
        assert_eq!(last_period_start(&user), Some(d(2024, 1, 1)));
    }

    #[test]
    fn reference_scenario_28_day_cycle() {
        let mut user = user_with_starts(&[d(2024, 1, 1)]);
        user.cycle_length = 28;
        user.period_length = 5;
        assert_eq!(next_period_start(&user), Some(d(2024, 1, 29)));
        assert_eq!(ovulation_date(&user), Some(d(2024, 1, 15)));
    }

    #[test]
    fn progress_is_unclamped_and_signed() {
        let mut user = user_with_starts(&[d(2024, 1, 1)]);
        user.cycle_length = 28;

        let overdue = cycle_progress(&user, d(2024, 2, 12)).unwrap();
        assert_eq!(overdue.days_since_start, 42);
        assert_eq!(overdue.day, 43);
        assert!(overdue.fraction > 1.0);

        let before = cycle_progress(&user, d(2023, 12, 31)).unwrap();
        assert_eq!(before.days_since_start, -1);
        assert!(before.fraction < 0.0);

        let start_day = cycle_progress(&user, d(2024, 1, 1)).unwrap();
        assert_eq!(start_day.day, 1);
        assert_eq!(start_day.fraction, 0.0);
    }

    proptest! {
        #[test]
        fn next_start_is_cycle_length_after_last(
            offsets in proptest::collection::vec(0i64..700, 1..8),
            cycle_length in 21u16..=35,
        ) {
            let base = d(2022, 6, 1);
            let starts: Vec<NaiveDate> = offsets
                .iter()
                .map(|&o| base + chrono::Duration::days(o))
                .collect();
            let mut user = user_with_starts(&starts);
            user.cycle_length = cycle_length;

            let last = last_period_start(&user).unwrap();
            prop_assert_eq!(last, *starts.iter().max().unwrap());
            let next = next_period_start(&user).unwrap();
            prop_assert_eq!((next - last).num_days(), i64::from(cycle_length));
            let ovu = ovulation_date(&user).unwrap();
            prop_assert_eq!((next - ovu).num_days(), 14);
        }
    }
}
