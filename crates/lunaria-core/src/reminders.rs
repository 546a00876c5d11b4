//! Reminder planning from predicted dates.
//!
//! The planner is pure: it turns a user's predictions into reminder
//! records and leaves delivery to whatever notification backend the
//! platform provides. Each reminder id is unique per user and kind, so a
//! backend that schedules by id replaces stale entries instead of
//! stacking duplicates.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::User;
use crate::predict;

/// Kind of local reminder derived from predictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    /// Fires one day before the predicted period start.
    PeriodSoon,
    /// Fires on the predicted ovulation date.
    Ovulation,
}

/// One planned local reminder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    /// Stable per-user, per-kind identifier.
    pub id: String,
    pub user_id: Uuid,
    pub kind: ReminderKind,
    pub trigger_date: NaiveDate,
    pub title: String,
    pub body: String,
}

/// Plan the reminders for a user. Users with no recorded cycles have no
/// predictions and yield an empty plan.
pub fn plan_reminders(user: &User) -> Vec<Reminder> {
    let mut plan = Vec::with_capacity(2);

    if let Some(trigger) = predict::next_period_start(user)
        .and_then(|next| next.checked_sub_days(Days::new(1)))
    {
        plan.push(Reminder {
            id: format!("period_reminder_{}", user.id),
            user_id: user.id,
            kind: ReminderKind::PeriodSoon,
            trigger_date: trigger,
            title: "Period reminder".to_string(),
            body: format!("{}, your period is expected to start soon", user.name),
        });
    }

    if let Some(trigger) = predict::ovulation_date(user) {
        plan.push(Reminder {
            id: format!("ovulation_reminder_{}", user.id),
            user_id: user.id,
            kind: ReminderKind::Ovulation,
            trigger_date: trigger,
            title: "Ovulation reminder".to_string(),
            body: format!("{}, you are in your ovulation window", user.name),
        });
    }

    plan
}
