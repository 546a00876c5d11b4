//! Entity model: users, recorded cycles, and symptom records.
//!
//! These are plain data types shared by the store, the classifier, and the
//! predictor. The enums carry only their domain tag; display attributes
//! (labels, colors, symbols) live in the presentation layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default configured cycle length in days.
pub const DEFAULT_CYCLE_LENGTH: u16 = 28;
/// Default configured period length in days.
pub const DEFAULT_PERIOD_LENGTH: u16 = 5;

/// Menstrual flow intensity for a recorded cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowIntensity {
    Light,
    #[default]
    Medium,
    Heavy,
}

impl FlowIntensity {
    pub const ALL: [FlowIntensity; 3] = [
        FlowIntensity::Light,
        FlowIntensity::Medium,
        FlowIntensity::Heavy,
    ];

    /// Stable tag used in serialized data and export rows.
    pub fn tag(&self) -> &'static str {
        match self {
            FlowIntensity::Light => "light",
            FlowIntensity::Medium => "medium",
            FlowIntensity::Heavy => "heavy",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.tag() == tag)
    }
}

/// Symptom category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomKind {
    Cramps,
    Headache,
    MoodSwings,
    Bloating,
    Fatigue,
    Acne,
    BreastTenderness,
}

impl SymptomKind {
    pub const ALL: [SymptomKind; 7] = [
        SymptomKind::Cramps,
        SymptomKind::Headache,
        SymptomKind::MoodSwings,
        SymptomKind::Bloating,
        SymptomKind::Fatigue,
        SymptomKind::Acne,
        SymptomKind::BreastTenderness,
    ];

    /// Stable tag used in serialized data and export rows.
    pub fn tag(&self) -> &'static str {
        match self {
            SymptomKind::Cramps => "cramps",
            SymptomKind::Headache => "headache",
            SymptomKind::MoodSwings => "mood_swings",
            SymptomKind::Bloating => "bloating",
            SymptomKind::Fatigue => "fatigue",
            SymptomKind::Acne => "acne",
            SymptomKind::BreastTenderness => "breast_tenderness",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.tag() == tag)
    }
}

/// One recorded menstrual period instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenstrualCycle {
    pub id: Uuid,
    pub start_date: NaiveDate,
    /// Absent means ongoing or unspecified; the classifier substitutes a
    /// computed end (`start_date + period_length`).
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub flow: FlowIntensity,
    #[serde(default)]
    pub notes: String,
}

impl MenstrualCycle {
    pub fn new(
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        flow: FlowIntensity,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            start_date,
            end_date,
            flow,
            notes: notes.into(),
        }
    }

    /// Whole days between start and end; 0 when no end date is recorded.
    pub fn duration_days(&self) -> i64 {
        match self.end_date {
            Some(end) => (end - self.start_date).num_days(),
            None => 0,
        }
    }
}

/// One recorded symptom occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symptom {
    pub id: Uuid,
    pub date: NaiveDate,
    pub kind: SymptomKind,
    /// 1-5 by convention. The store does not clamp; out-of-range values
    /// supplied by a caller are kept verbatim.
    pub severity: u8,
    #[serde(default)]
    pub notes: String,
}

impl Symptom {
    pub fn new(date: NaiveDate, kind: SymptomKind, severity: u8, notes: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            kind,
            severity,
            notes: notes.into(),
        }
    }
}

/// A tracked profile: configured lengths plus owned cycle and symptom records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    #[serde(default = "default_cycle_length")]
    pub cycle_length: u16,
    #[serde(default = "default_period_length")]
    pub period_length: u16,
    #[serde(default)]
    pub cycles: Vec<MenstrualCycle>,
    #[serde(default)]
    pub symptoms: Vec<Symptom>,
}

fn default_cycle_length() -> u16 {
    DEFAULT_CYCLE_LENGTH
}

fn default_period_length() -> u16 {
    DEFAULT_PERIOD_LENGTH
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            cycle_length: DEFAULT_CYCLE_LENGTH,
            period_length: DEFAULT_PERIOD_LENGTH,
            cycles: Vec::new(),
            symptoms: Vec::new(),
        }
    }
}

// Advisory input-boundary predicates. The store accepts values outside
// these ranges; callers collecting input are expected to check first.

/// Configured cycle length within the commonly accepted 21-35 day range.
pub fn is_valid_cycle_length(days: u16) -> bool {
    (21..=35).contains(&days)
}

/// Configured period length within the commonly accepted 3-8 day range.
pub fn is_valid_period_length(days: u16) -> bool {
    (3..=8).contains(&days)
}

/// End date not before start date.
pub fn is_valid_date_range(start: NaiveDate, end: NaiveDate) -> bool {
    start <= end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn duration_is_zero_without_end_date() {
        let cycle = MenstrualCycle::new(d(2024, 1, 1), None, FlowIntensity::Medium, "");
        assert_eq!(cycle.duration_days(), 0);
    }

    #[test]
    fn duration_counts_whole_days() {
        let cycle = MenstrualCycle::new(
            d(2024, 1, 1),
            Some(d(2024, 1, 6)),
            FlowIntensity::Heavy,
            "",
        );
        assert_eq!(cycle.duration_days(), 5);
    }

    #[test]
    fn new_user_gets_default_lengths() {
        let user = User::new("Ada");
        assert_eq!(user.cycle_length, 28);
        assert_eq!(user.period_length, 5);
        assert!(user.cycles.is_empty());
        assert!(user.symptoms.is_empty());
    }

    #[test]
    fn validation_ranges() {
        assert!(is_valid_cycle_length(21));
        assert!(is_valid_cycle_length(35));
        assert!(!is_valid_cycle_length(20));
        assert!(!is_valid_cycle_length(36));

        assert!(is_valid_period_length(3));
        assert!(is_valid_period_length(8));
        assert!(!is_valid_period_length(2));
        assert!(!is_valid_period_length(9));

        assert!(is_valid_date_range(d(2024, 1, 1), d(2024, 1, 1)));
        assert!(!is_valid_date_range(d(2024, 1, 2), d(2024, 1, 1)));
    }

    #[test]
    fn enum_tags_round_trip() {
        for flow in FlowIntensity::ALL {
            assert_eq!(FlowIntensity::from_tag(flow.tag()), Some(flow));
        }
        for kind in SymptomKind::ALL {
            assert_eq!(SymptomKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(SymptomKind::from_tag("nausea"), None);
    }

    #[test]
    fn user_list_json_round_trip() {
        let mut user = User::new("Ada");
        user.cycles.push(MenstrualCycle::new(
            d(2024, 1, 1),
            Some(d(2024, 1, 5)),
            FlowIntensity::Light,
            "travel week",
        ));
        user.symptoms
            .push(Symptom::new(d(2024, 1, 2), SymptomKind::Cramps, 3, "mild"));
        let users = vec![user, User::new("Beth")];

        let bytes = serde_json::to_vec(&users).unwrap();
        let decoded: Vec<User> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, users);
    }
}
