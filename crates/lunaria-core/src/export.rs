//! Data export: flat CSV table and structured JSON of the full user list.

use crate::error::Result;
use crate::model::User;

/// CSV column header.
const CSV_HEADER: &str = "user,date,kind,detail";

/// Export every user's records as a flat delimited table.
///
/// One row per cycle start, one per cycle end when recorded, one per
/// symptom. Dates are `YYYY-MM-DD`. Fields containing a delimiter, quote
/// or newline are double-quoted.
pub fn to_csv(users: &[User]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for user in users {
        for cycle in &user.cycles {
            push_row(
                &mut out,
                &user.name,
                &cycle.start_date.format("%Y-%m-%d").to_string(),
                "period_start",
                cycle.flow.tag(),
            );
            if let Some(end) = cycle.end_date {
                push_row(
                    &mut out,
                    &user.name,
                    &end.format("%Y-%m-%d").to_string(),
                    "period_end",
                    cycle.flow.tag(),
                );
            }
        }
        for symptom in &user.symptoms {
            push_row(
                &mut out,
                &user.name,
                &symptom.date.format("%Y-%m-%d").to_string(),
                "symptom",
                &format!("{} - severity:{}", symptom.kind.tag(), symptom.severity),
            );
        }
    }

    out
}

/// Export the full entity model as pretty-printed JSON.
pub fn to_json(users: &[User]) -> Result<String> {
    Ok(serde_json::to_string_pretty(users)?)
}

fn push_row(out: &mut String, user: &str, date: &str, kind: &str, detail: &str) {
    out.push_str(&escape(user));
    out.push(',');
    out.push_str(date);
    out.push(',');
    out.push_str(kind);
    out.push(',');
    out.push_str(&escape(detail));
    out.push('\n');
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FlowIntensity, MenstrualCycle, Symptom, SymptomKind};
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn sample_users() -> Vec<User> {
        let mut ada = User::new("Ada");
        ada.cycles.push(MenstrualCycle::new(
            d(2024, 1, 1),
            Some(d(2024, 1, 5)),
            FlowIntensity::Heavy,
            "",
        ));
        ada.cycles.push(MenstrualCycle::new(
            d(2024, 1, 29),
            None,
            FlowIntensity::Light,
            "",
        ));
        ada.symptoms
            .push(Symptom::new(d(2024, 1, 2), SymptomKind::Cramps, 3, ""));
        vec![ada, User::new("Beth")]
    }

    #[test]
    fn csv_has_one_row_per_event() {
        let csv = to_csv(&sample_users());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "user,date,kind,detail");
        // closed cycle start+end, open cycle start, one symptom
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "Ada,2024-01-01,period_start,heavy");
        assert_eq!(lines[2], "Ada,2024-01-05,period_end,heavy");
        assert_eq!(lines[3], "Ada,2024-01-29,period_start,light");
        assert_eq!(lines[4], "Ada,2024-01-02,symptom,cramps - severity:3");
    }

    #[test]
    fn csv_quotes_fields_containing_delimiters() {
        let mut user = User::new("Lovelace, Ada");
        user.cycles.push(MenstrualCycle::new(
            d(2024, 1, 1),
            None,
            FlowIntensity::Medium,
            "",
        ));
        let csv = to_csv(&[user]);
        assert!(csv.contains("\"Lovelace, Ada\",2024-01-01,period_start,medium"));
    }

    #[test]
    fn json_round_trips_the_entity_model() {
        let users = sample_users();
        let json = to_json(&users).unwrap();
        let decoded: Vec<User> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, users);
        // day-precision ISO dates in the payload
        assert!(json.contains("\"2024-01-01\""));
    }
}
