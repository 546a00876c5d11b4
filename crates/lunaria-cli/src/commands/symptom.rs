//! Symptom record commands.

use clap::Subcommand;
use lunaria_core::model::SymptomKind;
use uuid::Uuid;

use super::{open_store, parse_date};

#[derive(Subcommand)]
pub enum SymptomAction {
    /// Record a symptom
    Add {
        /// Date (YYYY-MM-DD)
        date: String,
        /// Symptom kind: cramps, headache, mood_swings, bloating,
        /// fatigue, acne or breast_tenderness
        kind: String,
        /// Severity 1-5
        #[arg(long, default_value = "3")]
        severity: u8,
        /// Free-text notes
        #[arg(long, default_value = "")]
        notes: String,
        /// User index (default: 0)
        #[arg(long, default_value = "0")]
        user: usize,
    },
    /// List recorded symptoms
    List {
        /// User index (default: 0)
        #[arg(long, default_value = "0")]
        user: usize,
    },
    /// Delete a symptom by id
    Delete {
        /// Symptom ID
        id: String,
        /// User index (default: 0)
        #[arg(long, default_value = "0")]
        user: usize,
    },
}

pub fn run(action: SymptomAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SymptomAction::Add {
            date,
            kind,
            severity,
            notes,
            user,
        } => {
            let date = parse_date(&date)?;
            let kind = SymptomKind::from_tag(&kind)
                .ok_or_else(|| format!("unknown symptom kind '{kind}'"))?;
            if !(1..=5).contains(&severity) {
                return Err(format!("severity {severity} outside 1-5").into());
            }

            let mut store = open_store(user)?;
            let id = store.add_symptom(date, kind, severity, notes)?;
            println!("Symptom recorded: {id}");
        }
        SymptomAction::List { user } => {
            let store = open_store(user)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&store.current_user().symptoms)?
            );
        }
        SymptomAction::Delete { id, user } => {
            let id = Uuid::parse_str(&id)?;
            let mut store = open_store(user)?;
            store.delete_symptom(id)?;
            println!("ok");
        }
    }
    Ok(())
}
