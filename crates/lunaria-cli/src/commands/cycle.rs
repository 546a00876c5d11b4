//! Cycle record commands.

use clap::Subcommand;
use lunaria_core::model::{is_valid_date_range, FlowIntensity};
use uuid::Uuid;

use super::{open_store, parse_date};

#[derive(Subcommand)]
pub enum CycleAction {
    /// Record a new cycle
    Add {
        /// Start date (YYYY-MM-DD)
        start: String,
        /// End date (YYYY-MM-DD); omit while the period is ongoing
        #[arg(long)]
        end: Option<String>,
        /// Flow intensity: light, medium or heavy (default: medium)
        #[arg(long, default_value = "medium")]
        flow: String,
        /// Free-text notes
        #[arg(long, default_value = "")]
        notes: String,
        /// User index (default: 0)
        #[arg(long, default_value = "0")]
        user: usize,
    },
    /// List recorded cycles
    List {
        /// User index (default: 0)
        #[arg(long, default_value = "0")]
        user: usize,
    },
    /// Delete a cycle by id
    Delete {
        /// Cycle ID
        id: String,
        /// User index (default: 0)
        #[arg(long, default_value = "0")]
        user: usize,
    },
}

pub fn run(action: CycleAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CycleAction::Add {
            start,
            end,
            flow,
            notes,
            user,
        } => {
            let start = parse_date(&start)?;
            let end = end.as_deref().map(parse_date).transpose()?;
            if let Some(end) = end {
                if !is_valid_date_range(start, end) {
                    return Err("end date is before start date".into());
                }
            }
            let flow = FlowIntensity::from_tag(&flow)
                .ok_or_else(|| format!("unknown flow intensity '{flow}'"))?;

            let mut store = open_store(user)?;
            let id = store.add_cycle(start, end, flow, notes)?;
            println!("Cycle recorded: {id}");
        }
        CycleAction::List { user } => {
            let store = open_store(user)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&store.current_user().cycles)?
            );
        }
        CycleAction::Delete { id, user } => {
            let id = Uuid::parse_str(&id)?;
            let mut store = open_store(user)?;
            store.delete_cycle(id)?;
            println!("ok");
        }
    }
    Ok(())
}
