//! User profile commands.

use clap::Subcommand;
use lunaria_core::model::{is_valid_cycle_length, is_valid_period_length};

use super::open_store;

#[derive(Subcommand)]
pub enum UserAction {
    /// List all user profiles
    List,
    /// Show one profile with its records
    Show {
        /// User index (default: 0)
        #[arg(long, default_value = "0")]
        user: usize,
    },
    /// Add a new profile
    Add {
        /// Display name
        name: String,
    },
    /// Update a profile's name and configured lengths
    Settings {
        /// User index (default: 0)
        #[arg(long, default_value = "0")]
        user: usize,
        /// New display name
        #[arg(long)]
        name: String,
        /// Cycle length in days (21-35)
        #[arg(long)]
        cycle_length: u16,
        /// Period length in days (3-8)
        #[arg(long)]
        period_length: u16,
    },
}

pub fn run(action: UserAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        UserAction::List => {
            let store = open_store(0)?;
            for (index, user) in store.users().iter().enumerate() {
                println!(
                    "{index}: {} (cycle {}d, period {}d, {} cycles, {} symptoms)",
                    user.name,
                    user.cycle_length,
                    user.period_length,
                    user.cycles.len(),
                    user.symptoms.len()
                );
            }
        }
        UserAction::Show { user } => {
            let store = open_store(user)?;
            println!("{}", serde_json::to_string_pretty(&*store.current_user())?);
        }
        UserAction::Add { name } => {
            let mut store = open_store(0)?;
            let id = store.add_user(name)?;
            println!("User created: {id}");
        }
        UserAction::Settings {
            user,
            name,
            cycle_length,
            period_length,
        } => {
            if !is_valid_cycle_length(cycle_length) {
                return Err(format!("cycle length {cycle_length} outside 21-35 days").into());
            }
            if !is_valid_period_length(period_length) {
                return Err(format!("period length {period_length} outside 3-8 days").into());
            }
            let mut store = open_store(user)?;
            store.update_settings(name, cycle_length, period_length)?;
            println!("ok");
        }
    }
    Ok(())
}
