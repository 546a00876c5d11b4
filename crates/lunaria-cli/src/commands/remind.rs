//! Reminder planning commands.
//!
//! The CLI only prints the plan; delivering it is the job of whatever
//! notification backend the platform provides.

use clap::Subcommand;
use lunaria_core::reminders::plan_reminders;
use lunaria_core::storage::AppConfig;

use super::open_store;

#[derive(Subcommand)]
pub enum RemindAction {
    /// Show the reminder plan for a user
    Plan {
        /// User index (default: 0)
        #[arg(long, default_value = "0")]
        user: usize,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: RemindAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        RemindAction::Plan { user, json } => {
            let store = open_store(user)?;
            let plan = plan_reminders(&store.current_user());

            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
                return Ok(());
            }

            let config = AppConfig::load_or_default();
            if !config.notifications.enabled {
                println!("note: notifications are disabled (notifications.enabled = false)");
            }
            if plan.is_empty() {
                println!("no reminders planned (no cycles recorded)");
            }
            for reminder in plan {
                println!("{}  {}  {}", reminder.trigger_date, reminder.id, reminder.body);
            }
        }
    }
    Ok(())
}
