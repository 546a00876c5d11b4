//! Bulk data operations: per-user clear, global clear, full app reset.

use clap::Subcommand;

use super::open_store;

#[derive(Subcommand)]
pub enum DataAction {
    /// Empty cycles and symptoms for one user
    Clear {
        /// User index (default: 0)
        #[arg(long, default_value = "0")]
        user: usize,
    },
    /// Empty cycles and symptoms for every user
    ClearAll,
    /// Discard all users and recreate the two defaults
    Reset,
}

pub fn run(action: DataAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        DataAction::Clear { user } => {
            let mut store = open_store(user)?;
            store.clear_current_user_data()?;
            println!("cleared data for user {user}");
        }
        DataAction::ClearAll => {
            let mut store = open_store(0)?;
            store.clear_all_data()?;
            println!("cleared data for all users");
        }
        DataAction::Reset => {
            let mut store = open_store(0)?;
            store.reset_app()?;
            println!("app reset: {} default users", store.users().len());
        }
    }
    Ok(())
}
