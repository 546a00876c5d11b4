//! Data export commands.

use clap::Subcommand;
use lunaria_core::export;

use super::open_store;

#[derive(Subcommand)]
pub enum ExportAction {
    /// Export all users as a flat CSV table
    Csv {
        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<String>,
    },
    /// Export all users as structured JSON
    Json {
        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<String>,
    },
}

pub fn run(action: ExportAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(0)?;
    let (content, output) = match action {
        ExportAction::Csv { output } => (export::to_csv(store.users()), output),
        ExportAction::Json { output } => (export::to_json(store.users())?, output),
    };

    match output {
        Some(path) => {
            std::fs::write(&path, content)?;
            println!("exported to {path}");
        }
        None => {
            print!("{content}");
            if !content.ends_with('\n') {
                println!();
            }
        }
    }
    Ok(())
}
