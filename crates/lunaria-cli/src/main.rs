use clap::{Parser, Subcommand};

mod commands;
mod display;

#[derive(Parser)]
#[command(name = "lunaria-cli", version, about = "Lunaria CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// User profile management
    User {
        #[command(subcommand)]
        action: commands::user::UserAction,
    },
    /// Cycle records
    Cycle {
        #[command(subcommand)]
        action: commands::cycle::CycleAction,
    },
    /// Symptom records
    Symptom {
        #[command(subcommand)]
        action: commands::symptom::SymptomAction,
    },
    /// Cycle status and predictions
    Status(commands::status::StatusArgs),
    /// Data export
    Export {
        #[command(subcommand)]
        action: commands::export::ExportAction,
    },
    /// Reminder planning
    Remind {
        #[command(subcommand)]
        action: commands::remind::RemindAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Bulk data operations
    Data {
        #[command(subcommand)]
        action: commands::data::DataAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::User { action } => commands::user::run(action),
        Commands::Cycle { action } => commands::cycle::run(action),
        Commands::Symptom { action } => commands::symptom::run(action),
        Commands::Status(args) => commands::status::run(args),
        Commands::Export { action } => commands::export::run(action),
        Commands::Remind { action } => commands::remind::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Data { action } => commands::data::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
