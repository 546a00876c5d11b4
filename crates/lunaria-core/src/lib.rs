//! # Lunaria Core Library
//!
//! Core business logic for Lunaria, a local menstrual-cycle tracker. The
//! CLI binary (and any GUI shell) is a thin layer over this library.
//!
//! ## Architecture
//!
//! - **Store**: single owner of the user list and current selection; every
//!   mutation persists the full list through a byte vault and then notifies
//!   observers
//! - **Predictor**: pure date arithmetic over recorded cycles (next period,
//!   ovulation, cycle-day progress)
//! - **Classifier**: period / ovulation / normal status for any calendar day
//! - **Storage**: JSON user vault plus TOML-based app configuration
//!
//! ## Key Components
//!
//! - [`CycleStore`]: mutation entry points and change notification
//! - [`classify`]: status classification for a date
//! - [`FileVault`] / [`AppConfig`]: on-disk persistence and settings
//! - [`plan_reminders`]: reminder plan for a notification backend

pub mod error;
pub mod export;
pub mod model;
pub mod predict;
pub mod reminders;
pub mod status;
pub mod storage;
pub mod store;

pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use model::{FlowIntensity, MenstrualCycle, Symptom, SymptomKind, User};
pub use predict::{cycle_progress, last_period_start, next_period_start, ovulation_date, CycleProgress};
pub use reminders::{plan_reminders, Reminder, ReminderKind};
pub use status::{classify, CycleStatus};
pub use storage::{AppConfig, FileVault, UserVault};
pub use store::{ChangeEvent, CycleStore};
