//! Cycle store: single source of truth for the user list and the current
//! selection.
//!
//! Every mutation runs to completion on the caller's thread: apply the
//! change in memory, persist the full user list through the vault, then
//! notify observers. A failed persist is reported to the caller (the
//! in-memory change stays applied so the save can be retried); observers
//! are only notified after a successful persist.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, ValidationError};
use crate::model::{FlowIntensity, MenstrualCycle, Symptom, SymptomKind, User};
use crate::storage::UserVault;

/// Names given to the users seeded on first launch and by [`CycleStore::reset_app`].
pub const DEFAULT_USER_NAMES: [&str; 2] = ["User 1", "User 2"];

/// Name of the placeholder returned when the selection is out of range.
pub const PLACEHOLDER_USER_NAME: &str = "Guest";

/// Emitted to observers after each successful mutation+persist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ChangeEvent {
    UserAdded {
        user_id: Uuid,
        at: DateTime<Utc>,
    },
    UserSelected {
        index: usize,
        at: DateTime<Utc>,
    },
    CycleAdded {
        user_id: Uuid,
        cycle_id: Uuid,
        at: DateTime<Utc>,
    },
    CycleDeleted {
        user_id: Uuid,
        cycle_id: Uuid,
        at: DateTime<Utc>,
    },
    SymptomAdded {
        user_id: Uuid,
        symptom_id: Uuid,
        at: DateTime<Utc>,
    },
    SymptomDeleted {
        user_id: Uuid,
        symptom_id: Uuid,
        at: DateTime<Utc>,
    },
    SettingsUpdated {
        user_id: Uuid,
        at: DateTime<Utc>,
    },
    UserDataCleared {
        user_id: Uuid,
        at: DateTime<Utc>,
    },
    AllDataCleared {
        at: DateTime<Utc>,
    },
    AppReset {
        at: DateTime<Utc>,
    },
}

/// Change-notification callback. Decoupled from any rendering technology;
/// a GUI registers one to refresh views, a scheduler to replan reminders.
pub type Observer = Box<dyn Fn(&ChangeEvent)>;

/// Owner of the user list and the selected index. All mutations go
/// through here; collaborators never touch the list directly.
pub struct CycleStore<V: UserVault> {
    users: Vec<User>,
    selected: usize,
    vault: V,
    observers: Vec<Observer>,
}

impl<V: UserVault> CycleStore<V> {
    /// Load the user list from the vault, seeding the two default users
    /// when nothing is stored yet.
    ///
    /// # Errors
    /// Returns an error when the vault cannot be read, the stored payload
    /// cannot be decoded, or the seeded defaults cannot be written back.
    pub fn open(vault: V) -> Result<Self> {
        let users = match vault.load()? {
            Some(bytes) => serde_json::from_slice(&bytes)?,
            None => Vec::new(),
        };
        let mut store = Self {
            users,
            selected: 0,
            vault,
            observers: Vec::new(),
        };
        if store.users.is_empty() {
            store.users = DEFAULT_USER_NAMES.iter().copied().map(User::new).collect();
            store.persist()?;
        }
        Ok(store)
    }

    /// Register a change observer. Observers fire after each successful
    /// mutation+persist, in registration order.
    pub fn subscribe(&mut self, observer: Observer) {
        self.observers.push(observer);
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The selected user, or a placeholder when the selection is out of
    /// range. The read path never panics.
    pub fn current_user(&self) -> Cow<'_, User> {
        match self.users.get(self.selected) {
            Some(user) => Cow::Borrowed(user),
            None => Cow::Owned(User::new(PLACEHOLDER_USER_NAME)),
        }
    }

    /// Select a user by index. In-memory only; the selection is session
    /// state and is not persisted.
    ///
    /// # Errors
    /// Returns [`ValidationError::OutOfBounds`] for an out-of-range index.
    pub fn select_user(&mut self, index: usize) -> Result<()> {
        if index >= self.users.len() {
            return Err(self.out_of_bounds(index).into());
        }
        self.selected = index;
        self.notify(&ChangeEvent::UserSelected {
            index,
            at: Utc::now(),
        });
        Ok(())
    }

    /// Append a new user with default lengths and persist.
    pub fn add_user(&mut self, name: impl Into<String>) -> Result<Uuid> {
        let user = User::new(name);
        let user_id = user.id;
        self.users.push(user);
        self.persist()?;
        self.notify(&ChangeEvent::UserAdded {
            user_id,
            at: Utc::now(),
        });
        Ok(user_id)
    }

    /// Record a new cycle for the selected user and persist.
    ///
    /// The record is accepted as-is: no overlap or de-duplication check,
    /// and no `end >= start` enforcement (input boundaries validate with
    /// [`crate::model::is_valid_date_range`] before calling).
    pub fn add_cycle(
        &mut self,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        flow: FlowIntensity,
        notes: impl Into<String>,
    ) -> Result<Uuid> {
        let cycle = MenstrualCycle::new(start_date, end_date, flow, notes);
        let cycle_id = cycle.id;
        let user = self.selected_mut()?;
        let user_id = user.id;
        user.cycles.push(cycle);
        self.persist()?;
        self.notify(&ChangeEvent::CycleAdded {
            user_id,
            cycle_id,
            at: Utc::now(),
        });
        Ok(cycle_id)
    }

    /// Record a new symptom for the selected user and persist.
    ///
    /// Severity is stored exactly as provided; range discipline (1-5) is
    /// an input-boundary contract, not enforced here.
    pub fn add_symptom(
        &mut self,
        date: NaiveDate,
        kind: SymptomKind,
        severity: u8,
        notes: impl Into<String>,
    ) -> Result<Uuid> {
        let symptom = Symptom::new(date, kind, severity, notes);
        let symptom_id = symptom.id;
        let user = self.selected_mut()?;
        let user_id = user.id;
        user.symptoms.push(symptom);
        self.persist()?;
        self.notify(&ChangeEvent::SymptomAdded {
            user_id,
            symptom_id,
            at: Utc::now(),
        });
        Ok(symptom_id)
    }

    /// Delete a cycle of the selected user by id. Unknown ids are a
    /// no-op, not an error.
    pub fn delete_cycle(&mut self, cycle_id: Uuid) -> Result<()> {
        let user = self.selected_mut()?;
        let user_id = user.id;
        user.cycles.retain(|c| c.id != cycle_id);
        self.persist()?;
        self.notify(&ChangeEvent::CycleDeleted {
            user_id,
            cycle_id,
            at: Utc::now(),
        });
        Ok(())
    }

    /// Delete a symptom of the selected user by id. Unknown ids are a
    /// no-op, not an error.
    pub fn delete_symptom(&mut self, symptom_id: Uuid) -> Result<()> {
        let user = self.selected_mut()?;
        let user_id = user.id;
        user.symptoms.retain(|s| s.id != symptom_id);
        self.persist()?;
        self.notify(&ChangeEvent::SymptomDeleted {
            user_id,
            symptom_id,
            at: Utc::now(),
        });
        Ok(())
    }

    /// Replace the selected user's name and configured lengths, persist.
    /// The 21-35 / 3-8 ranges are advisory; values outside them are kept.
    pub fn update_settings(
        &mut self,
        name: impl Into<String>,
        cycle_length: u16,
        period_length: u16,
    ) -> Result<()> {
        let user = self.selected_mut()?;
        let user_id = user.id;
        user.name = name.into();
        user.cycle_length = cycle_length;
        user.period_length = period_length;
        self.persist()?;
        self.notify(&ChangeEvent::SettingsUpdated {
            user_id,
            at: Utc::now(),
        });
        Ok(())
    }

    /// Empty cycles and symptoms for the selected user only. Idempotent.
    pub fn clear_current_user_data(&mut self) -> Result<()> {
        let user = self.selected_mut()?;
        let user_id = user.id;
        user.cycles.clear();
        user.symptoms.clear();
        self.persist()?;
        self.notify(&ChangeEvent::UserDataCleared {
            user_id,
            at: Utc::now(),
        });
        Ok(())
    }

    /// Empty cycles and symptoms for every user.
    pub fn clear_all_data(&mut self) -> Result<()> {
        for user in &mut self.users {
            user.cycles.clear();
            user.symptoms.clear();
        }
        self.persist()?;
        self.notify(&ChangeEvent::AllDataCleared { at: Utc::now() });
        Ok(())
    }

    /// Discard all users, recreate exactly the two defaults, reset the
    /// selection to 0.
    pub fn reset_app(&mut self) -> Result<()> {
        self.users = DEFAULT_USER_NAMES.iter().copied().map(User::new).collect();
        self.selected = 0;
        self.persist()?;
        self.notify(&ChangeEvent::AppReset { at: Utc::now() });
        Ok(())
    }

    fn selected_mut(&mut self) -> Result<&mut User, ValidationError> {
        let len = self.users.len();
        let index = self.selected;
        self.users
            .get_mut(index)
            .ok_or(ValidationError::OutOfBounds {
                collection: "users".to_string(),
                index,
                len,
            })
    }

    fn out_of_bounds(&self, index: usize) -> ValidationError {
        ValidationError::OutOfBounds {
            collection: "users".to_string(),
            index,
            len: self.users.len(),
        }
    }

    fn persist(&self) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(&self.users)?;
        self.vault.save(&bytes)?;
        Ok(())
    }

    fn notify(&self, event: &ChangeEvent) {
        for observer in &self.observers {
            observer(event);
        }
    }
}

impl<V: UserVault> std::fmt::Debug for CycleStore<V>
where
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CycleStore")
            .field("users", &self.users.len())
            .field("selected", &self.selected)
            .field("vault", &self.vault)
            .field("observers", &self.observers.len())
            .finish()
    }
}
