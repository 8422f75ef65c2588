//! Application state store.
//!
//! # Responsibility
//! - Own the single `AppState` value of one session.
//! - Expose the only sanctioned mutations: profile merge, service toggle,
//!   full reset.
//! - Notify subscribed dependents after each applied mutation.
//!
//! # Invariants
//! - Mutations build a new `AppState` and swap it in whole; readers holding
//!   an older snapshot never see a partial update.
//! - History collections never exceed the configured cap, which is itself
//!   clamped to `1..=MAX_ENTRIES`.
//! - Record identifiers are unique within each history collection.
//! - The service id set is fixed for the store lifetime.
//! - Listeners run after the swap, outside the state lock.

use crate::config::WizardConfig;
use crate::entry::collection::MAX_ENTRIES;
use crate::model::profile::ProfilePatch;
use crate::model::record::EntryId;
use crate::model::state::AppState;
use log::{debug, info, warn};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Handle returned by `AppStore::subscribe`.
pub type SubscriptionId = u64;

/// Kind of mutation that produced a new snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChange {
    /// Profile keys replaced by `update_profile`.
    ProfileUpdated { keys: Vec<&'static str> },
    ServiceToggled { service_id: String, connected: bool },
    Reset,
}

/// Dependent notified after each applied mutation.
pub trait StateListener: Send + Sync {
    fn on_state_changed(&self, state: &AppState, change: &StateChange);
}

impl<F> StateListener for F
where
    F: Fn(&AppState, &StateChange) + Send + Sync,
{
    fn on_state_changed(&self, state: &AppState, change: &StateChange) {
        self(state, change)
    }
}

/// Store mutation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A patched collection is longer than the per-collection cap.
    CollectionOverCapacity { len: usize, max_entries: usize },
    /// A patched collection carries the same record identifier twice.
    DuplicateId(EntryId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CollectionOverCapacity { len, max_entries } => write!(
                f,
                "collection has {len} entries; at most {max_entries} are allowed"
            ),
            Self::DuplicateId(id) => write!(f, "entry id appears more than once: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Session state holder, shared by handle (`Arc<AppStore>`).
pub struct AppStore {
    state: RwLock<Arc<AppState>>,
    initial: Arc<AppState>,
    max_entries: usize,
    listeners: RwLock<BTreeMap<SubscriptionId, Arc<dyn StateListener>>>,
    next_subscription: AtomicU64,
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AppStore {
    /// Creates a store holding `AppState::initial()`.
    pub fn new() -> Self {
        Self::with_max_entries(MAX_ENTRIES)
    }

    pub fn from_config(config: &WizardConfig) -> Self {
        Self::with_max_entries(config.max_entries)
    }

    /// Creates a store with a per-collection cap clamped to `1..=MAX_ENTRIES`.
    pub fn with_max_entries(max_entries: usize) -> Self {
        let max_entries = max_entries.clamp(1, MAX_ENTRIES);
        let initial = Arc::new(AppState::initial());
        Self {
            state: RwLock::new(Arc::clone(&initial)),
            initial,
            max_entries,
            listeners: RwLock::new(BTreeMap::new()),
            next_subscription: AtomicU64::new(1),
        }
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Current snapshot. Cheap: clones an `Arc`.
    pub fn get_state(&self) -> Arc<AppState> {
        let guard = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Shallow-merges `patch` into the profile.
    ///
    /// Field contents are not validated; only collection structure is
    /// enforced.
    ///
    /// # Errors
    /// - `CollectionOverCapacity` when a patched collection exceeds the cap.
    /// - `DuplicateId` when a patched collection repeats a record identifier.
    pub fn update_profile(&self, patch: ProfilePatch) -> Result<(), StoreError> {
        let largest = patch.largest_collection();
        if largest > self.max_entries {
            warn!(
                "event=profile_update module=store status=rejected reason=over_capacity len={} max={}",
                largest, self.max_entries
            );
            return Err(StoreError::CollectionOverCapacity {
                len: largest,
                max_entries: self.max_entries,
            });
        }
        if let Some(id) = patch.duplicate_entry_id() {
            warn!(
                "event=profile_update module=store status=rejected reason=duplicate_id id={}",
                id
            );
            return Err(StoreError::DuplicateId(id));
        }

        let keys = patch.touched_keys();
        let snapshot = self.replace(|current| {
            let mut next = current.clone();
            next.profile.apply(patch);
            Some(next)
        });
        if let Some(snapshot) = snapshot {
            info!(
                "event=profile_update module=store status=ok keys={}",
                keys.join(",")
            );
            self.notify(&snapshot, &StateChange::ProfileUpdated { keys });
        }
        Ok(())
    }

    /// Flips `connected` for `service_id`.
    ///
    /// Returns `false` (and changes nothing) when no service matches.
    pub fn toggle_service(&self, service_id: &str) -> bool {
        let snapshot = self.replace(|current| {
            current.service(service_id)?;
            let mut next = current.clone();
            for service in next.services.iter_mut().filter(|s| s.id == service_id) {
                service.connected = !service.connected;
            }
            Some(next)
        });

        let Some(snapshot) = snapshot else {
            debug!(
                "event=service_toggle module=store status=skipped reason=not_found service_id={}",
                service_id
            );
            return false;
        };

        let connected = snapshot
            .service(service_id)
            .map(|service| service.connected)
            .unwrap_or(false);
        info!(
            "event=service_toggle module=store status=ok service_id={} connected={}",
            service_id, connected
        );
        self.notify(
            &snapshot,
            &StateChange::ServiceToggled {
                service_id: service_id.to_string(),
                connected,
            },
        );
        true
    }

    /// Restores the initial session value.
    pub fn reset_all(&self) {
        let initial = Arc::clone(&self.initial);
        {
            let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
            *guard = Arc::clone(&initial);
        }
        info!("event=state_reset module=store status=ok");
        self.notify(&initial, &StateChange::Reset);
    }

    /// Registers a dependent; returns a handle for `unsubscribe`.
    pub fn subscribe(&self, listener: Arc<dyn StateListener>) -> SubscriptionId {
        let id = self.next_subscription.fetch_add(1, Ordering::Relaxed);
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, listener);
        id
    }

    /// Removes a dependent. Returns whether it was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id)
            .is_some()
    }

    /// Swaps in the state produced by `build`, or keeps the current one when
    /// `build` returns `None`.
    fn replace<F>(&self, build: F) -> Option<Arc<AppState>>
    where
        F: FnOnce(&AppState) -> Option<AppState>,
    {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let next = Arc::new(build(&guard)?);
        *guard = Arc::clone(&next);
        Some(next)
    }

    fn notify(&self, state: &AppState, change: &StateChange) {
        let listeners: Vec<Arc<dyn StateListener>> = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();
        for listener in listeners {
            listener.on_state_changed(state, change);
        }
    }
}
