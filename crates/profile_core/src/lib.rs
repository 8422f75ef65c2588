//! Core logic for the profile entry wizard.
//! This crate owns session state, history collections, validation and the
//! dashboard metrics; presentation layers only call into it.

pub mod config;
pub mod dashboard;
pub mod entry;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod validation;

pub use config::{ConfigError, WizardConfig};
pub use dashboard::{
    completion_percentage, connection_rate, total_history_count, CollectionUsage,
    ConnectedService, DashboardSummary,
};
pub use entry::collection::{CommitRejection, EntryCollectionManager, MAX_ENTRIES};
pub use logging::{default_log_level, init_from_config, init_logging, logging_status, LoggingError};
pub use model::profile::{Gender, MaritalStatus, Profile, ProfileField, ProfilePatch};
pub use model::record::{
    is_ongoing, Education, EntryFieldError, EntryId, EntryRecord, Qualification, WorkHistory,
    ONGOING_END_DATE,
};
pub use model::schema::{FieldKind, FieldSchema, RecordSchema};
pub use model::service::{default_services, ExternalService, SERVICE_A_ID, SERVICE_B_ID, SERVICE_C_ID};
pub use model::state::AppState;
pub use service::entry_form::EntryForm;
pub use service::profile_form::{ProfileForm, ProfileFormError};
pub use store::{AppStore, StateChange, StateListener, StoreError, SubscriptionId};
pub use validation::{
    is_valid_email, is_valid_phone, is_valid_postal_code, required_field_errors,
    validation_warnings, warning_messages, ContactFields, FieldErrors, ValidationWarning,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
