//! Core logic for the socios member registry.
//! This crate owns the member list, the edit-mode workflow and form rules;
//! rendering is left to callers.

pub mod config;
pub mod form;
pub mod logging;
pub mod model;
pub mod notify;
pub mod repo;
pub mod service;

pub use config::{default_log_level, LoggingConfig, NotificationConfig};
pub use form::member_form::{
    FieldError, FieldErrorKind, FieldInputError, FormErrors, FormSurface, MemberDraft,
    MemberField, MemberForm,
};
pub use logging::{init_logging, logging_status, LoggingError};
pub use model::member::{Member, MemberId, Sex, SexParseError};
pub use notify::{LogNotifier, Notification, Notifier, RecordingNotifier};
pub use repo::member_store::MemberStore;
pub use service::member_controller::{
    ControllerError, ControllerResult, EditSession, MemberController, MemberRow,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
