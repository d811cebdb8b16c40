//! Member registry controller.
//!
//! # Responsibility
//! - Route form input to the create path or the edit path.
//! - Enforce member-number uniqueness when creating.
//! - Report every outcome through the notification surface.
//!
//! # Invariants
//! - At most one member is the edit target, and it is always a stored member.
//! - `submit` never creates a member while an edit is in progress.
//! - Removing the edit target returns the session to `Creating` and clears
//!   the form.
//! - Uniqueness is checked at creation only. A commit that introduces a
//!   duplicate member number is applied and logged at `warn`.

use crate::config::NotificationConfig;
use crate::form::member_form::{FormErrors, FormSurface, MemberDraft, MemberForm};
use crate::model::member::{Member, MemberId};
use crate::notify::{LogNotifier, Notification, Notifier};
use crate::repo::member_store::MemberStore;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Shown when the form is invalid or a submit is attempted while editing.
pub const VALIDATION_FAILURE_MESSAGE: &str =
    "Error: one or more fields are incorrectly filled";
/// Shown when a new member reuses an existing member number.
pub const DUPLICATE_MEMBER_NUMBER_MESSAGE: &str = "Error: the member number already exists";
/// Shown after a member is created.
pub const SUBMITTED_MESSAGE: &str = "Form submitted";

pub type ControllerResult<T> = Result<T, ControllerError>;

/// Rejections reported by controller operations.
///
/// Each rejection is also sent to the notifier when it has a user-facing
/// message; callers may ignore the returned error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    /// Form rules failed, or a submit happened while editing (no field
    /// errors in that case).
    ValidationFailure(FormErrors),
    /// A new member would reuse this member number.
    DuplicateMemberNumber(u64),
    /// No stored member has this id.
    MemberNotFound(MemberId),
}

impl Display for ControllerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ValidationFailure(errors) if errors.is_empty() => {
                write!(f, "submit rejected while a member is being edited")
            }
            Self::ValidationFailure(errors) => write!(f, "invalid form: {errors}"),
            Self::DuplicateMemberNumber(number) => {
                write!(f, "member number already exists: {number}")
            }
            Self::MemberNotFound(id) => write!(f, "member not found: {id}"),
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ValidationFailure(errors) if !errors.is_empty() => Some(errors),
            _ => None,
        }
    }
}

impl From<FormErrors> for ControllerError {
    fn from(value: FormErrors) -> Self {
        Self::ValidationFailure(value)
    }
}

/// Whether form input creates a new member or updates an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditSession {
    #[default]
    Creating,
    Editing(MemberId),
}

impl EditSession {
    /// The member being edited, if any.
    pub fn target(self) -> Option<MemberId> {
        match self {
            Self::Creating => None,
            Self::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(self) -> bool {
        matches!(self, Self::Editing(_))
    }
}

/// Display projection of one stored member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRow {
    pub id: MemberId,
    /// Stored values, or the live form values for the edit target.
    pub values: MemberDraft,
    /// Whether this row is the current edit target.
    pub editing: bool,
}

/// Owns the member list, the edit session and the form/notification
/// collaborators.
pub struct MemberController<F: FormSurface = MemberForm, N: Notifier = LogNotifier> {
    store: MemberStore,
    session: EditSession,
    form: F,
    notifier: N,
    config: NotificationConfig,
}

impl<F: FormSurface, N: Notifier> MemberController<F, N> {
    /// Creates an empty controller with default notification settings.
    pub fn new(form: F, notifier: N) -> Self {
        Self::with_config(form, notifier, NotificationConfig::default())
    }

    pub fn with_config(form: F, notifier: N, config: NotificationConfig) -> Self {
        Self {
            store: MemberStore::new(),
            session: EditSession::Creating,
            form,
            notifier,
            config,
        }
    }

    pub fn store(&self) -> &MemberStore {
        &self.store
    }

    pub fn session(&self) -> EditSession {
        self.session
    }

    pub fn edit_target(&self) -> Option<MemberId> {
        self.session.target()
    }

    /// Identity check used to highlight the row being edited.
    pub fn is_edit_target(&self, id: MemberId) -> bool {
        self.session.target() == Some(id)
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn config(&self) -> &NotificationConfig {
        &self.config
    }

    /// Creates a member from the current form values.
    ///
    /// # Contract
    /// - Rejected with `ValidationFailure` when the form is invalid or an
    ///   edit is in progress; the store is untouched.
    /// - Rejected with `DuplicateMemberNumber` when the number is taken.
    /// - On success the member is appended, the form is reset and the new id
    ///   is returned.
    pub fn submit(&mut self) -> ControllerResult<MemberId> {
        if let EditSession::Editing(target) = self.session {
            info!(
                "event=member_submit module=controller status=rejected reason=editing target={}",
                target
            );
            return self.reject(ControllerError::ValidationFailure(FormErrors::default()));
        }

        let draft = self.form.values();
        let member = match self.validated(&draft).and_then(|()| draft.to_member()) {
            Ok(member) => member,
            Err(errors) => {
                info!(
                    "event=member_submit module=controller status=rejected reason=invalid_form fields={}",
                    errors.len()
                );
                return self.reject(errors.into());
            }
        };

        if self.store.has_member_number(member.member_number) {
            info!(
                "event=member_submit module=controller status=rejected reason=duplicate member_number={}",
                member.member_number
            );
            return self.reject(ControllerError::DuplicateMemberNumber(member.member_number));
        }

        let id = member.id;
        info!(
            "event=member_submit module=controller status=ok member_id={} member_number={}",
            id, member.member_number
        );
        self.store.add(member);
        self.form.reset();
        self.send(SUBMITTED_MESSAGE);
        Ok(id)
    }

    /// Makes `id` the edit target and shows its values in the form.
    ///
    /// Re-targeting while already editing discards the uncommitted form
    /// values of the previous target.
    pub fn begin_edit(&mut self, id: MemberId) -> ControllerResult<()> {
        let Some(member) = self.store.get(id) else {
            debug!(
                "event=member_edit_begin module=controller status=rejected reason=not_found member_id={}",
                id
            );
            return Err(ControllerError::MemberNotFound(id));
        };

        if let Some(previous) = self.session.target().filter(|previous| *previous != id) {
            debug!(
                "event=member_edit_retarget module=controller status=ok from={} to={}",
                previous, id
            );
        }

        self.form.populate(member);
        self.session = EditSession::Editing(id);
        debug!(
            "event=member_edit_begin module=controller status=ok member_id={}",
            id
        );
        Ok(())
    }

    /// Overwrites member `id` with the current form values.
    ///
    /// # Contract
    /// - Unknown `id`: nothing changes, no notification.
    /// - Invalid form: rejected with `ValidationFailure`, session unchanged.
    /// - Member-number uniqueness is not re-checked.
    /// - On success the form is reset and the session returns to `Creating`.
    pub fn commit_edit(&mut self, id: MemberId) -> ControllerResult<()> {
        if self.store.get(id).is_none() {
            debug!(
                "event=member_edit_commit module=controller status=rejected reason=not_found member_id={}",
                id
            );
            return Err(ControllerError::MemberNotFound(id));
        }

        let draft = self.form.values();
        if let Err(errors) = self.validated(&draft) {
            info!(
                "event=member_edit_commit module=controller status=rejected reason=invalid_form member_id={} fields={}",
                id,
                errors.len()
            );
            return self.reject(errors.into());
        }

        if !self.is_edit_target(id) {
            debug!(
                "event=member_edit_commit module=controller status=ok note=not_edit_target member_id={}",
                id
            );
        }

        let applied = match self.store.get_mut(id) {
            Some(member) => draft
                .apply_to(member)
                .map(|()| (member.full_name(), member.member_number)),
            None => return Err(ControllerError::MemberNotFound(id)),
        };
        let (full_name, member_number) = match applied {
            Ok(updated) => updated,
            Err(errors) => return self.reject(errors.into()),
        };

        let duplicates = self.store.count_member_number(member_number, Some(id));
        if duplicates > 0 {
            warn!(
                "event=member_edit_commit module=controller status=ok note=duplicate_member_number member_id={} member_number={} others={}",
                id, member_number, duplicates
            );
        }

        self.form.reset();
        self.session = EditSession::Creating;
        info!(
            "event=member_edit_commit module=controller status=ok member_id={} member_number={}",
            id, member_number
        );
        self.send(format!("Member {full_name} has been modified"));
        Ok(())
    }

    /// Removes member `id`, ending the edit session if it was the target.
    pub fn delete(&mut self, id: MemberId) -> ControllerResult<Member> {
        let Some(removed) = self.store.remove(id) else {
            debug!(
                "event=member_delete module=controller status=rejected reason=not_found member_id={}",
                id
            );
            return Err(ControllerError::MemberNotFound(id));
        };

        if self.is_edit_target(id) {
            self.form.reset();
            self.session = EditSession::Creating;
            debug!(
                "event=member_edit_cleared module=controller status=ok member_id={}",
                id
            );
        }

        info!(
            "event=member_delete module=controller status=ok member_id={} remaining={}",
            id,
            self.store.len()
        );
        self.send(format!("Member {} has been deleted", removed.full_name()));
        Ok(removed)
    }

    /// One row per stored member, in insertion order.
    ///
    /// The edit target shows the live form values so pending changes are
    /// visible before commit.
    pub fn rows(&self) -> Vec<MemberRow> {
        let target = self.session.target();
        self.store
            .iter()
            .map(|member| {
                let editing = target == Some(member.id);
                let values = if editing {
                    self.form.values()
                } else {
                    MemberDraft::from_member(member)
                };
                MemberRow {
                    id: member.id,
                    values,
                    editing,
                }
            })
            .collect()
    }

    fn validated(&self, draft: &MemberDraft) -> Result<(), FormErrors> {
        if self.form.is_valid() {
            return Ok(());
        }
        // The surface owns validity; fall back to empty details when its
        // verdict is stricter than the draft rules.
        Err(draft.validate().err().unwrap_or_default())
    }

    fn reject<T>(&mut self, error: ControllerError) -> ControllerResult<T> {
        match &error {
            ControllerError::ValidationFailure(_) => self.send(VALIDATION_FAILURE_MESSAGE),
            ControllerError::DuplicateMemberNumber(_) => {
                self.send(DUPLICATE_MEMBER_NUMBER_MESSAGE)
            }
            ControllerError::MemberNotFound(_) => {}
        }
        Err(error)
    }

    fn send(&mut self, message: impl Into<String>) {
        let notification = Notification::new(message, &self.config);
        self.notifier.notify(&notification);
    }
}
