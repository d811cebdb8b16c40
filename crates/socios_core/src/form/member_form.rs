//! Member form values, validation rules and the in-memory form surface.
//!
//! # Responsibility
//! - Model the six-field form state as a plain value (`MemberDraft`).
//! - Evaluate the field rules before any controller logic runs.
//! - Provide `MemberForm`, the default `FormSurface` implementation.
//!
//! # Invariants
//! - `MemberDraft::default()` is the reset (empty) state.
//! - Every field is mandatory; validation reports all failing fields in
//!   declaration order, never just the first one.
//! - Lengths count Unicode scalar values; text is not trimmed, so a
//!   whitespace-only value counts as present.

use crate::model::member::{Member, Sex};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum length of `name` and `surname`.
pub const MIN_NAME_CHARS: usize = 3;
/// Exact length of `national_id`.
pub const NATIONAL_ID_CHARS: usize = 9;

/// Form field identifiers, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberField {
    Name,
    Surname,
    MemberNumber,
    NationalId,
    Phone,
    Sex,
}

impl MemberField {
    pub const ALL: [MemberField; 6] = [
        Self::Name,
        Self::Surname,
        Self::MemberNumber,
        Self::NationalId,
        Self::Phone,
        Self::Sex,
    ];

    /// Stable snake_case field key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Surname => "surname",
            Self::MemberNumber => "member_number",
            Self::NationalId => "national_id",
            Self::Phone => "phone",
            Self::Sex => "sex",
        }
    }

    /// Parses a field key as produced by `as_str`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == value.trim())
    }
}

impl Display for MemberField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a single field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// Field is empty or unset.
    Required,
    /// Field is shorter than `min` characters.
    TooShort { min: usize, actual: usize },
    /// Field must be exactly `expected` characters.
    WrongLength { expected: usize, actual: usize },
}

/// One failing field rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: MemberField,
    pub kind: FieldErrorKind,
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            FieldErrorKind::Required => write!(f, "{} is required", self.field),
            FieldErrorKind::TooShort { min, actual } => write!(
                f,
                "{} must have at least {min} characters, got {actual}",
                self.field
            ),
            FieldErrorKind::WrongLength { expected, actual } => write!(
                f,
                "{} must have exactly {expected} characters, got {actual}",
                self.field
            ),
        }
    }
}

/// All failing field rules of one validation pass.
///
/// Empty when the rejection did not come from field rules (for example a
/// submit attempted while editing).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(Vec<FieldError>);

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Returns the error recorded for `field`, if any.
    pub fn for_field(&self, field: MemberField) -> Option<&FieldError> {
        self.0.iter().find(|err| err.field == field)
    }
}

impl Display for FormErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "form rejected");
        }
        for (index, err) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl Error for FormErrors {}

/// Raw text input that could not be stored in a typed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInputError {
    InvalidMemberNumber(String),
    InvalidSex(String),
}

impl Display for FieldInputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMemberNumber(value) => {
                write!(f, "member number must be a non-negative integer, got `{value}`")
            }
            Self::InvalidSex(value) => write!(f, "unsupported sex value `{value}`; expected F|M"),
        }
    }
}

impl Error for FieldInputError {}

/// Current values of the six member fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDraft {
    pub name: String,
    pub surname: String,
    pub member_number: Option<u64>,
    pub national_id: String,
    pub phone: String,
    pub sex: Option<Sex>,
}

impl MemberDraft {
    /// Copies the editable fields of an existing member.
    pub fn from_member(member: &Member) -> Self {
        Self {
            name: member.name.clone(),
            surname: member.surname.clone(),
            member_number: Some(member.member_number),
            national_id: member.national_id.clone(),
            phone: member.phone.clone(),
            sex: Some(member.sex),
        }
    }

    /// Returns whether every field is in its reset state.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Runs every field rule and collects the failures.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = Vec::new();

        if let Some(kind) = check_min_chars(&self.name, MIN_NAME_CHARS) {
            errors.push(FieldError {
                field: MemberField::Name,
                kind,
            });
        }
        if let Some(kind) = check_min_chars(&self.surname, MIN_NAME_CHARS) {
            errors.push(FieldError {
                field: MemberField::Surname,
                kind,
            });
        }
        if self.member_number.is_none() {
            errors.push(FieldError {
                field: MemberField::MemberNumber,
                kind: FieldErrorKind::Required,
            });
        }
        if let Some(kind) = check_exact_chars(&self.national_id, NATIONAL_ID_CHARS) {
            errors.push(FieldError {
                field: MemberField::NationalId,
                kind,
            });
        }
        if self.phone.is_empty() {
            errors.push(FieldError {
                field: MemberField::Phone,
                kind: FieldErrorKind::Required,
            });
        }
        if self.sex.is_none() {
            errors.push(FieldError {
                field: MemberField::Sex,
                kind: FieldErrorKind::Required,
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(FormErrors(errors))
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Builds a new member with a fresh id from valid draft values.
    pub fn to_member(&self) -> Result<Member, FormErrors> {
        let (member_number, sex) = self.checked_required()?;
        Ok(Member::new(
            self.name.clone(),
            self.surname.clone(),
            member_number,
            self.national_id.clone(),
            self.phone.clone(),
            sex,
        ))
    }

    /// Overwrites every editable field of `member`, keeping its id.
    pub fn apply_to(&self, member: &mut Member) -> Result<(), FormErrors> {
        let (member_number, sex) = self.checked_required()?;
        member.name.clone_from(&self.name);
        member.surname.clone_from(&self.surname);
        member.member_number = member_number;
        member.national_id.clone_from(&self.national_id);
        member.phone.clone_from(&self.phone);
        member.sex = sex;
        Ok(())
    }

    fn checked_required(&self) -> Result<(u64, Sex), FormErrors> {
        self.validate()?;
        match (self.member_number, self.sex) {
            (Some(member_number), Some(sex)) => Ok((member_number, sex)),
            // validate() already reported both as required
            _ => Err(FormErrors::default()),
        }
    }
}

fn check_min_chars(value: &str, min: usize) -> Option<FieldErrorKind> {
    let actual = value.chars().count();
    if actual == 0 {
        Some(FieldErrorKind::Required)
    } else if actual < min {
        Some(FieldErrorKind::TooShort { min, actual })
    } else {
        None
    }
}

fn check_exact_chars(value: &str, expected: usize) -> Option<FieldErrorKind> {
    let actual = value.chars().count();
    if actual == 0 {
        Some(FieldErrorKind::Required)
    } else if actual != expected {
        Some(FieldErrorKind::WrongLength { expected, actual })
    } else {
        None
    }
}

/// Form collaborator driven by the member controller.
///
/// The controller only reads values and validity, and asks the surface to
/// show a member or to clear itself.
pub trait FormSurface {
    /// Snapshot of the six current field values.
    fn values(&self) -> MemberDraft;

    /// Whether all field rules currently pass.
    fn is_valid(&self) -> bool {
        self.values().is_valid()
    }

    /// Shows `member`'s values in every field.
    fn populate(&mut self, member: &Member);

    /// Clears all fields to their empty state.
    fn reset(&mut self);
}

/// In-memory form surface backed by a `MemberDraft`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberForm {
    draft: MemberDraft,
}

impl MemberForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the current field values.
    pub fn draft(&self) -> &MemberDraft {
        &self.draft
    }

    /// Replaces all field values at once.
    pub fn set_draft(&mut self, draft: MemberDraft) {
        self.draft = draft;
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.draft.name = value.into();
    }

    pub fn set_surname(&mut self, value: impl Into<String>) {
        self.draft.surname = value.into();
    }

    pub fn set_member_number(&mut self, value: Option<u64>) {
        self.draft.member_number = value;
    }

    pub fn set_national_id(&mut self, value: impl Into<String>) {
        self.draft.national_id = value.into();
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.draft.phone = value.into();
    }

    pub fn set_sex(&mut self, value: Option<Sex>) {
        self.draft.sex = value;
    }

    /// Sets one field from raw user text.
    ///
    /// Blank input clears typed fields (`member_number`, `sex`). On error the
    /// field keeps its previous value.
    pub fn set_text(&mut self, field: MemberField, raw: &str) -> Result<(), FieldInputError> {
        match field {
            MemberField::Name => self.set_name(raw),
            MemberField::Surname => self.set_surname(raw),
            MemberField::NationalId => self.set_national_id(raw),
            MemberField::Phone => self.set_phone(raw),
            MemberField::MemberNumber => {
                let trimmed = raw.trim();
                let value = if trimmed.is_empty() {
                    None
                } else {
                    Some(
                        trimmed
                            .parse::<u64>()
                            .map_err(|_| FieldInputError::InvalidMemberNumber(raw.to_string()))?,
                    )
                };
                self.set_member_number(value);
            }
            MemberField::Sex => {
                let value = if raw.trim().is_empty() {
                    None
                } else {
                    Some(
                        raw.parse::<Sex>()
                            .map_err(|_| FieldInputError::InvalidSex(raw.to_string()))?,
                    )
                };
                self.set_sex(value);
            }
        }
        Ok(())
    }
}

impl FormSurface for MemberForm {
    fn values(&self) -> MemberDraft {
        self.draft.clone()
    }

    fn is_valid(&self) -> bool {
        self.draft.is_valid()
    }

    fn populate(&mut self, member: &Member) {
        self.draft = MemberDraft::from_member(member);
    }

    fn reset(&mut self) {
        self.draft = MemberDraft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldErrorKind, MemberDraft, MemberField};
    use crate::model::member::Sex;

    fn valid_draft() -> MemberDraft {
        MemberDraft {
            name: "Ana".to_string(),
            surname: "Ruiz".to_string(),
            member_number: Some(1),
            national_id: "123456789".to_string(),
            phone: "555".to_string(),
            sex: Some(Sex::Female),
        }
    }

    #[test]
    fn empty_draft_reports_every_field_as_required() {
        let errors = MemberDraft::default()
            .validate()
            .expect_err("empty draft must be invalid");
        assert_eq!(errors.len(), MemberField::ALL.len());
        assert!(errors
            .iter()
            .all(|err| err.kind == FieldErrorKind::Required));
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        let mut draft = valid_draft();
        draft.name = "Íñé".to_string();
        assert!(draft.validate().is_ok());

        draft.name = "Ñu".to_string();
        let errors = draft.validate().expect_err("two chars must be too short");
        assert_eq!(
            errors.for_field(MemberField::Name).map(|err| err.kind),
            Some(FieldErrorKind::TooShort { min: 3, actual: 2 })
        );
    }

    #[test]
    fn national_id_must_be_exactly_nine_characters() {
        let mut draft = valid_draft();
        draft.national_id = "1234567890".to_string();
        let errors = draft.validate().expect_err("ten chars must fail");
        assert_eq!(
            errors.for_field(MemberField::NationalId).map(|err| err.kind),
            Some(FieldErrorKind::WrongLength {
                expected: 9,
                actual: 10
            })
        );
    }

    #[test]
    fn field_keys_parse_back() {
        for field in MemberField::ALL {
            assert_eq!(MemberField::parse(field.as_str()), Some(field));
        }
        assert_eq!(MemberField::parse("email"), None);
    }
}
