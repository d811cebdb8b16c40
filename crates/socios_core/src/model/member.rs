//! Member domain model.
//!
//! # Responsibility
//! - Define the canonical member record held by the registry.
//! - Provide the enumerated `Sex` value and its wire/text codes.
//!
//! # Invariants
//! - `id` is assigned once at creation and never reused for another member.
//! - Record identity is the `id`, never the field values: two members with
//!   equal fields and different ids are distinct records.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Opaque identity of one stored member.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type MemberId = Uuid;

/// Sex/gender of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "M")]
    Male,
}

impl Sex {
    /// Stable one-letter code used in forms and serialized records.
    pub fn code(self) -> &'static str {
        match self {
            Self::Female => "F",
            Self::Male => "M",
        }
    }
}

impl Display for Sex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a text value is not a known `Sex` code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SexParseError(pub String);

impl Display for SexParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported sex value `{}`; expected F|M", self.0)
    }
}

impl Error for SexParseError {}

impl FromStr for Sex {
    type Err = SexParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "F" => Ok(Self::Female),
            "M" => Ok(Self::Male),
            _ => Err(SexParseError(value.to_string())),
        }
    }
}

/// One registered club member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Identity used for edit targeting and removal.
    pub id: MemberId,
    pub name: String,
    pub surname: String,
    /// Unique among members at creation time only.
    pub member_number: u64,
    /// Exactly nine characters when created through the form.
    pub national_id: String,
    pub phone: String,
    pub sex: Sex,
}

impl Member {
    /// Creates a member with a freshly generated id.
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        member_number: u64,
        national_id: impl Into<String>,
        phone: impl Into<String>,
        sex: Sex,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            surname: surname.into(),
            member_number,
            national_id: national_id.into(),
            phone: phone.into(),
            sex,
        }
    }

    /// "name surname", as shown in notifications.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}
