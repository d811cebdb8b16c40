//! Domain model for the member registry.
//!
//! # Invariants
//! - Every stored member is identified by a stable `MemberId`.

pub mod member;
