//! Member storage.
//!
//! # Responsibility
//! - Own the ordered member list and its identity-based operations.
//! - Stay free of validation and notification concerns.

pub mod member_store;
