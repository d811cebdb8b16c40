//! Form surface contract and the member field rules.
//!
//! # Responsibility
//! - Hold the six-field form state as a plain value struct.
//! - Decide form validity before the controller acts on it.

pub mod member_form;
