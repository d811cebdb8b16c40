//! Use-case orchestration over the member store.
//!
//! # Responsibility
//! - Drive the create/edit/delete workflow from form input.
//! - Keep presentation layers decoupled from store details.

pub mod member_controller;
