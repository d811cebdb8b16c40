//! Ordered in-memory member storage.
//!
//! # Responsibility
//! - Hold members in insertion order for the controller lifetime.
//! - Provide identity-based lookup and removal.
//!
//! # Invariants
//! - Insertion order is preserved by every operation.
//! - The store does not enforce member-number uniqueness; callers check
//!   `has_member_number` before `add`.
//! - `remove` deletes at most one record.

use crate::model::member::{Member, MemberId};

/// Ordered collection of members.
#[derive(Debug, Clone, Default)]
pub struct MemberStore {
    members: Vec<Member>,
}

impl MemberStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `member` at the end.
    pub fn add(&mut self, member: Member) {
        self.members.push(member);
    }

    /// Removes the last record whose id is `id`.
    ///
    /// Scans from the end toward the start and stops after the first match.
    /// Returns `None` when no record matches.
    pub fn remove(&mut self, id: MemberId) -> Option<Member> {
        let index = self.members.iter().rposition(|member| member.id == id)?;
        Some(self.members.remove(index))
    }

    /// Returns whether any stored member already uses `member_number`.
    pub fn has_member_number(&self, member_number: u64) -> bool {
        self.members
            .iter()
            .any(|member| member.member_number == member_number)
    }

    /// Counts stored members using `member_number`, optionally skipping one id.
    pub fn count_member_number(&self, member_number: u64, except: Option<MemberId>) -> usize {
        self.members
            .iter()
            .filter(|member| member.member_number == member_number && Some(member.id) != except)
            .count()
    }

    pub fn get(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|member| member.id == id)
    }

    pub fn get_mut(&mut self, id: MemberId) -> Option<&mut Member> {
        self.members.iter_mut().find(|member| member.id == id)
    }

    /// Zero-based position of `id` in insertion order.
    pub fn position(&self, id: MemberId) -> Option<usize> {
        self.members.iter().position(|member| member.id == id)
    }

    /// Member at zero-based `index`.
    pub fn at(&self, index: usize) -> Option<&Member> {
        self.members.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
