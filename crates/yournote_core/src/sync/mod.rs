//! Visible note list synchronization.
//!
//! # Responsibility
//! - Reconcile the displayed note list with the authoritative note list
//!   without re-running filters.
//! - Provide id-keyed list helpers for create/delete/update results.
//!
//! # Invariants
//! - Untouched visible entries keep their relative order.
//! - New entries are appended at the end.
//! - Membership is decided by `NoteId` only.

pub mod reconciler;
