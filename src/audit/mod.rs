//! Audit logging for Basket
//!
//! Every change to a user's budget or list is appended to `audit.log` as one
//! JSON line with before/after values.
//!
//! - `AuditEntry`: timestamp, user, operation, entity and optional snapshots.
//! - `AuditLogger`: appends entries and reads them back.
//! - `generate_diff`: one-line summary of what changed between two values.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
