//! History CLI command
//!
//! Prints the most recent audit log entries for the current user.

use crate::error::BasketResult;
use crate::models::UserId;
use crate::storage::Storage;

/// Print the last `count` changes made by `user`, oldest first
pub fn handle_history_command(storage: &Storage, user: &UserId, count: usize) -> BasketResult<()> {
    let entries = storage.audit().read_recent_for_user(user.as_str(), count)?;

    if entries.is_empty() {
        println!("No history for user '{}'.", user);
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
