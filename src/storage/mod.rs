//! Storage layer for Basket
//!
//! Per-user JSON slots with atomic writes, plus the audit log that records
//! every change.

pub mod file_io;
pub mod slots;
pub mod user_data;

pub use file_io::{read_json, write_json_atomic};
pub use slots::{FileSlotStore, MemorySlotStore, SlotStore};
pub use user_data::UserDataRepository;

use serde::Serialize;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::config::paths::BasketPaths;
use crate::error::BasketError;
use crate::models::UserId;

/// Main storage coordinator: user data plus the audit log
pub struct Storage {
    paths: BasketPaths,
    pub users: UserDataRepository<FileSlotStore>,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: BasketPaths) -> Result<Self, BasketError> {
        paths.ensure_directories()?;

        Ok(Self {
            users: UserDataRepository::new(FileSlotStore::new(paths.data_dir())),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &BasketPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record a create operation
    pub fn log_create<T: Serialize>(
        &self,
        user: &UserId,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), BasketError> {
        let entry = AuditEntry::create(user.as_str(), entity_type, entity_id, entity_name, entity);
        self.audit.log(&entry)
    }

    /// Record an update operation; the diff summary is computed here
    pub fn log_update<T: Serialize>(
        &self,
        user: &UserId,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Result<(), BasketError> {
        let diff = match (serde_json::to_value(before), serde_json::to_value(after)) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };
        let entry = AuditEntry::update(
            user.as_str(),
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff,
        );
        self.audit.log(&entry)
    }

    /// Record a delete operation
    pub fn log_delete<T: Serialize>(
        &self,
        user: &UserId,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), BasketError> {
        let entry = AuditEntry::delete(user.as_str(), entity_type, entity_id, entity_name, entity);
        self.audit.log(&entry)
    }

    /// Record several deletes with one write
    pub fn log_deletes<'a, T, I>(
        &self,
        user: &UserId,
        entity_type: EntityType,
        entities: I,
    ) -> Result<(), BasketError>
    where
        T: Serialize + 'a,
        I: IntoIterator<Item = (String, Option<String>, &'a T)>,
    {
        let entries: Vec<_> = entities
            .into_iter()
            .map(|(id, name, entity)| {
                AuditEntry::delete(user.as_str(), entity_type, id, name, entity)
            })
            .collect();
        self.audit.log_batch(&entries)
    }
}
