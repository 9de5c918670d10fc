//! In-memory student registry.
//!
//! This module provides the [`StudentRegistry`] struct and its CRUD operations.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::types::{normalize_email, StudentRecord};
use crate::error::RegistryError;

/// State guarded by the registry lock.
#[derive(Debug, Default)]
struct Inner {
    records: HashMap<i64, StudentRecord>,
    order: Vec<i64>,
    emails: HashSet<String>,
}

/// In-memory keyed store of student records.
///
/// Records are unique by `id` and by `email`. Every operation takes a single
/// lock spanning its checks and its mutation, and a failing operation leaves
/// the registry untouched. Reads hand out clones.
#[derive(Debug, Default)]
pub struct StudentRegistry {
    inner: Mutex<Inner>,
}

impl StudentRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // All checks run before any mutation, so a poisoned guard still
        // holds consistent state.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store a new record.
    ///
    /// The email is stored in canonical form (see
    /// [`normalize_email`]), so addresses differing
    /// only in domain case collide.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidRecord`] if the record fails validation
    /// - [`RegistryError::DuplicateId`] if the id is taken (checked first)
    /// - [`RegistryError::DuplicateEmail`] if the email is taken
    pub fn create(&self, record: StudentRecord) -> Result<StudentRecord, RegistryError> {
        record.validate()?;
        let record = record.normalized();
        let mut inner = self.lock();

        if inner.records.contains_key(&record.id) {
            tracing::warn!(id = record.id, "Rejected create: duplicate id");
            return Err(RegistryError::DuplicateId { id: record.id });
        }
        if inner.emails.contains(&record.email) {
            tracing::warn!(id = record.id, email = %record.email, "Rejected create: duplicate email");
            return Err(RegistryError::DuplicateEmail {
                email: record.email,
            });
        }

        inner.emails.insert(record.email.clone());
        inner.order.push(record.id);
        inner.records.insert(record.id, record.clone());

        tracing::debug!(id = record.id, size = inner.records.len(), "Student created");
        Ok(record)
    }

    /// All records in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<StudentRecord> {
        let inner = self.lock();
        inner
            .order
            .iter()
            .filter_map(|id| inner.records.get(id))
            .cloned()
            .collect()
    }

    /// Look up one record.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no record has this id.
    pub fn get(&self, id: i64) -> Result<StudentRecord, RegistryError> {
        self.lock()
            .records
            .get(&id)
            .cloned()
            .ok_or(RegistryError::NotFound { id })
    }

    /// Replace the record stored under `id`.
    ///
    /// The replacement is stored under `id` regardless of its own `id` field,
    /// and keeps the original insertion position. The email index releases the
    /// old address and reserves the new one.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidRecord`] if the record fails validation
    /// - [`RegistryError::NotFound`] if no record has this id
    /// - [`RegistryError::EmailInUse`] if the new email belongs to another record
    pub fn update(&self, id: i64, record: StudentRecord) -> Result<StudentRecord, RegistryError> {
        record.validate()?;
        let record = record.with_id(id).normalized();
        let mut inner = self.lock();

        let Some(current_email) = inner.records.get(&id).map(|r| r.email.clone()) else {
            tracing::warn!(id, "Rejected update: not found");
            return Err(RegistryError::NotFound { id });
        };

        if record.email != current_email {
            if inner.emails.contains(&record.email) {
                tracing::warn!(id, email = %record.email, "Rejected update: email in use");
                return Err(RegistryError::EmailInUse {
                    email: record.email,
                });
            }
            inner.emails.remove(&current_email);
            inner.emails.insert(record.email.clone());
        }

        inner.records.insert(id, record.clone());

        tracing::debug!(id, "Student updated");
        Ok(record)
    }

    /// Remove the record stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no record has this id.
    pub fn delete(&self, id: i64) -> Result<(), RegistryError> {
        let mut inner = self.lock();

        let Some(removed) = inner.records.remove(&id) else {
            tracing::warn!(id, "Rejected delete: not found");
            return Err(RegistryError::NotFound { id });
        };
        inner.emails.remove(&removed.email);
        inner.order.retain(|existing| *existing != id);

        tracing::debug!(id, size = inner.records.len(), "Student deleted");
        Ok(())
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    /// Returns true if no records are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().records.is_empty()
    }

    /// Returns true if a record is stored under `id`.
    #[must_use]
    pub fn contains(&self, id: i64) -> bool {
        self.lock().records.contains_key(&id)
    }

    /// Returns true if some stored record uses `email`.
    #[must_use]
    pub fn email_taken(&self, email: &str) -> bool {
        self.lock().emails.contains(&normalize_email(email))
    }
}
