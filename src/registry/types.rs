//! Record types stored by the registry.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// Email syntax accepted by [`StudentRecord::validate`].
///
/// The local part is dot-separated atoms with no leading, trailing or
/// doubled dot. The domain is dotted labels whose last label has at least
/// two letters. Unicode letters are accepted in both parts.
#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[\p{L}\p{N}!#$%&'*+/=?^_`{|}~-]+(?:\.[\p{L}\p{N}!#$%&'*+/=?^_`{|}~-]+)*",
        r"@[\p{L}\p{N}](?:[\p{L}\p{N}-]*[\p{L}\p{N}])?",
        r"(?:\.[\p{L}\p{N}](?:[\p{L}\p{N}-]*[\p{L}\p{N}])?)*\.\p{L}{2,}$",
    ))
    .expect("email pattern is valid")
});

/// One enrolled student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Caller-supplied primary key.
    pub id: i64,
    /// Display name. Must not be blank.
    pub name: String,
    /// Age in years.
    pub age: i64,
    /// Email address. Unique across the registry.
    pub email: String,
}

impl StudentRecord {
    /// Create a new record.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, age: i64, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            email: email.into(),
        }
    }

    /// Return this record with its email in canonical form.
    ///
    /// See [`normalize_email`].
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.email = normalize_email(&self.email);
        self
    }

    /// Return a copy of this record stored under a different id.
    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Check field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidRecord`] when the name is blank or the
    /// email is not syntactically valid.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.name.trim().is_empty() {
            return Err(RegistryError::InvalidRecord {
                field: "name".into(),
                reason: "must not be empty".into(),
            });
        }

        if !is_valid_email(&self.email) {
            return Err(RegistryError::InvalidRecord {
                field: "email".into(),
                reason: "value is not a valid email address".into(),
            });
        }

        Ok(())
    }
}

/// Canonical form of an email address: the domain part is lowercased.
///
/// The local part is kept as given. Input without an `@` is returned
/// unchanged.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.rsplit_once('@').map_or_else(
        || email.to_string(),
        |(local, domain)| format!("{local}@{}", domain.to_lowercase()),
    )
}

/// Returns true if `email` has valid address syntax.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
