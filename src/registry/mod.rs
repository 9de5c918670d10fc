//! Student registry.
//!
//! This module provides:
//! - [`StudentRecord`], the stored entity, with field validation
//! - [`StudentRegistry`], an in-memory store unique by id and by email
//!
//! # Architecture
//!
//! The registry keeps a map from id to record, an insertion-order list for
//! deterministic listings, and an email index mirroring the map. All three sit
//! behind one mutex so the uniqueness checks and the mutation of each call are
//! atomic.
//!
//! # Example
//!
//! ```
//! use student_registry::registry::{StudentRecord, StudentRegistry};
//!
//! let registry = StudentRegistry::new();
//! registry.create(StudentRecord::new(1, "Ada", 20, "ada@x.com")).unwrap();
//!
//! assert_eq!(registry.get(1).unwrap().name, "Ada");
//! assert!(registry.create(StudentRecord::new(2, "Bob", 21, "ada@x.com")).is_err());
//! ```

mod store;
mod types;

pub use store::StudentRegistry;
pub use types::{is_valid_email, normalize_email, StudentRecord};
