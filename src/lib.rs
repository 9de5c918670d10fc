//! Student Registry Service
//!
//! An in-memory student record service with CRUD over HTTP and
//! natural-language student summaries generated by a local Ollama model.
//!
//! # Features
//!
//! - Records unique by id and by email, listed in insertion order
//! - Atomic create, update and delete under a single registry lock
//! - Streamed summary generation with placeholder text on any failure
//! - Environment-driven configuration with `.env` support
//!
//! # Quick Start
//!
//! ```bash
//! OLLAMA_MODEL=llama3.2 PORT=8000 ./student-registry
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     HTTP      ┌─────────────────┐   /api/chat   ┌────────┐
//! │   Client    │──────────────▶│  axum server    │──────────────▶│ Ollama │
//! │             │◀──────────────│     (Rust)      │◀──── NDJSON ──│        │
//! └─────────────┘               └────────┬────────┘               └────────┘
//!                                        │
//!                                        ▼
//!                               StudentRegistry (memory)
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod registry;
pub mod server;
pub mod summary;
pub mod traits;

#[cfg(test)]
mod test_utils;
