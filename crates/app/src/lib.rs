//! # roster-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `StudentRepository`: record access for students, plus the
//!     per-year aggregate query
//! - Define **driving/inbound ports** as use-case structs:
//!   - `StudentService`: create, list, get, update (upsert), delete, count,
//!     statistics
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `roster-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
