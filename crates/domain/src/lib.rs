//! # roster-domain
//!
//! Pure domain model for the roster student registry.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define the **Student** record and its builder
//! - Define **statistics** shapes returned by aggregate queries
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod stats;
pub mod student;
