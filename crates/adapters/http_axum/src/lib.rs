//! # roster-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON REST API** for student records under `/api/students`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses, choosing status codes
//!   (`200`, `204`, `404`, `500`)
//! - Publish an `OpenAPI` document for the API at `/api-docs/openapi.json`
//!
//! ## Dependency rule
//! Depends on `roster-app` (for port traits and services) and `roster-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod openapi;
pub mod router;
pub mod state;
