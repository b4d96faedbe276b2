//! Dormitory management backend.
//!
//! [`domain`] holds entities, services and ports; [`inbound`] exposes them over
//! HTTP and [`outbound`] stores them in PostgreSQL or in memory.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
