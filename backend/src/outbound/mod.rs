//! Outbound adapters implementing the domain's repository ports.
//!
//! - **persistence**: PostgreSQL repositories using Diesel ORM
//! - **memory**: a process-local store used when no database is configured
//!   and by the HTTP tests
//!
//! Adapters translate between domain types and storage representations. They
//! contain no business logic.

pub mod memory;
pub mod persistence;
