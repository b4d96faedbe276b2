//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Each repository implements one domain port on top of a shared `bb8` pool
//! of `diesel-async` connections. Row structs (`models.rs`) and the schema
//! (`schema.rs`) stay private to this module; only domain types cross the
//! boundary, and every database failure is mapped onto the port's error enum.
//!
//! # Example
//!
//! ```ignore
//! use dormitory::outbound::persistence::{DbPool, DieselRoomRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/dorms")).await?;
//! let rooms = DieselRoomRepository::new(pool);
//! ```

mod diesel_announcement_repository;
mod diesel_basic_error_mapping;
mod diesel_check_in_out_repository;
mod diesel_complaint_repository;
mod diesel_dormitory_repository;
mod diesel_helpers;
mod diesel_room_repository;
mod diesel_student_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_announcement_repository::DieselAnnouncementRepository;
pub use diesel_check_in_out_repository::DieselCheckInOutRepository;
pub use diesel_complaint_repository::DieselComplaintRepository;
pub use diesel_dormitory_repository::DieselDormitoryRepository;
pub use diesel_room_repository::DieselRoomRepository;
pub use diesel_student_repository::DieselStudentRepository;
pub use migrations::run_migrations;
pub use pool::{DbPool, PoolConfig, PoolError};
