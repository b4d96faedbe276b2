//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters. Driving
//! ports are implemented by domain services and called by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod announcement_board;
mod announcement_repository;
mod authenticator;
mod check_in_out_repository;
mod check_in_out_workflow;
mod complaint_desk;
mod complaint_repository;
mod dashboard_query;
mod dormitory_repository;
mod room_management;
mod room_repository;
mod student_repository;

#[cfg(test)]
pub use announcement_board::MockAnnouncementBoard;
pub use announcement_board::AnnouncementBoard;
#[cfg(test)]
pub use announcement_repository::MockAnnouncementRepository;
pub use announcement_repository::{AnnouncementRepository, AnnouncementRepositoryError};
#[cfg(test)]
pub use authenticator::MockAuthenticator;
pub use authenticator::Authenticator;
#[cfg(test)]
pub use check_in_out_repository::MockCheckInOutRepository;
pub use check_in_out_repository::{CheckInOutRepository, CheckInOutRepositoryError};
#[cfg(test)]
pub use check_in_out_workflow::MockCheckInOutWorkflow;
pub use check_in_out_workflow::CheckInOutWorkflow;
#[cfg(test)]
pub use complaint_desk::MockComplaintDesk;
pub use complaint_desk::ComplaintDesk;
#[cfg(test)]
pub use complaint_repository::MockComplaintRepository;
pub use complaint_repository::{ComplaintRepository, ComplaintRepositoryError};
#[cfg(test)]
pub use dashboard_query::MockDashboardQuery;
pub use dashboard_query::DashboardQuery;
#[cfg(test)]
pub use dormitory_repository::MockDormitoryRepository;
pub use dormitory_repository::{DormitoryRepository, DormitoryRepositoryError};
#[cfg(test)]
pub use room_management::MockRoomManagement;
pub use room_management::RoomManagement;
#[cfg(test)]
pub use room_repository::MockRoomRepository;
pub use room_repository::{RoomRepository, RoomRepositoryError};
#[cfg(test)]
pub use student_repository::MockStudentRepository;
pub use student_repository::{StudentRepository, StudentRepositoryError};
