//! Domain entities, ports and services.
//!
//! Purpose: hold the dormitory rules (room capacity, roommate pairing and the
//! request lifecycles) free of HTTP and persistence concerns. Inbound adapters
//! call the driving ports in [`ports`]; outbound adapters implement the
//! repository ports.

pub mod announcement;
pub mod auth;
pub mod check_in_out;
pub mod complaint;
pub mod dashboard;
pub mod dormitory;
pub mod error;
pub mod ids;
pub mod password;
pub mod ports;
pub mod room;
pub mod student;
pub mod trace_id;

mod manager_scope;
mod repository_errors;

mod announcement_service;
mod authentication_service;
mod check_in_out_service;
mod complaint_service;
mod dashboard_service;
mod room_service;

#[cfg(test)]
pub(crate) mod fixture_clock;

pub use self::announcement::{
    Announcement, AnnouncementContent, AnnouncementOrder, NewAnnouncement,
};
pub use self::auth::{
    AuthenticatedUser, AuthenticationOutcome, LoginCredentials, LoginRejection, PasswordChange,
    UnknownUserType, UserType,
};
pub use self::check_in_out::{
    CheckInOut, CheckInOutStatus, MovementKind, NewCheckInOut, UnknownCheckInOutStatus,
    UnknownMovementKind,
};
pub use self::complaint::{
    ComplaintRepair, ComplaintStatus, ComplaintSubmission, NewComplaint, UnknownComplaintStatus,
};
pub use self::dashboard::{
    MANAGER_RECENT_ANNOUNCEMENTS, ManagerDashboard, RoomInfo, STUDENT_RECENT_LIMIT,
    StudentDashboard,
};
pub use self::dormitory::{Dormitory, DormitoryManager};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::ids::{
    AnnouncementId, CheckInOutId, ComplaintId, DormitoryId, ManagerId, StudentId,
};
pub use self::password::Password;
pub use self::room::{OccupancyChange, ROOM_CAPACITY, Room, RoomFull, RoomKey};
pub use self::student::Student;
pub use self::trace_id::TraceId;

pub use self::announcement_service::AnnouncementService;
pub use self::authentication_service::AuthenticationService;
pub use self::check_in_out_service::CheckInOutService;
pub use self::complaint_service::ComplaintService;
pub use self::dashboard_service::{DashboardService, DashboardSources};
pub use self::room_service::RoomService;
