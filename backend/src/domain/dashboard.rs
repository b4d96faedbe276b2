//! Read models aggregated for the dashboards.

use super::announcement::Announcement;
use super::check_in_out::CheckInOut;
use super::complaint::ComplaintRepair;
use super::room::Room;
use super::student::Student;

/// Number of recent items shown per list on the student dashboard.
pub const STUDENT_RECENT_LIMIT: usize = 5;

/// Number of recent announcements shown on the manager dashboard.
pub const MANAGER_RECENT_ANNOUNCEMENTS: usize = 4;

/// Everything a student sees after logging in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentDashboard {
    pub room: Option<Room>,
    pub recent_activities: Vec<CheckInOut>,
    pub recent_requests: Vec<ComplaintRepair>,
    pub announcements: Vec<Announcement>,
}

/// Headline figures for a manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerDashboard {
    /// Students living in the manager's dormitory.
    pub total_students: u64,
    /// Rooms in the dormitory with a free bed.
    pub available_rooms: u64,
    /// Pending check-in/out requests across all dormitories.
    pub pending_check_ins: u64,
    /// Pending complaints across all dormitories.
    pub active_complaints: u64,
    pub announcements: Vec<Announcement>,
}

/// A student's room together with the roommate sharing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomInfo {
    pub room: Option<Room>,
    pub roommate: Option<Student>,
}
