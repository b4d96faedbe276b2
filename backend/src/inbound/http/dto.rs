//! JSON payloads shared by the student and manager handlers.
//!
//! Domain types stay free of serde and utoipa; these structs carry the
//! camelCase wire shape and convert from the domain with `From`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    Announcement, CheckInOut, ComplaintRepair, ManagerDashboard, Room, RoomInfo, Student,
    StudentDashboard,
};

/// Confirmation body for mutations without a natural response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Room assigned successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A dormitory room.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    #[schema(example = "A101")]
    pub room_num: String,
    pub dormitory_id: i64,
    pub floor: Option<i32>,
    pub room_type: Option<String>,
    pub block: Option<String>,
    #[schema(minimum = 0, maximum = 2)]
    pub occupancy: i32,
    pub last_inspect: Option<String>,
    pub duration: Option<String>,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self {
            room_num: room.key.room_num,
            dormitory_id: room.key.dormitory_id.get(),
            floor: room.floor,
            room_type: room.room_type,
            block: room.block,
            occupancy: room.occupancy,
            last_inspect: room.last_inspect,
            duration: room.duration,
        }
    }
}

/// Public view of a student. The stored password is never serialised.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    pub id: i64,
    pub name: String,
    pub major: Option<String>,
    pub email: Option<String>,
    pub phone_num: Option<String>,
    pub status: Option<String>,
    pub room_num: Option<String>,
    pub dormitory_id: Option<i64>,
    pub roommate_id: Option<i64>,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        let (room_num, dormitory_id) = match student.room {
            Some(key) => (Some(key.room_num), Some(key.dormitory_id.get())),
            None => (None, None),
        };
        Self {
            id: student.id.get(),
            name: student.name,
            major: student.major,
            email: student.email,
            phone_num: student.phone_num,
            status: student.status,
            room_num,
            dormitory_id,
            roommate_id: student.roommate.map(|id| id.get()),
        }
    }
}

/// A student's room and roommate; both null when unassigned.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoomInfoResponse {
    pub room: Option<RoomResponse>,
    pub roommate: Option<StudentResponse>,
}

impl From<RoomInfo> for RoomInfoResponse {
    fn from(info: RoomInfo) -> Self {
        Self {
            room: info.room.map(RoomResponse::from),
            roommate: info.roommate.map(StudentResponse::from),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// RFC 3339 publication time.
    #[schema(example = "2024-09-05T09:00:00+00:00")]
    pub date_time: String,
    pub manager_id: i64,
}

impl From<Announcement> for AnnouncementResponse {
    fn from(announcement: Announcement) -> Self {
        Self {
            id: announcement.id.get(),
            title: announcement.title,
            description: announcement.description,
            date_time: announcement.date_time.to_rfc3339(),
            manager_id: announcement.manager_id.get(),
        }
    }
}

/// A complaint or repair request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintResponse {
    pub id: i64,
    pub description: String,
    pub service_type: Option<String>,
    pub date_time: String,
    pub priority_lvl: Option<String>,
    #[schema(example = "PENDING")]
    pub status: String,
    pub student_id: i64,
}

impl From<ComplaintRepair> for ComplaintResponse {
    fn from(complaint: ComplaintRepair) -> Self {
        Self {
            id: complaint.id.get(),
            description: complaint.description,
            service_type: complaint.service_type,
            date_time: complaint.date_time.to_rfc3339(),
            priority_lvl: complaint.priority_lvl,
            status: complaint.status.as_str().to_owned(),
            student_id: complaint.student_id.get(),
        }
    }
}

/// A check-in or check-out request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckInOutResponse {
    pub id: i64,
    pub student_id: i64,
    #[schema(example = "2024-09-01")]
    pub date: String,
    #[serde(rename = "type")]
    #[schema(example = "Check-in")]
    pub kind: String,
    #[schema(example = "PENDING")]
    pub status: String,
}

impl From<CheckInOut> for CheckInOutResponse {
    fn from(request: CheckInOut) -> Self {
        Self {
            id: request.id.get(),
            student_id: request.student_id.get(),
            date: request.date.to_string(),
            kind: request.kind.as_str().to_owned(),
            status: request.status.as_str().to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDashboardResponse {
    pub room: Option<RoomResponse>,
    pub recent_activities: Vec<CheckInOutResponse>,
    pub recent_requests: Vec<ComplaintResponse>,
    pub announcements: Vec<AnnouncementResponse>,
}

impl From<StudentDashboard> for StudentDashboardResponse {
    fn from(dashboard: StudentDashboard) -> Self {
        Self {
            room: dashboard.room.map(RoomResponse::from),
            recent_activities: convert_all(dashboard.recent_activities),
            recent_requests: convert_all(dashboard.recent_requests),
            announcements: convert_all(dashboard.announcements),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManagerDashboardResponse {
    pub total_students: u64,
    pub available_rooms: u64,
    pub pending_check_ins: u64,
    pub active_complaints: u64,
    pub announcements: Vec<AnnouncementResponse>,
}

impl From<ManagerDashboard> for ManagerDashboardResponse {
    fn from(dashboard: ManagerDashboard) -> Self {
        Self {
            total_students: dashboard.total_students,
            available_rooms: dashboard.available_rooms,
            pending_check_ins: dashboard.pending_check_ins,
            active_complaints: dashboard.active_complaints,
            announcements: convert_all(dashboard.announcements),
        }
    }
}

/// Map a list of domain values into their wire form.
pub(crate) fn convert_all<T, R: From<T>>(items: Vec<T>) -> Vec<R> {
    items.into_iter().map(R::from).collect()
}
