//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer. Conversions into domain
//! types live here so every repository decodes rows the same way.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

use super::schema::{
    announcements, check_in_outs, complaint_repairs, dormitories, dormitory_managers, rooms,
    students,
};
use crate::domain::{
    Announcement, AnnouncementId, CheckInOut, CheckInOutId, CheckInOutStatus, ComplaintId,
    ComplaintRepair, ComplaintStatus, Dormitory, DormitoryId, DormitoryManager, ManagerId,
    MovementKind, Password, Room, RoomKey, Student, StudentId,
};

// ---------------------------------------------------------------------------
// Dormitories and managers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = dormitory_managers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ManagerRow {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub password: String,
}

impl From<ManagerRow> for DormitoryManager {
    fn from(row: ManagerRow) -> Self {
        Self {
            id: ManagerId::new(row.id),
            name: row.name,
            phone: row.phone,
            email: row.email,
            password: Password::new(row.password),
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = dormitories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct DormitoryRow {
    pub id: i64,
    pub building_num: Option<String>,
    pub building_name: Option<String>,
    pub address: Option<String>,
    pub phone_num: Option<String>,
    pub email: Option<String>,
    pub manager_id: Option<i64>,
}

impl From<DormitoryRow> for Dormitory {
    fn from(row: DormitoryRow) -> Self {
        Self {
            id: DormitoryId::new(row.id),
            building_num: row.building_num,
            building_name: row.building_name,
            address: row.address,
            phone_num: row.phone_num,
            email: row.email,
            manager_id: row.manager_id.map(ManagerId::new),
        }
    }
}

// ---------------------------------------------------------------------------
// Rooms and students
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = rooms)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RoomRow {
    pub room_num: String,
    pub dormitory_id: i64,
    pub floor: Option<i32>,
    pub room_type: Option<String>,
    pub block: Option<String>,
    pub occupancy: i32,
    pub last_inspect: Option<String>,
    pub duration: Option<String>,
}

impl From<RoomRow> for Room {
    fn from(row: RoomRow) -> Self {
        Self {
            key: RoomKey::new(row.room_num, DormitoryId::new(row.dormitory_id)),
            floor: row.floor,
            room_type: row.room_type,
            block: row.block,
            occupancy: row.occupancy,
            last_inspect: row.last_inspect,
            duration: row.duration,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = students)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct StudentRow {
    pub id: i64,
    pub name: String,
    pub major: Option<String>,
    pub email: Option<String>,
    pub phone_num: Option<String>,
    pub status: Option<String>,
    pub password: String,
    pub room_num: Option<String>,
    pub dormitory_id: Option<i64>,
    pub roommate_id: Option<i64>,
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        let room = match (row.room_num, row.dormitory_id) {
            (Some(num), Some(dorm)) => Some(RoomKey::new(num, DormitoryId::new(dorm))),
            _ => None,
        };
        Self {
            id: StudentId::new(row.id),
            name: row.name,
            major: row.major,
            email: row.email,
            phone_num: row.phone_num,
            status: row.status,
            password: Password::new(row.password),
            room,
            roommate: row.roommate_id.map(StudentId::new),
        }
    }
}

/// Room and roommate columns written when occupancy changes.
///
/// `treat_none_as_null` so that clearing a room actually nulls the columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = students)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct StudentPlacement<'a> {
    pub room_num: Option<&'a str>,
    pub dormitory_id: Option<i64>,
    pub roommate_id: Option<i64>,
}

impl<'a> From<&'a Student> for StudentPlacement<'a> {
    fn from(student: &'a Student) -> Self {
        Self {
            room_num: student.room.as_ref().map(|key| key.room_num.as_str()),
            dormitory_id: student.room.as_ref().map(|key| key.dormitory_id.get()),
            roommate_id: student.roommate.map(StudentId::get),
        }
    }
}

// ---------------------------------------------------------------------------
// Announcements
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = announcements)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AnnouncementRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub date_time: DateTime<Utc>,
    pub manager_id: i64,
}

impl From<AnnouncementRow> for Announcement {
    fn from(row: AnnouncementRow) -> Self {
        Self {
            id: AnnouncementId::new(row.id),
            title: row.title,
            description: row.description,
            date_time: row.date_time,
            manager_id: ManagerId::new(row.manager_id),
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = announcements)]
pub(crate) struct NewAnnouncementRow<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub date_time: DateTime<Utc>,
    pub manager_id: i64,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = announcements)]
pub(crate) struct AnnouncementUpdate<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub date_time: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Complaints
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = complaint_repairs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ComplaintRow {
    pub id: i64,
    pub description: String,
    pub service_type: Option<String>,
    pub date_time: DateTime<Utc>,
    pub priority_lvl: Option<String>,
    pub status: String,
    pub student_id: i64,
}

impl TryFrom<ComplaintRow> for ComplaintRepair {
    type Error = String;

    fn try_from(row: ComplaintRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse::<ComplaintStatus>()
            .map_err(|err| err.to_string())?;
        Ok(Self {
            id: ComplaintId::new(row.id),
            description: row.description,
            service_type: row.service_type,
            date_time: row.date_time,
            priority_lvl: row.priority_lvl,
            status,
            student_id: StudentId::new(row.student_id),
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = complaint_repairs)]
pub(crate) struct NewComplaintRow<'a> {
    pub description: &'a str,
    pub service_type: Option<&'a str>,
    pub date_time: DateTime<Utc>,
    pub priority_lvl: Option<&'a str>,
    pub status: &'a str,
    pub student_id: i64,
}

// ---------------------------------------------------------------------------
// Check-in/out requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = check_in_outs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CheckInOutRow {
    pub id: i64,
    pub student_id: i64,
    pub date: NaiveDate,
    pub kind: String,
    pub status: String,
}

impl TryFrom<CheckInOutRow> for CheckInOut {
    type Error = String;

    fn try_from(row: CheckInOutRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CheckInOutId::new(row.id),
            student_id: StudentId::new(row.student_id),
            date: row.date,
            kind: row
                .kind
                .parse::<MovementKind>()
                .map_err(|err| err.to_string())?,
            status: row
                .status
                .parse::<CheckInOutStatus>()
                .map_err(|err| err.to_string())?,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = check_in_outs)]
pub(crate) struct NewCheckInOutRow<'a> {
    pub student_id: i64,
    pub date: NaiveDate,
    pub kind: &'a str,
    pub status: &'a str,
}
