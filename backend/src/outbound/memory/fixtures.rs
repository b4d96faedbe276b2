//! Seed records for running without a database.

use chrono::{DateTime, NaiveDate, Utc};
use tokio::sync::Mutex;

use super::{IdSequences, InMemoryStore, MemoryState};
use crate::domain::{
    Announcement, AnnouncementId, CheckInOut, CheckInOutId, CheckInOutStatus, ComplaintId,
    ComplaintRepair, ComplaintStatus, Dormitory, DormitoryId, DormitoryManager, ManagerId,
    MovementKind, Password, Room, RoomKey, Student, StudentId,
};

const NORTH_HALL: DormitoryId = DormitoryId::new(1);
const SOUTH_HALL: DormitoryId = DormitoryId::new(2);

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn timestamp(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    date(year, month, day)
        .and_hms_opt(hour, 0, 0)
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

fn last_key(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().unwrap_or(0)
}

fn dormitory(id: DormitoryId, number: &str, name: &str, manager: i64) -> Dormitory {
    Dormitory {
        id,
        building_num: Some(number.to_owned()),
        building_name: Some(name.to_owned()),
        address: Some(format!("{name}, Campus Road")),
        phone_num: None,
        email: Some(format!("{}@dorm.example", number.to_lowercase())),
        manager_id: Some(ManagerId::new(manager)),
    }
}

fn manager(id: i64, name: &str) -> DormitoryManager {
    DormitoryManager {
        id: ManagerId::new(id),
        name: name.to_owned(),
        phone: None,
        email: Some(format!("manager{id}@dorm.example")),
        password: Password::new("admin123"),
    }
}

fn room(num: &str, dormitory: DormitoryId, floor: i32, occupancy: i32) -> Room {
    Room {
        key: RoomKey::new(num, dormitory),
        floor: Some(floor),
        room_type: Some("Double".to_owned()),
        block: num.get(..1).map(str::to_owned),
        occupancy,
        last_inspect: None,
        duration: Some("2024/2025".to_owned()),
    }
}

fn student(id: i64, name: &str, major: &str) -> Student {
    Student {
        id: StudentId::new(id),
        name: name.to_owned(),
        major: Some(major.to_owned()),
        email: Some(format!("{id}@students.example")),
        phone_num: None,
        status: Some("Active".to_owned()),
        password: Password::new("student123"),
        room: None,
        roommate: None,
    }
}

impl InMemoryStore {
    /// A store seeded with two dormitories, their managers and a handful of
    /// students, rooms and requests.
    ///
    /// Manager passwords are `admin123`; student passwords are `student123`.
    pub fn with_fixtures() -> Self {
        let mut state = MemoryState::default();

        for dorm in [
            dormitory(NORTH_HALL, "B1", "North Hall", 100),
            dormitory(SOUTH_HALL, "B2", "South Hall", 200),
        ] {
            state.dormitories.insert(dorm.id, dorm);
        }
        for account in [manager(100, "Morgan Reyes"), manager(200, "Jordan Lee")] {
            state.managers.insert(account.id, account);
        }
        for r in [
            room("A101", NORTH_HALL, 1, 2),
            room("A102", NORTH_HALL, 1, 1),
            room("A103", NORTH_HALL, 1, 0),
            room("B201", NORTH_HALL, 2, 0),
            room("C101", SOUTH_HALL, 1, 0),
        ] {
            state.rooms.insert(r.key.clone(), r);
        }

        let mut alice = student(1001, "Alice Novak", "Physics");
        let mut ben = student(1002, "Ben Okafor", "History");
        alice.move_in(RoomKey::new("A101", NORTH_HALL));
        ben.move_in(RoomKey::new("A101", NORTH_HALL));
        alice.pair_with(&mut ben);
        let mut chen = student(1003, "Chen Wei", "Mathematics");
        chen.move_in(RoomKey::new("A102", NORTH_HALL));
        for s in [
            alice,
            ben,
            chen,
            student(1004, "Dana Silva", "Biology"),
            student(1005, "Eli Haddad", "Economics"),
        ] {
            state.students.insert(s.id, s);
        }

        for a in [
            Announcement {
                id: AnnouncementId::new(1),
                title: "Welcome week".to_owned(),
                description: "Keys are handed out at the front desk.".to_owned(),
                date_time: timestamp(2024, 9, 1, 9),
                manager_id: ManagerId::new(100),
            },
            Announcement {
                id: AnnouncementId::new(2),
                title: "Water maintenance".to_owned(),
                description: "Hot water is off on Friday morning.".to_owned(),
                date_time: timestamp(2024, 9, 5, 14),
                manager_id: ManagerId::new(100),
            },
        ] {
            state.announcements.insert(a.id, a);
        }

        let complaint = ComplaintRepair {
            id: ComplaintId::new(1),
            description: "Radiator does not heat up".to_owned(),
            service_type: Some("Heating".to_owned()),
            date_time: timestamp(2024, 9, 6, 18),
            priority_lvl: Some("High".to_owned()),
            status: ComplaintStatus::Pending,
            student_id: StudentId::new(1001),
        };
        state.complaints.insert(complaint.id, complaint);

        let movement = CheckInOut {
            id: CheckInOutId::new(1),
            student_id: StudentId::new(1003),
            date: date(2024, 9, 2),
            kind: MovementKind::CheckIn,
            status: CheckInOutStatus::Pending,
        };
        state.check_in_outs.insert(movement.id, movement);

        state.sequences = IdSequences {
            announcements: last_key(state.announcements.keys().map(|id| id.get())),
            complaints: last_key(state.complaints.keys().map(|id| id.get())),
            check_in_outs: last_key(state.check_in_outs.keys().map(|id| id.get())),
        };

        Self {
            state: Mutex::new(state),
        }
    }
}
