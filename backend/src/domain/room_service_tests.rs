//! Tests for the room allocation service.

use std::sync::Arc;

use mockall::predicate::eq;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{
    MockDormitoryRepository, MockRoomRepository, MockStudentRepository, RoomRepositoryError,
};
use crate::domain::student::fixtures::student;
use crate::domain::{Dormitory, DormitoryId, ErrorCode, ROOM_CAPACITY};

const MANAGER: ManagerId = ManagerId::new(9);
const DORM: DormitoryId = DormitoryId::new(1);

fn dormitory() -> Dormitory {
    Dormitory {
        id: DORM,
        building_num: Some("B1".to_owned()),
        building_name: Some("North Hall".to_owned()),
        address: None,
        phone_num: None,
        email: None,
        manager_id: Some(MANAGER),
    }
}

fn room(occupancy: i32) -> Room {
    Room {
        key: RoomKey::new("A101", DORM),
        floor: Some(1),
        room_type: Some("Double".to_owned()),
        block: Some("A".to_owned()),
        occupancy,
        last_inspect: None,
        duration: None,
    }
}

#[fixture]
fn dormitories() -> MockDormitoryRepository {
    let mut repo = MockDormitoryRepository::new();
    repo.expect_find_by_manager()
        .with(eq(MANAGER))
        .returning(|_| Ok(Some(dormitory())));
    repo
}

fn service(
    students: MockStudentRepository,
    rooms: MockRoomRepository,
    dormitories: MockDormitoryRepository,
) -> RoomService<MockStudentRepository, MockRoomRepository, MockDormitoryRepository> {
    RoomService::new(Arc::new(students), Arc::new(rooms), Arc::new(dormitories))
}

#[rstest]
#[tokio::test]
async fn assign_fills_second_bed_and_pairs_roommates(dormitories: MockDormitoryRepository) {
    let mut occupant = student(1, "Alice");
    occupant.room = Some(RoomKey::new("A101", DORM));
    let newcomer = student(2, "Bea");

    let mut students = MockStudentRepository::new();
    students
        .expect_find_by_id()
        .with(eq(StudentId::new(2)))
        .return_once(move |_| Ok(Some(newcomer)));
    students
        .expect_list_by_room()
        .return_once(move |_| Ok(vec![occupant]));

    let mut rooms = MockRoomRepository::new();
    rooms.expect_find().return_once(|_| Ok(Some(room(1))));
    rooms
        .expect_apply_occupancy_change()
        .times(1)
        .withf(|change| {
            let [newcomer, occupant] = change.students.as_slice() else {
                return false;
            };
            change.room.occupancy == ROOM_CAPACITY
                && newcomer.room == Some(RoomKey::new("A101", DORM))
                && newcomer.roommate == Some(StudentId::new(1))
                && occupant.roommate == Some(StudentId::new(2))
        })
        .return_once(|_| Ok(()));

    service(students, rooms, dormitories)
        .assign(MANAGER, StudentId::new(2), "A101")
        .await
        .expect("assignment succeeds");
}

#[rstest]
#[tokio::test]
async fn assign_to_full_room_is_rejected_without_writing(dormitories: MockDormitoryRepository) {
    let mut students = MockStudentRepository::new();
    students
        .expect_find_by_id()
        .return_once(|_| Ok(Some(student(3, "Cara"))));
    students.expect_list_by_room().times(0);

    let mut rooms = MockRoomRepository::new();
    rooms.expect_find().return_once(|_| Ok(Some(room(ROOM_CAPACITY))));
    rooms.expect_apply_occupancy_change().times(0);

    let error = service(students, rooms, dormitories)
        .assign(MANAGER, StudentId::new(3), "A101")
        .await
        .expect_err("full room");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.message(), "Room is already full");
    assert_eq!(
        error.details().and_then(|d| d.get("code")),
        Some(&serde_json::json!("room_full"))
    );
}

#[rstest]
#[case::unknown_student(None, Some(0), "Student not found")]
#[case::unknown_room(Some(()), None, "Room not found")]
#[tokio::test]
async fn assign_reports_missing_records(
    dormitories: MockDormitoryRepository,
    #[case] student_present: Option<()>,
    #[case] room_occupancy: Option<i32>,
    #[case] message: &str,
) {
    let mut students = MockStudentRepository::new();
    students
        .expect_find_by_id()
        .return_once(move |_| Ok(student_present.map(|()| student(4, "Dana"))));

    let mut rooms = MockRoomRepository::new();
    rooms.expect_find().returning(move |_| Ok(room_occupancy.map(room)));
    rooms.expect_apply_occupancy_change().times(0);

    let error = service(students, rooms, dormitories)
        .assign(MANAGER, StudentId::new(4), "A101")
        .await
        .expect_err("missing record");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), message);
}

#[rstest]
#[tokio::test]
async fn assign_rejects_student_who_already_has_a_room(dormitories: MockDormitoryRepository) {
    let mut housed = student(5, "Eve");
    housed.room = Some(RoomKey::new("B202", DORM));

    let mut students = MockStudentRepository::new();
    students.expect_find_by_id().return_once(move |_| Ok(Some(housed)));
    let mut rooms = MockRoomRepository::new();
    rooms.expect_find().return_once(|_| Ok(Some(room(0))));
    rooms.expect_apply_occupancy_change().times(0);

    let error = service(students, rooms, dormitories)
        .assign(MANAGER, StudentId::new(5), "A101")
        .await
        .expect_err("already housed");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[tokio::test]
async fn remove_student_without_room_is_a_no_op() {
    let mut students = MockStudentRepository::new();
    students
        .expect_find_by_id()
        .return_once(|_| Ok(Some(student(6, "Fay"))));
    let mut rooms = MockRoomRepository::new();
    rooms.expect_find().times(0);
    rooms.expect_apply_occupancy_change().times(0);

    service(students, rooms, MockDormitoryRepository::new())
        .remove_student(StudentId::new(6))
        .await
        .expect("no-op succeeds");
}

#[rstest]
#[tokio::test]
async fn remove_student_frees_bed_and_clears_pairing() {
    let key = RoomKey::new("A101", DORM);
    let mut leaving = student(7, "Gus");
    leaving.room = Some(key.clone());
    leaving.roommate = Some(StudentId::new(8));
    let mut staying = student(8, "Hal");
    staying.room = Some(key);
    staying.roommate = Some(StudentId::new(7));

    let mut students = MockStudentRepository::new();
    students
        .expect_find_by_id()
        .with(eq(StudentId::new(7)))
        .return_once(move |_| Ok(Some(leaving)));
    students
        .expect_find_by_id()
        .with(eq(StudentId::new(8)))
        .return_once(move |_| Ok(Some(staying)));

    let mut rooms = MockRoomRepository::new();
    rooms.expect_find().return_once(|_| Ok(Some(room(2))));
    rooms
        .expect_apply_occupancy_change()
        .times(1)
        .withf(|change| {
            change.room.occupancy == 1
                && change
                    .students
                    .iter()
                    .all(|s| s.roommate.is_none())
                && change
                    .students
                    .iter()
                    .any(|s| s.id == StudentId::new(7) && s.room.is_none())
        })
        .return_once(|_| Ok(()));

    service(students, rooms, MockDormitoryRepository::new())
        .remove_student(StudentId::new(7))
        .await
        .expect("removal succeeds");
}

#[rstest]
#[tokio::test]
async fn manager_without_dormitory_gets_not_found() {
    let mut dormitories = MockDormitoryRepository::new();
    dormitories.expect_find_by_manager().return_once(|_| Ok(None));

    let error = service(
        MockStudentRepository::new(),
        MockRoomRepository::new(),
        dormitories,
    )
    .list_rooms(ManagerId::new(42))
    .await
    .expect_err("no dormitory");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(
        error.message(),
        "Manager with ID 42 is not assigned to any dormitory or not found"
    );
}

#[rstest]
#[tokio::test]
async fn search_without_match_is_not_found(dormitories: MockDormitoryRepository) {
    let mut rooms = MockRoomRepository::new();
    rooms
        .expect_search()
        .withf(|dorm, term| *dorm == DORM && term == "Z9")
        .return_once(|_, _| Ok(None));

    let error = service(MockStudentRepository::new(), rooms, dormitories)
        .search_room(MANAGER, " Z9 ")
        .await
        .expect_err("no match");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn connection_failures_surface_as_service_unavailable(dormitories: MockDormitoryRepository) {
    let mut rooms = MockRoomRepository::new();
    rooms
        .expect_list_by_dormitory()
        .return_once(|_| Err(RoomRepositoryError::connection("pool exhausted")));

    let error = service(MockStudentRepository::new(), rooms, dormitories)
        .list_rooms(MANAGER)
        .await
        .expect_err("store down");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}

#[rstest]
#[tokio::test]
async fn room_info_for_unassigned_student_is_empty() {
    let mut students = MockStudentRepository::new();
    students
        .expect_find_by_id()
        .return_once(|_| Ok(Some(student(10, "Ivy"))));

    let info = service(
        students,
        MockRoomRepository::new(),
        MockDormitoryRepository::new(),
    )
    .room_info(StudentId::new(10))
    .await
    .expect("room info");

    assert!(info.room.is_none());
    assert!(info.roommate.is_none());
}
