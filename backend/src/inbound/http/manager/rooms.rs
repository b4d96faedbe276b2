//! Room allocation handlers.
//!
//! ```text
//! GET    /api/manager/100/rooms
//! GET    /api/manager/100/rooms/search?searchTerm=A10
//! POST   /api/manager/100/rooms/assign {"studentId":1004,"roomNum":"A102"}
//! PUT    /api/manager/100/rooms/reassign {"studentId":1003,"roomNum":"A103"}
//! DELETE /api/manager/100/rooms/remove-student/1003
//! GET    /api/manager/100/students/available
//! ```

use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::manager_id;
use crate::domain::{Error, StudentId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::{MessageResponse, RoomResponse, StudentResponse, convert_all};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, missing_field_error, required_text};

/// Body of the assign and reassign endpoints.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomAssignmentRequest {
    #[schema(example = 1004)]
    pub student_id: Option<i64>,
    #[schema(example = "A102")]
    pub room_num: Option<String>,
}

impl RoomAssignmentRequest {
    fn into_parts(self) -> Result<(StudentId, String), Error> {
        let student = self
            .student_id
            .map(StudentId::new)
            .ok_or_else(|| missing_field_error(FieldName::new("studentId")))?;
        let room_num = required_text(self.room_num, FieldName::new("roomNum"))?;
        Ok((student, room_num.trim().to_owned()))
    }
}

#[derive(Debug, Deserialize, Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct RoomSearchQuery {
    /// Fragment of the room number.
    pub search_term: Option<String>,
}

/// Rooms in the manager's dormitory, ordered by room number.
#[utoipa::path(
    get,
    path = "/api/manager/{manager_id}/rooms",
    params(("manager_id" = i64, Path, description = "Manager identifier")),
    responses(
        (status = 200, description = "Rooms", body = [RoomResponse]),
        (status = 404, description = "Manager has no dormitory", body = ErrorSchema)
    ),
    tags = ["manager"],
    operation_id = "listRooms"
)]
#[get("/manager/{manager_id}/rooms")]
pub async fn list_rooms(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<Vec<RoomResponse>>> {
    let rooms = state.rooms.list_rooms(manager_id(path)).await?;
    Ok(web::Json(convert_all(rooms)))
}

/// First room whose number contains the search term.
#[utoipa::path(
    get,
    path = "/api/manager/{manager_id}/rooms/search",
    params(("manager_id" = i64, Path, description = "Manager identifier"), RoomSearchQuery),
    responses(
        (status = 200, description = "Matching room", body = RoomResponse),
        (status = 400, description = "Missing search term", body = ErrorSchema),
        (status = 404, description = "No room found", body = ErrorSchema)
    ),
    tags = ["manager"],
    operation_id = "searchRooms"
)]
#[get("/manager/{manager_id}/rooms/search")]
pub async fn search_rooms(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    query: web::Query<RoomSearchQuery>,
) -> ApiResult<web::Json<RoomResponse>> {
    let term = required_text(
        query.into_inner().search_term,
        FieldName::new("searchTerm"),
    )?;
    let room = state
        .rooms
        .search_room(manager_id(path), term.trim())
        .await?;
    Ok(web::Json(room.into()))
}

/// Place a student without a room into a room of the manager's dormitory.
#[utoipa::path(
    post,
    path = "/api/manager/{manager_id}/rooms/assign",
    params(("manager_id" = i64, Path, description = "Manager identifier")),
    request_body = RoomAssignmentRequest,
    responses(
        (status = 200, description = "Room assigned", body = MessageResponse),
        (status = 400, description = "Room full or student already housed", body = ErrorSchema),
        (status = 404, description = "Student, room or dormitory not found", body = ErrorSchema)
    ),
    tags = ["manager"],
    operation_id = "assignRoom"
)]
#[post("/manager/{manager_id}/rooms/assign")]
pub async fn assign_room(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<RoomAssignmentRequest>,
) -> ApiResult<web::Json<MessageResponse>> {
    let (student, room_num) = payload.into_inner().into_parts()?;
    state
        .rooms
        .assign(manager_id(path), student, &room_num)
        .await?;
    Ok(web::Json(MessageResponse::new("Room assigned successfully")))
}

/// Move a student out of their current room and into another.
#[utoipa::path(
    put,
    path = "/api/manager/{manager_id}/rooms/reassign",
    params(("manager_id" = i64, Path, description = "Manager identifier")),
    request_body = RoomAssignmentRequest,
    responses(
        (status = 200, description = "Room reassigned", body = MessageResponse),
        (status = 400, description = "Target room full", body = ErrorSchema),
        (status = 404, description = "Student, room or dormitory not found", body = ErrorSchema)
    ),
    tags = ["manager"],
    operation_id = "reassignRoom"
)]
#[put("/manager/{manager_id}/rooms/reassign")]
pub async fn reassign_room(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<RoomAssignmentRequest>,
) -> ApiResult<web::Json<MessageResponse>> {
    let (student, room_num) = payload.into_inner().into_parts()?;
    state
        .rooms
        .reassign(manager_id(path), student, &room_num)
        .await?;
    Ok(web::Json(MessageResponse::new("Room reassigned successfully")))
}

/// Take a student out of their room. A student without a room is left as is.
#[utoipa::path(
    delete,
    path = "/api/manager/{manager_id}/rooms/remove-student/{student_id}",
    params(
        ("manager_id" = i64, Path, description = "Manager identifier"),
        ("student_id" = i64, Path, description = "Student number")
    ),
    responses(
        (status = 200, description = "Student removed", body = MessageResponse),
        (status = 404, description = "Student not found", body = ErrorSchema)
    ),
    tags = ["manager"],
    operation_id = "removeStudentFromRoom"
)]
#[delete("/manager/{manager_id}/rooms/remove-student/{student_id}")]
pub async fn remove_student(
    state: web::Data<HttpState>,
    path: web::Path<(i64, i64)>,
) -> ApiResult<web::Json<MessageResponse>> {
    let (_, student) = path.into_inner();
    state.rooms.remove_student(StudentId::new(student)).await?;
    Ok(web::Json(MessageResponse::new(
        "Student removed from room successfully",
    )))
}

/// Students who currently have no room.
#[utoipa::path(
    get,
    path = "/api/manager/{manager_id}/students/available",
    params(("manager_id" = i64, Path, description = "Manager identifier")),
    responses(
        (status = 200, description = "Students without a room", body = [StudentResponse])
    ),
    tags = ["manager"],
    operation_id = "listAvailableStudents"
)]
#[get("/manager/{manager_id}/students/available")]
pub async fn available_students(
    state: web::Data<HttpState>,
    _path: web::Path<i64>,
) -> ApiResult<web::Json<Vec<StudentResponse>>> {
    let students = state.rooms.available_students().await?;
    Ok(web::Json(convert_all(students)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::student::fixtures::student;
    use crate::domain::{DormitoryId, ManagerId, Room, RoomKey};
    use crate::inbound::http::test_utils::{MockPorts, call};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use mockall::predicate::eq;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn room(num: &str, occupancy: i32) -> Room {
        Room {
            key: RoomKey::new(num, DormitoryId::new(1)),
            floor: Some(1),
            room_type: Some("Double".to_owned()),
            block: Some("A".to_owned()),
            occupancy,
            last_inspect: None,
            duration: None,
        }
    }

    #[rstest]
    #[actix_web::test]
    async fn assign_confirms_with_message() {
        let mut ports = MockPorts::default();
        ports
            .rooms
            .expect_assign()
            .withf(|manager, student, num| {
                *manager == ManagerId::new(100) && *student == StudentId::new(1004) && num == "A102"
            })
            .times(1)
            .return_once(|_, _, _| Ok(()));

        let request = actix_test::TestRequest::post()
            .uri("/api/manager/100/rooms/assign")
            .set_json(json!({"studentId": 1004, "roomNum": " A102 "}))
            .to_request();
        let (status, body) = call(ports, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Room assigned successfully"}));
    }

    #[rstest]
    #[actix_web::test]
    async fn full_room_is_bad_request_with_code() {
        let mut ports = MockPorts::default();
        ports.rooms.expect_assign().return_once(|_, _, _| {
            Err(Error::invalid_request("Room is already full")
                .with_details(json!({"code": "room_full", "roomNum": "A101"})))
        });

        let request = actix_test::TestRequest::post()
            .uri("/api/manager/100/rooms/assign")
            .set_json(json!({"studentId": 1004, "roomNum": "A101"}))
            .to_request();
        let (status, body) = call(ports, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body.pointer("/details/code").and_then(Value::as_str),
            Some("room_full")
        );
    }

    #[rstest]
    #[case(json!({"roomNum": "A102"}), "studentId")]
    #[case(json!({"studentId": 1004}), "roomNum")]
    #[actix_web::test]
    async fn incomplete_assignment_is_rejected(#[case] payload: Value, #[case] field: &str) {
        let request = actix_test::TestRequest::put()
            .uri("/api/manager/100/rooms/reassign")
            .set_json(payload)
            .to_request();
        let (status, body) = call(MockPorts::default(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body.pointer("/details/field").and_then(Value::as_str),
            Some(field)
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn remove_student_uses_student_segment() {
        let mut ports = MockPorts::default();
        ports
            .rooms
            .expect_remove_student()
            .with(eq(StudentId::new(1003)))
            .times(1)
            .return_once(|_| Ok(()));

        let request = actix_test::TestRequest::delete()
            .uri("/api/manager/100/rooms/remove-student/1003")
            .to_request();
        let (status, body) = call(ports, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body.get("message").and_then(Value::as_str),
            Some("Student removed from room successfully")
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn search_returns_single_room() {
        let mut ports = MockPorts::default();
        ports
            .rooms
            .expect_search_room()
            .withf(|manager, term| *manager == ManagerId::new(100) && term == "A10")
            .return_once(|_, _| Ok(room("A101", 2)));

        let request = actix_test::TestRequest::get()
            .uri("/api/manager/100/rooms/search?searchTerm=A10")
            .to_request();
        let (status, body) = call(ports, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.get("roomNum").and_then(Value::as_str), Some("A101"));
        assert_eq!(body.get("occupancy").and_then(Value::as_i64), Some(2));
    }

    #[rstest]
    #[actix_web::test]
    async fn search_without_match_is_not_found() {
        let mut ports = MockPorts::default();
        ports
            .rooms
            .expect_search_room()
            .return_once(|_, _| Err(Error::not_found("No room found")));

        let request = actix_test::TestRequest::get()
            .uri("/api/manager/100/rooms/search?searchTerm=Z9")
            .to_request();
        let (status, _) = call(ports, request).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[rstest]
    #[actix_web::test]
    async fn available_students_hide_passwords() {
        let mut ports = MockPorts::default();
        ports
            .rooms
            .expect_available_students()
            .return_once(|| Ok(vec![student(1004, "Dana"), student(1005, "Eli")]));

        let request = actix_test::TestRequest::get()
            .uri("/api/manager/100/students/available")
            .to_request();
        let (status, body) = call(ports, request).await;

        assert_eq!(status, StatusCode::OK);
        let items = body.as_array().expect("array");
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| item.get("password").is_none()));
    }
}
