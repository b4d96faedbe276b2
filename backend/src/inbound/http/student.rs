//! Student-facing handlers under `/api/student/{student_id}`.
//!
//! ```text
//! GET  /api/student/1001/dashboard
//! GET  /api/student/1001/room
//! POST /api/student/1001/service/request {"description":"Leaking tap","serviceType":"Plumbing","priorityLvl":"High"}
//! GET  /api/student/1001/service/history
//! POST /api/student/1001/checkinout {"type":"Check-out","date":"2024-12-20"}
//! GET  /api/student/1001/checkinout/history
//! GET  /api/student/1001/announcements[/dateAsc|/dateDesc]
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{AnnouncementOrder, ComplaintSubmission, StudentId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::{
    AnnouncementResponse, CheckInOutResponse, ComplaintResponse, RoomInfoResponse,
    StudentDashboardResponse, convert_all,
};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, parse_date, parse_movement_kind, required_text,
};

/// Body of `POST /service/request`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    pub description: Option<String>,
    pub service_type: Option<String>,
    pub priority_lvl: Option<String>,
}

impl TryFrom<ServiceRequest> for ComplaintSubmission {
    type Error = crate::domain::Error;

    fn try_from(request: ServiceRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            description: required_text(request.description, FieldName::new("description"))?,
            service_type: request.service_type,
            priority_lvl: request.priority_lvl,
        })
    }
}

/// Body of `POST /checkinout`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CheckInOutRequest {
    /// `Check-in` or `Check-out`.
    #[serde(rename = "type")]
    #[schema(example = "Check-in")]
    pub kind: Option<String>,
    #[schema(example = "2024-09-01")]
    pub date: Option<String>,
}

fn student_id(path: web::Path<i64>) -> StudentId {
    StudentId::new(path.into_inner())
}

/// Room, recent requests and announcements for a student.
#[utoipa::path(
    get,
    path = "/api/student/{student_id}/dashboard",
    params(("student_id" = i64, Path, description = "Student number")),
    responses(
        (status = 200, description = "Dashboard", body = StudentDashboardResponse),
        (status = 404, description = "Student not found", body = ErrorSchema)
    ),
    tags = ["student"],
    operation_id = "getStudentDashboard"
)]
#[get("/student/{student_id}/dashboard")]
pub async fn dashboard(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<StudentDashboardResponse>> {
    let view = state.dashboards.student_dashboard(student_id(path)).await?;
    Ok(web::Json(view.into()))
}

/// The student's room and roommate.
#[utoipa::path(
    get,
    path = "/api/student/{student_id}/room",
    params(("student_id" = i64, Path, description = "Student number")),
    responses(
        (status = 200, description = "Room information", body = RoomInfoResponse),
        (status = 404, description = "Student not found", body = ErrorSchema)
    ),
    tags = ["student"],
    operation_id = "getStudentRoom"
)]
#[get("/student/{student_id}/room")]
pub async fn room(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<RoomInfoResponse>> {
    let info = state.rooms.room_info(student_id(path)).await?;
    Ok(web::Json(info.into()))
}

/// File a complaint or repair request.
#[utoipa::path(
    post,
    path = "/api/student/{student_id}/service/request",
    params(("student_id" = i64, Path, description = "Student number")),
    request_body = ServiceRequest,
    responses(
        (status = 201, description = "Request filed", body = ComplaintResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Student not found", body = ErrorSchema)
    ),
    tags = ["student"],
    operation_id = "createServiceRequest"
)]
#[post("/student/{student_id}/service/request")]
pub async fn create_service_request(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<ServiceRequest>,
) -> ApiResult<HttpResponse> {
    let submission = ComplaintSubmission::try_from(payload.into_inner())?;
    let complaint = state
        .complaints
        .submit(student_id(path), submission)
        .await?;
    Ok(HttpResponse::Created().json(ComplaintResponse::from(complaint)))
}

/// Every complaint the student has filed, newest first.
#[utoipa::path(
    get,
    path = "/api/student/{student_id}/service/history",
    params(("student_id" = i64, Path, description = "Student number")),
    responses(
        (status = 200, description = "Complaint history", body = [ComplaintResponse])
    ),
    tags = ["student"],
    operation_id = "getServiceHistory"
)]
#[get("/student/{student_id}/service/history")]
pub async fn service_history(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<Vec<ComplaintResponse>>> {
    let history = state.complaints.history(student_id(path)).await?;
    Ok(web::Json(convert_all(history)))
}

/// Submit a check-in or check-out request for approval.
#[utoipa::path(
    post,
    path = "/api/student/{student_id}/checkinout",
    params(("student_id" = i64, Path, description = "Student number")),
    request_body = CheckInOutRequest,
    responses(
        (status = 201, description = "Request submitted", body = CheckInOutResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Student not found", body = ErrorSchema)
    ),
    tags = ["student"],
    operation_id = "submitCheckInOut"
)]
#[post("/student/{student_id}/checkinout")]
pub async fn submit_check_in_out(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<CheckInOutRequest>,
) -> ApiResult<HttpResponse> {
    let CheckInOutRequest { kind, date } = payload.into_inner();
    let kind = parse_movement_kind(kind)?;
    let date = parse_date(date, FieldName::new("date"))?;
    let request = state
        .check_in_outs
        .submit(student_id(path), kind, date)
        .await?;
    Ok(HttpResponse::Created().json(CheckInOutResponse::from(request)))
}

/// Every check-in/out request the student has made, newest first.
#[utoipa::path(
    get,
    path = "/api/student/{student_id}/checkinout/history",
    params(("student_id" = i64, Path, description = "Student number")),
    responses(
        (status = 200, description = "Request history", body = [CheckInOutResponse])
    ),
    tags = ["student"],
    operation_id = "getCheckInOutHistory"
)]
#[get("/student/{student_id}/checkinout/history")]
pub async fn check_in_out_history(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<Vec<CheckInOutResponse>>> {
    let history = state.check_in_outs.history(student_id(path)).await?;
    Ok(web::Json(convert_all(history)))
}

async fn announcements_in_order(
    state: &HttpState,
    student: StudentId,
    order: AnnouncementOrder,
) -> ApiResult<web::Json<Vec<AnnouncementResponse>>> {
    let items = state.announcements.for_student(student, order).await?;
    Ok(web::Json(convert_all(items)))
}

/// Announcements for the student's dormitory, newest first.
///
/// Students without a room get an empty list.
#[utoipa::path(
    get,
    path = "/api/student/{student_id}/announcements",
    params(("student_id" = i64, Path, description = "Student number")),
    responses(
        (status = 200, description = "Announcements", body = [AnnouncementResponse]),
        (status = 404, description = "Student not found", body = ErrorSchema)
    ),
    tags = ["student"],
    operation_id = "getStudentAnnouncements"
)]
#[get("/student/{student_id}/announcements")]
pub async fn announcements(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<Vec<AnnouncementResponse>>> {
    announcements_in_order(&state, student_id(path), AnnouncementOrder::Descending).await
}

/// Announcements for the student's dormitory, oldest first.
#[utoipa::path(
    get,
    path = "/api/student/{student_id}/announcements/dateAsc",
    params(("student_id" = i64, Path, description = "Student number")),
    responses(
        (status = 200, description = "Announcements", body = [AnnouncementResponse]),
        (status = 404, description = "Student not found", body = ErrorSchema)
    ),
    tags = ["student"],
    operation_id = "getStudentAnnouncementsAscending"
)]
#[get("/student/{student_id}/announcements/dateAsc")]
pub async fn announcements_ascending(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<Vec<AnnouncementResponse>>> {
    announcements_in_order(&state, student_id(path), AnnouncementOrder::Ascending).await
}

/// Announcements for the student's dormitory, newest first.
#[utoipa::path(
    get,
    path = "/api/student/{student_id}/announcements/dateDesc",
    params(("student_id" = i64, Path, description = "Student number")),
    responses(
        (status = 200, description = "Announcements", body = [AnnouncementResponse]),
        (status = 404, description = "Student not found", body = ErrorSchema)
    ),
    tags = ["student"],
    operation_id = "getStudentAnnouncementsDescending"
)]
#[get("/student/{student_id}/announcements/dateDesc")]
pub async fn announcements_descending(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<Vec<AnnouncementResponse>>> {
    announcements_in_order(&state, student_id(path), AnnouncementOrder::Descending).await
}

#[cfg(test)]
#[path = "student_tests.rs"]
mod tests;
