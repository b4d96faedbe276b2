//! Check-in/out approvals and complaint handling for managers.

use actix_web::{get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use super::manager_id;
use crate::domain::{CheckInOutId, ComplaintId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::{
    CheckInOutResponse, ComplaintResponse, MessageResponse, convert_all,
};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_complaint_status;

#[derive(Debug, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ComplaintStatusQuery {
    /// New status. Defaults to `APPROVED`.
    #[param(example = "IN_PROGRESS")]
    pub status: Option<String>,
}

/// Check-in/out requests from students housed in the manager's dormitory.
#[utoipa::path(
    get,
    path = "/api/manager/{manager_id}/checkinout",
    params(("manager_id" = i64, Path, description = "Manager identifier")),
    responses(
        (status = 200, description = "Requests", body = [CheckInOutResponse]),
        (status = 404, description = "Manager has no dormitory", body = ErrorSchema)
    ),
    tags = ["manager"],
    operation_id = "listCheckInOuts"
)]
#[get("/manager/{manager_id}/checkinout")]
pub async fn list_check_in_outs(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<Vec<CheckInOutResponse>>> {
    let requests = state.check_in_outs.list_for_manager(manager_id(path)).await?;
    Ok(web::Json(convert_all(requests)))
}

/// Every pending check-in/out request.
#[utoipa::path(
    get,
    path = "/api/manager/{manager_id}/checkinout/pending",
    params(("manager_id" = i64, Path, description = "Manager identifier")),
    responses((status = 200, description = "Pending requests", body = [CheckInOutResponse])),
    tags = ["manager"],
    operation_id = "listPendingCheckInOuts"
)]
#[get("/manager/{manager_id}/checkinout/pending")]
pub async fn pending_check_in_outs(
    state: web::Data<HttpState>,
    _path: web::Path<i64>,
) -> ApiResult<web::Json<Vec<CheckInOutResponse>>> {
    let requests = state.check_in_outs.pending().await?;
    Ok(web::Json(convert_all(requests)))
}

#[utoipa::path(
    post,
    path = "/api/manager/{manager_id}/checkinout/{request_id}/approve",
    params(
        ("manager_id" = i64, Path, description = "Manager identifier"),
        ("request_id" = i64, Path, description = "Check-in/out request identifier")
    ),
    responses(
        (status = 200, description = "Request approved", body = MessageResponse),
        (status = 404, description = "Request not found", body = ErrorSchema)
    ),
    tags = ["manager"],
    operation_id = "approveCheckInOut"
)]
#[post("/manager/{manager_id}/checkinout/{request_id}/approve")]
pub async fn approve_check_in_out(
    state: web::Data<HttpState>,
    path: web::Path<(i64, i64)>,
) -> ApiResult<web::Json<MessageResponse>> {
    let (_, request) = path.into_inner();
    state
        .check_in_outs
        .approve(CheckInOutId::new(request))
        .await?;
    Ok(web::Json(MessageResponse::new("Request approved successfully")))
}

#[utoipa::path(
    post,
    path = "/api/manager/{manager_id}/checkinout/{request_id}/reject",
    params(
        ("manager_id" = i64, Path, description = "Manager identifier"),
        ("request_id" = i64, Path, description = "Check-in/out request identifier")
    ),
    responses(
        (status = 200, description = "Request rejected", body = MessageResponse),
        (status = 404, description = "Request not found", body = ErrorSchema)
    ),
    tags = ["manager"],
    operation_id = "rejectCheckInOut"
)]
#[post("/manager/{manager_id}/checkinout/{request_id}/reject")]
pub async fn reject_check_in_out(
    state: web::Data<HttpState>,
    path: web::Path<(i64, i64)>,
) -> ApiResult<web::Json<MessageResponse>> {
    let (_, request) = path.into_inner();
    state
        .check_in_outs
        .reject(CheckInOutId::new(request))
        .await?;
    Ok(web::Json(MessageResponse::new("Request rejected successfully")))
}

/// Complaints from students housed in the manager's dormitory.
#[utoipa::path(
    get,
    path = "/api/manager/{manager_id}/complaints",
    params(("manager_id" = i64, Path, description = "Manager identifier")),
    responses(
        (status = 200, description = "Complaints", body = [ComplaintResponse]),
        (status = 404, description = "Manager has no dormitory", body = ErrorSchema)
    ),
    tags = ["manager"],
    operation_id = "listComplaints"
)]
#[get("/manager/{manager_id}/complaints")]
pub async fn list_complaints(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<Vec<ComplaintResponse>>> {
    let complaints = state.complaints.list_for_manager(manager_id(path)).await?;
    Ok(web::Json(convert_all(complaints)))
}

/// Every pending complaint.
#[utoipa::path(
    get,
    path = "/api/manager/{manager_id}/complaints/pending",
    params(("manager_id" = i64, Path, description = "Manager identifier")),
    responses((status = 200, description = "Pending complaints", body = [ComplaintResponse])),
    tags = ["manager"],
    operation_id = "listPendingComplaints"
)]
#[get("/manager/{manager_id}/complaints/pending")]
pub async fn pending_complaints(
    state: web::Data<HttpState>,
    _path: web::Path<i64>,
) -> ApiResult<web::Json<Vec<ComplaintResponse>>> {
    let complaints = state.complaints.pending().await?;
    Ok(web::Json(convert_all(complaints)))
}

/// Move a complaint to a new status.
#[utoipa::path(
    put,
    path = "/api/manager/{manager_id}/complaints/{complaint_id}/status",
    params(
        ("manager_id" = i64, Path, description = "Manager identifier"),
        ("complaint_id" = i64, Path, description = "Complaint identifier"),
        ComplaintStatusQuery
    ),
    responses(
        (status = 200, description = "Status updated", body = MessageResponse),
        (status = 400, description = "Unknown status", body = ErrorSchema),
        (status = 404, description = "Complaint not found", body = ErrorSchema)
    ),
    tags = ["manager"],
    operation_id = "updateComplaintStatus"
)]
#[put("/manager/{manager_id}/complaints/{complaint_id}/status")]
pub async fn update_complaint_status(
    state: web::Data<HttpState>,
    path: web::Path<(i64, i64)>,
    query: web::Query<ComplaintStatusQuery>,
) -> ApiResult<web::Json<MessageResponse>> {
    let (_, complaint) = path.into_inner();
    let status = parse_complaint_status(query.status.as_deref())?;
    state
        .complaints
        .update_status(ComplaintId::new(complaint), status)
        .await?;
    Ok(web::Json(MessageResponse::new(
        "Complaint status updated successfully",
    )))
}
