//! Manager dashboard handler.

use actix_web::{get, web};

use super::manager_id;
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::ManagerDashboardResponse;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Headline counts and recent announcements for a manager.
#[utoipa::path(
    get,
    path = "/api/manager/{manager_id}/dashboard",
    params(("manager_id" = i64, Path, description = "Manager identifier")),
    responses(
        (status = 200, description = "Dashboard", body = ManagerDashboardResponse),
        (status = 404, description = "Manager has no dormitory", body = ErrorSchema)
    ),
    tags = ["manager"],
    operation_id = "getManagerDashboard"
)]
#[get("/manager/{manager_id}/dashboard")]
pub async fn dashboard(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<ManagerDashboardResponse>> {
    let view = state.dashboards.manager_dashboard(manager_id(path)).await?;
    Ok(web::Json(view.into()))
}
