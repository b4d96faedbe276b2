//! OpenAPI document for the REST API.
//!
//! Served through Swagger UI in debug builds and written to stdout by the
//! `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::auth::{AuthenticationResponse, LoginRequest};
use crate::inbound::http::dto::{
    AnnouncementResponse, CheckInOutResponse, ComplaintResponse, ManagerDashboardResponse,
    MessageResponse, RoomInfoResponse, RoomResponse, StudentDashboardResponse, StudentResponse,
};
use crate::inbound::http::manager::announcements::AnnouncementRequest;
use crate::inbound::http::manager::rooms::RoomAssignmentRequest;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::student::{CheckInOutRequest, ServiceRequest};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dormitory management API",
        description = "Rooms, check-in/out approvals, complaints and announcements for students and dormitory managers."
    ),
    servers((url = "/", description = "Relative to the deployment base URL")),
    paths(
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::change_student_password,
        crate::inbound::http::auth::change_manager_password,
        crate::inbound::http::student::dashboard,
        crate::inbound::http::student::room,
        crate::inbound::http::student::create_service_request,
        crate::inbound::http::student::service_history,
        crate::inbound::http::student::submit_check_in_out,
        crate::inbound::http::student::check_in_out_history,
        crate::inbound::http::student::announcements,
        crate::inbound::http::student::announcements_ascending,
        crate::inbound::http::student::announcements_descending,
        crate::inbound::http::manager::dashboard::dashboard,
        crate::inbound::http::manager::rooms::list_rooms,
        crate::inbound::http::manager::rooms::search_rooms,
        crate::inbound::http::manager::rooms::assign_room,
        crate::inbound::http::manager::rooms::reassign_room,
        crate::inbound::http::manager::rooms::remove_student,
        crate::inbound::http::manager::rooms::available_students,
        crate::inbound::http::manager::requests::list_check_in_outs,
        crate::inbound::http::manager::requests::pending_check_in_outs,
        crate::inbound::http::manager::requests::approve_check_in_out,
        crate::inbound::http::manager::requests::reject_check_in_out,
        crate::inbound::http::manager::requests::list_complaints,
        crate::inbound::http::manager::requests::pending_complaints,
        crate::inbound::http::manager::requests::update_complaint_status,
        crate::inbound::http::manager::announcements::list_announcements,
        crate::inbound::http::manager::announcements::search_announcements,
        crate::inbound::http::manager::announcements::publish_announcement,
        crate::inbound::http::manager::announcements::revise_announcement,
        crate::inbound::http::manager::announcements::delete_announcement,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        MessageResponse,
        LoginRequest,
        AuthenticationResponse,
        RoomResponse,
        StudentResponse,
        RoomInfoResponse,
        AnnouncementResponse,
        ComplaintResponse,
        CheckInOutResponse,
        StudentDashboardResponse,
        ManagerDashboardResponse,
        RoomAssignmentRequest,
        AnnouncementRequest,
        ServiceRequest,
        CheckInOutRequest,
    )),
    tags(
        (name = "auth", description = "Login and password changes"),
        (name = "student", description = "Endpoints used by residents"),
        (name = "manager", description = "Endpoints used by dormitory managers"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/api/auth/login")]
    #[case("/api/student/{student_id}/checkinout")]
    #[case("/api/manager/{manager_id}/rooms/remove-student/{student_id}")]
    #[case("/api/manager/{manager_id}/complaints/{complaint_id}/status")]
    #[case("/health/ready")]
    fn document_lists_path(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[test]
    fn error_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        assert!(schemas.contains_key("crate.domain.Error"));
        assert!(schemas.contains_key("RoomResponse"));
    }

    #[test]
    fn announcement_paths_share_one_entry_per_method_set() {
        let doc = ApiDoc::openapi();
        let item = doc
            .paths
            .paths
            .get("/api/manager/{manager_id}/announcements/{announcement_id}")
            .expect("announcement item path");
        let json = serde_json::to_value(item).expect("path item serialises");
        assert!(json.get("put").is_some());
        assert!(json.get("delete").is_some());
    }
}
