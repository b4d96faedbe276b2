//! HTTP inbound adapter exposing the REST API under `/api`.

pub mod auth;
pub mod dto;
pub mod error;
pub mod health;
pub mod manager;
pub mod schemas;
pub mod state;
pub mod student;
#[cfg(test)]
pub(crate) mod test_utils;
pub(crate) mod validation;

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, web};

use crate::domain::Error;

pub use error::ApiResult;

fn rejected_input(kind: &str, err: impl std::fmt::Display) -> actix_web::Error {
    Error::invalid_request(format!("invalid {kind}: {err}")).into()
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    rejected_input("request body", err)
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    rejected_input("query string", err)
}

fn path_error(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    rejected_input("path", err)
}

/// Register every `/api` handler.
///
/// Literal segments such as `search`, `pending` and `dateAsc` are registered
/// before the parameterised routes they share a prefix with. Extractor
/// failures such as a malformed body or a non-numeric id are reported as
/// `invalid_request` errors.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(json_error))
            .app_data(web::QueryConfig::default().error_handler(query_error))
            .app_data(web::PathConfig::default().error_handler(path_error))
            .service(auth::login)
            .service(auth::change_student_password)
            .service(auth::change_manager_password)
            .service(student::dashboard)
            .service(student::room)
            .service(student::create_service_request)
            .service(student::service_history)
            .service(student::submit_check_in_out)
            .service(student::check_in_out_history)
            .service(student::announcements_ascending)
            .service(student::announcements_descending)
            .service(student::announcements)
            .service(manager::dashboard::dashboard)
            .service(manager::rooms::search_rooms)
            .service(manager::rooms::list_rooms)
            .service(manager::rooms::assign_room)
            .service(manager::rooms::reassign_room)
            .service(manager::rooms::remove_student)
            .service(manager::rooms::available_students)
            .service(manager::requests::pending_check_in_outs)
            .service(manager::requests::list_check_in_outs)
            .service(manager::requests::approve_check_in_out)
            .service(manager::requests::reject_check_in_out)
            .service(manager::requests::pending_complaints)
            .service(manager::requests::list_complaints)
            .service(manager::requests::update_complaint_status)
            .service(manager::announcements::search_announcements)
            .service(manager::announcements::list_announcements)
            .service(manager::announcements::publish_announcement)
            .service(manager::announcements::revise_announcement)
            .service(manager::announcements::delete_announcement),
    );
}
