//! Manager-facing handlers under `/api/manager/{manager_id}`.
//!
//! Room endpoints resolve the manager's dormitory first and answer `404` when
//! the manager runs none. Request approval and announcement edits address
//! records by id; the manager segment is accepted for routing only.

pub mod announcements;
pub mod dashboard;
pub mod requests;
pub mod rooms;

use actix_web::web;

use crate::domain::ManagerId;

fn manager_id(path: web::Path<i64>) -> ManagerId {
    ManagerId::new(path.into_inner())
}
