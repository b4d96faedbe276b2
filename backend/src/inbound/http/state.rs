//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` and depend only on
//! the driving ports, so handler tests can swap in mocks or the in-memory
//! services without touching a database.

use std::sync::Arc;

use crate::domain::ports::{
    AnnouncementBoard, Authenticator, CheckInOutWorkflow, ComplaintDesk, DashboardQuery,
    RoomManagement,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub auth: Arc<dyn Authenticator>,
    pub rooms: Arc<dyn RoomManagement>,
    pub check_in_outs: Arc<dyn CheckInOutWorkflow>,
    pub complaints: Arc<dyn ComplaintDesk>,
    pub announcements: Arc<dyn AnnouncementBoard>,
    pub dashboards: Arc<dyn DashboardQuery>,
}
