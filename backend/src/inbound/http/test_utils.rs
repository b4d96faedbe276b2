//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_http::Request;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use serde_json::Value;

use crate::domain::ports::{
    MockAnnouncementBoard, MockAuthenticator, MockCheckInOutWorkflow, MockComplaintDesk,
    MockDashboardQuery, MockRoomManagement,
};
use crate::inbound::http::configure_api;
use crate::inbound::http::state::HttpState;

/// One mock per driving port. Unused mocks fail the test if called.
#[derive(Default)]
pub(crate) struct MockPorts {
    pub auth: MockAuthenticator,
    pub rooms: MockRoomManagement,
    pub check_in_outs: MockCheckInOutWorkflow,
    pub complaints: MockComplaintDesk,
    pub announcements: MockAnnouncementBoard,
    pub dashboards: MockDashboardQuery,
}

impl MockPorts {
    pub(crate) fn into_state(self) -> HttpState {
        HttpState {
            auth: Arc::new(self.auth),
            rooms: Arc::new(self.rooms),
            check_in_outs: Arc::new(self.check_in_outs),
            complaints: Arc::new(self.complaints),
            announcements: Arc::new(self.announcements),
            dashboards: Arc::new(self.dashboards),
        }
    }
}

/// Send `request` through the full API surface backed by `ports`.
///
/// Returns the status and the JSON body, or `Value::Null` for an empty body.
pub(crate) async fn call(ports: MockPorts, request: Request) -> (StatusCode, Value) {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(ports.into_state()))
            .configure(configure_api),
    )
    .await;
    let response = actix_test::call_service(&app, request).await;
    let status = response.status();
    let bytes = actix_test::read_body(response).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is JSON")
    };
    (status, body)
}
