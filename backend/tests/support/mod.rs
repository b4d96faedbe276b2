//! Shared wiring for HTTP integration tests over the in-memory store.

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use serde_json::Value;

use dormitory::Trace;
use dormitory::domain::{
    AnnouncementService, AuthenticationService, CheckInOutService, ComplaintService,
    DashboardService, DashboardSources, RoomService,
};
use dormitory::inbound::http::configure_api;
use dormitory::inbound::http::state::HttpState;
use dormitory::outbound::memory::InMemoryStore;

/// Clock pinned after every fixture record, so published items sort first.
struct PinnedClock(DateTime<Utc>);

impl Clock for PinnedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn pinned_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 10, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn state_over(store: Arc<InMemoryStore>) -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(PinnedClock(pinned_now()));
    HttpState {
        auth: Arc::new(AuthenticationService::new(store.clone(), store.clone())),
        rooms: Arc::new(RoomService::new(store.clone(), store.clone(), store.clone())),
        check_in_outs: Arc::new(CheckInOutService::new(
            store.clone(),
            store.clone(),
            store.clone(),
        )),
        complaints: Arc::new(ComplaintService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            clock.clone(),
        )),
        announcements: Arc::new(AnnouncementService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            clock,
        )),
        dashboards: Arc::new(DashboardService::new(DashboardSources {
            students: store.clone(),
            rooms: store.clone(),
            dormitories: store.clone(),
            announcements: store.clone(),
            complaints: store.clone(),
            check_in_outs: store,
        })),
    }
}

/// The full `/api` surface over a freshly seeded store.
pub async fn seeded_app()
-> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    let state = state_over(Arc::new(InMemoryStore::with_fixtures()));
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .configure(configure_api),
    )
    .await
}

/// Send a request and decode the JSON body, `Value::Null` when empty.
pub async fn send<S>(app: &S, request: Request) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let response = test::call_service(app, request).await;
    let status = response.status();
    let bytes = test::read_body(response).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is JSON")
    };
    (status, body)
}

/// `id` of every element of a JSON array.
pub fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("id").and_then(Value::as_i64))
                .collect()
        })
        .unwrap_or_default()
}
