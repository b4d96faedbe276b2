//! Wiring of repositories into the driving ports held by [`HttpState`].

use std::sync::Arc;

use mockable::{Clock, DefaultClock};

use dormitory::domain::ports::{
    AnnouncementRepository, CheckInOutRepository, ComplaintRepository, DormitoryRepository,
    RoomRepository, StudentRepository,
};
use dormitory::domain::{
    AnnouncementService, AuthenticationService, CheckInOutService, ComplaintService,
    DashboardService, DashboardSources, RoomService,
};
use dormitory::inbound::http::state::HttpState;
use dormitory::outbound::memory::InMemoryStore;
use dormitory::outbound::persistence::{
    DbPool, DieselAnnouncementRepository, DieselCheckInOutRepository, DieselComplaintRepository,
    DieselDormitoryRepository, DieselRoomRepository, DieselStudentRepository,
};
use tracing::info;

use super::ServerConfig;

/// One adapter per driven port.
struct Repositories<S, R, D, A, C, K> {
    students: Arc<S>,
    rooms: Arc<R>,
    dormitories: Arc<D>,
    announcements: Arc<A>,
    complaints: Arc<C>,
    check_in_outs: Arc<K>,
}

impl
    Repositories<
        DieselStudentRepository,
        DieselRoomRepository,
        DieselDormitoryRepository,
        DieselAnnouncementRepository,
        DieselComplaintRepository,
        DieselCheckInOutRepository,
    >
{
    fn diesel(pool: &DbPool) -> Self {
        Self {
            students: Arc::new(DieselStudentRepository::new(pool.clone())),
            rooms: Arc::new(DieselRoomRepository::new(pool.clone())),
            dormitories: Arc::new(DieselDormitoryRepository::new(pool.clone())),
            announcements: Arc::new(DieselAnnouncementRepository::new(pool.clone())),
            complaints: Arc::new(DieselComplaintRepository::new(pool.clone())),
            check_in_outs: Arc::new(DieselCheckInOutRepository::new(pool.clone())),
        }
    }
}

impl
    Repositories<
        InMemoryStore,
        InMemoryStore,
        InMemoryStore,
        InMemoryStore,
        InMemoryStore,
        InMemoryStore,
    >
{
    fn in_memory(store: &Arc<InMemoryStore>) -> Self {
        Self {
            students: store.clone(),
            rooms: store.clone(),
            dormitories: store.clone(),
            announcements: store.clone(),
            complaints: store.clone(),
            check_in_outs: store.clone(),
        }
    }
}

fn wire<S, R, D, A, C, K>(repos: Repositories<S, R, D, A, C, K>, clock: Arc<dyn Clock>) -> HttpState
where
    S: StudentRepository + 'static,
    R: RoomRepository + 'static,
    D: DormitoryRepository + 'static,
    A: AnnouncementRepository + 'static,
    C: ComplaintRepository + 'static,
    K: CheckInOutRepository + 'static,
{
    let Repositories {
        students,
        rooms,
        dormitories,
        announcements,
        complaints,
        check_in_outs,
    } = repos;

    HttpState {
        auth: Arc::new(AuthenticationService::new(
            students.clone(),
            dormitories.clone(),
        )),
        rooms: Arc::new(RoomService::new(
            students.clone(),
            rooms.clone(),
            dormitories.clone(),
        )),
        check_in_outs: Arc::new(CheckInOutService::new(
            check_in_outs.clone(),
            students.clone(),
            dormitories.clone(),
        )),
        complaints: Arc::new(ComplaintService::new(
            complaints.clone(),
            students.clone(),
            dormitories.clone(),
            clock.clone(),
        )),
        announcements: Arc::new(AnnouncementService::new(
            announcements.clone(),
            students.clone(),
            dormitories.clone(),
            clock,
        )),
        dashboards: Arc::new(DashboardService::new(DashboardSources {
            students,
            rooms,
            dormitories,
            announcements,
            complaints,
            check_in_outs,
        })),
    }
}

/// Build the handler state from the configured backend.
///
/// PostgreSQL adapters are used when a pool is configured; otherwise every
/// port is served by one [`InMemoryStore`] seeded with demo records.
pub(super) fn build_http_state(config: &ServerConfig) -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    match &config.db_pool {
        Some(pool) => wire(Repositories::diesel(pool), clock),
        None => {
            info!("no database configured; serving in-memory fixture data");
            let store = Arc::new(InMemoryStore::with_fixtures());
            wire(Repositories::in_memory(&store), clock)
        }
    }
}

/// Handler state over an explicit in-memory store.
#[cfg(test)]
pub(super) fn in_memory_state(store: &Arc<InMemoryStore>, clock: Arc<dyn Clock>) -> HttpState {
    wire(Repositories::in_memory(store), clock)
}
