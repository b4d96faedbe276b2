//! In-memory repository adapter.
//!
//! Backs every repository port with maps guarded by one async mutex. The
//! server falls back to it when no database URL is configured, and the
//! integration tests drive the HTTP surface through it. Occupancy changes are
//! applied under a single lock so partially written assignments are never
//! observable.

use std::collections::BTreeMap;

use tokio::sync::Mutex;

use crate::domain::{
    Announcement, AnnouncementId, CheckInOut, CheckInOutId, ComplaintId, ComplaintRepair,
    Dormitory, DormitoryId, DormitoryManager, ManagerId, Room, RoomKey, Student, StudentId,
};

mod fixtures;
mod repositories;

#[derive(Debug, Default)]
struct MemoryState {
    students: BTreeMap<StudentId, Student>,
    rooms: BTreeMap<RoomKey, Room>,
    dormitories: BTreeMap<DormitoryId, Dormitory>,
    managers: BTreeMap<ManagerId, DormitoryManager>,
    announcements: BTreeMap<AnnouncementId, Announcement>,
    complaints: BTreeMap<ComplaintId, ComplaintRepair>,
    check_in_outs: BTreeMap<CheckInOutId, CheckInOut>,
    sequences: IdSequences,
}

impl MemoryState {
    fn dormitory_of_student(&self, id: StudentId) -> Option<DormitoryId> {
        self.students
            .get(&id)
            .and_then(|student| student.room.as_ref())
            .map(|room| room.dormitory_id)
    }
}

/// Repository adapter holding all records in process memory.
///
/// ```
/// use dormitory::outbound::memory::InMemoryStore;
///
/// let store = InMemoryStore::with_fixtures();
/// # drop(store);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<MemoryState>,
}

/// Last identifier issued per table.
///
/// Identifiers only move forward, so a deleted record's id is never handed
/// out again.
#[derive(Debug, Default)]
struct IdSequences {
    announcements: i64,
    complaints: i64,
    check_in_outs: i64,
}

/// Advance `last` and return the new identifier.
fn next_id(last: &mut i64) -> i64 {
    *last += 1;
    *last
}
