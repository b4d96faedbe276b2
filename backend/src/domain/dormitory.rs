//! Dormitory buildings and their managers.

use super::ids::{DormitoryId, ManagerId};
use super::password::Password;

/// A dormitory building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dormitory {
    pub id: DormitoryId,
    pub building_num: Option<String>,
    pub building_name: Option<String>,
    pub address: Option<String>,
    pub phone_num: Option<String>,
    pub email: Option<String>,
    /// Manager responsible for the building.
    pub manager_id: Option<ManagerId>,
}

/// Staff member managing a dormitory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DormitoryManager {
    pub id: ManagerId,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub password: Password,
}
