//! Driving port for dashboard read models.

use async_trait::async_trait;

use crate::domain::{Error, ManagerDashboard, ManagerId, StudentDashboard, StudentId};

/// Aggregated views recomputed on every call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DashboardQuery: Send + Sync {
    /// Room plus recent activity for a student.
    async fn student_dashboard(&self, student: StudentId) -> Result<StudentDashboard, Error>;

    /// Headline counts for a manager.
    async fn manager_dashboard(&self, manager: ManagerId) -> Result<ManagerDashboard, Error>;
}
