//! Driving port for login and password changes.
//!
//! Inbound adapters call this port without knowing how accounts are stored,
//! which keeps HTTP handler tests free of persistence wiring.

use async_trait::async_trait;

use crate::domain::{AuthenticationOutcome, Error, LoginCredentials, ManagerId, PasswordChange, StudentId};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Check credentials. Rejections are returned as an outcome, not an error.
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthenticationOutcome, Error>;

    /// Replace a student's password after verifying the current one.
    async fn change_student_password(
        &self,
        id: StudentId,
        change: &PasswordChange,
    ) -> Result<(), Error>;

    /// Replace a manager's password after verifying the current one.
    async fn change_manager_password(
        &self,
        id: ManagerId,
        change: &PasswordChange,
    ) -> Result<(), Error>;
}
