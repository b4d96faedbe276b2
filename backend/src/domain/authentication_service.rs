//! Credential checks for students and managers.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::{Authenticator, DormitoryRepository, StudentRepository};
use crate::domain::{
    AuthenticatedUser, AuthenticationOutcome, Error, LoginCredentials, LoginRejection, ManagerId,
    Password, PasswordChange, StudentId, UserType,
};

/// Authentication service backed by the student and manager stores.
#[derive(Clone)]
pub struct AuthenticationService<S, D> {
    students: Arc<S>,
    dormitories: Arc<D>,
}

impl<S, D> AuthenticationService<S, D> {
    pub fn new(students: Arc<S>, dormitories: Arc<D>) -> Self {
        Self {
            students,
            dormitories,
        }
    }
}

fn check(stored: &Password, submitted: &str, user: AuthenticatedUser) -> AuthenticationOutcome {
    if stored.matches(submitted) {
        AuthenticationOutcome::Authenticated(user)
    } else {
        AuthenticationOutcome::Rejected(LoginRejection::InvalidPassword)
    }
}

fn wrong_old_password() -> Error {
    Error::unauthorized("Old password is incorrect")
}

impl<S, D> AuthenticationService<S, D>
where
    S: StudentRepository,
    D: DormitoryRepository,
{
    async fn student_login(&self, credentials: &LoginCredentials) -> Result<AuthenticationOutcome, Error> {
        let Some(student) = self
            .students
            .find_by_id(StudentId::new(credentials.id()))
            .await?
        else {
            return Ok(AuthenticationOutcome::Rejected(LoginRejection::StudentNotFound));
        };
        let user = AuthenticatedUser {
            user_id: student.id.get(),
            user_type: UserType::Student,
            name: student.name.clone(),
            email: student.email.clone(),
        };
        Ok(check(&student.password, credentials.password(), user))
    }

    async fn manager_login(&self, credentials: &LoginCredentials) -> Result<AuthenticationOutcome, Error> {
        let Some(manager) = self
            .dormitories
            .find_manager(ManagerId::new(credentials.id()))
            .await?
        else {
            return Ok(AuthenticationOutcome::Rejected(LoginRejection::ManagerNotFound));
        };
        let user = AuthenticatedUser {
            user_id: manager.id.get(),
            user_type: UserType::Manager,
            name: manager.name.clone(),
            email: manager.email.clone(),
        };
        Ok(check(&manager.password, credentials.password(), user))
    }
}

#[async_trait]
impl<S, D> Authenticator for AuthenticationService<S, D>
where
    S: StudentRepository,
    D: DormitoryRepository,
{
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthenticationOutcome, Error> {
        let outcome = match credentials.user_type().parse::<UserType>() {
            Ok(UserType::Student) => self.student_login(credentials).await?,
            Ok(UserType::Manager) => self.manager_login(credentials).await?,
            Err(_) => AuthenticationOutcome::Rejected(LoginRejection::InvalidUserType),
        };

        match &outcome {
            AuthenticationOutcome::Authenticated(user) => {
                info!(user = user.user_id, user_type = %user.user_type, "login accepted");
            }
            AuthenticationOutcome::Rejected(reason) => {
                warn!(user = credentials.id(), %reason, "login rejected");
            }
        }
        Ok(outcome)
    }

    async fn change_student_password(
        &self,
        id: StudentId,
        change: &PasswordChange,
    ) -> Result<(), Error> {
        let student = self
            .students
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found("Student not found"))?;
        if !student.password.matches(change.old_password()) {
            return Err(wrong_old_password());
        }
        self.students
            .update_password(id, &Password::new(change.new_password()))
            .await?;
        info!(student = %id, "student password changed");
        Ok(())
    }

    async fn change_manager_password(
        &self,
        id: ManagerId,
        change: &PasswordChange,
    ) -> Result<(), Error> {
        let manager = self
            .dormitories
            .find_manager(id)
            .await?
            .ok_or_else(|| Error::not_found("Manager not found"))?;
        if !manager.password.matches(change.old_password()) {
            return Err(wrong_old_password());
        }
        self.dormitories
            .update_manager_password(id, &Password::new(change.new_password()))
            .await?;
        info!(manager = %id, "manager password changed");
        Ok(())
    }
}
