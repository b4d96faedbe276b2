//! Authentication primitives.
//!
//! Login is a stateless equality check against the stored credential. A
//! rejected login is a normal outcome, not an error: callers receive a
//! [`LoginRejection`] describing why. Errors are reserved for store failures.

use std::fmt;
use std::str::FromStr;

use zeroize::Zeroizing;

/// Which kind of account a login targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserType {
    Student,
    Manager,
}

/// Raised for user types other than `student` or `manager`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid user type")]
pub struct UnknownUserType;

impl UserType {
    /// Lower-case spelling used in responses.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Manager => "manager",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = UnknownUserType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("student") {
            Ok(Self::Student)
        } else if s.eq_ignore_ascii_case("manager") {
            Ok(Self::Manager)
        } else {
            Err(UnknownUserType)
        }
    }
}

/// Submitted login credentials.
///
/// `user_type` stays a raw string so that an unrecognised value can be
/// reported as a rejected login rather than a malformed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    id: i64,
    password: Zeroizing<String>,
    user_type: String,
}

impl LoginCredentials {
    /// Bundle raw login inputs.
    pub fn new(id: i64, password: impl Into<String>, user_type: impl Into<String>) -> Self {
        Self {
            id,
            password: Zeroizing::new(password.into()),
            user_type: user_type.into(),
        }
    }

    /// Account identifier.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Password as typed by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Raw user type string.
    pub fn user_type(&self) -> &str {
        self.user_type.as_str()
    }
}

/// Identity returned for a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub user_type: UserType,
    pub name: String,
    pub email: Option<String>,
}

/// Reason a login was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoginRejection {
    #[error("Student not found")]
    StudentNotFound,
    #[error("Manager not found")]
    ManagerNotFound,
    #[error("Invalid password")]
    InvalidPassword,
    #[error("Invalid user type")]
    InvalidUserType,
}

/// Result of checking a set of credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationOutcome {
    Authenticated(AuthenticatedUser),
    Rejected(LoginRejection),
}

/// Request to replace an account password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordChange {
    old_password: Zeroizing<String>,
    new_password: Zeroizing<String>,
}

impl PasswordChange {
    /// Bundle the current and replacement passwords.
    pub fn new(old_password: impl Into<String>, new_password: impl Into<String>) -> Self {
        Self {
            old_password: Zeroizing::new(old_password.into()),
            new_password: Zeroizing::new(new_password.into()),
        }
    }

    /// Password the caller claims is current.
    pub fn old_password(&self) -> &str {
        self.old_password.as_str()
    }

    /// Replacement password.
    pub fn new_password(&self) -> &str {
        self.new_password.as_str()
    }
}
