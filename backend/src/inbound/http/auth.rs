//! Login and password-change handlers.
//!
//! ```text
//! POST /api/auth/login {"id":1001,"password":"student123","userType":"student"}
//! POST /api/auth/student/1001/change-password?oldPassword=a&newPassword=b
//! POST /api/auth/manager/100/change-password?oldPassword=a&newPassword=b
//! ```
//!
//! A refused login is answered with `401` and `success: false` rather than
//! the shared error envelope so clients can branch on one field.

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    AuthenticatedUser, AuthenticationOutcome, LoginCredentials, ManagerId, PasswordChange,
    StudentId,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::MessageResponse;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Account identifier as sent by clients: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AccountIdInput {
    Number(i64),
    Text(String),
}

impl AccountIdInput {
    fn parse(&self) -> Option<i64> {
        match self {
            Self::Number(id) => Some(*id),
            Self::Text(raw) => raw.trim().parse().ok(),
        }
    }
}

/// Login request body for `POST /api/auth/login`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[schema(value_type = i64, example = 1001)]
    pub id: AccountIdInput,
    pub password: String,
    /// `student` or `manager`, case-insensitive.
    #[schema(example = "student")]
    pub user_type: String,
}

/// Login outcome. Identity fields are present only when `success` is true.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl AuthenticationResponse {
    fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            user_id: None,
            user_type: None,
            name: None,
            email: None,
        }
    }
}

impl From<AuthenticatedUser> for AuthenticationResponse {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            success: true,
            message: "Login successful".to_owned(),
            user_id: Some(user.user_id),
            user_type: Some(user.user_type.as_str().to_owned()),
            name: Some(user.name),
            email: user.email,
        }
    }
}

/// Query parameters for the password-change endpoints.
#[derive(Debug, Deserialize, Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PasswordChangeQuery {
    pub old_password: String,
    pub new_password: String,
}

impl From<PasswordChangeQuery> for PasswordChange {
    fn from(query: PasswordChangeQuery) -> Self {
        Self::new(query.old_password, query.new_password)
    }
}

/// Check a student's or manager's credentials.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = AuthenticationResponse),
        (status = 401, description = "Login refused", body = AuthenticationResponse),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "login"
)]
#[post("/auth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let LoginRequest {
        id,
        password,
        user_type,
    } = payload.into_inner();
    let Some(id) = id.parse() else {
        return Ok(HttpResponse::Unauthorized().json(AuthenticationResponse::rejected(
            "Invalid user id",
        )));
    };

    let credentials = LoginCredentials::new(id, password, user_type);
    match state.auth.login(&credentials).await? {
        AuthenticationOutcome::Authenticated(user) => {
            Ok(HttpResponse::Ok().json(AuthenticationResponse::from(user)))
        }
        AuthenticationOutcome::Rejected(reason) => {
            info!(user = id, %reason, "login refused");
            Ok(HttpResponse::Unauthorized().json(AuthenticationResponse::rejected(
                reason.to_string(),
            )))
        }
    }
}

/// Replace a student's password after checking the current one.
#[utoipa::path(
    post,
    path = "/api/auth/student/{student_id}/change-password",
    params(
        ("student_id" = i64, Path, description = "Student number"),
        PasswordChangeQuery
    ),
    responses(
        (status = 200, description = "Password changed", body = MessageResponse),
        (status = 401, description = "Old password is incorrect", body = ErrorSchema),
        (status = 404, description = "Student not found", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "changeStudentPassword"
)]
#[post("/auth/student/{student_id}/change-password")]
pub async fn change_student_password(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    query: web::Query<PasswordChangeQuery>,
) -> ApiResult<web::Json<MessageResponse>> {
    let change = PasswordChange::from(query.into_inner());
    state
        .auth
        .change_student_password(StudentId::new(path.into_inner()), &change)
        .await?;
    Ok(web::Json(MessageResponse::new("Password changed successfully")))
}

/// Replace a manager's password after checking the current one.
#[utoipa::path(
    post,
    path = "/api/auth/manager/{manager_id}/change-password",
    params(
        ("manager_id" = i64, Path, description = "Manager identifier"),
        PasswordChangeQuery
    ),
    responses(
        (status = 200, description = "Password changed", body = MessageResponse),
        (status = 401, description = "Old password is incorrect", body = ErrorSchema),
        (status = 404, description = "Manager not found", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "changeManagerPassword"
)]
#[post("/auth/manager/{manager_id}/change-password")]
pub async fn change_manager_password(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    query: web::Query<PasswordChangeQuery>,
) -> ApiResult<web::Json<MessageResponse>> {
    let change = PasswordChange::from(query.into_inner());
    state
        .auth
        .change_manager_password(ManagerId::new(path.into_inner()), &change)
        .await?;
    Ok(web::Json(MessageResponse::new("Password changed successfully")))
}
