//! Announcement publishing for managers.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::manager_id;
use crate::domain::{AnnouncementContent, AnnouncementId, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::{AnnouncementResponse, MessageResponse, convert_all};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, required_text};

/// Body of the publish and revise endpoints.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AnnouncementRequest {
    #[schema(example = "Water outage")]
    pub title: Option<String>,
    #[schema(example = "No water on Friday between 9 and 12.")]
    pub description: Option<String>,
}

impl TryFrom<AnnouncementRequest> for AnnouncementContent {
    type Error = Error;

    fn try_from(request: AnnouncementRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            title: required_text(request.title, FieldName::new("title"))?,
            description: required_text(request.description, FieldName::new("description"))?,
        })
    }
}

#[derive(Debug, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AnnouncementSearchQuery {
    /// Title fragment; empty matches everything.
    pub keyword: Option<String>,
}

/// Announcements the manager has published, newest first.
#[utoipa::path(
    get,
    path = "/api/manager/{manager_id}/announcements",
    params(("manager_id" = i64, Path, description = "Manager identifier")),
    responses((status = 200, description = "Announcements", body = [AnnouncementResponse])),
    tags = ["manager"],
    operation_id = "listManagerAnnouncements"
)]
#[get("/manager/{manager_id}/announcements")]
pub async fn list_announcements(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<Vec<AnnouncementResponse>>> {
    let announcements = state.announcements.by_manager(manager_id(path)).await?;
    Ok(web::Json(convert_all(announcements)))
}

#[utoipa::path(
    get,
    path = "/api/manager/{manager_id}/announcements/search",
    params(
        ("manager_id" = i64, Path, description = "Manager identifier"),
        AnnouncementSearchQuery
    ),
    responses((status = 200, description = "Matching announcements", body = [AnnouncementResponse])),
    tags = ["manager"],
    operation_id = "searchAnnouncements"
)]
#[get("/manager/{manager_id}/announcements/search")]
pub async fn search_announcements(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    query: web::Query<AnnouncementSearchQuery>,
) -> ApiResult<web::Json<Vec<AnnouncementResponse>>> {
    let keyword = query.into_inner().keyword.unwrap_or_default();
    let announcements = state
        .announcements
        .search(manager_id(path), keyword.trim())
        .await?;
    Ok(web::Json(convert_all(announcements)))
}

#[utoipa::path(
    post,
    path = "/api/manager/{manager_id}/announcements",
    params(("manager_id" = i64, Path, description = "Manager identifier")),
    request_body = AnnouncementRequest,
    responses(
        (status = 201, description = "Announcement published", body = AnnouncementResponse),
        (status = 400, description = "Missing title or description", body = ErrorSchema),
        (status = 404, description = "Manager not found", body = ErrorSchema)
    ),
    tags = ["manager"],
    operation_id = "publishAnnouncement"
)]
#[post("/manager/{manager_id}/announcements")]
pub async fn publish_announcement(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<AnnouncementRequest>,
) -> ApiResult<HttpResponse> {
    let content = AnnouncementContent::try_from(payload.into_inner())?;
    let announcement = state
        .announcements
        .publish(manager_id(path), content)
        .await?;
    Ok(HttpResponse::Created().json(AnnouncementResponse::from(announcement)))
}

/// Replace an announcement's title and body. The timestamp moves to now.
#[utoipa::path(
    put,
    path = "/api/manager/{manager_id}/announcements/{announcement_id}",
    params(
        ("manager_id" = i64, Path, description = "Manager identifier"),
        ("announcement_id" = i64, Path, description = "Announcement identifier")
    ),
    request_body = AnnouncementRequest,
    responses(
        (status = 200, description = "Announcement revised", body = AnnouncementResponse),
        (status = 400, description = "Missing title or description", body = ErrorSchema),
        (status = 404, description = "Announcement not found", body = ErrorSchema)
    ),
    tags = ["manager"],
    operation_id = "reviseAnnouncement"
)]
#[put("/manager/{manager_id}/announcements/{announcement_id}")]
pub async fn revise_announcement(
    state: web::Data<HttpState>,
    path: web::Path<(i64, i64)>,
    payload: web::Json<AnnouncementRequest>,
) -> ApiResult<web::Json<AnnouncementResponse>> {
    let (_, id) = path.into_inner();
    let content = AnnouncementContent::try_from(payload.into_inner())?;
    let announcement = state
        .announcements
        .revise(AnnouncementId::new(id), content)
        .await?;
    Ok(web::Json(announcement.into()))
}

#[utoipa::path(
    delete,
    path = "/api/manager/{manager_id}/announcements/{announcement_id}",
    params(
        ("manager_id" = i64, Path, description = "Manager identifier"),
        ("announcement_id" = i64, Path, description = "Announcement identifier")
    ),
    responses(
        (status = 200, description = "Announcement deleted", body = MessageResponse),
        (status = 404, description = "Announcement not found", body = ErrorSchema)
    ),
    tags = ["manager"],
    operation_id = "deleteAnnouncement"
)]
#[delete("/manager/{manager_id}/announcements/{announcement_id}")]
pub async fn delete_announcement(
    state: web::Data<HttpState>,
    path: web::Path<(i64, i64)>,
) -> ApiResult<web::Json<MessageResponse>> {
    let (_, id) = path.into_inner();
    state.announcements.retract(AnnouncementId::new(id)).await?;
    Ok(web::Json(MessageResponse::new(
        "Announcement deleted successfully",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixture_clock::fixture_timestamp;
    use crate::domain::{Announcement, ManagerId};
    use crate::inbound::http::test_utils::{MockPorts, call};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use mockall::predicate::eq;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn stored(id: i64, content: AnnouncementContent) -> Announcement {
        Announcement {
            id: AnnouncementId::new(id),
            title: content.title,
            description: content.description,
            date_time: fixture_timestamp(),
            manager_id: ManagerId::new(100),
        }
    }

    #[rstest]
    #[actix_web::test]
    async fn publish_returns_created_announcement() {
        let mut ports = MockPorts::default();
        ports
            .announcements
            .expect_publish()
            .withf(|manager, content| {
                *manager == ManagerId::new(100) && content.title == "Water outage"
            })
            .times(1)
            .return_once(|_, content| Ok(stored(9, content)));

        let request = actix_test::TestRequest::post()
            .uri("/api/manager/100/announcements")
            .set_json(json!({"title": "Water outage", "description": "Friday morning"}))
            .to_request();
        let (status, body) = call(ports, request).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body.get("id").and_then(Value::as_i64), Some(9));
        assert_eq!(body.get("managerId").and_then(Value::as_i64), Some(100));
        assert_eq!(
            body.get("dateTime").and_then(Value::as_str),
            Some("2024-09-02T08:15:00+00:00")
        );
    }

    #[rstest]
    #[case(json!({"description": "Friday morning"}), "title")]
    #[case(json!({"title": "Water outage", "description": " "}), "description")]
    #[actix_web::test]
    async fn incomplete_announcement_is_rejected(#[case] payload: Value, #[case] field: &str) {
        let request = actix_test::TestRequest::put()
            .uri("/api/manager/100/announcements/9")
            .set_json(payload)
            .to_request();
        let (status, body) = call(MockPorts::default(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body.pointer("/details/field").and_then(Value::as_str),
            Some(field)
        );
    }

    #[rstest]
    #[case("/api/manager/100/announcements/search?keyword=Water", "Water")]
    #[case("/api/manager/100/announcements/search", "")]
    #[actix_web::test]
    async fn search_passes_keyword(#[case] uri: &str, #[case] expected: &'static str) {
        let mut ports = MockPorts::default();
        ports
            .announcements
            .expect_search()
            .withf(move |manager, keyword| *manager == ManagerId::new(100) && keyword == expected)
            .times(1)
            .return_once(|_, _| Ok(Vec::new()));

        let request = actix_test::TestRequest::get().uri(uri).to_request();
        let (status, body) = call(ports, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[rstest]
    #[actix_web::test]
    async fn delete_confirms_with_message() {
        let mut ports = MockPorts::default();
        ports
            .announcements
            .expect_retract()
            .with(eq(AnnouncementId::new(9)))
            .times(1)
            .return_once(|_| Ok(()));

        let request = actix_test::TestRequest::delete()
            .uri("/api/manager/100/announcements/9")
            .to_request();
        let (status, body) = call(ports, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Announcement deleted successfully"}));
    }

    #[rstest]
    #[actix_web::test]
    async fn deleting_unknown_announcement_is_not_found() {
        let mut ports = MockPorts::default();
        ports
            .announcements
            .expect_retract()
            .return_once(|_| Err(Error::not_found("Announcement not found")));

        let request = actix_test::TestRequest::delete()
            .uri("/api/manager/100/announcements/404")
            .to_request();
        let (status, _) = call(ports, request).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
