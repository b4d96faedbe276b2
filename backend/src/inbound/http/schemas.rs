//! OpenAPI schemas for domain error types.
//!
//! The domain error stays free of utoipa derives; these mirrors describe its
//! wire shape for the generated document.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// Malformed input or a broken domain rule such as a full room.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Credentials were rejected.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    #[schema(rename = "not_found")]
    NotFound,
    /// The database could not be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    #[schema(example = "Student not found")]
    message: String,
    /// Request correlation id, also sent in the `trace-id` header.
    #[schema(example = "6f1c1f4e-8a2b-4c55-9a1e-3f8f0e2d7b10")]
    trace_id: Option<String>,
    /// Field-level context such as `{"field":"date","code":"invalid_date"}`.
    details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_code_lists_every_variant() {
        let json = schema_json::<ErrorCodeSchema>();
        for code in [
            "invalid_request",
            "unauthorized",
            "not_found",
            "service_unavailable",
            "internal_error",
        ] {
            assert!(json.contains(code), "missing {code}");
        }
        assert!(!json.contains("forbidden"));
    }

    #[test]
    fn error_schema_uses_camel_case_trace_id() {
        let json = schema_json::<ErrorSchema>();
        assert!(json.contains("traceId"));
        assert_eq!(ErrorSchema::name(), "crate.domain.Error");
    }
}
