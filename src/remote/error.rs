//! Argo Server error responses.
//!
//! The server is a grpc-gateway; failures carry a JSON body of the form
//! `{"code": 5, "message": "..."}`. This module turns those bodies and their
//! HTTP status into `TemplateError` values.

use std::fmt;

use serde::Deserialize;

use crate::error::TemplateError;

/// grpc-gateway error body
#[derive(Debug, Clone, Default, Deserialize)]
struct GatewayErrorBody {
    #[serde(default)]
    code: Option<i32>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// An error response from the Argo Server
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code
    pub status: reqwest::StatusCode,
    /// gRPC status code, if the body carried one
    pub grpc_code: Option<i32>,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    /// Build from a status and raw response body.
    ///
    /// Falls back to the raw body (or the status reason) when the body is
    /// not a gateway error document.
    pub fn from_body(status: reqwest::StatusCode, body: &str) -> Self {
        let parsed: GatewayErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = parsed
            .message
            .or(parsed.error)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                } else {
                    trimmed.to_string()
                }
            });

        Self {
            status,
            grpc_code: parsed.code,
            message,
        }
    }

    /// Convert to a `TemplateError`.
    ///
    /// `what` names the resource for not-found errors.
    pub fn into_template_error(self, what: Option<&str>) -> TemplateError {
        match self.status.as_u16() {
            401 | 403 => TemplateError::Auth(self.message),
            404 => match what {
                Some(what) => TemplateError::TemplateNotFound(what.to_string()),
                None => TemplateError::Api {
                    status: 404,
                    message: self.message,
                },
            },
            status => TemplateError::Api {
                status,
                message: self.message,
            },
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.status)
    }
}

impl From<ApiError> for TemplateError {
    fn from(error: ApiError) -> Self {
        error.into_template_error(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_gateway_body_message() {
        let err = ApiError::from_body(
            StatusCode::BAD_REQUEST,
            r#"{"code":3,"message":"spec.templates is required"}"#,
        );
        assert_eq!(err.grpc_code, Some(3));
        assert_eq!(err.message, "spec.templates is required");
    }

    #[test]
    fn test_plain_text_body() {
        let err = ApiError::from_body(StatusCode::BAD_GATEWAY, "upstream unavailable\n");
        assert_eq!(err.message, "upstream unavailable");
        assert_eq!(err.grpc_code, None);
    }

    #[test]
    fn test_empty_body_uses_reason() {
        let err = ApiError::from_body(StatusCode::SERVICE_UNAVAILABLE, "");
        assert_eq!(err.message, "Service Unavailable");
    }

    #[test]
    fn test_status_mapping() {
        let auth = ApiError::from_body(StatusCode::UNAUTHORIZED, r#"{"message":"no token"}"#)
            .into_template_error(None);
        assert!(matches!(auth, TemplateError::Auth(m) if m == "no token"));

        let missing = ApiError::from_body(StatusCode::NOT_FOUND, "{}")
            .into_template_error(Some("prod/etl-1"));
        assert!(matches!(missing, TemplateError::TemplateNotFound(w) if w == "prod/etl-1"));

        let server: TemplateError =
            ApiError::from_body(StatusCode::INTERNAL_SERVER_ERROR, r#"{"message":"boom"}"#).into();
        assert_eq!(server.to_string(), "API error (500): boom");
    }
}
