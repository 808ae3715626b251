use crate::config::ConfigError;
use crate::enquiry::EnquiryError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Output(serde_json::Error),
    Enquiry(EnquiryError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Output(err) => write!(f, "could not encode enquiry: {}", err),
            AppError::Enquiry(err) => write!(f, "enquiry rejected: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Output(err) => Some(err),
            AppError::Enquiry(err) => Some(err),
        }
    }
}

/// Lets an HTTP handler return an enquiry failure as-is: client mistakes
/// become 400s, everything else a 500.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Enquiry(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Output(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let mut body = json!({ "error": self.to_string() });
        if let AppError::Enquiry(err) = &self {
            if let Some(field) = err.field() {
                body["field"] = json!(field);
            }
        }

        (status, Json(body)).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<EnquiryError> for AppError {
    fn from(value: EnquiryError) -> Self {
        Self::Enquiry(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enquiry::EnquiryRequest;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn invalid_enum_becomes_bad_request() {
        let error = EnquiryRequest::from_json_str(r#"{"packageType": "gold"}"#)
            .expect_err("gold rejected");
        let response = AppError::from(error).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "enquiry rejected: invalid packageType: gold");
        assert_eq!(body["field"], "packageType");
    }

    #[tokio::test]
    async fn malformed_payload_is_bad_request_without_field() {
        let error = EnquiryRequest::from_json_str("{not json").expect_err("malformed");
        let response = AppError::from(error).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert!(body.get("field").is_none());
    }

    #[test]
    fn config_errors_are_server_errors() {
        let response = AppError::from(ConfigError::EmptyLogLevel).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
