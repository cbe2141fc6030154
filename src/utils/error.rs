use axum::{
  extract::rejection::{FormRejection, JsonRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

use crate::domains::mail::{model::MISSING_FIELDS_MESSAGE, service::MailServiceError};

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = Json(json!({
      "error": self.message,
    }));

    (self.status_code, body).into_response()
  }
}

impl From<JsonRejection> for AppError {
  fn from(rejection: JsonRejection) -> Self {
    tracing::warn!("JSON error: {:?}", rejection);
    AppError::new(rejection.status(), rejection.body_text())
  }
}

impl From<FormRejection> for AppError {
  fn from(rejection: FormRejection) -> Self {
    tracing::warn!("Form error: {:?}", rejection);
    AppError::new(rejection.status(), rejection.body_text())
  }
}

impl From<MailServiceError> for AppError {
  fn from(error: MailServiceError) -> Self {
    match error {
      MailServiceError::MissingField => AppError::bad_request(MISSING_FIELDS_MESSAGE),
      MailServiceError::DeliveryFailed(msg) => AppError::internal_server_error(msg),
    }
  }
}
