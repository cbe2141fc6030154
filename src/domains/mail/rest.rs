use axum::{
  body::Bytes,
  extract::{Form, FromRequest, Json, Request, State},
  http::{header, Method, StatusCode},
  response::{IntoResponse, Json as JsonResponse},
  routing::post,
  Router,
};

use super::model::{SendEmailRequest, SendEmailResponse};
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

/// Mail request read from either a JSON or a form-encoded body.
///
/// Bodies of any other type, empty JSON bodies and JSON values that are not
/// objects yield an empty request so that the missing-field check answers them.
pub struct MailPayload(pub SendEmailRequest);

impl<S> FromRequest<S> for MailPayload
where
  S: Send + Sync,
{
  type Rejection = AppError;

  async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
    let content_type = req
      .headers()
      .get(header::CONTENT_TYPE)
      .and_then(|value| value.to_str().ok())
      .unwrap_or_default()
      .to_ascii_lowercase();

    if content_type.starts_with("application/x-www-form-urlencoded") {
      let Form(payload) = Form::<SendEmailRequest>::from_request(req, state).await?;
      return Ok(Self(payload));
    }

    if !content_type.contains("json") {
      return Ok(Self(SendEmailRequest::default()));
    }

    let bytes = Bytes::from_request(req, state)
      .await
      .map_err(|rejection| AppError::new(rejection.status(), rejection.body_text()))?;

    if bytes.is_empty() {
      return Ok(Self(SendEmailRequest::default()));
    }

    let Json(value) = Json::<serde_json::Value>::from_bytes(&bytes)?;
    if !value.is_object() {
      return Ok(Self(SendEmailRequest::default()));
    }

    let payload = serde_json::from_value::<SendEmailRequest>(value)
      .map_err(|e| AppError::bad_request(format!("Invalid request body: {}", e)))?;
    Ok(Self(payload))
  }
}

pub fn mail_routes() -> Router<SharedAppState> {
  Router::new().route(
    "/send-email",
    post(send_email_handler).fallback(method_not_allowed_handler),
  )
}

pub async fn send_email_handler(
  State(state): State<SharedAppState>,
  MailPayload(payload): MailPayload,
) -> Result<JsonResponse<SendEmailResponse>, AppError> {
  state
    .send_email(payload)
    .await
    .map(JsonResponse)
    .map_err(Into::into)
}

pub async fn method_not_allowed_handler(method: Method) -> impl IntoResponse {
  (
    StatusCode::METHOD_NOT_ALLOWED,
    [(header::ALLOW, "POST")],
    format!("Method {} Not Allowed", method),
  )
}
