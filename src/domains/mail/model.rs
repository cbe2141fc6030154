use serde::{Deserialize, Serialize};
use validator::Validate;

pub const MISSING_FIELDS_MESSAGE: &str = "Faltan campos: to, subject o text";

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct SendEmailRequest {
  #[validate(required, length(min = 1))]
  pub to: Option<String>,
  #[validate(required, length(min = 1))]
  pub subject: Option<String>,
  #[validate(required, length(min = 1))]
  pub text: Option<String>,
}

impl SendEmailRequest {
  pub fn new(to: impl Into<String>, subject: impl Into<String>, text: impl Into<String>) -> Self {
    Self {
      to: Some(to.into()),
      subject: Some(subject.into()),
      text: Some(text.into()),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SendEmailResponse {
  pub ok: bool,
}

impl SendEmailResponse {
  pub fn ok() -> Self {
    Self { ok: true }
  }
}
