use std::env;

use anyhow::Context;
use axum::http::HeaderValue;

use crate::email::SmtpConfig;

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigin {
  Any,
  Exact(HeaderValue),
}

impl CorsOrigin {
  pub fn parse(value: &str) -> anyhow::Result<Self> {
    if value.trim() == "*" {
      return Ok(CorsOrigin::Any);
    }

    let origin = HeaderValue::from_str(value.trim()).with_context(|| format!("Invalid CORS origin: {}", value))?;
    Ok(CorsOrigin::Exact(origin))
  }
}

/// Process configuration, read once at startup and handed to the app state.
#[derive(Debug, Clone)]
pub struct AppConfig {
  pub port: u16,
  pub allowed_origin: CorsOrigin,
  pub sender_address: String,
  pub smtp: SmtpConfig,
}

impl AppConfig {
  /// Credentials are not required here. An empty operator address or password
  /// shows up as a delivery failure when a message is sent.
  pub fn from_env() -> anyhow::Result<Self> {
    let sender_address = env::var("GMAIL_USER").unwrap_or_default();

    let smtp = SmtpConfig {
      host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
      port: env::var("SMTP_PORT")
        .unwrap_or_else(|_| "587".to_string())
        .parse()
        .unwrap_or(587),
      username: sender_address.clone(),
      password: env::var("GMAIL_APP_PASS").unwrap_or_default(),
    };

    let port = env::var("PORT")
      .ok()
      .and_then(|p| p.parse().ok())
      .unwrap_or(DEFAULT_PORT);

    let allowed_origin =
      CorsOrigin::parse(&env::var("CORS_ALLOWED_ORIGIN").unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string()))?;

    Ok(Self {
      port,
      allowed_origin,
      sender_address,
      smtp,
    })
  }

  pub fn for_sender(sender_address: impl Into<String>) -> Self {
    let sender_address = sender_address.into();
    Self {
      port: DEFAULT_PORT,
      allowed_origin: CorsOrigin::Exact(HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN)),
      smtp: SmtpConfig {
        username: sender_address.clone(),
        ..SmtpConfig::default()
      },
      sender_address,
    }
  }
}
