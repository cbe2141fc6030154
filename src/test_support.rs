use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{HeaderMap, Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

use crate::{
  app::create_app,
  config::AppConfig,
  email::{Ack, DeliveryError, EmailMessage, MessageSender},
  state::SharedAppState,
};

/// Records every message it is asked to send.
#[derive(Clone, Default)]
pub struct RecordingSender {
  sent: Arc<Mutex<Vec<EmailMessage>>>,
  failure: Option<String>,
}

impl RecordingSender {
  pub fn succeeding() -> Self {
    Self::default()
  }

  pub fn failing(message: &str) -> Self {
    Self {
      failure: Some(message.to_string()),
      ..Self::default()
    }
  }

  pub fn sent(&self) -> Vec<EmailMessage> {
    self.sent.lock().unwrap().clone()
  }

  pub fn calls(&self) -> usize {
    self.sent.lock().unwrap().len()
  }
}

#[async_trait]
impl MessageSender for RecordingSender {
  async fn send(&self, message: EmailMessage) -> Result<Ack, DeliveryError> {
    self.sent.lock().unwrap().push(message);
    match &self.failure {
      Some(msg) => Err(DeliveryError::new(msg.clone())),
      None => Ok(Ack),
    }
  }
}

pub fn app_with_sender(sender: RecordingSender) -> Router {
  let state = SharedAppState::with_sender(AppConfig::for_sender("ops@example.com"), Arc::new(sender));
  create_app(state)
}

pub async fn request(
  app: Router,
  method: &str,
  uri: &str,
  content_type: Option<&str>,
  body: Vec<u8>,
) -> (StatusCode, HeaderMap, Bytes) {
  let mut builder = Request::builder().method(method).uri(uri);
  if let Some(content_type) = content_type {
    builder = builder.header("content-type", content_type);
  }
  let request = builder.body(Body::from(body)).expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let headers = response.headers().clone();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, headers, body)
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, HeaderMap, Bytes) {
  let body = serde_json::to_vec(body).expect("serialize request body");
  request(app, "POST", uri, Some("application/json"), body).await
}

/// In-memory sink for formatted log lines.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
  /// Installs a subscriber writing into this buffer for the current thread.
  pub fn capture() -> (Self, DefaultGuard) {
    let buffer = Self::default();
    let subscriber = tracing_subscriber::fmt()
      .with_writer(buffer.clone())
      .with_ansi(false)
      .without_time()
      .with_max_level(tracing::Level::TRACE)
      .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buffer, guard)
  }

  pub fn lines_at(&self, level: &str) -> Vec<String> {
    let bytes = self.0.lock().unwrap().clone();
    String::from_utf8_lossy(&bytes)
      .lines()
      .filter(|line| line.trim_start().starts_with(level))
      .map(str::to_string)
      .collect()
  }
}

impl std::io::Write for LogBuffer {
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.0.lock().unwrap().extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

impl<'a> MakeWriter<'a> for LogBuffer {
  type Writer = LogBuffer;

  fn make_writer(&'a self) -> Self::Writer {
    self.clone()
  }
}
