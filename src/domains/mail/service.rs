use async_trait::async_trait;
use std::error::Error;
use std::sync::Arc;
use validator::Validate;

use super::model::{SendEmailRequest, SendEmailResponse, MISSING_FIELDS_MESSAGE};
use crate::email::{EmailMessage, MessageSender, Sender};

pub const SENDER_DISPLAY_NAME: &str = "NotiFicct";

#[derive(Debug, PartialEq, Eq)]
pub enum MailServiceError {
  MissingField,
  DeliveryFailed(String),
}

impl Error for MailServiceError {}

impl std::fmt::Display for MailServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      MailServiceError::MissingField => write!(f, "{}", MISSING_FIELDS_MESSAGE),
      MailServiceError::DeliveryFailed(msg) => write!(f, "Delivery Failed: {}", msg),
    }
  }
}

#[async_trait]
pub trait MailService: Send + Sync {
  async fn send_email(&self, req: SendEmailRequest) -> Result<SendEmailResponse, MailServiceError>;
}

pub struct MailServiceImpl {
  sender_address: String,
  message_sender: Arc<dyn MessageSender>,
}

impl MailServiceImpl {
  pub fn new(sender_address: impl Into<String>, message_sender: Arc<dyn MessageSender>) -> Self {
    Self {
      sender_address: sender_address.into(),
      message_sender,
    }
  }
}

#[async_trait]
impl MailService for MailServiceImpl {
  async fn send_email(&self, req: SendEmailRequest) -> Result<SendEmailResponse, MailServiceError> {
    req.validate().map_err(|_| MailServiceError::MissingField)?;

    let (Some(to), Some(subject), Some(text)) = (req.to, req.subject, req.text) else {
      return Err(MailServiceError::MissingField);
    };

    let from = Sender {
      name: SENDER_DISPLAY_NAME.to_string(),
      address: self.sender_address.clone(),
    };
    let message = EmailMessage::new(from, to, subject, text);
    let recipient = message.to.clone();

    match self.message_sender.send(message).await {
      Ok(_) => {
        tracing::info!("Email handed to provider for {}", recipient);
        Ok(SendEmailResponse::ok())
      }
      Err(e) => {
        tracing::error!("Error sending email to {}: {:?}", recipient, e);
        Err(MailServiceError::DeliveryFailed(e.message))
      }
    }
  }
}
