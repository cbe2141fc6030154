use crate::email::types::{Ack, DeliveryError, EmailMessage, SmtpConfig};
use async_trait::async_trait;
use lettre::{
  message::{header::ContentType, Mailbox},
  transport::smtp::authentication::Credentials,
  Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageSender: Send + Sync {
  async fn send(&self, message: EmailMessage) -> Result<Ack, DeliveryError>;
}

pub struct SmtpMessageSender {
  smtp_config: SmtpConfig,
}

impl SmtpMessageSender {
  pub fn new(smtp_config: SmtpConfig) -> Self {
    SmtpMessageSender { smtp_config }
  }

  // A fresh transport per message; nothing is pooled between requests.
  fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, DeliveryError> {
    let creds = Credentials::new(self.smtp_config.username.clone(), self.smtp_config.password.clone());

    let transport = if self.smtp_config.host == "localhost" || self.smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&self.smtp_config.host)
        .credentials(creds)
        .port(self.smtp_config.port)
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.smtp_config.host)?
        .credentials(creds)
        .port(self.smtp_config.port)
        .build()
    };

    Ok(transport)
  }

  fn build_message(message: &EmailMessage) -> Result<Message, DeliveryError> {
    let from = Mailbox::new(Some(message.from.name.clone()), message.from.address.parse::<Address>()?);

    let email = Message::builder()
      .from(from)
      .to(message.to.parse::<Mailbox>()?)
      .subject(&message.subject)
      .header(ContentType::TEXT_PLAIN)
      .body(message.body.clone())?;

    Ok(email)
  }
}

#[async_trait]
impl MessageSender for SmtpMessageSender {
  async fn send(&self, message: EmailMessage) -> Result<Ack, DeliveryError> {
    let email = Self::build_message(&message)?;
    let transport = self.transport()?;

    transport.send(email).await?;

    Ok(Ack)
  }
}
