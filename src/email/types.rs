#[derive(Debug, Clone)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
}

impl Default for SmtpConfig {
  fn default() -> Self {
    SmtpConfig {
      host: "smtp.gmail.com".to_string(),
      port: 587,
      username: "".to_string(),
      password: "".to_string(),
    }
  }
}

/// Display name and address the message is sent from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
  pub name: String,
  pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
  pub from: Sender,
  pub to: String,
  pub subject: String,
  pub body: String,
}

impl EmailMessage {
  pub fn new(from: Sender, to: String, subject: String, body: String) -> Self {
    EmailMessage {
      from,
      to,
      subject,
      body,
    }
  }
}

/// The provider took the message without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ack;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryError {
  pub message: String,
}

impl DeliveryError {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
    }
  }
}

impl std::error::Error for DeliveryError {}

impl std::fmt::Display for DeliveryError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.message)
  }
}

impl From<lettre::address::AddressError> for DeliveryError {
  fn from(err: lettre::address::AddressError) -> Self {
    DeliveryError::new(err.to_string())
  }
}

impl From<lettre::error::Error> for DeliveryError {
  fn from(err: lettre::error::Error) -> Self {
    DeliveryError::new(err.to_string())
  }
}

impl From<lettre::transport::smtp::Error> for DeliveryError {
  fn from(err: lettre::transport::smtp::Error) -> Self {
    DeliveryError::new(err.to_string())
  }
}
