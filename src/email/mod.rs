//! Email sending functionality module
//!
//! Outbound mail goes through the `MessageSender` capability. The production
//! implementation talks SMTP using lettre.

mod service;
mod types;

#[cfg(test)]
pub use service::MockMessageSender;
pub use service::{MessageSender, SmtpMessageSender};
pub use types::{Ack, DeliveryError, EmailMessage, Sender, SmtpConfig};
