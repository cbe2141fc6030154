use std::sync::Arc;

use crate::{
  config::AppConfig,
  domains::mail::{
    model::{SendEmailRequest, SendEmailResponse},
    service::{MailService, MailServiceError, MailServiceImpl},
  },
  email::{MessageSender, SmtpMessageSender},
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn send_email(
    &self,
    req: SendEmailRequest,
  ) -> impl std::future::Future<Output = Result<SendEmailResponse, MailServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub config: Arc<AppConfig>,
  pub mail_service: Arc<MailServiceImpl>,
}

impl SharedAppState {
  pub fn new(config: AppConfig) -> Self {
    let message_sender = Arc::new(SmtpMessageSender::new(config.smtp.clone()));
    Self::with_sender(config, message_sender)
  }

  pub fn with_sender(config: AppConfig, message_sender: Arc<dyn MessageSender>) -> Self {
    let mail_service = Arc::new(MailServiceImpl::new(config.sender_address.clone(), message_sender));

    Self {
      config: Arc::new(config),
      mail_service,
    }
  }
}

impl AppState for SharedAppState {
  async fn send_email(&self, req: SendEmailRequest) -> Result<SendEmailResponse, MailServiceError> {
    self.mail_service.send_email(req).await
  }
}
