//! Notification port: delivers a named prompt to a phone number.

use async_trait::async_trait;

use crate::domain::phone::PhoneNumber;
use crate::outbound::OutboundError;

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Subscribe `phone` to the prompt identified by `template_id`.
    /// Delivery is the transport's contract; this only hands the send off.
    async fn send_prompt(&self, phone: &PhoneNumber, template_id: &str)
        -> Result<(), OutboundError>;
}

/// HTTP notifier posting to the messaging gateway's opt-in endpoint.
pub struct HttpNotifier {
    client: reqwest::Client,
    url: String,
}

impl HttpNotifier {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl Notifier for HttpNotifier {
    async fn send_prompt(
        &self,
        phone: &PhoneNumber,
        template_id: &str,
    ) -> Result<(), OutboundError> {
        let response = self
            .client
            .post(&self.url)
            .form(&[("phone", phone.as_str()), ("template", template_id)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OutboundError::Status(status.as_u16()));
        }
        Ok(())
    }
}
