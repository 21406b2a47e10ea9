//! Client for the transactional email provider.
//!
//! The provider is template-based: a send names the provider-side service and
//! template ids and hands over the template parameters as a JSON object.

mod send;

#[allow(unused_imports)]
use mockall::automock;
use serde::{Deserialize, Serialize};

#[cfg(test)]
pub use MockMailerClient as Mailer;
#[cfg(not(test))]
pub use MailerClient as Mailer;

/// One outbound transactional email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendEmail {
    pub service_id: String,
    pub template_id: String,
    pub recipient: String,
    /// Template parameters, forwarded verbatim to the provider.
    pub params: serde_json::Value,
}

#[derive(Clone, Debug)]
pub struct MailerClient {
    url: String,
    client: reqwest::Client,
}

#[cfg_attr(test, automock)]
impl MailerClient {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    /// Dispatch one email through the provider API.
    #[tracing::instrument(skip(self, email), fields(recipient = %email.recipient, template_id = %email.template_id))]
    pub async fn send(&self, email: &SendEmail) -> anyhow::Result<()> {
        send::send(&self.client, &self.url, email).await
    }
}
