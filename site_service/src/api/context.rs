use content_store_client::ContentStoreClient;
use mailer_client::MailerClient;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::util::rate_limit::SlidingWindow;

#[derive(Clone)]
pub struct ApiContext {
    pub config: Arc<Config>,
    pub content_store: ContentStoreClient,
    pub mailer: Arc<MailerClient>,
    /// Guard applied before every contact dispatch.
    pub contact_limiter: Arc<SlidingWindow>,
}

impl ApiContext {
    pub fn new(config: Config, content_store: ContentStoreClient, mailer: MailerClient) -> Self {
        let contact_limiter = Arc::new(SlidingWindow::new(
            config.contact_rate_limit_reqs,
            Duration::from_secs(config.contact_rate_limit_window_secs),
        ));

        Self {
            config: Arc::new(config),
            content_store,
            mailer: Arc::new(mailer),
            contact_limiter,
        }
    }
}
