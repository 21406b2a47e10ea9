use anyhow::Context;
pub use folio_env::Environment;
use seo_meta::SiteIdentity;

/// Configuration parameters for the application.
pub struct Config {
    /// The port to listen for HTTP requests on.
    pub port: usize,

    /// The environment we are in
    pub environment: Environment,

    /// Site name appended to page titles and used as the structured-data publisher.
    pub site_name: String,

    /// Description used for the site root head.
    pub site_description: String,

    /// Public base URL of the site.
    pub site_url: String,

    /// Twitter/X handle for card metadata, including the `@`.
    pub twitter_handle: String,

    /// Logo URL for the structured-data publisher record.
    pub publisher_logo_url: Option<String>,

    /// Base URL of the external content store.
    pub content_store_url: String,

    /// API key sent with every content store request.
    pub content_store_api_key: String,

    /// Base URL of the transactional email provider.
    pub mailer_url: String,

    /// Provider-side service id for contact sends.
    pub mailer_service_id: String,

    /// Provider-side template id for contact sends.
    pub mailer_template_id: String,

    /// Recipient address for contact-form email.
    pub contact_recipient: String,

    /// The number of contact sends we allow per window.
    pub contact_rate_limit_reqs: u32,

    /// The size of the sliding window we use for the contact rate limit.
    pub contact_rate_limit_window_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port: usize = std::env::var("PORT")
            .unwrap_or("8080".to_string())
            .parse::<usize>()
            .context("should be valid port number")?;

        let environment = Environment::new_or_prod();

        let site_name = std::env::var("SITE_NAME").context("SITE_NAME must be provided")?;

        let site_description =
            std::env::var("SITE_DESCRIPTION").context("SITE_DESCRIPTION must be provided")?;

        let site_url = std::env::var("SITE_URL").context("SITE_URL must be provided")?;

        let twitter_handle =
            std::env::var("TWITTER_HANDLE").context("TWITTER_HANDLE must be provided")?;

        let publisher_logo_url = std::env::var("PUBLISHER_LOGO_URL").ok();

        let content_store_url =
            std::env::var("CONTENT_STORE_URL").context("CONTENT_STORE_URL must be provided")?;

        let content_store_api_key = std::env::var("CONTENT_STORE_API_KEY")
            .context("CONTENT_STORE_API_KEY must be provided")?;

        let mailer_url = std::env::var("MAILER_URL").context("MAILER_URL must be provided")?;

        let mailer_service_id =
            std::env::var("MAILER_SERVICE_ID").context("MAILER_SERVICE_ID must be provided")?;

        let mailer_template_id =
            std::env::var("MAILER_TEMPLATE_ID").context("MAILER_TEMPLATE_ID must be provided")?;

        let contact_recipient =
            std::env::var("CONTACT_RECIPIENT").context("CONTACT_RECIPIENT must be provided")?;

        let contact_rate_limit_reqs: u32 = std::env::var("CONTACT_RATE_LIMIT_REQS")
            .unwrap_or("5".to_string())
            .parse::<u32>()
            .context("CONTACT_RATE_LIMIT_REQS must be a number")?;

        let contact_rate_limit_window_secs: u64 = std::env::var("CONTACT_RATE_LIMIT_WINDOW_SECS")
            .unwrap_or("3600".to_string())
            .parse::<u64>()
            .context("CONTACT_RATE_LIMIT_WINDOW_SECS must be a number")?;

        Ok(Config {
            port,
            environment,
            site_name,
            site_description,
            site_url,
            twitter_handle,
            publisher_logo_url,
            content_store_url,
            content_store_api_key,
            mailer_url,
            mailer_service_id,
            mailer_template_id,
            contact_recipient,
            contact_rate_limit_reqs,
            contact_rate_limit_window_secs,
        })
    }

    /// The site identity injected into the head assembler.
    pub fn site_identity(&self) -> SiteIdentity {
        SiteIdentity {
            site_name: self.site_name.clone(),
            site_url: self.site_url.clone(),
            twitter_handle: self.twitter_handle.clone(),
            publisher_logo_url: self.publisher_logo_url.clone(),
        }
    }
}
