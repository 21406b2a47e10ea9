mod api;
mod config;
mod util;

use anyhow::Context;
use api::context::ApiContext;
use config::Config;
use content_store_client::ContentStoreClient;
use folio_entrypoint::FolioEntrypoint;
use mailer_client::MailerClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FolioEntrypoint::default().init();

    // Parse our configuration from the environment.
    let config = Config::from_env().context("expected to be able to generate config")?;

    tracing::info!("initialized config");

    let content_store = ContentStoreClient::new(
        config.content_store_api_key.clone(),
        config.content_store_url.clone(),
    );
    tracing::info!(
        content_store_url = %config.content_store_url,
        "initialized content store client"
    );

    let mailer = MailerClient::new(config.mailer_url.clone());
    tracing::info!(mailer_url = %config.mailer_url, "initialized mailer client");

    api::setup_and_serve(ApiContext::new(config, content_store, mailer)).await?;
    Ok(())
}
