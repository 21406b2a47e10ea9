use super::ContentStoreClient;
use crate::error::{ResponseExt, StoreError};
use models_content::HeaderSettings;
use models_content::api::UpsertHeaderRequest;

impl ContentStoreClient {
    /// Fetch the projects header settings record.
    #[tracing::instrument(skip(self))]
    pub async fn get_header(&self) -> Result<HeaderSettings, StoreError> {
        let url = format!("{}/content/projects/header", self.url);
        let response = self.client.get(&url).send().await.map_store_error().await?;

        let result = response.json::<HeaderSettings>().await.map_err(|e| {
            StoreError::Generic(anyhow::anyhow!(
                "unable to parse response from get_header: {}",
                e.to_string()
            ))
        })?;

        Ok(result)
    }

    /// Replace the projects header settings record.
    #[tracing::instrument(skip(self, request))]
    pub async fn upsert_header(
        &self,
        request: &UpsertHeaderRequest,
    ) -> Result<HeaderSettings, StoreError> {
        let url = format!("{}/content/projects/header", self.url);
        let response = self
            .client
            .put(&url)
            .json(request)
            .send()
            .await
            .map_store_error()
            .await?;

        let result = response.json::<HeaderSettings>().await.map_err(|e| {
            StoreError::Generic(anyhow::anyhow!(
                "unable to parse response from upsert_header: {}",
                e.to_string()
            ))
        })?;

        Ok(result)
    }
}
