use super::ContentStoreClient;
use crate::error::{ResponseExt, StoreError};
use models_content::Technology;
use models_content::api::CreateTechnologyRequest;
use uuid::Uuid;

impl ContentStoreClient {
    /// List all technology tags.
    #[tracing::instrument(skip(self))]
    pub async fn list_technologies(&self) -> Result<Vec<Technology>, StoreError> {
        let url = format!("{}/content/projects/technologies", self.url);
        let response = self.client.get(&url).send().await.map_store_error().await?;

        let result = response.json::<Vec<Technology>>().await.map_err(|e| {
            StoreError::Generic(anyhow::anyhow!(
                "unable to parse response from list_technologies: {}",
                e.to_string()
            ))
        })?;

        Ok(result)
    }

    /// Create a technology tag.
    #[tracing::instrument(skip(self, request))]
    pub async fn create_technology(
        &self,
        request: &CreateTechnologyRequest,
    ) -> Result<Technology, StoreError> {
        let url = format!("{}/content/projects/technologies", self.url);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_store_error()
            .await?;

        let result = response.json::<Technology>().await.map_err(|e| {
            StoreError::Generic(anyhow::anyhow!(
                "unable to parse response from create_technology: {}",
                e.to_string()
            ))
        })?;

        Ok(result)
    }

    /// Delete a technology tag by id.
    #[tracing::instrument(skip(self))]
    pub async fn delete_technology(&self, technology_id: Uuid) -> Result<(), StoreError> {
        let url = format!("{}/content/projects/technologies/{}", self.url, technology_id);
        self.client
            .delete(&url)
            .send()
            .await
            .map_store_error()
            .await?;

        Ok(())
    }
}
