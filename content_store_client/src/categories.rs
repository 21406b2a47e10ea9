use super::ContentStoreClient;
use crate::error::{ResponseExt, StoreError};
use models_content::Category;
use models_content::api::CreateCategoryRequest;
use uuid::Uuid;

impl ContentStoreClient {
    /// List all project categories.
    #[tracing::instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let url = format!("{}/content/projects/categories", self.url);
        let response = self.client.get(&url).send().await.map_store_error().await?;

        let result = response.json::<Vec<Category>>().await.map_err(|e| {
            StoreError::Generic(anyhow::anyhow!(
                "unable to parse response from list_categories: {}",
                e.to_string()
            ))
        })?;

        Ok(result)
    }

    /// Create a project category.
    #[tracing::instrument(skip(self, request))]
    pub async fn create_category(
        &self,
        request: &CreateCategoryRequest,
    ) -> Result<Category, StoreError> {
        let url = format!("{}/content/projects/categories", self.url);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_store_error()
            .await?;

        let result = response.json::<Category>().await.map_err(|e| {
            StoreError::Generic(anyhow::anyhow!(
                "unable to parse response from create_category: {}",
                e.to_string()
            ))
        })?;

        Ok(result)
    }

    /// Delete a project category by id.
    #[tracing::instrument(skip(self))]
    pub async fn delete_category(&self, category_id: Uuid) -> Result<(), StoreError> {
        let url = format!("{}/content/projects/categories/{}", self.url, category_id);
        self.client
            .delete(&url)
            .send()
            .await
            .map_store_error()
            .await?;

        Ok(())
    }
}
