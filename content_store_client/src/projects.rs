use super::ContentStoreClient;
use crate::error::{ResponseExt, StoreError};
use models_content::ProjectEntry;
use models_content::api::{CreateProjectRequest, UpdateProjectRequest};
use uuid::Uuid;

impl ContentStoreClient {
    /// List all project listing entries.
    #[tracing::instrument(skip(self))]
    pub async fn list_projects(&self) -> Result<Vec<ProjectEntry>, StoreError> {
        let url = format!("{}/content/projects/listing", self.url);
        let response = self.client.get(&url).send().await.map_store_error().await?;

        let result = response.json::<Vec<ProjectEntry>>().await.map_err(|e| {
            StoreError::Generic(anyhow::anyhow!(
                "unable to parse response from list_projects: {}",
                e.to_string()
            ))
        })?;

        Ok(result)
    }

    /// Create a project listing entry.
    #[tracing::instrument(skip(self, request))]
    pub async fn create_project(
        &self,
        request: &CreateProjectRequest,
    ) -> Result<ProjectEntry, StoreError> {
        let url = format!("{}/content/projects/listing", self.url);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_store_error()
            .await?;

        let result = response.json::<ProjectEntry>().await.map_err(|e| {
            StoreError::Generic(anyhow::anyhow!(
                "unable to parse response from create_project: {}",
                e.to_string()
            ))
        })?;

        Ok(result)
    }

    /// Replace a project listing entry.
    #[tracing::instrument(skip(self, request))]
    pub async fn update_project(
        &self,
        project_id: Uuid,
        request: &UpdateProjectRequest,
    ) -> Result<ProjectEntry, StoreError> {
        let url = format!("{}/content/projects/listing/{}", self.url, project_id);
        let response = self
            .client
            .put(&url)
            .json(request)
            .send()
            .await
            .map_store_error()
            .await?;

        let result = response.json::<ProjectEntry>().await.map_err(|e| {
            StoreError::Generic(anyhow::anyhow!(
                "unable to parse response from update_project: {}",
                e.to_string()
            ))
        })?;

        Ok(result)
    }

    /// Delete a project listing entry by id.
    #[tracing::instrument(skip(self))]
    pub async fn delete_project(&self, project_id: Uuid) -> Result<(), StoreError> {
        let url = format!("{}/content/projects/listing/{}", self.url, project_id);
        self.client
            .delete(&url)
            .send()
            .await
            .map_store_error()
            .await?;

        Ok(())
    }
}
