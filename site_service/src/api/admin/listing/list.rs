use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use content_store_client::error::StoreError;
use models_content::ProjectEntry;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::api::context::ApiContext;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListProjectsResponse {
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Error)]
pub enum ListProjectsErr {
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for ListProjectsErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            ListProjectsErr::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "ListProjectsErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// List all project entries, published or not.
#[utoipa::path(
    get,
    tag = "Listing",
    path = "/admin/projects/listing",
    operation_id = "list_projects",
    responses(
        (status = 200, body = ListProjectsResponse),
        (status = 500, body = String),
    )
)]
#[tracing::instrument(skip(context))]
pub async fn handler(
    State(context): State<ApiContext>,
) -> Result<Json<ListProjectsResponse>, ListProjectsErr> {
    let projects = context
        .content_store
        .list_projects()
        .await
        .inspect_err(|e| tracing::error!(error = ?e, "failed to list projects"))?;

    Ok(Json(ListProjectsResponse { projects }))
}
