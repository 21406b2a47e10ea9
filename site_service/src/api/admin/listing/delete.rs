use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use content_store_client::error::StoreError;
use thiserror::Error;
use uuid::Uuid;

use crate::api::context::ApiContext;

#[derive(Debug, Error)]
pub enum DeleteProjectErr {
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for DeleteProjectErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            DeleteProjectErr::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            DeleteProjectErr::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "DeleteProjectErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// Delete a project entry.
#[utoipa::path(
    delete,
    tag = "Listing",
    path = "/admin/projects/listing/{id}",
    operation_id = "delete_project",
    params(
        ("id" = Uuid, Path, description = "Project entry id."),
    ),
    responses(
        (status = 204),
        (status = 404, body = String),
        (status = 500, body = String),
    )
)]
#[tracing::instrument(skip(context))]
pub async fn handler(
    State(context): State<ApiContext>,
    Path(project_id): Path<Uuid>,
) -> Result<StatusCode, DeleteProjectErr> {
    context
        .content_store
        .delete_project(project_id)
        .await
        .inspect_err(|e| {
            tracing::error!(error = ?e, project_id = %project_id, "failed to delete project");
        })?;

    tracing::info!(project_id = %project_id, "deleted project");

    Ok(StatusCode::NO_CONTENT)
}
