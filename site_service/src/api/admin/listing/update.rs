use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use content_store_client::error::StoreError;
use models_content::ProjectEntry;
use models_content::api::UpdateProjectRequest;
use thiserror::Error;
use uuid::Uuid;

use crate::api::context::ApiContext;

#[derive(Debug, Error)]
pub enum UpdateProjectErr {
    #[error("{0}")]
    InvalidRequest(String),
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for UpdateProjectErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            UpdateProjectErr::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            UpdateProjectErr::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            UpdateProjectErr::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "UpdateProjectErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// Replace a project entry.
#[utoipa::path(
    put,
    tag = "Listing",
    path = "/admin/projects/listing/{id}",
    operation_id = "update_project",
    params(
        ("id" = Uuid, Path, description = "Project entry id."),
    ),
    request_body = UpdateProjectRequest,
    responses(
        (status = 200, body = ProjectEntry),
        (status = 400, body = String),
        (status = 404, body = String),
        (status = 500, body = String),
    )
)]
#[tracing::instrument(skip(context, request))]
pub async fn handler(
    State(context): State<ApiContext>,
    Path(project_id): Path<Uuid>,
    Json(request): Json<UpdateProjectRequest>,
) -> Result<Json<ProjectEntry>, UpdateProjectErr> {
    if let Err(err) = request.validate() {
        tracing::warn!(error = %err, "project validation failed");
        return Err(UpdateProjectErr::InvalidRequest(err.to_string()));
    }

    let project = context
        .content_store
        .update_project(project_id, &request)
        .await
        .inspect_err(|e| {
            tracing::error!(error = ?e, project_id = %project_id, "failed to update project");
        })?;

    tracing::info!(project_id = %project.id, "updated project");

    Ok(Json(project))
}
