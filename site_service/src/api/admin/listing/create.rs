use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use content_store_client::error::StoreError;
use models_content::ProjectEntry;
use models_content::api::CreateProjectRequest;
use thiserror::Error;

use crate::api::context::ApiContext;

#[derive(Debug, Error)]
pub enum CreateProjectErr {
    #[error("{0}")]
    InvalidRequest(String),
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for CreateProjectErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            CreateProjectErr::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CreateProjectErr::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "CreateProjectErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// Create a project entry.
#[utoipa::path(
    post,
    tag = "Listing",
    path = "/admin/projects/listing",
    operation_id = "create_project",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, body = ProjectEntry),
        (status = 400, body = String),
        (status = 500, body = String),
    )
)]
#[tracing::instrument(skip(context, request))]
pub async fn handler(
    State(context): State<ApiContext>,
    Json(request): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ProjectEntry>), CreateProjectErr> {
    if let Err(err) = request.validate() {
        tracing::warn!(error = %err, "project validation failed");
        return Err(CreateProjectErr::InvalidRequest(err.to_string()));
    }

    let project = context
        .content_store
        .create_project(&request)
        .await
        .inspect_err(|e| {
            tracing::error!(error = ?e, title = %request.title, "failed to create project");
        })?;

    tracing::info!(
        project_id = %project.id,
        title = %project.title,
        published = project.published,
        "created project"
    );

    Ok((StatusCode::CREATED, Json(project)))
}
