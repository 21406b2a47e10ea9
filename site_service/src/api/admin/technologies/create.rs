use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use content_store_client::error::StoreError;
use models_content::Technology;
use models_content::api::CreateTechnologyRequest;
use thiserror::Error;

use crate::api::context::ApiContext;

#[derive(Debug, Error)]
pub enum CreateTechnologyErr {
    #[error("{0}")]
    InvalidRequest(String),
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for CreateTechnologyErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            CreateTechnologyErr::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CreateTechnologyErr::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "CreateTechnologyErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// Create a technology tag.
#[utoipa::path(
    post,
    tag = "Technologies",
    path = "/admin/projects/technologies",
    operation_id = "create_technology",
    request_body = CreateTechnologyRequest,
    responses(
        (status = 201, body = Technology),
        (status = 400, body = String),
        (status = 500, body = String),
    )
)]
#[tracing::instrument(skip(context, request))]
pub async fn handler(
    State(context): State<ApiContext>,
    Json(request): Json<CreateTechnologyRequest>,
) -> Result<(StatusCode, Json<Technology>), CreateTechnologyErr> {
    if let Err(err) = request.validate() {
        tracing::warn!(error = %err, "technology validation failed");
        return Err(CreateTechnologyErr::InvalidRequest(err.to_string()));
    }

    let technology = context
        .content_store
        .create_technology(&request)
        .await
        .inspect_err(|e| {
            tracing::error!(error = ?e, name = %request.name, "failed to create technology");
        })?;

    tracing::info!(technology_id = %technology.id, name = %technology.name, "created technology");

    Ok((StatusCode::CREATED, Json(technology)))
}
