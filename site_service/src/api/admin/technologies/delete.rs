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
pub enum DeleteTechnologyErr {
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for DeleteTechnologyErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            DeleteTechnologyErr::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            DeleteTechnologyErr::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "DeleteTechnologyErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// Delete a technology tag.
#[utoipa::path(
    delete,
    tag = "Technologies",
    path = "/admin/projects/technologies/{id}",
    operation_id = "delete_technology",
    params(
        ("id" = Uuid, Path, description = "Technology id."),
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
    Path(technology_id): Path<Uuid>,
) -> Result<StatusCode, DeleteTechnologyErr> {
    context
        .content_store
        .delete_technology(technology_id)
        .await
        .inspect_err(|e| {
            tracing::error!(error = ?e, technology_id = %technology_id, "failed to delete technology");
        })?;

    tracing::info!(technology_id = %technology_id, "deleted technology");

    Ok(StatusCode::NO_CONTENT)
}
