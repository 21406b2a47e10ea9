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
pub enum DeleteCategoryErr {
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for DeleteCategoryErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            DeleteCategoryErr::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            DeleteCategoryErr::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "DeleteCategoryErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// Delete a project category.
#[utoipa::path(
    delete,
    tag = "Categories",
    path = "/admin/projects/categories/{id}",
    operation_id = "delete_category",
    params(
        ("id" = Uuid, Path, description = "Category id."),
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
    Path(category_id): Path<Uuid>,
) -> Result<StatusCode, DeleteCategoryErr> {
    context
        .content_store
        .delete_category(category_id)
        .await
        .inspect_err(|e| {
            tracing::error!(error = ?e, category_id = %category_id, "failed to delete category");
        })?;

    tracing::info!(category_id = %category_id, "deleted category");

    Ok(StatusCode::NO_CONTENT)
}
