use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use content_store_client::error::StoreError;
use models_content::Category;
use models_content::api::CreateCategoryRequest;
use thiserror::Error;

use crate::api::context::ApiContext;

#[derive(Debug, Error)]
pub enum CreateCategoryErr {
    #[error("{0}")]
    InvalidRequest(String),
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for CreateCategoryErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            CreateCategoryErr::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CreateCategoryErr::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "CreateCategoryErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// Create a project category.
#[utoipa::path(
    post,
    tag = "Categories",
    path = "/admin/projects/categories",
    operation_id = "create_category",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, body = Category),
        (status = 400, body = String),
        (status = 500, body = String),
    )
)]
#[tracing::instrument(skip(context, request))]
pub async fn handler(
    State(context): State<ApiContext>,
    Json(request): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<Category>), CreateCategoryErr> {
    if let Err(err) = request.validate() {
        tracing::warn!(error = %err, "category validation failed");
        return Err(CreateCategoryErr::InvalidRequest(err.to_string()));
    }

    let category = context
        .content_store
        .create_category(&request)
        .await
        .inspect_err(|e| {
            tracing::error!(error = ?e, name = %request.name, "failed to create category");
        })?;

    tracing::info!(category_id = %category.id, name = %category.name, "created category");

    Ok((StatusCode::CREATED, Json(category)))
}
