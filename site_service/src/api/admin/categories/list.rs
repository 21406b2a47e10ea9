use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use content_store_client::error::StoreError;
use models_content::Category;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::api::context::ApiContext;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListCategoriesResponse {
    pub categories: Vec<Category>,
}

#[derive(Debug, Error)]
pub enum ListCategoriesErr {
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for ListCategoriesErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            ListCategoriesErr::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "ListCategoriesErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// List project categories.
#[utoipa::path(
    get,
    tag = "Categories",
    path = "/admin/projects/categories",
    operation_id = "list_categories",
    responses(
        (status = 200, body = ListCategoriesResponse),
        (status = 500, body = String),
    )
)]
#[tracing::instrument(skip(context))]
pub async fn handler(
    State(context): State<ApiContext>,
) -> Result<Json<ListCategoriesResponse>, ListCategoriesErr> {
    let categories = context
        .content_store
        .list_categories()
        .await
        .inspect_err(|e| tracing::error!(error = ?e, "failed to list categories"))?;

    Ok(Json(ListCategoriesResponse { categories }))
}
