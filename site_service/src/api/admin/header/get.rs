use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use content_store_client::error::StoreError;
use models_content::HeaderSettings;
use thiserror::Error;

use crate::api::context::ApiContext;

#[derive(Debug, Error)]
pub enum GetHeaderErr {
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for GetHeaderErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            GetHeaderErr::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            GetHeaderErr::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "GetHeaderErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// Fetch the projects header settings record.
#[utoipa::path(
    get,
    tag = "Header",
    path = "/admin/projects/header",
    operation_id = "get_header",
    responses(
        (status = 200, body = HeaderSettings),
        (status = 404, body = String),
        (status = 500, body = String),
    )
)]
#[tracing::instrument(skip(context))]
pub async fn handler(
    State(context): State<ApiContext>,
) -> Result<Json<HeaderSettings>, GetHeaderErr> {
    let settings = context
        .content_store
        .get_header()
        .await
        .inspect_err(|e| tracing::error!(error = ?e, "failed to fetch header settings"))?;

    Ok(Json(settings))
}
