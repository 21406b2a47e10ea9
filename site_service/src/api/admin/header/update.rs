use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use content_store_client::error::StoreError;
use models_content::HeaderSettings;
use models_content::api::UpsertHeaderRequest;
use thiserror::Error;

use crate::api::context::ApiContext;

#[derive(Debug, Error)]
pub enum UpdateHeaderErr {
    #[error("{0}")]
    InvalidRequest(String),
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for UpdateHeaderErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            UpdateHeaderErr::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            UpdateHeaderErr::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            UpdateHeaderErr::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "UpdateHeaderErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// Replace the projects header settings record.
#[utoipa::path(
    put,
    tag = "Header",
    path = "/admin/projects/header",
    operation_id = "update_header",
    request_body = UpsertHeaderRequest,
    responses(
        (status = 200, body = HeaderSettings),
        (status = 400, body = String),
        (status = 500, body = String),
    )
)]
#[tracing::instrument(skip(context, request))]
pub async fn handler(
    State(context): State<ApiContext>,
    Json(request): Json<UpsertHeaderRequest>,
) -> Result<Json<HeaderSettings>, UpdateHeaderErr> {
    if let Err(err) = request.validate() {
        tracing::warn!(error = %err, "header settings validation failed");
        return Err(UpdateHeaderErr::InvalidRequest(err.to_string()));
    }

    let settings = context
        .content_store
        .upsert_header(&request)
        .await
        .inspect_err(|e| tracing::error!(error = ?e, "failed to upsert header settings"))?;

    tracing::info!(heading = %settings.heading, "updated header settings");

    Ok(Json(settings))
}
