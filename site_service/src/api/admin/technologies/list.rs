use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use content_store_client::error::StoreError;
use models_content::Technology;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::api::context::ApiContext;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListTechnologiesResponse {
    pub technologies: Vec<Technology>,
}

#[derive(Debug, Error)]
pub enum ListTechnologiesErr {
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for ListTechnologiesErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            ListTechnologiesErr::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "ListTechnologiesErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// List technology tags.
#[utoipa::path(
    get,
    tag = "Technologies",
    path = "/admin/projects/technologies",
    operation_id = "list_technologies",
    responses(
        (status = 200, body = ListTechnologiesResponse),
        (status = 500, body = String),
    )
)]
#[tracing::instrument(skip(context))]
pub async fn handler(
    State(context): State<ApiContext>,
) -> Result<Json<ListTechnologiesResponse>, ListTechnologiesErr> {
    let technologies = context
        .content_store
        .list_technologies()
        .await
        .inspect_err(|e| tracing::error!(error = ?e, "failed to list technologies"))?;

    Ok(Json(ListTechnologiesResponse { technologies }))
}
