use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use content_store_client::error::StoreError;
use futures::future::try_join4;
use models_content::{Category, HeaderSettings, ProjectEntry, Technology};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::api::context::ApiContext;

/// Everything the public projects page renders, fetched in one round-trip.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PortfolioResponse {
    pub header: HeaderSettings,
    pub categories: Vec<Category>,
    /// Published entries only.
    pub projects: Vec<ProjectEntry>,
    pub technologies: Vec<Technology>,
}

#[derive(Debug, Error)]
pub enum GetPortfolioErr {
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for GetPortfolioErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            GetPortfolioErr::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            GetPortfolioErr::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "GetPortfolioErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// Fetch the public portfolio bundle.
#[utoipa::path(
    get,
    tag = "Pages",
    path = "/pages/portfolio",
    operation_id = "get_portfolio",
    responses(
        (status = 200, body = PortfolioResponse),
        (status = 404, body = String),
        (status = 500, body = String),
    )
)]
#[tracing::instrument(skip(context))]
pub async fn handler(
    State(context): State<ApiContext>,
) -> Result<Json<PortfolioResponse>, GetPortfolioErr> {
    let store = &context.content_store;

    let (header, categories, projects, technologies) = try_join4(
        store.get_header(),
        store.list_categories(),
        store.list_projects(),
        store.list_technologies(),
    )
    .await
    .inspect_err(|e| tracing::error!(error = ?e, "failed to fetch portfolio bundle"))?;

    let projects: Vec<ProjectEntry> = projects
        .into_iter()
        .filter(|project| project.published)
        .collect();

    tracing::debug!(
        categories = categories.len(),
        projects = projects.len(),
        technologies = technologies.len(),
        "assembled portfolio bundle"
    );

    Ok(Json(PortfolioResponse {
        header,
        categories,
        projects,
        technologies,
    }))
}
