use crate::api::context::ApiContext;
use axum::{
    Router,
    routing::{get, post},
};

pub mod head;
pub mod portfolio;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/head", post(head::compose_handler))
        .route("/head/home", get(head::home_handler))
        .route("/portfolio", get(portfolio::handler))
}
