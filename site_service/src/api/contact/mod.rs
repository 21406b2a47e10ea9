use crate::api::context::ApiContext;
use axum::{Router, routing::post};

pub mod send;

pub fn router() -> Router<ApiContext> {
    Router::new().route("/send", post(send::handler))
}
