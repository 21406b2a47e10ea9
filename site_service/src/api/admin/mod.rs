use crate::api::context::ApiContext;
use axum::{
    Router,
    routing::{delete, get, put},
};

pub mod categories;
pub mod header;
pub mod listing;
pub mod section;
pub mod technologies;

pub fn router() -> Router<ApiContext> {
    Router::new()
        // Tab-to-view resolution for the admin shell
        .route("/section", get(section::resolve_section_handler))
        // Header settings management
        .route(
            "/header",
            get(header::get::handler).put(header::update::handler),
        )
        // Category management
        .route(
            "/categories",
            get(categories::list::handler).post(categories::create::handler),
        )
        .route("/categories/:id", delete(categories::delete::handler))
        // Listing management
        .route(
            "/listing",
            get(listing::list::handler).post(listing::create::handler),
        )
        .route(
            "/listing/:id",
            put(listing::update::handler).delete(listing::delete::handler),
        )
        // Technology tag management
        .route(
            "/technologies",
            get(technologies::list::handler).post(technologies::create::handler),
        )
        .route("/technologies/:id", delete(technologies::delete::handler))
}
