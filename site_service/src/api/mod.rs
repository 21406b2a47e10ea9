use crate::api::context::ApiContext;
use anyhow::Context;
use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod admin;
pub mod contact;
pub mod context;
mod health;
pub mod pages;
pub mod swagger;

pub async fn setup_and_serve(state: ApiContext) -> anyhow::Result<()> {
    let cors = folio_cors::cors_layer();

    let port = state.config.port;
    let env = state.config.environment;
    let app = api_router(state)
        .layer(TraceLayer::new_for_http())
        .merge(health::router())
        .layer(cors)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", swagger::ApiDoc::openapi()));

    let bind_address = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind to address {}", bind_address))?;

    tracing::info!(
        "site service is up and running with environment {:?} on port {}",
        &env,
        &port
    );

    axum::serve(listener, app.into_make_service())
        .await
        .context("error running axum server")
}

fn api_router(app_state: ApiContext) -> Router {
    Router::new()
        .nest("/admin/projects", admin::router())
        .nest("/pages", pages::router())
        .nest("/contact", contact::router())
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::admin::section::{ContentSection, ResolveSectionResponse};
    use crate::api::pages::head::PageHeadResponse;
    use crate::config::Config;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use content_store_client::ContentStoreClient;
    use folio_env::Environment;
    use http_body_util::BodyExt; // for `collect`
    use mailer_client::MailerClient;
    use tower::ServiceExt;

    fn test_config() -> Config {
        Config {
            port: 0,
            environment: Environment::Local,
            site_name: "Ada Lindqvist".to_string(),
            site_description: "Portfolio and blog".to_string(),
            site_url: "https://adalindqvist.dev".to_string(),
            twitter_handle: "@adalindqvist".to_string(),
            publisher_logo_url: None,
            content_store_url: "http://127.0.0.1:1".to_string(),
            content_store_api_key: "test-key".to_string(),
            mailer_url: "http://127.0.0.1:1".to_string(),
            mailer_service_id: "svc".to_string(),
            mailer_template_id: "tpl".to_string(),
            contact_recipient: "inbox@adalindqvist.dev".to_string(),
            contact_rate_limit_reqs: 5,
            contact_rate_limit_window_secs: 3600,
        }
    }

    fn test_router(config: Config) -> Router {
        let content_store = ContentStoreClient::new(
            config.content_store_api_key.clone(),
            config.content_store_url.clone(),
        );
        let mailer = MailerClient::new(config.mailer_url.clone());

        api_router(ApiContext::new(config, content_store, mailer))
    }

    #[tokio::test]
    async fn test_not_found() {
        let api = test_router(test_config());

        let response = api
            .oneshot(
                Request::builder()
                    .uri("/does-not-exist")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_section_resolves_known_tab() {
        let api = test_router(test_config());

        let response = api
            .oneshot(
                Request::builder()
                    .uri("/admin/projects/section?tab=projects-list")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let resolved: ResolveSectionResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(resolved.section, ContentSection::Listing);
        assert_eq!(resolved.tab, "projects-list");
    }

    #[tokio::test]
    async fn test_section_falls_back_to_header() {
        for uri in [
            "/admin/projects/section",
            "/admin/projects/section?tab=",
            "/admin/projects/section?tab=projects-unknown",
        ] {
            let api = test_router(test_config());

            let response = api
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);

            let body = response.into_body().collect().await.unwrap().to_bytes();
            let resolved: ResolveSectionResponse = serde_json::from_slice(&body).unwrap();
            assert_eq!(resolved.section, ContentSection::Header, "uri: {uri}");
        }
    }

    #[tokio::test]
    async fn test_compose_head_for_minimal_descriptor() {
        let api = test_router(test_config());

        let body: Body =
            r#"{"title":"Blog","description":"Writing","canonical_url":"https://adalindqvist.dev/blog"}"#
                .into();
        let request = Request::builder()
            .method(http::Method::POST)
            .uri("/pages/head")
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(body)
            .unwrap();

        let response = api.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let head: PageHeadResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(head.title, "Blog - Ada Lindqvist");
        assert_eq!(head.robots, "index, follow");
        assert_eq!(head.structured_data["@type"], "WebSite");
        assert!(
            head.html
                .contains(r#"<link rel="canonical" href="https://adalindqvist.dev/blog">"#)
        );
    }

    #[tokio::test]
    async fn test_home_head_uses_site_identity() {
        let api = test_router(test_config());

        let response = api
            .oneshot(
                Request::builder()
                    .uri("/pages/head/home")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let head: PageHeadResponse = serde_json::from_slice(&body).unwrap();
        // the site name already contains itself, so no suffix is applied
        assert_eq!(head.title, "Ada Lindqvist");
        assert_eq!(head.structured_data["url"], "https://adalindqvist.dev");
    }

    #[tokio::test]
    async fn test_contact_send_is_rate_limited() {
        let mut config = test_config();
        config.contact_rate_limit_reqs = 0;
        let api = test_router(config);

        let body: Body =
            r#"{"name":"Sam","email":"sam@example.com","message":"Hello there"}"#.into();
        let request = Request::builder()
            .method(http::Method::POST)
            .uri("/contact/send")
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(body)
            .unwrap();

        let response = api.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[tokio::test]
    async fn test_contact_send_rejects_invalid_sender() {
        let api = test_router(test_config());

        let body: Body = r#"{"name":"Sam","email":"not-an-address","message":"Hi"}"#.into();
        let request = Request::builder()
            .method(http::Method::POST)
            .uri("/contact/send")
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(body)
            .unwrap();

        let response = api.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // the content store client points at an unbound local port, so admin
    // reads surface the transport failure as a 500
    #[tokio::test]
    async fn test_admin_list_surfaces_store_failure() {
        let api = test_router(test_config());

        let response = api
            .oneshot(
                Request::builder()
                    .uri("/admin/projects/categories")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
