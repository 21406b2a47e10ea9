use axum::{Json, extract::State};
use seo_meta::{HeadTag, PageKind, PageMeta, SiteIdentity, StructuredData, build_head, render_head};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::context::ApiContext;

/// The derived head for one page render.
///
/// The caller replaces its document head with this output wholesale;
/// the fields are different projections of the same assembly.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PageHeadResponse {
    /// Finalized title, site name suffix applied.
    pub title: String,
    pub robots: String,
    pub tags: Vec<HeadTag>,
    /// The tag set rendered as an HTML fragment, one element per line.
    pub html: String,
    #[schema(value_type = Object)]
    pub structured_data: serde_json::Value,
}

impl PageHeadResponse {
    fn compose(page: &PageMeta, site: &SiteIdentity) -> Self {
        let tags = build_head(page, site);
        let html = render_head(&tags);
        let structured_data = serde_json::to_value(StructuredData::from_meta(page, site))
            .expect("structured data documents are always serializable");

        Self {
            title: page.finalized_title(site),
            robots: page.robots_directive(),
            tags,
            html,
            structured_data,
        }
    }
}

/// Assemble the document head for a page descriptor.
#[utoipa::path(
    post,
    tag = "Pages",
    path = "/pages/head",
    operation_id = "compose_head",
    request_body = PageMeta,
    responses(
        (status = 200, body = PageHeadResponse),
    )
)]
#[tracing::instrument(skip(context, page), fields(canonical_url = %page.canonical_url))]
pub async fn compose_handler(
    State(context): State<ApiContext>,
    Json(page): Json<PageMeta>,
) -> Json<PageHeadResponse> {
    let site = context.config.site_identity();

    Json(PageHeadResponse::compose(&page, &site))
}

/// Assemble the document head for the site root.
#[utoipa::path(
    get,
    tag = "Pages",
    path = "/pages/head/home",
    operation_id = "home_head",
    responses(
        (status = 200, body = PageHeadResponse),
    )
)]
#[tracing::instrument(skip(context))]
pub async fn home_handler(State(context): State<ApiContext>) -> Json<PageHeadResponse> {
    let site = context.config.site_identity();

    let page = PageMeta {
        title: context.config.site_name.clone(),
        description: context.config.site_description.clone(),
        canonical_url: context.config.site_url.clone(),
        kind: PageKind::Website,
        image: None,
        keywords: None,
        author: None,
        published_at: None,
        modified_at: None,
        section: None,
        tags: vec![],
        noindex: false,
        nofollow: false,
    };

    Json(PageHeadResponse::compose(&page, &site))
}
