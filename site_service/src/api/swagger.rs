use crate::api::admin::categories::list::ListCategoriesResponse;
use crate::api::admin::listing::list::ListProjectsResponse;
use crate::api::admin::section::{ResolveSectionResponse, SectionQuery};
use crate::api::admin::technologies::list::ListTechnologiesResponse;
use crate::api::contact::send::{ContactRequest, ContactResponse};
use crate::api::pages::head::PageHeadResponse;
use crate::api::pages::portfolio::PortfolioResponse;
use models_content::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Section resolution
        crate::api::admin::section::resolve_section_handler,
        // Header settings
        crate::api::admin::header::get::handler,
        crate::api::admin::header::update::handler,
        // Categories
        crate::api::admin::categories::list::handler,
        crate::api::admin::categories::create::handler,
        crate::api::admin::categories::delete::handler,
        // Listing
        crate::api::admin::listing::list::handler,
        crate::api::admin::listing::create::handler,
        crate::api::admin::listing::update::handler,
        crate::api::admin::listing::delete::handler,
        // Technologies
        crate::api::admin::technologies::list::handler,
        crate::api::admin::technologies::create::handler,
        crate::api::admin::technologies::delete::handler,
        // Pages
        crate::api::pages::head::compose_handler,
        crate::api::pages::head::home_handler,
        crate::api::pages::portfolio::handler,
        // Contact
        crate::api::contact::send::handler,
    ),
    components(
        schemas(
            models_content::HeaderSettings,
            models_content::Category,
            models_content::ProjectEntry,
            models_content::Technology,
            api::UpsertHeaderRequest,
            api::CreateCategoryRequest,
            api::CreateProjectRequest,
            api::UpdateProjectRequest,
            api::CreateTechnologyRequest,
            seo_meta::PageMeta,
            seo_meta::PageKind,
            seo_meta::ImageMeta,
            seo_meta::HeadTag,
            crate::api::admin::section::ContentSection,
            SectionQuery,
            ResolveSectionResponse,
            ListCategoriesResponse,
            ListProjectsResponse,
            ListTechnologiesResponse,
            PageHeadResponse,
            PortfolioResponse,
            ContactRequest,
            ContactResponse,
        )
    ),
    tags(
        (name = "site service", description = "Portfolio site content and metadata service")
    )
)]
pub struct ApiDoc;
