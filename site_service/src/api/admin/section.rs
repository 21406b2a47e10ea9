use axum::{Json, extract::Query};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The four management views of the projects admin area.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContentSection {
    Header,
    Categories,
    Listing,
    Technologies,
}

impl ContentSection {
    /// Resolve a tab identifier to its management view.
    ///
    /// Total and stable: every input resolves to exactly one view, and
    /// unrecognized identifiers (the empty string included) fall back to the
    /// header view.
    pub fn from_tab(tab: &str) -> Self {
        match tab {
            "projects-header" => ContentSection::Header,
            "projects-categories" => ContentSection::Categories,
            "projects-list" => ContentSection::Listing,
            "projects-technologies" => ContentSection::Technologies,
            _ => ContentSection::Header,
        }
    }

    /// The canonical tab identifier for this view.
    pub fn tab(&self) -> &'static str {
        match self {
            ContentSection::Header => "projects-header",
            ContentSection::Categories => "projects-categories",
            ContentSection::Listing => "projects-list",
            ContentSection::Technologies => "projects-technologies",
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SectionQuery {
    #[serde(default)]
    pub tab: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResolveSectionResponse {
    pub section: ContentSection,
    /// Canonical tab identifier of the resolved section.
    pub tab: String,
}

/// Resolve the admin shell's selected tab to a management view.
///
/// Selection only — the resolved view's data round-trips belong to that
/// view's own endpoints.
#[utoipa::path(
    get,
    tag = "Admin",
    path = "/admin/projects/section",
    operation_id = "resolve_section",
    params(
        ("tab" = Option<String>, Query, description = "Tab identifier selected in the admin shell."),
    ),
    responses(
        (status = 200, body = ResolveSectionResponse),
    )
)]
#[tracing::instrument]
pub async fn resolve_section_handler(
    Query(query): Query<SectionQuery>,
) -> Json<ResolveSectionResponse> {
    let section = ContentSection::from_tab(query.tab.as_deref().unwrap_or_default());

    Json(ResolveSectionResponse {
        section,
        tab: section.tab().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_recognized_tab_resolves_to_its_own_view() {
        assert_eq!(
            ContentSection::from_tab("projects-header"),
            ContentSection::Header
        );
        assert_eq!(
            ContentSection::from_tab("projects-categories"),
            ContentSection::Categories
        );
        assert_eq!(
            ContentSection::from_tab("projects-list"),
            ContentSection::Listing
        );
        assert_eq!(
            ContentSection::from_tab("projects-technologies"),
            ContentSection::Technologies
        );
    }

    #[test]
    fn test_unrecognized_tabs_fall_back_to_header() {
        for tab in ["", "projects", "projects-unknown", "PROJECTS-LIST", "  "] {
            assert_eq!(ContentSection::from_tab(tab), ContentSection::Header);
        }
    }

    #[test]
    fn test_mapping_is_stable() {
        for tab in ["projects-list", "anything-else"] {
            assert_eq!(ContentSection::from_tab(tab), ContentSection::from_tab(tab));
        }
    }

    #[test]
    fn test_canonical_tab_round_trips() {
        for section in [
            ContentSection::Header,
            ContentSection::Categories,
            ContentSection::Listing,
            ContentSection::Technologies,
        ] {
            assert_eq!(ContentSection::from_tab(section.tab()), section);
        }
    }
}
