//! Assembles document-head metadata for site pages.
//!
//! A [PageMeta] descriptor plus the deployment's [SiteIdentity] deterministically
//! produce a finalized title, a robots directive, a structured-data document and
//! the full head-tag set. Absent optional fields suppress their tags entirely;
//! nothing here fails at runtime.

pub mod head;
pub mod structured;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use head::{HeadTag, build_head, render_head};
pub use structured::StructuredData;

/// Process-wide site identity injected from configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteIdentity {
    pub site_name: String,
    pub site_url: String,
    /// Twitter/X handle used for the `twitter:site` card tag, including the `@`.
    pub twitter_handle: String,
    pub publisher_logo_url: Option<String>,
}

/// Whether a page is a generic website page or a blog article.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    #[default]
    Website,
    Article,
}

/// An image reference with its alternative text.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ImageMeta {
    pub url: String,
    pub alt: String,
}

/// Per-page SEO descriptor, constructed fresh for every render.
///
/// Caller contract: values are well-formed; the assembler does not validate them.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    #[serde(default)]
    pub kind: PageKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageMeta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub noindex: bool,
    #[serde(default)]
    pub nofollow: bool,
}

impl PageMeta {
    /// The title as emitted into the document: the site name is appended
    /// unless the provided title already carries it.
    pub fn finalized_title(&self, site: &SiteIdentity) -> String {
        if self.title.contains(&site.site_name) {
            self.title.clone()
        } else {
            format!("{} - {}", self.title, site.site_name)
        }
    }

    /// The robots meta directive for this page.
    ///
    /// With neither flag set the directive is the literal `"index, follow"`.
    pub fn robots_directive(&self) -> String {
        let mut directives = Vec::new();
        if self.noindex {
            directives.push("noindex");
        }
        if self.nofollow {
            directives.push("nofollow");
        }

        if directives.is_empty() {
            "index, follow".to_string()
        } else {
            directives.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteIdentity {
        SiteIdentity {
            site_name: "Ada Lindqvist".to_string(),
            site_url: "https://adalindqvist.dev".to_string(),
            twitter_handle: "@adalindqvist".to_string(),
            publisher_logo_url: Some("https://adalindqvist.dev/logo.png".to_string()),
        }
    }

    fn meta(title: &str) -> PageMeta {
        PageMeta {
            title: title.to_string(),
            description: "A page".to_string(),
            canonical_url: "https://adalindqvist.dev/page".to_string(),
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
        }
    }

    #[test]
    fn test_title_without_site_name_gets_suffixed() {
        let finalized = meta("Blog").finalized_title(&site());
        assert_eq!(finalized, "Blog - Ada Lindqvist");
    }

    #[test]
    fn test_title_with_site_name_is_unchanged() {
        let finalized = meta("Ada Lindqvist | Blog").finalized_title(&site());
        assert_eq!(finalized, "Ada Lindqvist | Blog");
    }

    #[test]
    fn test_robots_directive_truth_table() {
        let mut page = meta("Blog");
        assert_eq!(page.robots_directive(), "index, follow");

        page.noindex = true;
        assert_eq!(page.robots_directive(), "noindex");

        page.noindex = false;
        page.nofollow = true;
        assert_eq!(page.robots_directive(), "nofollow");

        page.noindex = true;
        assert_eq!(page.robots_directive(), "noindex, nofollow");
    }

    // descriptors arriving over the wire may carry only the required fields
    #[test]
    fn test_descriptor_deserializes_from_minimal_json() {
        let page: PageMeta = serde_json::from_str(
            r#"{"title":"Blog","description":"d","canonical_url":"https://x.dev/"}"#,
        )
        .unwrap();

        assert_eq!(page.kind, PageKind::Website);
        assert!(page.image.is_none());
        assert!(page.tags.is_empty());
        assert!(!page.noindex);
    }
}
