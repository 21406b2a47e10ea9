//! JSON-LD structured-data documents derived from a page descriptor.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{PageKind, PageMeta, SiteIdentity};

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// The structured-data document for a page: a BlogPosting for articles,
/// a WebSite record for everything else. The discriminant always matches
/// the descriptor's [PageKind].
#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum StructuredData {
    Article(ArticleDoc),
    Website(WebsiteDoc),
}

/// BlogPosting-shaped record for article pages.
///
/// The headline carries the original, non-suffixed title. Optional fields
/// with no source value are omitted from the serialized document.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDoc {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub doc_type: &'static str,
    pub headline: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<PersonRef>,
    pub publisher: OrganizationRef,
    pub main_entity_of_page: WebPageRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_section: Option<String>,
}

/// WebSite-shaped record for generic pages.
#[derive(Debug, Serialize, PartialEq)]
pub struct WebsiteDoc {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub doc_type: &'static str,
    pub name: String,
    pub description: String,
    pub url: String,
}

/// Nested Person record for the article author.
#[derive(Debug, Serialize, PartialEq)]
pub struct PersonRef {
    #[serde(rename = "@type")]
    pub doc_type: &'static str,
    pub name: String,
}

/// The fixed Organization publisher record.
#[derive(Debug, Serialize, PartialEq)]
pub struct OrganizationRef {
    #[serde(rename = "@type")]
    pub doc_type: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageObjectRef>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ImageObjectRef {
    #[serde(rename = "@type")]
    pub doc_type: &'static str,
    pub url: String,
}

/// WebPage reference pointing at the canonical URL.
#[derive(Debug, Serialize, PartialEq)]
pub struct WebPageRef {
    #[serde(rename = "@type")]
    pub doc_type: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
}

impl StructuredData {
    /// Derive the structured-data document for a page.
    pub fn from_meta(meta: &PageMeta, site: &SiteIdentity) -> Self {
        match meta.kind {
            PageKind::Article => StructuredData::Article(ArticleDoc {
                context: SCHEMA_CONTEXT,
                doc_type: "BlogPosting",
                headline: meta.title.clone(),
                description: meta.description.clone(),
                image: meta.image.as_ref().map(|image| image.url.clone()),
                date_published: meta.published_at,
                // modification time falls back to publication time when absent
                date_modified: meta.modified_at.or(meta.published_at),
                author: meta.author.as_ref().map(|name| PersonRef {
                    doc_type: "Person",
                    name: name.clone(),
                }),
                publisher: OrganizationRef {
                    doc_type: "Organization",
                    name: site.site_name.clone(),
                    logo: site.publisher_logo_url.as_ref().map(|url| ImageObjectRef {
                        doc_type: "ImageObject",
                        url: url.clone(),
                    }),
                },
                main_entity_of_page: WebPageRef {
                    doc_type: "WebPage",
                    id: meta.canonical_url.clone(),
                },
                keywords: meta.keywords.clone(),
                article_section: meta.section.clone(),
            }),
            PageKind::Website => StructuredData::Website(WebsiteDoc {
                context: SCHEMA_CONTEXT,
                doc_type: "WebSite",
                name: site.site_name.clone(),
                description: meta.description.clone(),
                url: meta.canonical_url.clone(),
            }),
        }
    }

    /// Serialize the document to its embedded-script text.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("structured data documents are always serializable")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ImageMeta;
    use chrono::TimeZone;

    fn site() -> SiteIdentity {
        SiteIdentity {
            site_name: "Ada Lindqvist".to_string(),
            site_url: "https://adalindqvist.dev".to_string(),
            twitter_handle: "@adalindqvist".to_string(),
            publisher_logo_url: None,
        }
    }

    fn article() -> PageMeta {
        PageMeta {
            title: "Shipping a plotter font".to_string(),
            description: "Notes from the build".to_string(),
            canonical_url: "https://adalindqvist.dev/blog/plotter-font".to_string(),
            kind: PageKind::Article,
            image: None,
            keywords: None,
            author: None,
            published_at: Some(Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap()),
            modified_at: None,
            section: None,
            tags: vec![],
            noindex: false,
            nofollow: false,
        }
    }

    #[test]
    fn test_article_discriminant_is_blog_posting() {
        let doc = StructuredData::from_meta(&article(), &site());
        let value = serde_json::to_value(&doc).unwrap();

        assert_eq!(value["@type"], "BlogPosting");
        assert_eq!(value["headline"], "Shipping a plotter font");
    }

    #[test]
    fn test_article_modification_date_defaults_to_publication() {
        let doc = StructuredData::from_meta(&article(), &site());
        let value = serde_json::to_value(&doc).unwrap();

        assert_eq!(value["dateModified"], value["datePublished"]);
    }

    #[test]
    fn test_article_explicit_modification_date_wins() {
        let mut page = article();
        page.modified_at = Some(Utc.with_ymd_and_hms(2024, 4, 1, 8, 30, 0).unwrap());

        let doc = StructuredData::from_meta(&page, &site());
        let value = serde_json::to_value(&doc).unwrap();

        assert_ne!(value["dateModified"], value["datePublished"]);
    }

    #[test]
    fn test_article_absent_optionals_are_omitted() {
        let doc = StructuredData::from_meta(&article(), &site());
        let value = serde_json::to_value(&doc).unwrap();
        let object = value.as_object().unwrap();

        for absent in ["image", "author", "keywords", "articleSection"] {
            assert!(!object.contains_key(absent), "{absent} should be omitted");
        }
    }

    #[test]
    fn test_article_author_becomes_person_record() {
        let mut page = article();
        page.author = Some("Ada Lindqvist".to_string());

        let doc = StructuredData::from_meta(&page, &site());
        let value = serde_json::to_value(&doc).unwrap();

        assert_eq!(value["author"]["@type"], "Person");
        assert_eq!(value["author"]["name"], "Ada Lindqvist");
    }

    #[test]
    fn test_website_document_has_no_article_fields() {
        let mut page = article();
        page.kind = PageKind::Website;
        page.image = Some(ImageMeta {
            url: "https://adalindqvist.dev/cover.png".to_string(),
            alt: "cover".to_string(),
        });

        let doc = StructuredData::from_meta(&page, &site());
        let value = serde_json::to_value(&doc).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(value["@type"], "WebSite");
        for article_only in ["headline", "articleSection", "datePublished", "image"] {
            assert!(!object.contains_key(article_only));
        }
    }

    #[test]
    fn test_publisher_logo_is_optional() {
        let mut with_logo = site();
        with_logo.publisher_logo_url = Some("https://adalindqvist.dev/logo.png".to_string());

        let doc = StructuredData::from_meta(&article(), &with_logo);
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["publisher"]["logo"]["@type"], "ImageObject");

        let doc = StructuredData::from_meta(&article(), &site());
        let value = serde_json::to_value(&doc).unwrap();
        assert!(!value["publisher"].as_object().unwrap().contains_key("logo"));
    }
}
