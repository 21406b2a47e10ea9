//! Head-tag assembly and HTML rendering.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{PageKind, PageMeta, SiteIdentity, StructuredData};

/// Twitter card type emitted for every page.
pub const TWITTER_CARD: &str = "summary_large_image";

/// A single tag destined for the document head.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "snake_case", tag = "tag")]
pub enum HeadTag {
    Title { text: String },
    /// `<meta name=... content=...>`
    Meta { name: String, content: String },
    /// `<meta property=... content=...>` (Open Graph family)
    Property { property: String, content: String },
    Link { rel: String, href: String },
    /// The embedded `application/ld+json` structured-data script.
    Script { body: String },
}

fn meta(name: &str, content: impl Into<String>) -> HeadTag {
    HeadTag::Meta {
        name: name.to_string(),
        content: content.into(),
    }
}

fn property(property: &str, content: impl Into<String>) -> HeadTag {
    HeadTag::Property {
        property: property.to_string(),
        content: content.into(),
    }
}

/// Assemble the full head-tag set for a page.
///
/// Pure function of the descriptor and site identity; replace the previous
/// render's output wholesale with the result.
pub fn build_head(page: &PageMeta, site: &SiteIdentity) -> Vec<HeadTag> {
    let title = page.finalized_title(site);
    let og_type = match page.kind {
        PageKind::Article => "article",
        PageKind::Website => "website",
    };

    let mut tags = vec![
        HeadTag::Title {
            text: title.clone(),
        },
        meta("description", page.description.clone()),
    ];

    if let Some(keywords) = &page.keywords {
        tags.push(meta("keywords", keywords.clone()));
    }

    tags.push(HeadTag::Link {
        rel: "canonical".to_string(),
        href: page.canonical_url.clone(),
    });
    tags.push(meta("robots", page.robots_directive()));

    tags.push(property("og:title", title.clone()));
    tags.push(property("og:description", page.description.clone()));
    tags.push(property("og:type", og_type));
    tags.push(property("og:url", page.canonical_url.clone()));
    tags.push(property("og:site_name", site.site_name.clone()));

    if let Some(image) = &page.image {
        tags.push(property("og:image", image.url.clone()));
        tags.push(property("og:image:alt", image.alt.clone()));
    }

    if page.kind == PageKind::Article {
        if let Some(published) = page.published_at {
            tags.push(property("article:published_time", published.to_rfc3339()));
        }
        if let Some(modified) = page.modified_at {
            tags.push(property("article:modified_time", modified.to_rfc3339()));
        }
        if let Some(author) = &page.author {
            tags.push(property("article:author", author.clone()));
        }
        if let Some(section) = &page.section {
            tags.push(property("article:section", section.clone()));
        }
        for tag in &page.tags {
            tags.push(property("article:tag", tag.clone()));
        }
    }

    tags.push(meta("twitter:card", TWITTER_CARD));
    tags.push(meta("twitter:site", site.twitter_handle.clone()));
    tags.push(meta("twitter:title", title));
    tags.push(meta("twitter:description", page.description.clone()));
    if let Some(image) = &page.image {
        tags.push(meta("twitter:image", image.url.clone()));
        tags.push(meta("twitter:image:alt", image.alt.clone()));
    }

    tags.push(HeadTag::Script {
        body: StructuredData::from_meta(page, site).to_json(),
    });

    tags
}

/// Render a head-tag set to an HTML fragment, one element per line.
pub fn render_head(tags: &[HeadTag]) -> String {
    tags.iter()
        .map(render_tag)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_tag(tag: &HeadTag) -> String {
    match tag {
        HeadTag::Title { text } => format!("<title>{}</title>", escape_text(text)),
        HeadTag::Meta { name, content } => format!(
            r#"<meta name="{}" content="{}">"#,
            escape_attr(name),
            escape_attr(content)
        ),
        HeadTag::Property { property, content } => format!(
            r#"<meta property="{}" content="{}">"#,
            escape_attr(property),
            escape_attr(content)
        ),
        HeadTag::Link { rel, href } => format!(
            r#"<link rel="{}" href="{}">"#,
            escape_attr(rel),
            escape_attr(href)
        ),
        HeadTag::Script { body } => format!(
            r#"<script type="application/ld+json">{}</script>"#,
            // a literal `<` inside the JSON could terminate the script element early
            body.replace('<', "\\u003c")
        ),
    }
}

fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ImageMeta;
    use chrono::{TimeZone, Utc};

    fn site() -> SiteIdentity {
        SiteIdentity {
            site_name: "Ada Lindqvist".to_string(),
            site_url: "https://adalindqvist.dev".to_string(),
            twitter_handle: "@adalindqvist".to_string(),
            publisher_logo_url: None,
        }
    }

    fn page() -> PageMeta {
        PageMeta {
            title: "Blog".to_string(),
            description: "Writing about plotters".to_string(),
            canonical_url: "https://adalindqvist.dev/blog".to_string(),
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

    fn tag_values(tags: &[HeadTag]) -> Vec<String> {
        tags.iter()
            .map(|tag| match tag {
                HeadTag::Title { text } => format!("title={text}"),
                HeadTag::Meta { name, content } => format!("{name}={content}"),
                HeadTag::Property { property, content } => format!("{property}={content}"),
                HeadTag::Link { rel, href } => format!("{rel}={href}"),
                HeadTag::Script { .. } => "script".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_no_image_means_zero_image_entries() {
        let tags = build_head(&page(), &site());

        let image_entries = tag_values(&tags)
            .into_iter()
            .filter(|entry| entry.contains("image"))
            .count();
        assert_eq!(image_entries, 0);

        let HeadTag::Script { body } = tags.last().unwrap() else {
            panic!("last tag should be the structured-data script");
        };
        assert!(!body.contains("\"image\""));
    }

    #[test]
    fn test_image_produces_open_graph_and_twitter_entries() {
        let mut page = page();
        page.image = Some(ImageMeta {
            url: "https://adalindqvist.dev/cover.png".to_string(),
            alt: "A pen plotter mid-draw".to_string(),
        });

        let values = tag_values(&build_head(&page, &site()));
        for expected in [
            "og:image=https://adalindqvist.dev/cover.png",
            "og:image:alt=A pen plotter mid-draw",
            "twitter:image=https://adalindqvist.dev/cover.png",
            "twitter:image:alt=A pen plotter mid-draw",
        ] {
            assert!(values.contains(&expected.to_string()), "missing {expected}");
        }
    }

    #[test]
    fn test_website_page_emits_no_article_tags() {
        let mut page = page();
        // populated article fields must still be suppressed on a website page
        page.published_at = Some(Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap());
        page.section = Some("Projects".to_string());
        page.tags = vec!["rust".to_string()];

        let values = tag_values(&build_head(&page, &site()));
        assert!(values.iter().all(|entry| !entry.starts_with("article:")));
        assert!(values.contains(&"og:type=website".to_string()));
    }

    #[test]
    fn test_article_page_emits_one_tag_entry_per_tag() {
        let mut page = page();
        page.kind = PageKind::Article;
        page.published_at = Some(Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap());
        page.tags = vec!["rust".to_string(), "plotters".to_string()];

        let values = tag_values(&build_head(&page, &site()));
        assert!(values.contains(&"og:type=article".to_string()));
        assert!(values.contains(&"article:tag=rust".to_string()));
        assert!(values.contains(&"article:tag=plotters".to_string()));
        assert!(
            values
                .iter()
                .any(|entry| entry.starts_with("article:published_time="))
        );
    }

    #[test]
    fn test_twitter_card_type_is_fixed() {
        let values = tag_values(&build_head(&page(), &site()));
        assert!(values.contains(&format!("twitter:card={TWITTER_CARD}")));
        assert!(values.contains(&"twitter:site=@adalindqvist".to_string()));
    }

    #[test]
    fn test_exactly_one_structured_data_script() {
        let tags = build_head(&page(), &site());
        let scripts = tags
            .iter()
            .filter(|tag| matches!(tag, HeadTag::Script { .. }))
            .count();
        assert_eq!(scripts, 1);
    }

    #[test]
    fn test_absent_keywords_emit_no_tag() {
        let values = tag_values(&build_head(&page(), &site()));
        assert!(values.iter().all(|entry| !entry.starts_with("keywords=")));
    }

    #[test]
    fn test_render_escapes_attribute_values() {
        let mut page = page();
        page.description = r#"Quotes " and <angles>"#.to_string();

        let html = render_head(&build_head(&page, &site()));
        assert!(html.contains("Quotes &quot; and &lt;angles&gt;"));
        assert!(!html.contains(r#"content="Quotes " and"#));
    }

    #[test]
    fn test_render_neutralizes_script_terminators() {
        let mut page = page();
        // an article headline carries the raw title into the script body
        page.kind = PageKind::Article;
        page.title = "</script><b>".to_string();

        let html = render_head(&build_head(&page, &site()));
        let script = html
            .lines()
            .find(|line| line.starts_with("<script"))
            .unwrap();
        assert_eq!(script.matches("</script").count(), 1);
        assert!(script.ends_with("</script>"));
    }
}
