use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Section;

crate::patchable! {
    /// Per-page search-engine and social metadata.
    pub struct PageSeo / PageSeoPatch {
        pub title: String = String::new(),
        pub description: String = String::new(),
        pub keywords: Vec<String> = Vec::new(),
        pub canonical_url: Option<String> = None,
        pub no_index: bool = false,
        pub og_image: Option<String> = None,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: Uuid,
    pub template_id: Uuid,
    pub name: String,
    pub slug: String,
    pub is_homepage: bool,
    pub seo: PageSeo,
    pub sections: Vec<Section>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub edited_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageCreate {
    pub name: String,
    pub slug: Option<String>,
    pub seo: Option<PageSeoPatch>,
    pub sections: Option<Vec<Section>>,
    pub clone_from_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageUpdate {
    pub name: Option<String>,
    pub slug: Option<String>,
    /// Only `true` is meaningful: it moves the homepage flag to this page.
    pub is_homepage: Option<bool>,
    pub seo: Option<PageSeoPatch>,
    /// Replaces the whole section list when present.
    pub sections: Option<Vec<Section>>,
}

impl PageUpdate {
    pub fn is_empty(&self) -> bool {
        matches!(
            self,
            Self {
                name: None,
                slug: None,
                is_homepage: None,
                seo: None,
                sections: None,
            }
        )
    }
}

/// Turns free text into a URL slug: lowercase ASCII alphanumerics, every
/// other run of characters collapsed into a single `-`.
pub fn slugify(input: &str) -> String {
    slugify_or(input, "page")
}

/// [`slugify`] with a caller-chosen result for input that has no ASCII
/// alphanumerics at all.
pub fn slugify_or(input: &str, fallback: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        fallback.to_string()
    } else {
        slug
    }
}
