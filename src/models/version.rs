use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{GlobalSettings, Page, PageSeo, Section, Theme};

/// Copy of one page inside a version snapshot. Ids are not kept: a restore
/// re-creates pages with fresh identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    pub name: String,
    pub slug: String,
    pub is_homepage: bool,
    #[serde(default)]
    pub seo: PageSeo,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub sort_order: i32,
}

impl From<&Page> for PageSnapshot {
    fn from(page: &Page) -> Self {
        Self {
            name: page.name.clone(),
            slug: page.slug.clone(),
            is_homepage: page.is_homepage,
            seo: page.seo.clone(),
            sections: page.sections.clone(),
            sort_order: page.sort_order,
        }
    }
}

/// Complete, self-sufficient state of a template at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionSnapshot {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub global_settings: GlobalSettings,
    #[serde(default)]
    pub pages: Vec<PageSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateVersion {
    pub id: Uuid,
    pub template_id: Uuid,
    pub version: String,
    pub changes_note: Option<String>,
    pub snapshot: VersionSnapshot,
    pub created_by_user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TemplateVersionMeta {
    pub id: Uuid,
    pub template_id: Uuid,
    pub version: String,
    pub changes_note: Option<String>,
    pub created_by_user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Bumps the patch component of a `major.minor.patch` string.
///
/// Missing or non-numeric components count as 0; the minor component never
/// rolls over (`2.3.9` becomes `2.3.10`).
pub fn increment_version(version: &str) -> String {
    let mut parts = version
        .trim()
        .split('.')
        .map(|part| part.trim().parse::<u64>().unwrap_or(0));

    let major = parts.next().unwrap_or(0);
    let minor = parts.next().unwrap_or(0);
    let patch = parts.next().unwrap_or(0);

    format!("{}.{}.{}", major, minor, patch.saturating_add(1))
}
