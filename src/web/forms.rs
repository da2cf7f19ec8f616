use serde::Deserialize;
use uuid::Uuid;

use sitewright::models::{TemplateSearch, TemplateStatus};

#[derive(Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    /// Comma-separated.
    pub tags: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl SearchQuery {
    pub fn into_search(self) -> Result<TemplateSearch, String> {
        let status = self
            .status
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse::<TemplateStatus>)
            .transpose()?;

        let tags = self
            .tags
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        Ok(TemplateSearch {
            query: self.q,
            category: self.category,
            status,
            tags,
            page: self.page,
            limit: self.limit,
        })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderForm {
    pub page_ids: Vec<Uuid>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct VersionForm {
    pub changes_note: Option<String>,
}

#[derive(Deserialize)]
pub struct PreviewQuery {
    pub page: Option<String>,
}
