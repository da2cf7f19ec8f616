use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    GlobalSettings, GlobalSettingsPatch, Page, TemplateStatus, Theme,
    ThemePatch,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: Uuid,
    /// `None` for platform-provided system templates.
    pub owner_user_id: Option<Uuid>,
    pub name: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub status: TemplateStatus,
    pub is_system_template: bool,
    pub theme: Theme,
    pub global_settings: GlobalSettings,
    pub current_version: String,
    pub created_at: DateTime<Utc>,
    pub edited_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateWithPages {
    #[serde(flatten)]
    pub template: Template,
    pub pages: Vec<Page>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateCreate {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub theme: Option<ThemePatch>,
    pub global_settings: Option<GlobalSettingsPatch>,
    /// Template whose theme, settings and pages seed the new one.
    pub clone_from_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<TemplateStatus>,
    pub theme: Option<ThemePatch>,
    pub global_settings: Option<GlobalSettingsPatch>,
}

impl TemplateUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.tags.is_none()
            && self.status.is_none()
            && self.theme.as_ref().is_none_or(ThemePatch::is_empty)
            && self
                .global_settings
                .as_ref()
                .is_none_or(GlobalSettingsPatch::is_empty)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateSearch {
    /// Case-insensitive match against name or description.
    pub query: Option<String>,
    pub category: Option<String>,
    pub status: Option<TemplateStatus>,
    /// Matches templates carrying at least one of these tags.
    pub tags: Vec<String>,
    /// 1-based.
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl TemplateSearch {
    pub const DEFAULT_LIMIT: i64 = 20;
    pub const MAX_LIMIT: i64 = 100;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSearchResult {
    pub items: Vec<Template>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}
