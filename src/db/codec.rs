//! Row types for the JSON-typed columns. Decoding into the typed model
//! happens here and nowhere else.

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::{
    GlobalSettings, Page, PageSeo, Section, Template, TemplateStatus,
    TemplateVersion, Theme, VersionSnapshot,
};

#[derive(Debug, FromRow)]
pub(crate) struct TemplateRow {
    pub id: Uuid,
    pub owner_user_id: Option<Uuid>,
    pub name: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub status: String,
    pub is_system_template: bool,
    pub theme: Json<Theme>,
    pub global_settings: Json<GlobalSettings>,
    pub current_version: String,
    pub created_at: DateTime<Utc>,
    pub edited_at: DateTime<Utc>,
}

impl From<TemplateRow> for Template {
    fn from(row: TemplateRow) -> Self {
        let status = row.status.parse().unwrap_or_else(|e| {
            log::warn!("template {}: {e}; treating as draft", row.id);
            TemplateStatus::Draft
        });

        Self {
            id: row.id,
            owner_user_id: row.owner_user_id,
            name: row.name,
            description: row.description,
            category: row.category,
            tags: row.tags,
            status,
            is_system_template: row.is_system_template,
            theme: row.theme.0,
            global_settings: row.global_settings.0,
            current_version: row.current_version,
            created_at: row.created_at,
            edited_at: row.edited_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct PageRow {
    pub id: Uuid,
    pub template_id: Uuid,
    pub name: String,
    pub slug: String,
    pub is_homepage: bool,
    pub seo: Json<PageSeo>,
    pub sections: Json<Vec<Section>>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub edited_at: DateTime<Utc>,
}

impl From<PageRow> for Page {
    fn from(row: PageRow) -> Self {
        Self {
            id: row.id,
            template_id: row.template_id,
            name: row.name,
            slug: row.slug,
            is_homepage: row.is_homepage,
            seo: row.seo.0,
            sections: row.sections.0,
            sort_order: row.sort_order,
            created_at: row.created_at,
            edited_at: row.edited_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct VersionRow {
    pub id: Uuid,
    pub template_id: Uuid,
    pub version: String,
    pub changes_note: Option<String>,
    pub snapshot: Json<VersionSnapshot>,
    pub created_by_user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<VersionRow> for TemplateVersion {
    fn from(row: VersionRow) -> Self {
        Self {
            id: row.id,
            template_id: row.template_id,
            version: row.version,
            changes_note: row.changes_note,
            snapshot: row.snapshot.0,
            created_by_user_id: row.created_by_user_id,
            created_at: row.created_at,
        }
    }
}
