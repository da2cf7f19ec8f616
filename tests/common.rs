#![allow(dead_code)]

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use sitewright::config::SiteDefaults;
use sitewright::db::Database;
use sitewright::models::*;

const SQL_TIME_FMT: &str = "%Y-%m-%d %H:%M:%S%#z";

pub fn parse_time(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_str(s, SQL_TIME_FMT)
        .expect("Invalid time format in test helper")
        .with_timezone(&Utc)
}

pub fn owner_id() -> Uuid {
    Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap()
}

pub fn other_user_id() -> Uuid {
    Uuid::parse_str("00000000-0000-0000-0000-000000000002").unwrap()
}

/// Seeded by `fixtures/system_template.sql`.
pub fn system_template_id() -> Uuid {
    Uuid::parse_str("00000000-0000-0000-0000-00000000a001").unwrap()
}

pub fn system_donate_page_id() -> Uuid {
    Uuid::parse_str("00000000-0000-0000-0000-00000000b002").unwrap()
}

pub fn database(pool: PgPool) -> Database {
    Database::from_pool(pool, SiteDefaults::default())
}

pub async fn create_owned_template(db: &Database, name: &str) -> TemplateWithPages {
    db.create_template(
        owner_id(),
        &TemplateCreate {
            name: name.to_string(),
            ..Default::default()
        },
    )
    .await
    .expect("Failed to create template")
    .expect("Template creation refused")
}

pub async fn create_named_page(db: &Database, template_id: Uuid, name: &str) -> Page {
    db.create_page(
        template_id,
        owner_id(),
        &PageCreate {
            name: name.to_string(),
            ..Default::default()
        },
    )
    .await
    .expect("Failed to create page")
    .expect("Page creation refused")
}

pub fn sample_template() -> Template {
    Template {
        id: Uuid::parse_str("00000000-0000-0000-0000-00000000c001").unwrap(),
        owner_user_id: Some(owner_id()),
        name: "Acme".to_string(),
        description: String::new(),
        category: "general".to_string(),
        tags: Vec::new(),
        status: TemplateStatus::Draft,
        is_system_template: false,
        theme: Theme::default(),
        global_settings: GlobalSettings {
            site: SiteSettings {
                name: "Acme".to_string(),
                ..Default::default()
            },
            ..Default::default()
        },
        current_version: "1.0.0".to_string(),
        created_at: parse_time("2026-01-04 22:15:06+00"),
        edited_at: parse_time("2026-01-04 22:15:06+00"),
    }
}

pub fn sample_page(name: &str, slug: &str, is_homepage: bool, sort_order: i32) -> Page {
    let template = sample_template();
    Page {
        id: Uuid::new_v4(),
        template_id: template.id,
        name: name.to_string(),
        slug: slug.to_string(),
        is_homepage,
        seo: PageSeo {
            title: name.to_string(),
            ..Default::default()
        },
        sections: Vec::new(),
        sort_order,
        created_at: template.created_at,
        edited_at: template.edited_at,
    }
}

pub fn sample_content(pages: &[Page]) -> PublishedContent {
    PublishedContent::assemble(&sample_template(), pages)
}
