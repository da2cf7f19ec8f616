use sqlx::types::Json;
use uuid::Uuid;

use crate::common::{DbContext, StoreError};
use crate::models::{
    increment_version, PageSnapshot, TemplateVersion, TemplateVersionMeta,
    TemplateWithPages, VersionSnapshot,
};

use super::access::{Access, authorize};
use super::codec::VersionRow;
use super::pages::{fetch_pages, insert_page};
use super::site_templates::fetch_template;
use super::Database;

impl Database {
    /// Snapshots the template's current theme, settings and pages as the
    /// next patch version. The snapshot and the version bump commit
    /// together.
    pub async fn create_version(
        &self,
        template_id: Uuid,
        owner_user_id: Uuid,
        changes_note: Option<&str>,
    ) -> Result<Option<TemplateVersion>, StoreError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("starting version creation")?;

        if !authorize(&mut tx, template_id, owner_user_id, Access::Write, true)
            .await?
        {
            return Ok(None);
        }

        let Some(template) = fetch_template(&mut tx, template_id).await? else {
            return Ok(None);
        };
        let pages = fetch_pages(&mut tx, template_id).await?;

        let snapshot = VersionSnapshot {
            theme: template.theme,
            global_settings: template.global_settings,
            pages: pages.iter().map(PageSnapshot::from).collect(),
        };
        let next = increment_version(&template.current_version);
        let changes_note =
            changes_note.map(str::trim).filter(|note| !note.is_empty());

        let version = sqlx::query_as::<_, VersionRow>(
            r#"
            INSERT INTO template_versions (
                template_id,
                version,
                changes_note,
                snapshot,
                created_by_user_id
            )
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(template_id)
        .bind(&next)
        .bind(changes_note)
        .bind(Json(&snapshot))
        .bind(owner_user_id)
        .fetch_one(&mut *tx)
        .await
        .context("inserting version snapshot")?;

        sqlx::query(
            r#"
            UPDATE site_templates
            SET current_version = $1
            WHERE id = $2
            "#,
        )
        .bind(&next)
        .bind(template_id)
        .execute(&mut *tx)
        .await
        .context("bumping template version")?;

        tx.commit().await.context("committing version creation")?;

        log::info!(
            "template {template_id}: version {next} saved with {} page(s)",
            snapshot.pages.len()
        );

        Ok(Some(version.into()))
    }

    /// Versions of a template, newest first. `None` when the template is not
    /// visible to `caller`.
    pub async fn list_versions(
        &self,
        template_id: Uuid,
        caller: Uuid,
    ) -> Result<Option<Vec<TemplateVersionMeta>>, StoreError> {
        let mut conn =
            self.pool.acquire().await.context("acquiring connection")?;

        if !authorize(&mut conn, template_id, caller, Access::Read, false)
            .await?
        {
            return Ok(None);
        }

        let versions = sqlx::query_as::<_, TemplateVersionMeta>(
            r#"
            SELECT
                id,
                template_id,
                version,
                changes_note,
                created_by_user_id,
                created_at
            FROM template_versions
            WHERE template_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(template_id)
        .fetch_all(&mut *conn)
        .await
        .context("listing versions")?;

        Ok(Some(versions))
    }

    pub async fn get_version(
        &self,
        template_id: Uuid,
        version_id: Uuid,
        caller: Uuid,
    ) -> Result<Option<TemplateVersion>, StoreError> {
        let mut conn =
            self.pool.acquire().await.context("acquiring connection")?;

        if !authorize(&mut conn, template_id, caller, Access::Read, false)
            .await?
        {
            return Ok(None);
        }

        let version = sqlx::query_as::<_, VersionRow>(
            r#"
            SELECT *
            FROM template_versions
            WHERE id = $1 AND template_id = $2
            "#,
        )
        .bind(version_id)
        .bind(template_id)
        .fetch_optional(&mut *conn)
        .await
        .context("loading version")?;

        Ok(version.map(TemplateVersion::from))
    }

    /// Replaces the template's theme, settings and entire page collection
    /// with the snapshot of `version_id`.
    ///
    /// Pages are deleted and re-created in snapshot order under fresh ids;
    /// nothing of the previous state is merged in. The overwritten state is
    /// not versioned here, and `current_version` is left as is so later
    /// snapshots keep numbering upwards.
    pub async fn restore_version(
        &self,
        template_id: Uuid,
        version_id: Uuid,
        owner_user_id: Uuid,
    ) -> Result<Option<TemplateWithPages>, StoreError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("starting version restore")?;

        if !authorize(&mut tx, template_id, owner_user_id, Access::Write, true)
            .await?
        {
            return Ok(None);
        }

        let version = sqlx::query_as::<_, VersionRow>(
            r#"
            SELECT *
            FROM template_versions
            WHERE id = $1 AND template_id = $2
            "#,
        )
        .bind(version_id)
        .bind(template_id)
        .fetch_optional(&mut *tx)
        .await
        .context("loading version")?;

        let Some(version) = version.map(TemplateVersion::from) else {
            return Ok(None);
        };
        let snapshot = version.snapshot;

        sqlx::query(
            r#"
            UPDATE site_templates
            SET
                theme = $1,
                global_settings = $2,
                edited_at = now()
            WHERE id = $3
            "#,
        )
        .bind(Json(&snapshot.theme))
        .bind(Json(&snapshot.global_settings))
        .bind(template_id)
        .execute(&mut *tx)
        .await
        .context("restoring template settings")?;

        sqlx::query(
            r#"
            DELETE FROM template_pages
            WHERE template_id = $1
            "#,
        )
        .bind(template_id)
        .execute(&mut *tx)
        .await
        .context("clearing pages for restore")?;

        let mut pages = Vec::with_capacity(snapshot.pages.len());
        for (index, page) in snapshot.pages.iter().enumerate() {
            let page = PageSnapshot {
                sort_order: i32::try_from(index).unwrap_or(i32::MAX),
                ..page.clone()
            };
            let page = insert_page(&mut tx, template_id, &page)
                .await
                .context("re-creating pages for restore")?;
            pages.push(page);
        }

        let Some(template) = fetch_template(&mut tx, template_id).await? else {
            return Ok(None);
        };

        tx.commit().await.context("committing version restore")?;

        log::info!(
            "template {template_id}: restored version {} ({} page(s))",
            version.version,
            pages.len()
        );

        Ok(Some(TemplateWithPages { template, pages }))
    }
}
