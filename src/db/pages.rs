use std::collections::HashSet;

use sqlx::types::Json;
use sqlx::PgConnection;
use uuid::Uuid;

use crate::common::{is_unique_violation, DbContext, StoreError};
use crate::models::{
    slugify, Page, PageCreate, PageSnapshot, PageUpdate,
};

use super::access::{Access, authorize};
use super::codec::PageRow;
use super::Database;

impl Database {
    /// Pages of a template in display order. No ownership check: callers
    /// that expose this must authorize first.
    pub async fn get_pages(
        &self,
        template_id: Uuid,
    ) -> Result<Vec<Page>, StoreError> {
        let mut conn =
            self.pool.acquire().await.context("acquiring connection")?;
        fetch_pages(&mut conn, template_id).await
    }

    pub async fn get_page(
        &self,
        template_id: Uuid,
        page_id: Uuid,
    ) -> Result<Option<Page>, StoreError> {
        let mut conn =
            self.pool.acquire().await.context("acquiring connection")?;
        fetch_page(&mut conn, template_id, page_id).await
    }

    pub async fn get_page_by_slug(
        &self,
        template_id: Uuid,
        slug: &str,
    ) -> Result<Option<Page>, StoreError> {
        let row = sqlx::query_as::<_, PageRow>(
            r#"
            SELECT *
            FROM template_pages
            WHERE template_id = $1 AND slug = $2
            "#,
        )
        .bind(template_id)
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .context("loading page by slug")?;

        Ok(row.map(Page::from))
    }

    /// Appends a page after the current last one.
    ///
    /// With `clone_from_id` the source page's sections are copied verbatim
    /// and its SEO block is the base for the request's SEO patch. The source
    /// may live in any template the caller can read. The page title falls
    /// back to the new page's name.
    pub async fn create_page(
        &self,
        template_id: Uuid,
        owner_user_id: Uuid,
        data: &PageCreate,
    ) -> Result<Option<Page>, StoreError> {
        let name = data.name.trim();
        if name.is_empty() {
            return Err(StoreError::invalid("Page name is required"));
        }

        let slug = match data.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => slugify(slug),
            _ => slugify(name),
        };

        let mut tx = self
            .pool
            .begin()
            .await
            .context("starting page creation")?;

        if !authorize(&mut tx, template_id, owner_user_id, Access::Write, true)
            .await?
        {
            return Ok(None);
        }

        let source = match data.clone_from_id {
            Some(source_id) => {
                match fetch_readable_page(&mut tx, source_id, owner_user_id)
                    .await?
                {
                    Some(page) => Some(page),
                    None => return Ok(None),
                }
            }
            None => None,
        };

        let mut seo = source
            .as_ref()
            .map(|page| page.seo.clone())
            .unwrap_or_default();
        seo.title = String::new();
        if let Some(patch) = &data.seo {
            seo.apply(patch);
        }
        if seo.title.trim().is_empty() {
            seo.title = name.to_string();
        }

        let sections = match (&source, &data.sections) {
            (Some(page), _) => page.sections.clone(),
            (None, Some(sections)) => sections.clone(),
            (None, None) => Vec::new(),
        };

        let sort_order = sqlx::query_scalar::<_, i32>(
            r#"
            SELECT COALESCE(MAX(sort_order) + 1, 0)
            FROM template_pages
            WHERE template_id = $1
            "#,
        )
        .bind(template_id)
        .fetch_one(&mut *tx)
        .await
        .context("computing page position")?;

        let snapshot = PageSnapshot {
            name: name.to_string(),
            slug,
            is_homepage: false,
            seo,
            sections,
            sort_order,
        };

        let page = match insert_page(&mut tx, template_id, &snapshot).await {
            Ok(page) => page,
            Err(e) if is_unique_violation(&e) => {
                return Err(StoreError::invalid(format!(
                    "A page with slug '{}' already exists",
                    snapshot.slug
                )));
            }
            Err(e) => return Err(e).context("inserting page"),
        };

        touch_template(&mut tx, template_id).await?;
        tx.commit().await.context("committing page creation")?;

        Ok(Some(page))
    }

    /// Applies the provided fields. SEO patches merge over the stored block;
    /// `sections`, when present, replaces the whole list.
    pub async fn update_page(
        &self,
        template_id: Uuid,
        page_id: Uuid,
        owner_user_id: Uuid,
        data: &PageUpdate,
    ) -> Result<Option<Page>, StoreError> {
        if data.is_empty() {
            return Err(StoreError::invalid("No fields provided"));
        }

        if data.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(StoreError::invalid("Page name cannot be empty"));
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .context("starting page update")?;

        if !authorize(&mut tx, template_id, owner_user_id, Access::Write, true)
            .await?
        {
            return Ok(None);
        }

        let Some(current) = fetch_page(&mut tx, template_id, page_id).await?
        else {
            return Ok(None);
        };

        let is_homepage = match data.is_homepage {
            Some(false) if current.is_homepage => {
                return Err(StoreError::invalid(
                    "A template needs a homepage; flag another page instead",
                ));
            }
            Some(flag) => flag,
            None => current.is_homepage,
        };

        if is_homepage && !current.is_homepage {
            sqlx::query(
                r#"
                UPDATE template_pages
                SET is_homepage = false, edited_at = now()
                WHERE template_id = $1 AND is_homepage = true
                "#,
            )
            .bind(template_id)
            .execute(&mut *tx)
            .await
            .context("moving homepage flag")?;
        }

        let mut seo = current.seo;
        if let Some(patch) = &data.seo {
            seo.apply(patch);
        }

        let slug = data
            .slug
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(slugify);

        let result = sqlx::query_as::<_, PageRow>(
            r#"
            UPDATE template_pages
            SET
                name = COALESCE($1, name),
                slug = COALESCE($2, slug),
                is_homepage = $3,
                seo = $4,
                sections = COALESCE($5, sections),
                edited_at = now()
            WHERE id = $6 AND template_id = $7
            RETURNING *
            "#,
        )
        .bind(data.name.as_deref().map(str::trim))
        .bind(slug.as_deref())
        .bind(is_homepage)
        .bind(Json(&seo))
        .bind(data.sections.as_ref().map(Json))
        .bind(page_id)
        .bind(template_id)
        .fetch_optional(&mut *tx)
        .await;

        let page = match result {
            Ok(page) => page,
            Err(e) if is_unique_violation(&e) => {
                return Err(StoreError::invalid(format!(
                    "A page with slug '{}' already exists",
                    slug.unwrap_or_default()
                )));
            }
            Err(e) => return Err(e).context("updating page"),
        };

        touch_template(&mut tx, template_id).await?;
        tx.commit().await.context("committing page update")?;

        Ok(page.map(Page::from))
    }

    /// Deletes a page. The homepage is never deleted; that case, like a
    /// missing page or a refused caller, reports `false`.
    pub async fn delete_page(
        &self,
        template_id: Uuid,
        page_id: Uuid,
        owner_user_id: Uuid,
    ) -> Result<bool, StoreError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("starting page deletion")?;

        if !authorize(&mut tx, template_id, owner_user_id, Access::Write, true)
            .await?
        {
            return Ok(false);
        }

        let result = sqlx::query(
            r#"
            DELETE FROM template_pages
            WHERE id = $1 AND template_id = $2 AND is_homepage = false
            "#,
        )
        .bind(page_id)
        .bind(template_id)
        .execute(&mut *tx)
        .await
        .context("deleting page")?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        touch_template(&mut tx, template_id).await?;
        tx.commit().await.context("committing page deletion")?;

        Ok(true)
    }

    /// Assigns `sort_order = index` to each listed page in one transaction.
    /// Unlisted pages follow the listed ones in their previous relative order,
    /// so `sort_order` stays dense from 0.
    ///
    /// Any id that is not a page of the template aborts the whole reorder and
    /// rolls back every assignment made so far.
    pub async fn reorder_pages(
        &self,
        template_id: Uuid,
        owner_user_id: Uuid,
        ordered_ids: &[Uuid],
    ) -> Result<Option<Vec<Page>>, StoreError> {
        let mut seen = HashSet::with_capacity(ordered_ids.len());
        if let Some(dup) = ordered_ids.iter().find(|id| !seen.insert(**id)) {
            return Err(StoreError::invalid(format!(
                "Page {dup} is listed more than once"
            )));
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .context("starting page reorder")?;

        if !authorize(&mut tx, template_id, owner_user_id, Access::Write, true)
            .await?
        {
            return Ok(None);
        }

        let unlisted: Vec<Uuid> = fetch_pages(&mut tx, template_id)
            .await?
            .into_iter()
            .map(|page| page.id)
            .filter(|id| !seen.contains(id))
            .collect();

        for (index, page_id) in ordered_ids.iter().chain(&unlisted).enumerate() {
            let sort_order = i32::try_from(index).map_err(|_| {
                StoreError::invalid("Too many pages to reorder")
            })?;

            let result = sqlx::query(
                r#"
                UPDATE template_pages
                SET sort_order = $1, edited_at = now()
                WHERE id = $2 AND template_id = $3
                "#,
            )
            .bind(sort_order)
            .bind(page_id)
            .bind(template_id)
            .execute(&mut *tx)
            .await
            .context("reordering pages")?;

            if result.rows_affected() != 1 {
                tx.rollback().await.context("rolling back page reorder")?;
                log::warn!(
                    "reorder of template {template_id} rolled back: \
                     page {page_id} does not belong to it"
                );
                return Err(StoreError::invalid(format!(
                    "Page {page_id} does not belong to template {template_id}"
                )));
            }
        }

        touch_template(&mut tx, template_id).await?;
        let pages = fetch_pages(&mut tx, template_id).await?;
        tx.commit().await.context("committing page reorder")?;

        log::info!(
            "template {template_id}: reordered {} page(s)",
            ordered_ids.len()
        );

        Ok(Some(pages))
    }
}

pub(crate) async fn fetch_pages(
    conn: &mut PgConnection,
    template_id: Uuid,
) -> Result<Vec<Page>, StoreError> {
    let rows = sqlx::query_as::<_, PageRow>(
        r#"
        SELECT *
        FROM template_pages
        WHERE template_id = $1
        ORDER BY sort_order ASC, created_at ASC
        "#,
    )
    .bind(template_id)
    .fetch_all(&mut *conn)
    .await
    .context("loading pages")?;

    Ok(rows.into_iter().map(Page::from).collect())
}

async fn fetch_page(
    conn: &mut PgConnection,
    template_id: Uuid,
    page_id: Uuid,
) -> Result<Option<Page>, StoreError> {
    let row = sqlx::query_as::<_, PageRow>(
        r#"
        SELECT *
        FROM template_pages
        WHERE id = $1 AND template_id = $2
        "#,
    )
    .bind(page_id)
    .bind(template_id)
    .fetch_optional(&mut *conn)
    .await
    .context("loading page")?;

    Ok(row.map(Page::from))
}

/// Loads a page if its template is readable by `caller`.
async fn fetch_readable_page(
    conn: &mut PgConnection,
    page_id: Uuid,
    caller: Uuid,
) -> Result<Option<Page>, StoreError> {
    let row = sqlx::query_as::<_, PageRow>(
        r#"
        SELECT *
        FROM template_pages
        WHERE id = $1
        "#,
    )
    .bind(page_id)
    .fetch_optional(&mut *conn)
    .await
    .context("loading source page")?;

    let Some(page) = row.map(Page::from) else {
        return Ok(None);
    };

    if authorize(conn, page.template_id, caller, Access::Read, false).await? {
        Ok(Some(page))
    } else {
        Ok(None)
    }
}

pub(crate) async fn insert_page(
    conn: &mut PgConnection,
    template_id: Uuid,
    page: &PageSnapshot,
) -> Result<Page, sqlx::Error> {
    let row = sqlx::query_as::<_, PageRow>(
        r#"
        INSERT INTO template_pages (
            template_id,
            name,
            slug,
            is_homepage,
            seo,
            sections,
            sort_order
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(template_id)
    .bind(&page.name)
    .bind(&page.slug)
    .bind(page.is_homepage)
    .bind(Json(&page.seo))
    .bind(Json(&page.sections))
    .bind(page.sort_order)
    .fetch_one(&mut *conn)
    .await?;

    Ok(row.into())
}

async fn touch_template(
    conn: &mut PgConnection,
    template_id: Uuid,
) -> Result<(), StoreError> {
    sqlx::query(
        r#"
        UPDATE site_templates
        SET edited_at = now()
        WHERE id = $1
        "#,
    )
    .bind(template_id)
    .execute(&mut *conn)
    .await
    .context("touching template")?;

    Ok(())
}
