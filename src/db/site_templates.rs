use sqlx::types::Json;
use sqlx::{PgConnection, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::common::{DbContext, StoreError};
use crate::models::{
    Page, PageSeo, PageSnapshot, Template, TemplateCreate, TemplateSearch,
    TemplateSearchResult, TemplateStatus, TemplateUpdate, TemplateWithPages,
};

use super::access::{Access, authorize};
use super::codec::TemplateRow;
use super::pages::{fetch_pages, insert_page};
use super::Database;

impl Database {
    /// Creates a template owned by `owner_user_id`.
    ///
    /// With `clone_from_id` the source's theme and settings are the base the
    /// request is merged over, and its pages are duplicated under new ids.
    /// Otherwise the configured defaults are the base and a single homepage is
    /// created. Returns `None` when the clone source is not visible.
    pub async fn create_template(
        &self,
        owner_user_id: Uuid,
        data: &TemplateCreate,
    ) -> Result<Option<TemplateWithPages>, StoreError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("starting template creation")?;

        let (base_theme, base_settings, source) = match data.clone_from_id {
            Some(source_id) => {
                if !authorize(
                    &mut tx,
                    source_id,
                    owner_user_id,
                    Access::Read,
                    false,
                )
                .await?
                {
                    return Ok(None);
                }

                let Some(source) = fetch_template(&mut tx, source_id).await?
                else {
                    return Ok(None);
                };
                let pages = fetch_pages(&mut tx, source_id).await?;

                (
                    source.theme.clone(),
                    source.global_settings.clone(),
                    Some((source, pages)),
                )
            }
            None => (
                self.defaults.theme.clone(),
                self.defaults.global_settings.clone(),
                None,
            ),
        };

        let name = match (data.name.trim(), &source) {
            ("", Some((source, _))) => format!("{} (Copy)", source.name),
            ("", None) => {
                return Err(StoreError::invalid("Template name is required"));
            }
            (name, _) => name.to_string(),
        };

        let description = data
            .description
            .clone()
            .or_else(|| source.as_ref().map(|(s, _)| s.description.clone()))
            .unwrap_or_default();
        let category = data
            .category
            .clone()
            .or_else(|| source.as_ref().map(|(s, _)| s.category.clone()))
            .unwrap_or_else(|| "general".to_string());

        let theme = match &data.theme {
            Some(patch) => base_theme.merged(patch),
            None => base_theme,
        };
        let global_settings = match &data.global_settings {
            Some(patch) => base_settings.merged(patch),
            None => base_settings,
        };

        let template: Template = sqlx::query_as::<_, TemplateRow>(
            r#"
            INSERT INTO site_templates (
                owner_user_id,
                name,
                description,
                category,
                tags,
                status,
                is_system_template,
                theme,
                global_settings
            )
            VALUES ($1, $2, $3, $4, $5, $6, false, $7, $8)
            RETURNING *
            "#,
        )
        .bind(owner_user_id)
        .bind(&name)
        .bind(&description)
        .bind(&category)
        .bind(&data.tags)
        .bind(TemplateStatus::Draft.as_str())
        .bind(Json(&theme))
        .bind(Json(&global_settings))
        .fetch_one(&mut *tx)
        .await
        .context("inserting template")?
        .into();

        let snapshots: Vec<PageSnapshot> = match &source {
            Some((_, pages)) if !pages.is_empty() => pages
                .iter()
                .enumerate()
                .map(|(index, page)| PageSnapshot {
                    sort_order: i32::try_from(index).unwrap_or(i32::MAX),
                    ..PageSnapshot::from(page)
                })
                .collect(),
            _ => vec![PageSnapshot {
                name: "Home".to_string(),
                slug: "home".to_string(),
                is_homepage: true,
                seo: PageSeo {
                    title: "Home".to_string(),
                    ..Default::default()
                },
                sections: self.defaults.homepage_sections(&name),
                sort_order: 0,
            }],
        };

        let mut pages: Vec<Page> = Vec::with_capacity(snapshots.len());
        for snapshot in &snapshots {
            let page = insert_page(&mut tx, template.id, snapshot)
                .await
                .context("inserting template pages")?;
            pages.push(page);
        }

        tx.commit().await.context("committing template creation")?;

        match &source {
            Some((source, _)) => log::info!(
                "template {} cloned from {} with {} page(s)",
                template.id,
                source.id,
                pages.len()
            ),
            None => log::info!("template {} created", template.id),
        }

        Ok(Some(TemplateWithPages { template, pages }))
    }

    /// Fetches a template with its pages. When `caller` is given, the
    /// template must be owned by the caller or be a system template.
    pub async fn get_template(
        &self,
        id: Uuid,
        caller: Option<Uuid>,
    ) -> Result<Option<TemplateWithPages>, StoreError> {
        let mut conn =
            self.pool.acquire().await.context("acquiring connection")?;

        let Some(template) = fetch_template(&mut conn, id).await? else {
            return Ok(None);
        };

        if let Some(caller) = caller {
            if !Access::Read.permits(
                template.owner_user_id,
                template.is_system_template,
                caller,
            ) {
                return Ok(None);
            }
        }

        let pages = fetch_pages(&mut conn, id).await?;
        Ok(Some(TemplateWithPages { template, pages }))
    }

    /// Lists templates visible to `owner_user_id`: the caller's own plus
    /// every system template.
    pub async fn search_templates(
        &self,
        owner_user_id: Uuid,
        params: &TemplateSearch,
    ) -> Result<TemplateSearchResult, StoreError> {
        let page = params.page.unwrap_or(1);
        if page < 1 {
            return Err(StoreError::invalid(
                "Pagination 'page' must be at least 1",
            ));
        }

        let limit = params.limit.unwrap_or(TemplateSearch::DEFAULT_LIMIT);
        if !(1..=TemplateSearch::MAX_LIMIT).contains(&limit) {
            return Err(StoreError::invalid(format!(
                "Pagination 'limit' must be between 1 and {}",
                TemplateSearch::MAX_LIMIT
            )));
        }

        let offset = (page - 1).checked_mul(limit).ok_or_else(|| {
            StoreError::invalid("Pagination 'page' is out of range")
        })?;

        let mut count_query: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM site_templates WHERE ");
        push_search_filters(&mut count_query, owner_user_id, params);

        let total = count_query
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .context("counting templates")?;

        let mut query_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT * FROM site_templates WHERE ");
        push_search_filters(&mut query_builder, owner_user_id, params);
        query_builder
            .push(" ORDER BY is_system_template DESC, edited_at DESC, id ASC")
            .push(" LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let items = query_builder
            .build_query_as::<TemplateRow>()
            .fetch_all(&self.pool)
            .await
            .context("searching templates")?
            .into_iter()
            .map(Template::from)
            .collect();

        Ok(TemplateSearchResult {
            items,
            total,
            page,
            limit,
            total_pages: (total + limit - 1) / limit,
        })
    }

    /// Applies the provided fields. Theme and settings patches merge over the
    /// stored values. Returns `None` when the template is missing or not
    /// writable by `owner_user_id`.
    pub async fn update_template(
        &self,
        id: Uuid,
        owner_user_id: Uuid,
        data: &TemplateUpdate,
    ) -> Result<Option<Template>, StoreError> {
        if data.is_empty() {
            return Err(StoreError::invalid("No fields provided"));
        }

        if data.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(StoreError::invalid("Template name cannot be empty"));
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .context("starting template update")?;

        if !authorize(&mut tx, id, owner_user_id, Access::Write, true).await? {
            return Ok(None);
        }

        let Some(current) = fetch_template(&mut tx, id).await? else {
            return Ok(None);
        };

        let theme = match &data.theme {
            Some(patch) => current.theme.merged(patch),
            None => current.theme,
        };
        let global_settings = match &data.global_settings {
            Some(patch) => current.global_settings.merged(patch),
            None => current.global_settings,
        };

        let template = sqlx::query_as::<_, TemplateRow>(
            r#"
            UPDATE site_templates
            SET
                name = COALESCE($1, name),
                description = COALESCE($2, description),
                category = COALESCE($3, category),
                tags = COALESCE($4, tags),
                status = COALESCE($5, status),
                theme = $6,
                global_settings = $7,
                edited_at = now()
            WHERE id = $8
            RETURNING *
            "#,
        )
        .bind(data.name.as_deref().map(str::trim))
        .bind(data.description.as_deref())
        .bind(data.category.as_deref())
        .bind(data.tags.as_ref())
        .bind(data.status.map(|s| s.as_str()))
        .bind(Json(&theme))
        .bind(Json(&global_settings))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .context("updating template")?;

        tx.commit().await.context("committing template update")?;

        Ok(template.map(Template::from))
    }

    /// Hard-deletes a template and, through the foreign keys, its pages and
    /// versions. System templates and templates of other owners are left
    /// untouched and report `false`.
    pub async fn delete_template(
        &self,
        id: Uuid,
        owner_user_id: Uuid,
    ) -> Result<bool, StoreError> {
        let mut conn =
            self.pool.acquire().await.context("acquiring connection")?;

        if !authorize(&mut conn, id, owner_user_id, Access::Write, false)
            .await?
        {
            return Ok(false);
        }

        let result = sqlx::query(
            r#"
            DELETE FROM site_templates
            WHERE id = $1 AND is_system_template = false
            "#,
        )
        .bind(id)
        .execute(&mut *conn)
        .await
        .context("deleting template")?;

        Ok(result.rows_affected() > 0)
    }
}

pub(crate) async fn fetch_template(
    conn: &mut PgConnection,
    id: Uuid,
) -> Result<Option<Template>, StoreError> {
    let row = sqlx::query_as::<_, TemplateRow>(
        r#"
        SELECT *
        FROM site_templates
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await
    .context("loading template")?;

    Ok(row.map(Template::from))
}

/// Appends the WHERE clause shared by the count and page queries. The first
/// condition is the SQL form of [`Access::Read`].
fn push_search_filters(
    query_builder: &mut QueryBuilder<'_, Postgres>,
    owner_user_id: Uuid,
    params: &TemplateSearch,
) {
    query_builder
        .push("(owner_user_id = ")
        .push_bind(owner_user_id)
        .push(" OR is_system_template = true)");

    if let Some(query) = params
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
    {
        let pattern = format!("%{}%", escape_like(query));
        query_builder
            .push(" AND (name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR description ILIKE ")
            .push_bind(pattern)
            .push(")");
    }

    if let Some(category) = params
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
    {
        query_builder
            .push(" AND category = ")
            .push_bind(category.to_string());
    }

    if let Some(status) = params.status {
        query_builder
            .push(" AND status = ")
            .push_bind(status.as_str());
    }

    if !params.tags.is_empty() {
        query_builder
            .push(" AND tags && ")
            .push_bind(params.tags.clone());
    }
}

fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
