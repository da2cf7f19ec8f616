use uuid::Uuid;

use crate::common::StoreError;
use crate::db::Database;
use crate::models::{PublishedContent, RenderedPage};
use crate::render::{generate_page, generate_site};

pub const DEFAULT_PREVIEW_SLUG: &str = "home";

impl Database {
    /// Projection of a template visible to `caller`, ready for rendering.
    pub async fn published_content(
        &self,
        template_id: Uuid,
        caller: Uuid,
    ) -> Result<Option<PublishedContent>, StoreError> {
        let Some(found) = self.get_template(template_id, Some(caller)).await?
        else {
            return Ok(None);
        };

        Ok(Some(PublishedContent::assemble(&found.template, &found.pages)))
    }

    /// Renders one page of a template. When no page carries the default
    /// slug, the homepage stands in for it.
    pub async fn generate_template_preview(
        &self,
        template_id: Uuid,
        caller: Uuid,
        page_slug: Option<&str>,
    ) -> Result<Option<RenderedPage>, StoreError> {
        let Some(content) = self.published_content(template_id, caller).await?
        else {
            return Ok(None);
        };

        let slug = page_slug
            .map(str::trim)
            .filter(|slug| !slug.is_empty())
            .unwrap_or(DEFAULT_PREVIEW_SLUG);

        let page = content.page(slug).or_else(|| {
            (slug == DEFAULT_PREVIEW_SLUG)
                .then(|| content.pages.iter().find(|page| page.is_homepage))
                .flatten()
        });

        Ok(page.map(|page| generate_page(&content, page)))
    }

    /// Renders every page of a template.
    pub async fn generate_template_site(
        &self,
        template_id: Uuid,
        caller: Uuid,
    ) -> Result<Option<Vec<RenderedPage>>, StoreError> {
        let Some(content) = self.published_content(template_id, caller).await?
        else {
            return Ok(None);
        };

        let rendered = generate_site(&content);
        log::info!(
            "template {template_id}: rendered {} of {} page(s)",
            rendered.len(),
            content.pages.len()
        );

        Ok(Some(rendered))
    }
}
