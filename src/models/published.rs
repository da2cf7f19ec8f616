use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    AnalyticsSettings, FooterSettings, HeaderSettings, NavItem, Page,
    PageSeo, Section, SeoDefaults, SiteSettings, Template, Theme,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedPage {
    pub name: String,
    pub slug: String,
    pub is_homepage: bool,
    pub seo: PageSeo,
    pub sections: Vec<Section>,
}

impl PublishedPage {
    /// Site-relative path of the page.
    pub fn path(&self) -> String {
        if self.is_homepage {
            "/".to_string()
        } else {
            format!("/{}", self.slug)
        }
    }
}

/// Render-time projection of a template. Assembled on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedContent {
    pub template_id: Uuid,
    pub version: String,
    pub theme: Theme,
    pub site: SiteSettings,
    pub header: HeaderSettings,
    pub navigation: Vec<NavItem>,
    pub footer: FooterSettings,
    pub seo: SeoDefaults,
    pub analytics: AnalyticsSettings,
    pub pages: Vec<PublishedPage>,
}

impl PublishedContent {
    /// Builds the projection from a template and its pages (already in
    /// display order). Without configured header links, navigation lists
    /// every page.
    pub fn assemble(template: &Template, pages: &[Page]) -> Self {
        let settings = &template.global_settings;

        let pages: Vec<PublishedPage> = pages
            .iter()
            .map(|page| PublishedPage {
                name: page.name.clone(),
                slug: page.slug.clone(),
                is_homepage: page.is_homepage,
                seo: page.seo.clone(),
                sections: page.sections.clone(),
            })
            .collect();

        let navigation = if settings.header.navigation.is_empty() {
            pages
                .iter()
                .map(|page| NavItem {
                    label: page.name.clone(),
                    url: page.path(),
                    ..Default::default()
                })
                .collect()
        } else {
            settings.header.navigation.clone()
        };

        Self {
            template_id: template.id,
            version: template.current_version.clone(),
            theme: template.theme.clone(),
            site: settings.site.clone(),
            header: settings.header.clone(),
            navigation,
            footer: settings.footer.clone(),
            seo: settings.seo.clone(),
            analytics: settings.analytics.clone(),
            pages,
        }
    }

    pub fn page(&self, slug: &str) -> Option<&PublishedPage> {
        self.pages.iter().find(|page| page.slug == slug)
    }
}

/// Static output for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedPage {
    pub slug: String,
    pub html: String,
    pub css: String,
}
