use serde::{Deserialize, Serialize};

/// One entry of the header navigation. Children render as a single-level
/// dropdown; grandchildren are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavItem {
    pub label: String,
    pub url: String,
    pub open_in_new_tab: bool,
    pub children: Vec<NavItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterColumn {
    pub title: String,
    pub links: Vec<FooterLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

crate::patchable! {
    pub struct SiteSettings / SiteSettingsPatch {
        pub name: String = "My Website".into(),
        pub language: String = "en".into(),
        pub favicon_url: String = "/favicon.ico".into(),
        pub custom_head_code: Option<String> = None,
    }
}

crate::patchable! {
    pub struct HeaderSettings / HeaderSettingsPatch {
        pub logo_url: Option<String> = None,
        pub navigation: Vec<NavItem> = Vec::new(),
        pub sticky: bool = true,
        pub cta: Option<FooterLink> = None,
    }
}

crate::patchable! {
    pub struct FooterSettings / FooterSettingsPatch {
        pub columns: Vec<FooterColumn> = Vec::new(),
        pub social_links: Vec<SocialLink> = Vec::new(),
        pub show_newsletter: bool = false,
        pub newsletter_title: String = "Stay in the loop".into(),
        pub newsletter_action: String = "/api/newsletter/subscribe".into(),
        pub copyright: Option<String> = None,
    }
}

crate::patchable! {
    pub struct SeoDefaults / SeoDefaultsPatch {
        pub title_suffix: Option<String> = None,
        pub description: String = String::new(),
        pub keywords: Vec<String> = Vec::new(),
        pub og_image: Option<String> = None,
        pub base_url: Option<String> = None,
        pub twitter_handle: Option<String> = None,
    }
}

crate::patchable! {
    pub struct AnalyticsSettings / AnalyticsSettingsPatch {
        pub google_analytics_id: Option<String> = None,
        pub beacon_url: String = "/api/analytics/pageview".into(),
        pub beacon_enabled: bool = true,
    }
}

/// Site-wide settings shared by every page of a template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalSettings {
    pub site: SiteSettings,
    pub header: HeaderSettings,
    pub footer: FooterSettings,
    pub seo: SeoDefaults,
    pub analytics: AnalyticsSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalSettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<SiteSettingsPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<HeaderSettingsPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterSettingsPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoDefaultsPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics: Option<AnalyticsSettingsPatch>,
}

impl GlobalSettings {
    pub fn apply(&mut self, patch: &GlobalSettingsPatch) {
        if let Some(site) = &patch.site {
            self.site.apply(site);
        }
        if let Some(header) = &patch.header {
            self.header.apply(header);
        }
        if let Some(footer) = &patch.footer {
            self.footer.apply(footer);
        }
        if let Some(seo) = &patch.seo {
            self.seo.apply(seo);
        }
        if let Some(analytics) = &patch.analytics {
            self.analytics.apply(analytics);
        }
    }

    pub fn merged(&self, patch: &GlobalSettingsPatch) -> Self {
        let mut settings = self.clone();
        settings.apply(patch);
        settings
    }
}

impl GlobalSettingsPatch {
    pub fn is_empty(&self) -> bool {
        self.site.as_ref().is_none_or(SiteSettingsPatch::is_empty)
            && self.header.as_ref().is_none_or(HeaderSettingsPatch::is_empty)
            && self.footer.as_ref().is_none_or(FooterSettingsPatch::is_empty)
            && self.seo.as_ref().is_none_or(SeoDefaultsPatch::is_empty)
            && self
                .analytics
                .as_ref()
                .is_none_or(AnalyticsSettingsPatch::is_empty)
    }
}
