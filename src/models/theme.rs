use serde::{Deserialize, Serialize};

crate::patchable! {
    pub struct ThemeColors / ThemeColorsPatch {
        pub primary: String = "#2563eb".into(),
        pub secondary: String = "#7c3aed".into(),
        pub accent: String = "#f59e0b".into(),
        pub background: String = "#ffffff".into(),
        pub surface: String = "#f8fafc".into(),
        pub text: String = "#0f172a".into(),
        pub text_muted: String = "#64748b".into(),
        pub border: String = "#e2e8f0".into(),
        pub error: String = "#dc2626".into(),
        pub success: String = "#16a34a".into(),
        pub warning: String = "#d97706".into(),
    }
}

crate::patchable! {
    pub struct ThemeTypography / ThemeTypographyPatch {
        pub font_family: String =
            "'Inter', system-ui, -apple-system, sans-serif".into(),
        pub heading_font_family: String =
            "'Inter', system-ui, -apple-system, sans-serif".into(),
        pub base_font_size: String = "16px".into(),
        pub line_height: String = "1.6".into(),
        pub heading_line_height: String = "1.2".into(),
        pub font_weight_normal: u16 = 400,
        pub font_weight_medium: u16 = 500,
        pub font_weight_bold: u16 = 700,
    }
}

crate::patchable! {
    pub struct ThemeSpacing / ThemeSpacingPatch {
        pub xs: String = "4px".into(),
        pub sm: String = "8px".into(),
        pub md: String = "16px".into(),
        pub lg: String = "24px".into(),
        pub xl: String = "32px".into(),
        pub xxl: String = "48px".into(),
    }
}

crate::patchable! {
    pub struct ThemeBorderRadius / ThemeBorderRadiusPatch {
        pub sm: String = "4px".into(),
        pub md: String = "8px".into(),
        pub lg: String = "16px".into(),
        pub full: String = "9999px".into(),
    }
}

crate::patchable! {
    pub struct ThemeShadows / ThemeShadowsPatch {
        pub sm: String = "0 1px 2px rgba(0, 0, 0, 0.05)".into(),
        pub md: String = "0 4px 6px rgba(0, 0, 0, 0.1)".into(),
        pub lg: String = "0 10px 15px rgba(0, 0, 0, 0.1)".into(),
        pub xl: String = "0 20px 25px rgba(0, 0, 0, 0.15)".into(),
    }
}

/// Design tokens applied across every page of a template.
///
/// Always fully populated: decoding a partial JSON object fills the missing
/// keys from [`Theme::default`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    pub colors: ThemeColors,
    pub typography: ThemeTypography,
    pub spacing: ThemeSpacing,
    pub border_radius: ThemeBorderRadius,
    pub shadows: ThemeShadows,
}

/// Partial theme. Each group merges key by key; groups that are absent are
/// left exactly as they were.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<ThemeColorsPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography: Option<ThemeTypographyPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<ThemeSpacingPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<ThemeBorderRadiusPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadows: Option<ThemeShadowsPatch>,
}

impl Theme {
    pub fn apply(&mut self, patch: &ThemePatch) {
        if let Some(colors) = &patch.colors {
            self.colors.apply(colors);
        }
        if let Some(typography) = &patch.typography {
            self.typography.apply(typography);
        }
        if let Some(spacing) = &patch.spacing {
            self.spacing.apply(spacing);
        }
        if let Some(border_radius) = &patch.border_radius {
            self.border_radius.apply(border_radius);
        }
        if let Some(shadows) = &patch.shadows {
            self.shadows.apply(shadows);
        }
    }

    pub fn merged(&self, patch: &ThemePatch) -> Self {
        let mut theme = self.clone();
        theme.apply(patch);
        theme
    }
}

impl ThemePatch {
    pub fn is_empty(&self) -> bool {
        self.colors.as_ref().is_none_or(ThemeColorsPatch::is_empty)
            && self
                .typography
                .as_ref()
                .is_none_or(ThemeTypographyPatch::is_empty)
            && self.spacing.as_ref().is_none_or(ThemeSpacingPatch::is_empty)
            && self
                .border_radius
                .as_ref()
                .is_none_or(ThemeBorderRadiusPatch::is_empty)
            && self.shadows.as_ref().is_none_or(ThemeShadowsPatch::is_empty)
    }

    pub fn colors(colors: ThemeColorsPatch) -> Self {
        Self {
            colors: Some(colors),
            ..Default::default()
        }
    }

    pub fn typography(typography: ThemeTypographyPatch) -> Self {
        Self {
            typography: Some(typography),
            ..Default::default()
        }
    }
}
