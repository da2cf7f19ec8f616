//! Theme utilities: CSS custom properties and palette/font-pairing patches.

use std::fmt::Write;

use uuid::Uuid;

use crate::common::StoreError;
use crate::db::Database;
use crate::models::{
    Template, Theme, ThemeColorsPatch, ThemePatch, ThemeTypographyPatch,
    TemplateUpdate,
};

/// Every theme leaf as `(custom property, value)`, in a fixed order.
pub fn css_variable_entries(theme: &Theme) -> Vec<(&'static str, String)> {
    let c = &theme.colors;
    let t = &theme.typography;
    let s = &theme.spacing;
    let r = &theme.border_radius;
    let sh = &theme.shadows;

    vec![
        ("--color-primary", c.primary.clone()),
        ("--color-secondary", c.secondary.clone()),
        ("--color-accent", c.accent.clone()),
        ("--color-background", c.background.clone()),
        ("--color-surface", c.surface.clone()),
        ("--color-text", c.text.clone()),
        ("--color-text-muted", c.text_muted.clone()),
        ("--color-border", c.border.clone()),
        ("--color-error", c.error.clone()),
        ("--color-success", c.success.clone()),
        ("--color-warning", c.warning.clone()),
        ("--font-family", t.font_family.clone()),
        ("--font-family-heading", t.heading_font_family.clone()),
        ("--font-size-base", t.base_font_size.clone()),
        ("--line-height", t.line_height.clone()),
        ("--line-height-heading", t.heading_line_height.clone()),
        ("--font-weight-normal", t.font_weight_normal.to_string()),
        ("--font-weight-medium", t.font_weight_medium.to_string()),
        ("--font-weight-bold", t.font_weight_bold.to_string()),
        ("--spacing-xs", s.xs.clone()),
        ("--spacing-sm", s.sm.clone()),
        ("--spacing-md", s.md.clone()),
        ("--spacing-lg", s.lg.clone()),
        ("--spacing-xl", s.xl.clone()),
        ("--spacing-xxl", s.xxl.clone()),
        ("--radius-sm", r.sm.clone()),
        ("--radius-md", r.md.clone()),
        ("--radius-lg", r.lg.clone()),
        ("--radius-full", r.full.clone()),
        ("--shadow-sm", sh.sm.clone()),
        ("--shadow-md", sh.md.clone()),
        ("--shadow-lg", sh.lg.clone()),
        ("--shadow-xl", sh.xl.clone()),
    ]
}

/// `:root { ... }` block declaring every theme token. Identical themes give
/// byte-identical output.
pub fn generate_css_variables(theme: &Theme) -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in css_variable_entries(theme) {
        let _ = writeln!(css, "  {name}: {};", sanitize_css_value(&value));
    }
    css.push_str("}\n");
    css
}

/// Drops characters that could close a declaration or the style element.
pub fn sanitize_css_value(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, ';' | '{' | '}' | '<' | '>' | '\\'))
        .collect::<String>()
        .trim()
        .to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub name: &'static str,
    pub colors: ThemeColorsPatch,
}

fn palette(
    name: &'static str,
    primary: &str,
    secondary: &str,
    accent: &str,
) -> Palette {
    Palette {
        name,
        colors: ThemeColorsPatch {
            primary: Some(primary.to_string()),
            secondary: Some(secondary.to_string()),
            accent: Some(accent.to_string()),
            ..Default::default()
        },
    }
}

/// Built-in palettes offered by the editor.
pub fn palette_presets() -> Vec<Palette> {
    vec![
        palette("ocean", "#0369a1", "#0e7490", "#f59e0b"),
        palette("forest", "#15803d", "#4d7c0f", "#ca8a04"),
        palette("sunset", "#c2410c", "#be123c", "#facc15"),
        palette("plum", "#7e22ce", "#a21caf", "#22d3ee"),
        palette("slate", "#334155", "#475569", "#0ea5e9"),
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct FontPairing {
    pub name: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
}

impl FontPairing {
    pub fn to_patch(&self) -> ThemeTypographyPatch {
        ThemeTypographyPatch {
            heading_font_family: Some(self.heading.to_string()),
            font_family: Some(self.body.to_string()),
            ..Default::default()
        }
    }
}

pub fn font_pairings() -> Vec<FontPairing> {
    vec![
        FontPairing {
            name: "modern",
            heading: "'Poppins', sans-serif",
            body: "'Inter', sans-serif",
        },
        FontPairing {
            name: "classic",
            heading: "'Playfair Display', serif",
            body: "'Source Sans 3', sans-serif",
        },
        FontPairing {
            name: "friendly",
            heading: "'Nunito', sans-serif",
            body: "'Open Sans', sans-serif",
        },
        FontPairing {
            name: "editorial",
            heading: "'Merriweather', serif",
            body: "'Lato', sans-serif",
        },
    ]
}

impl Database {
    /// Merges `colors` into the template's colour group only. Visibility and
    /// ownership are those of [`Database::update_template`].
    pub async fn apply_palette(
        &self,
        template_id: Uuid,
        owner_user_id: Uuid,
        colors: &ThemeColorsPatch,
    ) -> Result<Option<Template>, StoreError> {
        let update = TemplateUpdate {
            theme: Some(ThemePatch::colors(colors.clone())),
            ..Default::default()
        };
        self.update_template(template_id, owner_user_id, &update).await
    }

    /// Merges `typography` into the template's typography group only.
    pub async fn apply_font_pairing(
        &self,
        template_id: Uuid,
        owner_user_id: Uuid,
        typography: &ThemeTypographyPatch,
    ) -> Result<Option<Template>, StoreError> {
        let update = TemplateUpdate {
            theme: Some(ThemePatch::typography(typography.clone())),
            ..Default::default()
        };
        self.update_template(template_id, owner_user_id, &update).await
    }
}
