mod common;

#[cfg(test)]
pub mod model_tests {
    use serde_json::json;

    use sitewright::models::*;
    use sitewright::theme::*;

    #[test]
    fn test_theme_merge_keeps_untouched_keys() {
        let base = Theme::default();
        let patch = ThemePatch::colors(ThemeColorsPatch {
            primary: Some("#ff0000".to_string()),
            ..Default::default()
        });

        let merged = base.merged(&patch);

        assert_eq!(merged.colors.primary, "#ff0000");
        assert_eq!(merged.colors.secondary, base.colors.secondary);
        assert_eq!(merged.typography, base.typography);
        assert_eq!(merged.spacing, base.spacing);
    }

    #[test]
    fn test_theme_merge_does_not_cross_groups() {
        let base = Theme::default();
        let patch = ThemePatch::typography(ThemeTypographyPatch {
            font_family: Some("'Lato', sans-serif".to_string()),
            ..Default::default()
        });

        let merged = base.merged(&patch);

        assert_eq!(merged.typography.font_family, "'Lato', sans-serif");
        assert_eq!(
            merged.typography.heading_font_family,
            base.typography.heading_font_family
        );
        assert_eq!(merged.colors, base.colors);
    }

    #[test]
    fn test_theme_decode_fills_missing_keys() {
        let theme: Theme =
            serde_json::from_value(json!({ "colors": { "primary": "#000000" } }))
                .unwrap();

        assert_eq!(theme.colors.primary, "#000000");
        assert_eq!(theme.colors.secondary, "#7c3aed");
        assert_eq!(theme.typography.font_weight_bold, 700);
        assert_eq!(theme.border_radius.full, "9999px");
    }

    #[test]
    fn test_theme_patch_is_empty_on_empty_groups() {
        let patch = ThemePatch {
            colors: Some(ThemeColorsPatch::default()),
            ..Default::default()
        };
        assert!(patch.is_empty());

        let update = TemplateUpdate {
            theme: Some(patch),
            ..Default::default()
        };
        assert!(update.is_empty());
    }

    #[test]
    fn test_global_settings_merge_by_group() {
        let base = GlobalSettings::default();
        let patch = GlobalSettingsPatch {
            site: Some(SiteSettingsPatch {
                name: Some("Acme".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let merged = base.merged(&patch);

        assert_eq!(merged.site.name, "Acme");
        assert_eq!(merged.site.language, base.site.language);
        assert_eq!(merged.header, base.header);
        assert_eq!(merged.analytics, base.analytics);
    }

    #[test]
    fn test_increment_version_bumps_patch() {
        assert_eq!(increment_version("1.0.0"), "1.0.1");
        assert_eq!(increment_version("2.3.9"), "2.3.10");
    }

    #[test]
    fn test_increment_version_tolerates_malformed_input() {
        assert_eq!(increment_version(""), "0.0.1");
        assert_eq!(increment_version("abc"), "0.0.1");
        assert_eq!(increment_version("1.2"), "1.2.1");
        assert_eq!(increment_version("1.x.4"), "1.0.5");
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("About Us!"), "about-us");
        assert_eq!(slugify("  --Hello   World-- "), "hello-world");
        assert_eq!(slugify("Page 2"), "page-2");
    }

    #[test]
    fn test_slugify_falls_back_when_nothing_usable() {
        assert_eq!(slugify("!!!"), "page");
        assert_eq!(slugify_or("", "section"), "section");
    }

    #[test]
    fn test_component_decodes_known_type_with_defaults() {
        let slot: ComponentSlot =
            serde_json::from_value(json!({ "type": "heading", "text": "Hi" }))
                .unwrap();

        let expected = Component::Heading(Heading {
            text: "Hi".to_string(),
            ..Default::default()
        });
        assert_eq!(slot.as_component(), Some(&expected));
        assert_eq!(expected.type_name(), "heading");
    }

    #[test]
    fn test_component_kebab_case_type_names() {
        let slot: ComponentSlot =
            serde_json::from_value(json!({ "type": "donation-form" })).unwrap();

        match slot.as_component() {
            Some(Component::DonationForm(form)) => {
                assert_eq!(form.amounts, vec![25, 50, 100, 250]);
                assert_eq!(form.currency, "USD");
            }
            other => panic!("unexpected component: {other:?}"),
        }
    }

    #[test]
    fn test_component_unknown_type_is_preserved() {
        let raw = json!({ "type": "carousel", "slides": [1, 2, 3] });
        let slot: ComponentSlot = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(slot, ComponentSlot::Unrecognized(raw.clone()));
        assert_eq!(serde_json::to_value(&slot).unwrap(), raw);
    }

    #[test]
    fn test_component_malformed_attributes_are_preserved() {
        let raw = json!({ "type": "heading", "level": "big" });
        let slot: ComponentSlot = serde_json::from_value(raw.clone()).unwrap();

        assert!(slot.as_component().is_none());
        assert_eq!(slot, ComponentSlot::Unrecognized(raw));
    }

    #[test]
    fn test_section_decode_keeps_siblings_of_unknown_component() {
        let section: Section = serde_json::from_value(json!({
            "id": "intro",
            "components": [
                { "type": "heading", "text": "Before" },
                { "type": "mystery" },
                { "type": "text", "content": "After" }
            ]
        }))
        .unwrap();

        assert_eq!(section.components.len(), 3);
        assert!(section.components[0].as_component().is_some());
        assert!(section.components[1].as_component().is_none());
        assert!(section.components[2].as_component().is_some());
        assert_eq!(section.max_width, "1200px");
        assert_eq!(section.padding.top, "64px");
    }

    #[test]
    fn test_template_status_parses_case_insensitively() {
        assert_eq!("Published".parse::<TemplateStatus>(), Ok(TemplateStatus::Published));
        assert!("deleted".parse::<TemplateStatus>().is_err());
        assert_eq!(TemplateStatus::Archived.to_string(), "archived");
    }

    #[test]
    fn test_page_update_is_empty() {
        assert!(PageUpdate::default().is_empty());

        let update = PageUpdate {
            is_homepage: Some(true),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_css_variables_cover_every_token_in_order() {
        let entries = css_variable_entries(&Theme::default());

        assert_eq!(entries.len(), 33);
        assert_eq!(entries[0], ("--color-primary", "#2563eb".to_string()));
        assert_eq!(entries.last().map(|e| e.0), Some("--shadow-xl"));
    }

    #[test]
    fn test_css_variables_are_deterministic() {
        let theme = Theme::default();
        let css = generate_css_variables(&theme);

        assert_eq!(css, generate_css_variables(&theme.clone()));
        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --color-primary: #2563eb;\n"));
        assert!(css.contains("  --font-weight-bold: 700;\n"));
    }

    #[test]
    fn test_css_values_cannot_break_out_of_declaration() {
        assert_eq!(sanitize_css_value("red; } body {"), "red  body");
        assert_eq!(sanitize_css_value("</style>"), "/style");
    }

    #[test]
    fn test_palette_presets_only_touch_brand_colors() {
        let presets = palette_presets();
        assert!(!presets.is_empty());

        for preset in &presets {
            let merged = Theme::default().merged(&ThemePatch::colors(preset.colors.clone()));
            assert_eq!(merged.colors.background, "#ffffff");
            assert_ne!(merged.colors.primary, "#2563eb");
        }
    }

    #[test]
    fn test_font_pairing_patch_sets_families_only() {
        let pairing = &font_pairings()[0];
        let patch = pairing.to_patch();

        assert_eq!(patch.heading_font_family.as_deref(), Some(pairing.heading));
        assert_eq!(patch.font_family.as_deref(), Some(pairing.body));
        assert!(patch.base_font_size.is_none());
        assert!(patch.font_weight_bold.is_none());
    }
}
