mod common;

#[cfg(test)]
pub mod render_tests {
    use serde_json::json;

    use super::common::*;

    use sitewright::models::*;
    use sitewright::render::*;

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("missing {needle:?} in output"))
    }

    fn page_with_sections(sections: Vec<Section>) -> Page {
        let mut page = sample_page("Home", "home", true, 0);
        page.sections = sections;
        page
    }

    #[test]
    fn test_generate_site_is_deterministic() {
        let pages = vec![
            sample_page("Home", "home", true, 0),
            sample_page("About", "about", false, 1),
        ];
        let content = sample_content(&pages);

        let first = generate_site(&content);
        let second = generate_site(&content);

        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
        assert_eq!(first[0].slug, "home");
        assert_eq!(first[1].slug, "about");
    }

    #[test]
    fn test_empty_page_is_well_formed() {
        let content = sample_content(&[sample_page("Home", "home", true, 0)]);
        let rendered = generate_page(&content, &content.pages[0]);

        assert!(rendered.html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(rendered.html.contains("<main></main>"));
        assert!(rendered.html.ends_with("</body>\n</html>\n"));
        assert_eq!(rendered.css, generate_css(&content.theme));
    }

    #[test]
    fn test_head_elements_follow_document_order() {
        let mut template = sample_template();
        template.global_settings.seo.og_image = Some("https://cdn.example.com/og.png".into());
        template.global_settings.analytics.google_analytics_id = Some("G-TEST123".into());
        template.global_settings.site.custom_head_code =
            Some("<meta name=\"custom\" content=\"1\">".into());

        let content =
            PublishedContent::assemble(&template, &[sample_page("Home", "home", true, 0)]);
        let html = generate_page(&content, &content.pages[0]).html;

        let order = [
            "<meta charset=\"UTF-8\">",
            "<meta name=\"viewport\"",
            "<title>",
            "<meta name=\"description\"",
            "<link rel=\"icon\"",
            "<meta property=\"og:title\"",
            "<meta property=\"og:image\"",
            "<meta name=\"twitter:card\" content=\"summary_large_image\">",
            "googletagmanager.com/gtag/js?id=G-TEST123",
            "<meta name=\"custom\" content=\"1\">",
            "<style>",
            "</head>",
        ];
        let positions: Vec<usize> = order.iter().map(|n| position(&html, n)).collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn test_title_uses_suffix_and_page_seo() {
        let mut template = sample_template();
        template.global_settings.seo.title_suffix = Some("Acme".into());
        template.global_settings.seo.description = "Site-wide description".into();

        let mut about = sample_page("About", "about", false, 1);
        about.seo.title = "About the team".into();

        let content = PublishedContent::assemble(
            &template,
            &[sample_page("Home", "home", true, 0), about],
        );
        let html = generate_page(&content, &content.pages[1]).html;

        assert!(html.contains("<title>About the team | Acme</title>"));
        assert!(html.contains("<meta name=\"description\" content=\"Site-wide description\">"));
        assert!(html.contains("<meta name=\"twitter:card\" content=\"summary\">"));
    }

    #[test]
    fn test_noindex_and_canonical() {
        let mut template = sample_template();
        template.global_settings.seo.base_url = Some("https://acme.test/".into());

        let mut hidden = sample_page("Hidden", "hidden", false, 1);
        hidden.seo.no_index = true;

        let content = PublishedContent::assemble(
            &template,
            &[sample_page("Home", "home", true, 0), hidden],
        );

        let home = generate_page(&content, &content.pages[0]).html;
        assert!(home.contains("<link rel=\"canonical\" href=\"https://acme.test/\">"));
        assert!(!home.contains("noindex"));

        let hidden = generate_page(&content, &content.pages[1]).html;
        assert!(hidden.contains("<meta name=\"robots\" content=\"noindex, nofollow\">"));
        assert!(hidden.contains("<link rel=\"canonical\" href=\"https://acme.test/hidden\">"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let page = page_with_sections(vec![Section::with_components(
            "hero",
            [Component::Heading(Heading {
                text: "<script>alert(\"x\")</script>".into(),
                ..Default::default()
            })],
        )]);
        let content = sample_content(&[page]);
        let html = generate_page(&content, &content.pages[0]).html;

        assert!(html.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"));
        assert!(!html.contains("<script>alert"));
    }

    #[test]
    fn test_script_urls_are_neutralised() {
        let rendered = render_component(&Component::Button(Button {
            text: "Click".into(),
            url: "javascript:alert(1)".into(),
            ..Default::default()
        }));

        assert!(rendered.contains("href=\"#\""));
        assert!(!rendered.contains("javascript:"));
    }

    #[test]
    fn test_unknown_component_does_not_affect_siblings() {
        let section: Section = serde_json::from_value(json!({
            "id": "intro",
            "components": [
                { "type": "heading", "text": "Before" },
                { "type": "carousel", "slides": [] },
                { "type": "text", "content": "After" }
            ]
        }))
        .unwrap();

        let html = render_section(&section);

        let before = position(&html, "Before");
        let placeholder = position(&html, "<!-- unsupported component: carousel -->");
        let after = position(&html, "After");
        assert!(before < placeholder && placeholder < after);
    }

    #[test]
    fn test_heading_level_is_clamped() {
        let html = render_component(&Component::Heading(Heading {
            text: "Deep".into(),
            level: 9,
            ..Default::default()
        }));

        assert!(html.starts_with("<h6"));
        assert!(html.ends_with("</h6>"));
    }

    #[test]
    fn test_text_paragraphs_and_line_breaks() {
        let html = render_component(&Component::Text(Text {
            content: "First line\nsecond line\n\nNext paragraph".into(),
            ..Default::default()
        }));

        assert!(html.contains("<p>First line<br>second line</p><p>Next paragraph</p>"));
    }

    #[test]
    fn test_video_urls_become_embeds() {
        assert_eq!(
            video_embed_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
        assert_eq!(
            video_embed_url("https://youtu.be/dQw4w9WgXcQ"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
        assert_eq!(
            video_embed_url("https://vimeo.com/76979871"),
            "https://player.vimeo.com/video/76979871"
        );
        assert_eq!(
            video_embed_url("https://media.example.com/clip.mp4"),
            "https://media.example.com/clip.mp4"
        );
    }

    #[test]
    fn test_navigation_derived_from_pages() {
        let pages = vec![
            sample_page("Home", "home", true, 0),
            sample_page("About", "about", false, 1),
        ];
        let content = sample_content(&pages);

        assert_eq!(content.navigation.len(), 2);
        assert_eq!(content.navigation[0].url, "/");
        assert_eq!(content.navigation[1].url, "/about");

        let about = generate_page(&content, &content.pages[1]).html;
        assert!(about.contains("<li class=\"nav-item active\"><a href=\"/about\">About</a></li>"));
        assert!(about.contains("<li class=\"nav-item\"><a href=\"/\">Home</a></li>"));
    }

    #[test]
    fn test_configured_navigation_wins() {
        let mut template = sample_template();
        template.global_settings.header.navigation = vec![NavItem {
            label: "Docs".into(),
            url: "https://docs.acme.test".into(),
            open_in_new_tab: true,
            ..Default::default()
        }];

        let content =
            PublishedContent::assemble(&template, &[sample_page("Home", "home", true, 0)]);

        assert_eq!(content.navigation.len(), 1);
        let html = generate_page(&content, &content.pages[0]).html;
        assert!(html.contains(
            "<a href=\"https://docs.acme.test\" target=\"_blank\" rel=\"noopener noreferrer\">Docs</a>"
        ));
    }

    #[test]
    fn test_footer_default_copyright() {
        let content = sample_content(&[sample_page("Home", "home", true, 0)]);
        let html = generate_page(&content, &content.pages[0]).html;

        assert!(html.contains("<p class=\"footer-copyright\">\u{a9} Acme. All rights reserved.</p>"));
    }

    #[test]
    fn test_analytics_beacon_toggle() {
        let mut template = sample_template();
        let pages = [sample_page("Home", "home", true, 0)];

        let content = PublishedContent::assemble(&template, &pages);
        let html = generate_page(&content, &content.pages[0]).html;
        assert!(html.contains("navigator.sendBeacon"));
        assert!(html.contains("\"/api/analytics/pageview\""));

        template.global_settings.analytics.beacon_enabled = false;
        let content = PublishedContent::assemble(&template, &pages);
        let html = generate_page(&content, &content.pages[0]).html;
        assert!(!html.contains("navigator.sendBeacon"));
    }

    #[test]
    fn test_generate_css_has_variables_and_breakpoints() {
        let css = generate_css(&Theme::default());

        assert!(css.starts_with(":root {"));
        assert!(css.contains("--color-primary: #2563eb;"));
        assert!(css.contains("@media (max-width: 768px)"));
        assert!(css.contains("@media (max-width: 480px)"));
    }

    #[test]
    fn test_image_policy_for_priority_images() {
        let policy = image_policy(Some(800), true);

        assert_eq!(policy.target_width, 800);
        assert_eq!(policy.quality, 85);
        assert!(!policy.lazy);
        assert!(policy.preload);
    }

    #[test]
    fn test_priority_image_is_preloaded_in_head() {
        let page = page_with_sections(vec![Section::with_components(
            "hero",
            [
                Component::Image(Image {
                    src: "https://cdn.test/hero.jpg".into(),
                    alt: "Hero".into(),
                    width: Some(800),
                    priority: true,
                    ..Default::default()
                }),
                Component::Image(Image {
                    src: "https://cdn.test/below.jpg".into(),
                    alt: "Below the fold".into(),
                    ..Default::default()
                }),
            ],
        )]);
        let content = sample_content(&[page]);
        let html = generate_page(&content, &content.pages[0]).html;

        let preload = "<link rel=\"preload\" as=\"image\" href=\"https://cdn.test/hero.jpg?w=800&amp;q=85\">";
        assert!(position(&html, "<link rel=\"icon\"") < position(&html, preload));
        assert!(position(&html, preload) < position(&html, "<meta property=\"og:title\""));
        assert_eq!(html.matches("rel=\"preload\"").count(), 1);
    }

    #[test]
    fn test_page_without_priority_images_has_no_preload() {
        let page = page_with_sections(vec![Section::with_components(
            "gallery",
            [Component::Image(Image {
                src: "https://cdn.test/lazy.jpg".into(),
                ..Default::default()
            })],
        )]);
        let content = sample_content(&[page]);
        let html = generate_page(&content, &content.pages[0]).html;

        assert!(!html.contains("rel=\"preload\""));
        assert!(html.contains("loading=\"lazy\""));
    }

    #[test]
    fn test_escape_html_uses_named_entities() {
        assert_eq!(
            escape_html("Tom & Jerry's <\"show\">"),
            "Tom &amp; Jerry&apos;s &lt;&quot;show&quot;&gt;"
        );
    }

    #[test]
    fn test_image_source_is_optimised() {
        let policy = image_policy(None, false);

        assert_eq!(
            optimized_image_src("https://cdn.test/a.jpg?v=2#x", &policy),
            "https://cdn.test/a.jpg?v=2&w=1200&q=80#x"
        );
        assert_eq!(
            optimized_image_src("/logo.svg", &policy),
            "/logo.svg"
        );
    }
}
