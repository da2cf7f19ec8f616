//! Static HTML/CSS generation for published content.
//!
//! Rendering is pure: the same [`PublishedContent`] always yields the same
//! bytes. Every interpolated value is escaped for its context.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::models::{PublishedContent, PublishedPage, RenderedPage};

pub use components::{render_component, render_section, render_slot};
pub use css::generate_css;
pub use escape::{escape_css, escape_html, escape_url};
pub use media::{image_policy, optimized_image_src, video_embed_url, ImagePolicy};

mod components;
mod css;
mod document;
mod escape;
mod media;

/// Renders every page of the site. A page that fails to render is logged and
/// left out; the remaining pages are still produced.
pub fn generate_site(content: &PublishedContent) -> Vec<RenderedPage> {
    let css = generate_css(&content.theme);

    content
        .pages
        .iter()
        .filter_map(|page| {
            match catch_unwind(AssertUnwindSafe(|| render_page(content, page, &css))) {
                Ok(rendered) => Some(rendered),
                Err(_) => {
                    log::error!(
                        "template {}: failed to render page '{}', skipping",
                        content.template_id,
                        page.slug
                    );
                    None
                }
            }
        })
        .collect()
}

/// Renders a single page of `content` as a standalone document.
pub fn generate_page(content: &PublishedContent, page: &PublishedPage) -> RenderedPage {
    let css = generate_css(&content.theme);
    render_page(content, page, &css)
}

fn render_page(content: &PublishedContent, page: &PublishedPage, css: &str) -> RenderedPage {
    let lang = match content.site.language.trim() {
        "" => "en".to_string(),
        lang => escape_html(lang),
    };

    let mut html = String::from("<!DOCTYPE html>\n");
    html.push_str(&format!("<html lang=\"{lang}\">\n"));
    html.push_str(&document::render_head(content, page, css));
    html.push_str("\n<body>\n");
    html.push_str(&document::render_nav(content, page));
    html.push('\n');
    html.push_str(&document::render_main(page));
    html.push('\n');
    html.push_str(&document::render_footer(content));
    html.push('\n');

    let beacon = document::render_beacon(content, page);
    if !beacon.is_empty() {
        html.push_str(&beacon);
        html.push('\n');
    }

    html.push_str("</body>\n</html>\n");

    RenderedPage {
        slug: page.slug.clone(),
        html,
        css: css.to_string(),
    }
}
