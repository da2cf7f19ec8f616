use std::fmt::Write;

use serde_json::json;

use crate::models::{Component, NavItem, PublishedContent, PublishedPage};

use super::components::{render_section, social_list};
use super::escape::{escape_html, escape_url, script_json};
use super::media::{image_policy, optimized_image_src};

pub(super) fn render_head(
    content: &PublishedContent,
    page: &PublishedPage,
    css: &str,
) -> String {
    let seo = &content.seo;
    let site = &content.site;

    let title = match page.seo.title.trim() {
        "" => page.name.trim(),
        title => title,
    };
    let title = match seo.title_suffix.as_deref().map(str::trim) {
        Some(suffix) if !suffix.is_empty() && title != suffix => {
            format!("{title} | {suffix}")
        }
        _ => title.to_string(),
    };

    let description = match page.seo.description.trim() {
        "" => seo.description.trim(),
        description => description,
    };

    let keywords = if page.seo.keywords.is_empty() {
        &seo.keywords
    } else {
        &page.seo.keywords
    };
    let keywords: Vec<&str> = keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .collect();

    let canonical = page
        .seo
        .canonical_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .or_else(|| {
            seo.base_url
                .as_deref()
                .map(|base| base.trim().trim_end_matches('/'))
                .filter(|base| !base.is_empty())
                .map(|base| format!("{base}{}", page.path()))
        });

    let og_image = [page.seo.og_image.as_deref(), seo.og_image.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|image| !image.is_empty());

    let favicon = match site.favicon_url.trim() {
        "" => "/favicon.ico",
        favicon => favicon,
    };

    let mut head = String::from("<head>\n");
    head.push_str("<meta charset=\"UTF-8\">\n");
    head.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    let _ = writeln!(head, "<title>{}</title>", escape_html(&title));
    let _ = writeln!(
        head,
        "<meta name=\"description\" content=\"{}\">",
        escape_html(description)
    );
    if !keywords.is_empty() {
        let _ = writeln!(
            head,
            "<meta name=\"keywords\" content=\"{}\">",
            escape_html(&keywords.join(", "))
        );
    }
    if page.seo.no_index {
        head.push_str("<meta name=\"robots\" content=\"noindex, nofollow\">\n");
    }
    if let Some(canonical) = &canonical {
        let _ = writeln!(
            head,
            "<link rel=\"canonical\" href=\"{}\">",
            escape_url(canonical)
        );
    }
    let _ = writeln!(head, "<link rel=\"icon\" href=\"{}\">", escape_url(favicon));
    for src in preload_images(page) {
        let _ = writeln!(
            head,
            "<link rel=\"preload\" as=\"image\" href=\"{}\">",
            escape_url(&src)
        );
    }

    let _ = writeln!(
        head,
        "<meta property=\"og:title\" content=\"{}\">",
        escape_html(&title)
    );
    let _ = writeln!(
        head,
        "<meta property=\"og:description\" content=\"{}\">",
        escape_html(description)
    );
    head.push_str("<meta property=\"og:type\" content=\"website\">\n");
    if let Some(image) = og_image {
        let _ = writeln!(
            head,
            "<meta property=\"og:image\" content=\"{}\">",
            escape_url(image)
        );
    }

    let card = if og_image.is_some() {
        "summary_large_image"
    } else {
        "summary"
    };
    let _ = writeln!(head, "<meta name=\"twitter:card\" content=\"{card}\">");
    if let Some(handle) = seo
        .twitter_handle
        .as_deref()
        .map(str::trim)
        .filter(|h| !h.is_empty())
    {
        let _ = writeln!(
            head,
            "<meta name=\"twitter:site\" content=\"{}\">",
            escape_html(handle)
        );
    }

    if let Some(id) = content
        .analytics
        .google_analytics_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
    {
        let _ = writeln!(
            head,
            "<script async src=\"https://www.googletagmanager.com/gtag/js?id={}\"></script>",
            escape_html(id)
        );
        let _ = writeln!(
            head,
            "<script>window.dataLayer=window.dataLayer||[];function gtag(){{dataLayer.push(arguments);}}gtag('js',new Date());gtag('config',{});</script>",
            script_json(&json!(id))
        );
    }

    if let Some(code) = site
        .custom_head_code
        .as_deref()
        .filter(|code| !code.trim().is_empty())
    {
        head.push_str(code.trim());
        head.push('\n');
    }

    let _ = writeln!(head, "<style>\n{css}</style>");
    head.push_str("</head>");
    head
}

/// Optimized sources of the page's priority images, in document order.
fn preload_images(page: &PublishedPage) -> Vec<String> {
    page.sections
        .iter()
        .flat_map(|section| &section.components)
        .filter_map(|slot| match slot.as_component() {
            Some(Component::Image(image)) if !image.src.trim().is_empty() => {
                Some(image)
            }
            _ => None,
        })
        .filter_map(|image| {
            let policy = image_policy(image.width, image.priority);
            policy
                .preload
                .then(|| optimized_image_src(&image.src, &policy))
        })
        .collect()
}

pub(super) fn render_nav(
    content: &PublishedContent,
    page: &PublishedPage,
) -> String {
    let current_path = page.path();
    let header = &content.header;

    let class = if header.sticky {
        "site-nav site-nav-sticky"
    } else {
        "site-nav"
    };

    let brand = match header
        .logo_url
        .as_deref()
        .map(str::trim)
        .filter(|logo| !logo.is_empty())
    {
        Some(logo) => format!(
            r#"<img src="{}" alt="{}">"#,
            escape_url(logo),
            escape_html(&content.site.name)
        ),
        None => escape_html(&content.site.name),
    };

    let mut nav = format!(
        r#"<nav class="{class}" id="site-nav"><div class="nav-inner"><a class="nav-brand" href="/">{brand}</a>"#
    );
    nav.push_str(
        r#"<button class="nav-toggle" type="button" aria-label="Toggle navigation" aria-controls="site-nav" onclick="var n=document.getElementById('site-nav');this.setAttribute('aria-expanded',n.classList.toggle('nav-open'));">&#9776;</button>"#,
    );

    nav.push_str(r#"<ul class="nav-links">"#);
    for item in &content.navigation {
        nav.push_str(&render_nav_item(item, &current_path));
    }
    nav.push_str("</ul>");

    if let Some(cta) = header.cta.as_ref().filter(|cta| !cta.label.trim().is_empty()) {
        let _ = write!(
            nav,
            r#"<a class="btn btn-primary nav-cta" href="{}">{}</a>"#,
            escape_url(&cta.url),
            escape_html(&cta.label)
        );
    }

    nav.push_str("</div></nav>");
    nav
}

fn render_nav_item(item: &NavItem, current_path: &str) -> String {
    let has_children = !item.children.is_empty();
    let active = item.url == current_path
        || item.children.iter().any(|child| child.url == current_path);

    let mut class = String::from("nav-item");
    if has_children {
        class.push_str(" has-dropdown");
    }
    if active {
        class.push_str(" active");
    }

    let mut html = format!(
        r#"<li class="{class}">{}"#,
        nav_link(item)
    );

    if has_children {
        html.push_str(r#"<ul class="nav-dropdown">"#);
        for child in &item.children {
            let _ = write!(html, "<li>{}</li>", nav_link(child));
        }
        html.push_str("</ul>");
    }

    html.push_str("</li>");
    html
}

fn nav_link(item: &NavItem) -> String {
    let url = match item.url.trim() {
        "" => "#",
        url => url,
    };
    let target = if item.open_in_new_tab {
        r#" target="_blank" rel="noopener noreferrer""#
    } else {
        ""
    };

    format!(
        r#"<a href="{}"{target}>{}</a>"#,
        escape_url(url),
        escape_html(&item.label)
    )
}

pub(super) fn render_main(page: &PublishedPage) -> String {
    let mut main = String::from("<main>");
    for section in &page.sections {
        main.push_str(&render_section(section));
    }
    main.push_str("</main>");
    main
}

pub(super) fn render_footer(content: &PublishedContent) -> String {
    let footer = &content.footer;
    let mut html =
        String::from(r#"<footer class="site-footer"><div class="footer-inner">"#);

    if !footer.columns.is_empty() {
        html.push_str(r#"<div class="footer-columns">"#);
        for column in &footer.columns {
            let _ = write!(
                html,
                r#"<div class="footer-column"><h4>{}</h4><ul>"#,
                escape_html(&column.title)
            );
            for link in &column.links {
                let _ = write!(
                    html,
                    r#"<li><a href="{}">{}</a></li>"#,
                    escape_url(&link.url),
                    escape_html(&link.label)
                );
            }
            html.push_str("</ul></div>");
        }
        html.push_str("</div>");
    }

    if footer.show_newsletter {
        let action = match footer.newsletter_action.trim() {
            "" => "/api/newsletter/subscribe",
            action => action,
        };
        let _ = write!(
            html,
            r#"<div class="footer-newsletter"><h4>{}</h4><form class="site-form form-inline" method="post" action="{}"><input type="email" name="email" placeholder="Enter your email" aria-label="Email address" required><button class="btn btn-primary" type="submit">Subscribe</button></form></div>"#,
            escape_html(&footer.newsletter_title),
            escape_url(action)
        );
    }

    if !footer.social_links.is_empty() {
        html.push_str(&social_list(&footer.social_links, "left"));
    }

    let copyright = footer
        .copyright
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| {
            format!("\u{a9} {}. All rights reserved.", content.site.name.trim())
        });
    let _ = write!(
        html,
        r#"<p class="footer-copyright">{}</p>"#,
        escape_html(&copyright)
    );

    html.push_str("</div></footer>");
    html
}

/// Inline page-view beacon. Empty when disabled.
pub(super) fn render_beacon(
    content: &PublishedContent,
    page: &PublishedPage,
) -> String {
    let analytics = &content.analytics;
    let endpoint = analytics.beacon_url.trim();
    if !analytics.beacon_enabled || endpoint.is_empty() {
        return String::new();
    }

    let payload = json!({
        "templateId": content.template_id.to_string(),
        "page": page.slug,
        "version": content.version,
    });

    format!(
        "<script>(function(){{var u={};var d=JSON.stringify(Object.assign({},{{path:location.pathname,referrer:document.referrer}}));if(navigator.sendBeacon){{navigator.sendBeacon(u,d);}}else if(window.fetch){{fetch(u,{{method:'POST',body:d,keepalive:true}});}}}})();</script>",
        script_json(&json!(endpoint)),
        script_json(&payload)
    )
}
