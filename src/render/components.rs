use std::fmt::Write;

use crate::models::{
    Button, Component, ComponentSlot, ContactForm, Divider, DonationForm,
    Gallery, Heading, Image, NewsletterSignup, Section, SocialLink,
    SocialLinks, Spacer, Stats, Testimonial, Text, Video,
};

use super::escape::{
    class_token, escape_css, escape_css_url, escape_html, escape_url,
};
use super::media::{image_policy, optimized_image_src, video_embed_url};

pub fn render_section(section: &Section) -> String {
    let mut style = String::new();

    if let Some(color) = non_empty(&section.background.color) {
        let _ = write!(style, "background-color: {};", escape_css(color));
    }
    if let Some(image) = non_empty(&section.background.image) {
        let _ = write!(
            style,
            " background-image: url('{}');",
            escape_css_url(image)
        );
    }

    let padding = &section.padding;
    let _ = write!(
        style,
        " padding: {} {} {} {};",
        css_or(&padding.top, "0"),
        css_or(&padding.right, "0"),
        css_or(&padding.bottom, "0"),
        css_or(&padding.left, "0"),
    );

    let id = if section.id.trim().is_empty() {
        String::new()
    } else {
        format!(r#" id="section-{}""#, class_token(&section.id, "section"))
    };

    let mut html = format!(
        r#"<section class="section"{id} style="{}"><div class="section-inner" style="max-width: {};">"#,
        style.trim(),
        css_or(&section.max_width, "1200px"),
    );

    for slot in &section.components {
        html.push_str(&render_slot(slot));
    }

    html.push_str("</div></section>");
    html
}

/// Renders one component position. Unrecognised data becomes an HTML
/// comment so the rest of the page is unaffected.
pub fn render_slot(slot: &ComponentSlot) -> String {
    match slot {
        ComponentSlot::Known(component) => render_component(component),
        ComponentSlot::Unrecognized(value) => {
            let kind = value
                .get("type")
                .and_then(|t| t.as_str())
                .unwrap_or("unknown");
            format!(
                "<!-- unsupported component: {} -->",
                class_token(kind, "unknown")
            )
        }
    }
}

pub fn render_component(component: &Component) -> String {
    match component {
        Component::Heading(c) => render_heading(c),
        Component::Text(c) => render_text(c),
        Component::Button(c) => render_button(c),
        Component::Image(c) => render_image(c),
        Component::Divider(c) => render_divider(c),
        Component::Spacer(c) => render_spacer(c),
        Component::Stats(c) => render_stats(c),
        Component::Testimonial(c) => render_testimonial(c),
        Component::Gallery(c) => render_gallery(c),
        Component::Video(c) => render_video(c),
        Component::ContactForm(c) => render_contact_form(c),
        Component::NewsletterSignup(c) => render_newsletter(c),
        Component::DonationForm(c) => render_donation_form(c),
        Component::SocialLinks(c) => render_social_links(c),
    }
}

fn render_heading(c: &Heading) -> String {
    let level = c.level.clamp(1, 6);
    let mut style = format!("text-align: {};", align(&c.align));
    if let Some(color) = non_empty(&c.color) {
        let _ = write!(style, " color: {};", escape_css(color));
    }

    format!(
        r#"<h{level} class="component component-heading" style="{style}">{}</h{level}>"#,
        escape_html(&c.text)
    )
}

fn render_text(c: &Text) -> String {
    let mut style = format!("text-align: {};", align(&c.align));
    if let Some(color) = non_empty(&c.color) {
        let _ = write!(style, " color: {};", escape_css(color));
    }

    let normalized = c.content.replace("\r\n", "\n");
    let paragraphs: String = normalized
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            let lines: Vec<String> = p.lines().map(escape_html).collect();
            format!("<p>{}</p>", lines.join("<br>"))
        })
        .collect();

    format!(
        r#"<div class="component component-text" style="{style}">{paragraphs}</div>"#
    )
}

fn render_button(c: &Button) -> String {
    let text = if c.text.trim().is_empty() {
        "Button"
    } else {
        c.text.as_str()
    };
    let url = or_default(&c.url, "#");

    let mut classes = format!(
        "btn btn-{} btn-{}",
        class_token(&c.variant, "primary"),
        class_token(&c.size, "md")
    );
    if c.full_width {
        classes.push_str(" btn-block");
    }

    format!(
        r#"<div class="component component-button" style="text-align: {};"><a class="{classes}" href="{}"{}>{}</a></div>"#,
        align(&c.align),
        escape_url(url),
        new_tab(c.open_in_new_tab),
        escape_html(text)
    )
}

fn render_image(c: &Image) -> String {
    if c.src.trim().is_empty() {
        return r#"<figure class="component component-image"><div class="image-placeholder">No image selected</div></figure>"#
            .to_string();
    }

    let policy = image_policy(c.width, c.priority);
    let mut img = format!(
        r#"<img src="{}" alt="{}""#,
        escape_url(&optimized_image_src(&c.src, &policy)),
        escape_html(&c.alt)
    );
    if let Some(width) = c.width.filter(|w| *w > 0) {
        let _ = write!(img, r#" width="{width}""#);
    }
    if let Some(height) = c.height.filter(|h| *h > 0) {
        let _ = write!(img, r#" height="{height}""#);
    }
    if policy.lazy {
        img.push_str(r#" loading="lazy" decoding="async""#);
    } else {
        img.push_str(r#" loading="eager" fetchpriority="high""#);
    }
    img.push('>');

    let body = match non_empty(&c.link_url) {
        Some(link) => format!(r#"<a href="{}">{img}</a>"#, escape_url(link)),
        None => img,
    };
    let caption = non_empty(&c.caption)
        .map(|caption| {
            format!("<figcaption>{}</figcaption>", escape_html(caption))
        })
        .unwrap_or_default();

    format!(r#"<figure class="component component-image">{body}{caption}</figure>"#)
}

fn render_divider(c: &Divider) -> String {
    let style = match c.style.trim() {
        s @ ("solid" | "dashed" | "dotted" | "double") => s,
        _ => "solid",
    };
    let color = non_empty(&c.color)
        .map(escape_css)
        .unwrap_or_else(|| "var(--color-border)".to_string());

    format!(
        r#"<hr class="component component-divider" style="border: none; border-top: {}px {style} {color}; width: {}; margin-left: auto; margin-right: auto;">"#,
        c.thickness.clamp(1, 20),
        css_or(&c.width, "100%")
    )
}

fn render_spacer(c: &Spacer) -> String {
    format!(
        r#"<div class="component component-spacer" style="height: {};" aria-hidden="true"></div>"#,
        css_or(&c.height, "40px")
    )
}

fn render_stats(c: &Stats) -> String {
    let columns = c
        .columns
        .map(|n| n.clamp(1, 6))
        .unwrap_or_else(|| c.items.len().clamp(1, 4) as u8);

    let items: String = c
        .items
        .iter()
        .map(|item| {
            format!(
                r#"<div class="stat"><div class="stat-value">{}</div><div class="stat-label">{}</div></div>"#,
                escape_html(&item.value),
                escape_html(&item.label)
            )
        })
        .collect();

    format!(
        r#"<div class="component component-stats stats-grid" style="--columns: {columns};">{items}</div>"#
    )
}

fn render_testimonial(c: &Testimonial) -> String {
    let mut html =
        String::from(r#"<blockquote class="component component-testimonial">"#);

    if let Some(rating) = c.rating.map(|r| r.min(5)).filter(|r| *r > 0) {
        let _ = write!(
            html,
            r#"<div class="testimonial-rating" aria-label="{rating} out of 5">{}{}</div>"#,
            "&#9733;".repeat(rating as usize),
            "&#9734;".repeat(5 - rating as usize)
        );
    }

    let _ = write!(
        html,
        r#"<p class="testimonial-quote">&ldquo;{}&rdquo;</p><footer class="testimonial-author">"#,
        escape_html(&c.quote)
    );

    if let Some(avatar) = non_empty(&c.avatar_url) {
        let _ = write!(
            html,
            r#"<img src="{}" alt="{}" loading="lazy" decoding="async">"#,
            escape_url(avatar),
            escape_html(&c.author)
        );
    }

    let author = if c.author.trim().is_empty() {
        "Anonymous"
    } else {
        c.author.as_str()
    };
    let _ = write!(html, "<cite>{}</cite>", escape_html(author));

    let role: Vec<&str> = [non_empty(&c.role), non_empty(&c.company)]
        .into_iter()
        .flatten()
        .collect();
    if !role.is_empty() {
        let _ = write!(
            html,
            r#"<span class="testimonial-role">{}</span>"#,
            escape_html(&role.join(", "))
        );
    }

    html.push_str("</footer></blockquote>");
    html
}

fn render_gallery(c: &Gallery) -> String {
    let columns = c.columns.clamp(1, 6);
    let policy = image_policy(Some(1200 / u32::from(columns)), false);

    let items: String = c
        .images
        .iter()
        .filter(|image| !image.src.trim().is_empty())
        .map(|image| {
            let caption = non_empty(&image.caption)
                .map(|caption| {
                    format!("<figcaption>{}</figcaption>", escape_html(caption))
                })
                .unwrap_or_default();
            format!(
                r#"<figure class="gallery-item"><img src="{}" alt="{}" loading="lazy" decoding="async">{caption}</figure>"#,
                escape_url(&optimized_image_src(&image.src, &policy)),
                escape_html(&image.alt)
            )
        })
        .collect();

    format!(
        r#"<div class="component component-gallery gallery-grid" style="--columns: {columns};">{items}</div>"#
    )
}

fn render_video(c: &Video) -> String {
    if c.url.trim().is_empty() {
        return "<!-- video without source -->".to_string();
    }

    let mut src = video_embed_url(&c.url);
    if c.autoplay {
        let separator = if src.contains('?') { '&' } else { '?' };
        let _ = write!(src, "{separator}autoplay=1&mute=1");
    }

    let title = if c.title.trim().is_empty() {
        "Video"
    } else {
        c.title.as_str()
    };

    format!(
        r#"<div class="component component-video"><div class="video-embed"><iframe src="{}" title="{}" loading="lazy" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture" allowfullscreen></iframe></div></div>"#,
        escape_url(&src),
        escape_html(title)
    )
}

fn render_contact_form(c: &ContactForm) -> String {
    let mut html = String::from(r#"<div class="component component-contact-form">"#);

    if let Some(title) = non_empty(&c.title) {
        let _ = write!(html, "<h3>{}</h3>", escape_html(title));
    }
    if let Some(description) = non_empty(&c.description) {
        let _ = write!(html, "<p>{}</p>", escape_html(description));
    }

    let _ = write!(
        html,
        r#"<form class="site-form" method="post" action="{}">"#,
        escape_url(or_default(&c.action_url, "/api/contact"))
    );
    html.push_str(r#"<label>Name<input type="text" name="name" required></label>"#);
    html.push_str(r#"<label>Email<input type="email" name="email" required></label>"#);
    if c.show_phone {
        html.push_str(r#"<label>Phone<input type="tel" name="phone"></label>"#);
    }
    if c.show_subject {
        html.push_str(r#"<label>Subject<input type="text" name="subject"></label>"#);
    }
    html.push_str(
        r#"<label>Message<textarea name="message" rows="5" required></textarea></label>"#,
    );
    let _ = write!(
        html,
        r#"<button class="btn btn-primary" type="submit">{}</button></form></div>"#,
        escape_html(or_default(&c.submit_text, "Send Message"))
    );

    html
}

fn render_newsletter(c: &NewsletterSignup) -> String {
    let description = non_empty(&c.description)
        .map(|d| format!("<p>{}</p>", escape_html(d)))
        .unwrap_or_default();

    format!(
        r#"<div class="component component-newsletter"><h3>{}</h3>{description}<form class="site-form form-inline" method="post" action="{}"><input type="email" name="email" placeholder="{}" aria-label="Email address" required><button class="btn btn-primary" type="submit">{}</button></form></div>"#,
        escape_html(or_default(&c.title, "Subscribe to our newsletter")),
        escape_url(or_default(&c.action_url, "/api/newsletter/subscribe")),
        escape_html(or_default(&c.placeholder, "Enter your email")),
        escape_html(or_default(&c.button_text, "Subscribe"))
    )
}

fn currency_symbol(currency: &str) -> String {
    match currency.trim().to_ascii_uppercase().as_str() {
        "USD" | "CAD" | "AUD" | "NZD" => "$".to_string(),
        "EUR" => "&euro;".to_string(),
        "GBP" => "&pound;".to_string(),
        "JPY" => "&yen;".to_string(),
        other => format!("{} ", escape_html(other)),
    }
}

fn render_donation_form(c: &DonationForm) -> String {
    let symbol = currency_symbol(&c.currency);
    let mut html = format!(
        r#"<div class="component component-donation-form"><h3>{}</h3>"#,
        escape_html(or_default(&c.title, "Support our work"))
    );

    if let Some(description) = non_empty(&c.description) {
        let _ = write!(html, "<p>{}</p>", escape_html(description));
    }

    let _ = write!(
        html,
        r#"<form class="site-form" method="post" action="{}"><input type="hidden" name="currency" value="{}">"#,
        escape_url(or_default(&c.action_url, "/api/donations")),
        escape_html(&c.currency.trim().to_ascii_uppercase())
    );

    html.push_str(r#"<fieldset class="donation-amounts"><legend>Amount</legend>"#);
    for (index, amount) in c.amounts.iter().enumerate() {
        let checked = if index == 0 { " checked" } else { "" };
        let _ = write!(
            html,
            r#"<label class="donation-amount"><input type="radio" name="amount" value="{amount}"{checked}> {symbol}{amount}</label>"#
        );
    }
    html.push_str("</fieldset>");

    if c.allow_custom_amount {
        html.push_str(
            r#"<label>Other amount<input type="number" name="custom_amount" min="1" step="1"></label>"#,
        );
    }
    if c.allow_recurring {
        html.push_str(
            r#"<label class="donation-recurring"><input type="checkbox" name="recurring" value="monthly"> Make this a monthly donation</label>"#,
        );
    }

    let _ = write!(
        html,
        r#"<button class="btn btn-primary" type="submit">{}</button></form></div>"#,
        escape_html(or_default(&c.button_text, "Donate"))
    );

    html
}

fn render_social_links(c: &SocialLinks) -> String {
    format!(
        r#"<div class="component component-social-links">{}</div>"#,
        social_list(&c.links, &c.align)
    )
}

/// `<ul>` of social profile links, shared with the footer.
pub fn social_list(links: &[SocialLink], alignment: &str) -> String {
    let justify = match alignment.trim() {
        "left" => "flex-start",
        "right" => "flex-end",
        _ => "center",
    };

    let items: String = links
        .iter()
        .filter(|link| !link.url.trim().is_empty())
        .map(|link| {
            let platform = class_token(&link.platform, "link");
            format!(
                r#"<li><a class="social-link social-{platform}" href="{}" target="_blank" rel="noopener noreferrer" aria-label="{}">{}</a></li>"#,
                escape_url(&link.url),
                escape_html(&platform_label(&link.platform)),
                escape_html(&platform_label(&link.platform))
            )
        })
        .collect();

    format!(
        r#"<ul class="social-links" style="justify-content: {justify};">{items}</ul>"#
    )
}

fn platform_label(platform: &str) -> String {
    let platform = platform.trim();
    match platform.to_ascii_lowercase().as_str() {
        "" => "Link".to_string(),
        "x" | "twitter" => "X (Twitter)".to_string(),
        "linkedin" => "LinkedIn".to_string(),
        "youtube" => "YouTube".to_string(),
        "tiktok" => "TikTok".to_string(),
        _ => {
            let mut chars = platform.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => "Link".to_string(),
            }
        }
    }
}

fn align(value: &str) -> &'static str {
    match value.trim() {
        "center" => "center",
        "right" => "right",
        "justify" => "justify",
        _ => "left",
    }
}

fn new_tab(open_in_new_tab: bool) -> &'static str {
    if open_in_new_tab {
        r#" target="_blank" rel="noopener noreferrer""#
    } else {
        ""
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() {
        default
    } else {
        value
    }
}

fn css_or(value: &str, default: &str) -> String {
    let escaped = escape_css(value);
    if escaped.is_empty() {
        default.to_string()
    } else {
        escaped
    }
}
