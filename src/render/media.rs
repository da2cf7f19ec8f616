use std::sync::OnceLock;

use regex::Regex;

const DEFAULT_IMAGE_WIDTH: u32 = 1200;
const MAX_IMAGE_WIDTH: u32 = 1920;

/// How an image is requested and loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImagePolicy {
    pub target_width: u32,
    pub quality: u8,
    pub lazy: bool,
    pub preload: bool,
}

/// Picks the delivery policy from the declared width and the `priority`
/// flag. Priority images (above the fold) load eagerly at higher quality.
pub fn image_policy(declared_width: Option<u32>, priority: bool) -> ImagePolicy {
    let target_width = declared_width
        .filter(|w| *w > 0)
        .unwrap_or(DEFAULT_IMAGE_WIDTH)
        .min(MAX_IMAGE_WIDTH);

    let quality = if priority {
        85
    } else if target_width <= 640 {
        70
    } else {
        80
    };

    ImagePolicy {
        target_width,
        quality,
        lazy: !priority,
        preload: priority,
    }
}

/// Appends the width/quality hints understood by the image CDN. Inline data
/// and SVG sources are returned untouched.
pub fn optimized_image_src(src: &str, policy: &ImagePolicy) -> String {
    let src = src.trim();
    let path = src.split(['?', '#']).next().unwrap_or(src);

    if src.is_empty()
        || src.starts_with("data:")
        || path.to_ascii_lowercase().ends_with(".svg")
    {
        return src.to_string();
    }

    let (base, fragment) = match src.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (src, None),
    };
    let separator = if base.contains('?') { '&' } else { '?' };

    let mut out = format!(
        "{base}{separator}w={}&q={}",
        policy.target_width, policy.quality
    );
    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }
    out
}

fn youtube_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"(?:youtube(?:-nocookie)?\.com/(?:watch\?(?:[^#]*&)?v=|embed/|shorts/|live/|v/)|youtu\.be/)([A-Za-z0-9_-]{11})",
        )
        .expect("Invalid YouTube URL pattern")
    })
}

fn vimeo_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"vimeo\.com/(?:video/|channels/[^/]+/)?(\d+)")
            .expect("Invalid Vimeo URL pattern")
    })
}

/// Normalises YouTube and Vimeo page URLs into their iframe embed URLs.
/// Anything else is returned as given.
pub fn video_embed_url(url: &str) -> String {
    let url = url.trim();

    if let Some(id) = youtube_pattern().captures(url).and_then(|c| c.get(1)) {
        return format!("https://www.youtube.com/embed/{}", id.as_str());
    }

    if let Some(id) = vimeo_pattern().captures(url).and_then(|c| c.get(1)) {
        return format!("https://player.vimeo.com/video/{}", id.as_str());
    }

    url.to_string()
}
