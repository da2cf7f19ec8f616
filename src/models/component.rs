use serde::{Deserialize, Serialize};

use super::SocialLink;

/// Declares the attribute set of one component kind. Every attribute has a
/// default so that partially-filled editor data still decodes.
macro_rules! component_props {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( pub $field:ident : $ty:ty = $default:expr ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct $name {
            $( pub $field: $ty, )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $( $field: $default, )*
                }
            }
        }
    };
}

component_props! {
    pub struct Heading {
        pub text: String = String::new(),
        pub level: u8 = 2,
        pub align: String = "left".into(),
        pub color: Option<String> = None,
    }
}

component_props! {
    pub struct Text {
        pub content: String = String::new(),
        pub align: String = "left".into(),
        pub color: Option<String> = None,
    }
}

component_props! {
    pub struct Button {
        pub text: String = "Button".into(),
        pub url: String = "#".into(),
        pub variant: String = "primary".into(),
        pub size: String = "md".into(),
        pub align: String = "left".into(),
        pub open_in_new_tab: bool = false,
        pub full_width: bool = false,
    }
}

component_props! {
    pub struct Image {
        pub src: String = String::new(),
        pub alt: String = String::new(),
        pub width: Option<u32> = None,
        pub height: Option<u32> = None,
        pub caption: Option<String> = None,
        pub link_url: Option<String> = None,
        pub priority: bool = false,
    }
}

component_props! {
    pub struct Divider {
        pub color: Option<String> = None,
        pub thickness: u32 = 1,
        pub style: String = "solid".into(),
        pub width: String = "100%".into(),
    }
}

component_props! {
    pub struct Spacer {
        pub height: String = "40px".into(),
    }
}

component_props! {
    pub struct StatItem {
        pub value: String = String::new(),
        pub label: String = String::new(),
    }
}

component_props! {
    pub struct Stats {
        pub items: Vec<StatItem> = Vec::new(),
        pub columns: Option<u8> = None,
    }
}

component_props! {
    pub struct Testimonial {
        pub quote: String = String::new(),
        pub author: String = String::new(),
        pub role: Option<String> = None,
        pub company: Option<String> = None,
        pub avatar_url: Option<String> = None,
        pub rating: Option<u8> = None,
    }
}

component_props! {
    pub struct GalleryImage {
        pub src: String = String::new(),
        pub alt: String = String::new(),
        pub caption: Option<String> = None,
    }
}

component_props! {
    pub struct Gallery {
        pub images: Vec<GalleryImage> = Vec::new(),
        pub columns: u8 = 3,
    }
}

component_props! {
    pub struct Video {
        pub url: String = String::new(),
        pub title: String = "Video".into(),
        pub autoplay: bool = false,
    }
}

component_props! {
    pub struct ContactForm {
        pub title: Option<String> = None,
        pub description: Option<String> = None,
        pub submit_text: String = "Send Message".into(),
        pub action_url: String = "/api/contact".into(),
        pub show_phone: bool = false,
        pub show_subject: bool = true,
    }
}

component_props! {
    pub struct NewsletterSignup {
        pub title: String = "Subscribe to our newsletter".into(),
        pub description: Option<String> = None,
        pub placeholder: String = "Enter your email".into(),
        pub button_text: String = "Subscribe".into(),
        pub action_url: String = "/api/newsletter/subscribe".into(),
    }
}

component_props! {
    pub struct DonationForm {
        pub title: String = "Support our work".into(),
        pub description: Option<String> = None,
        pub amounts: Vec<u32> = vec![25, 50, 100, 250],
        pub currency: String = "USD".into(),
        pub allow_custom_amount: bool = true,
        pub allow_recurring: bool = false,
        pub button_text: String = "Donate".into(),
        pub action_url: String = "/api/donations".into(),
    }
}

component_props! {
    pub struct SocialLinks {
        pub links: Vec<SocialLink> = Vec::new(),
        pub align: String = "center".into(),
    }
}

/// A typed content block. Stored as a JSON object whose `type` field selects
/// the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Component {
    Heading(Heading),
    Text(Text),
    Button(Button),
    Image(Image),
    Divider(Divider),
    Spacer(Spacer),
    Stats(Stats),
    Testimonial(Testimonial),
    Gallery(Gallery),
    Video(Video),
    ContactForm(ContactForm),
    NewsletterSignup(NewsletterSignup),
    DonationForm(DonationForm),
    SocialLinks(SocialLinks),
}

impl Component {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Heading(_) => "heading",
            Self::Text(_) => "text",
            Self::Button(_) => "button",
            Self::Image(_) => "image",
            Self::Divider(_) => "divider",
            Self::Spacer(_) => "spacer",
            Self::Stats(_) => "stats",
            Self::Testimonial(_) => "testimonial",
            Self::Gallery(_) => "gallery",
            Self::Video(_) => "video",
            Self::ContactForm(_) => "contact-form",
            Self::NewsletterSignup(_) => "newsletter-signup",
            Self::DonationForm(_) => "donation-form",
            Self::SocialLinks(_) => "social-links",
        }
    }
}

/// One position in a section's component list.
///
/// Data that does not decode as a known [`Component`] (unknown `type`, or a
/// known type with malformed attributes) is kept verbatim so it survives
/// round trips through the store, and renders as a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComponentSlot {
    Known(Component),
    Unrecognized(serde_json::Value),
}

impl From<Component> for ComponentSlot {
    fn from(component: Component) -> Self {
        Self::Known(component)
    }
}

impl ComponentSlot {
    pub fn as_component(&self) -> Option<&Component> {
        match self {
            Self::Known(component) => Some(component),
            Self::Unrecognized(_) => None,
        }
    }
}
