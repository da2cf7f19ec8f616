use serde::{Deserialize, Serialize};

use super::{Component, ComponentSlot};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionBackground {
    pub color: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionPadding {
    pub top: String,
    pub right: String,
    pub bottom: String,
    pub left: String,
}

impl Default for SectionPadding {
    fn default() -> Self {
        Self {
            top: "64px".into(),
            right: "24px".into(),
            bottom: "64px".into(),
            left: "24px".into(),
        }
    }
}

/// A layout band of a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Section {
    pub id: String,
    pub background: SectionBackground,
    pub padding: SectionPadding,
    pub max_width: String,
    pub components: Vec<ComponentSlot>,
}

impl Default for Section {
    fn default() -> Self {
        Self {
            id: String::new(),
            background: SectionBackground::default(),
            padding: SectionPadding::default(),
            max_width: "1200px".into(),
            components: Vec::new(),
        }
    }
}

impl Section {
    pub fn with_components(
        id: impl Into<String>,
        components: impl IntoIterator<Item = Component>,
    ) -> Self {
        Self {
            id: id.into(),
            components: components.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}
