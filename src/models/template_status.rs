use serde::{Deserialize, Serialize};

/// Editorial state of a template. Stored as lowercase text.
#[derive(
    Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TemplateStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl TemplateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }
}

impl std::fmt::Display for TemplateStatus {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TemplateStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "archived" => Ok(Self::Archived),
            _ => Err(format!("invalid template status: {}", s)),
        }
    }
}
