//! Catalog entity definitions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The media kind a category applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Video,
    Manga,
}

impl std::fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryKind::Video => write!(f, "video"),
            CategoryKind::Manga => write!(f, "manga"),
        }
    }
}

impl std::str::FromStr for CategoryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "video" => Ok(CategoryKind::Video),
            "manga" => Ok(CategoryKind::Manga),
            other => Err(format!("unknown category kind '{}'", other)),
        }
    }
}

/// A user-defined tag for media content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub user_id: String,
    pub kind: CategoryKind,
}

impl Category {
    pub fn new(name: impl Into<String>, user_id: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            user_id: user_id.into(),
            kind,
        }
    }
}
