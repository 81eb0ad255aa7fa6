//! Entity kinds handled by the generation pipeline

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of page an SEO document is generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Single game detail page
    Game,
    /// Category overview page
    Category,
    /// Tag listing page
    Tag,
    /// Site home page (one aggregate document per run)
    Home,
}

impl EntityKind {
    /// All kinds in pipeline phase order
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Game,
        EntityKind::Category,
        EntityKind::Tag,
        EntityKind::Home,
    ];

    /// Directory (and URL path segment) holding documents of this kind
    pub fn dir_name(&self) -> &'static str {
        match self {
            EntityKind::Game => "games",
            EntityKind::Category => "categories",
            EntityKind::Tag => "tags",
            EntityKind::Home => "home",
        }
    }

    /// Singular lowercase label used in logs and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Game => "game",
            EntityKind::Category => "category",
            EntityKind::Tag => "tag",
            EntityKind::Home => "home",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
