//! Core data model: catalog input records and generated SEO documents
//!
//! Input records (`Entity`, `IndexEntry`) are owned by the catalog provider
//! and treated as immutable during a run. Output documents are built fresh
//! per entity and fully replace any previous document for the same key.

use seogen_common::EntityKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Catalog input
// ============================================================================

/// Catalog entity (one game)
///
/// Only `id` is required; everything else falls back to defaults so that
/// partially-scraped records still flow through the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Catalog identifier
    pub id: u64,
    /// URL slug (derived from the title when empty)
    #[serde(default)]
    pub slug: String,
    /// Display title (derived from the slug when empty)
    #[serde(default)]
    pub title: String,
    /// Primary category
    #[serde(default, alias = "primary_category")]
    pub category: String,
    /// Every category the game appears in
    #[serde(default)]
    pub all_categories: Vec<String>,
    /// Tags (order is not significant for matching, but the first tag seeds
    /// the feature phrase)
    #[serde(default)]
    pub tags: Vec<String>,
    /// Thumbnail URL
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Developer name
    #[serde(default)]
    pub developer: Option<String>,
    /// Supported devices ("desktop", "mobile", "tablet")
    #[serde(default)]
    pub devices: Vec<String>,
    /// Featured on the home page
    #[serde(default)]
    pub featured: bool,
}

impl Entity {
    /// Thumbnail if present and not blank
    pub fn usable_thumbnail(&self) -> Option<&str> {
        self.thumbnail
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

/// Aggregate index entry (`{category -> {count, ids}}`, `{tag -> {count, ids}}`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Number of games under this key
    #[serde(default)]
    pub count: u64,
    /// Game ids under this key
    #[serde(default, alias = "games", alias = "game_ids")]
    pub ids: Vec<u64>,
}

/// Aggregate index keyed by category or tag name
pub type AggregateIndex = BTreeMap<String, IndexEntry>;

/// Category game counts (`category-stats.json`)
pub type CategoryStats = BTreeMap<String, u64>;

/// Everything the catalog provider loads before a run
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    /// Games in catalog order
    pub entities: Vec<Entity>,
    /// Category index
    pub categories: AggregateIndex,
    /// Tag index
    pub tags: AggregateIndex,
    /// Category counts
    pub stats: CategoryStats,
}

// ============================================================================
// Generated documents
// ============================================================================

/// Open Graph object type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenGraphType {
    Website,
    Article,
}

/// Twitter card type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwitterCardType {
    Summary,
    SummaryLargeImage,
}

/// Open Graph block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub image: String,
    pub url: String,
    #[serde(rename = "type")]
    pub og_type: OpenGraphType,
}

/// Twitter card block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwitterCard {
    pub card: TwitterCardType,
    pub title: String,
    pub description: String,
    pub image: String,
}

/// SEO metadata for one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured_data: Option<serde_json::Value>,
}

/// Breadcrumb navigation item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub label: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub current: bool,
}

impl Breadcrumb {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            current: false,
        }
    }

    pub fn current(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            current: true,
        }
    }
}

/// Compact reference to another game (related / featured / latest lists)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedItem {
    pub id: u64,
    pub slug: String,
    pub title: String,
    pub thumbnail: String,
    pub category: String,
}

impl From<&Entity> for RelatedItem {
    fn from(entity: &Entity) -> Self {
        Self {
            id: entity.id,
            slug: entity.slug.clone(),
            title: entity.title.clone(),
            thumbnail: entity.usable_thumbnail().unwrap_or_default().to_string(),
            category: entity.category.clone(),
        }
    }
}

/// Per-entity flavour text used to differentiate games sharing a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentVariant {
    pub variant_id: String,
    pub custom_description: String,
    pub featured_tags: Vec<String>,
    pub recommendation_reason: String,
    pub gameplay_description: String,
}

/// Game page document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSeoDocument {
    pub game_id: u64,
    pub slug: String,
    pub metadata: SeoMetadata,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub related_games: Vec<RelatedItem>,
    pub content_variant: ContentVariant,
}

/// Category page statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStatsBlock {
    pub total: u64,
    pub featured: u64,
    pub recent: u64,
}

/// Category page body content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryContent {
    pub main_description: String,
    pub featured_content: String,
    pub stats: CategoryStatsBlock,
}

/// Category page document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySeoDocument {
    pub category: String,
    pub display_name: String,
    pub metadata: SeoMetadata,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub content: CategoryContent,
    pub subcategories: Vec<String>,
}

/// Tag page document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagSeoDocument {
    pub tag: String,
    pub display_name: String,
    pub metadata: SeoMetadata,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub description: String,
    pub related_tags: Vec<String>,
}

/// Home page section listing games
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSection {
    pub title: String,
    pub description: String,
    pub games: Vec<RelatedItem>,
}

/// Home page popular-category card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCard {
    pub name: String,
    pub display_name: String,
    pub game_count: u64,
    pub thumbnail: String,
}

/// Home page section listing categories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySection {
    pub title: String,
    pub description: String,
    pub categories: Vec<CategoryCard>,
}

/// Home page featured sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedSections {
    pub todays_featured: GameSection,
    pub popular_categories: CategorySection,
    pub latest_games: GameSection,
}

/// Home page document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeSeoDocument {
    pub metadata: SeoMetadata,
    pub featured_sections: FeaturedSections,
}

/// Any generated document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SeoDocument {
    Game(GameSeoDocument),
    Category(CategorySeoDocument),
    Tag(TagSeoDocument),
    Home(HomeSeoDocument),
}

impl SeoDocument {
    /// Kind of page this document describes
    pub fn kind(&self) -> EntityKind {
        match self {
            SeoDocument::Game(_) => EntityKind::Game,
            SeoDocument::Category(_) => EntityKind::Category,
            SeoDocument::Tag(_) => EntityKind::Tag,
            SeoDocument::Home(_) => EntityKind::Home,
        }
    }

    /// Metadata block shared by every document kind
    pub fn metadata(&self) -> &SeoMetadata {
        match self {
            SeoDocument::Game(doc) => &doc.metadata,
            SeoDocument::Category(doc) => &doc.metadata,
            SeoDocument::Tag(doc) => &doc.metadata,
            SeoDocument::Home(doc) => &doc.metadata,
        }
    }

    /// Output file stem (`{slug-or-id}` for games, the key otherwise)
    pub fn output_key(&self) -> String {
        match self {
            SeoDocument::Game(doc) if !doc.slug.is_empty() => doc.slug.clone(),
            SeoDocument::Game(doc) => doc.game_id.to_string(),
            SeoDocument::Category(doc) => doc.category.clone(),
            SeoDocument::Tag(doc) => doc.tag.clone(),
            SeoDocument::Home(_) => "home".to_string(),
        }
    }
}
