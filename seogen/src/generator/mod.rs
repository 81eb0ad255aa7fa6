//! Content generator
//!
//! Maps catalog records onto SEO documents using the template registry.
//! Every function here is pure: the same entity, configuration and templates
//! produce the same document on every call, in any order, on any thread.
//!
//! # Algorithm (per document)
//! 1. Resolve the template set (genre for games, page set otherwise)
//! 2. Pick title/description/keyword templates with seeded selection
//!    (`{slug}`, `{slug}_desc`, `{slug}_keywords`)
//! 3. Substitute placeholders
//! 4. Truncate to the configured limits
//! 5. Build canonical, Open Graph and Twitter blocks from the base URL
//!
//! Missing optional fields fall back to defaults. Only an entity with neither
//! a slug nor a title is rejected as [`GenerationError::InputMalformed`].

pub mod text;

use crate::error::{GenerationError, Result};
use crate::templates::{render, select, TemplateRegistry, TemplateSet, TemplateVars};
use crate::types::{
    Breadcrumb, CategoryCard, CategoryContent, CategorySection, CategorySeoDocument,
    CategoryStatsBlock, ContentVariant, Entity, FeaturedSections, GameSection, GameSeoDocument,
    HomeSeoDocument, OpenGraph, OpenGraphType, RelatedItem, SeoMetadata, TagSeoDocument,
    TwitterCard, TwitterCardType,
};
use seogen_common::EntityKind;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use text::truncate;
use tracing::trace;

/// Open Graph title limit
pub const OG_TITLE_MAX: usize = 60;
/// Open Graph description limit
pub const OG_DESCRIPTION_MAX: usize = 160;
/// Twitter title limit
pub const TWITTER_TITLE_MAX: usize = 70;
/// Twitter description limit
pub const TWITTER_DESCRIPTION_MAX: usize = 200;

/// Category used when an entity has none
pub const FALLBACK_CATEGORY: &str = "general";

const FEATURED_SECTION_MAX: usize = 6;
const CATEGORY_SECTION_MAX: usize = 8;
const LATEST_SECTION_MAX: usize = 8;

/// Generator configuration (`[generator]` section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Site root used for canonical and image URLs
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Site name used on the home page
    #[serde(default = "default_site_name")]
    pub site_name: String,

    /// Maximum title length (chars)
    #[serde(default = "default_title_max")]
    pub title_max_length: usize,

    /// Maximum description length (chars)
    #[serde(default = "default_description_max")]
    pub description_max_length: usize,

    /// Maximum number of keywords per document
    #[serde(default = "default_max_keywords")]
    pub max_keywords: usize,

    /// Maximum related games attached to a game document
    #[serde(default = "default_max_related_games")]
    pub max_related_games: usize,

    /// Maximum related tags attached to a tag document
    #[serde(default = "default_max_related_tags")]
    pub max_related_tags: usize,
}

fn default_base_url() -> String {
    "https://playbrowserminigames.com".to_string()
}

fn default_site_name() -> String {
    "Play Browser Mini Games".to_string()
}

fn default_title_max() -> usize {
    60
}

fn default_description_max() -> usize {
    160
}

fn default_max_keywords() -> usize {
    8
}

fn default_max_related_games() -> usize {
    6
}

fn default_max_related_tags() -> usize {
    8
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            site_name: default_site_name(),
            title_max_length: default_title_max(),
            description_max_length: default_description_max(),
            max_keywords: default_max_keywords(),
            max_related_games: default_max_related_games(),
            max_related_tags: default_max_related_tags(),
        }
    }
}

/// Deterministic content variant id: `{category}_{NNN}`
///
/// `NNN = (id * 31 + len(category)) mod 1000`, zero-padded. `len` counts
/// UTF-16 code units, matching the seeded hash.
pub fn variant_id(id: u64, category: &str) -> String {
    let len = category.encode_utf16().count() as u64;
    let hash = id.wrapping_mul(31).wrapping_add(len) % 1000;
    format!("{}_{:03}", category, hash)
}

/// Popular category entry for the home page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopularCategory {
    pub name: String,
    pub count: u64,
}

/// Selections feeding the home page document
#[derive(Debug, Clone, Default)]
pub struct HomeInput {
    pub featured: Vec<RelatedItem>,
    pub popular_categories: Vec<PopularCategory>,
    pub latest: Vec<RelatedItem>,
    /// Catalog size, used in copy
    pub total_games: u64,
}

/// Where a document's images come from
enum ImageSource<'a> {
    /// Use this thumbnail for both cards
    Thumbnail(&'a str),
    /// Build `{base}/images/{dir}/{key}-og.jpg` and `-twitter.jpg`
    Default { dir: &'a str, key: &'a str },
    /// Fixed site images
    Site,
}

/// SEO content generator
#[derive(Debug, Clone)]
pub struct SeoGenerator {
    config: GeneratorConfig,
    registry: Arc<TemplateRegistry>,
    base_url: String,
}

impl SeoGenerator {
    /// Create generator over a template registry
    pub fn new(config: GeneratorConfig, registry: Arc<TemplateRegistry>) -> Self {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Self {
            config,
            registry,
            base_url,
        }
    }

    /// Generator configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Template registry in use
    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    // ========================================================================
    // Games
    // ========================================================================

    /// Generate the document for one game page
    ///
    /// # Errors
    /// [`GenerationError::InputMalformed`] when the entity has neither slug nor title.
    pub fn generate_game(&self, entity: &Entity, related: &[RelatedItem]) -> Result<GameSeoDocument> {
        let (slug, title) = resolve_identity(entity)?;
        let category = match entity.category.trim() {
            "" => FALLBACK_CATEGORY,
            c => c,
        };
        let set = self.registry.game_set(category);

        let vars: TemplateVars = [
            ("title", title.clone()),
            ("category", category.to_string()),
            (
                "features",
                text::feature_phrase(&entity.devices, &entity.tags, &entity.all_categories),
            ),
            (
                "developer",
                entity
                    .developer
                    .clone()
                    .filter(|d| !d.trim().is_empty())
                    .unwrap_or_else(|| "Unknown Developer".to_string()),
            ),
        ]
        .into_iter()
        .collect();

        let image = match entity.usable_thumbnail() {
            Some(thumb) => ImageSource::Thumbnail(thumb),
            None => ImageSource::Default {
                dir: EntityKind::Game.dir_name(),
                key: &slug,
            },
        };
        let metadata = self.build_metadata(set, &vars, &slug, EntityKind::Game, image, None);

        let variant_id = variant_id(entity.id, category);
        let content_variant = ContentVariant {
            custom_description: render(select(&set.featured_descriptions, &variant_id), &vars),
            recommendation_reason: render(
                select(&set.recommendation_reasons, &format!("{}_reason", variant_id)),
                &vars,
            ),
            gameplay_description: render(
                select(&set.gameplay_descriptions, &format!("{}_gameplay", variant_id)),
                &vars,
            ),
            featured_tags: entity.tags.iter().take(3).cloned().collect(),
            variant_id,
        };

        let breadcrumbs = vec![
            Breadcrumb::link("Home", "/"),
            Breadcrumb::link("Games", "/games"),
            Breadcrumb::link(
                text::category_display_name(category),
                format!("/categories/{}", category),
            ),
            Breadcrumb::current(title.clone(), format!("/games/{}", slug)),
        ];

        trace!(id = entity.id, slug = %slug, "Generated game document");

        Ok(GameSeoDocument {
            game_id: entity.id,
            slug,
            metadata,
            breadcrumbs,
            related_games: related
                .iter()
                .filter(|r| r.id != entity.id)
                .take(self.config.max_related_games)
                .cloned()
                .collect(),
            content_variant,
        })
    }

    // ========================================================================
    // Categories
    // ========================================================================

    /// Generate the document for a category page
    ///
    /// `sample` supplies the card image when it has a usable thumbnail.
    pub fn generate_category(
        &self,
        category: &str,
        game_count: u64,
        sample: Option<&Entity>,
    ) -> Result<CategorySeoDocument> {
        let category = category.trim();
        if category.is_empty() {
            return Err(GenerationError::InputMalformed(
                "category name is empty".to_string(),
            ));
        }
        let display_name = text::category_display_name(category);
        let set = self.registry.category_set();

        let vars: TemplateVars = [
            ("category", display_name.clone()),
            ("categoryLower", display_name.to_lowercase()),
            ("gameCount", game_count.to_string()),
        ]
        .into_iter()
        .collect();

        let image = match sample.and_then(Entity::usable_thumbnail) {
            Some(thumb) => ImageSource::Thumbnail(thumb),
            None => ImageSource::Default {
                dir: EntityKind::Category.dir_name(),
                key: category,
            },
        };
        let metadata =
            self.build_metadata(set, &vars, category, EntityKind::Category, image, None);

        let content = CategoryContent {
            main_description: format!(
                "Explore our collection of {} games! We have carefully selected {} games that will provide hours of entertainment.",
                display_name.to_lowercase(),
                game_count
            ),
            featured_content: render(select(&set.featured_descriptions, category), &vars),
            stats: CategoryStatsBlock {
                total: game_count,
                featured: (game_count / 10).min(10),
                recent: (game_count / 5).min(20),
            },
        };

        Ok(CategorySeoDocument {
            category: category.to_string(),
            breadcrumbs: vec![
                Breadcrumb::link("Home", "/"),
                Breadcrumb::link("Games", "/games"),
                Breadcrumb::current(display_name.clone(), format!("/categories/{}", category)),
            ],
            display_name,
            metadata,
            content,
            subcategories: subcategories(category),
        })
    }

    // ========================================================================
    // Tags
    // ========================================================================

    /// Generate the document for a tag page
    pub fn generate_tag(
        &self,
        tag: &str,
        game_count: u64,
        related_tags: &[String],
        sample: Option<&Entity>,
    ) -> Result<TagSeoDocument> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(GenerationError::InputMalformed("tag name is empty".to_string()));
        }
        let display_name = text::tag_display_name(tag);
        let lower = display_name.to_lowercase();
        let set = self.registry.tag_set();

        let vars: TemplateVars = [
            ("tag", display_name.clone()),
            ("tagLower", lower.clone()),
            ("gameCount", game_count.to_string()),
        ]
        .into_iter()
        .collect();

        let image = match sample.and_then(Entity::usable_thumbnail) {
            Some(thumb) => ImageSource::Thumbnail(thumb),
            None => ImageSource::Default {
                dir: EntityKind::Tag.dir_name(),
                key: tag,
            },
        };
        let metadata = self.build_metadata(set, &vars, tag, EntityKind::Tag, image, None);

        let reason = render(
            select(&set.recommendation_reasons, &format!("{}_reason", tag)),
            &vars,
        );
        let description = format!(
            "Discover games with {lower} theme! Our collection includes {game_count} carefully selected games that feature {lower} elements. {reason}."
        );

        Ok(TagSeoDocument {
            tag: tag.to_string(),
            breadcrumbs: vec![
                Breadcrumb::link("Home", "/"),
                Breadcrumb::link("Tags", "/tags"),
                Breadcrumb::current(display_name.clone(), format!("/tags/{}", tag)),
            ],
            display_name,
            metadata,
            description,
            related_tags: related_tags
                .iter()
                .filter(|t| t.as_str() != tag)
                .take(self.config.max_related_tags)
                .cloned()
                .collect(),
        })
    }

    // ========================================================================
    // Home
    // ========================================================================

    /// Generate the site home page document
    pub fn generate_home(&self, input: &HomeInput) -> HomeSeoDocument {
        let set = self.registry.home_set();
        let vars: TemplateVars = [
            ("siteName", self.config.site_name.clone()),
            ("gameCount", input.total_games.to_string()),
            (
                "categoryCount",
                input.popular_categories.len().to_string(),
            ),
        ]
        .into_iter()
        .collect();

        let structured_data = json!({
            "@context": "https://schema.org",
            "@type": "WebSite",
            "name": self.config.site_name,
            "description": "Free online games platform with browser games for every taste",
            "url": self.base_url,
            "potentialAction": {
                "@type": "SearchAction",
                "target": format!("{}/search?q={{search_term_string}}", self.base_url),
                "query-input": "required name=search_term_string"
            }
        });

        let metadata = self.build_metadata(
            set,
            &vars,
            "home",
            EntityKind::Home,
            ImageSource::Site,
            Some(structured_data),
        );

        let section_text = |pool: &[String]| render(select(pool, "home"), &vars);

        let featured_sections = FeaturedSections {
            todays_featured: GameSection {
                title: "Today's Featured Games".to_string(),
                description: section_text(&set.recommendation_reasons),
                games: input.featured.iter().take(FEATURED_SECTION_MAX).cloned().collect(),
            },
            popular_categories: CategorySection {
                title: "Popular Game Categories".to_string(),
                description: section_text(&set.featured_descriptions),
                categories: input
                    .popular_categories
                    .iter()
                    .take(CATEGORY_SECTION_MAX)
                    .map(|c| CategoryCard {
                        display_name: text::category_display_name(&c.name),
                        game_count: c.count,
                        thumbnail: format!("{}/images/categories/{}.jpg", self.base_url, c.name),
                        name: c.name.clone(),
                    })
                    .collect(),
            },
            latest_games: GameSection {
                title: "Latest Games".to_string(),
                description: section_text(&set.gameplay_descriptions),
                games: input.latest.iter().take(LATEST_SECTION_MAX).cloned().collect(),
            },
        };

        HomeSeoDocument {
            metadata,
            featured_sections,
        }
    }

    // ========================================================================
    // Shared metadata assembly
    // ========================================================================

    fn build_metadata(
        &self,
        set: &TemplateSet,
        vars: &TemplateVars<'_>,
        seed: &str,
        kind: EntityKind,
        image: ImageSource<'_>,
        structured_data: Option<serde_json::Value>,
    ) -> SeoMetadata {
        let title = render(select(&set.titles, seed), vars);
        let description = render(select(&set.descriptions, &format!("{}_desc", seed)), vars);
        let keywords = text::split_keywords(
            &render(select(&set.keywords, &format!("{}_keywords", seed)), vars),
            self.config.max_keywords,
        );

        let url = match kind {
            EntityKind::Home => self.base_url.clone(),
            _ => format!("{}/{}/{}", self.base_url, kind.dir_name(), seed),
        };

        let (og_image, twitter_image) = match image {
            ImageSource::Thumbnail(thumb) => (thumb.to_string(), thumb.to_string()),
            ImageSource::Default { dir, key } => (
                format!("{}/images/{}/{}-og.jpg", self.base_url, dir, key),
                format!("{}/images/{}/{}-twitter.jpg", self.base_url, dir, key),
            ),
            ImageSource::Site => (
                format!("{}/images/home-og.jpg", self.base_url),
                format!("{}/images/home-twitter.jpg", self.base_url),
            ),
        };

        SeoMetadata {
            title: truncate(&title, self.config.title_max_length),
            description: truncate(&description, self.config.description_max_length),
            keywords,
            canonical: url.clone(),
            open_graph: OpenGraph {
                title: truncate(&title, OG_TITLE_MAX),
                description: truncate(&description, OG_DESCRIPTION_MAX),
                image: og_image,
                url,
                og_type: if kind == EntityKind::Game {
                    OpenGraphType::Article
                } else {
                    OpenGraphType::Website
                },
            },
            twitter: TwitterCard {
                card: TwitterCardType::SummaryLargeImage,
                title: truncate(&title, TWITTER_TITLE_MAX),
                description: truncate(&description, TWITTER_DESCRIPTION_MAX),
                image: twitter_image,
            },
            structured_data,
        }
    }
}

/// Resolve `(slug, title)`, deriving whichever one is missing
fn resolve_identity(entity: &Entity) -> Result<(String, String)> {
    let slug = entity.slug.trim();
    let title = entity.title.trim();

    let slug = if slug.is_empty() {
        text::slugify(title)
    } else {
        slug.to_string()
    };
    let title = if title.is_empty() {
        text::title_from_slug(&slug)
    } else {
        title.to_string()
    };

    if slug.is_empty() || title.is_empty() {
        return Err(GenerationError::InputMalformed(format!(
            "game {} has neither a usable slug nor a title",
            entity.id
        )));
    }
    Ok((slug, title))
}

/// Static subcategory map for the main genres
fn subcategories(category: &str) -> Vec<String> {
    let subs: &[&str] = match category {
        "action" => &["fighting", "shooting", "platform"],
        "puzzle" => &["logic", "word", "math"],
        "adventure" => &["rpg", "quest", "exploration"],
        "strategy" => &["tower-defense", "real-time", "turn-based"],
        _ => &[],
    };
    subs.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> SeoGenerator {
        SeoGenerator::new(
            GeneratorConfig {
                base_url: "https://games.test/".to_string(),
                ..Default::default()
            },
            Arc::new(TemplateRegistry::builtin()),
        )
    }

    fn jungle_run() -> Entity {
        Entity {
            id: 7,
            slug: "jungle-run".to_string(),
            title: "Jungle Run".to_string(),
            category: "adventure".to_string(),
            tags: vec!["animal".to_string(), "jump".to_string()],
            thumbnail: Some("http://x/img.jpg".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_variant_id_formula() {
        assert_eq!(variant_id(7, "adventure"), "adventure_226");
        assert_eq!(variant_id(107, "adventure"), "adventure_326");
        assert_eq!(variant_id(0, ""), "_000");
        // no overflow panic on huge ids
        assert!(variant_id(u64::MAX, "action").starts_with("action_"));
    }

    #[test]
    fn test_game_document_basics() {
        let doc = generator().generate_game(&jungle_run(), &[]).unwrap();
        assert_eq!(doc.game_id, 7);
        assert_eq!(doc.slug, "jungle-run");
        assert!(doc.metadata.title.contains("Jungle Run"));
        assert_eq!(doc.metadata.canonical, "https://games.test/games/jungle-run");
        assert_eq!(doc.metadata.open_graph.image, "http://x/img.jpg");
        assert_eq!(doc.metadata.twitter.image, "http://x/img.jpg");
        assert_eq!(doc.metadata.open_graph.og_type, OpenGraphType::Article);
        assert_eq!(doc.metadata.twitter.card, TwitterCardType::SummaryLargeImage);
        assert_eq!(doc.content_variant.variant_id, "adventure_226");
        assert_eq!(doc.content_variant.featured_tags, vec!["animal", "jump"]);
        assert!(doc.metadata.structured_data.is_none());
    }

    #[test]
    fn test_game_title_comes_from_adventure_pool() {
        let gen = generator();
        let doc = gen.generate_game(&jungle_run(), &[]).unwrap();
        let pool = &gen.registry().game_set("adventure").titles;
        let vars: TemplateVars = [("title", "Jungle Run".to_string())].into_iter().collect();
        let expected = render(select(pool, "jungle-run"), &vars);
        assert_eq!(doc.metadata.title, truncate(&expected, 60));
    }

    #[test]
    fn test_blank_thumbnail_uses_default_images() {
        let mut entity = jungle_run();
        entity.thumbnail = Some(String::new());
        let doc = generator().generate_game(&entity, &[]).unwrap();
        assert_eq!(
            doc.metadata.open_graph.image,
            "https://games.test/images/games/jungle-run-og.jpg"
        );
        assert_eq!(
            doc.metadata.twitter.image,
            "https://games.test/images/games/jungle-run-twitter.jpg"
        );
    }

    #[test]
    fn test_missing_title_falls_back_to_slug() {
        let mut entity = jungle_run();
        entity.title.clear();
        let doc = generator().generate_game(&entity, &[]).unwrap();
        assert_eq!(doc.breadcrumbs.last().unwrap().label, "Jungle Run");
    }

    #[test]
    fn test_missing_slug_falls_back_to_title() {
        let mut entity = jungle_run();
        entity.slug.clear();
        let doc = generator().generate_game(&entity, &[]).unwrap();
        assert_eq!(doc.slug, "jungle-run");
    }

    #[test]
    fn test_missing_slug_and_title_is_malformed() {
        let entity = Entity {
            id: 9,
            ..Default::default()
        };
        let err = generator().generate_game(&entity, &[]).unwrap_err();
        assert!(matches!(err, GenerationError::InputMalformed(_)));
    }

    #[test]
    fn test_missing_category_uses_fallback() {
        let mut entity = jungle_run();
        entity.category.clear();
        let doc = generator().generate_game(&entity, &[]).unwrap();
        assert!(doc.content_variant.variant_id.starts_with("general_"));
        assert_eq!(doc.breadcrumbs[2].href, "/categories/general");
    }

    #[test]
    fn test_game_breadcrumbs() {
        let doc = generator().generate_game(&jungle_run(), &[]).unwrap();
        let labels: Vec<_> = doc.breadcrumbs.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Home", "Games", "Adventure", "Jungle Run"]);
        assert!(doc.breadcrumbs[3].current);
        assert!(!doc.breadcrumbs[0].current);
    }

    #[test]
    fn test_related_games_capped_and_self_excluded() {
        let related: Vec<RelatedItem> = (1..=10)
            .map(|id| RelatedItem {
                id,
                slug: format!("g{}", id),
                title: format!("G{}", id),
                thumbnail: String::new(),
                category: "adventure".to_string(),
            })
            .collect();
        let doc = generator().generate_game(&jungle_run(), &related).unwrap();
        assert_eq!(doc.related_games.len(), 6);
        assert!(doc.related_games.iter().all(|r| r.id != 7));
    }

    #[test]
    fn test_lengths_respect_limits() {
        let mut entity = jungle_run();
        entity.title = "An Extraordinarily Long Game Title That Keeps Going And Going".to_string();
        let doc = generator().generate_game(&entity, &[]).unwrap();
        assert!(doc.metadata.title.chars().count() <= 60);
        assert!(doc.metadata.description.chars().count() <= 160);
        assert!(doc.metadata.open_graph.title.chars().count() <= OG_TITLE_MAX);
        assert!(doc.metadata.twitter.title.chars().count() <= TWITTER_TITLE_MAX);
        assert!(doc.metadata.keywords.len() <= 8);
    }

    #[test]
    fn test_category_document() {
        let doc = generator()
            .generate_category("tower-defense", 57, None)
            .unwrap();
        assert_eq!(doc.display_name, "Tower defense");
        assert_eq!(doc.metadata.canonical, "https://games.test/categories/tower-defense");
        assert_eq!(
            doc.metadata.open_graph.image,
            "https://games.test/images/categories/tower-defense-og.jpg"
        );
        assert_eq!(doc.metadata.open_graph.og_type, OpenGraphType::Website);
        assert_eq!(
            doc.content.stats,
            CategoryStatsBlock {
                total: 57,
                featured: 5,
                recent: 11
            }
        );
        assert!(doc.subcategories.is_empty());
        assert_eq!(doc.breadcrumbs.len(), 3);
    }

    #[test]
    fn test_category_stats_caps_and_subcategories() {
        let doc = generator().generate_category("action", 500, None).unwrap();
        assert_eq!(doc.content.stats.featured, 10);
        assert_eq!(doc.content.stats.recent, 20);
        assert_eq!(doc.subcategories, vec!["fighting", "shooting", "platform"]);
    }

    #[test]
    fn test_category_uses_sample_thumbnail() {
        let sample = jungle_run();
        let doc = generator()
            .generate_category("adventure", 3, Some(&sample))
            .unwrap();
        assert_eq!(doc.metadata.open_graph.image, "http://x/img.jpg");
    }

    #[test]
    fn test_empty_category_is_malformed() {
        assert!(generator().generate_category("  ", 1, None).is_err());
        assert!(generator().generate_tag("", 1, &[], None).is_err());
    }

    #[test]
    fn test_tag_document() {
        let related = vec!["jump".to_string(), "animal".to_string(), "cat".to_string()];
        let doc = generator().generate_tag("animal", 12, &related, None).unwrap();
        assert_eq!(doc.display_name, "Animal");
        assert_eq!(doc.related_tags, vec!["jump", "cat"]);
        assert!(doc.description.starts_with("Discover games with animal theme!"));
        assert_eq!(doc.metadata.canonical, "https://games.test/tags/animal");
        assert_eq!(
            doc.metadata.twitter.image,
            "https://games.test/images/tags/animal-twitter.jpg"
        );
    }

    #[test]
    fn test_home_document() {
        let input = HomeInput {
            featured: vec![RelatedItem::from(&jungle_run()); 9],
            popular_categories: vec![PopularCategory {
                name: "action".to_string(),
                count: 40,
            }],
            latest: Vec::new(),
            total_games: 120,
        };
        let doc = generator().generate_home(&input);
        assert_eq!(doc.metadata.canonical, "https://games.test");
        assert_eq!(doc.featured_sections.todays_featured.games.len(), 6);
        assert_eq!(
            doc.featured_sections.popular_categories.categories[0].thumbnail,
            "https://games.test/images/categories/action.jpg"
        );
        let sd = doc.metadata.structured_data.as_ref().unwrap();
        assert_eq!(sd["@type"], "WebSite");
        assert_eq!(sd["potentialAction"]["@type"], "SearchAction");
        assert_eq!(
            sd["potentialAction"]["target"],
            "https://games.test/search?q={search_term_string}"
        );
    }

    #[test]
    fn test_generation_is_deterministic() {
        let gen = generator();
        let a = serde_json::to_string(&gen.generate_game(&jungle_run(), &[]).unwrap()).unwrap();
        let b = serde_json::to_string(&gen.generate_game(&jungle_run(), &[]).unwrap()).unwrap();
        assert_eq!(a, b);
    }
}
