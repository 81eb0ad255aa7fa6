//! Template registry
//!
//! Holds the title/description/keyword pools and content-variant phrase pools
//! for every genre plus the category, tag and home pages. The registry is
//! read-only after construction and shared by every generation call in a run.
//!
//! # Selection
//! Templates are picked with [`seeded_index`]: a non-cryptographic
//! hash-then-modulo over a stable seed string (usually the entity slug plus a
//! purpose suffix). The same seed always selects the same template, so
//! regenerating an entity reproduces its document byte-for-byte. Collisions
//! are acceptable.
//!
//! # Lookup
//! Game categories resolve through the closed [`Genre`] set. Anything that is
//! not a known genre maps to [`Genre::Default`], and the registry always holds
//! a default set, so [`TemplateRegistry::game_set`] is total.

pub mod builtin;

use crate::error::{GenerationError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

// ============================================================================
// Genre
// ============================================================================

/// Known game genres with dedicated template pools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Action,
    Puzzle,
    Adventure,
    Strategy,
    Racing,
    /// Fallback for every category without a dedicated pool
    Default,
}

impl Genre {
    /// Every genre including the default
    pub const ALL: [Genre; 6] = [
        Genre::Action,
        Genre::Puzzle,
        Genre::Adventure,
        Genre::Strategy,
        Genre::Racing,
        Genre::Default,
    ];

    /// Resolve a catalog category (case-insensitive, never fails)
    pub fn from_category(category: &str) -> Genre {
        Genre::from_name(&category.trim().to_ascii_lowercase())
            .filter(|g| *g != Genre::Default)
            .unwrap_or(Genre::Default)
    }

    /// Strict lookup by lowercase name, used when loading template files
    pub fn from_name(name: &str) -> Option<Genre> {
        Genre::ALL.iter().copied().find(|g| g.name() == name)
    }

    /// Lowercase genre name
    pub fn name(&self) -> &'static str {
        match self {
            Genre::Action => "action",
            Genre::Puzzle => "puzzle",
            Genre::Adventure => "adventure",
            Genre::Strategy => "strategy",
            Genre::Racing => "racing",
            Genre::Default => "default",
        }
    }
}

// ============================================================================
// Template sets
// ============================================================================

/// Template pools for one genre or page type
///
/// Placeholders use `{name}` syntax; see [`render`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSet {
    #[serde(default)]
    pub titles: Vec<String>,
    #[serde(default)]
    pub descriptions: Vec<String>,
    /// Comma-separated keyword lists
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub recommendation_reasons: Vec<String>,
    #[serde(default)]
    pub featured_descriptions: Vec<String>,
    #[serde(default)]
    pub gameplay_descriptions: Vec<String>,
}

impl TemplateSet {
    /// Build a set from static string pools
    pub fn from_static(
        titles: &[&str],
        descriptions: &[&str],
        keywords: &[&str],
        recommendation_reasons: &[&str],
        featured_descriptions: &[&str],
        gameplay_descriptions: &[&str],
    ) -> Self {
        let owned = |pool: &[&str]| pool.iter().map(|s| s.to_string()).collect();
        Self {
            titles: owned(titles),
            descriptions: owned(descriptions),
            keywords: owned(keywords),
            recommendation_reasons: owned(recommendation_reasons),
            featured_descriptions: owned(featured_descriptions),
            gameplay_descriptions: owned(gameplay_descriptions),
        }
    }

    /// Title, description and keyword pools are all non-empty
    pub fn is_complete(&self) -> bool {
        !self.titles.is_empty() && !self.descriptions.is_empty() && !self.keywords.is_empty()
    }
}

/// On-disk override layout
#[derive(Debug, Default, Deserialize)]
struct TemplateFile {
    #[serde(default)]
    genres: BTreeMap<String, TemplateSet>,
    #[serde(default)]
    category: Option<TemplateSet>,
    #[serde(default)]
    tag: Option<TemplateSet>,
    #[serde(default)]
    home: Option<TemplateSet>,
}

/// Read-only registry of all template sets for a run
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    default: TemplateSet,
    genres: BTreeMap<Genre, TemplateSet>,
    category: TemplateSet,
    tag: TemplateSet,
    home: TemplateSet,
}

impl TemplateRegistry {
    /// Registry with the built-in pools
    pub fn builtin() -> Self {
        let mut genres = BTreeMap::new();
        for genre in Genre::ALL {
            if genre != Genre::Default {
                genres.insert(genre, builtin::genre_set(genre));
            }
        }
        Self {
            default: builtin::genre_set(Genre::Default),
            genres,
            category: builtin::category_set(),
            tag: builtin::tag_set(),
            home: builtin::home_set(),
        }
    }

    /// Parse an override file
    ///
    /// `[genres.default]` is mandatory and must carry title, description and
    /// keyword templates. Page sets (`[category]`, `[tag]`, `[home]`) that are
    /// absent fall back to the built-in ones. Genres without a section fall
    /// back to the default set at lookup time.
    ///
    /// # Errors
    /// [`GenerationError::FatalConfig`] on unparsable TOML, an unknown genre
    /// name or a missing/incomplete default set.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: TemplateFile = toml::from_str(content)
            .map_err(|e| GenerationError::FatalConfig(format!("Invalid template file: {}", e)))?;

        let mut default = None;
        let mut genres = BTreeMap::new();
        for (name, set) in file.genres {
            let genre = Genre::from_name(&name.to_ascii_lowercase()).ok_or_else(|| {
                GenerationError::FatalConfig(format!("Unknown genre '{}' in template file", name))
            })?;
            if genre == Genre::Default {
                default = Some(set);
            } else {
                genres.insert(genre, set);
            }
        }

        let default = default.ok_or_else(|| {
            GenerationError::FatalConfig(
                "Template file has no [genres.default] section".to_string(),
            )
        })?;
        if !default.is_complete() {
            return Err(GenerationError::FatalConfig(
                "[genres.default] needs titles, descriptions and keywords".to_string(),
            ));
        }

        debug!(
            genres = genres.len(),
            custom_category = file.category.is_some(),
            custom_tag = file.tag.is_some(),
            custom_home = file.home.is_some(),
            "Parsed template overrides"
        );

        Ok(Self {
            default,
            genres,
            category: file.category.unwrap_or_else(builtin::category_set),
            tag: file.tag.unwrap_or_else(builtin::tag_set),
            home: file.home.unwrap_or_else(builtin::home_set),
        })
    }

    /// Load an override file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            GenerationError::FatalConfig(format!(
                "Cannot read template file {}: {}",
                path.display(),
                e
            ))
        })?;
        let registry = Self::from_toml_str(&content)?;
        info!(path = %path.display(), "Loaded template overrides");
        Ok(registry)
    }

    /// Template set for a game category (total)
    pub fn game_set(&self, category: &str) -> &TemplateSet {
        self.genre_set(Genre::from_category(category))
    }

    /// Template set for a genre, falling back to the default set
    pub fn genre_set(&self, genre: Genre) -> &TemplateSet {
        self.genres.get(&genre).unwrap_or(&self.default)
    }

    /// Category page templates
    pub fn category_set(&self) -> &TemplateSet {
        &self.category
    }

    /// Tag page templates
    pub fn tag_set(&self) -> &TemplateSet {
        &self.tag
    }

    /// Home page templates
    pub fn home_set(&self) -> &TemplateSet {
        &self.home
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

// ============================================================================
// Selection and substitution
// ============================================================================

/// Deterministic index into a pool of `n` items
///
/// 32-bit wrapping `h = h * 31 + unit` over the UTF-16 code units of `seed`,
/// then `|h| mod n`. Returns 0 when `n == 0`.
pub fn seeded_index(seed: &str, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let hash = seed
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)));
    (i64::from(hash).unsigned_abs() % n as u64) as usize
}

/// Pick a template from `pool` using `seed`; empty pools yield `""`
pub fn select<'a>(pool: &'a [String], seed: &str) -> &'a str {
    pool.get(seeded_index(seed, pool.len()))
        .map(String::as_str)
        .unwrap_or("")
}

/// Placeholder values for [`render`]
pub type TemplateVars<'a> = BTreeMap<&'a str, String>;

/// Replace every `{name}` in `template` with its value from `vars`
///
/// Placeholders without a value are left verbatim, as are unbalanced braces.
pub fn render(template: &str, vars: &TemplateVars<'_>) -> String {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find(['{', '}']) {
            Some(close) if after.as_bytes()[close] == b'}' => {
                let name = &after[..close];
                match vars.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
