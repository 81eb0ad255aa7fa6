//! Quality Checker
//!
//! Scores one generated document and decides nothing by itself: the batch
//! orchestrator compares the composite score against the gate threshold.
//!
//! # Quality Dimensions
//! 1. **Uniqueness**: duplicate titles, description similarity against recent
//!    descriptions, lexical variety
//! 2. **SEO compliance**: length ranges, keyword count, required keywords,
//!    keyword density
//! 3. **Content quality**: denylist, filler words, grammar, readability,
//!    information completeness
//!
//! # Scoring Algorithm
//! Each dimension starts at 1.0 and loses points per failed check, floored at 0:
//! - **Uniqueness** (default weight 0.3):
//!   - Duplicate title: -0.5 (hard fail)
//!   - Description Jaccard > `similarity_fail`: -0.3, > `similarity_warn`: -0.1
//!   - Lexical variety < `min_variation`: -0.1
//! - **SEO** (default weight 0.4):
//!   - Title length out of range: -0.2
//!   - Description length out of range: -0.2
//!   - Keyword count out of range: -0.1
//!   - No required keyword: -0.3
//!   - Keyword density outside band: -0.1
//! - **Content** (default weight 0.3):
//!   - Denylisted term: -0.5 (hard fail)
//!   - More than `filler_threshold` filler words: -0.2
//!   - Grammar < `min_grammar`, readability < `min_readability`,
//!     completeness < `min_completeness`: -0.1 each
//!
//! A hard fail caps the composite at `hard_fail_cap`. Type-specific structural
//! checks add warnings only.
//!
//! # Shared state
//! The duplicate caches live behind a mutex. SEO and content scoring run
//! without the lock; the uniqueness comparison and the cache insert happen in
//! one critical section so concurrent checks never lose an update.

use super::duplicate_cache::{CacheStats, DuplicateCaches};
use super::text_metrics;
use crate::types::{SeoDocument, SeoMetadata};
use seogen_common::EntityKind;
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

// ============================================================================
// Configuration
// ============================================================================

/// Dimension weights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityWeights {
    #[serde(default = "default_uniqueness_weight")]
    pub uniqueness: f64,
    #[serde(default = "default_seo_weight")]
    pub seo: f64,
    #[serde(default = "default_content_weight")]
    pub content: f64,
}

fn default_uniqueness_weight() -> f64 {
    0.3
}

fn default_seo_weight() -> f64 {
    0.4
}

fn default_content_weight() -> f64 {
    0.3
}

impl Default for QualityWeights {
    fn default() -> Self {
        Self {
            uniqueness: default_uniqueness_weight(),
            seo: default_seo_weight(),
            content: default_content_weight(),
        }
    }
}

/// Inclusive length range (chars or counts)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthRange {
    pub min: usize,
    pub max: usize,
}

impl LengthRange {
    pub fn contains(&self, value: usize) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Inclusive keyword-density band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityBand {
    pub min: f64,
    pub max: f64,
}

/// Per-kind gate threshold overrides
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ThresholdOverrides {
    #[serde(default)]
    pub game: Option<f64>,
    #[serde(default)]
    pub category: Option<f64>,
    #[serde(default)]
    pub tag: Option<f64>,
    #[serde(default)]
    pub home: Option<f64>,
}

/// Quality checker configuration (`[quality]` section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    /// Default gate threshold
    pub threshold: f64,
    /// Per-kind gate thresholds
    pub overrides: ThresholdOverrides,
    pub weights: QualityWeights,
    pub title_length: LengthRange,
    pub description_length: LengthRange,
    pub keyword_count: LengthRange,
    pub keyword_density: DensityBand,
    /// At least one must appear in title, description or keywords
    pub required_keywords: Vec<String>,
    /// Whole-word/phrase matches are hard fails
    pub denylist: Vec<String>,
    /// Whole-word/phrase matches count towards the filler penalty
    pub filler_words: Vec<String>,
    /// Filler penalty applies above this many distinct filler words
    pub filler_threshold: usize,
    pub similarity_fail: f64,
    pub similarity_warn: f64,
    pub min_variation: f64,
    /// Capacity of each duplicate cache
    pub cache_capacity: usize,
    /// Most recent descriptions compared per check
    pub similarity_window: usize,
    pub min_readability: f64,
    pub min_grammar: f64,
    pub min_completeness: f64,
    /// Composite ceiling after a hard fail
    pub hard_fail_cap: f64,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            threshold: 0.6,
            overrides: ThresholdOverrides::default(),
            weights: QualityWeights::default(),
            title_length: LengthRange { min: 30, max: 60 },
            description_length: LengthRange { min: 120, max: 160 },
            keyword_count: LengthRange { min: 3, max: 8 },
            keyword_density: DensityBand {
                min: 0.02,
                max: 0.30,
            },
            required_keywords: strings(&["free", "online", "game"]),
            denylist: strings(&[
                "spam", "fake", "virus", "malware", "hack", "cheat", "illegal", "download",
                "install", "crack", "pirate", "torrent",
            ]),
            filler_words: strings(&[
                "awesome",
                "amazing",
                "incredible",
                "fantastic",
                "super",
                "mega",
                "ultimate",
                "best ever",
                "perfect",
                "unbelievable",
                "mind-blowing",
            ]),
            filler_threshold: 2,
            similarity_fail: 0.8,
            similarity_warn: 0.6,
            min_variation: 0.3,
            cache_capacity: 100,
            similarity_window: 100,
            min_readability: 0.6,
            min_grammar: 0.8,
            min_completeness: 0.7,
            hard_fail_cap: 0.4,
        }
    }
}

impl QualityConfig {
    /// Gate threshold for a document kind
    pub fn threshold_for(&self, kind: EntityKind) -> f64 {
        let override_value = match kind {
            EntityKind::Game => self.overrides.game,
            EntityKind::Category => self.overrides.category,
            EntityKind::Tag => self.overrides.tag,
            EntityKind::Home => self.overrides.home,
        };
        override_value.unwrap_or(self.threshold)
    }

    /// Reject values that cannot produce meaningful scores
    pub fn validate(&self) -> seogen_common::Result<()> {
        let unit = |name: &str, v: f64| {
            if (0.0..=1.0).contains(&v) {
                Ok(())
            } else {
                Err(seogen_common::Error::Config(format!(
                    "quality.{} must be within [0, 1], got {}",
                    name, v
                )))
            }
        };

        unit("threshold", self.threshold)?;
        for (name, value) in [
            ("overrides.game", self.overrides.game),
            ("overrides.category", self.overrides.category),
            ("overrides.tag", self.overrides.tag),
            ("overrides.home", self.overrides.home),
        ] {
            if let Some(v) = value {
                unit(name, v)?;
            }
        }
        unit("weights.uniqueness", self.weights.uniqueness)?;
        unit("weights.seo", self.weights.seo)?;
        unit("weights.content", self.weights.content)?;
        unit("keyword_density.min", self.keyword_density.min)?;
        unit("keyword_density.max", self.keyword_density.max)?;
        unit("similarity_fail", self.similarity_fail)?;
        unit("similarity_warn", self.similarity_warn)?;
        unit("min_variation", self.min_variation)?;
        unit("min_readability", self.min_readability)?;
        unit("min_grammar", self.min_grammar)?;
        unit("min_completeness", self.min_completeness)?;
        unit("hard_fail_cap", self.hard_fail_cap)?;

        let ordered = |name: &str, min: f64, max: f64| {
            if min <= max {
                Ok(())
            } else {
                Err(seogen_common::Error::Config(format!(
                    "quality.{}: min {} exceeds max {}",
                    name, min, max
                )))
            }
        };
        ordered(
            "title_length",
            self.title_length.min as f64,
            self.title_length.max as f64,
        )?;
        ordered(
            "description_length",
            self.description_length.min as f64,
            self.description_length.max as f64,
        )?;
        ordered(
            "keyword_count",
            self.keyword_count.min as f64,
            self.keyword_count.max as f64,
        )?;
        ordered(
            "keyword_density",
            self.keyword_density.min,
            self.keyword_density.max,
        )?;
        ordered(
            "similarity_warn/similarity_fail",
            self.similarity_warn,
            self.similarity_fail,
        )?;

        if self.cache_capacity == 0 {
            return Err(seogen_common::Error::Config(
                "quality.cache_capacity must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Results
// ============================================================================

/// Named check outcomes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckDetails {
    pub passed: Vec<String>,
    pub failed: Vec<String>,
    pub warnings: Vec<String>,
}

impl CheckDetails {
    fn append(&mut self, other: CheckDetails) {
        self.passed.extend(other.passed);
        self.failed.extend(other.failed);
        self.warnings.extend(other.warnings);
    }
}

/// Result of scoring one document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityCheckResult {
    /// Weighted composite (0-1)
    pub overall_score: f64,
    pub uniqueness_score: f64,
    pub seo_score: f64,
    pub content_score: f64,
    pub details: CheckDetails,
    pub suggestions: Vec<String>,
    /// Duplicate title or denylisted term found
    pub hard_fail: bool,
}

impl QualityCheckResult {
    /// Composite meets `threshold`
    pub fn passes(&self, threshold: f64) -> bool {
        self.overall_score >= threshold
    }

    /// First failed check, or a generic reason
    pub fn primary_reason(&self) -> String {
        self.details
            .failed
            .first()
            .or_else(|| self.details.warnings.first())
            .cloned()
            .unwrap_or_else(|| "low composite score".to_string())
    }
}

// ============================================================================
// Checker
// ============================================================================

/// SEO quality checker with run-scoped duplicate caches
pub struct QualityChecker {
    config: QualityConfig,
    caches: Mutex<DuplicateCaches>,
}

impl QualityChecker {
    /// Create checker with empty caches
    pub fn new(config: QualityConfig) -> Self {
        let caches = Mutex::new(DuplicateCaches::new(config.cache_capacity));
        Self { config, caches }
    }

    /// Checker configuration
    pub fn config(&self) -> &QualityConfig {
        &self.config
    }

    /// Score a full document, including structural checks for its kind
    pub fn check(&self, document: &SeoDocument) -> QualityCheckResult {
        self.evaluate(document.metadata(), document.kind(), Some(document))
    }

    /// Score bare metadata (no structural checks)
    pub fn check_metadata(&self, metadata: &SeoMetadata, kind: EntityKind) -> QualityCheckResult {
        self.evaluate(metadata, kind, None)
    }

    /// Current cache occupancy
    pub fn cache_stats(&self) -> CacheStats {
        self.lock_caches().stats()
    }

    /// Forget every title and description seen so far
    pub fn clear_cache(&self) {
        self.lock_caches().clear();
    }

    fn lock_caches(&self) -> MutexGuard<'_, DuplicateCaches> {
        self.caches.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn evaluate(
        &self,
        metadata: &SeoMetadata,
        kind: EntityKind,
        document: Option<&SeoDocument>,
    ) -> QualityCheckResult {
        let title = metadata.title.as_str();
        let description = metadata.description.as_str();

        let mut seo_details = CheckDetails::default();
        let seo_score = self.score_seo(title, description, &metadata.keywords, &mut seo_details);

        let mut content_details = CheckDetails::default();
        let (content_score, denylisted) =
            self.score_content(title, description, &mut content_details);

        let mut details = CheckDetails::default();
        let (uniqueness_score, duplicate_title) =
            self.score_uniqueness(title, description, &mut details);
        details.append(seo_details);
        details.append(content_details);

        if let Some(document) = document {
            structural_checks(document, &mut details);
        }

        let w = &self.config.weights;
        let mut overall =
            w.uniqueness * uniqueness_score + w.seo * seo_score + w.content * content_score;
        let hard_fail = duplicate_title || denylisted;
        if hard_fail {
            overall = overall.min(self.config.hard_fail_cap);
        }
        let overall_score = overall.clamp(0.0, 1.0);

        let suggestions = suggestions(uniqueness_score, seo_score, content_score, &details);

        debug!(
            kind = %kind,
            title = %title,
            overall = overall_score,
            uniqueness = uniqueness_score,
            seo = seo_score,
            content = content_score,
            failed = details.failed.len(),
            warnings = details.warnings.len(),
            "Quality check complete"
        );

        QualityCheckResult {
            overall_score,
            uniqueness_score,
            seo_score,
            content_score,
            details,
            suggestions,
            hard_fail,
        }
    }

    /// Uniqueness dimension; compares and records under one lock
    fn score_uniqueness(
        &self,
        title: &str,
        description: &str,
        details: &mut CheckDetails,
    ) -> (f64, bool) {
        let mut score: f64 = 1.0;
        // exact match on the lowercased title; punctuation is significant
        let title_key = title.trim().to_lowercase();
        let description_key = description.to_lowercase();
        let description_words = text_metrics::word_set(&description_key);

        let (duplicate_title, max_similarity) = {
            let mut caches = self.lock_caches();

            let duplicate = !title_key.is_empty() && caches.titles.contains(&title_key);

            let mut max_similarity: f64 = 0.0;
            for cached in caches.descriptions.recent(self.config.similarity_window) {
                let similarity =
                    text_metrics::jaccard(&description_words, &text_metrics::word_set(cached));
                max_similarity = max_similarity.max(similarity);
                if max_similarity > 0.9 {
                    break;
                }
            }

            if !title_key.is_empty() {
                caches.titles.insert(title_key);
            }
            if !description_key.trim().is_empty() {
                caches.descriptions.insert(description_key);
            }
            (duplicate, max_similarity)
        };

        if duplicate_title {
            details.failed.push("Duplicate title".to_string());
            score -= 0.5;
        } else {
            details.passed.push("Title is unique".to_string());
        }

        if max_similarity > self.config.similarity_fail {
            details.failed.push(format!(
                "Description too similar to earlier content ({:.2})",
                max_similarity
            ));
            score -= 0.3;
        } else if max_similarity > self.config.similarity_warn {
            details.warnings.push(format!(
                "Description similar to earlier content ({:.2})",
                max_similarity
            ));
            score -= 0.1;
        } else {
            details.passed.push("Description is distinct".to_string());
        }

        let variation = text_metrics::lexical_variety(title, description);
        if variation < self.config.min_variation {
            details
                .warnings
                .push(format!("Low lexical variety ({:.2})", variation));
            score -= 0.1;
        }

        (score.max(0.0), duplicate_title)
    }

    fn score_seo(
        &self,
        title: &str,
        description: &str,
        keywords: &[String],
        details: &mut CheckDetails,
    ) -> f64 {
        let cfg = &self.config;
        let mut score: f64 = 1.0;

        let title_len = title.chars().count();
        if cfg.title_length.contains(title_len) {
            details.passed.push("Title length in range".to_string());
        } else {
            details.failed.push(format!(
                "Title length {} outside {}-{}",
                title_len, cfg.title_length.min, cfg.title_length.max
            ));
            score -= 0.2;
        }

        let description_len = description.chars().count();
        if cfg.description_length.contains(description_len) {
            details.passed.push("Description length in range".to_string());
        } else {
            details.failed.push(format!(
                "Description length {} outside {}-{}",
                description_len, cfg.description_length.min, cfg.description_length.max
            ));
            score -= 0.2;
        }

        if cfg.keyword_count.contains(keywords.len()) {
            details.passed.push("Keyword count in range".to_string());
        } else {
            details.warnings.push(format!(
                "Keyword count {} outside {}-{}",
                keywords.len(),
                cfg.keyword_count.min,
                cfg.keyword_count.max
            ));
            score -= 0.1;
        }

        let title_lower = title.to_lowercase();
        let description_lower = description.to_lowercase();
        let keywords_lower: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
        let has_required = cfg.required_keywords.iter().any(|required| {
            let required = required.to_lowercase();
            title_lower.contains(&required)
                || description_lower.contains(&required)
                || keywords_lower.iter().any(|k| k.contains(&required))
        });
        if has_required || cfg.required_keywords.is_empty() {
            details.passed.push("Contains a required keyword".to_string());
        } else {
            details.failed.push(format!(
                "Missing required keyword ({})",
                cfg.required_keywords.join(", ")
            ));
            score -= 0.3;
        }

        let density =
            text_metrics::keyword_density(&format!("{} {}", title, description), keywords);
        if density < cfg.keyword_density.min || density > cfg.keyword_density.max {
            details.warnings.push(format!(
                "Keyword density {:.3} outside {:.2}-{:.2}",
                density, cfg.keyword_density.min, cfg.keyword_density.max
            ));
            score -= 0.1;
        }

        score.max(0.0)
    }

    fn score_content(&self, title: &str, description: &str, details: &mut CheckDetails) -> (f64, bool) {
        let cfg = &self.config;
        let mut score: f64 = 1.0;
        let tokens = text_metrics::tokenize(&format!("{} {}", title, description));

        let denied = text_metrics::find_phrases(&tokens, &cfg.denylist);
        let denylisted = !denied.is_empty();
        if denylisted {
            details
                .failed
                .push(format!("Denylisted terms: {}", denied.join(", ")));
            score -= 0.5;
        } else {
            details.passed.push("No denylisted terms".to_string());
        }

        let filler = text_metrics::find_phrases(&tokens, &cfg.filler_words);
        if filler.len() > cfg.filler_threshold {
            details
                .warnings
                .push(format!("Too many filler words: {}", filler.join(", ")));
            score -= 0.2;
        }

        if text_metrics::grammar_score(title, description) < cfg.min_grammar {
            details.warnings.push("Possible grammar issues".to_string());
            score -= 0.1;
        }

        let readability = text_metrics::readability(description);
        if readability < cfg.min_readability {
            details
                .warnings
                .push(format!("Low readability ({:.2})", readability));
            score -= 0.1;
        }

        if text_metrics::completeness_score(title, description) < cfg.min_completeness {
            details.warnings.push("Incomplete information".to_string());
            score -= 0.1;
        }

        (score.max(0.0), denylisted)
    }
}

/// Structural warnings per document kind
fn structural_checks(document: &SeoDocument, details: &mut CheckDetails) {
    let warnings = &mut details.warnings;
    match document {
        SeoDocument::Game(doc) => {
            if doc.breadcrumbs.len() < 3 {
                warnings.push("Incomplete breadcrumb trail".to_string());
            } else {
                details.passed.push("Breadcrumb trail complete".to_string());
            }
            if doc.related_games.len() < 3 {
                warnings.push("Few related games".to_string());
            }
            if doc.content_variant.variant_id.is_empty() {
                warnings.push("Missing content variant".to_string());
            }
        }
        SeoDocument::Category(doc) => {
            if doc.content.main_description.trim().is_empty() {
                warnings.push("Missing main description".to_string());
            }
            if doc.content.stats.total == 0 {
                warnings.push("Category statistics are empty".to_string());
            }
        }
        SeoDocument::Tag(doc) => {
            if doc.description.chars().count() < 50 {
                warnings.push("Tag description too short".to_string());
            }
            if doc.related_tags.len() < 2 {
                warnings.push("Few related tags".to_string());
            }
        }
        SeoDocument::Home(doc) => {
            let sections = &doc.featured_sections;
            if sections.todays_featured.games.is_empty() {
                warnings.push("No featured games".to_string());
            }
            if sections.popular_categories.categories.is_empty() {
                warnings.push("No popular categories".to_string());
            }
            if sections.latest_games.games.is_empty() {
                warnings.push("No latest games".to_string());
            }
            if doc.metadata.structured_data.is_none() {
                warnings.push("Missing structured data".to_string());
            }
        }
    }
}

fn suggestions(uniqueness: f64, seo: f64, content: f64, details: &CheckDetails) -> Vec<String> {
    let mut out = Vec::new();
    if uniqueness < 0.7 {
        out.push("Make the content more distinct from similar pages".to_string());
    }
    if seo < 0.7 {
        out.push("Adjust title and description length and include a required keyword".to_string());
    }
    if content < 0.7 {
        out.push("Improve wording: avoid filler and denylisted terms, keep sentences readable".to_string());
    }
    if !details.failed.is_empty() {
        out.push("Fix every failed check to raise the overall score".to_string());
    }
    if details.warnings.len() > 2 {
        out.push("Review the warnings for further improvements".to_string());
    }
    out
}
