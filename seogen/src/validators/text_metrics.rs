//! Text metrics used by the quality checker
//!
//! Cheap heuristics only: tokenization, Jaccard similarity, lexical variety,
//! keyword density, a grammar sniff test, a simplified Flesch reading-ease
//! score and an information-completeness check.

use std::collections::HashSet;

/// Genre vocabulary for the completeness check
pub const GENRE_WORDS: &[&str] = &["action", "puzzle", "adventure", "strategy", "sports", "racing"];

/// Platform vocabulary for the completeness check
pub const PLATFORM_WORDS: &[&str] = &["online", "browser", "free", "instant"];

/// Call-to-action vocabulary for the completeness check
pub const CTA_WORDS: &[&str] = &["play", "start", "begin", "enjoy", "experience"];

/// Lowercase alphanumeric tokens
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Lowercase whitespace-separated word set
pub fn word_set(text: &str) -> HashSet<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Jaccard similarity of two word sets; two empty sets score 0
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// Unique words over total words across title and description
pub fn lexical_variety(title: &str, description: &str) -> f64 {
    let words: Vec<String> = title
        .split_whitespace()
        .chain(description.split_whitespace())
        .map(str::to_lowercase)
        .collect();
    if words.is_empty() {
        return 0.0;
    }
    let unique: HashSet<&String> = words.iter().collect();
    unique.len() as f64 / words.len() as f64
}

/// Keyword-token occurrences over total tokens of `content`
pub fn keyword_density(content: &str, keywords: &[String]) -> f64 {
    let tokens = tokenize(content);
    if tokens.is_empty() {
        return 0.0;
    }
    let keyword_tokens: HashSet<String> = keywords.iter().flat_map(|k| tokenize(k)).collect();
    let hits = tokens.iter().filter(|t| keyword_tokens.contains(*t)).count();
    hits as f64 / tokens.len() as f64
}

/// Find every `needles` entry present as a whole word or phrase in `tokens`
pub fn find_phrases(tokens: &[String], needles: &[String]) -> Vec<String> {
    needles
        .iter()
        .filter(|needle| {
            let phrase = tokenize(needle);
            !phrase.is_empty()
                && tokens
                    .windows(phrase.len())
                    .any(|w| w.iter().zip(&phrase).all(|(a, b)| a == b))
        })
        .cloned()
        .collect()
}

fn sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Grammar heuristic (0-1)
///
/// -0.1 when the title starts with a lowercase letter, -0.2 when more than 30%
/// of the description's sentences have fewer than three words.
pub fn grammar_score(title: &str, description: &str) -> f64 {
    let mut score: f64 = 1.0;

    if title.trim_start().chars().next().is_some_and(char::is_lowercase) {
        score -= 0.1;
    }

    let sentences = sentences(description);
    let short = sentences
        .iter()
        .filter(|s| s.split_whitespace().count() < 3)
        .count();
    if !sentences.is_empty() && short as f64 > sentences.len() as f64 * 0.3 {
        score -= 0.2;
    }

    score.max(0.0)
}

/// Syllable estimate: vowel groups, minus a trailing silent `e`, at least 1
pub fn count_syllables(word: &str) -> usize {
    let word: String = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();
    if word.chars().count() <= 3 {
        return 1;
    }

    let mut count = 0usize;
    let mut previous_was_vowel = false;
    for c in word.chars() {
        let is_vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = is_vowel;
    }

    if word.ends_with('e') {
        count = count.saturating_sub(1);
    }
    count.max(1)
}

/// Simplified Flesch reading ease mapped to 0-1
///
/// `206.835 - 1.015 * words/sentence - 84.6 * syllables/word`, divided by 100
/// and clamped. Text without sentences scores 0.
pub fn readability(text: &str) -> f64 {
    let words: Vec<&str> = text.split_whitespace().collect();
    let sentence_count = sentences(text).len();
    if sentence_count == 0 || words.is_empty() {
        return 0.0;
    }

    let avg_sentence_len = words.len() as f64 / sentence_count as f64;
    let avg_syllables =
        words.iter().map(|w| count_syllables(w)).sum::<usize>() as f64 / words.len() as f64;

    let score = 206.835 - 1.015 * avg_sentence_len - 84.6 * avg_syllables;
    (score / 100.0).clamp(0.0, 1.0)
}

/// Completeness heuristic (0-1)
///
/// -0.2 without genre vocabulary, -0.2 without platform vocabulary (both over
/// title and description), -0.1 without a call to action in the description.
pub fn completeness_score(title: &str, description: &str) -> f64 {
    let combined = format!("{} {}", title, description).to_lowercase();
    let description = description.to_lowercase();
    let mut score: f64 = 1.0;

    if !GENRE_WORDS.iter().any(|w| combined.contains(w)) {
        score -= 0.2;
    }
    if !PLATFORM_WORDS.iter().any(|w| combined.contains(w)) {
        score -= 0.2;
    }
    if !CTA_WORDS.iter().any(|w| description.contains(w)) {
        score -= 0.1;
    }
    score.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("Play Jungle-Run, now!"), strings(&["play", "jungle", "run", "now"]));
        assert!(tokenize("...").is_empty());
    }

    #[test]
    fn test_jaccard() {
        let a = word_set("a b c");
        let b = word_set("b c d");
        assert!((jaccard(&a, &b) - 0.5).abs() < 1e-9);
        assert_eq!(jaccard(&HashSet::new(), &HashSet::new()), 0.0);
        assert_eq!(jaccard(&a, &a), 1.0);
    }

    #[test]
    fn test_lexical_variety() {
        assert_eq!(lexical_variety("", ""), 0.0);
        assert_eq!(lexical_variety("a a", "a a"), 0.25);
        assert_eq!(lexical_variety("a b", "c d"), 1.0);
    }

    #[test]
    fn test_keyword_density() {
        let keywords = strings(&["free games"]);
        // tokens: play free games now -> 2 of 4
        assert_eq!(keyword_density("Play free games now", &keywords), 0.5);
        assert_eq!(keyword_density("", &keywords), 0.0);
    }

    #[test]
    fn test_find_phrases_whole_words() {
        let tokens = tokenize("This was the best ever hackathon, truly mind-blowing");
        let found = find_phrases(&tokens, &strings(&["hack", "best ever", "mind-blowing", "ever best"]));
        assert_eq!(found, strings(&["best ever", "mind-blowing"]));
    }

    #[test]
    fn test_syllables() {
        assert_eq!(count_syllables("game"), 1);
        assert_eq!(count_syllables("adventure"), 3);
        assert_eq!(count_syllables("the"), 1);
        assert_eq!(count_syllables("rhythm"), 1);
        assert_eq!(count_syllables("jumping!"), 2);
        assert_eq!(count_syllables(""), 1);
    }

    #[test]
    fn test_grammar_score() {
        assert_eq!(grammar_score("Jungle Run", "This is fine. It has long sentences."), 1.0);
        assert!((grammar_score("jungle run", "This is fine.") - 0.9).abs() < 1e-9);
        assert!((grammar_score("Jungle", "Go! Run! This one is long.") - 0.8).abs() < 1e-9);
        // empty segments from trailing punctuation are ignored
        assert_eq!(grammar_score("A", "One two three. Four five six!..."), 1.0);
    }

    #[test]
    fn test_readability_bounds() {
        assert_eq!(readability(""), 0.0);
        assert_eq!(readability("   "), 0.0);
        let simple = readability("The cat sat. The dog ran. We had fun.");
        assert!(simple > 0.9, "simple text scored {}", simple);
        let dense = readability(
            "Incomprehensibility characterizes institutionalized administrative documentation universally",
        );
        assert_eq!(dense, 0.0);
    }

    #[test]
    fn test_completeness() {
        assert_eq!(completeness_score("Action Game", "Play free online now"), 1.0);
        assert!((completeness_score("Jungle", "Nice one") - 0.5).abs() < 1e-9);
    }
}
