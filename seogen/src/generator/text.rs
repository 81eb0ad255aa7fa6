//! Text helpers for the content generator
//!
//! All lengths are counted in `char`s.

/// Appended to truncated text
pub const ELLIPSIS: &str = "...";

/// Truncate `text` to at most `max_len` characters
///
/// The cut lands on the last whitespace boundary inside the final 20% of the
/// budget (the budget being `max_len` minus the ellipsis). Without such a
/// boundary the text is cut hard at the budget. The ellipsis is always
/// appended to truncated text, and the result never exceeds `max_len`.
pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_len {
        return text.to_string();
    }

    let ellipsis_len = ELLIPSIS.chars().count();
    if max_len <= ellipsis_len {
        return text.chars().take(max_len).collect();
    }

    let budget = max_len - ellipsis_len;
    // One char past the budget so a space right after the last fitting word counts
    let window: Vec<char> = text.chars().take(budget + 1).collect();
    let min_boundary = (budget * 4).div_ceil(5);

    let boundary = window
        .iter()
        .rposition(|c| c.is_whitespace())
        .filter(|&idx| idx >= min_boundary);

    let kept: String = match boundary {
        Some(idx) => window[..idx].iter().collect(),
        None => window[..budget].iter().collect(),
    };

    format!("{}{}", kept.trim_end(), ELLIPSIS)
}

/// URL slug from a title: lowercase ASCII alphanumerics joined by `-`
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_dash = true;
        }
    }
    slug
}

/// Title from a slug: `jungle-run` becomes `Jungle Run`
pub fn title_from_slug(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Category display name: first letter upper-cased, dashes become spaces
pub fn category_display_name(category: &str) -> String {
    capitalize(category).replace('-', " ")
}

/// Tag display name: every dash-separated word capitalized
pub fn tag_display_name(tag: &str) -> String {
    tag.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Short feature phrase built from devices, tags and categories
///
/// At most three features, joined by `", "`.
pub fn feature_phrase(devices: &[String], tags: &[String], all_categories: &[String]) -> String {
    let mut features = Vec::with_capacity(4);

    if devices.iter().any(|d| d.eq_ignore_ascii_case("mobile")) {
        features.push("mobile-friendly controls".to_string());
    }
    if let Some(tag) = tags.iter().map(|t| t.trim()).find(|t| !t.is_empty()) {
        features.push(format!("{} gameplay", tag));
    }
    if all_categories.len() > 1 {
        features.push("multi-genre elements".to_string());
    }
    features.push("instant browser play".to_string());

    features.truncate(3);
    features.join(", ")
}

/// Split a rendered keyword template into keywords
pub fn split_keywords(rendered: &str, max_keywords: usize) -> Vec<String> {
    rendered
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .take(max_keywords)
        .map(str::to_string)
        .collect()
}
