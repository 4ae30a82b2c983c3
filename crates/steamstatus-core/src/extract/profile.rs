//! Fields read from the profile page (`/id/{vanity}/`).

use lazy_regex::{regex, Lazy, Regex};

use super::{capture_count, first_count, Matcher};
use crate::record::UNKNOWN_NICKNAME;

static NICKNAME: &Lazy<Regex> = regex!(r#"<span class="actual_persona_name">([^<]*)</span>"#);

static LEVEL_NUM: &Lazy<Regex> =
    regex!(r#"class="friendPlayerLevelNum"[^>]*>\s*(\d{1,3}(?:[,.\s]\d{3})+|\d+)\s*<"#);

static LEVEL_CONTAINER: &Lazy<Regex> =
    regex!(r#"class="persona_level"[\s\S]{0,200}?>\s*(\d{1,3}(?:[,.\s]\d{3})+|\d+)\s*<"#);

static BADGES_COUNT_LINK: &Lazy<Regex> = regex!(
    r#"Badges</span>(?:\s|&nbsp;)*<span class="profile_count_link_total">\s*((?:\d{1,3}(?:[,.\s]\d{3})+|\d+)\+?)"#
);

/// `Badges (1,500+)` label.
static BADGES_PAREN: &Lazy<Regex> =
    regex!(r"Badges\s*\(\s*((?:\d{1,3}(?:[,.\s]\d{3})+|\d+)\+?)\s*\)");

/// `Badges` label element, the count in the next element within a short window.
static BADGES_LABEL: &Lazy<Regex> =
    regex!(r#">\s*Badges\s*<[\s\S]{0,160}?>\s*((?:\d{1,3}(?:[,.\s]\d{3})+|\d+)\+?)\s*<"#);

static AWARDS_COUNT_LINK: &Lazy<Regex> = regex!(
    r#"Awards</span>(?:\s|&nbsp;)*<span class="profile_count_link_total">\s*(\d{1,3}(?:[,.\s]\d{3})+|\d+)"#
);

static AWARDS_RECEIVED: &Lazy<Regex> =
    regex!(r"Awards Received(?:\s|&nbsp;|<[^>]*>|:)*(\d{1,3}(?:[,.\s]\d{3})+|\d+)");

/// Achievement showcase stat: `<div class="value">1,234</div><div class="label">Achievements</div>`.
static ACHIEVEMENTS_SHOWCASE: &Lazy<Regex> = regex!(
    r#"class="value">\s*(\d{1,3}(?:[,.\s]\d{3})+|\d+)\s*</div>\s*<div class="label">\s*Achievements"#
);

static ACHIEVEMENTS_LABEL: &Lazy<Regex> =
    regex!(r"Achievements(?:\s|&nbsp;|<[^>]*>|[(:])*(\d{1,3}(?:[,.\s]\d{3})+|\d+)");

const LEVEL: &[Matcher] = &[
    |html| capture_count(LEVEL_NUM, html),
    |html| capture_count(LEVEL_CONTAINER, html),
];

const BADGES: &[Matcher] = &[
    |html| capture_count(BADGES_COUNT_LINK, html),
    |html| capture_count(BADGES_PAREN, html),
    |html| capture_count(BADGES_LABEL, html),
];

const AWARDS: &[Matcher] = &[
    |html| capture_count(AWARDS_COUNT_LINK, html),
    |html| capture_count(AWARDS_RECEIVED, html),
];

const ACHIEVEMENTS: &[Matcher] = &[
    |html| capture_count(ACHIEVEMENTS_SHOWCASE, html),
    |html| capture_count(ACHIEVEMENTS_LABEL, html),
];

/// Persona name, trimmed and entity-decoded; `"Unknown"` when absent or blank.
pub fn extract_nickname(html: &str) -> String {
    NICKNAME
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| decode_entities(m.as_str().trim()))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| UNKNOWN_NICKNAME.to_string())
}

pub fn extract_level(html: &str) -> u64 {
    first_count(html, LEVEL, |_| true)
}

/// Badge count; a `300+` style cap indicator counts as the number itself.
pub fn extract_badges(html: &str) -> u64 {
    first_count(html, BADGES, |_| true)
}

pub fn extract_awards(html: &str) -> u64 {
    first_count(html, AWARDS, |_| true)
}

pub fn extract_achievements(html: &str) -> u64 {
    first_count(html, ACHIEVEMENTS, |_| true)
}

/// Undo the escaping Steam applies to persona names. `&amp;` goes last so
/// `&amp;lt;` stays the literal text `&lt;`.
fn decode_entities(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#039;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
