//! Counters read from the games listing page (`/id/{vanity}/games/?tab=all`).

use lazy_regex::{regex, Lazy, Regex};

use super::{capture_count, first_count, parse_count, Matcher};

/// `All Games (1,234)` tab label.
static ALL_GAMES_TAB: &Lazy<Regex> =
    regex!(r"All Games\s*\(\s*(\d{1,3}(?:[,.\s]\d{3})+|\d+)\s*\)");

/// `Games (1,234)` label; group 1 flags the `Perfect Games (..)` lookalike.
static GAMES_LABEL: &Lazy<Regex> =
    regex!(r"(Perfect\s+)?Games\s*\(\s*(\d{1,3}(?:[,.\s]\d{3})+|\d+)\s*\)");

/// Profile sidebar count link: `<span class="count_link_label">Games</span>&nbsp;<span class="profile_count_link_total">1,234</span>`.
static GAMES_COUNT_LINK: &Lazy<Regex> = regex!(
    r#"Games</span>(?:\s|&nbsp;)*<span class="profile_count_link_total">\s*(\d{1,3}(?:[,.\s]\d{3})+|\d+)"#
);

/// Free text `1,234 games owned`.
static GAMES_OWNED: &Lazy<Regex> =
    regex!(r"(?i)(\d{1,3}(?:[,.\s]\d{3})+|\d+)\s+games\s+owned");

/// Free text `Total games: 1,234`.
static GAMES_TOTAL: &Lazy<Regex> =
    regex!(r"(?i)total\s+games\s*:?\s*(\d{1,3}(?:[,.\s]\d{3})+|\d+)");

/// Perfect Games tab: the label sits inside an element whose class names a tab.
static PERFECT_TAB: &Lazy<Regex> = regex!(
    r#"class="[^"]*(?i:tab)[^"]*"[^>]*>\s*(?:<[^>]*>\s*)*Perfect Games\s*\(\s*(\d{1,3}(?:[,.\s]\d{3})+|\d+)\s*\)"#
);

/// Loose `Perfect Games` label followed closely by a number.
static PERFECT_LABEL: &Lazy<Regex> =
    regex!(r"Perfect Games(?:\s|&nbsp;|<[^>]*>|[(:])*(\d{1,3}(?:[,.\s]\d{3})+|\d+)");

const GAMES_MAX_EXCLUSIVE: u64 = 50_000;
const PERFECT_MAX: u64 = 10_000;

const GAMES: &[Matcher] = &[
    |html| capture_count(ALL_GAMES_TAB, html),
    |html| {
        GAMES_LABEL
            .captures_iter(html)
            .find(|c| c.get(1).is_none())
            .and_then(|c| c.get(2))
            .map(|m| parse_count(m.as_str()))
    },
    |html| capture_count(GAMES_COUNT_LINK, html),
    |html| capture_count(GAMES_OWNED, html),
    |html| capture_count(GAMES_TOTAL, html),
];

const PERFECT_GAMES: &[Matcher] = &[
    |html| capture_count(PERFECT_TAB, html),
    |html| capture_count(PERFECT_LABEL, html),
];

/// Total games owned. Only values strictly between 0 and 50000 are accepted;
/// anything else falls through to the next pattern, then to 0.
pub fn extract_games(html: &str) -> u64 {
    first_count(html, GAMES, |n| n > 0 && n < GAMES_MAX_EXCLUSIVE)
}

/// Games with every achievement unlocked, 0..=10000, else 0.
pub fn extract_perfect_games(html: &str) -> u64 {
    first_count(html, PERFECT_GAMES, |n| n <= PERFECT_MAX)
}
