//! Statistic extractors over raw Steam Community HTML.
//!
//! Every extractor is a pure function `&str -> value` that never fails. A field
//! is read by trying an ordered list of matchers, each yielding `Option<u64>`;
//! the first present value that passes the field's guard wins, and an exhausted
//! list resolves to the field's default (0, or `"Unknown"` for the nickname).
//!
//! The patterns target markup we do not control and that changes without
//! notice. They are a best-effort heuristic, not a parse: keep them ordered from
//! most specific to loosest, and keep guards tight enough to reject unrelated
//! numbers picked up by the looser ones.

pub mod games;
pub mod number;
pub mod profile;

use lazy_regex::Regex;

pub use games::{extract_games, extract_perfect_games};
pub use number::parse_count;
pub use profile::{
    extract_achievements, extract_awards, extract_badges, extract_level, extract_nickname,
};

/// One way of locating a count in a page.
pub(crate) type Matcher = fn(&str) -> Option<u64>;

/// Try `matchers` in order; the first value accepted by `guard` wins, else 0.
pub(crate) fn first_count(html: &str, matchers: &[Matcher], guard: impl Fn(u64) -> bool) -> u64 {
    matchers
        .iter()
        .filter_map(|m| m(html))
        .find(|&n| guard(n))
        .unwrap_or(0)
}

/// Count from capture group 1 of the first match of `re`.
pub(crate) fn capture_count(re: &Regex, html: &str) -> Option<u64> {
    re.captures(html)
        .and_then(|c| c.get(1))
        .map(|m| parse_count(m.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_count_skips_rejected_values() {
        let matchers: &[Matcher] = &[|_| None, |_| Some(70_000), |_| Some(12), |_| Some(5)];
        assert_eq!(first_count("", matchers, |n| n > 0 && n < 50_000), 12);
    }

    #[test]
    fn first_count_defaults_to_zero() {
        let matchers: &[Matcher] = &[|_| None, |_| Some(0)];
        assert_eq!(first_count("", matchers, |n| n > 0), 0);
        assert_eq!(first_count("", &[], |_| true), 0);
    }
}
