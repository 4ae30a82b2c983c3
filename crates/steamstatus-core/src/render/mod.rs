//! SVG rendering (stats card + error card).
//!
//! Both renderers are pure string builders. Text that came from scraped pages or
//! configuration goes through [`escape_xml`] before it is embedded; numbers go
//! through [`group_digits`] and never need escaping.

pub mod card;
pub mod error_card;

pub use card::{SvgRenderer, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use error_card::{render_error, MAX_ERROR_CHARS};

/// Escape the five XML-reserved characters.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// en-US digit grouping: `1234567` -> `1,234,567`.
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
