//! Small error graphic served with HTTP 500.
//!
//! Image embeds (README badges, `<img>` tags) show nothing useful for a plain
//! error page, so failures are rendered as an SVG too.

use std::fmt::Write;

use super::escape_xml;

/// Messages longer than this (in characters) are cut before embedding.
pub const MAX_ERROR_CHARS: usize = 300;

const WIDTH: usize = 800;
const LINE_CHARS: usize = 90;
const LINE_HEIGHT: usize = 20;

/// Render `message` into the error card.
pub fn render_error(message: &str) -> String {
    let chars: Vec<char> = message.chars().take(MAX_ERROR_CHARS).collect();
    // SVG text does not wrap; split by hand and escape per line so no entity is cut.
    let lines: Vec<String> = chars
        .chunks(LINE_CHARS)
        .map(|c| escape_xml(&c.iter().collect::<String>()))
        .collect();
    let height = 72 + lines.len().max(1) * LINE_HEIGHT;

    let mut out = String::with_capacity(1024 + MAX_ERROR_CHARS * 2);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{height}" viewBox="0 0 {WIDTH} {height}" role="img" aria-label="Steam status unavailable">"#
    );
    let _ = writeln!(
        out,
        r##"  <rect x="1" y="1" width="{}" height="{}" rx="14" fill="#1b1f27" stroke="#e5484d" stroke-width="2"/>"##,
        WIDTH - 2,
        height - 2
    );
    let _ = writeln!(
        out,
        r##"  <text x="28" y="44" font-family="Segoe UI, Helvetica, Arial, sans-serif" font-size="22" font-weight="700" fill="#e5484d">Steam status unavailable</text>"##
    );
    let _ = writeln!(
        out,
        r##"  <text x="28" y="76" font-family="Consolas, Menlo, monospace" font-size="14" fill="#c9d1d9">"##
    );
    for (i, line) in lines.iter().enumerate() {
        let dy = if i == 0 { 0 } else { LINE_HEIGHT };
        let _ = writeln!(out, r#"    <tspan x="28" dy="{dy}">{line}</tspan>"#);
    }
    out.push_str("  </text>\n</svg>\n");
    out
}
