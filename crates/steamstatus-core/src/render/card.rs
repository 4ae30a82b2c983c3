//! Stats card: fixed 1200x520 layout.
//!
//! ```text
//! +--------------------------------------------------------------+
//! | nickname                                       LEVEL ( 57 )  |
//! | [ Games ] [ Perfect Games ] [ Achievements ] [ Badges ]       |
//! | [ Awards                                  * * * * *       ]  |
//! | source                                   generated at        |
//! +--------------------------------------------------------------+
//! ```

use std::fmt::Write;

use chrono::{DateTime, Utc};

use super::{escape_xml, group_digits};
use crate::record::StatsRecord;

pub const CANVAS_WIDTH: u32 = 1200;
pub const CANVAS_HEIGHT: u32 = 520;

const MARGIN: u32 = 60;
const GAP: u32 = 24;
const STAT_Y: u32 = 150;
const STAT_HEIGHT: u32 = 150;
const AWARDS_Y: u32 = 324;
const AWARDS_HEIGHT: u32 = 120;
const FOOTER_Y: u32 = 490;
const AWARD_MARKERS: u32 = 5;

const FONT: &str = "Segoe UI, Helvetica, Arial, sans-serif";

/// Five-point star centred on the origin, used by the awards card.
const STAR_PATH: &str = "M0,-18 L4.4,-6.1 L17.1,-5.6 L7.1,2.3 L10.6,14.6 L0,7.5 L-10.6,14.6 L-7.1,2.3 L-17.1,-5.6 L-4.4,-6.1 Z";

/// Renders [`StatsRecord`]s. `source` is the identity printed in the footer
/// (e.g. `steamcommunity.com/id/gaben`).
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    source: String,
}

impl SvgRenderer {
    pub fn new(source: impl Into<String>) -> Self {
        Self { source: source.into() }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Render one record. Same record in, same bytes out.
    pub fn render(&self, record: &StatsRecord) -> String {
        let mut out = String::with_capacity(8 * 1024);

        open(&mut out);
        header(&mut out, &record.nickname, record.level);

        let stats = [
            ("Games", record.games),
            ("Perfect Games", record.perfect_games),
            ("Achievements", record.achievements),
            ("Badges", record.badges),
        ];
        let width = stat_card_width(stats.len() as u32);
        for (i, (label, value)) in stats.iter().enumerate() {
            let x = MARGIN + i as u32 * (width + GAP);
            stat_card(&mut out, x, width, label, *value);
        }

        awards_card(&mut out, record.awards);
        footer(&mut out, &self.source, record.generated_at);

        out.push_str("</svg>\n");
        out
    }
}

fn stat_card_width(cards: u32) -> u32 {
    (CANVAS_WIDTH - 2 * MARGIN - (cards - 1) * GAP) / cards
}

fn open(out: &mut String) {
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{CANVAS_WIDTH}" height="{CANVAS_HEIGHT}" viewBox="0 0 {CANVAS_WIDTH} {CANVAS_HEIGHT}" role="img" aria-label="Steam profile statistics">"#
    );
    out.push_str(
        r##"  <defs>
    <linearGradient id="bg" x1="0" y1="0" x2="1" y2="1">
      <stop offset="0%" stop-color="#171a21"/>
      <stop offset="100%" stop-color="#1b2838"/>
    </linearGradient>
    <linearGradient id="accent" x1="0" y1="0" x2="1" y2="0">
      <stop offset="0%" stop-color="#66c0f4"/>
      <stop offset="100%" stop-color="#1a9fff"/>
    </linearGradient>
"##,
    );
    let _ = writeln!(out, r#"    <path id="marker" d="{STAR_PATH}"/>"#);
    out.push_str("  </defs>\n");
    let _ = writeln!(
        out,
        r##"  <rect width="{CANVAS_WIDTH}" height="{CANVAS_HEIGHT}" rx="24" fill="url(#bg)"/>"##
    );
}

fn header(out: &mut String, nickname: &str, level: u64) {
    let name = escape_xml(nickname);
    let level = group_digits(level);
    let level_x = CANVAS_WIDTH - MARGIN - 36;

    let _ = writeln!(
        out,
        r##"  <text x="{MARGIN}" y="92" font-family="{FONT}" font-size="40" font-weight="700" fill="#ffffff">{name}</text>"##
    );
    let _ = writeln!(
        out,
        r##"  <text x="{MARGIN}" y="122" font-family="{FONT}" font-size="16" fill="#8f98a0">Steam Community profile</text>"##
    );
    let _ = writeln!(
        out,
        r##"  <text x="{}" y="92" text-anchor="end" font-family="{FONT}" font-size="16" font-weight="600" letter-spacing="2" fill="#8f98a0">LEVEL</text>"##,
        level_x - 52
    );
    let _ = writeln!(
        out,
        r##"  <circle cx="{level_x}" cy="86" r="36" fill="none" stroke="url(#accent)" stroke-width="4"/>"##
    );
    let _ = writeln!(
        out,
        r##"  <text x="{level_x}" y="96" text-anchor="middle" font-family="{FONT}" font-size="28" font-weight="700" fill="#ffffff">{level}</text>"##
    );
}

fn stat_card(out: &mut String, x: u32, width: u32, label: &str, value: u64) {
    let cx = x + width / 2;
    let _ = writeln!(
        out,
        r##"  <rect x="{x}" y="{STAT_Y}" width="{width}" height="{STAT_HEIGHT}" rx="16" fill="#2a475e" fill-opacity="0.55"/>"##
    );
    let _ = writeln!(
        out,
        r##"  <rect x="{x}" y="{STAT_Y}" width="{width}" height="4" rx="2" fill="url(#accent)"/>"##
    );
    let _ = writeln!(
        out,
        r##"  <text x="{cx}" y="{}" text-anchor="middle" font-family="{FONT}" font-size="48" font-weight="700" fill="#ffffff">{}</text>"##,
        STAT_Y + 84,
        group_digits(value)
    );
    let _ = writeln!(
        out,
        r##"  <text x="{cx}" y="{}" text-anchor="middle" font-family="{FONT}" font-size="18" fill="#c7d5e0">{label}</text>"##,
        STAT_Y + 120
    );
}

fn awards_card(out: &mut String, awards: u64) {
    let width = CANVAS_WIDTH - 2 * MARGIN;
    let _ = writeln!(
        out,
        r##"  <rect x="{MARGIN}" y="{AWARDS_Y}" width="{width}" height="{AWARDS_HEIGHT}" rx="16" fill="#2a475e" fill-opacity="0.55"/>"##
    );
    let _ = writeln!(
        out,
        r##"  <text x="{}" y="{}" font-family="{FONT}" font-size="48" font-weight="700" fill="#ffffff">{}</text>"##,
        MARGIN + 32,
        AWARDS_Y + 70,
        group_digits(awards)
    );
    let _ = writeln!(
        out,
        r##"  <text x="{}" y="{}" font-family="{FONT}" font-size="18" fill="#c7d5e0">Awards</text>"##,
        MARGIN + 32,
        AWARDS_Y + 100
    );

    let first = CANVAS_WIDTH - MARGIN - 48 - (AWARD_MARKERS - 1) * 56;
    for i in 0..AWARD_MARKERS {
        let _ = writeln!(
            out,
            r##"  <use href="#marker" x="{}" y="{}" fill="#f5c518"/>"##,
            first + i * 56,
            AWARDS_Y + AWARDS_HEIGHT / 2
        );
    }
}

fn footer(out: &mut String, source: &str, generated_at: DateTime<Utc>) {
    let _ = writeln!(
        out,
        r##"  <text x="{MARGIN}" y="{FOOTER_Y}" font-family="{FONT}" font-size="14" fill="#8f98a0">Source: {}</text>"##,
        escape_xml(source)
    );
    let _ = writeln!(
        out,
        r##"  <text x="{}" y="{FOOTER_Y}" text-anchor="end" font-family="{FONT}" font-size="14" fill="#8f98a0">Generated {}</text>"##,
        CANVAS_WIDTH - MARGIN,
        generated_at.format("%Y-%m-%d %H:%M UTC")
    );
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn record() -> StatsRecord {
        StatsRecord {
            nickname: "gaben".into(),
            level: 57,
            games: 1234,
            perfect_games: 132,
            achievements: 12_345,
            badges: 300,
            awards: 7,
            generated_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
        }
    }

    #[test]
    fn card_width_fills_the_row() {
        let w = stat_card_width(4);
        assert_eq!(w, 252);
        assert_eq!(MARGIN + 4 * w + 3 * GAP, CANVAS_WIDTH - MARGIN);
    }

    #[test]
    fn fixed_canvas_and_grouped_numbers() {
        let svg = SvgRenderer::new("steamcommunity.com/id/gaben").render(&record());
        assert!(svg.contains(r#"width="1200" height="520""#));
        assert!(svg.contains(">1,234<"));
        assert!(svg.contains(">12,345<"));
        assert!(svg.contains(">Perfect Games<"));
        assert!(svg.contains("Source: steamcommunity.com/id/gaben"));
        assert!(svg.contains("Generated 2024-05-01 12:30 UTC"));
        assert_eq!(svg.matches(r##"href="#marker""##).count(), 5);
    }

    #[test]
    fn same_record_same_bytes() {
        let r = SvgRenderer::new("steamcommunity.com/id/gaben");
        assert_eq!(r.source(), "steamcommunity.com/id/gaben");
        assert_eq!(r.render(&record()), r.render(&record()));
    }

    #[test]
    fn hostile_nickname_is_escaped() {
        let mut rec = record();
        rec.nickname = r#"<script>alert("x" & 'y')</script>"#.into();
        let svg = SvgRenderer::new("src").render(&rec);

        assert!(!svg.contains("<script"));
        assert!(!svg.contains('\''));
        assert!(svg.contains(
            "&lt;script&gt;alert(&quot;x&quot; &amp; &#39;y&#39;)&lt;/script&gt;"
        ));
    }
}
