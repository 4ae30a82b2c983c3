//! Extractor vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::Value;

use steamstatus_core::extract;


fn run(field: &str, html: &str) -> Value {
    match field {
        "nickname" => Value::from(extract::extract_nickname(html)),
        "level" => Value::from(extract::extract_level(html)),
        "games" => Value::from(extract::extract_games(html)),
        "perfect_games" => Value::from(extract::extract_perfect_games(html)),
        "achievements" => Value::from(extract::extract_achievements(html)),
        "badges" => Value::from(extract::extract_badges(html)),
        "awards" => Value::from(extract::extract_awards(html)),
        other => panic!("unknown field in vector: {other}"),
    }
}

#[test]
fn extract_vectors() {
    let files = [
        "games_label_grouped.json",
        "games_out_of_range.json",
        "games_page_fixture.json",
        "perfect_zero.json",
        "perfect_tab_scoped.json",
        "games_total_text.json",
        "games_total_out_of_range.json",
        "badges_plus.json",
        "badges_label_plus.json",
        "level_fallback.json",
        "nickname_missing.json",
        "achievements_space_grouped.json",
        "awards_period_grouped.json",
    ];

    for f in files {
        let v = vector_loader::load(f);
        let html = v.html.load();
        let got = run(&v.field, &html);
        assert_eq!(got, v.expect, "vector={}", v.description);
    }
}

#[test]
fn every_extractor_survives_garbage() {
    let inputs = [
        "",
        "<",
        "</span></span></span>",
        "Games (",
        "Perfect Games (abc)",
        "Badges</span>&nbsp;<span class=\"profile_count_link_total\">+</span>",
        "\u{0}\u{fffd}\u{1f600}",
    ];

    for html in inputs {
        assert_eq!(extract::extract_games(html), 0, "input={html:?}");
        assert_eq!(extract::extract_perfect_games(html), 0, "input={html:?}");
        assert_eq!(extract::extract_level(html), 0, "input={html:?}");
        assert_eq!(extract::extract_achievements(html), 0, "input={html:?}");
        assert_eq!(extract::extract_badges(html), 0, "input={html:?}");
        assert_eq!(extract::extract_awards(html), 0, "input={html:?}");
        assert_eq!(extract::extract_nickname(html), "Unknown", "input={html:?}");
    }
}
