#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;

use steamstatus_gateway::config;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
profile:
  vanity: "fenrir"
fallbacks:
  gamez: 10 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
profile:
  vanity: "fenrir"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:3000");
    assert_eq!(cfg.profile.profile_url(), "https://steamcommunity.com/id/fenrir/");
    assert_eq!(
        cfg.profile.games_url(),
        "https://steamcommunity.com/id/fenrir/games/?tab=all"
    );
    assert_eq!(cfg.profile.source_label(), "steamcommunity.com/id/fenrir");
    assert_eq!(cfg.fallbacks.games, 274);
    assert_eq!(cfg.fallbacks.perfect_games, 132);
    assert_eq!(cfg.fetch.timeout_ms, 10000);
}

#[test]
fn rejects_bad_values() {
    let cases = [
        "version: 2\nprofile: { vanity: fenrir }\n",
        "version: 1\n",
        "version: 1\nprofile: { vanity: \"a/b\" }\n",
        "version: 1\nprofile: { vanity: fenrir, base_url: \"ftp://x\" }\n",
        "version: 1\nprofile: { vanity: fenrir }\nfetch: { timeout_ms: 10 }\n",
        "version: 1\nprofile: { vanity: fenrir }\nfallbacks: { games: 0 }\n",
        "version: 1\nprofile: { vanity: fenrir }\nserver: { listen: \"not-an-addr\" }\n",
    ];

    for yaml in cases {
        let err = config::load_from_str(yaml).expect_err(yaml);
        assert_eq!(err.code().as_str(), "BAD_CONFIG", "yaml={yaml}");
    }
}

#[test]
fn env_overrides_without_file() {
    let cfg = config::load(
        "does/not/exist.yaml",
        env(&[
            ("PORT", "8088"),
            ("STEAM_VANITY", "fenrir"),
            ("GAMES_FALLBACK", "300"),
            ("PERFECT_GAMES_FALLBACK", "0"),
        ]),
    )
    .expect("env alone is enough");

    assert_eq!(cfg.server.listen, "0.0.0.0:8088");
    assert_eq!(cfg.profile.vanity, "fenrir");
    assert_eq!(cfg.fallbacks.games, 300);
    assert_eq!(cfg.fallbacks.perfect_games, 0);
}

#[test]
fn missing_vanity_is_a_config_error() {
    let err = config::load("does/not/exist.yaml", env(&[])).expect_err("vanity required");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn bad_env_value_is_a_config_error() {
    let err = config::load(
        "does/not/exist.yaml",
        env(&[("STEAM_VANITY", "fenrir"), ("PORT", "eighty")]),
    )
    .expect_err("PORT must be numeric");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
    assert!(err.to_string().contains("PORT"));
}
