//! Extraction against captured page shapes.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use steamstatus_core::extract;

use vector_loader::fixture;

#[test]
fn profile_page() {
    let html = fixture("profile.html");
    assert_eq!(extract::extract_nickname(&html), "Fenrir & <Co>");
    assert_eq!(extract::extract_level(&html), 142);
    assert_eq!(extract::extract_badges(&html), 287);
    assert_eq!(extract::extract_awards(&html), 36);
    assert_eq!(extract::extract_achievements(&html), 8421);
}

#[test]
fn games_page() {
    let html = fixture("games.html");
    assert_eq!(extract::extract_games(&html), 1234);
    assert_eq!(extract::extract_perfect_games(&html), 58);
}

#[test]
fn missing_profile_page_degrades_to_defaults() {
    let html = fixture("profile_not_found.html");
    assert_eq!(extract::extract_nickname(&html), "Unknown");
    assert_eq!(extract::extract_level(&html), 0);
    assert_eq!(extract::extract_badges(&html), 0);
    assert_eq!(extract::extract_awards(&html), 0);
    assert_eq!(extract::extract_achievements(&html), 0);
    assert_eq!(extract::extract_games(&html), 0);
    assert_eq!(extract::extract_perfect_games(&html), 0);
}
