use crate::common::*;

// ── Stored reference snapshot ───────────────────────────────────────

#[test]
fn link_renders_correctly_with_given_props() {
    let node = render_link("myNewLink", GETTING_STARTED_URL, "Get Started");
    assert_json_snapshot("link_renders_correctly", &node);
}

#[test]
fn link_markup_matches_stored_html() {
    let node = render_link("myNewLink", GETTING_STARTED_URL, "Get Started");
    assert_html_snapshot("link_renders_correctly", &node);
}

#[test]
fn changed_label_does_not_match_snapshot() {
    let stored: shared_types::MarkupNode = serde_json::from_str(include_str!(
        "../snapshots/link_renders_correctly.json"
    ))
    .unwrap();
    let node = render_link("myNewLink", GETTING_STARTED_URL, "Get started");
    assert_ne!(node, stored);
}
