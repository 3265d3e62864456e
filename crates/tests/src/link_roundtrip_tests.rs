use pretty_assertions::assert_eq;
use shared_types::MarkupNode;
use shared_ui::render::render_component;
use shared_ui::Link;

use crate::common::*;

// ── Serialize / re-parse ────────────────────────────────────────────

#[test]
fn markup_text_roundtrips_through_parser() {
    for (identifier, destination, label) in [
        ("myNewLink", GETTING_STARTED_URL, "Get Started"),
        ("", "", ""),
        ("q", "https://example.com/?a=1&b=\"2\"", "<b>bold</b> & more"),
    ] {
        let node = render_link(identifier, destination, label);
        let reparsed = MarkupNode::parse(&node.to_html()).unwrap();
        assert_eq!(reparsed, node);
        assert_eq!(reparsed.attr("id"), Some(identifier));
        assert_eq!(reparsed.attr("href"), Some(destination));
    }
}

#[test]
fn ssr_output_and_serialized_node_agree() {
    let props = link_props("myLink", "https://example.com", "Click");
    let ssr = render_component(Link, props);
    let node = MarkupNode::parse(&ssr).unwrap();
    assert_eq!(MarkupNode::parse(&node.to_html()).unwrap(), node);
}

#[test]
fn json_roundtrip_preserves_node() {
    let node = render_link("myNewLink", GETTING_STARTED_URL, "Get Started");
    let json = serde_json::to_string(&node).unwrap();
    let back: MarkupNode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, node);
}
