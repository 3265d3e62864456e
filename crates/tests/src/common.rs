use pretty_assertions::assert_eq;
use shared_types::MarkupNode;
use shared_ui::render::render_to_node;
use shared_ui::{Link, LinkProps};
use std::path::{Path, PathBuf};

/// The destination used by the stored link snapshot.
pub const GETTING_STARTED_URL: &str = "https://reactjs.org/docs/getting-started.html";

/// Build link props from string slices.
pub fn link_props(identifier: &str, destination: &str, label: &str) -> LinkProps {
    LinkProps {
        identifier: identifier.to_string(),
        destination: destination.to_string(),
        label: label.to_string(),
    }
}

/// Render a `Link` and parse the SSR output back into a tree.
pub fn render_link(identifier: &str, destination: &str, label: &str) -> MarkupNode {
    render_to_node(Link, link_props(identifier, destination, label))
        .expect("Link output should parse")
}

fn snapshot_path(name: &str, ext: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("snapshots")
        .join(format!("{name}.{ext}"))
}

/// True when `UPDATE_SNAPSHOTS=1` asks for snapshots to be rewritten.
fn updating() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").is_ok_and(|v| v == "1")
}

fn write_snapshot(path: &Path, contents: &str) {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).expect("Failed to create snapshot dir");
    }
    std::fs::write(path, contents).expect("Failed to write snapshot");
}

/// Compare `node` against `snapshots/{name}.json`.
///
/// A missing or differing snapshot fails the test unless `UPDATE_SNAPSHOTS=1`
/// is set, in which case the file is (re)written from `node`.
pub fn assert_json_snapshot(name: &str, node: &MarkupNode) {
    let path = snapshot_path(name, "json");
    let actual = serde_json::to_string_pretty(node).expect("Failed to serialize node") + "\n";

    match std::fs::read_to_string(&path) {
        Ok(stored) if !updating() => {
            let expected: MarkupNode =
                serde_json::from_str(&stored).expect("Stored snapshot is not valid JSON");
            assert_eq!(
                node,
                &expected,
                "snapshot {name} differs; rerun with UPDATE_SNAPSHOTS=1 to accept"
            );
        }
        Err(_) if !updating() => panic!(
            "missing snapshot {}; rerun with UPDATE_SNAPSHOTS=1 to create it",
            path.display()
        ),
        _ => write_snapshot(&path, &actual),
    }
}

/// Compare `node` against the markup in `snapshots/{name}.html`.
///
/// The stored markup is parsed before comparing, so attribute order and
/// character-reference style in the file do not matter.
pub fn assert_html_snapshot(name: &str, node: &MarkupNode) {
    let path = snapshot_path(name, "html");

    match std::fs::read_to_string(&path) {
        Ok(stored) if !updating() => {
            let expected = MarkupNode::parse(&stored).expect("Stored snapshot is not valid markup");
            assert_eq!(
                node,
                &expected,
                "snapshot {name} differs; rerun with UPDATE_SNAPSHOTS=1 to accept"
            );
        }
        Err(_) if !updating() => panic!(
            "missing snapshot {}; rerun with UPDATE_SNAPSHOTS=1 to create it",
            path.display()
        ),
        _ => write_snapshot(&path, &(node.to_html() + "\n")),
    }
}
