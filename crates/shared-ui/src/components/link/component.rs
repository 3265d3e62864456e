use dioxus::prelude::*;

/// Properties for [`Link`]. All three are required and rendered as given.
#[derive(Props, Clone, PartialEq, Debug)]
pub struct LinkProps {
    /// DOM `id` of the anchor. Uniqueness is up to the caller.
    #[props(into)]
    pub identifier: String,
    /// Link target, written to `href` without validation.
    #[props(into)]
    pub destination: String,
    #[props(into)]
    pub label: String,
}

/// A plain hyperlink.
///
/// The label is padded with exactly one space on each side, so `"Get Started"`
/// renders as `" Get Started "`. Existing snapshots depend on that padding.
#[component]
pub fn Link(props: LinkProps) -> Element {
    let LinkProps {
        identifier,
        destination,
        label,
    } = props;

    rsx! {
        a { id: "{identifier}", href: "{destination}", " {label} " }
    }
}
