//! Server-side rendering helpers.
//!
//! Each call builds a fresh `VirtualDom`, so renders never share state.

use dioxus::prelude::*;
use shared_types::{MarkupError, MarkupNode};

/// Render a component with the given props to markup text.
pub fn render_component<P: Clone + 'static>(component: fn(P) -> Element, props: P) -> String {
    let mut dom = VirtualDom::new_with_props(component, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render a prop-less root component to markup text.
pub fn render_root(component: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(component);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render a component and read the output back into a [`MarkupNode`].
pub fn render_to_node<P: Clone + 'static>(
    component: fn(P) -> Element,
    props: P,
) -> Result<MarkupNode, MarkupError> {
    MarkupNode::parse(&render_component(component, props))
}

/// Render a prop-less root component and read the output back into a [`MarkupNode`].
pub fn render_root_to_node(component: fn() -> Element) -> Result<MarkupNode, MarkupError> {
    MarkupNode::parse(&render_root(component))
}
