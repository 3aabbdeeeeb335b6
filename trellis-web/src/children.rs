//! Inspect Yew children for the layout decisions of a menu item.
use trellis_menu::ChildShape;
use yew::prelude::*;
use yew::virtual_dom::VNode;

/// Flatten fragments and drop empty text nodes.
fn flatten(node: &Html, out: &mut Vec<Html>) {
    match node {
        VNode::VList(list) => {
            for child in list.iter() {
                flatten(child, out);
            }
        }
        VNode::VText(text) if text.text.is_empty() => {}
        other => out.push(other.clone()),
    }
}

#[must_use]
pub fn flatten_children(children: &Children) -> Vec<Html> {
    let mut out = Vec::with_capacity(children.len());
    for child in children.iter() {
        flatten(&child, &mut out);
    }
    out
}

/// Classify children into the shapes the item layout distinguishes.
#[must_use]
pub fn child_shape(children: &Children) -> ChildShape {
    let nodes = flatten_children(children);
    match nodes.as_slice() {
        [] => ChildShape::Empty,
        [VNode::VText(text)] => ChildShape::Text(text.text.to_string()),
        [VNode::VTag(tag)] if tag.tag() == "span" => ChildShape::Span,
        many => ChildShape::Nodes(many.len()),
    }
}
