//! Attributes of the rendered list item.
use crate::content::ChildShape;
use crate::context::MenuContext;
use crate::item::{ItemProps, ItemState};

pub const DEFAULT_ROLE: &str = "menuitem";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemAttrs {
    pub role: String,
    /// `-1` keeps the item out of the tab order; the menu moves focus itself.
    pub tabindex: Option<i32>,
    pub data_menu_id: String,
    pub aria_disabled: bool,
    /// Only set for `role="option"`.
    pub aria_selected: Option<bool>,
    /// Native title, only for literal string titles.
    pub title: Option<String>,
    /// `{prefix}-item-only-child` when a single node is visible.
    pub only_child_class: Option<String>,
}

impl ItemAttrs {
    #[must_use]
    pub fn build(
        props: &ItemProps,
        state: &ItemState,
        ctx: &MenuContext,
        has_icon: bool,
        shape: &ChildShape,
    ) -> Self {
        let role = props
            .role
            .clone()
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| DEFAULT_ROLE.to_string());
        let aria_selected = (role == "option").then_some(state.selected);
        let nodes = shape.node_count() + usize::from(has_icon);
        Self {
            tabindex: if props.disabled { None } else { Some(-1) },
            data_menu_id: props.key.to_string(),
            aria_disabled: props.disabled,
            aria_selected,
            title: props.title.as_text().map(str::to_string),
            only_child_class: (nodes == 1).then(|| ctx.class("item-only-child")),
            role,
        }
    }
}
