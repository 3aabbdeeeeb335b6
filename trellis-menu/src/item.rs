//! Props and derived state of a single menu item.
use serde::{Deserialize, Serialize};

use crate::context::MenuContext;
use crate::key::MenuKey;

/// Title prop of an item: unset, explicitly switched off, or a literal string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ItemTitle {
    #[default]
    Unset,
    Hidden,
    Text(String),
}

impl ItemTitle {
    /// The literal string, when one was given.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Unset | Self::Hidden => None,
        }
    }
}

impl From<&str> for ItemTitle {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ItemTitle {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// `false` switches the title off; `true` carries no text and behaves as unset.
impl From<bool> for ItemTitle {
    fn from(value: bool) -> Self {
        if value { Self::Unset } else { Self::Hidden }
    }
}

/// Framework-independent part of a menu item's props.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ItemProps {
    pub key: MenuKey,
    pub role: Option<String>,
    pub disabled: bool,
    pub danger: bool,
    pub title: ItemTitle,
}

impl ItemProps {
    #[must_use]
    pub fn new(key: impl Into<MenuKey>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }
}

/// State derived from props and the menu snapshot. Never stored, only recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemState {
    pub merged_disabled: bool,
    pub is_active: bool,
    /// Selection is tracked elsewhere; an item never marks itself selected.
    pub selected: bool,
}

impl ItemState {
    #[must_use]
    pub fn derive(props: &ItemProps, ctx: &MenuContext) -> Self {
        Self {
            merged_disabled: ctx.disabled || props.disabled,
            is_active: ctx.is_active(&props.key),
            selected: false,
        }
    }
}

/// Class set of the list item, in render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemClasses(Vec<String>);

impl ItemClasses {
    #[must_use]
    pub fn build(props: &ItemProps, state: &ItemState, ctx: &MenuContext) -> Self {
        let item_cls = ctx.class("item");
        let mut classes = vec![item_cls.clone()];
        let flags = [
            ("danger", props.danger),
            ("active", state.is_active),
            ("selected", state.selected),
            ("disabled", state.merged_disabled),
        ];
        for (suffix, on) in flags {
            if on {
                classes.push(format!("{item_cls}-{suffix}"));
            }
        }
        Self(classes)
    }

    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}
