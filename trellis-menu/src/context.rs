//! Snapshot of the state a menu shares with its items.
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_PREFIX_CLS;
use crate::key::{KeyPath, MenuKey};

/// Read-only view of the owning menu, taken at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuContext {
    pub prefix_cls: String,
    /// Keys of the currently hovered trail, root first.
    pub active_keys: KeyPath,
    pub disabled: bool,
    pub rtl: bool,
    pub inline_collapsed: bool,
    pub sider_collapsed: bool,
}

impl Default for MenuContext {
    fn default() -> Self {
        Self {
            prefix_cls: DEFAULT_PREFIX_CLS.to_string(),
            active_keys: KeyPath::new(),
            disabled: false,
            rtl: false,
            inline_collapsed: false,
            sider_collapsed: false,
        }
    }
}

impl MenuContext {
    #[must_use]
    pub fn with_prefix(prefix_cls: impl Into<String>) -> Self {
        Self {
            prefix_cls: prefix_cls.into(),
            ..Self::default()
        }
    }

    /// Whether `key` is part of the active trail.
    #[must_use]
    pub fn is_active(&self, key: &MenuKey) -> bool {
        self.active_keys.iter().any(|k| k == key)
    }

    /// Labels only show through tooltips while the menu is visually collapsed.
    #[must_use]
    pub const fn is_collapsed(&self) -> bool {
        self.sider_collapsed || self.inline_collapsed
    }

    /// `{prefix}-{suffix}`
    #[must_use]
    pub fn class(&self, suffix: &str) -> String {
        format!("{}-{suffix}", self.prefix_cls)
    }
}

/// Where an item sits in the menu tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemScope {
    /// Keys from the root down to the item's parent.
    pub parent_key_path: KeyPath,
    /// Direct child of the top-level menu.
    pub first_level: bool,
}

impl Default for ItemScope {
    fn default() -> Self {
        Self::root()
    }
}

impl ItemScope {
    #[must_use]
    pub fn root() -> Self {
        Self {
            parent_key_path: KeyPath::new(),
            first_level: true,
        }
    }

    /// Scope for the children of the entry `key` inside this scope.
    #[must_use]
    pub fn nested(&self, key: &MenuKey) -> Self {
        Self {
            parent_key_path: crate::key::child_path(&self.parent_key_path, key),
            first_level: false,
        }
    }
}

/// Receiver for requests to replace the whole active trail.
pub trait ActiveKeysSink {
    fn change_active_keys(&self, keys: KeyPath);
}

impl<F> ActiveKeysSink for F
where
    F: Fn(KeyPath),
{
    fn change_active_keys(&self, keys: KeyPath) {
        self(keys);
    }
}
