//! Menu keys and key paths.
use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Key identifying a menu entry among its siblings; rendered as `data-menu-id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct MenuKey(String);

impl MenuKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MenuKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MenuKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for MenuKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for MenuKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for MenuKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Ordered keys from the menu root down to an entry. Menus rarely nest deeply,
/// so the first few keys stay inline.
pub type KeyPath = SmallVec<[MenuKey; 4]>;

/// Path of `parent` extended by `key`.
#[must_use]
pub fn child_path(parent: &[MenuKey], key: &MenuKey) -> KeyPath {
    let mut path: KeyPath = parent.iter().cloned().collect();
    path.push(key.clone());
    path
}

/// Render a path as `a > b > c` for log output.
#[must_use]
pub fn display_path(path: &[MenuKey]) -> String {
    path.iter()
        .map(MenuKey::as_str)
        .collect::<Vec<_>>()
        .join(" > ")
}
