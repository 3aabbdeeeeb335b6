//! Pointer enter/leave transitions of the active trail.
use crate::context::{ActiveKeysSink, ItemScope};
use crate::key::{KeyPath, MenuKey, child_path, display_path};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverEvent {
    Enter,
    Leave,
}

/// What a hover event on an item should do to the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverOutcome {
    /// Disabled item: no request, no notification.
    Ignored,
    /// Replace the whole active trail with this path and notify the owner.
    Change(KeyPath),
}

/// Entering activates the item together with its ancestors; leaving clears the
/// whole trail, not just this item.
#[must_use]
pub fn resolve_hover(
    event: HoverEvent,
    merged_disabled: bool,
    scope: &ItemScope,
    key: &MenuKey,
) -> HoverOutcome {
    if merged_disabled {
        log::trace!("ignoring {event:?} on disabled menu item {key}");
        return HoverOutcome::Ignored;
    }
    match event {
        HoverEvent::Enter => HoverOutcome::Change(child_path(&scope.parent_key_path, key)),
        HoverEvent::Leave => HoverOutcome::Change(KeyPath::new()),
    }
}

impl HoverOutcome {
    /// Forward the request to `sink`. Returns whether the owner should be notified.
    pub fn apply(self, sink: &dyn ActiveKeysSink) -> bool {
        match self {
            Self::Ignored => false,
            Self::Change(path) => {
                log::trace!("requesting active path [{}]", display_path(&path));
                sink.change_active_keys(path);
                true
            }
        }
    }
}
