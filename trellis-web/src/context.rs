//! Context values a [`Menu`](crate::Menu) provides to its items.
use std::rc::Rc;

use trellis_menu::{ItemIdAllocator, ItemScope, KeyPath, MenuContext, MenuError};
use yew::prelude::*;

/// Provider for the [`ItemScope`] of the items below it.
pub type ScopeProvider = ContextProvider<Rc<ItemScope>>;

/// Shared menu state as seen by items: a snapshot plus the way to change it.
#[derive(Clone)]
pub struct MenuContextHandle {
    pub menu: Rc<MenuContext>,
    /// Replaces the whole active trail.
    pub change_active_keys: Callback<KeyPath>,
    pub ids: Rc<ItemIdAllocator>,
}

impl PartialEq for MenuContextHandle {
    fn eq(&self, other: &Self) -> bool {
        self.menu == other.menu
            && self.change_active_keys == other.change_active_keys
            && Rc::ptr_eq(&self.ids, &other.ids)
    }
}

impl MenuContextHandle {
    /// Handle for an item rendered without a menu: default snapshot, requests dropped.
    #[must_use]
    pub fn detached() -> Self {
        Self {
            menu: Rc::new(MenuContext::default()),
            change_active_keys: Callback::noop(),
            ids: Rc::new(ItemIdAllocator::new()),
        }
    }
}

/// Read the enclosing menu, falling back to a detached handle with a warning.
#[hook]
pub fn use_menu_context(component: &'static str) -> MenuContextHandle {
    use_context::<MenuContextHandle>().unwrap_or_else(|| {
        log::warn!("{}", MenuError::MissingContext(component));
        MenuContextHandle::detached()
    })
}

/// Scope of the enclosing menu or nested key-path scope; top level when absent.
#[hook]
pub fn use_item_scope() -> Rc<ItemScope> {
    use_context::<Rc<ItemScope>>().unwrap_or_else(|| Rc::new(ItemScope::root()))
}
