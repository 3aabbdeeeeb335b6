//! Per-menu item id allocation.
use std::cell::Cell;

/// Hands out `menu_item_{n}` ids for the items of one menu.
///
/// Each menu owns its allocator, so ids are deterministic per menu and
/// independent across menus rendered side by side.
#[derive(Debug, Default)]
pub struct ItemIdAllocator {
    next: Cell<u64>,
}

impl ItemIdAllocator {
    #[must_use]
    pub const fn new() -> Self {
        Self { next: Cell::new(0) }
    }

    /// Allocate the next id; the first call returns `menu_item_1`.
    pub fn allocate(&self) -> String {
        let n = self.next.get() + 1;
        self.next.set(n);
        format!("menu_item_{n}")
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.next.get()
    }
}
