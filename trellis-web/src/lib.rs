#![forbid(unsafe_code)]
//! Yew components for Trellis menus.
//!
//! [`Menu`](components::menu::Menu) owns the shared hover trail and provides it
//! to every [`MenuItem`](components::menu_item::MenuItem) below it;
//! [`KeyPathScope`](components::key_path_scope::KeyPathScope) nests items under a
//! parent key. The state derivations live in `trellis-menu`.

pub mod children;
pub mod components;
pub mod context;

pub use components::key_path_scope::{KeyPathScope, KeyPathScopeProps};
pub use components::menu::{Menu, MenuProps};
pub use components::menu_item::{MenuItem, MenuItemProps, TitleProp};
pub use components::tooltip::{TooltipHandle, TooltipPopover, TooltipPopoverProps, use_tooltip_handle};
pub use context::{MenuContextHandle, use_item_scope, use_menu_context};
pub use trellis_menu::{KeyPath, MenuConfig, MenuKey};
