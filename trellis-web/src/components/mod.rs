pub mod key_path_scope;
pub mod menu;
pub mod menu_item;
pub mod tooltip;
