//! Trellis Menu Core
//!
//! Platform-agnostic logic behind the Trellis menu item: key paths, the shared
//! menu context snapshot, derived item state, hover transitions, tooltip and
//! content planning, and the attribute set of the rendered list item.
//! This crate has no UI framework dependency; `trellis-web` renders it with Yew.

pub mod attrs;
pub mod config;
pub mod content;
pub mod context;
pub mod error;
pub mod hover;
pub mod ids;
pub mod item;
pub mod key;
pub mod tooltip;

pub use attrs::{DEFAULT_ROLE, ItemAttrs};
pub use config::{DEFAULT_PREFIX_CLS, MenuConfig};
pub use content::{ChildShape, ContentLayout};
pub use context::{ActiveKeysSink, ItemScope, MenuContext};
pub use error::MenuError;
pub use hover::{HoverEvent, HoverOutcome, resolve_hover};
pub use ids::ItemIdAllocator;
pub use item::{ItemClasses, ItemProps, ItemState, ItemTitle};
pub use key::{KeyPath, MenuKey};
pub use tooltip::{Placement, TooltipPlan, TooltipTitle};
