//! Tooltip disclosure for collapsed menus.
use crate::context::{ItemScope, MenuContext};
use crate::item::ItemTitle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TooltipTitle {
    Empty,
    /// Reuse the item's rendered children.
    Children,
    Text(String),
}

impl TooltipTitle {
    /// Candidate title before collapse state is considered.
    #[must_use]
    pub fn resolve(title: &ItemTitle, scope: &ItemScope) -> Self {
        match title {
            ItemTitle::Text(text) => Self::Text(text.clone()),
            ItemTitle::Hidden => Self::Empty,
            ItemTitle::Unset if scope.first_level => Self::Children,
            ItemTitle::Unset => Self::Empty,
        }
    }

    /// An empty title never opens a tooltip.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Children => false,
            Self::Text(text) => text.is_empty(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Left,
    Right,
}

impl Placement {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Everything the tooltip wrapper needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipPlan {
    /// `None` when the menu is expanded and labels are already visible.
    pub title: Option<TooltipTitle>,
    /// Forced visibility; `None` leaves it to hover.
    pub visible: Option<bool>,
    pub placement: Placement,
    pub overlay_class: String,
}

impl TooltipPlan {
    #[must_use]
    pub fn build(title: &ItemTitle, ctx: &MenuContext, scope: &ItemScope) -> Self {
        let placement = if ctx.rtl {
            Placement::Left
        } else {
            Placement::Right
        };
        let overlay_class = format!("{}-inline-collapsed-tooltip", ctx.prefix_cls);
        if !ctx.is_collapsed() {
            // A stale controlled tooltip would otherwise stay open after expanding.
            return Self {
                title: None,
                visible: Some(false),
                placement,
                overlay_class,
            };
        }
        Self {
            title: Some(TooltipTitle::resolve(title, scope)),
            visible: None,
            placement,
            overlay_class,
        }
    }

    /// Title to show, if any survives collapse state and emptiness.
    #[must_use]
    pub fn shown_title(&self) -> Option<&TooltipTitle> {
        self.title.as_ref().filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collapsed(rtl: bool) -> MenuContext {
        let mut ctx = MenuContext::default();
        ctx.sider_collapsed = true;
        ctx.rtl = rtl;
        ctx
    }

    #[test]
    fn unset_title_uses_children_on_first_level_only() {
        let root = ItemScope::root();
        assert_eq!(
            TooltipTitle::resolve(&ItemTitle::Unset, &root),
            TooltipTitle::Children
        );
        let nested = root.nested(&"group".into());
        assert_eq!(
            TooltipTitle::resolve(&ItemTitle::Unset, &nested),
            TooltipTitle::Empty
        );
    }

    #[test]
    fn hidden_title_is_empty_and_text_is_kept() {
        let root = ItemScope::root();
        assert_eq!(
            TooltipTitle::resolve(&ItemTitle::Hidden, &root),
            TooltipTitle::Empty
        );
        assert_eq!(
            TooltipTitle::resolve(&ItemTitle::from("Custom"), &root),
            TooltipTitle::Text("Custom".into())
        );
    }

    #[test]
    fn expanded_menu_forces_tooltip_hidden() {
        let plan = TooltipPlan::build(
            &ItemTitle::from("Custom"),
            &MenuContext::default(),
            &ItemScope::root(),
        );
        assert_eq!(plan.title, None);
        assert_eq!(plan.visible, Some(false));
        assert!(plan.shown_title().is_none());
    }

    #[test]
    fn collapsed_menu_keeps_title_and_hover_visibility() {
        let plan = TooltipPlan::build(&ItemTitle::Unset, &collapsed(false), &ItemScope::root());
        assert_eq!(plan.title, Some(TooltipTitle::Children));
        assert_eq!(plan.visible, None);
        assert_eq!(plan.placement, Placement::Right);
        assert_eq!(plan.overlay_class, "ant-menu-inline-collapsed-tooltip");
    }

    #[test]
    fn rtl_places_tooltip_left() {
        let plan = TooltipPlan::build(&ItemTitle::Unset, &collapsed(true), &ItemScope::root());
        assert_eq!(plan.placement, Placement::Left);
        assert_eq!(plan.placement.as_str(), "left");
    }

    #[test]
    fn empty_titles_are_not_shown() {
        let plan = TooltipPlan::build(&ItemTitle::Hidden, &collapsed(false), &ItemScope::root());
        assert!(plan.shown_title().is_none());
        let plan = TooltipPlan::build(&ItemTitle::from(""), &collapsed(false), &ItemScope::root());
        assert!(plan.shown_title().is_none());
    }
}
