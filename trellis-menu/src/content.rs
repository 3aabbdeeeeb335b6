//! How an item lays out its icon and label.
use crate::context::{ItemScope, MenuContext};

/// Shape of an item's flattened children, as far as layout cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildShape {
    Empty,
    /// A single text node.
    Text(String),
    /// A single `<span>` element; the label is already wrapped.
    Span,
    /// Any other content, by node count.
    Nodes(usize),
}

impl ChildShape {
    /// Visible content nodes, icon excluded.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Text(_) | Self::Span => 1,
            Self::Nodes(n) => *n,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentLayout {
    /// Children as given.
    Plain,
    /// First character of the label in `{prefix}-inline-collapsed-noicon`.
    CollapsedInitial(String),
    /// Children wrapped in `{prefix}-title-content` next to the icon.
    TitleContent,
}

impl ContentLayout {
    /// Checks run in order: icon absence, bare span, then the collapsed
    /// first-level abbreviation.
    #[must_use]
    pub fn plan(has_icon: bool, shape: &ChildShape, ctx: &MenuContext, scope: &ItemScope) -> Self {
        if has_icon && *shape != ChildShape::Span {
            return Self::TitleContent;
        }
        if ctx.inline_collapsed
            && scope.first_level
            && let ChildShape::Text(text) = shape
            && let Some(first) = text.chars().next()
        {
            return Self::CollapsedInitial(first.to_string());
        }
        Self::Plain
    }

    /// Wrapper class for layouts that add one.
    #[must_use]
    pub fn wrapper_class(&self, ctx: &MenuContext) -> Option<String> {
        match self {
            Self::Plain => None,
            Self::CollapsedInitial(_) => Some(format!("{}-inline-collapsed-noicon", ctx.prefix_cls)),
            Self::TitleContent => Some(ctx.class("title-content")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collapsed() -> MenuContext {
        let mut ctx = MenuContext::default();
        ctx.inline_collapsed = true;
        ctx
    }

    #[test]
    fn icon_with_text_wraps_in_title_content() {
        let layout = ContentLayout::plan(
            true,
            &ChildShape::Text("Dashboard".into()),
            &MenuContext::default(),
            &ItemScope::root(),
        );
        assert_eq!(layout, ContentLayout::TitleContent);
        assert_eq!(
            layout.wrapper_class(&MenuContext::default()).as_deref(),
            Some("ant-menu-title-content")
        );
    }

    #[test]
    fn collapsed_first_level_text_abbreviates() {
        let ctx = collapsed();
        let layout = ContentLayout::plan(
            false,
            &ChildShape::Text("Settings".into()),
            &ctx,
            &ItemScope::root(),
        );
        assert_eq!(layout, ContentLayout::CollapsedInitial("S".into()));
        assert_eq!(
            layout.wrapper_class(&ctx).as_deref(),
            Some("ant-menu-inline-collapsed-noicon")
        );
    }

    #[test]
    fn abbreviation_keeps_whole_first_character() {
        let layout = ContentLayout::plan(
            false,
            &ChildShape::Text("Ärger".into()),
            &collapsed(),
            &ItemScope::root(),
        );
        assert_eq!(layout, ContentLayout::CollapsedInitial("Ä".into()));
    }

    #[test]
    fn bare_span_with_icon_stays_plain() {
        let layout = ContentLayout::plan(true, &ChildShape::Span, &collapsed(), &ItemScope::root());
        assert_eq!(layout, ContentLayout::Plain);
    }

    #[test]
    fn nested_or_expanded_items_stay_plain() {
        let text = ChildShape::Text("Settings".into());
        let nested = ItemScope::root().nested(&"sub".into());
        assert_eq!(
            ContentLayout::plan(false, &text, &collapsed(), &nested),
            ContentLayout::Plain
        );
        assert_eq!(
            ContentLayout::plan(false, &text, &MenuContext::default(), &ItemScope::root()),
            ContentLayout::Plain
        );
        assert_eq!(
            ContentLayout::plan(false, &ChildShape::Text(String::new()), &collapsed(), &ItemScope::root()),
            ContentLayout::Plain
        );
        assert_eq!(
            ContentLayout::plan(false, &ChildShape::Nodes(2), &collapsed(), &ItemScope::root()),
            ContentLayout::Plain
        );
    }

    #[test]
    fn node_counts() {
        assert_eq!(ChildShape::Empty.node_count(), 0);
        assert_eq!(ChildShape::Span.node_count(), 1);
        assert_eq!(ChildShape::Text("a".into()).node_count(), 1);
        assert_eq!(ChildShape::Nodes(3).node_count(), 3);
    }
}
