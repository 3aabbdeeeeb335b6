use std::cell::RefCell;

use trellis_menu::{
    ChildShape, ContentLayout, HoverEvent, ItemAttrs, ItemClasses, ItemProps, ItemScope,
    ItemState, ItemTitle, KeyPath, MenuContext, MenuKey, TooltipPlan, TooltipTitle, resolve_hover,
};

fn keys(path: &KeyPath) -> Vec<&str> {
    path.iter().map(MenuKey::as_str).collect()
}

/// Drive one item through a hover sequence the way a menu would: every
/// request replaces the shared trail, and the item is re-derived afterwards.
#[test]
fn hover_sequence_updates_shared_trail() {
    let ctx = RefCell::new(MenuContext::default());
    let scope = ItemScope::root().nested(&MenuKey::from("files"));
    let props = ItemProps::new("recent");
    let sink = |path: KeyPath| {
        ctx.borrow_mut().active_keys = path;
    };

    let state = ItemState::derive(&props, &ctx.borrow());
    assert!(!state.is_active);

    let notify = resolve_hover(HoverEvent::Enter, state.merged_disabled, &scope, &props.key)
        .apply(&sink);
    assert!(notify);
    assert_eq!(keys(&ctx.borrow().active_keys), ["files", "recent"]);
    assert!(ItemState::derive(&props, &ctx.borrow()).is_active);

    let notify = resolve_hover(HoverEvent::Leave, false, &scope, &props.key).apply(&sink);
    assert!(notify);
    assert!(ctx.borrow().active_keys.is_empty());
    assert!(!ItemState::derive(&props, &ctx.borrow()).is_active);
}

#[test]
fn sibling_leave_clears_trail_after_enter() {
    let ctx = RefCell::new(MenuContext::default());
    let scope = ItemScope::root();
    let sink = |path: KeyPath| {
        ctx.borrow_mut().active_keys = path;
    };
    let first = MenuKey::from("first");
    let second = MenuKey::from("second");

    resolve_hover(HoverEvent::Enter, false, &scope, &second).apply(&sink);
    // The pointer left `first` after entering `second`; the trail is cleared.
    resolve_hover(HoverEvent::Leave, false, &scope, &first).apply(&sink);
    assert!(ctx.borrow().active_keys.is_empty());
}

#[test]
fn menu_wide_disable_suppresses_hover() {
    let mut ctx = MenuContext::default();
    ctx.disabled = true;
    let props = ItemProps::new("a");
    let state = ItemState::derive(&props, &ctx);
    let calls = RefCell::new(0);
    let sink = |_: KeyPath| {
        *calls.borrow_mut() += 1;
    };
    let notify = resolve_hover(HoverEvent::Enter, state.merged_disabled, &ItemScope::root(), &props.key)
        .apply(&sink);
    assert!(!notify);
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn collapsed_sidebar_item_plan() {
    let mut ctx = MenuContext::with_prefix("nav");
    ctx.inline_collapsed = true;
    let scope = ItemScope::root();
    let props = ItemProps::new("settings");
    let shape = ChildShape::Text("Settings".into());
    let state = ItemState::derive(&props, &ctx);

    assert_eq!(
        ContentLayout::plan(false, &shape, &ctx, &scope),
        ContentLayout::CollapsedInitial("S".into())
    );
    let plan = TooltipPlan::build(&props.title, &ctx, &scope);
    assert_eq!(plan.shown_title(), Some(&TooltipTitle::Children));
    assert_eq!(plan.overlay_class, "nav-inline-collapsed-tooltip");

    let attrs = ItemAttrs::build(&props, &state, &ctx, false, &shape);
    assert_eq!(attrs.only_child_class.as_deref(), Some("nav-item-only-child"));
    let classes = ItemClasses::build(&props, &state, &ctx);
    assert_eq!(classes.into_vec(), ["nav-item"]);
}

#[test]
fn explicit_titles_override_children() {
    let mut ctx = MenuContext::default();
    ctx.sider_collapsed = true;
    let scope = ItemScope::root();
    let custom = TooltipPlan::build(&ItemTitle::from("Custom"), &ctx, &scope);
    assert_eq!(custom.shown_title(), Some(&TooltipTitle::Text("Custom".into())));
    let hidden = TooltipPlan::build(&ItemTitle::Hidden, &ctx, &scope);
    assert_eq!(hidden.title, Some(TooltipTitle::Empty));
    assert!(hidden.shown_title().is_none());
}
