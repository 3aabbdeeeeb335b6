use std::rc::Rc;

use trellis_menu::{HoverEvent, ItemScope, KeyPath, MenuKey, TooltipPlan, resolve_hover};
use web_sys::MouseEvent;
use yew::prelude::*;

/// What a hover handler needs to know about its item.
#[derive(Clone, PartialEq)]
pub struct HoverTarget {
    pub key: MenuKey,
    pub uni_key: AttrValue,
    pub scope: Rc<ItemScope>,
    pub merged_disabled: bool,
    pub change_active_keys: Callback<KeyPath>,
}

/// Send the trail change for `event`. Returns whether the owner should be notified.
pub fn dispatch_hover(event: HoverEvent, target: &HoverTarget) -> bool {
    let outcome = resolve_hover(event, target.merged_disabled, &target.scope, &target.key);
    log::trace!("{} ({}) {event:?}: {outcome:?}", target.uni_key, target.key);
    let sink = |path: KeyPath| target.change_active_keys.emit(path);
    outcome.apply(&sink)
}

pub fn hover_handler(
    event: HoverEvent,
    target: HoverTarget,
    notify: Option<Callback<MouseEvent>>,
) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        if dispatch_hover(event, &target)
            && let Some(cb) = notify.as_ref()
        {
            cb.emit(e);
        }
    })
}

/// Keep `toggle` only when the item has a tooltip to open; expanded menus
/// leave tooltip state alone on hover.
#[must_use]
pub fn tooltip_toggle(plan: &TooltipPlan, toggle: Callback<()>) -> Option<Callback<()>> {
    plan.shown_title().map(|_| toggle)
}
