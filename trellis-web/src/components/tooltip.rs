//! Tooltip bubble for menu labels.
//!
//! Two pieces:
//! - **`use_tooltip_handle()`**: hook returning a [`TooltipHandle`]; the trigger
//!   element wires `show()`/`hide()` onto its own pointer events.
//! - **`TooltipPopover`**: renders the bubble inside the trigger, so list markup
//!   keeps its structure. Placement is left to CSS through placement classes.
use trellis_menu::Placement;
use yew::prelude::*;

pub const DEFAULT_TOOLTIP_PREFIX: &str = "ant-tooltip";

/// Hover-driven open state of one tooltip.
#[derive(Clone, PartialEq)]
pub struct TooltipHandle {
    open: UseStateHandle<bool>,
}

impl TooltipHandle {
    pub fn show(&self) {
        self.open.set(true);
    }

    pub fn hide(&self) {
        self.open.set(false);
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        *self.open
    }

    /// Forced visibility wins over hover state.
    #[must_use]
    pub fn resolve(&self, forced: Option<bool>) -> bool {
        forced.unwrap_or_else(|| self.is_open())
    }
}

#[hook]
pub fn use_tooltip_handle() -> TooltipHandle {
    TooltipHandle {
        open: use_state(|| false),
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct TooltipPopoverProps {
    pub title: Html,
    pub open: bool,
    pub placement: Placement,
    #[prop_or_default]
    pub overlay_class: Classes,
    #[prop_or(AttrValue::Static(DEFAULT_TOOLTIP_PREFIX))]
    pub prefix_cls: AttrValue,
}

#[function_component(TooltipPopover)]
pub fn tooltip_popover(props: &TooltipPopoverProps) -> Html {
    let prefix = props.prefix_cls.as_str();
    let class = classes!(
        prefix.to_string(),
        format!("{prefix}-placement-{}", props.placement.as_str()),
        props.overlay_class.clone()
    );
    html! {
        <div role="tooltip" class={class} hidden={!props.open}>
            <div class={format!("{prefix}-arrow")}></div>
            <div class={format!("{prefix}-inner")}>{ props.title.clone() }</div>
        </div>
    }
}
