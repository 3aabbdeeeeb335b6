mod interactions;
mod view;

pub use interactions::{HoverTarget, dispatch_hover, hover_handler, tooltip_toggle};

use trellis_menu::{
    ContentLayout, HoverEvent, ItemAttrs, ItemClasses, ItemProps, ItemState, ItemTitle, MenuKey,
    TooltipPlan,
};
use web_sys::MouseEvent;
use yew::html::IntoPropValue;
use yew::prelude::*;

use crate::children::child_shape;
use crate::components::tooltip::{TooltipPopover, use_tooltip_handle};
use crate::context::{use_item_scope, use_menu_context};

/// `title` prop: unset, `false` to suppress the tooltip, or literal text.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub enum TitleProp {
    #[default]
    Unset,
    Hidden,
    Text(AttrValue),
}

impl TitleProp {
    #[must_use]
    pub fn to_item_title(&self) -> ItemTitle {
        match self {
            Self::Unset => ItemTitle::Unset,
            Self::Hidden => ItemTitle::Hidden,
            Self::Text(text) => ItemTitle::Text(text.to_string()),
        }
    }
}

impl IntoPropValue<TitleProp> for &'static str {
    fn into_prop_value(self) -> TitleProp {
        TitleProp::Text(AttrValue::Static(self))
    }
}

impl IntoPropValue<TitleProp> for String {
    fn into_prop_value(self) -> TitleProp {
        TitleProp::Text(AttrValue::from(self))
    }
}

impl IntoPropValue<TitleProp> for AttrValue {
    fn into_prop_value(self) -> TitleProp {
        TitleProp::Text(self)
    }
}

impl IntoPropValue<TitleProp> for bool {
    fn into_prop_value(self) -> TitleProp {
        if self { TitleProp::Unset } else { TitleProp::Hidden }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct MenuItemProps {
    /// Key among siblings; rendered as `data-menu-id` and matched against the active trail.
    pub item_key: AttrValue,
    #[prop_or_default]
    pub role: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub danger: bool,
    #[prop_or_default]
    pub title: TitleProp,
    #[prop_or_default]
    pub icon: Option<Html>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub on_mouse_enter: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub on_mouse_leave: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

impl MenuItemProps {
    fn to_item_props(&self) -> ItemProps {
        ItemProps {
            key: MenuKey::from(self.item_key.as_str()),
            role: self.role.as_ref().map(ToString::to_string),
            disabled: self.disabled,
            danger: self.danger,
            title: self.title.to_item_title(),
        }
    }
}

#[function_component(MenuItem)]
pub fn menu_item(props: &MenuItemProps) -> Html {
    let menu = use_menu_context("MenuItem");
    let scope = use_item_scope();
    let tooltip = use_tooltip_handle();
    let uni_key = {
        let ids = menu.ids.clone();
        use_state(move || AttrValue::from(ids.allocate()))
    };

    let ctx = menu.menu.as_ref();
    let item = props.to_item_props();
    let state = ItemState::derive(&item, ctx);
    let shape = child_shape(&props.children);
    let has_icon = props.icon.is_some();

    let attrs = ItemAttrs::build(&item, &state, ctx, has_icon, &shape);
    let layout = ContentLayout::plan(has_icon, &shape, ctx, &scope);
    let plan = TooltipPlan::build(&item.title, ctx, &scope);

    let mut class = Classes::new();
    for name in ItemClasses::build(&item, &state, ctx).into_vec() {
        class.push(name);
    }
    class.push(props.class.clone());
    if let Some(only_child) = attrs.only_child_class.clone() {
        class.push(only_child);
    }

    let target = HoverTarget {
        key: item.key.clone(),
        uni_key: (*uni_key).clone(),
        scope: scope.clone(),
        merged_disabled: state.merged_disabled,
        change_active_keys: menu.change_active_keys.clone(),
    };
    let onmouseenter = {
        let show = tooltip_toggle(&plan, {
            let tooltip = tooltip.clone();
            Callback::from(move |()| tooltip.show())
        });
        let handler = hover_handler(HoverEvent::Enter, target.clone(), props.on_mouse_enter.clone());
        Callback::from(move |e: MouseEvent| {
            if let Some(show) = show.as_ref() {
                show.emit(());
            }
            handler.emit(e);
        })
    };
    let onmouseleave = {
        let hide = tooltip_toggle(&plan, {
            let tooltip = tooltip.clone();
            Callback::from(move |()| tooltip.hide())
        });
        let handler = hover_handler(HoverEvent::Leave, target, props.on_mouse_leave.clone());
        Callback::from(move |e: MouseEvent| {
            if let Some(hide) = hide.as_ref() {
                hide.emit(());
            }
            handler.emit(e);
        })
    };

    let popover = plan.shown_title().map(|title| {
        html! {
            <TooltipPopover
                title={view::tooltip_title(title, &props.children)}
                open={tooltip.resolve(plan.visible)}
                placement={plan.placement}
                overlay_class={classes!(plan.overlay_class.clone())}
            />
        }
    });

    html! {
        <li id={props.id.clone()}
            class={class}
            style={props.style.clone()}
            role={attrs.role}
            tabindex={attrs.tabindex.map(|t| t.to_string())}
            data-menu-id={attrs.data_menu_id}
            aria-disabled={attrs.aria_disabled.to_string()}
            aria-selected={attrs.aria_selected.map(|s| s.to_string())}
            title={attrs.title}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}>
            { view::icon(ctx, props.icon.as_ref()) }
            { view::content(ctx, &layout, &props.children) }
            { popover.unwrap_or_default() }
        </li>
    }
}
