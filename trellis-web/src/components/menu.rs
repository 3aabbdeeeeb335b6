use std::rc::Rc;

use trellis_menu::key::display_path;
use trellis_menu::{ItemIdAllocator, ItemScope, KeyPath, MenuConfig, MenuContext, MenuKey};
use yew::prelude::*;

use crate::context::{MenuContextHandle, ScopeProvider};

#[derive(Properties, PartialEq, Clone)]
pub struct MenuProps {
    #[prop_or_default]
    pub config: Option<Rc<MenuConfig>>,
    /// Overrides the configured prefix.
    #[prop_or_default]
    pub prefix_cls: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub rtl: bool,
    #[prop_or_default]
    pub inline_collapsed: bool,
    #[prop_or_default]
    pub sider_collapsed: bool,
    #[prop_or_default]
    pub default_active_keys: Vec<MenuKey>,
    #[prop_or_default]
    pub on_active_change: Option<Callback<KeyPath>>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Explicit prefix, then a valid configured prefix, then the default.
fn resolve_prefix(props: &MenuProps) -> String {
    if let Some(prefix) = props.prefix_cls.as_ref() {
        return prefix.to_string();
    }
    let Some(config) = props.config.as_ref() else {
        return MenuConfig::default().prefix_cls;
    };
    match config.validate() {
        Ok(()) => config.prefix_cls.clone(),
        Err(err) => {
            log::warn!("{err}; using default menu prefix");
            MenuConfig::default().prefix_cls
        }
    }
}

/// Request handler that replaces the whole trail and tells the owner.
fn change_active_keys_handler(
    active: UseStateHandle<KeyPath>,
    on_active_change: Option<Callback<KeyPath>>,
) -> Callback<KeyPath> {
    Callback::from(move |keys: KeyPath| {
        log::debug!("active menu path -> [{}]", display_path(&keys));
        if let Some(cb) = on_active_change.as_ref() {
            cb.emit(keys.clone());
        }
        active.set(keys);
    })
}

#[function_component(Menu)]
pub fn menu(props: &MenuProps) -> Html {
    let active = {
        let initial: KeyPath = props.default_active_keys.iter().cloned().collect();
        use_state(move || initial)
    };
    let ids = use_state(|| Rc::new(ItemIdAllocator::new()));
    let root_scope = use_state(|| Rc::new(ItemScope::root()));

    let prefix = resolve_prefix(props);
    let snapshot = MenuContext {
        prefix_cls: prefix.clone(),
        active_keys: (*active).clone(),
        disabled: props.disabled,
        rtl: props.rtl,
        inline_collapsed: props.inline_collapsed,
        sider_collapsed: props.sider_collapsed,
    };
    let handle = MenuContextHandle {
        menu: Rc::new(snapshot),
        change_active_keys: change_active_keys_handler(
            active.clone(),
            props.on_active_change.clone(),
        ),
        ids: (*ids).clone(),
    };

    let mut class = classes!(
        prefix.clone(),
        format!("{prefix}-root"),
        format!("{prefix}-vertical")
    );
    if props.inline_collapsed {
        class.push(format!("{prefix}-inline-collapsed"));
    }
    if props.rtl {
        class.push(format!("{prefix}-rtl"));
    }
    class.push(props.class.clone());

    html! {
        <ContextProvider<MenuContextHandle> context={handle}>
            <ScopeProvider context={(*root_scope).clone()}>
                <ul class={class} role="menu" dir={props.rtl.then_some("rtl")}>
                    { for props.children.iter() }
                </ul>
            </ScopeProvider>
        </ContextProvider<MenuContextHandle>>
    }
}
