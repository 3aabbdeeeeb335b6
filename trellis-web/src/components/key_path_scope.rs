use std::rc::Rc;

use trellis_menu::MenuKey;
use yew::prelude::*;

use crate::context::{ScopeProvider, use_item_scope, use_menu_context};

#[derive(Properties, PartialEq, Clone)]
pub struct KeyPathScopeProps {
    /// Key of the entry the children hang under.
    pub item_key: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Nests items one level below `item_key`: hovering them activates the whole
/// trail, and they no longer count as first-level entries.
#[function_component(KeyPathScope)]
pub fn key_path_scope(props: &KeyPathScopeProps) -> Html {
    let menu = use_menu_context("KeyPathScope");
    let parent = use_item_scope();
    let scope = Rc::new(parent.nested(&MenuKey::from(props.item_key.as_str())));
    let ctx = &menu.menu;

    html! {
        <li role="none" class={classes!(ctx.class("submenu"), props.class.clone())} data-menu-scope={props.item_key.clone()}>
            <ScopeProvider context={scope}>
                <ul role="group" class={ctx.class("sub")}>
                    { for props.children.iter() }
                </ul>
            </ScopeProvider>
        </li>
    }
}
