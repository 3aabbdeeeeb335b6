use trellis_menu::{ContentLayout, MenuContext, TooltipTitle};
use yew::prelude::*;

pub fn icon(ctx: &MenuContext, icon: Option<&Html>) -> Html {
    icon.map_or_else(Html::default, |icon| {
        html! { <span class={ctx.class("item-icon")}>{ icon.clone() }</span> }
    })
}

pub fn content(ctx: &MenuContext, layout: &ContentLayout, children: &Children) -> Html {
    let wrapper = layout.wrapper_class(ctx);
    match layout {
        ContentLayout::Plain => html! { for children.iter() },
        ContentLayout::CollapsedInitial(initial) => {
            html! { <div class={wrapper}>{ initial.clone() }</div> }
        }
        ContentLayout::TitleContent => {
            html! { <span class={wrapper}>{ for children.iter() }</span> }
        }
    }
}

pub fn tooltip_title(title: &TooltipTitle, children: &Children) -> Html {
    match title {
        TooltipTitle::Empty => Html::default(),
        TooltipTitle::Children => html! { for children.iter() },
        TooltipTitle::Text(text) => html! { { text.clone() } },
    }
}
