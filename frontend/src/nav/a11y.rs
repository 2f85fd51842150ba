use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent, Node};
use yew::prelude::*;

use super::menu::{focus_trap_target, FOCUSABLE_SELECTOR};
use crate::error::SiteError;
use crate::utils::dom;

/// Keeps Tab / Shift+Tab inside `container` by wrapping at either end.
pub fn trap_tab(container: &Element, event: &KeyboardEvent) -> Result<(), SiteError> {
    if event.key() != "Tab" {
        return Ok(());
    }
    let focusable = container.query_selector_all(FOCUSABLE_SELECTOR)?;
    let active: Option<Node> = dom::document()?.active_element().map(Into::into);
    let focused = active.and_then(|active| {
        (0..focusable.length()).find(|i| focusable.item(*i).as_ref() == Some(&active))
    });
    let target = focus_trap_target(
        focusable.length() as usize,
        focused.map(|i| i as usize),
        event.shift_key(),
    );
    if let Some(index) = target {
        event.prevent_default();
        if let Some(element) = focusable
            .item(index as u32)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        {
            element.focus()?;
        }
    }
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct SkipLinkProps {
    pub target: AttrValue,
    pub label: AttrValue,
}

/// "Skip to content" link: focuses the target and scrolls it into view.
#[function_component(SkipLink)]
pub fn skip_link(props: &SkipLinkProps) -> Html {
    let target = props.target.clone();
    let onclick = {
        let target = target.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            match dom::focus_element_by_id(&target) {
                Ok(element) => dom::scroll_into_view_smooth(&element),
                Err(e) => log::debug!("skip link: {}", e),
            }
        })
    };
    html! {
        <a class="skip-link" href={format!("#{}", target)} {onclick}>{ props.label.clone() }</a>
    }
}
