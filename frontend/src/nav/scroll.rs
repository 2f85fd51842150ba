use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::utils::dom::{self, Observer};

/// Decides whether the header slides away: it hides while the page scrolls
/// down past the offset and comes back on any upward scroll.
#[derive(Debug, Clone, Default)]
pub struct HeaderScroll {
    last_offset: f64,
}

impl HeaderScroll {
    pub fn update(&mut self, offset: f64) -> bool {
        let hidden = offset > self.last_offset && offset > config::HEADER_HIDE_OFFSET;
        self.last_offset = offset;
        hidden
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Container that gains `animate-in` the first time it enters the viewport.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state_eq(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let mut observer = None;
                if let Some(element) = node.cast::<Element>() {
                    if !dom::intersection_observer_supported() || dom::is_element_in_viewport(&element) {
                        revealed.set(true);
                    } else {
                        let on_enter = {
                            let revealed = revealed.clone();
                            move |_: Element| revealed.set(true)
                        };
                        observer = Observer::once(
                            &element,
                            config::REVEAL_THRESHOLD,
                            Some(config::REVEAL_ROOT_MARGIN),
                            on_enter,
                        )
                        .map_err(|e| log::debug!("reveal observer failed: {}", e))
                        .ok();
                    }
                }
                move || drop(observer)
            },
            (),
        );
    }

    html! {
        <div ref={node} class={classes!(props.class.clone(), revealed.then_some("animate-in"))}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    /// In-page target, with or without the leading `#`.
    pub target: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// In-page link that scrolls smoothly to its target instead of jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let id = props.target.trim_start_matches('#').to_string();
    let href = format!("#{}", id);
    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        match dom::document().map(|d| d.get_element_by_id(&id)) {
            Ok(Some(target)) => dom::scroll_into_view_smooth(&target),
            _ => log::debug!("anchor target #{} not found", id),
        }
    });
    html! {
        <a {href} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_hides_only_when_scrolling_down_past_offset() {
        let mut scroll = HeaderScroll::default();
        assert!(!scroll.update(50.0));
        assert!(!scroll.update(100.0));
        assert!(scroll.update(150.0));
        assert!(scroll.update(400.0));
        assert!(!scroll.update(390.0));
        assert!(!scroll.update(390.0));
        assert!(scroll.update(391.0));
        assert!(!scroll.update(0.0));
    }
}
