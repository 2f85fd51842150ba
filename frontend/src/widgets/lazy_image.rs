use web_sys::Element;
use yew::prelude::*;

use crate::utils::dom::{self, Observer};

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    #[prop_or_default]
    pub alt: AttrValue,
    #[prop_or_default]
    pub caption: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

/// Image whose `src` is filled in from `data-src` once it scrolls into view.
/// Browsers without `IntersectionObserver` load it straight away.
#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let image_ref = use_node_ref();
    let loaded = use_state(|| false);

    {
        let image_ref = image_ref.clone();
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |_| {
                let mut observer = None;
                match image_ref.cast::<Element>() {
                    Some(image) if dom::intersection_observer_supported() => {
                        let on_enter = {
                            let loaded = loaded.clone();
                            move |_: Element| loaded.set(true)
                        };
                        match Observer::once(&image, 0.0, None, on_enter) {
                            Ok(o) => observer = Some(o),
                            Err(e) => {
                                log::debug!("lazy loading disabled: {}", e);
                                loaded.set(true);
                            }
                        }
                    }
                    _ => loaded.set(true),
                }
                move || drop(observer)
            },
            props.src.clone(),
        );
    }

    let class = classes!(props.class.clone(), (!*loaded).then_some("lazy"));
    html! {
        <img
            ref={image_ref}
            {class}
            data-src={props.src.clone()}
            src={loaded.then(|| props.src.clone())}
            alt={props.alt.clone()}
            data-caption={props.caption.clone()}
        />
    }
}
