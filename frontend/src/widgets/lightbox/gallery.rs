use std::rc::Rc;

use web_sys::KeyboardEvent;
use yew::prelude::*;

use super::state::{LightboxAction, Media};
use super::view::LightboxContext;
use crate::exports;
use crate::utils::dom;
use crate::i18n::{Language, Messages};
use crate::widgets::filter::CategoryFilter;
use crate::widgets::lazy_image::LazyImage;

pub const TILE_SELECTOR: &str = ".gallery-item";

/// Selector for the media element of the tile showing `src`, loaded or not.
/// Scoped to tiles so the lightbox's own image never matches.
pub fn tile_media_selector(src: &str) -> String {
    format!(
        "{tile} {src_attr}, {tile} {data_src_attr}",
        tile = TILE_SELECTOR,
        src_attr = dom::attribute_selector("src", src),
        data_src_attr = dom::attribute_selector("data-src", src),
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryEntry {
    pub media: Media,
    pub category: Option<AttrValue>,
}

impl GalleryEntry {
    pub fn new(media: Media, category: &'static str) -> Self {
        Self {
            media,
            category: Some(AttrValue::Static(category)),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub lang: Language,
    pub entries: Rc<Vec<GalleryEntry>>,
    /// `(data-category, label)` pairs for the filter buttons.
    #[prop_or_default]
    pub categories: Vec<(AttrValue, AttrValue)>,
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let messages = Messages::get(props.lang);
    let lightbox = use_context::<LightboxContext>();
    let filter = use_state(CategoryFilter::default);
    // Every tile takes part in navigation, including filtered-out ones, so
    // tile positions and lightbox indices agree.
    let sequence = use_memo(
        |entries| entries.iter().map(|entry| entry.media.clone()).collect::<Vec<_>>(),
        Rc::clone(&props.entries),
    );

    {
        let filter = filter.clone();
        use_effect_with_deps(
            move |sequence| {
                let registration = exports::register_gallery(
                    Rc::clone(sequence),
                    Callback::from(move |token: String| filter.set(CategoryFilter::parse(&token))),
                );
                move || drop(registration)
            },
            Rc::clone(&sequence),
        );
    }

    let open_at = {
        let sequence = Rc::clone(&sequence);
        Callback::from(move |index: usize| {
            if let Some(lightbox) = &lightbox {
                lightbox.dispatch(LightboxAction::Open {
                    items: Rc::clone(&sequence),
                    index,
                });
            } else {
                log::debug!("gallery rendered outside a lightbox provider");
            }
        })
    };

    let filter_button = |token: AttrValue, label: AttrValue| {
        let selected = CategoryFilter::parse(&token);
        let active = *filter == selected;
        let onclick = {
            let filter = filter.clone();
            Callback::from(move |_: MouseEvent| filter.set(selected.clone()))
        };
        html! {
            <button
                class={classes!("gallery-filter-btn", active.then_some("active"))}
                data-category={token}
                {onclick}
            >
                { label }
            </button>
        }
    };

    let tiles = props.entries.iter().enumerate().map(|(index, entry)| {
        let onclick = {
            let open_at = open_at.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                open_at.emit(index);
            })
        };
        let onkeydown = {
            let open_at = open_at.clone();
            Callback::from(move |e: KeyboardEvent| {
                if e.key() == "Enter" || e.key() == " " {
                    e.prevent_default();
                    open_at.emit(index);
                }
            })
        };
        let visible = filter.matches(entry.category.as_ref().map(|c| c.as_str()));
        let media = match &entry.media {
            Media::Image { src, alt, caption } => html! {
                <LazyImage src={src.clone()} alt={alt.clone()} caption={caption.clone()} />
            },
            Media::Video { src, label, caption } => html! {
                <video
                    src={src.clone()}
                    aria-label={label.clone()}
                    data-caption={caption.clone()}
                    muted={true}
                    preload="metadata"
                />
            },
        };
        html! {
            <div
                class="gallery-item"
                tabindex="0"
                role="button"
                data-category={entry.category.clone()}
                style={(!visible).then_some("display: none")}
                {onclick}
                {onkeydown}
            >
                { media }
            </div>
        }
    });

    html! {
        <div class="gallery">
            if !props.categories.is_empty() {
                <div class="gallery-filters">
                    { filter_button(AttrValue::Static(CategoryFilter::ALL_TOKEN), AttrValue::Static(messages.filter_all)) }
                    { for props.categories.iter().map(|(token, label)| filter_button(token.clone(), label.clone())) }
                </div>
            }
            <div class="gallery-grid">
                { for tiles }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_selector_is_scoped_to_gallery_items() {
        assert_eq!(
            tile_media_selector("/g/1.jpg"),
            ".gallery-item [src=\"/g/1.jpg\"], .gallery-item [data-src=\"/g/1.jpg\"]"
        );
    }
}
