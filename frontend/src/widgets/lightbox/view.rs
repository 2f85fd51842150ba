use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, HtmlElement, HtmlImageElement, HtmlVideoElement, KeyboardEvent};
use yew::prelude::*;

use super::gallery::{tile_media_selector, TILE_SELECTOR};
use super::state::{is_backdrop_click, key_command, KeyCommand, LightboxAction, LightboxState, Media};
use crate::error::SiteError;
use crate::exports;
use crate::utils::dom::{self, Listener};

pub type LightboxContext = UseReducerHandle<LightboxState>;

#[derive(Properties, PartialEq)]
pub struct LightboxProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the page's single lightbox: provides it to galleries through context
/// and renders the overlay after the page content.
#[function_component(LightboxProvider)]
pub fn lightbox_provider(props: &LightboxProviderProps) -> Html {
    let lightbox = use_reducer(LightboxState::default);

    {
        let dispatcher = lightbox.dispatcher();
        use_effect_with_deps(
            move |_| {
                let registration = exports::register_lightbox(Callback::from(move |action| {
                    dispatcher.dispatch(action)
                }));
                move || drop(registration)
            },
            (),
        );
    }

    html! {
        <ContextProvider<LightboxContext> context={lightbox.clone()}>
            { for props.children.iter() }
            <LightboxOverlay {lightbox} />
        </ContextProvider<LightboxContext>>
    }
}

fn pause(video: &NodeRef) {
    if let Some(video) = video.cast::<HtmlVideoElement>() {
        if let Err(e) = video.pause() {
            log::debug!("video pause failed: {:?}", e);
        }
    }
}

fn preload(media: &Media) {
    if let Media::Image { src, .. } = media {
        match HtmlImageElement::new() {
            Ok(image) => image.set_src(src),
            Err(e) => log::debug!("preload of {} skipped: {:?}", src, e),
        }
    }
}

/// Hands focus back to the gallery tile showing `src`. Tiles are found by
/// the source attribute of their media, so duplicated sources focus the
/// first match.
fn restore_gallery_focus(src: &str) -> Result<(), SiteError> {
    let selector = tile_media_selector(src);
    let tile = dom::document()?
        .query_selector(&selector)?
        .and_then(|media| media.closest(TILE_SELECTOR).ok().flatten())
        .ok_or_else(|| SiteError::MissingElement(selector.clone()))?;
    if let Ok(tile) = tile.dyn_into::<HtmlElement>() {
        tile.focus()?;
    }
    Ok(())
}

#[derive(Properties, PartialEq)]
struct LightboxOverlayProps {
    lightbox: LightboxContext,
}

#[function_component(LightboxOverlay)]
fn lightbox_overlay(props: &LightboxOverlayProps) -> Html {
    let lightbox = &props.lightbox;
    let overlay_ref = use_node_ref();
    let video_ref = use_node_ref();
    let was_open = use_mut_ref(|| false);
    let is_open = lightbox.is_open();

    // Scroll lock and focus follow the open/closed transitions.
    {
        let overlay_ref = overlay_ref.clone();
        let video_ref = video_ref.clone();
        let closed_src = lightbox.current().map(|m| m.src().clone());
        use_effect_with_deps(
            move |open| {
                let previously_open = std::mem::replace(&mut *was_open.borrow_mut(), *open);
                if *open && !previously_open {
                    dom::set_body_scroll_locked(true);
                    if let Some(overlay) = overlay_ref.cast::<HtmlElement>() {
                        if let Err(e) = overlay.focus() {
                            log::debug!("lightbox focus failed: {:?}", e);
                        }
                    }
                } else if !*open && previously_open {
                    pause(&video_ref);
                    dom::set_body_scroll_locked(false);
                    if let Some(src) = closed_src {
                        if let Err(e) = restore_gallery_focus(&src) {
                            log::debug!("focus not restored: {}", e);
                        }
                    }
                }
                || ()
            },
            is_open,
        );
    }

    // Keyboard handling only exists while the overlay is open.
    {
        let dispatcher = lightbox.dispatcher();
        use_effect_with_deps(
            move |open| {
                let listener = if *open {
                    dom::document()
                        .and_then(|document| {
                            Listener::new(&document, "keydown", move |event: Event| {
                                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                                    return;
                                };
                                match key_command(&event.key()) {
                                    KeyCommand::Dispatch(action) => dispatcher.dispatch(action),
                                    KeyCommand::Suppress => event.prevent_default(),
                                    KeyCommand::Ignore => {}
                                }
                            })
                        })
                        .map_err(|e| log::warn!("lightbox keyboard unavailable: {}", e))
                        .ok()
                } else {
                    None
                };
                move || drop(listener)
            },
            is_open,
        );
    }

    // Stop a playing video when an image takes its place; warm the cache for
    // the next image.
    {
        let video_ref = video_ref.clone();
        let current_is_video = lightbox.current().map(Media::is_video).unwrap_or(false);
        let upcoming = lightbox.upcoming().cloned();
        use_effect_with_deps(
            move |(open, _)| {
                if *open {
                    if !current_is_video {
                        pause(&video_ref);
                    }
                    if let Some(media) = upcoming {
                        preload(&media);
                    }
                }
                || ()
            },
            (is_open, lightbox.index()),
        );
    }

    // Yew delegates listeners to the app root, so `current_target` is never
    // the overlay; compare against its node instead.
    let on_backdrop = {
        let dispatcher = lightbox.dispatcher();
        let overlay_ref = overlay_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target().map(JsValue::from);
            let overlay = overlay_ref.get().map(JsValue::from);
            if is_backdrop_click(target.as_ref(), overlay.as_ref()) {
                dispatcher.dispatch(LightboxAction::Close);
            }
        })
    };
    let dispatch_on_click = |action: LightboxAction| {
        let dispatcher = lightbox.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            dispatcher.dispatch(action.clone());
        })
    };

    let nav_style = (!lightbox.shows_navigation()).then_some("display: none");
    let current = lightbox.current();
    let showing_video = current.map(Media::is_video).unwrap_or(false);
    let (image_src, image_alt) = match current {
        Some(Media::Image { src, alt, .. }) => (Some(src.clone()), alt.clone()),
        _ => (None, AttrValue::Static("")),
    };
    let video_src = match current {
        Some(Media::Video { src, .. }) => Some(src.clone()),
        _ => None,
    };
    let caption = current.map(Media::caption).unwrap_or(AttrValue::Static(""));

    html! {
        <div
            class={classes!("lightbox", is_open.then_some("active"))}
            role="dialog"
            aria-label="Gallery Lightbox"
            aria-modal="true"
            aria-hidden={(!is_open).to_string()}
            tabindex="-1"
            ref={overlay_ref}
            onclick={on_backdrop}
        >
            <div class="lightbox-content">
                <button class="lightbox-close" aria-label="Close lightbox" onclick={dispatch_on_click(LightboxAction::Close)}>{"×"}</button>
                <button class="lightbox-nav lightbox-prev" aria-label="Previous image" style={nav_style} onclick={dispatch_on_click(LightboxAction::Previous)}>{"‹"}</button>
                <button class="lightbox-nav lightbox-next" aria-label="Next image" style={nav_style} onclick={dispatch_on_click(LightboxAction::Next)}>{"›"}</button>
                <img
                    class="lightbox-image"
                    src={image_src}
                    alt={image_alt}
                    style={if showing_video { "display: none" } else { "display: block" }}
                />
                if lightbox.has_video_surface() {
                    <video
                        class="lightbox-video"
                        controls={true}
                        autoplay={true}
                        ref={video_ref}
                        src={video_src}
                        style={if showing_video { "display: block" } else { "display: none" }}
                    />
                }
                <div class="lightbox-caption">{ caption }</div>
            </div>
        </div>
    }
}
