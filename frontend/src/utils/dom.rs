use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Storage, Window,
};

use super::device::{is_in_viewport, Rect};
use crate::error::SiteError;

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::NoDocument)
}

pub fn now_ms() -> f64 {
    web_sys::js_sys::Date::now()
}

fn storage() -> Result<Storage, SiteError> {
    window()?.local_storage()?.ok_or(SiteError::NoStorage)
}

pub fn storage_get(key: &str) -> Result<Option<String>, SiteError> {
    Ok(storage()?.get_item(key)?)
}

pub fn storage_set(key: &str, value: &str) -> Result<(), SiteError> {
    storage()?.set_item(key, value)?;
    Ok(())
}

pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().map_err(SiteError::from))
        .unwrap_or_else(|_| String::from("/"))
}

/// Vertical scroll position of the window, 0 when unavailable.
pub fn scroll_offset() -> f64 {
    window()
        .and_then(|w| w.scroll_y().map_err(SiteError::from))
        .unwrap_or(0.0)
}

pub fn navigate_to(href: &str) -> Result<(), SiteError> {
    window()?.location().set_href(href)?;
    Ok(())
}

pub fn open_in_new_context(url: &str) -> Result<(), SiteError> {
    window()?.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")?;
    Ok(())
}

pub fn user_agent() -> String {
    window()
        .and_then(|w| w.navigator().user_agent().map_err(SiteError::from))
        .unwrap_or_default()
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let style = element.style();
    let result = if value.is_empty() {
        style.remove_property(property).map(|_| ())
    } else {
        style.set_property(property, value)
    };
    if let Err(e) = result {
        log::debug!("could not set {}: {:?}", property, e);
    }
}

/// Locks or restores page scrolling by toggling `overflow` on `<body>`.
pub fn set_body_scroll_locked(locked: bool) {
    match document().map(|d| d.body()) {
        Ok(Some(body)) => set_style(&body, "overflow", if locked { "hidden" } else { "" }),
        _ => log::debug!("no body to lock scrolling on"),
    }
}

pub fn focus_element_by_id(id: &str) -> Result<HtmlElement, SiteError> {
    let element = document()?
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::MissingElement(format!("#{}", id)))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| SiteError::MissingElement(format!("#{}", id)))?;
    element.focus()?;
    Ok(element)
}

pub fn scroll_into_view_smooth(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// `[name="value"]` with the value escaped for a CSS string.
pub fn attribute_selector(name: &str, value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '"' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    format!("[{}=\"{}\"]", name, escaped)
}

/// Event listener that is removed when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, SiteError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Intersection observer that disconnects when dropped.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observer {
    /// Calls `on_enter` with each observed element the first time it
    /// intersects, then stops watching that element.
    pub fn once<F>(
        element: &Element,
        threshold: f64,
        root_margin: Option<&str>,
        mut on_enter: F,
    ) -> Result<Self, SiteError>
    where
        F: FnMut(Element) + 'static,
    {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        let target = entry.target();
                        observer.unobserve(&target);
                        on_enter(target);
                    }
                }
            },
        );
        let options = IntersectionObserverInit::new();
        options.set_threshold(&threshold.into());
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }
        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        observer.observe(element);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Whether `element` currently lies entirely inside the window.
pub fn is_element_in_viewport(element: &Element) -> bool {
    let Ok(window) = window() else {
        return false;
    };
    let size = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    let bounds = element.get_bounding_client_rect();
    let rect = Rect {
        top: bounds.top(),
        left: bounds.left(),
        bottom: bounds.bottom(),
        right: bounds.right(),
    };
    is_in_viewport(rect, size(window.inner_width()), size(window.inner_height()))
}

pub fn intersection_observer_supported() -> bool {
    window()
        .map(|w| web_sys::js_sys::Reflect::has(&w, &"IntersectionObserver".into()).unwrap_or(false))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_selector_escapes_quotes() {
        assert_eq!(attribute_selector("src", "/a.jpg"), "[src=\"/a.jpg\"]");
        assert_eq!(
            attribute_selector("src", "/we\"ird\\.jpg"),
            "[src=\"/we\\\"ird\\\\.jpg\"]"
        );
    }
}
