//! Global JavaScript surface.
//!
//! Mounted widgets register themselves here; `install` publishes the
//! `LightboxManager` and `AccordionManager` bundles on `window`, whose
//! functions forward to whatever is currently registered, plus the site
//! utility bundle under each name in `SITE_BUNDLE_NAMES`. Calls made while
//! nothing is registered are ignored.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Object, Reflect};
use web_sys::Element;
use yew::Callback;

use crate::error::SiteError;
use crate::i18n::Language;
use crate::nav::{language_switcher, whatsapp};
use crate::utils::{device, dom, format};
use crate::widgets::lightbox::{LightboxAction, Media};

/// Names the site utility bundle is published under. External page scripts
/// call `ZiyadovaPediatrics.*`.
pub const SITE_BUNDLE_NAMES: [&str; 2] = ["ZiyadovaPediatrics", "ClinicSite"];

#[derive(Debug, Clone, PartialEq)]
pub enum AccordionCommand {
    Toggle(String),
    Open(String),
    Close(String),
    Search(String),
    Category(String),
}

#[derive(Default)]
struct Registry {
    next_id: usize,
    lightbox: Option<(usize, Callback<LightboxAction>)>,
    galleries: Vec<(usize, Rc<Vec<Media>>, Callback<String>)>,
    accordions: Vec<(usize, Callback<AccordionCommand>)>,
}

impl Registry {
    fn allocate(&mut self) -> usize {
        self.next_id += 1;
        self.next_id
    }

    fn remove(&mut self, id: usize) {
        if matches!(self.lightbox, Some((owner, _)) if owner == id) {
            self.lightbox = None;
        }
        self.galleries.retain(|(owner, _, _)| *owner != id);
        self.accordions.retain(|(owner, _)| *owner != id);
    }
}

thread_local! {
    static REGISTRY: RefCell<Registry> = RefCell::new(Registry::default());
}

/// Keeps a widget registered until dropped.
#[must_use]
pub struct Registration {
    id: usize,
}

impl Drop for Registration {
    fn drop(&mut self) {
        REGISTRY.with(|registry| registry.borrow_mut().remove(self.id));
    }
}

pub fn register_lightbox(dispatch: Callback<LightboxAction>) -> Registration {
    REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        let id = registry.allocate();
        registry.lightbox = Some((id, dispatch));
        Registration { id }
    })
}

pub fn register_gallery(items: Rc<Vec<Media>>, on_filter: Callback<String>) -> Registration {
    REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        let id = registry.allocate();
        registry.galleries.push((id, items, on_filter));
        Registration { id }
    })
}

pub fn register_accordion(on_command: Callback<AccordionCommand>) -> Registration {
    REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        let id = registry.allocate();
        registry.accordions.push((id, on_command));
        Registration { id }
    })
}

// Callbacks are cloned out before emitting: an emit can re-render widgets,
// which register and unregister themselves.
fn lightbox_dispatch() -> Option<Callback<LightboxAction>> {
    REGISTRY.with(|registry| registry.borrow().lightbox.as_ref().map(|(_, cb)| cb.clone()))
}

pub fn open_lightbox(index: usize) {
    let gallery = REGISTRY.with(|registry| {
        registry
            .borrow()
            .galleries
            .last()
            .map(|(_, items, _)| Rc::clone(items))
    });
    match (lightbox_dispatch(), gallery) {
        (Some(dispatch), Some(items)) => dispatch.emit(LightboxAction::Open { items, index }),
        _ => log::debug!("openLightbox ignored: no gallery mounted"),
    }
}

pub fn lightbox_command(action: LightboxAction) {
    if let Some(dispatch) = lightbox_dispatch() {
        dispatch.emit(action);
    }
}

pub fn filter_gallery(category: String) {
    let filters: Vec<_> = REGISTRY.with(|registry| {
        registry
            .borrow()
            .galleries
            .iter()
            .map(|(_, _, cb)| cb.clone())
            .collect()
    });
    for filter in filters {
        filter.emit(category.clone());
    }
}

pub fn accordion_command(command: AccordionCommand) {
    let accordions: Vec<_> = REGISTRY.with(|registry| {
        registry
            .borrow()
            .accordions
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect()
    });
    for accordion in accordions {
        accordion.emit(command.clone());
    }
}

fn set_function(target: &Object, name: &str, function: JsValue) -> Result<(), SiteError> {
    Reflect::set(target, &JsValue::from_str(name), &function)?;
    Ok(())
}

fn lightbox_bundle() -> Result<Object, SiteError> {
    let bundle = Object::new();
    set_function(
        &bundle,
        "openLightbox",
        Closure::<dyn Fn(u32)>::new(|index: u32| open_lightbox(index as usize)).into_js_value(),
    )?;
    set_function(
        &bundle,
        "closeLightbox",
        Closure::<dyn Fn()>::new(|| lightbox_command(LightboxAction::Close)).into_js_value(),
    )?;
    set_function(
        &bundle,
        "showNext",
        Closure::<dyn Fn()>::new(|| lightbox_command(LightboxAction::Next)).into_js_value(),
    )?;
    set_function(
        &bundle,
        "showPrevious",
        Closure::<dyn Fn()>::new(|| lightbox_command(LightboxAction::Previous)).into_js_value(),
    )?;
    set_function(
        &bundle,
        "filterGallery",
        Closure::<dyn Fn(String)>::new(filter_gallery).into_js_value(),
    )?;
    Ok(bundle)
}

fn accordion_bundle() -> Result<Object, SiteError> {
    let bundle = Object::new();
    let commands: [(&str, fn(String) -> AccordionCommand); 5] = [
        ("toggleAccordion", AccordionCommand::Toggle),
        ("openAccordion", AccordionCommand::Open),
        ("closeAccordion", AccordionCommand::Close),
        ("filterFAQ", AccordionCommand::Search),
        ("filterFAQByCategory", AccordionCommand::Category),
    ];
    for (name, command) in commands {
        let function = Closure::<dyn Fn(String)>::new(move |arg: String| accordion_command(command(arg)));
        set_function(&bundle, name, function.into_js_value())?;
    }
    Ok(bundle)
}

fn site_bundle() -> Result<Object, SiteError> {
    let bundle = Object::new();
    set_function(
        &bundle,
        "switchLanguage",
        Closure::<dyn Fn(String)>::new(|token: String| match token.parse::<Language>() {
            Ok(lang) => language_switcher::switch_to(lang, None),
            Err(e) => log::warn!("switchLanguage: {}", e),
        })
        .into_js_value(),
    )?;
    set_function(
        &bundle,
        "openWhatsApp",
        Closure::<dyn Fn(Option<String>, Option<String>)>::new(|phone: Option<String>, lang: Option<String>| {
            let lang = lang
                .and_then(|l| l.parse().ok())
                .unwrap_or_else(|| Language::from_path(&dom::current_path()));
            whatsapp::open_whatsapp(phone.as_deref(), lang);
        })
        .into_js_value(),
    )?;
    set_function(
        &bundle,
        "formatPhoneNumber",
        Closure::<dyn Fn(String) -> String>::new(|phone: String| format::format_phone_number(&phone))
            .into_js_value(),
    )?;
    set_function(
        &bundle,
        "validateEmail",
        Closure::<dyn Fn(String) -> bool>::new(|email: String| format::validate_email(&email)).into_js_value(),
    )?;
    set_function(
        &bundle,
        "isInViewport",
        Closure::<dyn Fn(JsValue) -> bool>::new(|element: JsValue| {
            element
                .dyn_into::<Element>()
                .map(|element| dom::is_element_in_viewport(&element))
                .unwrap_or(false)
        })
        .into_js_value(),
    )?;
    set_function(
        &bundle,
        "getDeviceType",
        Closure::<dyn Fn() -> String>::new(|| device::device_type(&dom::user_agent()).as_str().to_string())
            .into_js_value(),
    )?;
    Ok(bundle)
}

/// Publishes the bundles on `window`.
pub fn install() {
    let result = dom::window().and_then(|window| {
        let site = JsValue::from(site_bundle()?);
        Reflect::set(&window, &"LightboxManager".into(), &JsValue::from(lightbox_bundle()?))?;
        Reflect::set(&window, &"AccordionManager".into(), &JsValue::from(accordion_bundle()?))?;
        for name in SITE_BUNDLE_NAMES {
            Reflect::set(&window, &JsValue::from_str(name), &site)?;
        }
        Ok(())
    });
    match result {
        Ok(()) => log::debug!("global bundles installed"),
        Err(e) => log::warn!("global bundles not installed: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn registrations_are_removed_on_drop() {
        let seen = Rc::new(Cell::new(0));
        let registration = {
            let seen = Rc::clone(&seen);
            register_accordion(Callback::from(move |_| seen.set(seen.get() + 1)))
        };
        accordion_command(AccordionCommand::Toggle("q1".into()));
        assert_eq!(seen.get(), 1);
        drop(registration);
        accordion_command(AccordionCommand::Toggle("q1".into()));
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn open_lightbox_uses_latest_gallery() {
        let opened = Rc::new(RefCell::new(None));
        let _lightbox = {
            let opened = Rc::clone(&opened);
            register_lightbox(Callback::from(move |action| *opened.borrow_mut() = Some(action)))
        };
        let items = Rc::new(vec![Media::image("/a.jpg", "a"), Media::image("/b.jpg", "b")]);
        let _gallery = register_gallery(Rc::clone(&items), Callback::noop());

        open_lightbox(1);
        assert_eq!(
            opened.borrow().clone(),
            Some(LightboxAction::Open { items, index: 1 })
        );
    }

    #[test]
    fn site_bundle_keeps_the_page_script_name() {
        assert_eq!(SITE_BUNDLE_NAMES[0], "ZiyadovaPediatrics");
        assert!(SITE_BUNDLE_NAMES.contains(&"ClinicSite"));
    }

    #[test]
    fn lightbox_calls_without_widgets_are_ignored() {
        open_lightbox(0);
        lightbox_command(LightboxAction::Next);
        filter_gallery("all".into());
    }
}
