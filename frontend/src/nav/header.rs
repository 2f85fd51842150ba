use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent, Node};
use yew::prelude::*;
use yew_router::prelude::*;

use super::a11y::trap_tab;
use super::language_switcher::LanguageSwitcher;
use super::menu::{is_link_active, is_outside_click};
use super::scroll::HeaderScroll;
use super::whatsapp::WhatsAppLink;
use crate::config;
use crate::i18n::{Language, Messages};
use crate::utils::dom::{self, Listener};
use crate::utils::timing::{Throttle, ThrottleDecision};
use crate::Route;

// Scroll handling state owned by the window listener. The trailing timer
// holds only a weak handle back to it.
struct ScrollTracker {
    scroll: HeaderScroll,
    throttle: Throttle,
    trailing: Option<Timeout>,
}

fn nav_routes(lang: Language) -> [(Route, &'static str); 4] {
    let messages = Messages::get(lang);
    let lang = lang.code().to_string();
    [
        (Route::Home { lang: lang.clone() }, messages.nav_home),
        (Route::Diseases { lang: lang.clone() }, messages.nav_diseases),
        (Route::Gallery { lang: lang.clone() }, messages.nav_gallery),
        (Route::Faq { lang }, messages.nav_faq),
    ]
}

fn contains(container: &NodeRef, target: Option<&Node>) -> bool {
    container
        .cast::<Node>()
        .map(|node| node.contains(target))
        .unwrap_or(false)
}

// Clicks on links inside the menu close it.
fn is_link_click(e: &MouseEvent) -> bool {
    e.target_dyn_into::<Element>()
        .and_then(|el| el.closest("a").ok().flatten())
        .is_some()
}

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub lang: Language,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let lang = props.lang;
    let messages = Messages::get(lang);
    let location = use_location();
    let current_path = location
        .map(|l| l.path().to_string())
        .unwrap_or_else(dom::current_path);

    let menu_open = use_state_eq(|| false);
    let header_hidden = use_state_eq(|| false);
    let menu_ref = use_node_ref();
    let toggle_ref = use_node_ref();

    // Outside clicks close the menu; the listener only exists while it is open.
    let open_now = *menu_open;
    {
        let menu_open = menu_open.clone();
        let menu_ref = menu_ref.clone();
        let toggle_ref = toggle_ref.clone();
        use_effect_with_deps(
            move |open| {
                let listener = if *open {
                    dom::document()
                        .and_then(|document| {
                            Listener::new(&document, "click", move |event: Event| {
                                let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                                let in_menu = contains(&menu_ref, target.as_ref());
                                let in_toggle = contains(&toggle_ref, target.as_ref());
                                if is_outside_click(in_menu, in_toggle) {
                                    menu_open.set(false);
                                }
                            })
                        })
                        .map_err(|e| log::debug!("outside-click listener failed: {}", e))
                        .ok()
                } else {
                    None
                };
                move || drop(listener)
            },
            open_now,
        );
    }

    // Header slides away while scrolling down.
    {
        let header_hidden = header_hidden.clone();
        use_effect_with_deps(
            move |_| {
                let tracker = Rc::new(RefCell::new(ScrollTracker {
                    scroll: HeaderScroll::default(),
                    throttle: Throttle::new(config::HEADER_SCROLL_THROTTLE_MS),
                    trailing: None,
                }));
                let listener = dom::window()
                    .and_then(|window| {
                        Listener::new(&window, "scroll", move |_| {
                            let mut current = tracker.borrow_mut();
                            match current.throttle.call(dom::now_ms()) {
                                ThrottleDecision::Run => {
                                    // a trailing run from an earlier window is stale now
                                    drop(current.trailing.take());
                                    header_hidden.set(current.scroll.update(dom::scroll_offset()));
                                }
                                ThrottleDecision::Defer(wait_ms) => {
                                    let weak = Rc::downgrade(&tracker);
                                    let header_hidden = header_hidden.clone();
                                    current.trailing = Some(Timeout::new(wait_ms, move || {
                                        let Some(tracker) = weak.upgrade() else {
                                            return;
                                        };
                                        let hidden = {
                                            let mut current = tracker.borrow_mut();
                                            current.throttle.run_trailing(dom::now_ms());
                                            current.scroll.update(dom::scroll_offset())
                                        };
                                        header_hidden.set(hidden);
                                    }));
                                }
                                ThrottleDecision::Skip => {}
                            }
                        })
                    })
                    .map_err(|e| log::debug!("scroll listener failed: {}", e))
                    .ok();
                move || drop(listener)
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(!*menu_open))
    };
    let on_toggle_click = toggle_menu.reform(|_: MouseEvent| ());
    let on_toggle_key = {
        let toggle_menu = toggle_menu.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                toggle_menu.emit(());
            }
        })
    };
    let close_on_link = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            if is_link_click(&e) {
                menu_open.set(false);
            }
        })
    };
    let on_menu_key = {
        let menu_ref = menu_ref.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: KeyboardEvent| {
            if !*menu_open {
                return;
            }
            if let Some(menu) = menu_ref.cast::<Element>() {
                if let Err(err) = trap_tab(&menu, &e) {
                    log::debug!("focus trap: {}", err);
                }
            }
        })
    };

    let links = |link_class: &'static str| {
        nav_routes(lang)
            .into_iter()
            .map(|(route, label)| {
                let active = is_link_active(&current_path, &route.to_path());
                html! {
                    <Link<Route> to={route} classes={classes!(link_class, active.then_some("active"))}>
                        { label }
                    </Link<Route>>
                }
            })
            .collect::<Html>()
    };

    html! {
        <header
            class={classes!("header", header_hidden.then_some("header-hidden"))}
            style={if *header_hidden { "transform: translateY(-100%)" } else { "transform: translateY(0)" }}
        >
            <div class="header-inner">
                <Link<Route> to={Route::Home { lang: lang.code().to_string() }} classes={classes!("logo")}>
                    { messages.clinic_name }
                </Link<Route>>
                <nav class="nav" aria-label="Main" onclick={close_on_link.clone()}>
                    { links("nav-link") }
                </nav>
                <LanguageSwitcher {lang} />
                <WhatsAppLink {lang} class={classes!("header-cta")} />
                <button
                    class="mobile-menu-toggle"
                    aria-controls="mobile-menu"
                    aria-expanded={(*menu_open).to_string()}
                    aria-label={messages.menu_toggle}
                    ref={toggle_ref}
                    onclick={on_toggle_click}
                    onkeydown={on_toggle_key}
                >
                    <span class="hamburger" aria-hidden="true"></span>
                </button>
            </div>
            <div
                id="mobile-menu"
                class={classes!("mobile-menu", menu_open.then_some("active"))}
                ref={menu_ref}
                onclick={close_on_link}
                onkeydown={on_menu_key}
            >
                { links("mobile-nav-link") }
                <WhatsAppLink {lang} class={classes!("mobile-cta")} />
            </div>
        </header>
    }
}
