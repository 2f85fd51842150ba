use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::paths::equivalent_path;
use crate::i18n::{Language, Messages};
use crate::utils::dom;
use crate::Route;

/// Remembers `target` and moves to the equivalent page in that language.
/// Routable destinations go through the router; anything else is a full
/// navigation.
pub fn switch_to(target: Language, navigator: Option<Navigator>) {
    let path = dom::current_path();
    let from = Language::from_path(&path);
    target.store_preference();

    let destination = equivalent_path(&path, from, target);
    log::info!("switching language {} -> {}: {}", from, target, destination);
    match (navigator, Route::recognize(&destination)) {
        (Some(navigator), Some(route)) if route != Route::NotFound => navigator.push(&route),
        _ => {
            if let Err(e) = dom::navigate_to(&destination) {
                log::warn!("language switch to {} failed: {}", destination, e);
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageSwitcherProps {
    pub lang: Language,
}

#[function_component(LanguageSwitcher)]
pub fn language_switcher(props: &LanguageSwitcherProps) -> Html {
    let navigator = use_navigator();
    let current = props.lang;
    // The stored preference only pre-selects the dropdown.
    let preselected = use_memo(
        |current| Language::stored_preference().unwrap_or(*current),
        current,
    );
    let messages = Messages::get(current);

    let buttons = Language::ALL.iter().map(|&lang| {
        let onclick = {
            let navigator = navigator.clone();
            Callback::from(move |_: MouseEvent| switch_to(lang, navigator.clone()))
        };
        html! {
            <button
                class={classes!("lang-btn", (lang == current).then_some("active"))}
                data-lang={lang.code()}
                aria-pressed={(lang == current).to_string()}
                {onclick}
            >
                { lang.label() }
            </button>
        }
    });

    let onchange = {
        let navigator = navigator.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<Language>() {
                Ok(lang) => switch_to(lang, navigator.clone()),
                Err(e) => log::warn!("language switcher: {}", e),
            }
        })
    };

    html! {
        <div class="language-switcher">
            <div class="lang-buttons">
                { for buttons }
            </div>
            <select id="language-switcher" aria-label={messages.language_select} {onchange}>
                { for Language::ALL.iter().map(|&lang| html! {
                    <option value={lang.code()} selected={lang == *preselected}>{ lang.label() }</option>
                }) }
            </select>
        </div>
    }
}
