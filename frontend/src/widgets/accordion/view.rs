use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{HtmlElement, HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use super::state::{AccordionAction, AccordionEntry, AccordionMode, AccordionState};
use crate::config;
use crate::exports::{self, AccordionCommand};
use crate::i18n::{Language, Messages};
use crate::utils::dom;
use crate::utils::timing::use_debounced_callback;
use crate::widgets::filter::CategoryFilter;

#[derive(Properties, PartialEq)]
struct AccordionItemProps {
    entry: AccordionEntry,
    open: bool,
    visible: bool,
    on_toggle: Callback<()>,
}

#[function_component(AccordionItem)]
fn accordion_item(props: &AccordionItemProps) -> Html {
    let content_ref = use_node_ref();

    // Height animation: open to the natural content height, close to zero and
    // drop the transition once it has played.
    {
        let content_ref = content_ref.clone();
        use_effect_with_deps(
            move |open| {
                let mut clear_transition = None;
                if let Some(content) = content_ref.cast::<HtmlElement>() {
                    if *open {
                        let height = content.scroll_height();
                        dom::set_style(&content, "max-height", &format!("{}px", height));
                        dom::set_style(&content, "transition", config::ACCORDION_TRANSITION);
                    } else {
                        dom::set_style(&content, "max-height", "0px");
                        clear_transition = Some(Timeout::new(config::ACCORDION_TRANSITION_MS, move || {
                            dom::set_style(&content, "transition", "");
                        }));
                    }
                }
                move || drop(clear_transition)
            },
            props.open,
        );
    }

    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };
    let onkeydown = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                on_toggle.emit(());
            }
        })
    };

    let content_id = format!("content-accordion-{}", props.entry.id);
    let category = props.entry.category.clone();
    html! {
        <div
            id={props.entry.id.clone()}
            class={classes!("accordion-item", props.open.then_some("active"))}
            data-category={category}
            style={(!props.visible).then_some("display: none")}
        >
            <div
                class="accordion-header"
                role="button"
                tabindex="0"
                aria-expanded={props.open.to_string()}
                aria-controls={content_id.clone()}
                {onclick}
                {onkeydown}
            >
                <span class="accordion-title">{ props.entry.title.clone() }</span>
                <span class="accordion-icon" aria-hidden="true">{ if props.open { "−" } else { "+" } }</span>
            </div>
            <div id={content_id} class="accordion-content" ref={content_ref}>
                <div class="accordion-body">{ props.entry.body.clone() }</div>
            </div>
        </div>
    }
}

fn index_of(entries: &[AccordionEntry], id: &str) -> Option<usize> {
    entries.iter().position(|entry| entry.id.as_str() == id)
}

/// Accordion state bound to the global `AccordionManager` bundle for as long
/// as the component is mounted.
#[hook]
fn use_accordion(entries: Rc<Vec<AccordionEntry>>, mode: AccordionMode) -> UseReducerHandle<AccordionState> {
    let state = {
        let entries = Rc::clone(&entries);
        use_reducer(move || AccordionState::new(&entries, mode))
    };

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |entries| {
                let entries = Rc::clone(entries);
                let registration = exports::register_accordion(Callback::from(move |command: AccordionCommand| {
                    let action = match command {
                        AccordionCommand::Toggle(id) => index_of(&entries, &id).map(AccordionAction::Toggle),
                        AccordionCommand::Open(id) => index_of(&entries, &id).map(AccordionAction::Open),
                        AccordionCommand::Close(id) => index_of(&entries, &id).map(AccordionAction::Close),
                        AccordionCommand::Search(term) => Some(AccordionAction::Search(term)),
                        AccordionCommand::Category(token) => {
                            Some(AccordionAction::Category(CategoryFilter::parse(&token)))
                        }
                    };
                    if let Some(action) = action {
                        dispatcher.dispatch(action);
                    }
                }));
                move || drop(registration)
            },
            entries,
        );
    }

    state
}

fn render_items(entries: &[AccordionEntry], state: &UseReducerHandle<AccordionState>) -> Html {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let on_toggle = {
                let state = state.clone();
                Callback::from(move |_: ()| state.dispatch(AccordionAction::Toggle(index)))
            };
            html! {
                <AccordionItem
                    key={entry.id.to_string()}
                    entry={entry.clone()}
                    open={state.is_open(index)}
                    visible={state.filter().matches(entry)}
                    {on_toggle}
                />
            }
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct AccordionProps {
    pub entries: Rc<Vec<AccordionEntry>>,
    #[prop_or_default]
    pub mode: AccordionMode,
}

#[function_component(Accordion)]
pub fn accordion(props: &AccordionProps) -> Html {
    let state = use_accordion(Rc::clone(&props.entries), props.mode);
    html! {
        <div class="accordion">
            { render_items(&props.entries, &state) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqSectionProps {
    pub lang: Language,
    pub entries: Rc<Vec<AccordionEntry>>,
    /// `(data-category, label)` pairs for the category buttons.
    #[prop_or_default]
    pub categories: Vec<(AttrValue, AttrValue)>,
    #[prop_or_default]
    pub mode: AccordionMode,
}

/// Accordion with a debounced search box and category buttons.
#[function_component(FaqSection)]
pub fn faq_section(props: &FaqSectionProps) -> Html {
    let messages = Messages::get(props.lang);
    let state = use_accordion(Rc::clone(&props.entries), props.mode);

    let search = {
        let state = state.clone();
        use_debounced_callback(
            config::FAQ_SEARCH_DEBOUNCE_MS,
            Callback::from(move |term: String| state.dispatch(AccordionAction::Search(term))),
        )
    };
    let oninput = Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        search.emit(input.value());
    });

    let category_button = |token: AttrValue, label: AttrValue| {
        let selected = CategoryFilter::parse(&token);
        let active = *state.filter().category() == selected;
        let onclick = {
            let state = state.clone();
            Callback::from(move |_: MouseEvent| state.dispatch(AccordionAction::Category(selected.clone())))
        };
        html! {
            <button
                class={classes!("faq-category-btn", active.then_some("active"))}
                data-category={token}
                {onclick}
            >
                { label }
            </button>
        }
    };

    let any_visible = props.entries.iter().any(|entry| state.filter().matches(entry));

    html! {
        <div class="faq">
            <div class="faq-controls">
                <input
                    type="search"
                    class="faq-search"
                    placeholder={messages.faq_search_placeholder}
                    aria-label={messages.faq_search_placeholder}
                    {oninput}
                />
                if !props.categories.is_empty() {
                    <div class="faq-categories">
                        { category_button(AttrValue::Static(CategoryFilter::ALL_TOKEN), AttrValue::Static(messages.filter_all)) }
                        { for props.categories.iter().map(|(token, label)| category_button(token.clone(), label.clone())) }
                    </div>
                }
            </div>
            <div class="accordion">
                { render_items(&props.entries, &state) }
            </div>
            if !any_visible {
                <p class="faq-empty">{ messages.no_results }</p>
            }
        </div>
    }
}
