use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod error;
mod exports;
mod i18n;
mod nav;
mod pages;
mod utils;
mod widgets;

use i18n::Language;
use pages::diseases::{Disease, Diseases};
use pages::faq::FaqPage;
use pages::gallery::GalleryPage;
use pages::home::Home;
use pages::not_found::NotFound;
use widgets::lightbox::LightboxProvider;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/:lang")]
    Home { lang: String },
    #[at("/:lang/diseases")]
    Diseases { lang: String },
    #[at("/:lang/diseases/:slug")]
    Disease { lang: String, slug: String },
    #[at("/:lang/gallery")]
    Gallery { lang: String },
    #[at("/:lang/faq")]
    Faq { lang: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    let lang_of = |code: &str| code.parse::<Language>().ok();
    match route {
        Route::Root => html! {
            <Redirect<Route> to={Route::Home { lang: Language::default().code().to_string() }} />
        },
        Route::Home { lang } => match lang_of(&lang) {
            Some(lang) => html! { <Home {lang} /> },
            None => html! { <NotFound /> },
        },
        Route::Diseases { lang } => match lang_of(&lang) {
            Some(lang) => html! { <Diseases {lang} /> },
            None => html! { <NotFound /> },
        },
        Route::Disease { lang, slug } => match lang_of(&lang) {
            Some(lang) => html! { <Disease {lang} {slug} /> },
            None => html! { <NotFound /> },
        },
        Route::Gallery { lang } => match lang_of(&lang) {
            Some(lang) => html! { <GalleryPage {lang} /> },
            None => html! { <NotFound /> },
        },
        Route::Faq { lang } => match lang_of(&lang) {
            Some(lang) => html! { <FaqPage {lang} /> },
            None => html! { <NotFound /> },
        },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <LightboxProvider>
                <Switch<Route> render={switch} />
            </LightboxProvider>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    exports::install();
    log::info!("clinic frontend starting");
    yew::Renderer::<App>::new().render();
}
