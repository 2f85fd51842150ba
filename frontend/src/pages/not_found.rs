use yew::prelude::*;
use yew_router::prelude::*;

use super::layout::Layout;
use crate::i18n::{Language, Messages};
use crate::utils::dom;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let lang = Language::from_path(&dom::current_path());
    let messages = Messages::get(lang);
    html! {
        <Layout {lang}>
            <section class="not-found">
                <h1>{ messages.not_found }</h1>
                <Link<Route> to={Route::Home { lang: lang.code().to_string() }}>
                    { messages.back_home }
                </Link<Route>>
            </section>
        </Layout>
    }
}
