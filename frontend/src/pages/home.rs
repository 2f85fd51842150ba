use yew::prelude::*;
use yew_router::prelude::*;

use super::diseases::DiseaseCards;
use super::layout::Layout;
use crate::i18n::{Language, Messages};
use crate::nav::{AnchorLink, Reveal, WhatsAppLink};
use crate::Route;

fn services(lang: Language) -> [(&'static str, &'static str); 3] {
    match lang {
        Language::Az => [
            ("Müayinə", "Yenidoğulmuşdan yeniyetməyə qədər uşaqların müayinəsi."),
            ("Peyvənd", "Milli təqvimə uyğun peyvəndləmə və məsləhət."),
            ("İnfeksiyalar", "Uşaq yoluxucu xəstəliklərinin diaqnostikası və müalicəsi."),
        ],
        Language::Ru => [
            ("Осмотр", "Осмотр детей от новорожденных до подростков."),
            ("Вакцинация", "Прививки по национальному календарю и консультации."),
            ("Инфекции", "Диагностика и лечение детских инфекционных болезней."),
        ],
        Language::En => [
            ("Check-ups", "Examinations for children from newborns to teenagers."),
            ("Vaccination", "Immunisation following the national schedule, with counselling."),
            ("Infections", "Diagnosis and treatment of pediatric infectious diseases."),
        ],
    }
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub lang: Language,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let lang = props.lang;
    let messages = Messages::get(lang);

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <Layout {lang}>
            <section class="hero">
                <h1>{ messages.hero_title }</h1>
                <p>{ messages.hero_subtitle }</p>
                <div class="hero-cta-group">
                    <WhatsAppLink {lang} class={classes!("hero-cta")} />
                    <AnchorLink target="services" class={classes!("hero-more")}>{ messages.services_title }</AnchorLink>
                </div>
            </section>

            <section id="services" class="services">
                <h2>{ messages.services_title }</h2>
                <div class="services-grid">
                    { for services(lang).into_iter().map(|(title, text)| html! {
                        <Reveal class={classes!("service-card")}>
                            <h3>{ title }</h3>
                            <p>{ text }</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="diseases">
                <h2>{ messages.diseases_title }</h2>
                <DiseaseCards {lang} />
            </section>

            <section class="gallery-teaser">
                <Link<Route> to={Route::Gallery { lang: lang.code().to_string() }} classes={classes!("card")}>
                    { messages.gallery_title }
                </Link<Route>>
                <Link<Route> to={Route::Faq { lang: lang.code().to_string() }} classes={classes!("card")}>
                    { messages.faq_title }
                </Link<Route>>
            </section>
        </Layout>
    }
}
