use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use super::layout::Layout;
use super::not_found::NotFound;
use crate::i18n::diseases::{self, DISEASES};
use crate::i18n::{Language, Messages};
use crate::nav::{Reveal, WhatsAppLink};
use crate::widgets::accordion::{Accordion, AccordionEntry, AccordionMode};
use crate::Route;

fn sections(lang: Language) -> Rc<Vec<AccordionEntry>> {
    let entries = match lang {
        Language::Az => [
            ("symptoms", "Əlamətlər", "Əlamətlər uşağın yaşından asılıdır; müayinə zamanı həkim ətraflı izah edəcək."),
            ("diagnosis", "Diaqnostika", "Diaqnoz müayinə və lazım olduqda laborator analizlər əsasında qoyulur."),
            ("treatment", "Müalicə", "Müalicə planı hər uşaq üçün fərdi hazırlanır."),
        ],
        Language::Ru => [
            ("symptoms", "Симптомы", "Симптомы зависят от возраста ребенка; врач подробно объяснит их на приеме."),
            ("diagnosis", "Диагностика", "Диагноз ставится по результатам осмотра и, при необходимости, анализов."),
            ("treatment", "Лечение", "План лечения составляется индивидуально для каждого ребенка."),
        ],
        Language::En => [
            ("symptoms", "Symptoms", "Symptoms depend on the child's age; the doctor will go through them at the visit."),
            ("diagnosis", "Diagnosis", "Diagnosis is based on the examination and, where needed, lab tests."),
            ("treatment", "Treatment", "Every child gets an individual treatment plan."),
        ],
    };
    Rc::new(
        entries
            .into_iter()
            .enumerate()
            .map(|(index, (id, title, body))| {
                let entry = AccordionEntry::new(id, title, body);
                // symptoms start expanded
                if index == 0 {
                    entry.opened()
                } else {
                    entry
                }
            })
            .collect(),
    )
}

fn summary(lang: Language) -> &'static str {
    match lang {
        Language::Az => "Əlamətlər, diaqnostika və müalicə barədə məlumat üçün həkimlə məsləhətləşin.",
        Language::Ru => "Проконсультируйтесь с врачом о симптомах, диагностике и лечении.",
        Language::En => "Talk to our pediatrician about symptoms, diagnosis and treatment.",
    }
}

#[derive(Properties, PartialEq)]
pub struct DiseaseCardsProps {
    pub lang: Language,
}

/// Links to every disease page, revealed on scroll.
#[function_component(DiseaseCards)]
pub fn disease_cards(props: &DiseaseCardsProps) -> Html {
    let lang = props.lang;
    html! {
        <div class="disease-grid">
            { for DISEASES.iter().map(|disease| html! {
                <Reveal class={classes!("disease-card")}>
                    <Link<Route> to={Route::Disease { lang: lang.code().to_string(), slug: disease.slug(lang).to_string() }}>
                        <h3>{ disease.title(lang) }</h3>
                    </Link<Route>>
                </Reveal>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DiseasesProps {
    pub lang: Language,
}

#[function_component(Diseases)]
pub fn diseases_page(props: &DiseasesProps) -> Html {
    let messages = Messages::get(props.lang);
    html! {
        <Layout lang={props.lang}>
            <section class="diseases">
                <h1>{ messages.diseases_title }</h1>
                <DiseaseCards lang={props.lang} />
            </section>
        </Layout>
    }
}

#[derive(Properties, PartialEq)]
pub struct DiseaseProps {
    pub lang: Language,
    pub slug: AttrValue,
}

#[function_component(Disease)]
pub fn disease_page(props: &DiseaseProps) -> Html {
    let lang = props.lang;
    let Some(disease) = diseases::find_by_slug(&props.slug, lang) else {
        return html! { <NotFound /> };
    };
    html! {
        <Layout {lang}>
            <article class="disease-detail" data-disease={disease.id}>
                <h1>{ disease.title(lang) }</h1>
                <p>{ summary(lang) }</p>
                <Accordion key={lang.code()} entries={sections(lang)} mode={AccordionMode::Independent} />
                <WhatsAppLink {lang} class={classes!("disease-cta")} />
            </article>
        </Layout>
    }
}
