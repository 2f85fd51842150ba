use std::rc::Rc;

use yew::prelude::*;

use super::layout::Layout;
use crate::i18n::{Language, Messages};
use crate::widgets::accordion::{AccordionEntry, FaqSection};

fn entries(lang: Language) -> Vec<AccordionEntry> {
    match lang {
        Language::Az => vec![
            AccordionEntry::new("appointment", "Qəbula necə yazılmaq olar?", "WhatsApp vasitəsilə yazın və ya zəng edin, sizə uyğun vaxt təyin edəcəyik.").in_category("visits"),
            AccordionEntry::new("vaccines", "Hansı peyvəndləri edirsiniz?", "Milli peyvənd təqviminə daxil olan bütün peyvəndləri və əlavə peyvəndləri.").in_category("vaccination"),
            AccordionEntry::new("fever", "Uşağın hərarəti qalxanda nə etməli?", "Bol maye verin, hərarət üç gündən çox davam edərsə həkimə müraciət edin.").in_category("symptoms"),
            AccordionEntry::new("home-visit", "Evə çağırış mümkündürmü?", "Bəli, razılaşdırılmış vaxtda evə çağırış mümkündür.").in_category("visits"),
        ],
        Language::Ru => vec![
            AccordionEntry::new("appointment", "Как записаться на прием?", "Напишите в WhatsApp или позвоните, и мы подберем удобное время.").in_category("visits"),
            AccordionEntry::new("vaccines", "Какие прививки вы делаете?", "Все прививки национального календаря и дополнительные вакцины.").in_category("vaccination"),
            AccordionEntry::new("fever", "Что делать при высокой температуре?", "Давайте больше жидкости; если температура держится более трех дней, обратитесь к врачу.").in_category("symptoms"),
            AccordionEntry::new("home-visit", "Возможен ли вызов на дом?", "Да, вызов на дом возможен в согласованное время.").in_category("visits"),
        ],
        Language::En => vec![
            AccordionEntry::new("appointment", "How do I book an appointment?", "Message us on WhatsApp or call, and we will find a time that suits you.").in_category("visits"),
            AccordionEntry::new("vaccines", "Which vaccines do you give?", "Every vaccine in the national schedule, plus optional ones.").in_category("vaccination"),
            AccordionEntry::new("fever", "What should I do when my child has a fever?", "Give plenty of fluids; see a doctor if the fever lasts more than three days.").in_category("symptoms"),
            AccordionEntry::new("home-visit", "Do you make home visits?", "Yes, home visits are available at an agreed time.").in_category("visits"),
        ],
    }
}

fn categories(lang: Language) -> Vec<(AttrValue, AttrValue)> {
    let labels = match lang {
        Language::Az => ["Qəbul", "Peyvənd", "Əlamətlər"],
        Language::Ru => ["Прием", "Вакцинация", "Симптомы"],
        Language::En => ["Visits", "Vaccination", "Symptoms"],
    };
    ["visits", "vaccination", "symptoms"]
        .into_iter()
        .zip(labels)
        .map(|(token, label)| (AttrValue::Static(token), AttrValue::Static(label)))
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct FaqPageProps {
    pub lang: Language,
}

#[function_component(FaqPage)]
pub fn faq_page(props: &FaqPageProps) -> Html {
    let lang = props.lang;
    let messages = Messages::get(lang);
    let entries = use_memo(|lang| Rc::new(entries(*lang)), lang);
    html! {
        <Layout {lang}>
            <section class="faq-section">
                <h1>{ messages.faq_title }</h1>
                <FaqSection key={lang.code()} {lang} entries={(*entries).clone()} categories={categories(lang)} />
            </section>
        </Layout>
    }
}
