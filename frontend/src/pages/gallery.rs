use std::rc::Rc;

use yew::prelude::*;

use super::layout::Layout;
use crate::i18n::{Language, Messages};
use crate::widgets::lightbox::{Gallery, GalleryEntry, Media};

fn entries(lang: Language) -> Vec<GalleryEntry> {
    let (reception, room, play, tour, vaccine) = match lang {
        Language::Az => ("Qəbul", "Müayinə otağı", "Oyun guşəsi", "Klinikaya səyahət", "Peyvənd otağı"),
        Language::Ru => ("Ресепшн", "Кабинет осмотра", "Игровой уголок", "Экскурсия по клинике", "Прививочный кабинет"),
        Language::En => ("Reception", "Examination room", "Play corner", "Clinic tour", "Vaccination room"),
    };
    vec![
        GalleryEntry::new(Media::image("/assets/images/gallery/reception.jpg", reception), "clinic"),
        GalleryEntry::new(Media::image("/assets/images/gallery/exam-room.jpg", room), "clinic"),
        GalleryEntry::new(Media::image("/assets/images/gallery/play-corner.jpg", play), "kids"),
        GalleryEntry::new(
            Media::video("/assets/video/clinic-tour.mp4", tour).with_caption(tour),
            "video",
        ),
        GalleryEntry::new(Media::image("/assets/images/gallery/vaccination.jpg", vaccine), "clinic"),
    ]
}

fn categories(lang: Language) -> Vec<(AttrValue, AttrValue)> {
    let labels = match lang {
        Language::Az => ["Klinika", "Uşaqlar", "Video"],
        Language::Ru => ["Клиника", "Дети", "Видео"],
        Language::En => ["Clinic", "Kids", "Video"],
    };
    ["clinic", "kids", "video"]
        .into_iter()
        .zip(labels)
        .map(|(token, label)| (AttrValue::Static(token), AttrValue::Static(label)))
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct GalleryPageProps {
    pub lang: Language,
}

#[function_component(GalleryPage)]
pub fn gallery_page(props: &GalleryPageProps) -> Html {
    let lang = props.lang;
    let messages = Messages::get(lang);
    let entries = use_memo(|lang| Rc::new(entries(*lang)), lang);
    html! {
        <Layout {lang}>
            <section class="gallery-section">
                <h1>{ messages.gallery_title }</h1>
                <Gallery key={lang.code()} {lang} entries={(*entries).clone()} categories={categories(lang)} />
            </section>
        </Layout>
    }
}
