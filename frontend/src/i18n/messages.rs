use super::Language;

/// Interface strings for one language.
pub struct Messages {
    pub clinic_name: &'static str,
    pub nav_home: &'static str,
    pub nav_diseases: &'static str,
    pub nav_gallery: &'static str,
    pub nav_faq: &'static str,
    pub menu_toggle: &'static str,
    pub skip_to_content: &'static str,
    pub language_select: &'static str,
    pub book_whatsapp: &'static str,
    pub whatsapp_greeting: &'static str,
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub services_title: &'static str,
    pub diseases_title: &'static str,
    pub gallery_title: &'static str,
    pub faq_title: &'static str,
    pub faq_search_placeholder: &'static str,
    pub filter_all: &'static str,
    pub no_results: &'static str,
    pub not_found: &'static str,
    pub back_home: &'static str,
}

static AZ: Messages = Messages {
    clinic_name: "Ziyadova Pediatriya",
    nav_home: "Ana səhifə",
    nav_diseases: "Xəstəliklər",
    nav_gallery: "Qalereya",
    nav_faq: "Suallar",
    menu_toggle: "Menyunu aç",
    skip_to_content: "Məzmuna keç",
    language_select: "Dil seçin",
    book_whatsapp: "WhatsApp ilə yazılın",
    whatsapp_greeting: "Salam, görüş üçün rezervasiya etmek istəyirəm",
    hero_title: "Uşağınızın sağlamlığı etibarlı əllərdə",
    hero_subtitle: "Uşaq yoluxucu xəstəlikləri, peyvənd və müayinə",
    services_title: "Xidmətlər",
    diseases_title: "Xəstəliklər haqqında",
    gallery_title: "Qalereya",
    faq_title: "Tez-tez verilən suallar",
    faq_search_placeholder: "Sual axtarın...",
    filter_all: "Hamısı",
    no_results: "Heç nə tapılmadı",
    not_found: "Səhifə tapılmadı",
    back_home: "Ana səhifəyə qayıt",
};

static RU: Messages = Messages {
    clinic_name: "Педиатрия Зиядовой",
    nav_home: "Главная",
    nav_diseases: "Болезни",
    nav_gallery: "Галерея",
    nav_faq: "Вопросы",
    menu_toggle: "Открыть меню",
    skip_to_content: "Перейти к содержимому",
    language_select: "Выберите язык",
    book_whatsapp: "Записаться через WhatsApp",
    whatsapp_greeting: "Здравствуйте, хочу записаться на прием",
    hero_title: "Здоровье вашего ребенка в надежных руках",
    hero_subtitle: "Детские инфекционные болезни, вакцинация и осмотры",
    services_title: "Услуги",
    diseases_title: "О болезнях",
    gallery_title: "Галерея",
    faq_title: "Часто задаваемые вопросы",
    faq_search_placeholder: "Поиск вопроса...",
    filter_all: "Все",
    no_results: "Ничего не найдено",
    not_found: "Страница не найдена",
    back_home: "Вернуться на главную",
};

static EN: Messages = Messages {
    clinic_name: "Ziyadova Pediatrics",
    nav_home: "Home",
    nav_diseases: "Diseases",
    nav_gallery: "Gallery",
    nav_faq: "FAQ",
    menu_toggle: "Open menu",
    skip_to_content: "Skip to content",
    language_select: "Choose language",
    book_whatsapp: "Book via WhatsApp",
    whatsapp_greeting: "Hello, I would like to make an appointment",
    hero_title: "Your child's health in trusted hands",
    hero_subtitle: "Pediatric infectious diseases, vaccination and check-ups",
    services_title: "Services",
    diseases_title: "About diseases",
    gallery_title: "Gallery",
    faq_title: "Frequently asked questions",
    faq_search_placeholder: "Search questions...",
    filter_all: "All",
    no_results: "Nothing found",
    not_found: "Page not found",
    back_home: "Back to home",
};

impl Messages {
    pub fn get(lang: Language) -> &'static Messages {
        match lang {
            Language::Az => &AZ,
            Language::Ru => &RU,
            Language::En => &EN,
        }
    }
}
