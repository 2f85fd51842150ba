use super::Language;

/// A disease detail page, keyed by a canonical id with one slug and title
/// per language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disease {
    pub id: &'static str,
    slugs: [&'static str; 3],
    titles: [&'static str; 3],
}

impl Disease {
    pub fn slug(&self, lang: Language) -> &'static str {
        self.slugs[index(lang)]
    }

    pub fn title(&self, lang: Language) -> &'static str {
        self.titles[index(lang)]
    }
}

fn index(lang: Language) -> usize {
    match lang {
        Language::Az => 0,
        Language::Ru => 1,
        Language::En => 2,
    }
}

// Order matters: two ids share their ru/en slugs, and slug lookups return the
// first entry.
pub static DISEASES: &[Disease] = &[
    Disease {
        id: "sut-intoleransi",
        slugs: ["sut-intoleransi", "neperenosimost-moloka", "milk-intolerance"],
        titles: ["Süd intoleransı", "Непереносимость молока", "Milk intolerance"],
    },
    Disease {
        id: "usaq-yoluxucu-xestelikler",
        slugs: [
            "usaq-yoluxucu-xestelikler",
            "infekcionnye-bolezni-detej",
            "pediatric-infectious-diseases",
        ],
        titles: [
            "Uşaq yoluxucu xəstəlikləri",
            "Инфекционные болезни детей",
            "Pediatric infectious diseases",
        ],
    },
    Disease {
        id: "sepgili-infeksion-xestelikler",
        slugs: [
            "sepgili-infeksion-xestelikler",
            "temperaturnye-infekcionnye-bolezni",
            "febrile-infectious-diseases",
        ],
        titles: [
            "Səpgili infeksion xəstəliklər",
            "Инфекционные болезни с сыпью",
            "Febrile infectious diseases",
        ],
    },
    Disease {
        id: "anadangelme-infeksion-xestelikler",
        slugs: [
            "anadangelme-infeksion-xestelikler",
            "vrozhdennye-infekcionnye-bolezni",
            "congenital-infectious-diseases",
        ],
        titles: [
            "Anadangəlmə infeksion xəstəliklər",
            "Врожденные инфекционные болезни",
            "Congenital infectious diseases",
        ],
    },
    Disease {
        id: "rutin-peyvend-cedvelleri",
        slugs: [
            "rutin-peyvend-cedvelleri",
            "rutinnye-shemy-vakcinacii",
            "routine-vaccination-schedules",
        ],
        titles: [
            "Rutin peyvənd cədvəlləri",
            "Рутинные схемы вакцинации",
            "Routine vaccination schedules",
        ],
    },
    Disease {
        id: "yoluxucu-xestelikler",
        slugs: [
            "yoluxucu-xestelikler",
            "infekcionnye-bolezni-detej",
            "pediatric-infectious-diseases",
        ],
        titles: ["Yoluxucu xəstəliklər", "Инфекционные болезни", "Infectious diseases"],
    },
];

pub fn find_by_slug(slug: &str, lang: Language) -> Option<&'static Disease> {
    DISEASES.iter().find(|d| d.slug(lang) == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_id_is_the_azerbaijani_slug() {
        for disease in DISEASES {
            assert_eq!(disease.id, disease.slug(Language::Az));
        }
    }

    #[test]
    fn shared_slug_resolves_to_first_entry() {
        let disease = find_by_slug("infekcionnye-bolezni-detej", Language::Ru).unwrap();
        assert_eq!(disease.id, "usaq-yoluxucu-xestelikler");
    }

    #[test]
    fn slug_lookup_is_per_language() {
        assert!(find_by_slug("milk-intolerance", Language::Ru).is_none());
        assert_eq!(
            find_by_slug("milk-intolerance", Language::En).map(|d| d.id),
            Some("sut-intoleransi")
        );
        assert_eq!(
            find_by_slug("rutin-peyvend-cedvelleri", Language::Az).map(|d| d.slug(Language::En)),
            Some("routine-vaccination-schedules")
        );
    }
}
