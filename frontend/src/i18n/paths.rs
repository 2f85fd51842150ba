use super::diseases;
use super::Language;

const DISEASES_SEGMENT: &str = "diseases/";

/// Path of the page equivalent to `path` in language `to`.
///
/// The leading language segment is replaced. Disease detail pages have their
/// slug translated through the disease table; a slug the table doesn't know,
/// or a path that isn't under `from`, lands on the root page of `to`.
pub fn equivalent_path(path: &str, from: Language, to: Language) -> String {
    let Some(rest) = strip_language(path, from) else {
        return to.root_path();
    };

    let Some(after) = rest.strip_prefix(DISEASES_SEGMENT) else {
        return format!("/{}/{}", to.code(), rest);
    };

    let (slug, tail) = match after.find('/') {
        Some(pos) => after.split_at(pos),
        None => (after, ""),
    };
    if slug.is_empty() {
        return format!("/{}/{}", to.code(), rest);
    }

    match diseases::find_by_slug(slug, from) {
        Some(disease) => format!("{}{}", disease_path(to, disease.slug(to)), tail),
        None => to.root_path(),
    }
}

// Returns what follows `/{lang}/`; `/{lang}` alone is the language root.
fn strip_language(path: &str, lang: Language) -> Option<&str> {
    let after = path.strip_prefix('/')?.strip_prefix(lang.code())?;
    if after.is_empty() {
        return Some("");
    }
    after.strip_prefix('/')
}

/// Path of a disease page in the given language.
pub fn disease_path(lang: Language, slug: &str) -> String {
    format!("/{}/{}{}", lang.code(), DISEASES_SEGMENT, slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::diseases::DISEASES;

    #[test]
    fn swaps_language_segment() {
        assert_eq!(equivalent_path("/az/gallery", Language::Az, Language::En), "/en/gallery");
        assert_eq!(equivalent_path("/ru/", Language::Ru, Language::Az), "/az/");
        assert_eq!(equivalent_path("/en", Language::En, Language::Ru), "/ru/");
    }

    #[test]
    fn translates_disease_slug() {
        assert_eq!(
            equivalent_path("/az/diseases/sut-intoleransi", Language::Az, Language::Ru),
            "/ru/diseases/neperenosimost-moloka"
        );
        assert_eq!(
            equivalent_path("/en/diseases/milk-intolerance/", Language::En, Language::Az),
            "/az/diseases/sut-intoleransi/"
        );
    }

    #[test]
    fn every_table_entry_maps_between_all_languages() {
        for disease in DISEASES {
            for from in Language::ALL {
                for to in Language::ALL {
                    let path = disease_path(from, disease.slug(from));
                    let mapped = equivalent_path(&path, from, to);
                    let expected_slug = diseases::find_by_slug(disease.slug(from), from)
                        .map(|d| d.slug(to))
                        .unwrap();
                    assert_eq!(mapped, disease_path(to, expected_slug));
                }
            }
        }
    }

    #[test]
    fn unknown_disease_falls_back_to_language_root() {
        assert_eq!(
            equivalent_path("/az/diseases/qizilca", Language::Az, Language::En),
            "/en/"
        );
        // slug from another language is not in the source language column
        assert_eq!(
            equivalent_path("/az/diseases/milk-intolerance", Language::Az, Language::Ru),
            "/ru/"
        );
    }

    #[test]
    fn path_outside_source_language_falls_back() {
        assert_eq!(equivalent_path("/", Language::Az, Language::En), "/en/");
        assert_eq!(equivalent_path("/ru/faq", Language::Az, Language::En), "/en/");
        assert_eq!(equivalent_path("/azure/", Language::Az, Language::En), "/en/");
    }

    #[test]
    fn diseases_index_is_kept() {
        assert_eq!(equivalent_path("/az/diseases/", Language::Az, Language::En), "/en/diseases/");
    }
}
