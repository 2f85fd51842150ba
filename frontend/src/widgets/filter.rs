/// Category selection shared by the gallery and FAQ filter buttons.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub const ALL_TOKEN: &'static str = "all";

    /// Parses a `data-category` token; `"all"` selects everything.
    pub fn parse(token: &str) -> Self {
        if token == Self::ALL_TOKEN {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(token.to_string())
        }
    }

    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => category == Some(wanted.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_everything() {
        let filter = CategoryFilter::parse("all");
        assert_eq!(filter, CategoryFilter::All);
        assert!(filter.matches(None));
        assert!(filter.matches(Some("video")));
    }

    #[test]
    fn category_matches_exactly() {
        let filter = CategoryFilter::parse("clinic");
        assert!(filter.matches(Some("clinic")));
        assert!(!filter.matches(Some("Clinic")));
        assert!(!filter.matches(None));
        assert_eq!(filter, CategoryFilter::Only("clinic".into()));
    }
}
