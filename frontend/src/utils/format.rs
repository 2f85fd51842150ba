use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_GROUPS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{3})(\d{3})(\d{2})(\d{2})").expect("phone pattern"));
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// Groups the first ten-digit run as `+994 504 66 22` style. Input without
/// such a run is returned unchanged.
pub fn format_phone_number(phone: &str) -> String {
    PHONE_GROUPS.replace(phone, "+$1 $2 $3 $4").into_owned()
}

pub fn validate_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_phone_digits() {
        assert_eq!(format_phone_number("9945046622"), "+994 504 66 22");
        assert_eq!(format_phone_number("994504662244"), "+994 504 66 2244");
        assert_eq!(format_phone_number("12345"), "12345");
    }

    #[test]
    fn validates_email_shape() {
        assert!(validate_email("info@clinic.az"));
        assert!(!validate_email("info@clinic"));
        assert!(!validate_email("in fo@clinic.az"));
        assert!(!validate_email("@clinic.az"));
    }
}
