use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

static MOBILE_AGENT: Lazy<Regex> = Lazy::new(|| {
    case_insensitive(r"Android|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini")
});
static TABLET_AGENT: Lazy<Regex> = Lazy::new(|| case_insensitive(r"tablet|ipad|playbook|silk"));
static PHONE_AGENT: Lazy<Regex> =
    Lazy::new(|| case_insensitive(r"mobile|android|iphone|ipod|blackberry|opera mini|iemobile"));

fn case_insensitive(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("user agent pattern")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceType {
    pub fn as_str(self) -> &'static str {
        match self {
            DeviceType::Mobile => "mobile",
            DeviceType::Tablet => "tablet",
            DeviceType::Desktop => "desktop",
        }
    }
}

/// Coarse check deciding between the mobile and web WhatsApp endpoints.
pub fn is_mobile_agent(user_agent: &str) -> bool {
    MOBILE_AGENT.is_match(user_agent)
}

pub fn device_type(user_agent: &str) -> DeviceType {
    if TABLET_AGENT.is_match(user_agent) || is_android_tablet(user_agent) {
        return DeviceType::Tablet;
    }
    if PHONE_AGENT.is_match(user_agent) {
        return DeviceType::Mobile;
    }
    DeviceType::Desktop
}

// Android agents that never mention "mobi" after the platform token.
fn is_android_tablet(user_agent: &str) -> bool {
    let lower = user_agent.to_lowercase();
    lower
        .match_indices("android")
        .any(|(pos, _)| !lower[pos..].contains("mobi"))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

/// True when the rectangle lies entirely inside a viewport of the given size.
pub fn is_in_viewport(rect: Rect, viewport_width: f64, viewport_height: f64) -> bool {
    rect.top >= 0.0
        && rect.left >= 0.0
        && rect.bottom <= viewport_height
        && rect.right <= viewport_width
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148";
    const ANDROID_PHONE: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Chrome/120.0 Mobile Safari/537.36";
    const ANDROID_TABLET: &str = "Mozilla/5.0 (Linux; Android 13; SM-X700) AppleWebKit/537.36 Chrome/120.0 Safari/537.36";
    const IPAD: &str = "Mozilla/5.0 (iPad; CPU OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
    const DESKTOP: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/120.0 Safari/537.36";

    #[test]
    fn detects_mobile_agents() {
        assert!(is_mobile_agent(IPHONE));
        assert!(is_mobile_agent(ANDROID_PHONE));
        assert!(is_mobile_agent(IPAD));
        assert!(is_mobile_agent("opera mini/8.0"));
        assert!(!is_mobile_agent(DESKTOP));
    }

    #[test]
    fn classifies_device_types() {
        assert_eq!(device_type(IPHONE), DeviceType::Mobile);
        assert_eq!(device_type(ANDROID_PHONE), DeviceType::Mobile);
        assert_eq!(device_type(ANDROID_TABLET), DeviceType::Tablet);
        assert_eq!(device_type(IPAD), DeviceType::Tablet);
        assert_eq!(device_type(DESKTOP), DeviceType::Desktop);
    }

    #[test]
    fn viewport_containment() {
        let rect = Rect { top: 10.0, left: 0.0, bottom: 200.0, right: 300.0 };
        assert!(is_in_viewport(rect, 300.0, 800.0));
        assert!(!is_in_viewport(rect, 299.0, 800.0));
        assert!(!is_in_viewport(Rect { top: -1.0, ..rect }, 1024.0, 800.0));
    }
}
