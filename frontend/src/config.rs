use log::Level;

pub const DEFAULT_WHATSAPP_PHONE: &str = "994504662244";

/// Local storage key holding the last language picked in the switcher.
pub const LANGUAGE_STORAGE_KEY: &str = "preferred-language";

pub const ACCORDION_TRANSITION: &str = "max-height 0.3s ease-in-out";
pub const ACCORDION_TRANSITION_MS: u32 = 300;

pub const FAQ_SEARCH_DEBOUNCE_MS: u32 = 300;

// Header slides away once the page is scrolled down past this offset
pub const HEADER_HIDE_OFFSET: f64 = 100.0;
pub const HEADER_SCROLL_THROTTLE_MS: u32 = 50;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub fn whatsapp_phone() -> &'static str {
    option_env!("CLINIC_WHATSAPP_PHONE").unwrap_or(DEFAULT_WHATSAPP_PHONE)
}

pub fn log_level() -> Level {
    if let Some(level) = option_env!("CLINIC_LOG_LEVEL").and_then(|l| l.parse().ok()) {
        return level;
    }
    if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Warn
    }
}
