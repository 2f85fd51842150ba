use yew::prelude::*;

use crate::config;
use crate::i18n::{Language, Messages};
use crate::utils::{device, dom};

pub const MOBILE_ENDPOINT: &str = "https://wa.me/";
pub const WEB_ENDPOINT: &str = "https://api.whatsapp.com/send";

/// Prefilled appointment request in the given language.
pub fn message(lang: Language) -> &'static str {
    Messages::get(lang).whatsapp_greeting
}

fn digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

pub fn whatsapp_url(phone: &str, lang: Language, mobile: bool) -> String {
    let base = if mobile { MOBILE_ENDPOINT } else { WEB_ENDPOINT };
    format!(
        "{}?phone={}&text={}",
        base,
        digits(phone),
        urlencoding::encode(message(lang))
    )
}

/// Opens a chat with `phone` (or the clinic's number) in a new browsing
/// context, picking the endpoint from the user agent.
pub fn open_whatsapp(phone: Option<&str>, lang: Language) {
    let phone = phone.filter(|p| !p.trim().is_empty()).unwrap_or(config::whatsapp_phone());
    let mobile = device::is_mobile_agent(&dom::user_agent());
    let url = whatsapp_url(phone, lang, mobile);
    log::info!("opening WhatsApp ({})", if mobile { "mobile" } else { "web" });
    if let Err(e) = dom::open_in_new_context(&url) {
        log::warn!("could not open WhatsApp: {}", e);
    }
}

#[derive(Properties, PartialEq)]
pub struct WhatsAppLinkProps {
    pub lang: Language,
    #[prop_or_default]
    pub phone: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(WhatsAppLink)]
pub fn whatsapp_link(props: &WhatsAppLinkProps) -> Html {
    let phone = props
        .phone
        .clone()
        .unwrap_or(AttrValue::Static(config::whatsapp_phone()));
    let lang = props.lang;
    let href = whatsapp_url(&phone, lang, false);
    let onclick = {
        let phone = phone.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            open_whatsapp(Some(phone.as_str()), lang);
        })
    };
    let label = if props.children.is_empty() {
        html! { { Messages::get(lang).book_whatsapp } }
    } else {
        html! { <>{ for props.children.iter() }</> }
    };
    html! {
        <a
            {href}
            class={classes!("whatsapp-link", props.class.clone())}
            data-whatsapp={phone}
            target="_blank"
            rel="noopener noreferrer"
            {onclick}
        >
            { label }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn web_url_for_desktop() {
        assert_eq!(
            whatsapp_url("994504662244", Language::En, false),
            "https://api.whatsapp.com/send?phone=994504662244&text=Hello%2C%20I%20would%20like%20to%20make%20an%20appointment"
        );
    }

    #[test]
    fn mobile_url_uses_wa_me() {
        let url = whatsapp_url("+994 50 466 22 44", Language::Az, true);
        assert!(url.starts_with("https://wa.me/?phone=994504662244&text="));
    }

    #[test]
    fn message_is_percent_encoded_utf8() {
        let url = whatsapp_url("1", Language::Ru, false);
        let text = url.split("&text=").nth(1).unwrap();
        assert!(text.is_ascii());
        assert_eq!(urlencoding::decode(text).unwrap(), message(Language::Ru));
    }
}
