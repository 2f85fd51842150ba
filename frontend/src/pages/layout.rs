use yew::prelude::*;

use crate::i18n::{Language, Messages};
use crate::nav::{SiteHeader, SkipLink, WhatsAppLink};

const SITE_CSS: &str = r#"
    .skip-link {
        position: absolute;
        left: -9999px;
        top: 0;
        z-index: 1100;
        padding: 0.5rem 1rem;
        background: #1e6fd9;
        color: #fff;
    }
    .skip-link:focus {
        left: 1rem;
    }
    .header {
        position: sticky;
        top: 0;
        z-index: 900;
        background: #fff;
        box-shadow: 0 2px 8px rgba(0, 0, 0, 0.06);
        transition: transform 0.3s ease;
    }
    .header-inner {
        display: flex;
        align-items: center;
        gap: 1.5rem;
        max-width: 1100px;
        margin: 0 auto;
        padding: 0.75rem 1rem;
    }
    .nav {
        display: flex;
        gap: 1rem;
        margin-left: auto;
    }
    .nav-link.active,
    .mobile-nav-link.active {
        color: #1e6fd9;
        font-weight: 600;
    }
    .lang-btn.active {
        background: #1e6fd9;
        color: #fff;
    }
    .mobile-menu-toggle,
    .mobile-menu {
        display: none;
    }
    .accordion-item {
        border-bottom: 1px solid #e4e8ee;
    }
    .accordion-header {
        display: flex;
        justify-content: space-between;
        padding: 1rem 0;
        cursor: pointer;
    }
    .accordion-content {
        max-height: 0;
        overflow: hidden;
    }
    .gallery-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
        gap: 1rem;
    }
    .gallery-item img,
    .gallery-item video {
        width: 100%;
        border-radius: 8px;
        cursor: zoom-in;
    }
    .lightbox {
        display: none;
        position: fixed;
        inset: 0;
        z-index: 1000;
        background: rgba(0, 0, 0, 0.9);
        align-items: center;
        justify-content: center;
    }
    .lightbox.active {
        display: flex;
    }
    .lightbox-content {
        position: relative;
        max-width: 90vw;
        max-height: 90vh;
    }
    .lightbox-image,
    .lightbox-video {
        max-width: 90vw;
        max-height: 80vh;
    }
    .lightbox-caption {
        color: #eee;
        text-align: center;
        margin-top: 0.5rem;
    }
    .card,
    .service-card,
    .disease-card {
        opacity: 0;
        transform: translateY(20px);
        transition: opacity 0.6s ease, transform 0.6s ease;
    }
    .animate-in {
        opacity: 1;
        transform: none;
    }
    @media (max-width: 768px) {
        .nav {
            display: none;
        }
        .mobile-menu-toggle {
            display: block;
        }
        .mobile-menu.active {
            display: flex;
            flex-direction: column;
            padding: 1rem;
        }
    }
"#;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub lang: Language,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let messages = Messages::get(props.lang);
    html! {
        <>
            <style>{ SITE_CSS }</style>
            <SkipLink target="main-content" label={messages.skip_to_content} />
            <SiteHeader lang={props.lang} />
            <main id="main-content" tabindex="-1">
                { for props.children.iter() }
            </main>
            <footer class="footer">
                <p>{ messages.clinic_name }</p>
                <WhatsAppLink lang={props.lang} class={classes!("footer-cta")} />
            </footer>
        </>
    }
}
