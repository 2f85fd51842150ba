pub mod a11y;
pub mod header;
pub mod language_switcher;
pub mod menu;
pub mod scroll;
pub mod whatsapp;

pub use a11y::SkipLink;
pub use header::SiteHeader;
pub use scroll::{AnchorLink, Reveal};
pub use whatsapp::WhatsAppLink;
