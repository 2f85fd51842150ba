pub mod accordion;
pub mod filter;
pub mod lazy_image;
pub mod lightbox;
