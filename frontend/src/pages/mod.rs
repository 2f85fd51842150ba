pub mod diseases;
pub mod faq;
pub mod gallery;
pub mod home;
pub mod layout;
pub mod not_found;
