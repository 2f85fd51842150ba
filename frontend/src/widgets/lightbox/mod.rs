pub mod gallery;
pub mod state;
pub mod view;

pub use gallery::{Gallery, GalleryEntry};
pub use state::{LightboxAction, Media};
pub use view::LightboxProvider;
