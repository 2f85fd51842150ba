pub mod diseases;
pub mod language;
pub mod messages;
pub mod paths;

pub use language::Language;
pub use messages::Messages;
