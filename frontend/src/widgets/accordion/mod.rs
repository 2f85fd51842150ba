pub mod state;
pub mod view;

pub use state::{AccordionEntry, AccordionMode};
pub use view::{Accordion, FaqSection};
