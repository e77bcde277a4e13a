//! Accordion behaviour for [`pagedom`] documents.
//!
//! Markup is consumed, not produced: a wrapper element holds entries, each
//! with one header and one content element. Clicking a header opens or closes
//! its entry by animating the entry's max-height between two measured
//! heights stored on the entry as `data-` attributes.
//!
//! ```text
//! <div class="le-accordion">
//!   <div class="le-acc-entry">
//!     <div class="le-acc-header">TITLE 1</div>
//!     <div class="le-acc-content">CONTENT 1</div>
//!   </div>
//! </div>
//! ```

mod controller;
pub mod emitter;
mod error;
pub mod heights;
pub mod options;
pub mod registration;
pub mod state;
mod widget;

pub use emitter::{Diagnostics, ENTRY_CLOSE, ENTRY_OPEN, INITIALIZED};
pub use error::AccordionError;
pub use heights::{EntryHeights, HeightReport};
pub use options::{AccordionOptions, Selectors};
pub use registration::{define, registered_widgets, WidgetRegistration};
pub use state::EntryState;
pub use widget::Accordion;
