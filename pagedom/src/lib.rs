pub mod buffer;
pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod layout;
pub mod render;
pub mod selector;
pub mod style;
pub mod terminal;
pub mod text;
pub mod transitions;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use document::{Document, Node, NodeId};
pub use element::Element;
pub use error::DomError;
pub use event::{CustomEvent, Event, EventDetail, ListenerId, TimerId};
pub use layout::{hit_test, LayoutBox, LayoutResult, Rect};
pub use selector::Selector;
pub use style::{ComputedStyle, InlineStyle, Rgb, StyleRule, Stylesheet, TextStyle};
pub use terminal::Terminal;
pub use transitions::{Easing, TransitionConfig};
pub use types::Edges;
