//! Arena-backed document tree.
//!
//! Nodes are addressed by [`NodeId`] and never removed, so ids stay valid for
//! the life of the document.

mod events;
mod query;

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt;
use std::time::Duration;

use crate::element::Element;
use crate::error::DomError;
use crate::event::Event;
use crate::layout;
use crate::style::{ComputedStyle, InlineStyle, Stylesheet};
use crate::transitions::ActiveTransition;
use crate::types::Edges;

pub use events::Ancestors;
use events::{Listener, PendingTimer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub tag: String,
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    pub text: Option<String>,
    pub padding: Edges,
    pub style: InlineStyle,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn from_element(element: &Element, parent: Option<NodeId>) -> Self {
        Self {
            tag: element.tag.to_ascii_lowercase(),
            classes: element.classes.clone(),
            attributes: element.attributes.clone(),
            text: element.text.clone(),
            padding: element.padding,
            style: InlineStyle {
                max_height: element.max_height,
            },
            parent,
            children: Vec::new(),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

pub struct Document {
    nodes: Vec<Node>,
    viewport: (u16, u16),
    stylesheet: Stylesheet,
    clock: Duration,
    queue: VecDeque<Event>,
    timers: Vec<PendingTimer>,
    next_timer: u64,
    listeners: Vec<Listener>,
    next_listener: u64,
    transitions: HashMap<NodeId, ActiveTransition>,
    reduced_motion: bool,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("nodes", &self.nodes.len())
            .field("viewport", &self.viewport)
            .field("clock", &self.clock)
            .field("queued", &self.queue.len())
            .field("timers", &self.timers.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Document {
    /// Empty document with a `body` root and the given viewport size.
    pub fn new(width: u16, height: u16) -> Self {
        let body = Node::from_element(&Element::new("body"), None);
        Self {
            nodes: vec![body],
            viewport: (width, height),
            stylesheet: Stylesheet::default(),
            clock: Duration::ZERO,
            queue: VecDeque::new(),
            timers: Vec::new(),
            next_timer: 0,
            listeners: Vec::new(),
            next_listener: 0,
            transitions: HashMap::new(),
            reduced_motion: false,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append `element` (and its subtree) to the body.
    pub fn mount(&mut self, element: Element) -> NodeId {
        self.insert_tree(&element, self.root())
    }

    /// Append `element` under `parent`.
    pub fn append(&mut self, parent: NodeId, element: Element) -> Result<NodeId, DomError> {
        self.get(parent)?;
        Ok(self.insert_tree(&element, parent))
    }

    fn insert_tree(&mut self, element: &Element, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::from_element(element, Some(parent)));
        self.nodes[parent.0].children.push(id);

        for child in &element.children {
            self.insert_tree(child, id);
        }

        id
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    fn get(&self, id: NodeId) -> Result<&Node, DomError> {
        self.nodes.get(id.0).ok_or(DomError::UnknownNode(id))
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut Node, DomError> {
        self.nodes.get_mut(id.0).ok_or(DomError::UnknownNode(id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    // -------------------------------------------------------------------------
    // Tree navigation
    // -------------------------------------------------------------------------

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(Node::children).unwrap_or_default()
    }

    /// Ancestors from the parent up to the root.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors::new(self, self.parent(id))
    }

    /// All descendants of `id` in document (pre-)order, excluding `id`.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    // -------------------------------------------------------------------------
    // Classes
    // -------------------------------------------------------------------------

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.node(id).is_some_and(|node| node.has_class(class))
    }

    /// Returns true if the class was added.
    pub fn add_class(&mut self, id: NodeId, class: &str) -> Result<bool, DomError> {
        let node = self.get_mut(id)?;
        if node.has_class(class) {
            return Ok(false);
        }
        node.classes.push(class.to_string());
        Ok(true)
    }

    /// Returns true if the class was present.
    pub fn remove_class(&mut self, id: NodeId, class: &str) -> Result<bool, DomError> {
        let node = self.get_mut(id)?;
        let before = node.classes.len();
        node.classes.retain(|c| c != class);
        Ok(node.classes.len() != before)
    }

    /// Add or remove `class` so that its presence equals `on`.
    pub fn toggle_class(&mut self, id: NodeId, class: &str, on: bool) -> Result<bool, DomError> {
        if on {
            self.add_class(id, class)
        } else {
            self.remove_class(id, class)
        }
    }

    // -------------------------------------------------------------------------
    // Attributes and text
    // -------------------------------------------------------------------------

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id)?.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(
        &mut self,
        id: NodeId,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), DomError> {
        self.get_mut(id)?
            .attributes
            .insert(name.to_string(), value.into());
        Ok(())
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Result<Option<String>, DomError> {
        Ok(self.get_mut(id)?.attributes.remove(name))
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.node(id)?.text.as_deref()
    }

    /// Replace the element's own text. Measured heights change on the next
    /// measurement; nothing is recalculated eagerly.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) -> Result<(), DomError> {
        self.get_mut(id)?.text = Some(text.into());
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Style and measurement
    // -------------------------------------------------------------------------

    /// Inline max-height target, ignoring any running transition.
    pub fn max_height(&self, id: NodeId) -> Option<u16> {
        self.node(id)?.style.max_height
    }

    /// Set the inline max-height. When the computed style carries a
    /// max-height transition the applied value animates towards the new one.
    pub fn set_max_height(&mut self, id: NodeId, value: Option<u16>) -> Result<(), DomError> {
        let previous = self.applied_max_height(id);
        self.get_mut(id)?.style.max_height = value;

        let config = self.computed_style(id).max_height_transition;
        match (previous, value, config) {
            (Some(from), Some(to), Some(config)) if from != to && !self.reduced_motion => {
                log::trace!("{id}: max-height transition {from} -> {to}");
                self.transitions.insert(
                    id,
                    ActiveTransition {
                        from,
                        to,
                        start: self.clock,
                        config,
                    },
                );
            }
            _ => {
                self.transitions.remove(&id);
            }
        }

        Ok(())
    }

    /// Max-height currently in effect, including transition progress.
    pub fn applied_max_height(&self, id: NodeId) -> Option<u16> {
        match self.transitions.get(&id) {
            Some(transition) => Some(transition.value_at(self.clock)),
            None => self.max_height(id),
        }
    }

    /// Rendered height of `id`: its natural height clamped by the applied
    /// max-height. Zero for unknown nodes.
    pub fn offset_height(&self, id: NodeId) -> u16 {
        if self.node(id).is_none() {
            return 0;
        }
        layout::offset_height(self, id, layout::available_width(self, id))
    }

    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    pub fn set_stylesheet(&mut self, stylesheet: Stylesheet) {
        self.stylesheet = stylesheet;
    }

    /// Cascade every matching stylesheet rule for `id`.
    pub fn computed_style(&self, id: NodeId) -> ComputedStyle {
        let mut computed = ComputedStyle::default();
        for rule in self.stylesheet.rules() {
            if rule.selector.matches(self, id) {
                computed.apply(rule);
            }
        }
        computed
    }

    /// When enabled, max-height changes apply instantly.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
        if enabled {
            self.transitions.clear();
        }
    }

    pub fn has_active_transitions(&self) -> bool {
        !self.transitions.is_empty()
    }

    pub fn viewport(&self) -> (u16, u16) {
        self.viewport
    }
}
