use std::collections::BTreeMap;

use crate::types::Edges;

/// Owned markup tree, built up front and mounted into a [`Document`].
///
/// ```
/// use pagedom::Element;
///
/// let entry = Element::div()
///     .class("le-acc-entry")
///     .child(Element::div().class("le-acc-header").text("Title"))
///     .child(Element::div().class("le-acc-content").text("Body"));
/// assert_eq!(entry.children.len(), 2);
/// ```
///
/// [`Document`]: crate::Document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    pub text: Option<String>,
    pub padding: Edges,
    pub max_height: Option<u16>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    pub fn section() -> Self {
        Self::new("section")
    }

    /// A `p` element holding `content`.
    pub fn paragraph(content: impl Into<String>) -> Self {
        Self::new("p").text(content)
    }

    /// Add a class. Duplicates are ignored, like `classList.add`.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.is_empty() && !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Add every whitespace separated class in `classes`.
    pub fn classes(self, classes: &str) -> Self {
        classes
            .split_whitespace()
            .fold(self, |element, class| element.class(class))
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.text = Some(content.into());
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn max_height(mut self, max_height: u16) -> Self {
        self.max_height = Some(max_height);
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(new_children);
        self
    }
}
