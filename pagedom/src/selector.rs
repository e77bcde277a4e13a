//! A small CSS selector subset: `*`, tag names, `.class` compounds and the
//! descendant combinator.

use std::fmt;

use crate::document::{Document, NodeId};
use crate::error::DomError;

/// One compound selector such as `div.le-acc-entry.-open`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn matches(&self, doc: &Document, id: NodeId) -> bool {
        let Some(node) = doc.node(id) else {
            return false;
        };

        if let Some(tag) = &self.tag {
            if !node.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }

        self.classes.iter().all(|class| node.has_class(class))
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "{tag}")?,
            None if self.classes.is_empty() => write!(f, "*")?,
            None => {}
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        Ok(())
    }
}

/// A chain of compounds joined by descendant combinators. The last compound
/// is the subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    compounds: Vec<Compound>,
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

impl Selector {
    /// Parse selector text.
    pub fn parse(input: &str) -> Result<Self, DomError> {
        let invalid = |reason: &str| DomError::InvalidSelector {
            selector: input.to_string(),
            reason: reason.to_string(),
        };

        let mut compounds = Vec::new();

        for token in input.split_whitespace() {
            let mut compound = Compound::default();
            let mut rest = token;

            if let Some(stripped) = rest.strip_prefix('*') {
                rest = stripped;
            } else {
                let end = rest.find(|c: char| !is_ident_char(c)).unwrap_or(rest.len());
                if end > 0 {
                    compound.tag = Some(rest[..end].to_ascii_lowercase());
                    rest = &rest[end..];
                }
            }

            while !rest.is_empty() {
                let Some(stripped) = rest.strip_prefix('.') else {
                    return Err(invalid(&format!("unsupported syntax at '{rest}'")));
                };
                let end = stripped
                    .find(|c: char| !is_ident_char(c))
                    .unwrap_or(stripped.len());
                if end == 0 {
                    return Err(invalid("empty class name"));
                }
                compound.classes.push(stripped[..end].to_string());
                rest = &stripped[end..];
            }

            compounds.push(compound);
        }

        if compounds.is_empty() {
            return Err(invalid("empty selector"));
        }

        Ok(Self { compounds })
    }

    /// Selector matching a single class. The name is taken verbatim.
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            compounds: vec![Compound {
                tag: None,
                classes: vec![name.into()],
            }],
        }
    }

    /// Selector matching a tag name.
    pub fn tag(name: impl Into<String>) -> Self {
        Self {
            compounds: vec![Compound {
                tag: Some(name.into().to_ascii_lowercase()),
                classes: Vec::new(),
            }],
        }
    }

    /// `self descendant`, e.g. `.wrapper` + `.header` gives `.wrapper .header`.
    pub fn descendant(mut self, descendant: Selector) -> Self {
        self.compounds.extend(descendant.compounds);
        self
    }

    /// Add a class requirement to the subject compound.
    pub fn and_class(mut self, name: impl Into<String>) -> Self {
        if let Some(subject) = self.compounds.last_mut() {
            subject.classes.push(name.into());
        }
        self
    }

    /// Whether `id` matches. Ancestors are searched greedily from the
    /// nearest one, which is exact for descendant-only chains.
    pub fn matches(&self, doc: &Document, id: NodeId) -> bool {
        let Some((subject, ancestors)) = self.compounds.split_last() else {
            return false;
        };

        if !subject.matches(doc, id) {
            return false;
        }

        let mut current = doc.parent(id);
        for compound in ancestors.iter().rev() {
            loop {
                let Some(candidate) = current else {
                    return false;
                };
                current = doc.parent(candidate);
                if compound.matches(doc, candidate) {
                    break;
                }
            }
        }

        true
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, compound) in self.compounds.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{compound}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Selector {
    type Err = DomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
