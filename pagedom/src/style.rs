//! Host supplied presentation rules.
//!
//! The stylesheet plays the part of page CSS: widgets only toggle classes and
//! inline max-heights, and the rules here decide what that looks like.

use crate::selector::Selector;
use crate::transitions::TransitionConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub dim: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}

/// Per-element inline style. Only what widgets write directly lives here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InlineStyle {
    pub max_height: Option<u16>,
}

/// A single rule: every property left as `None` does not participate.
#[derive(Debug, Clone)]
pub struct StyleRule {
    pub selector: Selector,
    pub text_style: Option<TextStyle>,
    pub foreground: Option<Rgb>,
    pub background: Option<Rgb>,
    /// Generated content placed before the element's own text.
    pub before: Option<String>,
    pub max_height_transition: Option<TransitionConfig>,
}

impl StyleRule {
    pub fn new(selector: Selector) -> Self {
        Self {
            selector,
            text_style: None,
            foreground: None,
            background: None,
            before: None,
            max_height_transition: None,
        }
    }

    pub fn text_style(mut self, style: TextStyle) -> Self {
        self.text_style = Some(style);
        self
    }

    pub fn fg(mut self, color: Rgb) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn bg(mut self, color: Rgb) -> Self {
        self.background = Some(color);
        self
    }

    pub fn before(mut self, content: impl Into<String>) -> Self {
        self.before = Some(content.into());
        self
    }

    pub fn max_height_transition(mut self, config: TransitionConfig) -> Self {
        self.max_height_transition = Some(config);
        self
    }
}

/// Ordered rules; later matches override earlier ones property by property.
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    rules: Vec<StyleRule>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, rule: StyleRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn push(&mut self, rule: StyleRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Result of cascading every matching rule for one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComputedStyle {
    pub text_style: TextStyle,
    pub foreground: Option<Rgb>,
    pub background: Option<Rgb>,
    pub before: Option<String>,
    pub max_height_transition: Option<TransitionConfig>,
}

impl ComputedStyle {
    pub(crate) fn apply(&mut self, rule: &StyleRule) {
        if let Some(style) = rule.text_style {
            self.text_style = style;
        }
        if rule.foreground.is_some() {
            self.foreground = rule.foreground;
        }
        if rule.background.is_some() {
            self.background = rule.background;
        }
        if rule.before.is_some() {
            self.before.clone_from(&rule.before);
        }
        if rule.max_height_transition.is_some() {
            self.max_height_transition = rule.max_height_transition;
        }
    }
}
