//! Accordion configuration and the selectors derived from it.

use std::time::Duration;

use pagedom::Selector;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::emitter::LOG_TARGET;

/// Widget configuration.
///
/// Build it with the setters, or resolve it from a JSON object with
/// [`AccordionOptions::resolve`]. Selectors are never stored here; they are
/// derived from the class names when the widget is constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccordionOptions {
    /// Class on the element that scopes one accordion.
    pub wrapper_class: String,
    /// Class on each collapsible entry.
    pub entry_class: String,
    /// Class on the clickable header of an entry.
    pub header_class: String,
    /// Class on the collapsible content of an entry.
    pub content_class: String,
    /// Suffix of the `data-` attribute holding the expanded height.
    pub data_max_height_tag: String,
    /// Suffix of the `data-` attribute holding the collapsed height.
    pub data_min_height_tag: String,
    /// Opening an entry closes every other entry of the same wrapper.
    pub only_one_open: bool,
    /// Enable the diagnostic trace.
    pub debug: bool,

    /// Marker class of an open entry.
    pub open_class: String,
    /// Class added to headers at init and to wrappers after the delay.
    pub initialized_class: String,
    /// Highlight class on the header of an open entry.
    pub active_header_class: String,
    /// Delay before wrappers receive `initialized_class`.
    pub initialized_delay_ms: u64,

    /// Keys that are not recognized. Kept, never read.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for AccordionOptions {
    fn default() -> Self {
        Self {
            wrapper_class: "le-accordion".into(),
            entry_class: "le-acc-entry".into(),
            header_class: "le-acc-header".into(),
            content_class: "le-acc-content".into(),
            data_max_height_tag: "le-acc-max-height".into(),
            data_min_height_tag: "le-acc-min-height".into(),
            only_one_open: false,
            debug: false,
            open_class: "-open".into(),
            initialized_class: "-initialized".into(),
            active_header_class: "_primary-bkgr".into(),
            initialized_delay_ms: 250,
            extra: Map::new(),
        }
    }
}

impl AccordionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `input` over the defaults.
    ///
    /// Only a JSON object is merged, one level deep. Anything else leaves
    /// the defaults untouched, as does a recognized key carrying the wrong
    /// type.
    pub fn resolve(input: Option<&Value>) -> Self {
        let mut options = Self::default();

        let Some(input) = input else {
            return options;
        };
        // `debug` comes from the input itself, so input that cannot carry it
        // is reported at trace level instead of through the gated trace.
        let Some(map) = input.as_object() else {
            log::trace!(target: LOG_TARGET, "ignoring non-object options: {input}");
            return options;
        };

        // Read first so the merge below already knows whether to trace.
        if let Some(Value::Bool(debug)) = map.get("debug") {
            options.debug = *debug;
        }

        for (key, value) in map {
            options.merge(key, value);
        }

        if options.debug {
            match options.to_json() {
                Ok(json) => log::debug!(target: LOG_TARGET, "resolved options: {json}"),
                Err(e) => log::debug!(target: LOG_TARGET, "resolved options: {options:?} ({e})"),
            }
        }

        options
    }

    /// Parse a JSON document and resolve it. Unparseable text resolves to
    /// the defaults.
    pub fn from_json_str(json: &str) -> Self {
        match serde_json::from_str::<Value>(json) {
            Ok(value) => Self::resolve(Some(&value)),
            Err(e) => {
                log::trace!(target: LOG_TARGET, "ignoring unparseable options: {e}");
                Self::default()
            }
        }
    }

    /// The effective configuration as one flat JSON object, unknown keys
    /// alongside the recognized ones. Resolving it again yields `self`.
    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    fn merge(&mut self, key: &str, value: &Value) {
        let applied = match key {
            "wrapper_class" => set_string(&mut self.wrapper_class, value),
            "entry_class" => set_string(&mut self.entry_class, value),
            "header_class" => set_string(&mut self.header_class, value),
            "content_class" => set_string(&mut self.content_class, value),
            "data_max_height_tag" => set_string(&mut self.data_max_height_tag, value),
            "data_min_height_tag" => set_string(&mut self.data_min_height_tag, value),
            "only_one_open" => set_bool(&mut self.only_one_open, value),
            "debug" => set_bool(&mut self.debug, value),
            "open_class" => set_string(&mut self.open_class, value),
            "initialized_class" => set_string(&mut self.initialized_class, value),
            "active_header_class" => set_string(&mut self.active_header_class, value),
            "initialized_delay_ms" => match value.as_u64() {
                Some(ms) => {
                    self.initialized_delay_ms = ms;
                    true
                }
                None => false,
            },
            _ => {
                self.extra.insert(key.to_string(), value.clone());
                true
            }
        };

        if !applied && self.debug {
            log::debug!(target: LOG_TARGET, "option '{key}' ignored, unexpected value {value}");
        }
    }

    pub fn wrapper_class(mut self, class: impl Into<String>) -> Self {
        self.wrapper_class = class.into();
        self
    }

    pub fn entry_class(mut self, class: impl Into<String>) -> Self {
        self.entry_class = class.into();
        self
    }

    pub fn header_class(mut self, class: impl Into<String>) -> Self {
        self.header_class = class.into();
        self
    }

    pub fn content_class(mut self, class: impl Into<String>) -> Self {
        self.content_class = class.into();
        self
    }

    pub fn data_max_height_tag(mut self, tag: impl Into<String>) -> Self {
        self.data_max_height_tag = tag.into();
        self
    }

    pub fn data_min_height_tag(mut self, tag: impl Into<String>) -> Self {
        self.data_min_height_tag = tag.into();
        self
    }

    pub fn only_one_open(mut self, enabled: bool) -> Self {
        self.only_one_open = enabled;
        self
    }

    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    pub fn initialized_delay(mut self, delay: Duration) -> Self {
        self.initialized_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn initialized_delay_duration(&self) -> Duration {
        Duration::from_millis(self.initialized_delay_ms)
    }

    /// Full name of the collapsed height attribute.
    pub fn min_height_attribute(&self) -> String {
        format!("data-{}", self.data_min_height_tag)
    }

    /// Full name of the expanded height attribute.
    pub fn max_height_attribute(&self) -> String {
        format!("data-{}", self.data_max_height_tag)
    }

    /// Derive the selector bundle from the current class names.
    pub fn selectors(&self) -> Selectors {
        Selectors::from_options(self)
    }
}

fn set_string(slot: &mut String, value: &Value) -> bool {
    match value.as_str() {
        Some(s) => {
            *slot = s.to_string();
            true
        }
        None => false,
    }
}

fn set_bool(slot: &mut bool, value: &Value) -> bool {
    match value.as_bool() {
        Some(b) => {
            *slot = b;
            true
        }
        None => false,
    }
}

/// Selectors built from [`AccordionOptions`] class names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selectors {
    pub wrapper: Selector,
    pub entry: Selector,
    pub header: Selector,
    pub content: Selector,
    /// `.wrapper .entry`: the entries whose heights get applied.
    pub wrapper_entry: Selector,
    /// `.wrapper .header`: the headers that get click handling.
    pub wrapper_header: Selector,
    /// `.wrapper .content`: the content nodes that get measured.
    pub wrapper_content: Selector,
}

impl Selectors {
    fn from_options(options: &AccordionOptions) -> Self {
        let wrapper = Selector::class(&options.wrapper_class);
        let header = Selector::class(&options.header_class);
        let content = Selector::class(&options.content_class);
        let entry = Selector::class(&options.entry_class);

        Self {
            wrapper_entry: wrapper.clone().descendant(entry.clone()),
            wrapper_header: wrapper.clone().descendant(header.clone()),
            wrapper_content: wrapper.clone().descendant(content.clone()),
            wrapper,
            entry,
            header,
            content,
        }
    }
}
