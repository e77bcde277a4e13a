//! Height measurement and application.
//!
//! Measured heights live on the entry node as `data-` attributes so that any
//! later pass, or the host, can read them back. Applying them writes the
//! entry's inline max-height from the attribute matching its state.

use pagedom::{Document, NodeId};

use crate::emitter::LOG_TARGET;
use crate::error::AccordionError;
use crate::widget::Accordion;

/// Collapsed (header only) and expanded (header and content) heights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryHeights {
    pub collapsed: u16,
    pub expanded: u16,
}

/// Outcome of one calculation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeightReport {
    /// Entries whose attributes were written, in document order.
    pub measured: Vec<NodeId>,
    /// Content nodes that could not be measured, and why.
    pub skipped: Vec<AccordionError>,
}

impl Accordion {
    /// Measure every entry from scratch and store the results on the
    /// entries. Entries with broken markup are skipped and left untouched.
    pub fn calculate_heights(&self, doc: &mut Document) -> HeightReport {
        self.diagnostics().trace(format_args!("calculate_heights()"));

        let contents = doc.query_selector_all(doc.root(), &self.selectors().wrapper_content);
        let mut report = HeightReport::default();

        for content in contents {
            match self.store_heights(doc, content) {
                Ok(entry) => report.measured.push(entry),
                Err(e) => {
                    log::warn!(target: LOG_TARGET, "skipping {content}: {e}");
                    report.skipped.push(e);
                }
            }
        }

        report
    }

    fn store_heights(&self, doc: &mut Document, content: NodeId) -> Result<NodeId, AccordionError> {
        let (entry, heights) = self.measure(doc, content)?;

        self.diagnostics().trace(format_args!(
            "{entry}: collapsed {}, expanded {}",
            heights.collapsed, heights.expanded
        ));

        let options = self.options();
        doc.set_attribute(
            entry,
            &options.min_height_attribute(),
            heights.collapsed.to_string(),
        )?;
        doc.set_attribute(
            entry,
            &options.max_height_attribute(),
            heights.expanded.to_string(),
        )?;

        Ok(entry)
    }

    /// Locate the entry and header around `content` and measure both.
    fn measure(&self, doc: &Document, content: NodeId) -> Result<(NodeId, EntryHeights), AccordionError> {
        let selectors = self.selectors();

        let entry = doc
            .parent(content)
            .and_then(|parent| doc.closest(parent, &selectors.entry))
            .ok_or(AccordionError::MissingEntry { element: content })?;
        let header = doc
            .query_selector(entry, &selectors.header)
            .ok_or(AccordionError::MissingHeader { entry })?;

        let header_height = doc.offset_height(header);
        let content_height = doc.offset_height(content);

        Ok((
            entry,
            EntryHeights {
                collapsed: header_height,
                expanded: header_height.saturating_add(content_height),
            },
        ))
    }

    /// Heights last stored on `entry`, if both attributes parse.
    pub fn stored_heights(&self, doc: &Document, entry: NodeId) -> Option<EntryHeights> {
        let options = self.options();
        let read = |name: String| doc.attribute(entry, &name)?.parse::<u16>().ok();

        Some(EntryHeights {
            collapsed: read(options.min_height_attribute())?,
            expanded: read(options.max_height_attribute())?,
        })
    }

    /// Set each entry's max-height from the stored attribute matching its
    /// state. Entries without a stored height keep their current style.
    pub fn apply_heights(&self, doc: &mut Document) -> Result<(), AccordionError> {
        self.diagnostics().trace(format_args!("apply_heights()"));

        let options = self.options();
        let entries = doc.query_selector_all(doc.root(), &self.selectors().wrapper_entry);

        for entry in entries {
            let attribute = if self.state(entry).is_open() {
                options.max_height_attribute()
            } else {
                options.min_height_attribute()
            };

            match doc.attribute(entry, &attribute).map(str::parse::<u16>) {
                Some(Ok(height)) => doc.set_max_height(entry, Some(height))?,
                _ => {
                    let e = AccordionError::InvalidHeight {
                        entry,
                        name: attribute,
                    };
                    self.diagnostics().trace(format_args!("{e}"));
                }
            }
        }

        Ok(())
    }

    /// Recompute every height and re-apply. Hosts call this after changing
    /// content; resizes call it automatically.
    pub fn recalculate(&self, doc: &mut Document) -> HeightReport {
        let report = self.calculate_heights(doc);
        if let Err(e) = self.apply_heights(doc) {
            log::warn!(target: LOG_TARGET, "applying heights: {e}");
        }
        report
    }
}
