//! Widget type registration.
//!
//! Widget types submit themselves to an `inventory` collection so hosts can
//! list what is available. [`define`] is the one-time load hook: the first
//! call installs the accordion definition, later calls leave it untouched.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::emitter::LOG_TARGET;

/// Registration entry for a widget type.
#[derive(Debug)]
pub struct WidgetRegistration {
    /// Widget type name.
    pub name: &'static str,
    /// Crate version that provides it.
    pub version: &'static str,
}

impl WidgetRegistration {
    pub const fn new(name: &'static str, version: &'static str) -> Self {
        Self { name, version }
    }
}

inventory::collect!(WidgetRegistration);

/// Name under which the accordion registers.
pub const WIDGET_NAME: &str = "accordion";

static ACCORDION: WidgetRegistration = WidgetRegistration::new(WIDGET_NAME, env!("CARGO_PKG_VERSION"));

inventory::submit! {
    WidgetRegistration::new(WIDGET_NAME, env!("CARGO_PKG_VERSION"))
}

static DEFINITION: OnceLock<&'static WidgetRegistration> = OnceLock::new();
static DEFINE_CALLED: AtomicBool = AtomicBool::new(false);

/// Get all registered widget types.
pub fn registered_widgets() -> impl Iterator<Item = &'static WidgetRegistration> {
    inventory::iter::<WidgetRegistration>()
}

/// The accordion's registration, resolved once per process.
pub fn definition() -> &'static WidgetRegistration {
    DEFINITION.get_or_init(|| {
        registered_widgets()
            .find(|registration| registration.name == WIDGET_NAME)
            .unwrap_or(&ACCORDION)
    })
}

/// Load hook. Returns true on the first call; every later call is a logged
/// no-op.
pub fn define() -> bool {
    if DEFINE_CALLED.swap(true, Ordering::SeqCst) {
        log::info!(target: LOG_TARGET, "{WIDGET_NAME} already defined");
        return false;
    }

    let registration = definition();
    log::debug!(
        target: LOG_TARGET,
        "defined {} v{}",
        registration.name,
        registration.version
    );
    true
}
