//! Interactive terminal host for the accordion widget.
//!
//! ```bash
//! accordion-demo
//! accordion-demo --only-one-open
//! accordion-demo --options '{"initialized_delay_ms": 1000}' --debug
//! accordion-demo --options options.json --log-file /tmp/accordion.log
//! ```
//!
//! Click a header to toggle its entry. `r` toggles reduced motion, `q` or
//! `Esc` quits.

mod page;

use std::cell::RefCell;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::{Duration, Instant};

use accordion::{Accordion, AccordionOptions, ENTRY_CLOSE, ENTRY_OPEN, INITIALIZED};
use clap::Parser;
use crossterm::event::KeyCode;
use pagedom::{Document, Selector, Terminal};
use serde_json::Value;
use simplelog::{Config, LevelFilter, WriteLogger};

/// Frame budget while a height transition is running.
const ANIMATION_FRAME: Duration = Duration::from_millis(16);
const IDLE_POLL: Duration = Duration::from_millis(100);

#[derive(Parser, Debug)]
#[command(name = "accordion-demo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Collapsible list demo in the terminal", long_about = None)]
struct Args {
    /// Opening an entry closes the others
    #[arg(long)]
    only_one_open: bool,

    /// Write the widget's diagnostic trace to the log file
    #[arg(long)]
    debug: bool,

    /// Options as a JSON object, or a path to a file holding one
    #[arg(short, long, value_name = "JSON|FILE")]
    options: Option<String>,

    /// Log file location
    #[arg(long, value_name = "FILE", default_value = "accordion-demo.log")]
    log_file: PathBuf,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let level = if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let log_file = File::create(&args.log_file)?;
    WriteLogger::init(level, Config::default(), log_file).map_err(io::Error::other)?;

    let options = load_options(&args)?;
    let effective = options.to_json().map_err(io::Error::other)?;
    log::info!("starting with {effective}");

    accordion::define();

    let mut term = Terminal::new()?;
    let (width, height) = term.size();

    let mut doc = Document::new(width, height);
    doc.set_stylesheet(page::stylesheet(&options));
    doc.mount(page::markup(&options));

    let status = doc
        .query_selector(doc.root(), &Selector::class(page::STATUS_CLASS))
        .ok_or_else(|| io::Error::other("status line missing from sample markup"))?;
    let last_event = watch_wrappers(&mut doc, &options)?;

    let mut accordion = Accordion::new(options);
    accordion.init(&mut doc).map_err(io::Error::other)?;

    let mut reduced_motion = false;
    let mut last_tick = Instant::now();

    loop {
        if let Some(message) = last_event.borrow_mut().take() {
            doc.set_text(status, message).map_err(io::Error::other)?;
        }
        term.render(&doc)?;

        let timeout = if doc.has_active_transitions() {
            ANIMATION_FRAME
        } else {
            IDLE_POLL
        };

        for raw in term.poll(timeout)? {
            match term.route(&mut doc, &raw) {
                Some(KeyCode::Char('q')) | Some(KeyCode::Esc) => return Ok(()),
                Some(KeyCode::Char('r')) => {
                    reduced_motion = !reduced_motion;
                    doc.set_reduced_motion(reduced_motion);
                    log::info!("reduced motion {reduced_motion}");
                }
                _ => {}
            }
        }

        let now = Instant::now();
        doc.advance(now - last_tick);
        last_tick = now;

        for event in doc.poll_events() {
            accordion.handle_event(&mut doc, &event);
        }
    }
}

/// Resolve options from `--options`, then let the flags switch features on.
fn load_options(args: &Args) -> io::Result<AccordionOptions> {
    let mut options = match &args.options {
        Some(source) => {
            let text = if Path::new(source).is_file() {
                fs::read_to_string(source)?
            } else {
                source.clone()
            };
            let value: Value = serde_json::from_str(&text).map_err(io::Error::other)?;
            AccordionOptions::resolve(Some(&value))
        }
        None => AccordionOptions::default(),
    };

    if args.only_one_open {
        options = options.only_one_open(true);
    }
    if args.debug {
        options = options.debug(true);
    }

    Ok(options)
}

/// Record the latest accordion event of every wrapper for the status line.
fn watch_wrappers(
    doc: &mut Document,
    options: &AccordionOptions,
) -> io::Result<Rc<RefCell<Option<String>>>> {
    let last_event = Rc::new(RefCell::new(None));
    let wrappers = doc.query_selector_all(doc.root(), &Selector::class(options.wrapper_class.as_str()));

    for wrapper in wrappers {
        for name in [INITIALIZED, ENTRY_OPEN, ENTRY_CLOSE] {
            let sink = Rc::clone(&last_event);
            doc.add_event_listener(wrapper, name, move |event| {
                let message = format!(
                    "{} ({}) at {:.1}s",
                    event.name,
                    event.detail.target_entry,
                    event.timestamp.as_secs_f32()
                );
                log::info!("{message}");
                *sink.borrow_mut() = Some(message);
            })
            .map_err(io::Error::other)?;
        }
    }

    Ok(last_event)
}
