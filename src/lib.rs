//! Mails a digest of today's remaining calendar events.
//!
//! One linear pipeline per run:
//! - `config` loads the TOML settings
//! - `ics` extracts the events inside the rest-of-day `window`
//! - `digest` sorts them and renders the HTML body
//! - `mailer` delivers it over SMTP

pub mod config;
pub mod digest;
pub mod error;
pub mod event;
pub mod ics;
pub mod mailer;
pub mod window;

pub use crate::config::Config;
pub use crate::error::{DaymailError, DaymailResult};
pub use crate::event::Event;
pub use crate::window::EventWindow;

use chrono::Utc;
use tracing::{info, warn};

/// Extract today's remaining events, render the digest and mail it.
///
/// With `dry_run` the rendered body goes to stdout and no SMTP session
/// is opened.
pub fn run(config: &Config, dry_run: bool) -> DaymailResult<()> {
    let tz = config.timezone()?;
    let now = Utc::now().with_timezone(&tz);
    let window = EventWindow::rest_of_day(now);

    let calendar_path = config.calendar_path();
    info!(
        "Reading {} for events between {} and {}",
        calendar_path.display(),
        window.from,
        window.to
    );

    // A missing or broken calendar still produces a digest; only the
    // mail path aborts the run.
    let mut events = match ics::extract_events(&calendar_path, &window) {
        Ok(events) => events,
        Err(err) => {
            warn!("Proceeding with an empty day: {}", err);
            Vec::new()
        }
    };
    info!("Found {} event(s) for the rest of today", events.len());

    digest::sort_events(&mut events);
    let html = digest::render(&events)?;

    if dry_run {
        println!("{html}");
        return Ok(());
    }

    let message = mailer::build_message(config, html)?;
    mailer::send(config, &message)?;

    let sent_at = Utc::now().with_timezone(&tz);
    println!(
        "Sent {} event(s) to {} at {}",
        events.len(),
        config.email_to,
        sent_at.format("%Y-%m-%d %H:%M:%S")
    );

    Ok(())
}
