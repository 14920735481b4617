//! Digest assembly: ordering events and rendering the mail body.

use askama::Template;

use crate::error::DaymailResult;
use crate::event::Event;

/// The HTML body of the digest mail. One bound variable: the event list.
#[derive(Template)]
#[template(path = "digest.html")]
pub struct DigestTemplate<'a> {
    pub events: &'a [Event],
}

/// Order events ascending by start time.
///
/// Start strings are fixed-width "HH:MM" in a single offset, so lexical
/// order is chronological order.
pub fn sort_events(events: &mut [Event]) {
    events.sort_by(|a, b| a.start.cmp(&b.start));
}

/// Render the digest body for the given (sorted) events.
pub fn render(events: &[Event]) -> DaymailResult<String> {
    let template = DigestTemplate { events };
    Ok(template.render()?)
}
