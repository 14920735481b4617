//! The digest's event record.
//!
//! Events are created fresh on every run from the calendar file and live
//! only until the mail is sent. Start and end are pre-formatted wall-clock
//! strings in the target timezone, so sorting them lexically sorts them
//! chronologically.

/// One calendar occurrence scheduled for the rest of today.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Event title (SUMMARY)
    pub name: String,
    /// Start time as "HH:MM" in the target zone
    pub start: String,
    /// End time as "HH:MM" in the target zone
    pub end: String,
    /// Venue, if the entry carries one (LOCATION)
    pub location: Option<String>,
}

impl Event {
    /// Location text for rendering, empty when the entry has none.
    pub fn location_label(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }
}
