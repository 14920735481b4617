//! Calendar file parsing using the icalendar crate's parser.
//!
//! Every VEVENT is pinned to a concrete instant in the target zone before
//! the window filter runs, so a calendar that mixes UTC, floating and
//! TZID-qualified timestamps still comes out in one consistent offset.
//! Malformed entries are skipped with a warning; only an unreadable or
//! unparseable file is reported as an error.

use std::path::Path;

use chrono::{DateTime, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use icalendar::{
    CalendarDateTime, DatePerhapsTime,
    parser::{Component, read_calendar, unfold},
};
use tracing::warn;

use crate::error::{DaymailError, DaymailResult};
use crate::event::Event;
use crate::window::EventWindow;

/// Wall-clock display format for digest rows.
const TIME_FORMAT: &str = "%H:%M";

/// A VEVENT pinned to instants in the target zone.
struct Occurrence {
    name: String,
    start: DateTime<Tz>,
    end: DateTime<Tz>,
    location: Option<String>,
}

/// Read the calendar at `path` and extract the events inside `window`.
pub fn extract_events(path: &Path, window: &EventWindow) -> DaymailResult<Vec<Event>> {
    let content = std::fs::read_to_string(path)?;
    parse_events(&content, window)
}

/// Parse ICS content into the events inside `window`, in calendar order.
pub fn parse_events(content: &str, window: &EventWindow) -> DaymailResult<Vec<Event>> {
    let unfolded = unfold(content);
    let calendar = read_calendar(&unfolded).map_err(|e| DaymailError::IcsParse(e.to_string()))?;
    let tz = window.timezone();

    let events = calendar
        .components
        .iter()
        .filter(|c| c.name == "VEVENT")
        .filter_map(|vevent| to_occurrence(vevent, tz))
        .filter(|occ| window.contains(&occ.start))
        .map(|occ| Event {
            name: occ.name,
            start: occ.start.format(TIME_FORMAT).to_string(),
            end: occ.end.format(TIME_FORMAT).to_string(),
            location: occ.location,
        })
        .collect();

    Ok(events)
}

/// Interpret one VEVENT in the target zone.
fn to_occurrence(vevent: &Component, tz: Tz) -> Option<Occurrence> {
    let name = vevent
        .find_prop("SUMMARY")
        .map(|p| p.val.to_string())
        .unwrap_or_else(|| "(No title)".to_string());

    let Some(start) = prop_instant(vevent, "DTSTART", tz) else {
        warn!("Skipping '{}': no usable DTSTART", name);
        return None;
    };
    let Some(end) = prop_instant(vevent, "DTEND", tz) else {
        warn!("Skipping '{}': no usable DTEND", name);
        return None;
    };

    let location = vevent.find_prop("LOCATION").map(|p| p.val.to_string());

    Some(Occurrence {
        name,
        start,
        end,
        location,
    })
}

/// Read a date/time property of `vevent` and pin it to the target zone.
fn prop_instant(vevent: &Component, prop: &str, tz: Tz) -> Option<DateTime<Tz>> {
    let property = vevent.find_prop(prop)?;
    let dpt = DatePerhapsTime::try_from(property).ok()?;
    to_zoned(dpt, tz)
}

/// Pin a parsed ICS date or date-time to the target zone.
///
/// UTC markers are shifted into the zone, floating markers are read as
/// zone wall-clock time, and TZID-qualified markers are converted from
/// their stated zone. An unknown TZID degrades to the floating reading.
/// All-day dates count from local midnight.
fn to_zoned(dpt: DatePerhapsTime, tz: Tz) -> Option<DateTime<Tz>> {
    match dpt {
        DatePerhapsTime::DateTime(cal_dt) => match cal_dt {
            CalendarDateTime::Utc(dt) => Some(dt.with_timezone(&tz)),
            CalendarDateTime::Floating(naive) => local_instant(naive, tz),
            CalendarDateTime::WithTimezone { date_time, tzid } => match tzid.parse::<Tz>() {
                Ok(source) => local_instant(date_time, source).map(|dt| dt.with_timezone(&tz)),
                Err(_) => {
                    warn!("Unknown TZID '{}', reading as target-zone wall clock", tzid);
                    local_instant(date_time, tz)
                }
            },
        },
        DatePerhapsTime::Date(date) => local_instant(date.and_hms_opt(0, 0, 0)?, tz),
    }
}

/// Resolve a naive wall-clock time in `tz`, earliest reading if ambiguous.
fn local_instant(naive: NaiveDateTime, tz: Tz) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&naive).earliest()
}
