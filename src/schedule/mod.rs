//! Programme lookup and schedule formatting
//!
//! Turns the raw programme list of a [`GuideDocument`] into the
//! date-scoped `{start, end, title, desc}` entries the API serves. When
//! a resolved channel has no programmes for the requested date, a
//! synthesized 24-hour placeholder schedule stands in; "no data" is
//! never an error on this path.

use chrono::Utc;
use chrono_tz::Asia::Shanghai;
use serde::Serialize;

use crate::guide::GuideDocument;

/// Placeholder title used by the synthesized schedule
pub const PLACEHOLDER_TITLE: &str = "精彩节目-暂未提供节目预告信息";

/// One formatted programme entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgrammeEntry {
    pub start: String,
    pub end: String,
    pub title: String,
    pub desc: String,
}

/// The response body served for a schedule query
#[derive(Debug, Clone, Serialize)]
pub struct DaySchedule {
    pub date: String,
    pub channel_name: String,
    pub epg_data: Vec<ProgrammeEntry>,
}

/// Split a raw XMLTV timestamp into `(date, time)` display fields
///
/// A value already containing a hyphen is treated as pre-formatted and
/// returned unchanged with an empty time. Otherwise the fields are
/// fixed-width: fewer than 8 bytes (or a split landing off a character
/// boundary) yields two empty strings, 8..11 bytes yield only the date,
/// 12 or more also yield `HH:MM`.
pub fn format_date_time(raw: &str) -> (String, String) {
    if raw.contains('-') {
        return (raw.to_string(), String::new());
    }

    let (Some(year), Some(month), Some(day)) = (raw.get(0..4), raw.get(4..6), raw.get(6..8))
    else {
        return (String::new(), String::new());
    };
    let date = format!("{year}-{month}-{day}");

    let time = match (raw.get(8..10), raw.get(10..12)) {
        (Some(hour), Some(minute)) => format!("{hour}:{minute}"),
        _ => String::new(),
    };

    (date, time)
}

/// 24 hourly placeholder entries, `00:00-01:00` through `23:00-00:00`
pub fn default_schedule() -> Vec<ProgrammeEntry> {
    (0..24)
        .map(|hour| ProgrammeEntry {
            start: format!("{hour:02}:00"),
            end: format!("{:02}:00", (hour + 1) % 24),
            title: PLACEHOLDER_TITLE.to_string(),
            desc: String::new(),
        })
        .collect()
}

/// Extract and format one day's programmes for a resolved channel
///
/// Programmes are matched by exact channel label and the `YYYYMMDD`
/// prefix of their start field. An empty result substitutes the default
/// 24-hour schedule.
pub fn lookup_programmes(channel: &str, guide: &GuideDocument, date: &str) -> Vec<ProgrammeEntry> {
    let compact_date = date.replace('-', "");

    let entries: Vec<ProgrammeEntry> = guide
        .programmes
        .iter()
        .filter(|p| p.channel == channel && p.start.starts_with(&compact_date))
        .map(|p| {
            let (_, start) = format_date_time(&p.start);
            let (_, end) = format_date_time(&p.stop);
            ProgrammeEntry {
                start,
                end,
                title: p.title().to_string(),
                desc: p.desc().to_string(),
            }
        })
        .collect();

    if entries.is_empty() {
        return default_schedule();
    }
    entries
}

/// Current civil date in Beijing, `YYYY-MM-DD`
pub fn today_in_beijing() -> String {
    Utc::now().with_timezone(&Shanghai).format("%Y-%m-%d").to_string()
}
