//! Guide document model
//!
//! A [`GuideDocument`] is one fetch cycle's worth of parsed XMLTV data:
//! the channel declarations (informational only) and the programme list
//! the resolver and schedule lookup operate on. A document is built once
//! by the fetch path and never mutated afterwards; the cache replaces the
//! whole value on refresh.

use serde::Deserialize;

pub mod cache;
pub mod xmltv;

pub use cache::GuideCache;

/// Parsed guide document for a single fetch cycle
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GuideDocument {
    /// Channel declarations from the upstream `<channel>` elements
    #[serde(rename = "channel", default)]
    pub channels: Vec<GuideChannel>,

    /// All programme entries from the upstream `<programme>` elements
    #[serde(rename = "programme", default)]
    pub programmes: Vec<Programme>,
}

impl GuideDocument {
    /// Check whether the document carries any programme data at all
    pub fn is_empty(&self) -> bool {
        self.programmes.is_empty()
    }
}

/// A channel declaration (`<channel id=...>`)
///
/// Not consulted by the resolver; matching runs against the free-form
/// `channel` labels on the programmes instead.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GuideChannel {
    #[serde(rename = "@id", default)]
    pub id: String,

    /// `<display-name>` children; upstream feeds may carry several
    #[serde(rename = "display-name", default)]
    display_names: Vec<TextContent>,
}

impl GuideChannel {
    /// First display name, or the empty string
    pub fn display_name(&self) -> &str {
        self.display_names.first().map_or("", |t| t.text.as_str())
    }
}

/// A single programme entry (`<programme channel=... start=... stop=...>`)
///
/// `channel` is a free-form label from the upstream source and is not
/// guaranteed to equal any canonical catalog name. `start`/`stop` stay as
/// raw XMLTV strings; the schedule module extracts date and time fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Programme {
    #[serde(rename = "@channel", default)]
    pub channel: String,

    #[serde(rename = "@start", default)]
    pub start: String,

    #[serde(rename = "@stop", default)]
    pub stop: String,

    #[serde(rename = "title", default)]
    titles: Vec<TextContent>,

    #[serde(rename = "desc", default)]
    descs: Vec<TextContent>,
}

impl Programme {
    /// Build a programme entry directly, bypassing the XML layer
    pub fn new(channel: &str, start: &str, stop: &str, title: &str, desc: &str) -> Self {
        Self {
            channel: channel.to_string(),
            start: start.to_string(),
            stop: stop.to_string(),
            titles: vec![TextContent {
                text: title.to_string(),
            }],
            descs: vec![TextContent {
                text: desc.to_string(),
            }],
        }
    }

    /// First `<title>` text, or the empty string
    pub fn title(&self) -> &str {
        self.titles.first().map_or("", |t| t.text.as_str())
    }

    /// First `<desc>` text, or the empty string
    pub fn desc(&self) -> &str {
        self.descs.first().map_or("", |t| t.text.as_str())
    }
}

/// Character data of a child element, ignoring its attributes
/// (XMLTV titles usually carry a `lang` attribute)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextContent {
    #[serde(rename = "$text", default)]
    pub text: String,
}
