//! XMLTV deserialization
//!
//! The upstream feed is an XMLTV document: `tv/channel[]` plus
//! `tv/programme[]` with `channel`/`start`/`stop` attributes and
//! `title`/`desc` character-data children. quick-xml's serde integration
//! maps that shape straight onto [`GuideDocument`].

use super::GuideDocument;

/// Parse an XMLTV body into a guide document
///
/// # Errors
///
/// Returns the quick-xml deserialization error on malformed input; the
/// fetch path treats this as a transient failure and retries.
pub fn parse_xmltv(body: &str) -> Result<GuideDocument, quick_xml::DeError> {
    quick_xml::de::from_str(body)
}
