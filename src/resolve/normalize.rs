//! Channel name normalization
//!
//! Upstream channel labels carry inconsistent decoration: resolution and
//! bitrate tags, marketing suffixes, stray hyphens and whitespace.
//! [`normalize_channel`] collapses all of that into a comparable
//! canonical form before matching. The transform is pure, deterministic
//! and idempotent.

use regex::Regex;
use std::sync::LazyLock;

// Pre-compiled patterns, applied in this order.

// Bracketed annotations, bitrate (8M), pixel resolution (1080P), frame rate (50FPS)
static DECORATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]|[0-9.]+M|[0-9]{3,4}[pP]|[0-9.]+FPS").unwrap());

// Quality and marketing tokens; 高清/频道/HD only when trailing
static QUALITY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"超清|高清$|蓝光|频道$|标清|FHD|HD$|HEVC|HDR|4K|-|\s+").unwrap());

// CCTV designator: number or plus, optional 4K/8K suffix
static CCTV_NUMERIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"CCTV[0-9+]{1,2}[48]?K?").unwrap());

// Non-numeric run after CCTV, e.g. a prefecture suffix
static CCTV_SUFFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"CCTV[^0-9]+").unwrap());

/// Normalize a raw channel label into canonical form
///
/// Steps, in order: upper-case; strip bracketed/resolution/frame-rate
/// decoration; strip quality tokens, hyphens and whitespace; canonicalize
/// CCTV-style numbering; map the BTV shorthand to 北京 for everything
/// else.
pub fn normalize_channel(raw: &str) -> String {
    let mut id = raw.to_uppercase();
    id = DECORATION_REGEX.replace_all(&id, "").trim().to_string();
    id = QUALITY_REGEX.replace_all(&id, "").trim().to_string();

    if id.contains("CCTV") && id != "CCTV4K" {
        if let Some(m) = CCTV_NUMERIC_REGEX.find(&id) {
            id = m.as_str().replace("4K", "");
        } else if let Some(m) = CCTV_SUFFIX_REGEX.find(&id) {
            id = m.as_str().replace("CCTV", "");
        }
    } else {
        id = id.replace("BTV", "北京");
    }

    id
}
