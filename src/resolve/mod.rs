//! Channel resolution
//!
//! Maps a noisy, free-form channel query onto exactly one canonical
//! catalog name, or the 未知频道 sentinel. Matching runs in three tiers
//! of decreasing precision, and no candidate is ever returned unless it
//! is backed by actual programme data for the requested date:
//!
//! 1. prefix match against the catalog, first entry in order wins;
//! 2. substring match, preferring entries that start with a Han
//!    character (the catalog is predominantly Chinese, so these match
//!    user intent more often);
//! 3. progressive shrinking of the query from the right, keeping the
//!    longest qualifying canonical name.

use regex::Regex;
use std::sync::Arc;
use std::sync::LazyLock;

use crate::guide::GuideDocument;

pub mod catalog;
pub mod normalize;
pub mod script;

pub use catalog::CANONICAL_CHANNELS;
pub use normalize::normalize_channel;
pub use script::{ScriptError, ScriptUnifier, TableUnifier};

/// Sentinel returned when no catalog entry qualifies
pub const UNKNOWN_CHANNEL: &str = "未知频道";

static HAN_PREFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\p{Han}").unwrap());

fn starts_with_han(s: &str) -> bool {
    HAN_PREFIX_REGEX.is_match(s)
}

/// True iff the guide holds at least one programme for `channel` on
/// `date` with a non-empty title
///
/// The programme's label is matched by substring (upstream labels are
/// decorated), the date by the `YYYYMMDD` prefix of the raw start field.
pub fn has_data(channel: &str, guide: &GuideDocument, date: &str) -> bool {
    let needle = channel.to_uppercase();
    let compact_date = date.replace('-', "");
    guide.programmes.iter().any(|p| {
        p.channel.to_uppercase().contains(&needle)
            && p.start.starts_with(&compact_date)
            && !p.title().is_empty()
    })
}

/// Tiered matcher from normalized queries to canonical channel names
pub struct ChannelResolver {
    catalog: &'static [&'static str],
    unifier: Arc<dyn ScriptUnifier>,
}

impl ChannelResolver {
    /// Resolver over the full canonical catalog
    pub fn new(unifier: Arc<dyn ScriptUnifier>) -> Self {
        Self::with_catalog(CANONICAL_CHANNELS, unifier)
    }

    /// Resolver over an explicit catalog (iteration order is part of the
    /// matching contract, so tests pin their own)
    pub fn with_catalog(
        catalog: &'static [&'static str],
        unifier: Arc<dyn ScriptUnifier>,
    ) -> Self {
        Self { catalog, unifier }
    }

    /// Resolve a raw query against the guide for one date
    ///
    /// Returns a canonical name guaranteed to have data for `date`, or
    /// [`UNKNOWN_CHANNEL`].
    pub fn resolve(&self, query: &str, guide: &GuideDocument, date: &str) -> String {
        let normalized = normalize_channel(query);
        let simplified = match self.unifier.simplify(&normalized) {
            Ok(s) => s,
            Err(e) => {
                tracing::debug!(error = %e, query = %normalized, "script conversion failed, using original");
                normalized.clone()
            }
        };

        // Prefix tier; substring candidates are recorded in the same pass.
        let mut priority_match: Option<&str> = None;
        let mut secondary_match: Option<&str> = None;

        for entry in self.catalog.iter().copied() {
            let upper = entry.to_uppercase();
            if upper.starts_with(&normalized) || upper.starts_with(&simplified) {
                if has_data(entry, guide, date) {
                    return entry.to_string();
                }
            } else if upper.contains(&normalized) || upper.contains(&simplified) {
                if starts_with_han(entry) {
                    if priority_match.is_none() {
                        priority_match = Some(entry);
                    }
                } else if secondary_match.is_none() {
                    secondary_match = Some(entry);
                }
            }
        }

        // Substring tier: Han-prefixed candidate first.
        if let Some(candidate) = priority_match {
            if has_data(candidate, guide, date) {
                return candidate.to_string();
            }
        }
        if let Some(candidate) = secondary_match {
            if has_data(candidate, guide, date) {
                return candidate.to_string();
            }
        }

        // Progressive-prefix fallback: shrink the query one character at a
        // time, keep the longest qualifying canonical name overall.
        let mut matched: Option<&str> = None;
        let mut boundaries: Vec<usize> = normalized
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .collect();
        boundaries.reverse();
        for end in boundaries {
            let sub_query = &normalized[..end];
            for entry in self.catalog.iter().copied() {
                if entry.to_uppercase().starts_with(sub_query)
                    && has_data(entry, guide, date)
                    && entry.len() > matched.map_or(0, str::len)
                {
                    matched = Some(entry);
                }
            }
        }

        matched.map_or_else(|| UNKNOWN_CHANNEL.to_string(), str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::Programme;

    const DATE: &str = "2024-01-15";

    fn guide_with(channels: &[&str]) -> GuideDocument {
        GuideDocument {
            channels: Vec::new(),
            programmes: channels
                .iter()
                .map(|c| Programme::new(c, "20240115093000 +0800", "20240115100000 +0800", "节目", ""))
                .collect(),
        }
    }

    fn resolver(catalog: &'static [&'static str]) -> ChannelResolver {
        ChannelResolver::with_catalog(catalog, Arc::new(TableUnifier))
    }

    #[test]
    fn test_has_data_requires_nonempty_title() {
        let mut guide = guide_with(&[]);
        guide
            .programmes
            .push(Programme::new("CCTV1", "20240115093000", "20240115100000", "", ""));
        assert!(!has_data("CCTV1", &guide, DATE));

        guide
            .programmes
            .push(Programme::new("CCTV1", "20240115100000", "20240115110000", "新闻", ""));
        assert!(has_data("CCTV1", &guide, DATE));
    }

    #[test]
    fn test_has_data_is_date_scoped() {
        let guide = guide_with(&["CCTV1"]);
        assert!(has_data("CCTV1", &guide, "2024-01-15"));
        assert!(!has_data("CCTV1", &guide, "2024-01-16"));
    }

    #[test]
    fn test_has_data_matches_label_substring() {
        let guide = guide_with(&["超清 CCTV1 备用源"]);
        assert!(has_data("CCTV1", &guide, DATE));
    }

    #[test]
    fn test_prefix_tier_first_in_catalog_order_wins() {
        // Both entries start with the query; catalog order decides.
        static CATALOG: &[&str] = &["CCTV1", "CCTV10"];
        let guide = guide_with(&["CCTV1", "CCTV10"]);
        assert_eq!(resolver(CATALOG).resolve("CCTV1", &guide, DATE), "CCTV1");

        static REVERSED: &[&str] = &["CCTV10", "CCTV1"];
        assert_eq!(resolver(REVERSED).resolve("CCTV1", &guide, DATE), "CCTV10");
    }

    #[test]
    fn test_prefix_entry_without_data_is_skipped() {
        static CATALOG: &[&str] = &["北京卫视", "北京纪实"];
        // Both entries prefix-match the query; only the second has data.
        let guide = guide_with(&["北京纪实"]);
        assert_eq!(resolver(CATALOG).resolve("北京", &guide, DATE), "北京纪实");
    }

    #[test]
    fn test_substring_tier_prefers_han_prefixed_entry() {
        // Neither entry starts with the query; 凤凰资讯 contains it and
        // starts with a Han character, so it outranks the Latin-prefixed one.
        static CATALOG: &[&str] = &["TVB资讯台", "凤凰资讯"];
        let guide = guide_with(&["TVB资讯台", "凤凰资讯"]);
        assert_eq!(resolver(CATALOG).resolve("资讯", &guide, DATE), "凤凰资讯");
    }

    #[test]
    fn test_substring_tier_falls_back_to_secondary() {
        static CATALOG: &[&str] = &["TVB资讯台", "凤凰资讯"];
        // Only the Latin-prefixed candidate has data.
        let guide = guide_with(&["TVB资讯台"]);
        assert_eq!(resolver(CATALOG).resolve("资讯", &guide, DATE), "TVB资讯台");
    }

    #[test]
    fn test_traditional_query_matches_via_unifier() {
        static CATALOG: &[&str] = &["凤凰资讯"];
        let guide = guide_with(&["凤凰资讯"]);
        assert_eq!(resolver(CATALOG).resolve("鳳凰資訊", &guide, DATE), "凤凰资讯");
    }

    #[test]
    fn test_failing_unifier_degrades_to_original_query() {
        struct Failing;
        impl ScriptUnifier for Failing {
            fn simplify(&self, _text: &str) -> Result<String, ScriptError> {
                Err(ScriptError::Conversion("engine offline".into()))
            }
        }
        static CATALOG: &[&str] = &["凤凰资讯"];
        let guide = guide_with(&["凤凰资讯"]);
        let resolver = ChannelResolver::with_catalog(CATALOG, Arc::new(Failing));
        assert_eq!(resolver.resolve("凤凰资讯", &guide, DATE), "凤凰资讯");
    }

    #[test]
    fn test_progressive_fallback_shrinks_query() {
        static CATALOG: &[&str] = &["XYZ"];
        let guide = guide_with(&["XYZ"]);
        assert_eq!(resolver(CATALOG).resolve("XYZ123", &guide, DATE), "XYZ");
    }

    #[test]
    fn test_progressive_fallback_keeps_longest_name() {
        static CATALOG: &[&str] = &["湖南卫视", "湖南卫视国际"];
        // Query only shares the first character after shrinking.
        let guide = guide_with(&["湖南卫视", "湖南卫视国际"]);
        assert_eq!(
            resolver(CATALOG).resolve("湖南台", &guide, DATE),
            "湖南卫视国际"
        );
    }

    #[test]
    fn test_no_match_returns_sentinel() {
        static CATALOG: &[&str] = &["CCTV1"];
        let guide = guide_with(&["CCTV1"]);
        assert_eq!(
            resolver(CATALOG).resolve("完全不存在的频道名", &guide, DATE),
            UNKNOWN_CHANNEL
        );
    }

    #[test]
    fn test_empty_guide_returns_sentinel() {
        static CATALOG: &[&str] = &["CCTV1"];
        let guide = guide_with(&[]);
        assert_eq!(resolver(CATALOG).resolve("CCTV1", &guide, DATE), UNKNOWN_CHANNEL);
    }

    #[test]
    fn test_full_catalog_smoke() {
        let guide = guide_with(&["CCTV-1", "北京卫视"]);
        let resolver = ChannelResolver::new(Arc::new(TableUnifier));
        assert_eq!(resolver.resolve("CCTV1", &guide, DATE), "CCTV-1");
        assert_eq!(resolver.resolve("BTV 4K", &guide, DATE), "北京卫视");
    }
}
