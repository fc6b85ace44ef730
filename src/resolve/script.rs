//! Traditional-to-simplified script conversion boundary
//!
//! Queries may arrive in traditional script (鳳凰衛視) while the catalog
//! uses simplified forms. The resolver widens matching with a simplified
//! variant of the query, obtained through the [`ScriptUnifier`]
//! capability. Conversion is best-effort: on error the caller falls back
//! to the unconverted text, so an implementation is never load-bearing.

use std::collections::HashMap;
use std::sync::LazyLock;
use thiserror::Error;

/// Errors from a script conversion engine
#[derive(Error, Debug)]
pub enum ScriptError {
    /// The engine could not process the input
    #[error("script conversion failed: {0}")]
    Conversion(String),
}

/// Capability to convert traditional Chinese text to simplified form
pub trait ScriptUnifier: Send + Sync {
    /// Convert `text` to simplified script
    ///
    /// # Errors
    ///
    /// Implementations may fail; callers must treat failure as non-fatal
    /// and keep the original text.
    fn simplify(&self, text: &str) -> Result<String, ScriptError>;
}

// Traditional forms seen in broadcast channel names. Not a general
// converter: unmapped characters pass through unchanged.
static T2S_TABLE: LazyLock<HashMap<char, char>> = LazyLock::new(|| {
    [
        ('衛', '卫'),
        ('視', '视'),
        ('臺', '台'),
        ('鳳', '凤'),
        ('無', '无'),
        ('線', '线'),
        ('電', '电'),
        ('聞', '闻'),
        ('資', '资'),
        ('訊', '讯'),
        ('紀', '纪'),
        ('錄', '录'),
        ('語', '语'),
        ('劇', '剧'),
        ('場', '场'),
        ('樂', '乐'),
        ('頻', '频'),
        ('體', '体'),
        ('華', '华'),
        ('國', '国'),
        ('際', '际'),
        ('廣', '广'),
        ('東', '东'),
        ('經', '经'),
        ('濟', '济'),
        ('綜', '综'),
        ('藝', '艺'),
        ('風', '风'),
        ('雲', '云'),
        ('龍', '龙'),
        ('門', '门'),
        ('廈', '厦'),
        ('灣', '湾'),
        ('區', '区'),
        ('環', '环'),
        ('內', '内'),
        ('遼', '辽'),
        ('蘇', '苏'),
        ('陝', '陕'),
        ('寧', '宁'),
        ('貴', '贵'),
        ('見', '见'),
        ('億', '亿'),
        ('衞', '卫'),
    ]
    .into_iter()
    .collect()
});

/// Table-driven unifier covering channel-name vocabulary
#[derive(Debug, Default, Clone, Copy)]
pub struct TableUnifier;

impl ScriptUnifier for TableUnifier {
    fn simplify(&self, text: &str) -> Result<String, ScriptError> {
        Ok(text
            .chars()
            .map(|c| T2S_TABLE.get(&c).copied().unwrap_or(c))
            .collect())
    }
}
