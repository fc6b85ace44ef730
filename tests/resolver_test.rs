//! End-to-end resolution tests over a parsed XMLTV feed and the full
//! canonical catalog

use std::sync::Arc;

use zhinan::guide::xmltv::parse_xmltv;
use zhinan::resolve::{normalize_channel, ChannelResolver, TableUnifier, UNKNOWN_CHANNEL};
use zhinan::schedule::{lookup_programmes, PLACEHOLDER_TITLE};

const DATE: &str = "2024-01-15";

const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<tv>
  <channel id="1"><display-name>CCTV-1 综合</display-name></channel>
  <channel id="2"><display-name>CCTV5+ 体育赛事</display-name></channel>
  <programme channel="CCTV-1" start="20240115093000 +0800" stop="20240115100000 +0800">
    <title lang="zh">朝闻天下</title>
    <desc>新闻资讯节目</desc>
  </programme>
  <programme channel="CCTV5+" start="20240115200000 +0800" stop="20240115220000 +0800">
    <title lang="zh">CBA联赛</title>
  </programme>
  <programme channel="北京卫视" start="20240115190000 +0800" stop="20240115193000 +0800">
    <title lang="zh">北京新闻</title>
  </programme>
  <programme channel="翡翠台" start="20240115180000 +0800" stop="20240115183000 +0800">
    <title lang="zh">六点半新闻</title>
  </programme>
  <programme channel="凤凰资讯" start="20240115120000 +0800" stop="20240115130000 +0800">
    <title lang="zh">正点新闻</title>
  </programme>
  <programme channel="湖南卫视" start="20240116100000 +0800" stop="20240116110000 +0800">
    <title lang="zh">次日节目</title>
  </programme>
  <programme channel="江苏卫视" start="20240115210000 +0800" stop="20240115220000 +0800">
    <title></title>
  </programme>
</tv>"#;

fn resolver() -> ChannelResolver {
    ChannelResolver::new(Arc::new(TableUnifier))
}

#[test]
fn test_decorated_query_resolves_to_catalog_entry() {
    let guide = parse_xmltv(FEED).unwrap();
    assert_eq!(
        resolver().resolve("CCTV5+1080P[HD]", &guide, DATE),
        "CCTV5+"
    );
}

#[test]
fn test_quality_suffixes_are_ignored() {
    let guide = parse_xmltv(FEED).unwrap();
    assert_eq!(
        resolver().resolve("北京卫视-4K超清", &guide, DATE),
        "北京卫视"
    );
}

#[test]
fn test_btv_shorthand_resolves_to_beijing() {
    let guide = parse_xmltv(FEED).unwrap();
    assert_eq!(resolver().resolve("BTV", &guide, DATE), "北京卫视");
}

#[test]
fn test_traditional_script_query() {
    let guide = parse_xmltv(FEED).unwrap();
    assert_eq!(resolver().resolve("翡翠臺", &guide, DATE), "翡翠台");
    assert_eq!(resolver().resolve("鳳凰資訊", &guide, DATE), "凤凰资讯");
}

#[test]
fn test_data_gate_excludes_other_dates() {
    let guide = parse_xmltv(FEED).unwrap();
    // 湖南卫视 only has data on the 16th.
    assert_eq!(resolver().resolve("湖南卫视", &guide, DATE), UNKNOWN_CHANNEL);
    assert_eq!(resolver().resolve("湖南卫视", &guide, "2024-01-16"), "湖南卫视");
}

#[test]
fn test_data_gate_excludes_empty_titles() {
    let guide = parse_xmltv(FEED).unwrap();
    // 江苏卫视's only programme has an empty title.
    assert_eq!(resolver().resolve("江苏卫视", &guide, DATE), UNKNOWN_CHANNEL);
}

#[test]
fn test_unknown_query_yields_sentinel_and_placeholder_schedule() {
    let guide = parse_xmltv(FEED).unwrap();
    let resolved = resolver().resolve("不存在的电视台名字", &guide, DATE);
    assert_eq!(resolved, UNKNOWN_CHANNEL);

    let entries = lookup_programmes(&resolved, &guide, DATE);
    assert_eq!(entries.len(), 24);
    assert!(entries.iter().all(|e| e.title == PLACEHOLDER_TITLE));
}

#[test]
fn test_resolved_channel_yields_formatted_entries() {
    let guide = parse_xmltv(FEED).unwrap();
    let resolved = resolver().resolve("CCTV5+ 超清", &guide, DATE);
    assert_eq!(resolved, "CCTV5+");

    let entries = lookup_programmes(&resolved, &guide, DATE);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].start, "20:00");
    assert_eq!(entries[0].end, "22:00");
    assert_eq!(entries[0].title, "CBA联赛");
}

#[test]
fn test_normalization_agrees_with_resolution() {
    // The resolver normalizes internally; pre-normalized input resolves
    // to the same entry.
    let guide = parse_xmltv(FEED).unwrap();
    let raw = "CCTV5+1080P[HD]";
    assert_eq!(
        resolver().resolve(raw, &guide, DATE),
        resolver().resolve(&normalize_channel(raw), &guide, DATE)
    );
}
