//! Canonical channel catalog
//!
//! The fixed list of channel names the resolver may return. Order
//! matters: equal-quality matches resolve to whichever entry appears
//! first, so the list is an ordered slice and must stay one. A handful
//! of Fujian locals appear twice; the first occurrence always wins, the
//! duplicates are kept so the list stays comparable with the upstream
//! catalog it was taken from.

/// All canonical channel names, in tie-break order
pub const CANONICAL_CHANNELS: &[&str] = &[
    "CCTV-1",
    "CCTV-2",
    "CCTV-3",
    "CCTV-4",
    "CCTV-5",
    "CCTV-5+",
    "CCTV-6",
    "CCTV-7",
    "CCTV-8",
    "CCTV-9",
    "CCTV-10",
    "CCTV-11",
    "CCTV-12",
    "CCTV-13",
    "CCTV-14",
    "CCTV-15",
    "CCTV-16",
    "CCTV16-4K",
    "CCTV-17",
    "CCTV-4K",
    "CCTV-8K",
    "CCTV1",
    "CCTV10",
    "CCTV11",
    "CCTV12",
    "CCTV13",
    "CCTV14",
    "CCTV15",
    "CCTV16",
    "CCTV17",
    "CCTV2",
    "CCTV3",
    "CCTV4",
    "CCTV4K",
    "CCTV4欧洲",
    "CCTV4美洲",
    "CCTV5",
    "CCTV5+",
    "CCTV5PLUS",
    "CCTV6",
    "CCTV7",
    "CCTV8",
    "CCTV8K",
    "CCTV9",
    "CETV1",
    "CETV2",
    "CETV4",
    "CETV5",
    "CGTN英语",
    "CGTN纪录",
    "CGTN俄语",
    "CGTN法语",
    "CGTN西语",
    "CGTN阿语",
    "中国教育1台",
    "中国教育2台",
    "中国教育4台",
    "文化精品",
    "央视台球",
    "风云音乐",
    "第一剧场",
    "风云剧场",
    "怀旧剧场",
    "女性时尚",
    "高尔夫网球",
    "风云足球",
    "电视指南",
    "世界地理",
    "兵器科技",
    "广东卫视",
    "浙江卫视",
    "湖南卫视",
    "北京卫视",
    "湖北卫视",
    "黑龙江卫视",
    "安徽卫视",
    "重庆卫视",
    "东方卫视",
    "甘肃卫视",
    "广西卫视",
    "贵州卫视",
    "海南卫视",
    "河北卫视",
    "河南卫视",
    "吉林卫视",
    "江苏卫视",
    "江西卫视",
    "辽宁卫视",
    "内蒙古卫视",
    "宁夏卫视",
    "青海卫视",
    "山东卫视",
    "山西卫视",
    "陕西卫视",
    "四川卫视",
    "深圳卫视",
    "三沙卫视",
    "天津卫视",
    "西藏卫视",
    "新疆卫视",
    "云南卫视",
    "康巴卫视",
    "兵团卫视",
    "大湾区卫视",
    "广东民生",
    "动漫秀场",
    "乐游",
    "中国天气",
    "都市剧场",
    "法治天地",
    "东方财经",
    "金色学堂",
    "环球奇观",
    "生态环境",
    "山东教育",
    "纪实科教",
    "纯享4K",
    "金鹰纪实",
    "快乐垂钓",
    "先锋乒羽",
    "茶频道",
    "纪实人文",
    "欢笑剧场",
    "生活时尚",
    "福建文体",
    "福建新闻",
    "福建电视剧",
    "福建经济",
    "福建综合",
    "福建乡村振兴",
    "福建电视剧",
    "福建旅游",
    "东南卫视",
    "海峡卫视",
    "厦门卫视",
    "厦门一套",
    "厦门二套",
    "厦门三套",
    "FZTV1",
    "FZTV3",
    "三明公共",
    "三明新闻综合",
    "云霄综合",
    "宁化电视一套",
    "将乐综合",
    "建宁综合",
    "德化新闻综合",
    "新罗电视一套",
    "晋江电视台",
    "永安综合",
    "永泰综合",
    "泰宁新闻",
    "漳州新闻综合",
    "漳浦综合",
    "石狮综合",
    "霞浦综合",
    "龙岩公共",
    "龙岩新闻综合",
    "云霄综合",
    "建宁综合",
    "漳州新闻",
    "龙岩公共",
    "龙岩综合",
    "重温经典",
    "翡翠台",
    "明珠台",
    "凤凰中文",
    "凤凰资讯",
    "凤凰香港",
    "TVB Plus",
    "无线新闻",
    "RTHK31",
    "RTHK32",
    "RTHK33",
    "RTHK34",
];
