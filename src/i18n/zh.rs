//! Chinese translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "星级评分");

    // Details caption
    m.insert(Key::Votes, "票");
    m.insert(Key::NoVotes, "暂无评分");

    // Demo sections
    m.insert(Key::SectionBasic, "基础星级评分");
    m.insert(Key::SectionDetails, "带详情的评分");
    m.insert(Key::SectionCustomColor, "自定义颜色");
    m.insert(Key::SectionEditable, "可编辑评分");
    m.insert(Key::SectionTemplateLoading, "列表加载");

    // Editable section
    m.insert(Key::LastChange, "最近修改");
    m.insert(Key::NoChangeYet, "点击星星进行评分");

    // Template loading
    m.insert(Key::Loading, "加载中...");
    m.insert(Key::LoadFailed, "评分加载失败");
    m.insert(Key::Reload, "重新加载");
    m.insert(Key::EmptyList, "暂无数据");

    // Header
    m.insert(Key::DarkMode, "深色模式");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
