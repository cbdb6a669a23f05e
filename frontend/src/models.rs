// Mock 資料：只在 `mock` feature 下編譯，供離線開發使用
#![cfg(feature = "mock")]

use chrono::{DateTime, Utc};
use culture_archive_shared::{ArchiveIndex, Article, Photograph};

// 2024-03-01 00:00:00 UTC 起算，每筆間隔一天
const BASE_TS: i64 = 1_709_251_200;
const DAY: i64 = 86_400;

fn day(offset: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(BASE_TS + offset * DAY, 0).unwrap_or_default()
}

/// 五篇文章，其中偶數篇尚未發布。
pub fn mock_articles() -> Vec<Article> {
    let authors = ["林怡君", "陳志明", "王小華"];
    (1..=5)
        .map(|i: i64| Article {
            id: format!("article-{i:03}"),
            title: format!("老街記憶 第 {i} 篇"),
            author: authors[(i as usize) % authors.len()].to_string(),
            slug: format!("old-street-memory-{i}"),
            published_at: (i % 2 == 1).then(|| day(i)),
            created_at: day(i),
            updated_at: day(i * 3),
        })
        .collect()
}

/// 四張照片，更新時間與文章交錯，方便檢查排序。
pub fn mock_photographs() -> Vec<Photograph> {
    (1..=4)
        .map(|i: i64| Photograph {
            id: format!("photo-{i:03}"),
            title: format!("光影紀錄 {i}"),
            author: "張美玲".to_string(),
            description: format!("港口清晨 第 {i} 景"),
            photo_date: day(i - 1),
            created_at: day(i),
            updated_at: day(i * 3 + 1),
        })
        .collect()
}

pub fn mock_archives() -> Vec<ArchiveIndex> {
    let rows = [
        ("博物館", "國立臺灣博物館", "國立臺灣博物館", "https://www.ntm.gov.tw"),
        ("圖書館", "國家圖書館", "國家圖書館", "https://www.ncl.edu.tw"),
        ("檔案館", "國家檔案資訊網", "國家發展委員會檔案管理局", "https://aa.archives.gov.tw"),
    ];
    rows.iter()
        .zip(1_i64..)
        .map(|((class, web_name, org_name, link), id)| ArchiveIndex {
            id,
            class: class.to_string(),
            web_name: web_name.to_string(),
            org_name: org_name.to_string(),
            org_web_link: link.to_string(),
            created_at: day(id),
            updated_at: day(id),
        })
        .collect()
}
