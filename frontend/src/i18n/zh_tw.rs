#![allow(dead_code, reason = "string tables are referenced selectively per page")]

pub mod common {
    pub const LOADING: &str = "載入中...";
    pub const UNKNOWN_ERROR: &str = "未知錯誤";
}

pub mod error_banner {
    pub const TITLE: &str = "發生錯誤";
    pub const CLOSE_ARIA: &str = "關閉錯誤提示";
}

pub mod nav {
    pub const DASHBOARD: &str = "內容管理";
    pub const ARCHIVES: &str = "典藏索引";
}

pub mod dashboard {
    pub const TITLE: &str = "內容管理";
    pub const LOAD_ERROR: &str = "載入內容時發生錯誤";
    pub const EMPTY: &str = "尚無內容";
    pub const COL_KIND: &str = "類別";
    pub const COL_TITLE: &str = "標題";
    pub const COL_AUTHOR: &str = "作者";
    pub const COL_DATE: &str = "日期";
    pub const COL_UPDATED: &str = "最後更新";
    pub const COL_ACTIONS: &str = "操作";
    pub const KIND_ARTICLE: &str = "觀點文章";
    pub const KIND_PHOTOGRAPH: &str = "光影故事";
    pub const NOT_PUBLISHED: &str = "未發布";
    pub const EDIT: &str = "更新";
    pub const DELETE: &str = "刪除";
    pub const DELETING: &str = "刪除中...";
    pub const CONFIRM_DELETE_ARTICLE_TEMPLATE: &str = "確定要刪除文章「{}」嗎？此操作無法復原。";
    pub const CONFIRM_DELETE_PHOTOGRAPH_TEMPLATE: &str = "確定要刪除照片「{}」嗎？此操作無法復原。";
    pub const DELETED_ARTICLE: &str = "文章已成功刪除";
    pub const DELETED_PHOTOGRAPH: &str = "照片已成功刪除";
    pub const DELETE_FAILED_TEMPLATE: &str = "刪除失敗：{}";
}

pub mod archives {
    pub const TITLE: &str = "典藏索引";
    pub const LOAD_ERROR: &str = "典藏索引獲取失敗";
    pub const EMPTY: &str = "尚無典藏索引";
    pub const COL_CLASS: &str = "分類";
    pub const COL_WEB_NAME: &str = "網站名稱";
    pub const COL_ORG_NAME: &str = "機構名稱";
    pub const COL_LINK: &str = "連結";
}

pub mod not_found {
    pub const TITLE: &str = "404 - 頁面不存在";
    pub const BODY: &str = "抱歉，您要找的頁面不存在。";
}
