//! User-facing archive messages. The HTTP API and the CLI both report
//! outcomes with these strings.

/// A required field is absent, null or empty.
pub const FIELDS_REQUIRED: &str = "所有欄位皆為必填";
/// The request body is not a JSON object.
pub const MALFORMED_BODY: &str = "請求內容格式錯誤";
/// No archive index has the requested id.
pub const NOT_FOUND: &str = "典藏索引不存在";
/// Successful delete.
pub const DELETED: &str = "典藏索引已成功刪除";
/// Mutation attempted without valid admin credentials.
pub const ADMIN_REQUIRED: &str = "需要管理員權限";

/// Listing or reading failed in the store.
pub const FETCH_FAILED: &str = "典藏索引獲取失敗";
/// Insert failed in the store.
pub const CREATE_FAILED: &str = "典藏索引建立失敗";
/// Update failed in the store.
pub const UPDATE_FAILED: &str = "典藏索引更新失敗";
/// Delete failed in the store.
pub const DELETE_FAILED: &str = "典藏索引刪除失敗";

/// Path outside the API.
pub const ROUTE_NOT_FOUND: &str = "找不到請求的資源";
/// Known path, unsupported HTTP method.
pub const METHOD_NOT_ALLOWED: &str = "不支援的請求方法";
