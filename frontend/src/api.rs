#[cfg(not(feature = "mock"))]
use gloo_net::http::{Request, Response};
#[cfg(not(feature = "mock"))]
use serde::de::DeserializeOwned;
use culture_archive_shared::{ArchiveIndex, Article, ContentKind, Envelope, Photograph};

#[cfg(feature = "mock")]
use crate::models;

// API base URL - 編譯時從環境變數讀取，預設本地開發位址
#[cfg(not(feature = "mock"))]
pub const API_BASE: &str = match option_env!("ARCHIVE_API_BASE") {
    Some(url) => url,
    None => "http://localhost:3000/api",
};

/// 取得文章列表（保留原始 envelope，失敗與否由呼叫端判斷）
pub async fn fetch_articles() -> Result<Envelope<Vec<Article>>, String> {
    #[cfg(feature = "mock")]
    {
        return Ok(Envelope::data(models::mock_articles()));
    }

    #[cfg(not(feature = "mock"))]
    {
        get_envelope(&format!("{}/{}", API_BASE, ContentKind::Article.api_collection())).await
    }
}

/// 取得照片列表
pub async fn fetch_photographs() -> Result<Envelope<Vec<Photograph>>, String> {
    #[cfg(feature = "mock")]
    {
        return Ok(Envelope::data(models::mock_photographs()));
    }

    #[cfg(not(feature = "mock"))]
    {
        get_envelope(&format!("{}/{}", API_BASE, ContentKind::Photograph.api_collection())).await
    }
}

/// 取得典藏索引列表
pub async fn fetch_archives() -> Result<Vec<ArchiveIndex>, String> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_archives());
    }

    #[cfg(not(feature = "mock"))]
    {
        get_envelope::<Vec<ArchiveIndex>>(&format!("{}/archives", API_BASE))
            .await?
            .into_data()
    }
}

/// Deletes one article or photograph. `Ok` carries the server message when
/// there is one; `Err` carries the server's error text.
pub async fn delete_content(kind: ContentKind, id: &str) -> Result<Option<String>, String> {
    #[cfg(feature = "mock")]
    {
        let _ = (kind, id);
        return Ok(None);
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/{}/{}", API_BASE, kind.api_collection(), urlencoding::encode(id));
        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        let envelope: Envelope<serde_json::Value> = read_envelope(response).await?;
        if envelope.success {
            Ok(envelope.message)
        } else {
            Err(envelope
                .error
                .unwrap_or_else(|| crate::i18n::current::common::UNKNOWN_ERROR.to_string()))
        }
    }
}

#[cfg(not(feature = "mock"))]
async fn get_envelope<T: DeserializeOwned>(url: &str) -> Result<Envelope<T>, String> {
    let response = Request::get(url)
        .header("Cache-Control", "no-cache, no-store, max-age=0")
        .header("Pragma", "no-cache")
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;
    read_envelope(response).await
}

// 失敗回應同樣帶有 envelope，只有在內容無法解析時才回報狀態碼
#[cfg(not(feature = "mock"))]
async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<Envelope<T>, String> {
    let status = response.status();
    response.json::<Envelope<T>>().await.map_err(|e| {
        if status == 200 {
            format!("Parse error: {:?}", e)
        } else {
            format!("HTTP error: {}", status)
        }
    })
}
