//! Integration tests for the feed client.
#[cfg(test)]
mod tests {
    use ca_cli::feed_client::FeedClient;
    use culture_archive_shared::ContentKind;
    use serde_json::{json, Value};
    use wiremock::{
        matchers::{header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn article(id: &str, updated_at: &str) -> Value {
        json!({
            "id": id,
            "title": format!("Article {id}"),
            "author": "Lin",
            "slug": format!("article-{id}"),
            "publishedAt": null,
            "createdAt": "2024-03-01T00:00:00.000Z",
            "updatedAt": updated_at
        })
    }

    fn photograph(id: &str, updated_at: &str) -> Value {
        json!({
            "id": id,
            "title": format!("Photo {id}"),
            "author": "Chen",
            "description": "Harbour at dawn",
            "photoDate": "1968-05-01T00:00:00.000Z",
            "createdAt": "2024-03-01T00:00:00.000Z",
            "updatedAt": updated_at
        })
    }

    async fn mount_list(server: &MockServer, route: &str, status: u16, body: Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(server)
            .await;
    }

    fn client(server: &MockServer, token: Option<&str>) -> FeedClient {
        FeedClient::new(&format!("{}/api/", server.uri()), token.map(str::to_string))
            .expect("build client")
    }

    #[tokio::test]
    async fn load_merges_both_sources_newest_first() {
        let server = MockServer::start().await;
        mount_list(
            &server,
            "/api/articles",
            200,
            json!({
                "success": true,
                "data": [
                    article("a-t3", "2024-03-03T00:00:00.000Z"),
                    article("a-t1", "2024-03-01T00:00:00.000Z")
                ]
            }),
        )
        .await;
        mount_list(
            &server,
            "/api/photographs",
            200,
            json!({ "success": true, "data": [photograph("p-t2", "2024-03-02T00:00:00.000Z")] }),
        )
        .await;

        let outcome = client(&server, None).load().await;
        let keys: Vec<String> = outcome.items.iter().map(|item| item.display_key()).collect();
        assert_eq!(keys, vec!["article-a-t3", "photograph-p-t2", "article-a-t1"]);
        assert!(outcome.failures.is_empty());
    }

    #[tokio::test]
    async fn failing_photograph_source_contributes_nothing() {
        let server = MockServer::start().await;
        mount_list(
            &server,
            "/api/articles",
            200,
            json!({
                "success": true,
                "data": [
                    article("a1", "2024-03-01T00:00:00.000Z"),
                    article("a2", "2024-03-02T00:00:00.000Z")
                ]
            }),
        )
        .await;
        mount_list(
            &server,
            "/api/photographs",
            500,
            json!({ "success": false, "error": "照片獲取失敗" }),
        )
        .await;

        let outcome = client(&server, None).load().await;
        assert_eq!(outcome.items.len(), 2);
        assert!(outcome
            .items
            .iter()
            .all(|item| item.kind() == ContentKind::Article));
        assert_eq!(outcome.failures, vec![(ContentKind::Photograph, "照片獲取失敗".to_string())]);
        assert!(!outcome.all_sources_failed());
    }

    #[tokio::test]
    async fn non_envelope_failure_reports_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let outcome = client(&server, None).load().await;
        assert!(outcome.all_sources_failed());
        assert!(outcome.failures[0].1.contains("502"));
    }

    #[tokio::test]
    async fn delete_forwards_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/photographs/p1"))
            .and(header("authorization", "Bearer curator"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "success": true, "message": "照片已成功刪除" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let message = client(&server, Some("curator"))
            .delete(ContentKind::Photograph, "p1")
            .await
            .expect("delete succeeds");
        assert_eq!(message.as_deref(), Some("照片已成功刪除"));
    }

    #[tokio::test]
    async fn delete_surfaces_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/articles/a1"))
            .respond_with(
                ResponseTemplate::new(403)
                    .set_body_json(json!({ "success": false, "error": "需要管理員權限" })),
            )
            .mount(&server)
            .await;

        let err = client(&server, None)
            .delete(ContentKind::Article, "a1")
            .await
            .expect_err("delete rejected");
        assert_eq!(err, "需要管理員權限");
    }
}
