//! Issue検索とリリース一覧取得の統合テスト
//!
//! ページングのマージ・終了条件をモックサーバー越しに検証する

use jira_fetch::{Auth, JiraClient, JiraConfig, SearchOptions};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> JiraClient {
    let config = JiraConfig::new(
        base_url,
        Auth::Basic {
            username: "test@example.com".to_string(),
            api_token: "test_token".to_string(),
        },
    )
    .unwrap();
    JiraClient::new(config).unwrap()
}

#[tokio::test]
async fn test_get_issues_merges_all_token_pages() {
    // Given: 1件ずつ3ページ（isLast=false,false,true）を返す検索エンドポイント
    let mock_server = MockServer::start().await;

    // トークン付きページを先にマウントし、初回ページを最後に落とす
    Mock::given(method("GET"))
        .and(path("/rest/api/3/search/jql"))
        .and(query_param("nextPageToken", "t2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "issues": [{ "id": "2", "key": "LPD-2", "fields": { "summary": "two" } }],
            "isLast": false,
            "nextPageToken": "t3"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/api/3/search/jql"))
        .and(query_param("nextPageToken", "t3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "issues": [{ "id": "3", "key": "LPD-3", "fields": { "summary": "three" } }],
            "isLast": true
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/api/3/search/jql"))
        .and(query_param("jql", "project = LPD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "issues": [{ "id": "1", "key": "LPD-1", "fields": { "summary": "one" } }],
            "isLast": false,
            "nextPageToken": "t2"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());

    // When: 検索を実行
    let issues = client
        .get_issues("project = LPD", SearchOptions::new())
        .await
        .unwrap();

    // Then: ちょうど3件のIssueがキーで一意化されて返る
    assert_eq!(issues.len(), 3);
    assert_eq!(
        issues.get("LPD-1").unwrap().fields.get("summary").unwrap(),
        "one"
    );
    assert_eq!(
        issues.get("LPD-3").unwrap().fields.get("summary").unwrap(),
        "three"
    );
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_get_issues_sends_max_results() {
    // Given: maxResults=100を検証する検索エンドポイント
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/3/search/jql"))
        .and(query_param("maxResults", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "issues": [],
            "isLast": true
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());

    // When: 検索を実行
    let issues = client
        .get_issues("project = LPD", SearchOptions::new())
        .await
        .unwrap();

    // Then: ページサイズ定数がそのまま送信される
    assert!(issues.is_empty());
}

#[tokio::test]
async fn test_get_releases_drains_offset_pages() {
    // Given: total=250を100/100/50の3ページで返すバージョンエンドポイント
    let mock_server = MockServer::start().await;

    for (start_at, count) in [(0usize, 100usize), (100, 100), (200, 50)] {
        let values: Vec<serde_json::Value> = (start_at..start_at + count)
            .map(|i| json!({ "id": i.to_string(), "name": format!("7.4.{}", i), "released": true }))
            .collect();

        Mock::given(method("GET"))
            .and(path("/rest/api/3/project/LPD/version"))
            .and(query_param("status", "released"))
            .and(query_param("startAt", start_at.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "startAt": start_at,
                "maxResults": 100,
                "total": 250,
                "values": values
            })))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let client = test_client(&mock_server.uri());

    // When: リリース一覧を取得
    let releases = client.get_releases("LPD").await.unwrap();

    // Then: ちょうど3リクエストで250件がマージされる
    assert_eq!(releases.len(), 250);
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_get_releases_mid_page_error_returns_partial() {
    // Given: 2ページ目が503を返すバージョンエンドポイント
    let mock_server = MockServer::start().await;

    let values: Vec<serde_json::Value> = (0..100)
        .map(|i| json!({ "id": i.to_string(), "name": format!("7.4.{}", i), "released": true }))
        .collect();

    Mock::given(method("GET"))
        .and(path("/rest/api/3/project/LPD/version"))
        .and(query_param("startAt", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "startAt": 0,
            "maxResults": 100,
            "total": 250,
            "values": values
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/api/3/project/LPD/version"))
        .and(query_param("startAt", "100"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());

    // When: リリース一覧を取得
    let releases = client.get_releases("LPD").await.unwrap();

    // Then: 蓄積済みの1ページ目のみが返る
    assert_eq!(releases.len(), 100);
}

#[tokio::test]
async fn test_duplicate_keys_across_pages_are_unique() {
    // Given: 2ページで同じキーを返す検索エンドポイント
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/3/search/jql"))
        .and(query_param("nextPageToken", "t2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "issues": [{ "id": "1", "key": "LPD-1", "fields": { "summary": "again" } }],
            "isLast": true
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/api/3/search/jql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "issues": [{ "id": "1", "key": "LPD-1", "fields": { "summary": "first" } }],
            "isLast": false,
            "nextPageToken": "t2"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());

    // When: 検索を実行
    let issues = client
        .get_issues("project = LPD", SearchOptions::new())
        .await
        .unwrap();

    // Then: キーは一意でマッピングは1件
    assert_eq!(issues.len(), 1);
}
