use crate::client::JiraClient;
use crate::error::{Error, Result};
use crate::models::{Issue, IssuePage, ValuesPage};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// 全エンドポイント共通のページサイズ
pub const PAGE_SIZE: u32 = 100;

/// オフセット方式のフェッチ結果
///
/// `complete`は最終ページまでエラーなく辿り切れたかどうか。
/// 途中のページが200以外を返した場合、そこまでのマージ結果を
/// `complete = false`で返す（蓄積済みの値は破棄しない）
#[derive(Debug, Clone)]
pub struct OffsetFetch<T> {
    pub values: Vec<T>,
    pub complete: bool,
}

/// `startAt`方式でページングされるエンドポイントを最終ページまで辿る
///
/// `startAt + 受信件数 < total`の間、受信件数ぶんオフセットを進めて
/// 次ページを要求する。ページ数が上限を超えた場合は
/// `Error::PageLimitExceeded`
pub(crate) async fn fetch_values<T: DeserializeOwned>(
    client: &JiraClient,
    path: &str,
    base_query: &[(&str, String)],
) -> Result<OffsetFetch<T>> {
    let mut start_at: u32 = 0;
    let mut values: Vec<T> = Vec::new();
    let mut pages: u32 = 0;

    loop {
        pages += 1;
        if pages > client.config().max_pages {
            return Err(Error::PageLimitExceeded { pages });
        }

        let mut query: Vec<(&str, String)> = base_query.to_vec();
        query.push(("startAt", start_at.to_string()));
        query.push(("maxResults", PAGE_SIZE.to_string()));

        let response = client.get(path, &query).await?;

        if response.status() != StatusCode::OK {
            return Ok(OffsetFetch { values, complete: false });
        }

        let body = response.text().await?;
        let page: ValuesPage<T> = serde_json::from_str(&body)?;

        let received = page.values.len() as u32;
        values.extend(page.values);

        if start_at + received >= page.total {
            return Ok(OffsetFetch { values, complete: true });
        }

        start_at += received;
    }
}

/// トークン方式の検索エンドポイントを最終ページまで辿り、Issueをキーで一意化する
///
/// `isLast`がfalseの間、`nextPageToken`を持ち回って次ページを要求する。
/// 途中のページが200以外を返した場合はそこまでのマージ結果を返す
pub(crate) async fn fetch_issues(
    client: &JiraClient,
    path: &str,
    base_query: &[(&str, String)],
) -> Result<HashMap<String, Issue>> {
    let mut issues: HashMap<String, Issue> = HashMap::new();
    let mut next_page_token: Option<String> = None;
    let mut pages: u32 = 0;

    loop {
        pages += 1;
        if pages > client.config().max_pages {
            return Err(Error::PageLimitExceeded { pages });
        }

        let mut query: Vec<(&str, String)> = base_query.to_vec();
        query.push(("maxResults", PAGE_SIZE.to_string()));
        if let Some(token) = &next_page_token {
            query.push(("nextPageToken", token.clone()));
        }

        let response = client.get(path, &query).await?;

        if response.status() != StatusCode::OK {
            return Ok(issues);
        }

        let body = response.text().await?;
        let page: IssuePage = serde_json::from_str(&body)?;

        for issue in page.issues {
            issues.insert(issue.key.clone(), issue);
        }

        if page.is_last {
            return Ok(issues);
        }

        // isLast=falseでトークンが欠落した場合はそれ以上進めない
        match page.next_page_token {
            Some(token) => next_page_token = Some(token),
            None => return Ok(issues),
        }
    }
}
