use super::Issue;
use serde::{Deserialize, Serialize};

/// Issue検索のオプション
///
/// フィールド指定の既定値はAPI呼び出し時に解決される:
/// - `fields`未指定 → `*all`
/// - 空リストを明示 → `issuekey`のみ
/// - それ以外 → カンマ結合したリスト
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub fields: Option<Vec<String>>,
    pub expand: Vec<String>,
    pub render: bool,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 取得するフィールドを設定
    pub fn fields(mut self, fields: Vec<String>) -> Self {
        self.fields = Some(fields);
        self
    }

    /// expandパラメータを設定
    pub fn expand(mut self, expand: Vec<String>) -> Self {
        self.expand = expand;
        self
    }

    /// renderedFieldsの展開を要求
    pub fn render(mut self, render: bool) -> Self {
        self.render = render;
        self
    }
}

/// トークン方式でページングされる検索レスポンス（`/rest/api/3/search/jql`）
#[derive(Debug, Clone, Deserialize)]
pub struct IssuePage {
    pub issues: Vec<Issue>,
    #[serde(rename = "isLast")]
    pub is_last: bool,
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// オフセット方式でページングされるレスポンス（changelog、バージョン一覧）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuesPage<T> {
    #[serde(rename = "startAt")]
    pub start_at: u32,
    #[serde(rename = "maxResults")]
    pub max_results: u32,
    pub total: u32,
    pub values: Vec<T>,
}
