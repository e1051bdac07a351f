use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 検索結果に含まれる単一のIssue
///
/// フィールドはサーバー定義の動的なマッピングのため、
/// 型付けせずに`serde_json::Value`のまま保持する
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub key: String,
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    /// フィールド名 → 値のマッピング（`fields=issuekey`指定時はほぼ空）
    #[serde(default)]
    pub fields: HashMap<String, serde_json::Value>,
    /// `expand=renderedFields`要求時のみ存在
    #[serde(rename = "renderedFields")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendered_fields: Option<HashMap<String, serde_json::Value>>,
}
