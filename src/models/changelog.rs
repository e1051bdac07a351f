use serde::{Deserialize, Serialize};

/// Issueの変更履歴1件分
///
/// サーバーが作成日時順で返す追記専用の列の一要素。
/// `created`はJIRAのタイムスタンプ文字列をそのまま保持し、
/// 鮮度判定は文字列比較で行う（フォーマットは両者とも同一ソース由来）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangelogEntry {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<ChangeAuthor>,
    pub created: String,
    #[serde(default)]
    pub items: Vec<ChangeItem>,
}

/// 変更者の情報
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeAuthor {
    #[serde(rename = "accountId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "emailAddress")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
}

/// 1回の変更で更新されたフィールドの差分
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeItem {
    pub field: String,
    #[serde(rename = "fieldtype")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(rename = "fromString")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(rename = "toString")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_string: Option<String>,
}
