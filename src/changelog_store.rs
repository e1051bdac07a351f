use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::{File, create_dir_all};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use crate::error::{Error, Result};
use crate::models::ChangelogEntry;

/// changelogキャッシュの読み書きを抽象化するトレイト
///
/// 書き込み済みレコードはそのIssueについて完全なものとして扱う。
/// 部分的なフェッチ結果を書き込んではならない
#[async_trait]
pub trait ChangelogStore: Send + Sync {
    /// 指定Issueのレコードが存在するか
    async fn exists(&self, issue_key: &str) -> bool;

    /// 保存済みレコードを読み込み。壊れたJSONは致命的エラーとして伝播する
    async fn read(&self, issue_key: &str) -> Result<Vec<ChangelogEntry>>;

    /// レコードを上書き保存
    async fn write(&self, issue_key: &str, entries: &[ChangelogEntry]) -> Result<()>;
}

/// JSONファイルベースのchangelogストア
///
/// レコードは`releases.<環境名>.changelog/<Issueキー>.json`に置かれ、
/// 環境が異なればキーが衝突しない
pub struct FileChangelogStore {
    root: PathBuf,
    environment: String,
}

impl FileChangelogStore {
    pub fn new<P: AsRef<Path>>(root: P, environment: impl Into<String>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            environment: environment.into(),
        }
    }

    /// キャッシュディレクトリのパスを取得
    fn cache_dir(&self) -> PathBuf {
        self.root.join(format!("releases.{}.changelog", self.environment))
    }

    /// レコードファイルのパスを取得
    fn record_path(&self, issue_key: &str) -> PathBuf {
        self.cache_dir().join(format!("{}.json", issue_key))
    }
}

#[async_trait]
impl ChangelogStore for FileChangelogStore {
    async fn exists(&self, issue_key: &str) -> bool {
        self.record_path(issue_key).exists()
    }

    async fn read(&self, issue_key: &str) -> Result<Vec<ChangelogEntry>> {
        let mut file = File::open(self.record_path(issue_key)).await?;

        let mut raw_data = Vec::new();
        file.read_to_end(&mut raw_data).await?;

        serde_json::from_slice(&raw_data)
            .map_err(|e| Error::SerializationError(format!("JSON deserialization failed: {}", e)))
    }

    async fn write(&self, issue_key: &str, entries: &[ChangelogEntry]) -> Result<()> {
        create_dir_all(self.cache_dir()).await?;

        // 構造体のフィールド順・空白なしの決定的な直列化
        let json_data = serde_json::to_vec(entries)
            .map_err(|e| Error::SerializationError(format!("JSON serialization failed: {}", e)))?;

        let mut file = File::create(self.record_path(issue_key)).await?;
        file.write_all(&json_data).await?;
        file.sync_all().await?;

        Ok(())
    }
}
