use crate::changelog_store::ChangelogStore;
use crate::client::JiraClient;
use crate::error::Result;
use crate::models::ChangelogEntry;
use crate::pagination;

/// changelog取得のキャッシュ管理
///
/// Issueごとの変更履歴は追記専用のため、一度取得した列は
/// 「最終更新時刻の手がかり」が保存済みの最終エントリより
/// 新しくならない限り再取得しない
pub struct HistoryService<S: ChangelogStore> {
    client: JiraClient,
    store: S,
}

impl<S: ChangelogStore> HistoryService<S> {
    pub fn new(client: JiraClient, store: S) -> Self {
        Self { client, store }
    }

    /// Issueの変更履歴を取得
    ///
    /// - `CVE`で始まるキーは履歴を持たないため、ネットワークにも
    ///   キャッシュにも触れず空の列を返す
    /// - キャッシュが存在し、`last_updated`が未指定か、保存済みの
    ///   最終エントリの`created`が`last_updated`以上ならキャッシュを返す
    /// - それ以外は全ページを再取得し、完全に取得できた場合のみ
    ///   キャッシュを上書きする。途中で失敗した部分結果は
    ///   キャッシュを汚染しないよう永続化せずそのまま返す
    pub async fn get_changelog(
        &self,
        issue_key: &str,
        last_updated: Option<&str>,
    ) -> Result<Vec<ChangelogEntry>> {
        if issue_key.starts_with("CVE") {
            return Ok(Vec::new());
        }

        if self.store.exists(issue_key).await {
            let cached = self.store.read(issue_key).await?;

            match last_updated {
                None => return Ok(cached),
                Some(last_updated) => {
                    // タイムスタンプは同一フォーマット前提の文字列比較
                    if let Some(last) = cached.last() {
                        if last.created.as_str() >= last_updated {
                            return Ok(cached);
                        }
                    }
                }
            }
        }

        let path = format!(
            "/rest/api/2/issue/{}/changelog",
            urlencoding::encode(issue_key)
        );

        let fetch = pagination::fetch_values::<ChangelogEntry>(&self.client, &path, &[]).await?;

        if fetch.complete {
            self.store.write(issue_key, &fetch.values).await?;
        }

        Ok(fetch.values)
    }
}
