use dotenv::dotenv;
use jira_fetch::{FileChangelogStore, HistoryService, JiraClient, JiraConfig};

/// 診断用エントリポイント: 1件のIssueのchangelogを取得して表示する
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let issue_key = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "TOPIN-108".to_string());

    let config = JiraConfig::from_env()?;
    let environment = config.environment.clone();

    let client = JiraClient::new(config)?;
    let store = FileChangelogStore::new(".", environment);
    let service = HistoryService::new(client, store);

    let changelog = service.get_changelog(&issue_key, None).await?;
    println!("{}", serde_json::to_string_pretty(&changelog)?);

    Ok(())
}
