pub mod changelog_store;
pub mod client;
pub mod error;
pub mod history;
pub mod models;
pub mod pagination;

pub use client::{Auth, JiraClient, JiraConfig};
pub use error::Error;
pub use models::*;

// Changelog cache re-exports
pub use changelog_store::{ChangelogStore, FileChangelogStore};
pub use history::HistoryService;

// Pagination re-exports
pub use pagination::{OffsetFetch, PAGE_SIZE};
