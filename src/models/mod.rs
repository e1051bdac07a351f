pub mod changelog;
pub mod issue;
pub mod search;
pub mod version;

pub use changelog::{ChangeAuthor, ChangeItem, ChangelogEntry};
pub use issue::Issue;
pub use search::{IssuePage, SearchOptions, ValuesPage};
pub use version::Version;
