pub mod error;
pub mod query;
pub mod types;

pub use error::QueryError;
pub use query::{PromptWord, SearchQuery};
pub use types::*;
