mod book;
mod query;

pub use book::{BookId, BookResult, SearchResponse, SEED_PREFIX_LEN};
pub use query::{SearchForm, SearchQuery, Subject, SEARCH_FIELDS, SEARCH_MODE};
