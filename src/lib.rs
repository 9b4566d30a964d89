pub mod components;
pub mod config;
pub mod controller;
pub mod dispatch;
pub mod error;
pub mod models;
pub mod parser;
pub mod render;
pub mod stage;

pub use config::Config;
pub use controller::{SearchController, SubmitOutcome};
pub use dispatch::{Selection, SelectionDispatcher};
pub use models::{BookId, BookResult, SearchForm, SearchQuery, Subject};
pub use render::{render_book, RenderedTag, ResultsList};
