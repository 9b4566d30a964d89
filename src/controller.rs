use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::trace;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::error::SearchError;
use crate::models::{BookResult, SearchForm, SearchQuery};
use crate::parser::{Parser, Search};
use crate::render::{render_book, ResultsList};
use crate::stage::{self, Stage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rendered { rendered: usize, skipped: usize },
    /// A newer submission started while this one was in flight. Its
    /// response was dropped.
    Stale,
}

/// Handles `#search-form` submissions and owns `#results-list`.
pub struct SearchController {
    client: reqwest::Client,
    config: Config,
    results: Arc<Mutex<ResultsList>>,
    latest: AtomicU64,
}

impl SearchController {
    pub fn new(client: reqwest::Client, config: Config) -> SearchController {
        SearchController {
            client,
            config,
            results: Arc::new(Mutex::new(ResultsList::new())),
            latest: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Snapshot of the container.
    pub async fn results(&self) -> ResultsList {
        self.results.lock().await.clone()
    }

    pub async fn submit(&self, form: &SearchForm) -> Result<SubmitOutcome, SearchError> {
        trace!("SearchController::submit()");
        let token = self.begin().await;

        let query = SearchQuery::from_form(form).with_limit(self.config.limit);

        stage::update(
            token,
            Stage::Submitted(format!("{} = {:?}", query.mode.key(), query.text)),
        );

        match self.fetch(query).await {
            Ok(docs) => {
                stage::update(token, Stage::Fetched(format!("docs = {}", docs.len())));
                Ok(self.commit(token, docs).await)
            }
            Err(err) => {
                stage::update(token, Stage::Fail(&err));
                self.fail(token, &err).await;
                Err(err)
            }
        }
    }

    /// Empties the container and hands out a token newer than every
    /// submission before it.
    async fn begin(&self) -> u64 {
        let mut results = self.results.lock().await;

        let token = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        results.empty();

        token
    }

    async fn fetch(&self, query: SearchQuery) -> Result<Vec<BookResult>, SearchError> {
        let search = Search::new(query, self.config.search_url());

        let search = search.request(&self.client).await?;

        search.parse()
    }

    fn is_stale(&self, token: u64) -> bool {
        token != self.latest.load(Ordering::SeqCst)
    }

    async fn commit(&self, token: u64, docs: Vec<BookResult>) -> SubmitOutcome {
        let mut results = self.results.lock().await;

        if self.is_stale(token) {
            stage::update(
                token,
                Stage::Discarded(format!("{} docs from a superseded search", docs.len())),
            );
            return SubmitOutcome::Stale;
        }

        let mut rendered = 0;
        let mut skipped = 0;

        for (i, book) in docs.iter().enumerate() {
            match render_book(book, &self.config.covers_url) {
                Ok(tag) => {
                    results.append(tag);
                    rendered += 1;
                }
                Err(err) => {
                    stage::update(token, Stage::Skipped(format!("docs[{}]: {}", i, err)));
                    skipped += 1;
                }
            }
        }

        stage::update(
            token,
            Stage::Rendered(format!("rendered = {}, skipped = {}", rendered, skipped)),
        );

        SubmitOutcome::Rendered { rendered, skipped }
    }

    async fn fail(&self, token: u64, err: &SearchError) {
        let mut results = self.results.lock().await;

        if !self.is_stale(token) {
            results.set_notice(err.to_string());
        }
    }
}
