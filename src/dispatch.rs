use std::iter;
use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::StatusCode;
use scraper::{ElementRef, Selector};

use crate::config::Config;
use crate::error::EnrichmentError;
use crate::models::BookId;
use crate::parser::{Enrichment, Parser};
use crate::render::{BOOK_TAG_CLASS, RESULTS_LIST_ID};
use crate::stage::{self, Stage};

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub book_id: BookId,
    pub status: StatusCode,
}

/// Delegated click handling for `#results-list`.
///
/// Built once per container. Tags rendered later are picked up without
/// rebuilding since a click is matched against `.book-tag` when it happens.
pub struct SelectionDispatcher {
    client: reqwest::Client,
    url: String,
    tag_selector: Selector,
    clicks: AtomicU64,
}

impl SelectionDispatcher {
    pub fn new(client: reqwest::Client, config: &Config) -> SelectionDispatcher {
        SelectionDispatcher {
            client,
            url: config.books_show_url(),
            tag_selector: Selector::parse(&format!(".{}", BOOK_TAG_CLASS)).unwrap(),
            clicks: AtomicU64::new(0),
        }
    }

    /// Nearest `.book-tag` around `target` (itself included), as long as that
    /// tag sits inside `#results-list`.
    pub fn resolve(&self, target: ElementRef<'_>) -> Option<BookId> {
        let mut tag: Option<ElementRef<'_>> = None;

        let path = iter::once(target).chain(target.ancestors().filter_map(ElementRef::wrap));

        for element in path {
            if element.value().id() == Some(RESULTS_LIST_ID) {
                return tag
                    .and_then(|tag| tag.value().attr("data-id"))
                    .filter(|id| !id.is_empty())
                    .map(BookId::new);
            }

            if tag.is_none() && self.tag_selector.matches(&element) {
                tag = Some(element);
            }
        }

        None
    }

    /// Resolves the clicked element and sends its id to the enrichment server.
    /// Sends nothing when the click landed outside every tag.
    pub async fn select(&self, target: ElementRef<'_>) -> Result<Selection, EnrichmentError> {
        let click = self.clicks.fetch_add(1, Ordering::SeqCst) + 1;

        let book_id = match self.resolve(target) {
            Some(book_id) => book_id,
            None => {
                let err = EnrichmentError::NoTag;
                stage::update(click, Stage::Fail(&err));
                return Err(err);
            }
        };

        stage::update(click, Stage::Selected(format!("bookID = {}", book_id)));

        let r = self.enrich(book_id).await;

        match r {
            Ok(ref selection) => stage::update(
                click,
                Stage::Enriched(format!(
                    "bookID = {}, status = {}",
                    selection.book_id, selection.status
                )),
            ),
            Err(ref err) => stage::update(click, Stage::Fail(err)),
        }

        r
    }

    pub async fn enrich(&self, book_id: BookId) -> Result<Selection, EnrichmentError> {
        let enrichment = Enrichment::new(book_id, self.url.as_str());

        let enrichment = enrichment.request(&self.client).await?;
        let status = enrichment.parse()?;

        Ok(Selection {
            book_id: enrichment.book_id().clone(),
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use scraper::{Html, Selector};
    use serde_json::json;

    use super::SelectionDispatcher;
    use crate::config::Config;
    use crate::error::EnrichmentError;
    use crate::models::{BookId, BookResult};
    use crate::render::{render_book, ResultsList};

    fn results() -> anyhow::Result<ResultsList> {
        let mut results = ResultsList::new();

        for (seed, title, cover_i) in [
            ("/books/OL1M", "First", Some(1)),
            ("/books/OL2M", "Second", None),
            ("/books/OL3M", "Third", Some(3)),
        ]
        .iter()
        {
            let book = BookResult {
                title: Some(title.to_string()),
                author_name: vec!["Author".to_string()],
                cover_i: *cover_i,
                seed: vec![seed.to_string()],
                ..Default::default()
            };

            results.append(render_book(&book, "https://covers.example/b/id/")?);
        }

        Ok(results)
    }

    fn dispatcher(server_url: &str) -> SelectionDispatcher {
        let config = Config {
            server_url: server_url.to_string(),
            ..Config::default()
        };

        SelectionDispatcher::new(reqwest::Client::new(), &config)
    }

    #[test]
    fn resolve_nested_click() -> anyhow::Result<()> {
        let document = Html::parse_fragment(&results()?.to_html());
        let dispatcher = dispatcher("http://unused");

        let images = document
            .select(&Selector::parse(".book-tag > img").unwrap())
            .collect::<Vec<_>>();
        let items = document
            .select(&Selector::parse(".book-tag li").unwrap())
            .collect::<Vec<_>>();
        let tags = document
            .select(&Selector::parse(".book-tag").unwrap())
            .collect::<Vec<_>>();

        assert_eq!(Some(BookId::new("OL2M")), dispatcher.resolve(images[1]));
        assert_eq!(Some(BookId::new("OL3M")), dispatcher.resolve(items[4]));
        assert_eq!(Some(BookId::new("OL3M")), dispatcher.resolve(items[5]));
        assert_eq!(Some(BookId::new("OL1M")), dispatcher.resolve(tags[0]));

        Ok(())
    }

    #[test]
    fn resolve_outside_tags() -> anyhow::Result<()> {
        let html = format!(
            r#"<div class="book-tag" data-id="OUTSIDE"><span>stray</span></div>{}"#,
            results()?.to_html()
        );
        let document = Html::parse_fragment(&html);
        let dispatcher = dispatcher("http://unused");

        let container = document
            .select(&Selector::parse("#results-list").unwrap())
            .next()
            .unwrap();
        let stray = document
            .select(&Selector::parse("span").unwrap())
            .next()
            .unwrap();

        assert_eq!(None, dispatcher.resolve(container));
        assert_eq!(None, dispatcher.resolve(stray));

        Ok(())
    }

    #[test]
    fn resolve_survives_rerender() -> anyhow::Result<()> {
        let dispatcher = dispatcher("http://unused");
        let mut results = results()?;

        let before = Html::parse_fragment(&results.to_html());
        let tag = before
            .select(&Selector::parse(".book-tag").unwrap())
            .next()
            .unwrap();
        assert_eq!(Some(BookId::new("OL1M")), dispatcher.resolve(tag));

        results.empty();
        results.append(render_book(
            &BookResult {
                title: Some("Fresh".to_string()),
                author_name: vec!["Author".to_string()],
                seed: vec!["/books/OL9M".to_string()],
                ..Default::default()
            },
            "https://covers.example/b/id/",
        )?);

        let after = Html::parse_fragment(&results.to_html());
        let img = after
            .select(&Selector::parse(".cover-image").unwrap())
            .next()
            .unwrap();
        assert_eq!(Some(BookId::new("OL9M")), dispatcher.resolve(img));

        Ok(())
    }

    #[tokio::test]
    async fn select_posts_once() -> anyhow::Result<()> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/books/show")
            .match_body(Matcher::Json(json!({ "bookID": "OL2M" })))
            .with_status(200)
            .expect(1)
            .create_async()
            .await;

        let dispatcher = dispatcher(&server.url());
        let document = Html::parse_fragment(&results()?.to_html());

        let title = document
            .select(&Selector::parse(".book-tag li").unwrap())
            .nth(2)
            .unwrap();

        let selection = dispatcher.select(title).await?;

        mock.assert_async().await;
        assert_eq!(BookId::new("OL2M"), selection.book_id);
        assert_eq!(200, selection.status.as_u16());

        Ok(())
    }

    #[tokio::test]
    async fn select_outside_tag_sends_nothing() -> anyhow::Result<()> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/books/show")
            .expect(0)
            .create_async()
            .await;

        let dispatcher = dispatcher(&server.url());
        let document = Html::parse_fragment(&results()?.to_html());

        let container = document
            .select(&Selector::parse("#results-list").unwrap())
            .next()
            .unwrap();

        let r = dispatcher.select(container).await;

        mock.assert_async().await;
        assert!(matches!(r, Err(EnrichmentError::NoTag)));

        Ok(())
    }
}
