use async_trait::async_trait;
use log::{debug, trace};
use reqwest::StatusCode;
use serde::Serialize;

use super::Parser;
use crate::error::EnrichmentError;
use crate::models::BookId;

#[derive(Serialize, Debug)]
struct EnrichmentBody<'a> {
    #[serde(rename = "bookID")]
    book_id: &'a BookId,
}

/// # Enrichment Parser
/// `POST {server_url}/books/show` with `{ "bookID": ... }`.
///
/// The server's answer isn't used beyond its status yet.
pub struct Enrichment {
    book_id: BookId,
    url: String,
    request_data: Option<StatusCode>,
}

impl Enrichment {
    pub fn new(book_id: BookId, url: impl Into<String>) -> Enrichment {
        Enrichment {
            book_id,
            url: url.into(),
            request_data: None,
        }
    }

    pub fn book_id(&self) -> &BookId {
        &self.book_id
    }
}

#[async_trait]
impl Parser for Enrichment {
    type RequestData = StatusCode;
    type ParseData = StatusCode;
    type Error = EnrichmentError;

    fn request_data(&self) -> Result<&Self::RequestData, Self::Error> {
        match self.request_data {
            Some(ref rd) => Ok(rd),
            None => Err(EnrichmentError::MissingResponse),
        }
    }

    fn url(&self) -> String {
        self.url.clone()
    }

    async fn request(mut self, client: &reqwest::Client) -> Result<Self, Self::Error> {
        trace!("Enrichment::request()");
        debug!("bookID = {}", self.book_id);

        let body = EnrichmentBody {
            book_id: &self.book_id,
        };

        let response = client.post(self.url().as_str()).json(&body).send().await?;

        self.request_data = Some(response.status());
        Ok(self)
    }

    fn parse(&self) -> Result<Self::ParseData, Self::Error> {
        trace!("Enrichment::parse()");
        let status = *self.request_data()?;

        if !status.is_success() {
            return Err(EnrichmentError::Status(status));
        }

        Ok(status)
    }
}
