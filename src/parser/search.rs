use async_trait::async_trait;
use log::{debug, trace};

use super::Parser;
use crate::error::SearchError;
use crate::models::{BookResult, SearchQuery, SearchResponse};

/// # Search Parser
/// `GET {open_lib_url}/search.json` for one [`SearchQuery`]
pub struct Search {
    query: SearchQuery,
    url: String,
    request_data: Option<String>,
}

impl Search {
    pub fn new(query: SearchQuery, url: impl Into<String>) -> Search {
        Search {
            query,
            url: url.into(),
            request_data: None,
        }
    }
}

#[async_trait]
impl Parser for Search {
    type RequestData = String;
    type ParseData = Vec<BookResult>;
    type Error = SearchError;

    fn request_data(&self) -> Result<&Self::RequestData, Self::Error> {
        match self.request_data {
            Some(ref rd) => Ok(rd),
            None => Err(SearchError::MissingResponse),
        }
    }

    fn url(&self) -> String {
        self.url.clone()
    }

    async fn request(mut self, client: &reqwest::Client) -> Result<Self, Self::Error> {
        trace!("Search::request()");
        let parameters = self.query.parameters();

        debug!("url = {}", self.url);
        debug!("parameters = {:?}", parameters);

        let response = client
            .get(self.url().as_str())
            .query(&parameters)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status));
        }

        let rd = response.text().await?;

        self.request_data = Some(rd);
        Ok(self)
    }

    fn parse(&self) -> Result<Self::ParseData, Self::Error> {
        trace!("Search::parse()");
        let request_data = self.request_data()?;

        let response = serde_json::from_str::<SearchResponse>(request_data)?;

        debug!("docs = {}", response.docs.len());

        Ok(response.docs)
    }
}
