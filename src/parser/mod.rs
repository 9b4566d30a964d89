use async_trait::async_trait;

mod enrichment;
mod search;

pub use enrichment::Enrichment;
pub use search::Search;

/// One outbound call: build the url, send the request and keep the raw
/// response around, then turn it into something the caller can use.
#[async_trait]
pub trait Parser: Sized + Send {
    type RequestData;
    type ParseData;
    type Error: Send;

    fn request_data(&self) -> Result<&Self::RequestData, Self::Error>;

    fn url(&self) -> String;

    async fn request(self, client: &reqwest::Client) -> Result<Self, Self::Error>;

    fn parse(&self) -> Result<Self::ParseData, Self::Error>;
}
