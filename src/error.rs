use reqwest::StatusCode;
use thiserror::Error;

/// A search record that can't be turned into a tag. Only that record is
/// skipped, the rest of the batch still renders.
#[derive(Debug, Error, PartialEq)]
pub enum MalformedResultError {
    #[error("malformed result: `seed` is empty")]
    EmptySeed,

    #[error("malformed result: seed {0:?} is too short to carry a book id")]
    SeedTooShort(String),

    #[error("malformed result: `title` is missing")]
    MissingTitle,

    #[error("malformed result: `author_name` is empty")]
    EmptyAuthors,
}

impl MalformedResultError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptySeed | Self::SeedTooShort(_) => "seed",
            Self::MissingTitle => "title",
            Self::EmptyAuthors => "author_name",
        }
    }
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("search failed: catalog responded with {0}")]
    Status(StatusCode),

    #[error("search failed: can't decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("search failed: no response was received")]
    MissingResponse,
}

#[derive(Debug, Error)]
pub enum EnrichmentError {
    #[error("enrichment failed: clicked element is not inside a book tag")]
    NoTag,

    #[error("enrichment failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("enrichment failed: server responded with {0}")]
    Status(StatusCode),

    #[error("enrichment failed: no response was received")]
    MissingResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_field() -> anyhow::Result<()> {
        assert_eq!("seed", MalformedResultError::EmptySeed.field());
        assert_eq!(
            "seed",
            MalformedResultError::SeedTooShort("/books".to_string()).field()
        );
        assert_eq!("author_name", MalformedResultError::EmptyAuthors.field());

        Ok(())
    }

    #[test]
    fn status_messages() -> anyhow::Result<()> {
        let err = SearchError::Status(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            "search failed: catalog responded with 503 Service Unavailable",
            err.to_string()
        );

        let err = EnrichmentError::Status(StatusCode::NOT_FOUND);
        assert_eq!(
            "enrichment failed: server responded with 404 Not Found",
            err.to_string()
        );

        Ok(())
    }
}
