use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MalformedResultError;

/// Length of the `/books/` or `/works/` path segment every seed starts with.
pub const SEED_PREFIX_LEN: usize = 7;

/// One entry of `docs` in a `search.json` response.
///
/// Everything is optional at decode time. Checking that a record can be
/// rendered is left to [`crate::render::render_book`].
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct BookResult {
    pub key: Option<String>,
    pub title: Option<String>,
    #[serde(default)]
    pub author_name: Vec<String>,
    pub cover_i: Option<i64>,
    pub name: Option<String>,
    #[serde(default)]
    pub seed: Vec<String>,
}

impl BookResult {
    pub fn first_author(&self) -> Option<&str> {
        self.author_name.first().map(String::as_str)
    }

    pub fn book_id(&self) -> Result<BookId, MalformedResultError> {
        match self.seed.first() {
            Some(seed) => BookId::from_seed(seed),
            None => Err(MalformedResultError::EmptySeed),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct SearchResponse {
    #[serde(default)]
    pub docs: Vec<BookResult>,
}

/// Identifier sent to the enrichment server, e.g. `OL7353617M`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> BookId {
        BookId(id.into())
    }

    /// `/books/OL7353617M` -> `OL7353617M`
    pub fn from_seed(seed: &str) -> Result<BookId, MalformedResultError> {
        let id = seed.chars().skip(SEED_PREFIX_LEN).collect::<String>();

        if id.is_empty() {
            return Err(MalformedResultError::SeedTooShort(seed.to_string()));
        }

        Ok(BookId(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_id_from_seed() -> anyhow::Result<()> {
        for (seed, expected) in [
            ("/books/OL7353617M", "OL7353617M"),
            ("/works/OL82563W", "OL82563W"),
            ("/authors/OL23919A", "s/OL23919A"),
            ("/subjects/magic", "ts/magic"),
        ]
        .iter()
        {
            assert_eq!(*expected, BookId::from_seed(seed)?.as_str());
            assert_eq!(&seed[SEED_PREFIX_LEN..], BookId::from_seed(seed)?.as_str());
        }

        Ok(())
    }

    #[test]
    fn book_id_from_short_seed() -> anyhow::Result<()> {
        assert_eq!(
            Err(MalformedResultError::SeedTooShort("/books/".to_string())),
            BookId::from_seed("/books/")
        );
        assert!(BookId::from_seed("").is_err());

        Ok(())
    }

    #[test]
    fn book_id_uses_first_seed() -> anyhow::Result<()> {
        let book = BookResult {
            seed: vec![
                "/books/OL26331930M".to_string(),
                "/works/OL82563W".to_string(),
            ],
            ..Default::default()
        };

        assert_eq!(BookId::new("OL26331930M"), book.book_id()?);

        let book = BookResult::default();
        assert_eq!(Err(MalformedResultError::EmptySeed), book.book_id());

        Ok(())
    }

    #[test]
    fn deserialize_search_response() -> anyhow::Result<()> {
        let json = r#"{
            "numFound": 2,
            "start": 0,
            "docs": [
                {
                    "key": "/works/OL82563W",
                    "title": "Harry Potter and the Philosopher's Stone",
                    "author_name": ["J. K. Rowling"],
                    "cover_i": 10521270,
                    "seed": ["/books/OL26331930M", "/works/OL82563W"]
                },
                {
                    "key": "/works/OL82586W",
                    "title": "Harry Potter and the Deathly Hallows"
                }
            ]
        }"#;

        let response = serde_json::from_str::<SearchResponse>(json)?;

        assert_eq!(2, response.docs.len());
        assert_eq!(Some(10521270), response.docs[0].cover_i);
        assert_eq!(Some("J. K. Rowling"), response.docs[0].first_author());
        assert_eq!(None, response.docs[1].cover_i);
        assert!(response.docs[1].seed.is_empty());

        let response = serde_json::from_str::<SearchResponse>("{}")?;
        assert!(response.docs.is_empty());

        Ok(())
    }
}
