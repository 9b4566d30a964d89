use crate::components::url;

/// Page size of one search. Open Library caps `limit` server side as well.
pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub open_lib_url: String,
    pub covers_url: String,
    pub server_url: String,
    pub limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            open_lib_url: url::OPEN_LIB_URL.to_string(),
            covers_url: url::COVERS_URL.to_string(),
            server_url: url::SERVER_URL.to_string(),
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Config {
    pub fn search_url(&self) -> String {
        url::search(&self.open_lib_url)
    }

    pub fn books_show_url(&self) -> String {
        url::books_show(&self.server_url)
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn default_config() -> anyhow::Result<()> {
        let config = Config::default();

        assert_eq!(10, config.limit);
        assert_eq!("https://openlibrary.org/search.json", config.search_url());
        assert_eq!("http://127.0.0.1:5000/books/show", config.books_show_url());

        Ok(())
    }
}
