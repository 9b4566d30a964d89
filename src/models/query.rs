use crate::config::DEFAULT_LIMIT;

pub const SEARCH_FIELDS: &str = "key,cover_i,title,author_name,name,seed";
pub const SEARCH_MODE: &str = "everything";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Title,
    Author,
}

impl Subject {
    /// Query parameter the search text is sent under.
    pub fn key(&self) -> &'static str {
        match self {
            Subject::Title => "q",
            Subject::Author => "author",
        }
    }
}

/// Anything but `"title"` searches by author.
impl From<&str> for Subject {
    fn from(s: &str) -> Subject {
        match s {
            "title" => Subject::Title,
            _ => Subject::Author,
        }
    }
}

/// Raw values of the `subject` select and the `search` text input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchForm {
    pub subject: String,
    pub search: String,
}

impl SearchForm {
    pub fn new(subject: impl Into<String>, search: impl Into<String>) -> SearchForm {
        SearchForm {
            subject: subject.into(),
            search: search.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub mode: Subject,
    pub text: String,
    pub limit: usize,
}

impl SearchQuery {
    pub fn new(mode: Subject, text: impl Into<String>) -> SearchQuery {
        SearchQuery {
            mode,
            text: text.into(),
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn from_form(form: &SearchForm) -> SearchQuery {
        SearchQuery::new(Subject::from(form.subject.as_str()), form.search.as_str())
    }

    pub fn with_limit(mut self, limit: usize) -> SearchQuery {
        self.limit = limit;
        self
    }

    pub fn parameters(&self) -> Vec<(&'static str, String)> {
        vec![
            (self.mode.key(), self.text.clone()),
            ("limit", self.limit.to_string()),
            ("fields", SEARCH_FIELDS.to_string()),
            ("mode", SEARCH_MODE.to_string()),
        ]
    }
}
