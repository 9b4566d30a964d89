use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::components::url;
use crate::error::MalformedResultError;
use crate::models::{BookId, BookResult};

pub const RESULTS_LIST_ID: &str = "results-list";
pub const BOOK_TAG_CLASS: &str = "book-tag";
pub const COVER_IMAGE_CLASS: &str = "cover-image";
pub const NO_IMAGE_ALT: &str = "No image available";

/// One search result as markup, along with the id its `data-id` carries.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTag {
    pub book_id: BookId,
    pub html: String,
}

/// ```html
/// <div class="book-tag" data-id="OL26331930M">
///   <img src="https://covers.openlibrary.org/b/id/10521270-M/jpg" alt="No image available" class="cover-image">
///   <ul><li>Title: Harry Potter and the Philosopher's Stone</li><li>Author: J. K. Rowling</li></ul>
/// </div>
/// ```
///
/// Without `cover_i` the `src` is left out and the browser falls back to the
/// alt text.
pub fn render_book(
    book: &BookResult,
    covers_url: &str,
) -> Result<RenderedTag, MalformedResultError> {
    let book_id = book.book_id()?;
    let title = book
        .title
        .as_deref()
        .ok_or(MalformedResultError::MissingTitle)?;
    let author = book.first_author().ok_or(MalformedResultError::EmptyAuthors)?;

    let src = match book.cover_i {
        Some(cover_i) => format!(
            r#" src="{}""#,
            encode_double_quoted_attribute(&url::cover(covers_url, cover_i))
        ),
        None => String::new(),
    };

    let html = format!(
        r#"<div class="{}" data-id="{}"><img{} alt="{}" class="{}"><ul><li>Title: {}</li><li>Author: {}</li></ul></div>"#,
        BOOK_TAG_CLASS,
        encode_double_quoted_attribute(book_id.as_str()),
        src,
        NO_IMAGE_ALT,
        COVER_IMAGE_CLASS,
        encode_text(title),
        encode_text(author),
    );

    Ok(RenderedTag { book_id, html })
}

/// The `#results-list` container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsList {
    tags: Vec<RenderedTag>,
    notice: Option<String>,
}

impl ResultsList {
    pub fn new() -> ResultsList {
        ResultsList::default()
    }

    /// Drops every tag and any notice left by a failed search.
    pub fn empty(&mut self) {
        self.tags.clear();
        self.notice = None;
    }

    pub fn append(&mut self, tag: RenderedTag) {
        self.tags.push(tag);
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn tags(&self) -> &[RenderedTag] {
        &self.tags
    }

    pub fn book_ids(&self) -> Vec<&BookId> {
        self.tags.iter().map(|tag| &tag.book_id).collect()
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();

        if let Some(notice) = &self.notice {
            html.push_str(&format!(
                r#"<p class="search-error">{}</p>"#,
                encode_text(notice)
            ));
        }

        html.push_str(&format!(r#"<div id="{}">"#, RESULTS_LIST_ID));
        for tag in &self.tags {
            html.push_str(&tag.html);
        }
        html.push_str("</div>");

        html
    }
}
