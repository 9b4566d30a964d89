pub const OPEN_LIB_URL: &str = "https://openlibrary.org";
pub const COVERS_URL: &str = "https://covers.openlibrary.org/b/id/";
pub const SERVER_URL: &str = "http://127.0.0.1:5000";

/// `GET` target of the catalog search, e.g.
/// `https://openlibrary.org/search.json?q=harry%20potter&limit=10&fields=key,cover_i,title,author_name,name,seed&mode=everything`
pub fn search(open_lib_url: &str) -> String {
    format!("{}/search.json", open_lib_url.trim_end_matches('/'))
}

/// Medium sized jpg cover. `covers_url` already ends with the `/b/id/` segment.
pub fn cover(covers_url: &str, cover_i: i64) -> String {
    format!("{}{}-M/jpg", covers_url, cover_i)
}

pub fn books_show(server_url: &str) -> String {
    format!("{}/books/show", server_url.trim_end_matches('/'))
}
