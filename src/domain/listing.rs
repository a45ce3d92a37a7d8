//! List query resolution for the blog index: free-text search, tag selection
//! and page windows over published posts.

use std::collections::BTreeSet;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::entities::post::Post;

/// Empty-state message rendered in place of an empty grid.
pub const NO_RESULTS: &str = "No posts matched your filters.";

/// Helper to compute OFFSET safely from 1-based `page` and `per_page`.
fn page_offset(page: u32, per_page: u32) -> i64 {
    let page = page.saturating_sub(1);
    (page as i64) * (per_page as i64)
}

pub fn total_pages(total_items: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    total_items.div_ceil(per_page as u64) as u32
}

/// OFFSET/LIMIT pair handed to the store for server-side pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: i64,
    pub limit: i64,
}

impl PageWindow {
    pub fn new(page: u32, per_page: u32) -> Self {
        PageWindow {
            offset: page_offset(page.max(1), per_page),
            limit: per_page as i64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub page: u32,
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u32,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PageMeta {
    pub fn new(page: u32, per_page: u32, total_items: u64) -> Self {
        let page = page.max(1);
        let total_pages = total_pages(total_items, per_page);
        PageMeta {
            page,
            per_page,
            total_items,
            total_pages,
            has_prev: page > 1,
            has_next: page < total_pages,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    /// Slices an already fetched collection. Pages past the end are empty.
    pub fn from_items(items: Vec<T>, page: u32, per_page: u32) -> Self {
        let meta = PageMeta::new(page, per_page, items.len() as u64);
        let skip = page_offset(meta.page, per_page) as usize;
        let items = items.into_iter().skip(skip).take(per_page as usize).collect();
        Page { items, meta }
    }

    /// Wraps a slice the store already paginated.
    pub fn from_window(items: Vec<T>, page: u32, per_page: u32, total_items: u64) -> Self {
        Page { items, meta: PageMeta::new(page, per_page, total_items) }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page { items: self.items.into_iter().map(f).collect(), meta: self.meta }
    }
}

/// Where the displayed slice came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum ListSource {
    #[display("server")]
    Server,
    #[display("search")]
    Search,
}

/// Raw query-string parameters for the blog index. Parsing is lenient: a page
/// that is missing or not a positive integer falls back to 1.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub q: Option<String>,
    pub tag: Option<String>,
    pub page: Option<String>,
    pub search_page: Option<String>,
}

/// The single list query the blog index is driven by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub search: Option<String>,
    pub tag: Option<String>,
    pub page: u32,
    pub search_page: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        ListQuery { search: None, tag: None, page: 1, search_page: 1 }
    }
}

fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl From<ListParams> for ListQuery {
    fn from(params: ListParams) -> Self {
        ListQuery {
            page: parse_page(params.page.as_deref()),
            search_page: parse_page(params.search_page.as_deref()),
            search: non_empty(params.q),
            tag: non_empty(params.tag),
        }
    }
}

impl ListQuery {
    /// Already trimmed and non-empty; both constructors normalize it.
    pub fn search_text(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn source(&self) -> ListSource {
        if self.search_text().is_some() {
            ListSource::Search
        } else {
            ListSource::Server
        }
    }

    /// The page number that applies to the active source.
    pub fn active_page(&self) -> u32 {
        match self.source() {
            ListSource::Search => self.search_page,
            ListSource::Server => self.page,
        }
    }
}

/// Case-insensitive substring match against title, excerpt or any tag.
pub fn post_matches(post: &Post, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    post.title.to_lowercase().contains(&needle)
        || post.excerpt.to_lowercase().contains(&needle)
        || post.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
}

pub fn search_posts(posts: Vec<Post>, query: &str) -> Vec<Post> {
    posts.into_iter().filter(|post| post_matches(post, query)).collect()
}

/// Flattens, dedupes and sorts tag lists.
pub fn collect_tags<I, T>(tag_lists: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: IntoIterator<Item = String>,
{
    tag_lists
        .into_iter()
        .flatten()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Client-side state of the blog index.
///
/// The server page mirrors the URL. While the search box is non-empty the
/// view pages through the search results with its own counter, leaving the
/// server page untouched so clearing the search lands back where it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogListState {
    server_page: u32,
    search: String,
    search_page: u32,
    tag: Option<String>,
}

impl BlogListState {
    pub fn from_url(page: u32, tag: Option<String>) -> Self {
        BlogListState {
            server_page: page.max(1),
            search: String::new(),
            search_page: 1,
            tag: non_empty(tag),
        }
    }

    pub fn is_searching(&self) -> bool {
        !self.search.trim().is_empty()
    }

    pub fn set_search(&mut self, text: &str) {
        if text.trim() != self.search.trim() {
            self.search_page = 1;
        }
        self.search = text.to_string();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
        self.search_page = 1;
    }

    pub fn select_tag(&mut self, tag: Option<String>) {
        self.tag = non_empty(tag);
        self.server_page = 1;
        self.search_page = 1;
    }

    pub fn go_to_page(&mut self, page: u32) {
        let page = page.max(1);
        if self.is_searching() {
            self.search_page = page;
        } else {
            self.server_page = page;
        }
    }

    pub fn active_page(&self) -> u32 {
        if self.is_searching() { self.search_page } else { self.server_page }
    }

    pub fn server_page(&self) -> u32 {
        self.server_page
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn query(&self) -> ListQuery {
        ListQuery {
            search: non_empty(Some(self.search.clone())),
            tag: self.tag.clone(),
            page: self.server_page,
            search_page: self.search_page,
        }
    }

    /// URL query string for the server-driven part of the state.
    pub fn url_query(&self) -> String {
        let mut pairs = Vec::new();
        if self.server_page > 1 {
            pairs.push(format!("page={}", self.server_page));
        }
        if let Some(tag) = &self.tag {
            pairs.push(format!("tag={}", urlencoding::encode(tag)));
        }
        pairs.join("&")
    }
}
