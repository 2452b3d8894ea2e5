//! # Application State
//!
//! The `BookListState` snapshot: everything the book-list screen needs to
//! render, in one immutable value.
//!
//! ```text
//! BookListState
//! ├── search_query: String          // current query text
//! ├── search_results: Vec<Book>     // ordered catalog hits
//! ├── favorite_books: Vec<Book>     // ordered, session-scoped
//! ├── is_loading: bool              // a search is in flight
//! ├── selected_tab_index: usize     // 0 = search results, 1 = favorites
//! └── error_message: Option<UiText> // deferred-resolution failure text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs,
//! and every change replaces the whole snapshot. Nothing mutates in place.

use crate::core::book::Book;
use crate::core::text::UiText;

/// Tab index for the search-results view.
pub const SEARCH_TAB: usize = 0;
/// Tab index for the favorites view.
pub const FAVORITES_TAB: usize = 1;
/// The tab set is fixed at two.
pub const TAB_COUNT: usize = 2;

/// Immutable snapshot of the book-list screen.
#[derive(Debug, Clone, PartialEq)]
pub struct BookListState {
    pub search_query: String,
    pub search_results: Vec<Book>,
    pub favorite_books: Vec<Book>,
    pub is_loading: bool,
    pub selected_tab_index: usize,
    pub error_message: Option<UiText>,
}

impl Default for BookListState {
    fn default() -> Self {
        Self {
            // Matches the stock config default; see core::config::DEFAULT_QUERY.
            search_query: String::from("Kotlin"),
            search_results: Vec::new(),
            favorite_books: Vec::new(),
            is_loading: false,
            selected_tab_index: SEARCH_TAB,
            error_message: None,
        }
    }
}

impl BookListState {
    /// Fresh screen state seeded with a startup query.
    pub fn with_query(query: &str) -> Self {
        Self {
            search_query: query.to_string(),
            ..Self::default()
        }
    }

    /// Books shown by the currently selected tab.
    ///
    /// The reducer stores whatever tab index it is given; anything outside
    /// the fixed two-tab set renders as an empty view.
    pub fn visible_books(&self) -> &[Book] {
        match self.selected_tab_index {
            SEARCH_TAB => &self.search_results,
            FAVORITES_TAB => &self.favorite_books,
            _ => &[],
        }
    }

    /// Whether `id` is currently in the favorites list.
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorite_books.iter().any(|b| b.id == id)
    }
}
