//! # Actions
//!
//! Everything that can happen on the book-list screen becomes a
//! `BookListAction`. User types in the search bar? That's
//! `BookListAction::QueryChanged`. The catalog answers? That's
//! `BookListAction::SearchCompleted(result)`.
//!
//! The `update()` function takes the current state and an action, then
//! returns the next state plus an `Effect` describing what the caller
//! should do. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  (New State, Effect)
//! ```
//!
//! This makes everything testable:
//! `assert_eq!(update(state, action), (expected, Effect::None))`.

use crate::catalog::CatalogError;
use crate::core::book::Book;
use crate::core::state::BookListState;

/// Closed set of events the book-list screen can emit.
#[derive(Debug, Clone)]
pub enum BookListAction {
    /// The query text changed; carries the full new query.
    QueryChanged(String),
    /// A tab was selected by index (0 = search results, 1 = favorites).
    TabSelected(usize),
    /// A book row was activated; routed to the detail screen.
    BookClicked(Book),
    /// The user asked for the current query to be searched.
    SearchSubmitted,
    /// A background search finished, with its outcome.
    SearchCompleted(Result<Vec<Book>, CatalogError>),
    /// Flip a book's membership in the favorites list.
    FavoriteToggled(Book),
    /// Leave the application.
    Quit,
}

/// What the caller of [`update`] must do after the state transition.
///
/// The reducer never performs I/O or navigation itself; it describes the
/// follow-up and the run loop carries it out.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Start a background catalog search for this query.
    Search(String),
    /// Navigate to the detail screen for this book.
    OpenDetail(Book),
    Quit,
}

/// Pure reducer: consumes the current snapshot, returns the next one.
pub fn update(state: BookListState, action: BookListAction) -> (BookListState, Effect) {
    match action {
        BookListAction::QueryChanged(query) => (
            BookListState {
                search_query: query,
                ..state
            },
            Effect::None,
        ),
        BookListAction::TabSelected(index) => (
            // Stored verbatim; the screen only ever emits 0 or 1, and the
            // renderer treats any other index as an empty view.
            BookListState {
                selected_tab_index: index,
                ..state
            },
            Effect::None,
        ),
        BookListAction::BookClicked(book) => (state, Effect::OpenDetail(book)),
        BookListAction::SearchSubmitted => {
            if state.search_query.trim().is_empty() {
                (
                    BookListState {
                        search_results: Vec::new(),
                        is_loading: false,
                        error_message: None,
                        ..state
                    },
                    Effect::None,
                )
            } else {
                let query = state.search_query.clone();
                (
                    BookListState {
                        is_loading: true,
                        error_message: None,
                        ..state
                    },
                    Effect::Search(query),
                )
            }
        }
        BookListAction::SearchCompleted(Ok(books)) => (
            BookListState {
                search_results: books,
                is_loading: false,
                error_message: None,
                ..state
            },
            Effect::None,
        ),
        BookListAction::SearchCompleted(Err(error)) => (
            BookListState {
                search_results: Vec::new(),
                is_loading: false,
                error_message: Some(error.to_ui_text()),
                ..state
            },
            Effect::None,
        ),
        BookListAction::FavoriteToggled(book) => {
            let mut next = state;
            if let Some(pos) = next.favorite_books.iter().position(|b| b.id == book.id) {
                next.favorite_books.remove(pos);
            } else {
                next.favorite_books.push(book);
            }
            (next, Effect::None)
        }
        BookListAction::Quit => (state, Effect::Quit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::FAVORITES_TAB;
    use crate::test_support::sample_book;

    #[test]
    fn query_change_replaces_only_the_query() {
        let initial = BookListState::default();

        let (state, effect) = update(
            initial.clone(),
            BookListAction::QueryChanged("graphs".to_string()),
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(state.search_query, "graphs");
        assert_eq!(
            BookListState {
                search_query: initial.search_query.clone(),
                ..state.clone()
            },
            initial
        );

        // Last write wins across a sequence, empty string included.
        let (state, _) = update(state, BookListAction::QueryChanged(String::new()));
        let (state, _) = update(state, BookListAction::QueryChanged("trees".to_string()));
        assert_eq!(state.search_query, "trees");
    }

    #[test]
    fn tab_selection_is_stored_verbatim() {
        let (state, effect) = update(BookListState::default(), BookListAction::TabSelected(1));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.selected_tab_index, 1);

        // No bounds check: an out-of-range index is kept as given.
        let (state, _) = update(state, BookListAction::TabSelected(7));
        assert_eq!(state.selected_tab_index, 7);
        assert!(state.visible_books().is_empty());
    }

    #[test]
    fn tab_selection_leaves_other_fields_alone() {
        let mut initial = BookListState::default();
        initial.search_results = vec![sample_book("OL1W", "Kept")];
        initial.is_loading = true;

        let (state, _) = update(initial.clone(), BookListAction::TabSelected(1));
        assert_eq!(state.search_results, initial.search_results);
        assert_eq!(state.search_query, initial.search_query);
        assert!(state.is_loading);
    }

    #[test]
    fn query_then_tab_scenario() {
        let initial = BookListState::default();
        assert_eq!(initial.search_query, "Kotlin");
        assert_eq!(initial.selected_tab_index, 0);

        let (state, _) = update(initial, BookListAction::QueryChanged("Rust".to_string()));
        let (state, _) = update(state, BookListAction::TabSelected(FAVORITES_TAB));

        assert_eq!(state.search_query, "Rust");
        assert_eq!(state.selected_tab_index, FAVORITES_TAB);
        assert!(state.search_results.is_empty());
        assert!(state.favorite_books.is_empty());
        assert!(!state.is_loading);
        assert!(state.error_message.is_none());
    }

    #[test]
    fn book_click_changes_nothing_and_routes_to_detail() {
        let book = sample_book("OL1W", "Clicked");
        let initial = BookListState::default();

        let (state, effect) = update(initial.clone(), BookListAction::BookClicked(book.clone()));
        assert_eq!(state, initial);
        assert_eq!(effect, Effect::OpenDetail(book));
    }

    #[test]
    fn submit_starts_a_search_and_clears_any_error() {
        let mut initial = BookListState::with_query("rust async");
        initial.error_message = Some(crate::core::text::UiText::dynamic("stale"));

        let (state, effect) = update(initial, BookListAction::SearchSubmitted);
        assert!(state.is_loading);
        assert!(state.error_message.is_none());
        assert_eq!(effect, Effect::Search("rust async".to_string()));
    }

    #[test]
    fn submitting_a_blank_query_clears_results_without_fetching() {
        let mut initial = BookListState::with_query("   ");
        initial.search_results = vec![sample_book("OL1W", "Stale")];

        let (state, effect) = update(initial, BookListAction::SearchSubmitted);
        assert_eq!(effect, Effect::None);
        assert!(!state.is_loading);
        assert!(state.search_results.is_empty());
    }

    #[test]
    fn successful_completion_replaces_results() {
        let mut initial = BookListState::default();
        initial.is_loading = true;

        let books = vec![sample_book("OL1W", "A"), sample_book("OL2W", "B")];
        let (state, effect) = update(initial, BookListAction::SearchCompleted(Ok(books.clone())));
        assert_eq!(effect, Effect::None);
        assert!(!state.is_loading);
        assert!(state.error_message.is_none());
        assert_eq!(state.search_results, books);
    }

    #[test]
    fn failed_completion_surfaces_an_error_message() {
        let mut initial = BookListState::default();
        initial.is_loading = true;
        initial.search_results = vec![sample_book("OL1W", "Stale")];

        let (state, _) = update(
            initial,
            BookListAction::SearchCompleted(Err(CatalogError::Network("refused".to_string()))),
        );
        assert!(!state.is_loading);
        assert!(state.search_results.is_empty());
        assert!(state.error_message.is_some());
    }

    #[test]
    fn favorite_toggle_flips_membership() {
        let book = sample_book("OL1W", "Toggle");
        let initial = BookListState::default();

        let (state, _) = update(initial, BookListAction::FavoriteToggled(book.clone()));
        assert!(state.is_favorite("OL1W"));

        let (state, _) = update(state, BookListAction::FavoriteToggled(book));
        assert!(!state.is_favorite("OL1W"));
    }

    #[test]
    fn favorites_keep_insertion_order() {
        let (state, _) = update(
            BookListState::default(),
            BookListAction::FavoriteToggled(sample_book("OL1W", "First")),
        );
        let (state, _) = update(
            state,
            BookListAction::FavoriteToggled(sample_book("OL2W", "Second")),
        );
        let ids: Vec<&str> = state.favorite_books.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["OL1W", "OL2W"]);
    }

    #[test]
    fn quit_requests_shutdown() {
        let (state, effect) = update(BookListState::default(), BookListAction::Quit);
        assert_eq!(state, BookListState::default());
        assert_eq!(effect, Effect::Quit);
    }
}
