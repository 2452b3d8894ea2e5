//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! Two patterns, as elsewhere in the adapter:
//!
//! - **Stateless (props-based)**: receive all data as struct fields set by
//!   the caller each frame: `TabBar`.
//! - **Stateful (event-driven)**: hold presentation state and emit
//!   high-level events: `SearchBar` (text buffer), `BookListView`
//!   (id-keyed selection), `BookDetailView` (description scroll).
//!
//! Components never touch `BookListState` producers directly; they emit
//! events, the run loop turns them into actions.

pub mod book_list;
pub mod detail;
pub mod search_bar;
pub mod tab_bar;

pub use book_list::BookListView;
pub use detail::{BookDetailView, CoverState};
pub use search_bar::{SearchBar, SearchEvent};
pub use tab_bar::TabBar;
