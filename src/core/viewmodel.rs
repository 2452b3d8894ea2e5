//! The single-writer observable state container for the book-list screen.
//!
//! Exactly one `BookListViewModel` produces new `BookListState` snapshots;
//! any number of observers read them. The container is a single-slot
//! replay-latest cell (`tokio::sync::watch`): replacement is atomic from an
//! observer's point of view, late subscribers immediately observe the
//! latest snapshot, and a slow observer skips intermediates rather than
//! queueing them.
//!
//! The container performs no I/O. `on_action` runs the pure reducer,
//! publishes the next snapshot, and hands the resulting [`Effect`] back to
//! the caller (the run loop) to perform.

use tokio::sync::watch;

use crate::core::action::{BookListAction, Effect, update};
use crate::core::state::BookListState;

pub struct BookListViewModel {
    state: watch::Sender<BookListState>,
}

impl BookListViewModel {
    pub fn new(initial: BookListState) -> Self {
        let (state, _) = watch::channel(initial);
        Self { state }
    }

    /// Replay-of-one subscription: the receiver starts at the latest
    /// snapshot and observes every subsequent replacement it is fast
    /// enough to see.
    pub fn subscribe(&self) -> watch::Receiver<BookListState> {
        self.state.subscribe()
    }

    /// The latest snapshot, cloned out of the cell.
    pub fn current(&self) -> BookListState {
        self.state.borrow().clone()
    }

    /// Single entry point for screen events. Replaces the held snapshot
    /// wholesale and returns the follow-up the caller must perform.
    pub fn on_action(&self, action: BookListAction) -> Effect {
        let (next, effect) = update(self.current(), action);
        self.state.send_replace(next);
        effect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_book;

    #[test]
    fn actions_replace_the_observable_snapshot() {
        let vm = BookListViewModel::new(BookListState::default());
        let rx = vm.subscribe();

        let effect = vm.on_action(BookListAction::QueryChanged("Rust".to_string()));
        assert_eq!(effect, Effect::None);
        assert_eq!(rx.borrow().search_query, "Rust");
        assert_eq!(vm.current().search_query, "Rust");
    }

    #[test]
    fn late_subscribers_observe_the_latest_snapshot() {
        let vm = BookListViewModel::new(BookListState::default());
        vm.on_action(BookListAction::QueryChanged("first".to_string()));
        vm.on_action(BookListAction::QueryChanged("latest".to_string()));

        let rx = vm.subscribe();
        assert_eq!(rx.borrow().search_query, "latest");
    }

    #[tokio::test]
    async fn observers_are_notified_of_replacements() {
        let vm = BookListViewModel::new(BookListState::default());
        let mut rx = vm.subscribe();

        // Mark the initial snapshot as seen.
        rx.borrow_and_update();
        vm.on_action(BookListAction::TabSelected(1));

        rx.changed().await.expect("sender alive");
        assert_eq!(rx.borrow_and_update().selected_tab_index, 1);
    }

    #[test]
    fn effects_flow_back_to_the_caller() {
        let vm = BookListViewModel::new(BookListState::with_query("async rust"));

        let effect = vm.on_action(BookListAction::SearchSubmitted);
        assert_eq!(effect, Effect::Search("async rust".to_string()));
        assert!(vm.current().is_loading);

        let book = sample_book("OL1W", "Detail");
        let effect = vm.on_action(BookListAction::BookClicked(book.clone()));
        assert_eq!(effect, Effect::OpenDetail(book));
    }
}
