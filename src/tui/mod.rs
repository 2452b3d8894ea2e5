//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! translates keyboard events into `BookListAction` values.
//!
//! This is the only module that knows about ratatui and crossterm. The
//! run loop here is also the composition root (it builds the catalog
//! client and the view-model), the navigation host (it owns which screen
//! is showing), and the effect performer (it spawns background fetches
//! that report back as actions over a channel).
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (search in flight, cover pending): draws every ~80ms
//!   for a smooth spinner.
//! - **Idle**: sleeps up to 250ms in the event poll and only redraws on
//!   events, state replacements, or terminal resize.

use log::{info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

mod component;
mod components;
mod event;
pub mod strings;
mod ui;

use crate::catalog::{self, BookSource, CoverArt, CoverError, OpenLibraryClient};
use crate::core::action::{BookListAction, Effect};
use crate::core::book::Book;
use crate::core::config::ResolvedConfig;
use crate::core::result::ResultExt;
use crate::core::state::{BookListState, TAB_COUNT};
use crate::core::viewmodel::BookListViewModel;
use crate::tui::component::EventHandler;
use crate::tui::components::{BookDetailView, BookListView, CoverState, SearchBar, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::strings::StringTable;

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keystrokes edit the search query. Esc switches to Browse.
    Typing,
    /// Keystrokes navigate the list. `/` switches to Typing.
    Browse,
}

/// Which screen the main area shows. The detail screen carries the book
/// the navigation received.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    List,
    Detail(Book),
}

/// TUI-specific presentation state (not part of the core snapshot).
pub struct TuiState {
    pub search_bar: SearchBar,
    pub list: BookListView,
    pub detail: BookDetailView,
    pub input_mode: InputMode,
    pub screen: Screen,
    /// Cover fetch status for the book on the detail screen.
    pub cover: CoverState,
    pub strings: StringTable,
}

impl TuiState {
    pub fn new(initial_query: &str) -> Self {
        Self {
            search_bar: SearchBar::new(initial_query),
            list: BookListView::new(),
            detail: BookDetailView::new(),
            input_mode: InputMode::Typing, // User expects to type immediately
            screen: Screen::List,
            cover: CoverState::Pending,
            strings: StringTable,
        }
    }
}

/// Everything that can arrive from a background task.
enum UiMessage {
    Action(BookListAction),
    /// Cover fetches are presentation-local; they never become actions.
    CoverResolved {
        book_id: String,
        result: Result<CoverArt, CoverError>,
    },
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock
        )?;
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

/// Build the catalog client from the resolved config.
pub fn build_source(config: &ResolvedConfig) -> Arc<dyn BookSource> {
    Arc::new(OpenLibraryClient::new(
        Some(config.openlibrary_base_url.clone()),
        Some(config.covers_base_url.clone()),
    ))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = build_source(&config);
    let view_model = BookListViewModel::new(BookListState::with_query(&config.default_query));
    let mut state_rx = view_model.subscribe();
    let mut tui = TuiState::new(&config.default_query);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for completions from background tasks
    let (tx, rx) = mpsc::channel();
    let covers_client = reqwest::Client::new();

    let mut should_quit = false;

    // Seed the screen with results for the configured startup query.
    let effect = view_model.on_action(BookListAction::SearchSubmitted);
    perform_effect(
        effect,
        &mut tui,
        &source,
        &covers_client,
        &config,
        &tx,
        &mut should_quit,
    );

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // A replaced snapshot means the frame is stale.
        if state_rx.has_changed().unwrap_or(false) {
            state_rx.borrow_and_update();
            needs_redraw = true;
        }
        let state = view_model.current();

        // Spinners animate while anything is in flight
        let animating = state.is_loading
            || (matches!(tui.screen, Screen::Detail(_))
                && matches!(tui.cover, CoverState::Pending));
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &state, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), longer when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(250)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of mode
            if matches!(event, TuiEvent::ForceQuit) {
                let effect = view_model.on_action(BookListAction::Quit);
                perform_effect(
                    effect,
                    &mut tui,
                    &source,
                    &covers_client,
                    &config,
                    &tx,
                    &mut should_quit,
                );
                continue;
            }

            if let Some(action) = route_event(&event, &view_model, &mut tui) {
                let effect = view_model.on_action(action);
                perform_effect(
                    effect,
                    &mut tui,
                    &source,
                    &covers_client,
                    &config,
                    &tx,
                    &mut should_quit,
                );
            }
        }

        if should_quit {
            break;
        }

        // Handle background task completions
        while let Ok(message) = rx.try_recv() {
            needs_redraw = true;
            match message {
                UiMessage::Action(action) => {
                    let effect = view_model.on_action(action);
                    perform_effect(
                        effect,
                        &mut tui,
                        &source,
                        &covers_client,
                        &config,
                        &tx,
                        &mut should_quit,
                    );
                }
                UiMessage::CoverResolved { book_id, result } => {
                    // Covers resolve late; only the currently shown book counts.
                    if let Screen::Detail(book) = &tui.screen {
                        if book.id == book_id {
                            tui.cover = match result {
                                Ok(art) => CoverState::Loaded(art),
                                Err(error) => CoverState::Failed(error),
                            };
                        }
                    }
                }
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Interprets a key event for the current screen and mode, mutating
/// presentation state directly and returning the action to dispatch, if any.
fn route_event(
    event: &TuiEvent,
    view_model: &BookListViewModel,
    tui: &mut TuiState,
) -> Option<BookListAction> {
    let state = view_model.current();

    match tui.screen.clone() {
        Screen::Detail(book) => match event {
            TuiEvent::Escape => {
                tui.screen = Screen::List;
                None
            }
            TuiEvent::InputChar('j') | TuiEvent::CursorDown => {
                tui.detail.scroll_down(1);
                None
            }
            TuiEvent::InputChar('k') | TuiEvent::CursorUp => {
                tui.detail.scroll_up(1);
                None
            }
            TuiEvent::PageDown => {
                tui.detail.scroll_down(10);
                None
            }
            TuiEvent::PageUp => {
                tui.detail.scroll_up(10);
                None
            }
            TuiEvent::InputChar('f') => Some(BookListAction::FavoriteToggled(book)),
            TuiEvent::InputChar('q') => Some(BookListAction::Quit),
            _ => None,
        },
        Screen::List => match tui.input_mode {
            InputMode::Typing => match event {
                TuiEvent::Escape => {
                    tui.input_mode = InputMode::Browse;
                    None
                }
                TuiEvent::NextTab => Some(next_tab_action(&state, 1)),
                TuiEvent::PrevTab => Some(next_tab_action(&state, TAB_COUNT - 1)),
                _ => match tui.search_bar.handle_event(event) {
                    Some(SearchEvent::QueryChanged(query)) => {
                        Some(BookListAction::QueryChanged(query))
                    }
                    Some(SearchEvent::Submit) => {
                        tui.input_mode = InputMode::Browse;
                        // One search in flight at a time; completions would
                        // otherwise race and the last response would win.
                        if state.is_loading {
                            None
                        } else {
                            Some(BookListAction::SearchSubmitted)
                        }
                    }
                    None => None,
                },
            },
            InputMode::Browse => match event {
                TuiEvent::InputChar('/') => {
                    tui.input_mode = InputMode::Typing;
                    None
                }
                TuiEvent::InputChar('q') => Some(BookListAction::Quit),
                TuiEvent::InputChar('j') | TuiEvent::CursorDown => {
                    tui.list.move_down(state.visible_books());
                    None
                }
                TuiEvent::InputChar('k') | TuiEvent::CursorUp => {
                    tui.list.move_up(state.visible_books());
                    None
                }
                TuiEvent::InputChar('f') => tui
                    .list
                    .selected_book(state.visible_books())
                    .cloned()
                    .map(BookListAction::FavoriteToggled),
                TuiEvent::Submit => tui
                    .list
                    .selected_book(state.visible_books())
                    .cloned()
                    .map(BookListAction::BookClicked),
                TuiEvent::NextTab => Some(next_tab_action(&state, 1)),
                TuiEvent::PrevTab => Some(next_tab_action(&state, TAB_COUNT - 1)),
                _ => None,
            },
        },
    }
}

/// Cycle the fixed two-tab set by `step`.
fn next_tab_action(state: &BookListState, step: usize) -> BookListAction {
    BookListAction::TabSelected((state.selected_tab_index + step) % TAB_COUNT)
}

/// Carry out what the reducer asked for.
fn perform_effect(
    effect: Effect,
    tui: &mut TuiState,
    source: &Arc<dyn BookSource>,
    covers_client: &reqwest::Client,
    config: &ResolvedConfig,
    tx: &mpsc::Sender<UiMessage>,
    should_quit: &mut bool,
) {
    match effect {
        Effect::None => {}
        Effect::Search(query) => {
            spawn_search(source.clone(), query, config.result_limit, tx.clone());
        }
        Effect::OpenDetail(book) => {
            tui.cover = CoverState::Pending;
            tui.detail.reset();
            spawn_cover_fetch(covers_client.clone(), &book, tx.clone());
            tui.screen = Screen::Detail(book);
        }
        Effect::Quit => *should_quit = true,
    }
}

fn spawn_search(
    source: Arc<dyn BookSource>,
    query: String,
    limit: u32,
    tx: mpsc::Sender<UiMessage>,
) {
    info!("Spawning catalog search for {query:?}");
    tokio::spawn(async move {
        let result = source
            .search_books(&query, limit)
            .await
            .on_success(|books| info!("Search for {query:?} found {} books", books.len()))
            .on_error(|e| info!("Search for {query:?} failed: {e}"));
        if tx
            .send(UiMessage::Action(BookListAction::SearchCompleted(result)))
            .is_err()
        {
            warn!("Failed to deliver search result: receiver dropped");
        }
    });
}

fn spawn_cover_fetch(client: reqwest::Client, book: &Book, tx: mpsc::Sender<UiMessage>) {
    let url = book.image_url.clone();
    let book_id = book.id.clone();
    info!("Fetching cover for {book_id}");
    tokio::spawn(async move {
        let result = catalog::covers::fetch_cover(&client, &url)
            .await
            .on_error(|e| info!("Cover fetch failed for {book_id}: {e}"));
        if tx.send(UiMessage::CoverResolved { book_id, result }).is_err() {
            warn!("Failed to deliver cover result: receiver dropped");
        }
    });
}
