use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};

use crate::core::state::{BookListState, SEARCH_TAB};
use crate::core::text::{MessageId, UiText};
use crate::tui::component::Component;
use crate::tui::components::TabBar;
use crate::tui::{InputMode, Screen, TuiState};

/// Braille spinner frames for loading indicators.
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw_ui(frame: &mut Frame, state: &BookListState, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(3), Length(1), Min(0), Length(1)]);
    let [title_area, search_area, tabs_area, main_area, footer_area] = layout.areas(frame.area());

    // Title bar
    let title_text = if state.is_loading {
        format!(
            "Libris — Open Library browser | Searching {}",
            SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()]
        )
    } else {
        format!(
            "Libris — Open Library browser | {} results, {} favorites",
            state.search_results.len(),
            state.favorite_books.len()
        )
    };
    frame.render_widget(Span::raw(title_text), title_area);

    // Search bar props are synced from the snapshot each frame
    tui.search_bar.focused =
        matches!(tui.input_mode, InputMode::Typing) && matches!(tui.screen, Screen::List);
    tui.search_bar.title = UiText::resource(MessageId::HintSearch).resolve(&tui.strings);
    tui.search_bar.render(frame, search_area);

    // Tab bar
    let mut tab_bar = TabBar::new(
        [
            UiText::resource(MessageId::TabSearchResults).resolve(&tui.strings),
            UiText::resource(MessageId::TabFavorites).resolve(&tui.strings),
        ],
        state.selected_tab_index,
        [state.search_results.len(), state.favorite_books.len()],
    );
    tab_bar.render(frame, tabs_area);

    // Main area
    match &tui.screen {
        Screen::Detail(book) => {
            tui.detail.render(
                frame,
                main_area,
                book,
                &tui.cover,
                state.is_favorite(&book.id),
                &tui.strings,
                spinner_frame,
            );
        }
        Screen::List => {
            // Exactly one of loading / error / results describes the
            // screen; precedence here matches the reducer's guarantees.
            if state.is_loading && state.selected_tab_index == SEARCH_TAB {
                draw_loading_view(frame, main_area, spinner_frame);
            } else if let Some(error) = &state.error_message {
                if state.selected_tab_index == SEARCH_TAB {
                    draw_error_view(frame, main_area, &error.resolve(&tui.strings));
                } else {
                    tui.list.render(frame, main_area, state, &tui.strings);
                }
            } else {
                tui.list.render(frame, main_area, state, &tui.strings);
            }
        }
    }

    // Footer: keybinding hints for the current mode
    let hints = match (&tui.screen, &tui.input_mode) {
        (Screen::Detail(_), _) => "Esc: back  j/k: scroll  f: favorite  q: quit",
        (Screen::List, InputMode::Typing) => {
            "Enter: search  Esc: browse  Tab: switch tab  Ctrl+U: clear  Ctrl+C: quit"
        }
        (Screen::List, InputMode::Browse) => {
            "j/k: navigate  Enter: details  f: favorite  /: search  Tab: switch tab  q: quit"
        }
    };
    frame.render_widget(
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
        footer_area,
    );
}

fn draw_loading_view(frame: &mut Frame, area: Rect, spinner_frame: usize) {
    let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
    let paragraph = Paragraph::new(format!("{spinner} Searching the catalog…"))
        .block(Block::bordered())
        .centered();
    frame.render_widget(paragraph, area);
}

fn draw_error_view(frame: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::Red))
        .block(Block::bordered().title("ERROR"))
        .centered();
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;
    use crate::core::state::FAVORITES_TAB;
    use crate::test_support::sample_book;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(state: &BookListState, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(70, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, state, tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn draws_the_default_screen() {
        let state = BookListState::default();
        let mut tui = TuiState::new(&state.search_query);
        let text = render_to_text(&state, &mut tui);

        assert!(text.contains("Libris"));
        assert!(text.contains("Kotlin"));
        assert!(text.contains("Search Results (0)"));
        assert!(text.contains("Favorites (0)"));
    }

    #[test]
    fn loading_takes_precedence_over_results() {
        let mut state = BookListState::default();
        state.search_results = vec![sample_book("OL1W", "Hidden While Loading")];
        state.is_loading = true;

        let mut tui = TuiState::new(&state.search_query);
        let text = render_to_text(&state, &mut tui);
        assert!(text.contains("Searching the catalog"));
        assert!(!text.contains("Hidden While Loading"));
    }

    #[test]
    fn errors_render_resolved_messages() {
        let mut state = BookListState::default();
        state.error_message = Some(CatalogError::Network("refused".to_string()).to_ui_text());

        let mut tui = TuiState::new(&state.search_query);
        let text = render_to_text(&state, &mut tui);
        assert!(text.contains("ERROR"));
        assert!(text.contains("Could not reach the catalog"));
    }

    #[test]
    fn favorites_tab_still_renders_when_a_search_failed() {
        let mut state = BookListState::default();
        state.error_message = Some(CatalogError::Network("refused".to_string()).to_ui_text());
        state.favorite_books = vec![sample_book("OL2W", "Kept Favorite")];
        state.selected_tab_index = FAVORITES_TAB;

        let mut tui = TuiState::new(&state.search_query);
        let text = render_to_text(&state, &mut tui);
        assert!(text.contains("Kept Favorite"));
        assert!(!text.contains("ERROR"));
    }

    #[test]
    fn detail_screen_replaces_the_list() {
        let mut state = BookListState::default();
        state.search_results = vec![sample_book("OL1W", "List Entry")];

        let mut tui = TuiState::new(&state.search_query);
        tui.screen = Screen::Detail(sample_book("OL9W", "Detailed Book"));
        let text = render_to_text(&state, &mut tui);
        assert!(text.contains("Detailed Book"));
        assert!(text.contains("Esc: back"));
    }
}
