//! # BookListView Component
//!
//! Scrollable list of books for the active tab.
//!
//! ## Responsibilities
//!
//! - Render books in exactly the order they were given
//! - Track the selection, keyed by `book.id` so it survives the list being
//!   replaced or reordered underneath it
//! - Show title, first author, rounded rating, and a favorite marker
//!
//! Selection movement wraps at both ends. When the selected id is no
//! longer (or not yet) in the list, the first row is the effective
//! selection.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::core::book::Book;
use crate::core::state::{BookListState, FAVORITES_TAB};
use crate::core::text::{MessageId, UiText};
use crate::tui::strings::StringTable;

pub struct BookListView {
    /// Identity key of the selected row; `None` means "first row".
    selected_id: Option<String>,
    list_state: ListState,
}

impl BookListView {
    pub fn new() -> Self {
        Self {
            selected_id: None,
            list_state: ListState::default(),
        }
    }

    /// Index the current selection resolves to within `books`.
    fn effective_index(&self, books: &[Book]) -> Option<usize> {
        if books.is_empty() {
            return None;
        }
        let index = self
            .selected_id
            .as_ref()
            .and_then(|id| books.iter().position(|b| &b.id == id))
            .unwrap_or(0);
        Some(index)
    }

    pub fn selected_book<'a>(&self, books: &'a [Book]) -> Option<&'a Book> {
        self.effective_index(books).map(|i| &books[i])
    }

    pub fn move_down(&mut self, books: &[Book]) {
        if let Some(index) = self.effective_index(books) {
            let next = (index + 1) % books.len();
            self.selected_id = Some(books[next].id.clone());
        }
    }

    pub fn move_up(&mut self, books: &[Book]) {
        if let Some(index) = self.effective_index(books) {
            let prev = (index + books.len() - 1) % books.len();
            self.selected_id = Some(books[prev].id.clone());
        }
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &BookListState,
        strings: &StringTable,
    ) {
        let books = state.visible_books();
        if books.is_empty() {
            let id = if state.selected_tab_index == FAVORITES_TAB {
                MessageId::EmptyFavorites
            } else {
                MessageId::EmptySearchResults
            };
            let empty = Paragraph::new(UiText::resource(id).resolve(strings))
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true })
                .centered();
            frame.render_widget(empty, area);
            return;
        }

        let title_width = (area.width as usize).saturating_sub(24).max(10);
        let items: Vec<ListItem> = books
            .iter()
            .map(|book| ListItem::new(book_row(book, state.is_favorite(&book.id), title_width)))
            .collect();

        self.list_state.select(self.effective_index(books));
        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, area, &mut self.list_state);
    }
}

impl Default for BookListView {
    fn default() -> Self {
        Self::new()
    }
}

fn book_row(book: &Book, is_favorite: bool, title_width: usize) -> Line<'static> {
    let mut spans = vec![Span::raw(if is_favorite { "♥ " } else { "  " })];

    spans.push(Span::styled(
        truncate_to_width(&book.title, title_width),
        Style::default().add_modifier(Modifier::BOLD),
    ));

    if let Some(author) = book.primary_author() {
        spans.push(Span::styled(
            format!(" by {author}"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    if let Some(rating) = book.rounded_rating() {
        spans.push(Span::styled(
            format!("  {rating:.1} ★"),
            Style::default().fg(Color::Yellow),
        ));
    }

    Line::from(spans)
}

/// Truncates to at most `max_width` display columns, appending an ellipsis
/// when anything was cut.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let budget = max_width.saturating_sub(1);
    for c in text.chars() {
        if out.width() + c.to_string().width() > budget {
            break;
        }
        out.push(c);
    }
    out.push('…');
    out
}
