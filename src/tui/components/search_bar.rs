//! # SearchBar Component
//!
//! Single-line query input at the top of the book-list screen.
//!
//! ## Responsibilities
//!
//! - Capture query text (chars, backspace, paste, Ctrl+U clear)
//! - Emit `QueryChanged` with the full new query on every edit
//! - Emit `Submit` on Enter
//!
//! The buffer is internal state; it is seeded with the startup query and
//! mirrors what the core state holds, because every edit round-trips
//! through a `QueryChanged` action.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the SearchBar.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// The query text changed; carries the full new value.
    QueryChanged(String),
    /// The user pressed Enter.
    Submit,
}

pub struct SearchBar {
    /// Query buffer (internal state).
    pub buffer: String,
    /// Whether the bar currently receives keystrokes (prop).
    pub focused: bool,
    /// Block title, resolved by the caller from the string table (prop).
    pub title: String,
}

impl SearchBar {
    pub fn new(initial_query: &str) -> Self {
        Self {
            buffer: initial_query.to_string(),
            focused: true,
            title: String::new(),
        }
    }

    /// The tail of the buffer that fits into `width` display columns.
    fn visible_tail(&self, width: u16) -> &str {
        let width = width as usize;
        let mut start = 0;
        while self.buffer[start..].width() > width {
            let mut iter = self.buffer[start..].chars();
            match iter.next() {
                Some(c) => start += c.len_utf8(),
                None => break,
            }
        }
        &self.buffer[start..]
    }
}

impl Component for SearchBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let inner_width = area.width.saturating_sub(3);
        let visible = self.visible_tail(inner_width);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.title.as_str());
        let input = Paragraph::new(visible).block(block);
        frame.render_widget(input, area);

        if self.focused {
            let cursor_x = area.x + 1 + visible.width() as u16;
            frame.set_cursor_position((cursor_x, area.y + 1));
        }
    }
}

impl EventHandler for SearchBar {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(SearchEvent::QueryChanged(self.buffer.clone()))
            }
            TuiEvent::Paste(text) => {
                // A pasted newline would never be typeable here; drop it.
                self.buffer.extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
                Some(SearchEvent::QueryChanged(self.buffer.clone()))
            }
            TuiEvent::Backspace => {
                self.buffer.pop()?;
                Some(SearchEvent::QueryChanged(self.buffer.clone()))
            }
            TuiEvent::ClearLine => {
                if self.buffer.is_empty() {
                    None
                } else {
                    self.buffer.clear();
                    Some(SearchEvent::QueryChanged(String::new()))
                }
            }
            TuiEvent::Submit => Some(SearchEvent::Submit),
            _ => None,
        }
    }
}
