//! # BookDetailView Component
//!
//! The detail screen for one book: full metadata, the cover status, and a
//! scrollable description.
//!
//! Cover loading is asynchronous and can fail two ways (degenerate
//! dimensions vs. anything else). Failures stay on this screen as a
//! fallback box plus a resolved message; they never reach the list
//! screen's error field.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::catalog::{CoverArt, CoverError};
use crate::core::book::Book;
use crate::tui::strings::StringTable;
use crate::tui::ui::SPINNER_FRAMES;

/// Where the cover fetch for the shown book currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum CoverState {
    Pending,
    Loaded(CoverArt),
    Failed(CoverError),
}

pub struct BookDetailView {
    scroll: u16,
}

impl BookDetailView {
    pub fn new() -> Self {
        Self { scroll: 0 }
    }

    /// Back to the top; called when navigating to a different book.
    pub fn reset(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        book: &Book,
        cover: &CoverState,
        is_favorite: bool,
        strings: &StringTable,
        spinner_frame: usize,
    ) {
        use Constraint::{Length, Min};
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(truncated_title(book, area.width));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [meta_area, cover_area, description_area] =
            Layout::vertical([Length(6), Length(1), Min(0)]).areas(inner);

        frame.render_widget(Paragraph::new(metadata_lines(book, is_favorite)), meta_area);
        frame.render_widget(
            Paragraph::new(cover_line(cover, strings, spinner_frame)),
            cover_area,
        );

        let description = book
            .description
            .as_deref()
            .unwrap_or("No description available.");
        let wrapped = textwrap::wrap(description, description_area.width.max(1) as usize);
        let max_scroll = (wrapped.len() as u16).saturating_sub(description_area.height);
        self.scroll = self.scroll.min(max_scroll);

        let paragraph = Paragraph::new(description)
            .wrap(Wrap { trim: true })
            .scroll((self.scroll, 0));
        frame.render_widget(paragraph, description_area);
    }
}

impl Default for BookDetailView {
    fn default() -> Self {
        Self::new()
    }
}

fn truncated_title(book: &Book, width: u16) -> String {
    let mut title = book.title.clone();
    let budget = width.saturating_sub(4) as usize;
    if title.chars().count() > budget {
        title = title.chars().take(budget.saturating_sub(1)).collect();
        title.push('…');
    }
    title
}

fn metadata_lines(book: &Book, is_favorite: bool) -> Vec<Line<'static>> {
    let dim = Style::default().fg(Color::DarkGray);
    let mut lines = Vec::new();

    let authors = if book.authors.is_empty() {
        "Unknown author".to_string()
    } else {
        book.authors.join(", ")
    };
    lines.push(Line::from(vec![
        Span::styled("Authors: ", dim),
        Span::raw(authors),
    ]));

    let year = book
        .first_published_year
        .clone()
        .unwrap_or_else(|| "—".to_string());
    lines.push(Line::from(vec![
        Span::styled("First published: ", dim),
        Span::raw(year),
    ]));

    let languages = if book.languages.is_empty() {
        "—".to_string()
    } else {
        book.languages.join(", ")
    };
    lines.push(Line::from(vec![
        Span::styled("Languages: ", dim),
        Span::raw(languages),
    ]));

    let rating = match (book.rounded_rating(), book.ratings_count) {
        (Some(r), Some(count)) => format!("{r:.1} ★ ({count} ratings)"),
        (Some(r), None) => format!("{r:.1} ★"),
        _ => "Not rated".to_string(),
    };
    lines.push(Line::from(vec![
        Span::styled("Rating: ", dim),
        Span::styled(rating, Style::default().fg(Color::Yellow)),
    ]));

    let pages = book
        .num_pages
        .map(|p| p.to_string())
        .unwrap_or_else(|| "—".to_string());
    lines.push(Line::from(vec![
        Span::styled("Pages: ", dim),
        Span::raw(pages),
        Span::styled("   Editions: ", dim),
        Span::raw(book.num_editions.to_string()),
    ]));

    if is_favorite {
        lines.push(Line::from(Span::styled(
            "♥ In favorites",
            Style::default().fg(Color::Red),
        )));
    }

    lines
}

fn cover_line(cover: &CoverState, strings: &StringTable, spinner_frame: usize) -> Line<'static> {
    let dim = Style::default().fg(Color::DarkGray);
    match cover {
        CoverState::Pending => Line::from(vec![
            Span::styled("Cover: ", dim),
            Span::raw(format!(
                "loading {}",
                SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()]
            )),
        ]),
        CoverState::Loaded(art) => Line::from(vec![
            Span::styled("Cover: ", dim),
            Span::raw(format!("{} × {} px", art.width, art.height)),
        ]),
        CoverState::Failed(error) => Line::from(vec![
            Span::styled("Cover: ", dim),
            Span::raw("▒▒ "),
            Span::styled(
                error.to_ui_text().resolve(strings),
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]),
    }
}
