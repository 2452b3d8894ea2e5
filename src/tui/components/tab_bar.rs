//! # TabBar Component
//!
//! The fixed two-tab bar between the search bar and the list: search
//! results on the left, favorites on the right, each with its count.
//!
//! Stateless: all fields are props set by the caller each frame. Which tab
//! is selected lives in `BookListState`, not here.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Tabs;

use crate::tui::component::Component;

pub struct TabBar {
    /// Resolved tab titles (search results, favorites).
    pub titles: [String; 2],
    /// Selected tab index from the state snapshot, stored verbatim; an
    /// out-of-range index simply highlights nothing.
    pub selected: usize,
    /// Book counts shown next to each title.
    pub counts: [usize; 2],
}

impl TabBar {
    pub fn new(titles: [String; 2], selected: usize, counts: [usize; 2]) -> Self {
        Self {
            titles,
            selected,
            counts,
        }
    }
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let labels: Vec<String> = self
            .titles
            .iter()
            .zip(self.counts)
            .map(|(title, count)| format!("{title} ({count})"))
            .collect();

        let tabs = Tabs::new(labels)
            .select(self.selected)
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(tab_bar: &mut TabBar) -> String {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| tab_bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn shows_both_titles_with_counts() {
        let mut tab_bar = TabBar::new(
            ["Search Results".to_string(), "Favorites".to_string()],
            0,
            [12, 3],
        );
        let text = render_to_text(&mut tab_bar);
        assert!(text.contains("Search Results (12)"));
        assert!(text.contains("Favorites (3)"));
    }

    #[test]
    fn renders_with_an_out_of_range_selection() {
        let mut tab_bar = TabBar::new(
            ["Search Results".to_string(), "Favorites".to_string()],
            7,
            [0, 0],
        );
        let text = render_to_text(&mut tab_bar);
        assert!(text.contains("Search Results (0)"));
    }
}
