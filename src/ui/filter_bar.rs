use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::{
    model::tag::TagFilter,
    ui::views::{accent_style, highlight_style, ACCENT},
};

pub struct FilterBar {
    selected: TagFilter,
}

impl FilterBar {
    pub fn new() -> Self {
        Self {
            selected: TagFilter::default(),
        }
    }

    pub fn selected(&self) -> TagFilter {
        self.selected
    }

    pub fn next(&mut self) {
        self.selected = self.selected.next();
    }

    pub fn previous(&mut self) {
        self.selected = self.selected.previous();
    }

    /// Selects by 1-based hotkey number; returns false for keys without a tag.
    pub fn select_hotkey(&mut self, key: char) -> bool {
        let Some(index) = key.to_digit(10).and_then(|d| (d as usize).checked_sub(1)) else {
            return false;
        };
        match TagFilter::from_index(index) {
            Some(filter) => {
                self.selected = filter;
                true
            }
            None => false,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = TagFilter::ALL
            .iter()
            .enumerate()
            .map(|(i, tag)| Line::from(format!(" {} {} ", i + 1, tag.label())))
            .collect();

        let tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(ACCENT))
                    .title("Filter")
                    .title_style(accent_style()),
            )
            .style(Style::default().fg(Color::Gray))
            .highlight_style(highlight_style())
            .select(self.selected.index());

        frame.render_widget(tabs, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_all() {
        assert_eq!(FilterBar::new().selected(), TagFilter::All);
    }

    #[test]
    fn hotkeys_are_one_based() {
        let mut bar = FilterBar::new();
        assert!(bar.select_hotkey('4'));
        assert_eq!(bar.selected(), TagFilter::Mage);

        assert!(!bar.select_hotkey('0'));
        assert!(!bar.select_hotkey('8'));
        assert_eq!(bar.selected(), TagFilter::Mage);
    }

    #[test]
    fn cycling_wraps() {
        let mut bar = FilterBar::new();
        bar.previous();
        assert_eq!(bar.selected(), TagFilter::Marksman);
        bar.next();
        assert_eq!(bar.selected(), TagFilter::All);
    }
}
