use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::{
    model::champion::Champion,
    service::progress_store::ProgressStore,
    ui::{views::highlight_style, RenderContext},
};

pub const CELL_WIDTH: u16 = 16;
pub const CELL_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Up,
    Down,
    First,
    Last,
}

/// Champion grid with a cursor over the currently visible champions.
#[derive(Debug, Default)]
pub struct GridView {
    cursor: usize,
}

impl GridView {
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn columns_for(width: u16) -> usize {
        (width / CELL_WIDTH).max(1) as usize
    }

    pub fn selected<'a>(&self, visible: &[&'a Champion]) -> Option<&'a Champion> {
        visible.get(self.cursor).copied()
    }

    pub fn move_cursor(&mut self, direction: CursorMove, len: usize, columns: usize) {
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let columns = columns.max(1);
        let last = len - 1;

        self.cursor = match direction {
            CursorMove::Left => self.cursor.saturating_sub(1),
            CursorMove::Right => (self.cursor + 1).min(last),
            CursorMove::Up => self.cursor.checked_sub(columns).unwrap_or(self.cursor),
            CursorMove::Down if self.cursor + columns <= last => self.cursor + columns,
            CursorMove::Down => self.cursor,
            CursorMove::First => 0,
            CursorMove::Last => last,
        }
        .min(last);
    }

    /// First grid row to draw so that the cursor row stays on screen.
    fn first_row(&self, columns: usize, visible_rows: usize) -> usize {
        let cursor_row = self.cursor / columns;
        if cursor_row < visible_rows {
            0
        } else {
            cursor_row + 1 - visible_rows
        }
    }

    pub fn render(&self, rc: RenderContext, visible: &[&Champion], store: &ProgressStore) {
        let inner = rc.block.inner(rc.area);
        rc.frame.render_widget(rc.block, rc.area);

        if visible.is_empty() {
            let paragraph = Paragraph::new("No champions match this filter.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            rc.frame.render_widget(paragraph, inner);
            return;
        }

        let columns = Self::columns_for(inner.width);
        let visible_rows = ((inner.height / CELL_HEIGHT) as usize).max(1);
        let first_row = self.first_row(columns, visible_rows);

        for (index, champion) in visible.iter().enumerate().skip(first_row * columns) {
            let row = index / columns - first_row;
            if row >= visible_rows {
                break;
            }
            let col = index % columns;

            let cell = Rect {
                x: inner.x + col as u16 * CELL_WIDTH,
                y: inner.y + row as u16 * CELL_HEIGHT,
                width: CELL_WIDTH.min(inner.width),
                height: CELL_HEIGHT.min(inner.height),
            };

            let done = store.is_done(&champion.id);
            let block = if done {
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Thick)
                    .border_style(Style::default().fg(Color::Green))
            } else {
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
            };

            let name_style = if index == self.cursor {
                highlight_style()
            } else {
                Style::default()
            };

            let paragraph = Paragraph::new(champion.name.clone())
                .style(name_style)
                .alignment(Alignment::Center)
                .block(block);
            rc.frame.render_widget(paragraph, cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_moves_stop_at_edges() {
        let mut grid = GridView::new();
        grid.move_cursor(CursorMove::Left, 5, 3);
        assert_eq!(grid.cursor(), 0);

        grid.move_cursor(CursorMove::Last, 5, 3);
        grid.move_cursor(CursorMove::Right, 5, 3);
        assert_eq!(grid.cursor(), 4);
    }

    #[test]
    fn vertical_moves_jump_by_row() {
        let mut grid = GridView::new();
        grid.move_cursor(CursorMove::Down, 7, 3);
        assert_eq!(grid.cursor(), 3);
        grid.move_cursor(CursorMove::Down, 7, 3);
        assert_eq!(grid.cursor(), 6);

        // last row is partial, stay put
        grid.move_cursor(CursorMove::Right, 7, 3);
        grid.move_cursor(CursorMove::Up, 7, 3);
        assert_eq!(grid.cursor(), 3);
        grid.move_cursor(CursorMove::Right, 7, 3);
        grid.move_cursor(CursorMove::Down, 7, 3);
        assert_eq!(grid.cursor(), 4);

        grid.move_cursor(CursorMove::Up, 7, 3);
        grid.move_cursor(CursorMove::Up, 7, 3);
        assert_eq!(grid.cursor(), 1);
    }

    #[test]
    fn empty_grid_keeps_cursor_at_zero() {
        let mut grid = GridView::new();
        grid.move_cursor(CursorMove::Last, 0, 4);
        assert_eq!(grid.cursor(), 0);
    }

    #[test]
    fn first_row_scrolls_with_cursor() {
        let mut grid = GridView::new();
        assert_eq!(grid.first_row(4, 2), 0);

        grid.move_cursor(CursorMove::Last, 20, 4);
        assert_eq!(grid.cursor(), 19);
        assert_eq!(grid.first_row(4, 2), 3);
    }

    #[test]
    fn columns_never_drop_below_one() {
        assert_eq!(GridView::columns_for(5), 1);
        assert_eq!(GridView::columns_for(CELL_WIDTH * 10 + 3), 10);
    }
}
