use std::{fmt, io};

use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::{layout::Rect, Frame};

pub mod async_data;
pub mod filter_bar;
pub mod repl;
pub mod views;

pub use async_data::AsyncData;

pub struct RenderContext<'a, 'b> {
    pub frame: &'a mut Frame<'b>,
    pub area: Rect,
    pub block: Block<'b>,
}

impl<'a, 'b> RenderContext<'a, 'b> {
    pub fn error(self, error: &str) {
        let paragraph = Paragraph::new(format!("\n  [!] Error: {}", error))
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true })
            .block(self.block);

        self.frame.render_widget(paragraph, self.area);
    }

    pub fn message(self, message: &str) {
        let paragraph = Paragraph::new(format!("\n  {}", message))
            .style(Style::default().fg(Color::DarkGray))
            .block(self.block);

        self.frame.render_widget(paragraph, self.area);
    }
}

#[derive(Debug)]
pub enum ReplError {
    Console(io::Error),
}

impl fmt::Display for ReplError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReplError::Console(err) => write!(f, "Console error: {}", err),
        }
    }
}

impl From<io::Error> for ReplError {
    fn from(error: io::Error) -> Self {
        ReplError::Console(error)
    }
}
