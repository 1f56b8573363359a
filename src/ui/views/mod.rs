use ratatui::style::{Color, Modifier, Style};

pub mod editor;
pub mod grid;

pub use editor::*;
pub use grid::*;

pub const ACCENT: Color = Color::Rgb(200, 150, 0);

pub fn highlight_style() -> Style {
    Style::default().bg(Color::White).fg(Color::Black)
}

pub fn accent_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn eval_color_scale_descending<T: PartialOrd>(value: T, scale: &[(T, Color)]) -> Color {
    for (threshold, color) in scale {
        if value >= *threshold {
            return *color;
        }
    }
    // Default to the last color if no thresholds matched
    scale.last().map(|(_, color)| *color).unwrap_or(Color::White)
}

#[macro_export]
macro_rules! styled_span {
    // Expression with explicit style (expr; => style)
    ($expr:expr; => $style:expr) => {
        ratatui::text::Span::styled(format!("{}", $expr), $style)
    };

    // Expression with color (expr; Color::X)
    ($expr:expr; $color:expr) => {
        ratatui::text::Span::styled(format!("{}", $expr), ratatui::style::Style::default().fg($color))
    };

    // Formatted text with color (text, args...; Color::X)
    ($text:literal, $($arg:expr),+; $color:expr) => {
        ratatui::text::Span::styled(format!($text, $($arg),+), ratatui::style::Style::default().fg($color))
    };

    // Formatted text (text, args...)
    ($text:literal, $($arg:expr),+) => {
        ratatui::text::Span::raw(format!($text, $($arg),+))
    };

    // Plain text literal
    ($text:literal) => {
        ratatui::text::Span::raw($text)
    };

    // Plain expression
    ($expr:expr) => {
        ratatui::text::Span::raw(format!("{}", $expr))
    };
}

#[macro_export]
macro_rules! styled_line {
    // Empty line
    () => {
        ratatui::text::Line::raw("")
    };

    // Span list
    (LIST [$($args:expr),+ $(,)?]) => {
        ratatui::text::Line::from(vec![$($args),+])
    };

    // Full styled line
    ($($args:tt)+) => {
        ratatui::text::Line::from($crate::styled_span!($($args)+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_scale_picks_first_threshold_reached() {
        let scale = [(8, Color::Green), (5, Color::Yellow), (0, Color::Red)];
        assert_eq!(eval_color_scale_descending(9, &scale), Color::Green);
        assert_eq!(eval_color_scale_descending(5, &scale), Color::Yellow);
        assert_eq!(eval_color_scale_descending(1, &scale), Color::Red);
    }
}
