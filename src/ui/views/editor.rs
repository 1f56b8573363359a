use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

use crate::{
    model::{
        champion::Champion,
        ids::ChampionId,
        progress::{ProgressRecord, MAX_FUN_RATING, MIN_FUN_RATING},
    },
    styled_line, styled_span,
    ui::views::{accent_style, eval_color_scale_descending, highlight_style, ACCENT},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Fun,
    Games,
    Notes,
    Cancel,
    Save,
}

impl EditorField {
    const ORDER: [EditorField; 5] = [
        EditorField::Fun,
        EditorField::Games,
        EditorField::Notes,
        EditorField::Cancel,
        EditorField::Save,
    ];

    fn position(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> EditorField {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(&self) -> EditorField {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    None,
    Cancel,
    Save(ChampionId, ProgressRecord),
}

/// Unsaved edits for one champion. Nothing reaches the store until the user
/// picks Save.
#[derive(Debug, Clone)]
pub struct EditorDraft {
    pub fun_rating: u8,
    pub games_remaining: u32,
    pub notes: String,
    pub focus: EditorField,
}

impl EditorDraft {
    pub fn from_record(existing: Option<&ProgressRecord>) -> Self {
        let record = existing.cloned().unwrap_or_default();
        Self {
            fun_rating: record.fun_rating,
            games_remaining: record.games_remaining,
            notes: record.notes,
            focus: EditorField::Fun,
        }
    }

    pub fn adjust_fun(&mut self, delta: i16) {
        let value = (self.fun_rating as i16 + delta).clamp(MIN_FUN_RATING as i16, MAX_FUN_RATING as i16);
        self.fun_rating = value as u8;
    }

    pub fn set_fun_digit(&mut self, digit: char) {
        if let Some(value) = digit.to_digit(10) {
            self.fun_rating = if value == 0 { MAX_FUN_RATING } else { value as u8 };
        }
    }

    pub fn increment_games(&mut self) {
        self.games_remaining = self.games_remaining.saturating_add(1);
    }

    pub fn decrement_games(&mut self) {
        self.games_remaining = self.games_remaining.saturating_sub(1);
    }

    pub fn to_record(&self) -> ProgressRecord {
        ProgressRecord {
            fun_rating: self.fun_rating,
            games_remaining: self.games_remaining,
            notes: self.notes.clone(),
        }
    }
}

pub struct EditorView {
    champion: Champion,
    image_url: String,
    draft: EditorDraft,
}

impl EditorView {
    pub fn new(champion: &Champion, image_url: String, existing: Option<&ProgressRecord>) -> Self {
        Self {
            champion: champion.clone(),
            image_url,
            draft: EditorDraft::from_record(existing),
        }
    }

    #[cfg(test)]
    pub fn draft(&self) -> &EditorDraft {
        &self.draft
    }

    pub fn handle_key(&mut self, key: KeyCode) -> EditorAction {
        let draft = &mut self.draft;

        match (draft.focus, key) {
            (_, KeyCode::Esc) => return EditorAction::Cancel,
            (_, KeyCode::Tab) | (_, KeyCode::Down) => draft.focus = draft.focus.next(),
            (_, KeyCode::BackTab) | (_, KeyCode::Up) => draft.focus = draft.focus.previous(),

            (EditorField::Fun, KeyCode::Left) | (EditorField::Fun, KeyCode::Char('-')) => draft.adjust_fun(-1),
            (EditorField::Fun, KeyCode::Right) | (EditorField::Fun, KeyCode::Char('+')) => draft.adjust_fun(1),
            (EditorField::Fun, KeyCode::Char(c)) if c.is_ascii_digit() => draft.set_fun_digit(c),

            (EditorField::Games, KeyCode::Left) | (EditorField::Games, KeyCode::Char('-')) => draft.decrement_games(),
            (EditorField::Games, KeyCode::Right) | (EditorField::Games, KeyCode::Char('+')) => {
                draft.increment_games()
            }

            (EditorField::Notes, KeyCode::Char(c)) => draft.notes.push(c),
            (EditorField::Notes, KeyCode::Enter) => draft.notes.push('\n'),
            (EditorField::Notes, KeyCode::Backspace) => {
                draft.notes.pop();
            }

            (EditorField::Cancel, KeyCode::Enter) => return EditorAction::Cancel,
            (EditorField::Save, KeyCode::Enter) => {
                return EditorAction::Save(self.champion.id.clone(), draft.to_record());
            }
            (EditorField::Cancel, KeyCode::Right) => draft.focus = EditorField::Save,
            (EditorField::Save, KeyCode::Left) => draft.focus = EditorField::Cancel,
            (_, KeyCode::Enter) => draft.focus = draft.focus.next(),
            _ => {}
        }

        EditorAction::None
    }

    fn field_style(&self, field: EditorField) -> Style {
        if self.draft.focus == field {
            highlight_style()
        } else {
            Style::default()
        }
    }

    fn fun_scale() -> Vec<(u8, Color)> {
        vec![
            (8, Color::Green),
            (5, Color::Rgb(200, 255, 100)),
            (3, Color::Yellow),
            (0, Color::Red),
        ]
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let info = &self.champion.info;
        let tags = if self.champion.tags.is_empty() {
            "-".to_string()
        } else {
            self.champion.tags.join(", ")
        };
        let fun_color = eval_color_scale_descending(self.draft.fun_rating, &Self::fun_scale());

        let mut lines = vec![
            styled_line!("Tags:      {}", tags; ACCENT),
            styled_line!(
                "Attack {}  Defense {}  Magic {}  Difficulty {}",
                info.attack,
                info.defense,
                info.magic,
                info.difficulty;
                Color::Gray
            ),
            styled_line!("{}", self.image_url; Color::DarkGray),
            styled_line!(),
            styled_line!(LIST [
                styled_span!("Fun (1-10):       "),
                styled_span!(format!(" < {:>2} > ", self.draft.fun_rating); => self.field_style(EditorField::Fun).fg(fun_color)),
            ]),
            styled_line!(LIST [
                styled_span!("Games until Win:  "),
                styled_span!(format!(" - {} + ", self.draft.games_remaining); => self.field_style(EditorField::Games)),
            ]),
            styled_line!(),
            styled_line!(LIST [styled_span!("Notes:"; => self.field_style(EditorField::Notes))]),
        ];

        let cursor = if self.draft.focus == EditorField::Notes { "_" } else { "" };
        let mut note_lines: Vec<String> = self.draft.notes.split('\n').map(|l| format!("  {}", l)).collect();
        if let Some(last) = note_lines.last_mut() {
            last.push_str(cursor);
        }
        for note_line in note_lines {
            lines.push(styled_line!(note_line));
        }

        lines.push(styled_line!());
        lines.push(styled_line!(LIST [
            styled_span!("[ Cancel ]"; => self.field_style(EditorField::Cancel)),
            styled_span!("  "),
            styled_span!("[ Save ]"; => self.field_style(EditorField::Save).add_modifier(Modifier::BOLD)),
        ]));

        lines
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = centered_rect(60, 70, frame.size());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .padding(Padding::uniform(1))
            .title(format!("{} Progress", self.champion.name))
            .title_style(accent_style());

        let paragraph = Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::champion::fixtures::champion;

    fn editor(existing: Option<&ProgressRecord>) -> EditorView {
        EditorView::new(&champion("Ahri", &["Mage"]), "https://example.invalid/Ahri.png".into(), existing)
    }

    fn press(editor: &mut EditorView, keys: &[KeyCode]) -> EditorAction {
        let mut last = EditorAction::None;
        for key in keys {
            last = editor.handle_key(*key);
        }
        last
    }

    #[test]
    fn new_draft_uses_defaults() {
        let editor = editor(None);
        assert_eq!(editor.draft().to_record(), ProgressRecord::default());
        assert_eq!(editor.draft().fun_rating, 5);
        assert_eq!(editor.draft().games_remaining, 1);
        assert_eq!(editor.draft().notes, "");
    }

    #[test]
    fn draft_starts_from_existing_record() {
        let existing = ProgressRecord {
            fun_rating: 9,
            games_remaining: 0,
            notes: "won".into(),
        };
        let editor = editor(Some(&existing));
        assert_eq!(editor.draft().to_record(), existing);
    }

    #[test]
    fn fun_is_clamped() {
        let mut editor = editor(None);
        press(&mut editor, &[KeyCode::Right; 10]);
        assert_eq!(editor.draft().fun_rating, 10);

        press(&mut editor, &[KeyCode::Left; 20]);
        assert_eq!(editor.draft().fun_rating, 1);

        press(&mut editor, &[KeyCode::Char('7')]);
        assert_eq!(editor.draft().fun_rating, 7);
        press(&mut editor, &[KeyCode::Char('0')]);
        assert_eq!(editor.draft().fun_rating, 10);
    }

    #[test]
    fn games_floor_at_zero() {
        let mut editor = editor(None);
        press(&mut editor, &[KeyCode::Tab, KeyCode::Char('-'), KeyCode::Char('-'), KeyCode::Left]);
        assert_eq!(editor.draft().games_remaining, 0);

        press(&mut editor, &[KeyCode::Right, KeyCode::Char('+'), KeyCode::Right]);
        assert_eq!(editor.draft().games_remaining, 3);
    }

    #[test]
    fn notes_accept_text_and_newlines() {
        let mut editor = editor(None);
        press(
            &mut editor,
            &[
                KeyCode::Tab,
                KeyCode::Tab,
                KeyCode::Char('h'),
                KeyCode::Char('i'),
                KeyCode::Char('x'),
                KeyCode::Backspace,
                KeyCode::Enter,
                KeyCode::Char('-'),
            ],
        );
        assert_eq!(editor.draft().notes, "hi\n-");
    }

    #[test]
    fn arrows_switch_between_buttons() {
        let mut editor = editor(None);
        press(&mut editor, &[KeyCode::BackTab, KeyCode::Left]);
        assert_eq!(editor.draft().focus, EditorField::Cancel);
        press(&mut editor, &[KeyCode::Right]);
        assert_eq!(editor.draft().focus, EditorField::Save);
    }

    #[test]
    fn escape_cancels() {
        let mut editor = editor(None);
        assert_eq!(press(&mut editor, &[KeyCode::Right, KeyCode::Esc]), EditorAction::Cancel);
    }

    #[test]
    fn cancel_button_cancels() {
        let mut editor = editor(None);
        let action = press(&mut editor, &[KeyCode::BackTab, KeyCode::BackTab, KeyCode::Enter]);
        assert_eq!(action, EditorAction::Cancel);
    }

    #[test]
    fn save_button_returns_full_record() {
        let mut editor = editor(None);
        let action = press(
            &mut editor,
            &[
                KeyCode::Char('8'),
                KeyCode::Tab,
                KeyCode::Right,
                KeyCode::Tab,
                KeyCode::Char('o'),
                KeyCode::Char('k'),
                KeyCode::Tab,
                KeyCode::Tab,
                KeyCode::Enter,
            ],
        );

        assert_eq!(
            action,
            EditorAction::Save(
                "Ahri".into(),
                ProgressRecord {
                    fun_rating: 8,
                    games_remaining: 2,
                    notes: "ok".into(),
                }
            )
        );
    }
}
