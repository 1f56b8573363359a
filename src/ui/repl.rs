use std::{io::stdout, time::Duration};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame, Terminal,
};

use crate::{
    model::champion::Catalog,
    service::{
        catalog::{completion_summary, visible_champions},
        data_manager::DataManager,
        progress_store::ProgressStore,
    },
    ui::{
        filter_bar::FilterBar,
        views::{accent_style, CursorMove, EditorAction, EditorView, GridView, ACCENT},
        AsyncData, RenderContext,
    },
};

use super::ReplError;

const TITLE: &str = "League of Legends A-Z Challenge";

enum AppState {
    Browsing,
    Editing(EditorView),
}

struct App {
    state: AppState,
    filter_bar: FilterBar,
    grid: GridView,
    catalog: AsyncData<Catalog>,
    grid_columns: usize,
    should_quit: bool,
}

impl App {
    fn new(catalog: AsyncData<Catalog>) -> Self {
        Self {
            state: AppState::Browsing,
            filter_bar: FilterBar::new(),
            grid: GridView::new(),
            catalog,
            grid_columns: 1,
            should_quit: false,
        }
    }

    fn is_editing(&self) -> bool {
        matches!(self.state, AppState::Editing(_))
    }

    fn handle_key(&mut self, key: KeyCode, store: &mut ProgressStore) {
        match &mut self.state {
            AppState::Editing(editor) => match editor.handle_key(key) {
                EditorAction::None => {}
                EditorAction::Cancel => {
                    log::debug!("Editor closed without saving");
                    self.state = AppState::Browsing;
                }
                EditorAction::Save(id, record) => {
                    store.save(id, record);
                    self.state = AppState::Browsing;
                }
            },
            AppState::Browsing => self.handle_browse_key(key, store),
        }
    }

    fn handle_browse_key(&mut self, key: KeyCode, store: &ProgressStore) {
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => {
                self.filter_bar.next();
                self.grid.reset();
            }
            KeyCode::BackTab => {
                self.filter_bar.previous();
                self.grid.reset();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if self.filter_bar.select_hotkey(c) {
                    self.grid.reset();
                }
            }
            KeyCode::Left => self.move_cursor(CursorMove::Left),
            KeyCode::Right => self.move_cursor(CursorMove::Right),
            KeyCode::Up => self.move_cursor(CursorMove::Up),
            KeyCode::Down => self.move_cursor(CursorMove::Down),
            KeyCode::Home => self.move_cursor(CursorMove::First),
            KeyCode::End => self.move_cursor(CursorMove::Last),
            KeyCode::Enter => self.open_editor(store),
            KeyCode::Char('o') => self.open_portrait(),
            _ => {}
        }
    }

    fn move_cursor(&mut self, direction: CursorMove) {
        let Some(catalog) = self.catalog.get_data() else {
            return;
        };
        let visible = visible_champions(&catalog.champions, self.filter_bar.selected());
        self.grid.move_cursor(direction, visible.len(), self.grid_columns);
    }

    fn open_editor(&mut self, store: &ProgressStore) {
        let Some(catalog) = self.catalog.get_data() else {
            return;
        };
        let visible = visible_champions(&catalog.champions, self.filter_bar.selected());
        let Some(champion) = self.grid.selected(&visible) else {
            return;
        };

        log::debug!("Opening editor for {}", champion.id);
        let editor = EditorView::new(champion, catalog.image_url(champion), store.get(&champion.id));
        self.state = AppState::Editing(editor);
    }

    fn open_portrait(&self) {
        let Some(catalog) = self.catalog.get_data() else {
            return;
        };
        let visible = visible_champions(&catalog.champions, self.filter_bar.selected());
        if let Some(champion) = self.grid.selected(&visible) {
            let url = catalog.image_url(champion);
            if let Err(err) = open::that(&url) {
                log::warn!("Could not open {}: {}", url, err);
            }
        }
    }

    fn header_text(&self, store: &ProgressStore) -> String {
        match self.catalog.get_data() {
            Some(catalog) => format!(
                " {}   (patch {})",
                completion_summary(&catalog.champions, store),
                catalog.version
            ),
            None if self.catalog.error().is_some() => " Champion data unavailable".to_string(),
            None => " Waiting for champion data...".to_string(),
        }
    }

    fn draw(&mut self, frame: &mut Frame, store: &ProgressStore) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.size());

        let header = Paragraph::new(self.header_text(store))
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(ACCENT))
                    .title(TITLE)
                    .title_style(accent_style()),
            );
        frame.render_widget(header, chunks[0]);

        self.filter_bar.render(frame, chunks[1]);

        let info = if self.is_editing() {
            "Tab/↑↓ switch field, ←/→ adjust, Enter confirm, Esc cancel."
        } else {
            "Arrows move, Enter edit, Tab/1-7 filter, o open portrait, q quit."
        };
        let info_paragraph = Paragraph::new(info)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Right);
        frame.render_widget(info_paragraph, chunks[3]);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .padding(Padding::horizontal(1))
            .border_style(Style::default().fg(ACCENT))
            .title_style(accent_style());

        match self.catalog.get_data() {
            Some(catalog) => {
                let visible = visible_champions(&catalog.champions, self.filter_bar.selected());
                block = block.title(format!("Champions ({}/{})", visible.len(), catalog.champions.len()));
                self.grid_columns = GridView::columns_for(block.inner(chunks[2]).width);

                let rc = RenderContext {
                    frame: &mut *frame,
                    area: chunks[2],
                    block,
                };
                self.grid.render(rc, &visible, store);
            }
            None => {
                let rc = RenderContext {
                    frame: &mut *frame,
                    area: chunks[2],
                    block: block.title("Champions"),
                };
                if self.catalog.is_loading() {
                    rc.message("Loading champions...");
                } else {
                    rc.error(self.catalog.error().unwrap_or("Data not available"));
                }
            }
        }

        if let AppState::Editing(editor) = &self.state {
            editor.render(frame);
        }
    }

    fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
        store: &mut ProgressStore,
    ) -> Result<(), ReplError> {
        loop {
            if self.catalog.try_update() {
                self.grid.reset();
            }

            terminal.draw(|f| self.draw(f, store))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    self.handle_key(key.code, store);
                }
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }
}

pub fn run(manager: &DataManager, store: &mut ProgressStore) -> Result<(), ReplError> {
    // Leave raw mode before the default hook prints, otherwise the message is garbled
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let mut out = stdout();
        let _ = disable_raw_mode();
        let _ = execute!(out, LeaveAlternateScreen);
        log::error!("Application panicked: {}", panic_info);
        default_hook(panic_info);
    }));

    let catalog = AsyncData::new(manager.load_catalog());

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(catalog);
    let result = app.run(&mut terminal, store);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
