use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::style::{Color, Style};
use unicode_segmentation::UnicodeSegmentation;

use taskdeck_app::{Board, BoardStats};
use taskdeck_core::{Status, TaskId};

use super::MESSAGE_TTL_SECS;

/// Which add-form field currently receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) enum FormField {
    /// Task title field.
    #[default]
    Title,
    /// ETA field.
    Eta,
}

/// Inline form collecting a new task's fields.
///
/// The view only gathers text; validation happens in the board when the
/// form is submitted.
#[derive(Debug, Default)]
pub(super) struct AddTaskForm {
    pub(super) title: String,
    pub(super) eta: String,
    pub(super) focus: FormField,
}

impl AddTaskForm {
    fn input(&mut self, c: char) {
        match self.focus {
            FormField::Title => self.title.push(c),
            FormField::Eta => self.eta.push(c),
        }
    }

    fn backspace(&mut self) {
        let field = match self.focus {
            FormField::Title => &mut self.title,
            FormField::Eta => &mut self.eta,
        };
        pop_grapheme(field);
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Eta,
            FormField::Eta => FormField::Title,
        };
    }
}

fn pop_grapheme(text: &mut String) {
    if let Some((idx, _)) = text.grapheme_indices(true).next_back() {
        text.truncate(idx);
    }
}

/// Interaction mode of the board view.
#[derive(Debug)]
pub(super) enum Mode {
    /// Browsing lanes and moving tasks.
    Browse,
    /// Collecting a new task in the popup form.
    AddTask(AddTaskForm),
}

/// View state shared between the event loop and rendering.
pub(super) struct Ui {
    pub(super) board: Board,
    /// Index into [`Status::ALL`] of the focused lane.
    pub(super) focused_lane: usize,
    /// Selected row within the focused lane.
    pub(super) selected: usize,
    pub(super) mode: Mode,
    /// Cached header statistics, refreshed after every mutation.
    pub(super) stats: BoardStats,
    pub(super) message: Option<Message>,
    pub(super) should_quit: bool,
}

impl Ui {
    pub(super) fn new(board: Board) -> Self {
        let mut ui = Self {
            board,
            focused_lane: 0,
            selected: 0,
            mode: Mode::Browse,
            stats: BoardStats::empty(),
            message: None,
            should_quit: false,
        };
        ui.refresh_stats();
        ui
    }

    pub(super) fn focused_status(&self) -> Status {
        Status::ALL[self.focused_lane]
    }

    pub(super) fn selected_task_id(&self) -> Option<TaskId> {
        self.board
            .lane(self.focused_status())
            .get(self.selected)
            .map(|task| task.id)
    }

    pub(super) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        match self.mode {
            Mode::Browse => self.handle_browse_key(key),
            Mode::AddTask(_) => self.handle_form_key(key),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('a') => self.mode = Mode::AddTask(AddTaskForm::default()),
            KeyCode::Left | KeyCode::Char('h') => self.focus_lane_left(),
            KeyCode::Right | KeyCode::Char('l') => self.focus_lane_right(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Char('[' | 'H') => self.move_selected_left(),
            KeyCode::Char(']' | 'L') => self.move_selected_right(),
            KeyCode::Char('1') => self.drop_selected_on(0),
            KeyCode::Char('2') => self.drop_selected_on(1),
            KeyCode::Char('3') => self.drop_selected_on(2),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.mode = Mode::Browse,
            KeyCode::Enter => self.submit_form(),
            KeyCode::Tab | KeyCode::BackTab => {
                if let Mode::AddTask(form) = &mut self.mode {
                    form.toggle_focus();
                }
            }
            KeyCode::Backspace => {
                if let Mode::AddTask(form) = &mut self.mode {
                    form.backspace();
                }
            }
            KeyCode::Char(c) => {
                if let Mode::AddTask(form) = &mut self.mode {
                    form.input(c);
                }
            }
            _ => {}
        }
    }

    fn submit_form(&mut self) {
        let Mode::AddTask(form) = &self.mode else {
            return;
        };
        match self.board.add_task(&form.title, &form.eta) {
            Ok(task) => {
                self.mode = Mode::Browse;
                // New tasks always land at the end of To Do.
                self.focused_lane = 0;
                self.selected = self
                    .board
                    .lane(Status::ToDo)
                    .iter()
                    .position(|candidate| candidate.id == task.id)
                    .unwrap_or(0);
                self.refresh_stats();
                self.info(format!("added \"{}\" ({})", task.title, task.eta));
            }
            Err(err) => self.error(err.to_string()),
        }
    }

    fn focus_lane_left(&mut self) {
        if let Some(lane) = self.focused_lane.checked_sub(1) {
            self.focused_lane = lane;
            self.clamp_selection();
        }
    }

    fn focus_lane_right(&mut self) {
        if self.focused_lane + 1 < Status::ALL.len() {
            self.focused_lane += 1;
            self.clamp_selection();
        }
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn select_next(&mut self) {
        let len = self.board.lane(self.focused_status()).len();
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.board.lane(self.focused_status()).len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    fn move_selected_left(&mut self) {
        if let Some(target) = self.focused_lane.checked_sub(1) {
            self.drop_selected_on(target);
        }
    }

    fn move_selected_right(&mut self) {
        let target = self.focused_lane + 1;
        if target < Status::ALL.len() {
            self.drop_selected_on(target);
        }
    }

    /// Resolve the selected task onto a drop lane, following it there.
    fn drop_selected_on(&mut self, lane: usize) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        let status = Status::ALL[lane];
        match self.board.drop_on_lane(id, status.label()) {
            Ok(()) => {
                self.focused_lane = lane;
                self.selected = self
                    .board
                    .lane(status)
                    .iter()
                    .position(|task| task.id == id)
                    .unwrap_or(0);
                self.refresh_stats();
                let moved = self
                    .board
                    .get(id)
                    .map(|task| format!("moved \"{}\" to {}", task.title, status.label()));
                if let Some(text) = moved {
                    self.info(text);
                }
            }
            Err(err) => self.error(err.to_string()),
        }
    }

    fn refresh_stats(&mut self) {
        match self.board.stats() {
            Ok(stats) => self.stats = stats,
            Err(err) => self.error(format!("statistics unavailable: {err}")),
        }
    }

    pub(super) fn info(&mut self, message: impl Into<String>) {
        self.message = Some(Message::info(message));
    }

    pub(super) fn error(&mut self, message: impl Into<String>) {
        self.message = Some(Message::error(message));
    }

    pub(super) fn tick(&mut self) {
        if let Some(msg) = &self.message
            && msg.is_expired(Duration::from_secs(MESSAGE_TTL_SECS))
        {
            self.message = None;
        }
    }
}

/// Transient status line shown in the footer.
pub(super) struct Message {
    pub(super) text: String,
    level: MessageLevel,
    created_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MessageLevel {
    Info,
    Error,
}

impl Message {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Info,
            created_at: Instant::now(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Error,
            created_at: Instant::now(),
        }
    }

    pub(super) fn style(&self) -> Style {
        match self.level {
            MessageLevel::Info => Style::default().fg(Color::Green),
            MessageLevel::Error => Style::default().fg(Color::Red),
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() >= ttl
    }
}
