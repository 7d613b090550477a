use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use taskdeck_core::{Status, Task};

use super::app::{AddTaskForm, FormField, Mode, Ui};

const HEADER_HEIGHT: u16 = 4;
const FOOTER_HEIGHT: u16 = 3;
const LANES_MIN_HEIGHT: u16 = 5;

impl Ui {
    pub(super) fn draw(&self, f: &mut Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(LANES_MIN_HEIGHT),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(f.area());

        self.draw_stats_header(f, chunks[0]);
        self.draw_lanes(f, chunks[1]);
        self.draw_footer(f, chunks[2]);

        if let Mode::AddTask(form) = &self.mode {
            draw_add_task_popup(f, form);
        }
    }

    fn draw_stats_header(&self, f: &mut Frame<'_>, area: Rect) {
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        draw_stat_card(f, cards[0], "Total Tasks", &self.stats.total_tasks.to_string());
        draw_stat_card(f, cards[1], "Total Time ETA", &self.stats.total_eta);
    }

    fn draw_lanes(&self, f: &mut Frame<'_>, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        for (index, status) in Status::ALL.into_iter().enumerate() {
            self.draw_lane(f, columns[index], index, status);
        }
    }

    fn draw_lane(&self, f: &mut Frame<'_>, area: Rect, index: usize, status: Status) {
        let tasks = self.board.lane(status);
        let focused = index == self.focused_lane;

        let items: Vec<ListItem<'_>> = if tasks.is_empty() {
            vec![ListItem::new(Line::from(Span::styled(
                "empty",
                Style::default().fg(Color::DarkGray),
            )))]
        } else {
            tasks.iter().map(|task| task_list_item(task)).collect()
        };

        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!("{} ({})", status.label(), tasks.len()))
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        if focused && !tasks.is_empty() {
            state.select(Some(self.selected.min(tasks.len() - 1)));
        }
        f.render_stateful_widget(list, area, &mut state);
    }

    fn draw_footer(&self, f: &mut Frame<'_>, area: Rect) {
        let line = self.message.as_ref().map_or_else(
            || {
                Line::from(Span::styled(
                    "q quit | a add | ←/→ lane | ↑/↓ select | [/] move task | 1/2/3 drop on lane",
                    Style::default().fg(Color::DarkGray),
                ))
            },
            |message| Line::from(Span::styled(message.text.clone(), message.style())),
        );
        let footer = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        f.render_widget(footer, area);
    }

}

fn draw_add_task_popup(f: &mut Frame<'_>, form: &AddTaskForm) {
    let popup_area = centered_rect(f.area(), 50, 9);

    let block = Block::default()
        .title("Add Task")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    f.render_widget(Clear, popup_area);
    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(inner);

    draw_form_field(f, rows[0], "Task title", &form.title, form.focus == FormField::Title);
    draw_form_field(
        f,
        rows[1],
        "ETA (e.g., 4:30 or 30)",
        &form.eta,
        form.focus == FormField::Eta,
    );

    let hint = Paragraph::new(Line::from(Span::styled(
        "Enter add | Tab switch field | Esc cancel",
        Style::default().fg(Color::DarkGray),
    )));
    f.render_widget(hint, rows[2]);
}

fn task_list_item(task: &Task) -> ListItem<'_> {
    let title = Span::styled(&task.title, Style::default().add_modifier(Modifier::BOLD));
    let eta = Span::styled(
        format!("ETA: {}", task.eta),
        Style::default().fg(Color::DarkGray),
    );
    ListItem::new(vec![Line::from(title), Line::from(eta)])
}

fn draw_stat_card(f: &mut Frame<'_>, area: Rect, title: &str, value: &str) {
    let card = Paragraph::new(Line::from(Span::styled(
        value.to_owned(),
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().title(title.to_owned()).borders(Borders::ALL));
    f.render_widget(card, area);
}

fn draw_form_field(f: &mut Frame<'_>, area: Rect, label: &str, value: &str, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let mut spans = vec![Span::raw(value.to_owned())];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
    }
    let field = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(label.to_owned())
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(field, area);
}

pub(super) fn centered_rect(area: Rect, width_percent: u16, height: u16) -> Rect {
    // Widen before multiplying; the product can exceed u16 on wide terminals.
    let scaled = u32::from(area.width) * u32::from(width_percent) / 100;
    let width = u16::try_from(scaled).unwrap_or(area.width);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width,
        height: height.min(area.height),
    }
}
