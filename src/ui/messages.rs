//! Guestbook view: stats line and the sticky-note message wall.

use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::LoadState;
use crate::api::{Message, MessageStats};
use crate::app::App;
use crate::wall::{self, NoteGeometry};
use crate::{text, timefmt};

const NOTE_COLORS: &[Color] = &[
    Color::Yellow,
    Color::Cyan,
    Color::Green,
    Color::Magenta,
    Color::Blue,
];

#[derive(Debug)]
pub struct MessagesView {
    pub messages: LoadState<Vec<Message>>,
    pub stats: Option<MessageStats>,
    pub skip: usize,
    pub limit: usize,
    /// Seed for the note layout. Fixed per load so notes do not jump between
    /// frames, renewed on each fetch so every visit looks hand-placed anew.
    pub wall_seed: u64,
}

impl MessagesView {
    pub fn new(limit: usize) -> Self {
        Self {
            messages: LoadState::Loading,
            stats: None,
            skip: 0,
            // A zero page size from config would break the page math
            limit: limit.max(1),
            wall_seed: 0,
        }
    }

    pub fn next_page(&mut self) -> bool {
        match self.messages.loaded() {
            Some(messages) if messages.len() == self.limit => {
                self.skip += self.limit;
                true
            }
            _ => false,
        }
    }

    pub fn prev_page(&mut self) -> bool {
        if self.skip > 0 {
            self.skip = self.skip.saturating_sub(self.limit);
            true
        } else {
            false
        }
    }
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let view = &app.messages;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(4)])
        .split(area);

    render_stats(frame, view, chunks[0]);

    let title = format!("Guestbook page {}", view.skip / view.limit + 1);
    let Some((messages, inner)) =
        super::section_frame(frame, &title, &view.messages, "No messages yet", chunks[1])
    else {
        return;
    };

    let geometry = NoteGeometry {
        cell_width: app.config.ui.note_width,
        cell_height: app.config.ui.note_height,
        gap: app.config.ui.note_gap,
    };
    let mut rng = StdRng::seed_from_u64(view.wall_seed);
    let positions = wall::layout(messages.len(), inner, geometry, &mut rng);

    for (message, rect) in messages.iter().zip(positions) {
        render_note(frame, message, rect);
    }
}

fn render_stats(frame: &mut Frame, view: &MessagesView, area: Rect) {
    let line = match view.stats {
        Some(stats) => format!(
            " {} approved · {} pending · {} total",
            stats.approved_messages, stats.pending_messages, stats.total_messages
        ),
        None => " stats unavailable".to_string(),
    };
    frame.render_widget(
        Paragraph::new(line).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn render_note(frame: &mut Frame, message: &Message, area: Rect) {
    let color = NOTE_COLORS[(message.id.unsigned_abs() as usize) % NOTE_COLORS.len()];

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(format!(" {} ", text::truncate(&text::sanitize_line(&message.nickname), 16)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let body = vec![
        Line::from(text::truncate(&text::sanitize_line(&message.content), 120)),
        Line::from(Span::styled(
            timefmt::relative(&message.created_at),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(body).wrap(Wrap { trim: true }), inner);
}
