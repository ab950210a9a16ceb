//! Dialog for composing a guestbook message.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::api::{MAX_CONTENT_LEN, MAX_NICKNAME_LEN};
use crate::form::{Feedback, Field, MessageForm};
use crate::text;

pub fn render(frame: &mut Frame, form: &MessageForm, area: Rect) {
    let dialog_width = 60.min(area.width.saturating_sub(4));
    let dialog_height = 18.min(area.height.saturating_sub(4));

    let x = (area.width - dialog_width) / 2;
    let y = (area.height - dialog_height) / 2;

    let dialog_area = Rect::new(x, y, dialog_width, dialog_height);

    frame.render_widget(Clear, dialog_area);

    let title = if form.submitting {
        " Leave a message (sending...) "
    } else {
        " Leave a message "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title);
    frame.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Nickname
            Constraint::Length(3), // Email
            Constraint::Min(4),    // Content
            Constraint::Length(2), // Feedback
            Constraint::Length(2), // Help
        ])
        .margin(1)
        .split(dialog_area);

    render_field(
        frame,
        "Nickname",
        &form.nickname,
        Some(MAX_NICKNAME_LEN),
        form.focus == Field::Nickname,
        chunks[0],
    );
    render_field(
        frame,
        "Email (optional)",
        &form.email,
        None,
        form.focus == Field::Email,
        chunks[1],
    );
    render_field(
        frame,
        "Message",
        &form.content,
        Some(MAX_CONTENT_LEN),
        form.focus == Field::Content,
        chunks[2],
    );

    if let Some(feedback) = &form.feedback {
        let (style, message) = match feedback {
            Feedback::Success(m) => (Style::default().fg(Color::Green), m),
            Feedback::Warning(m) => (Style::default().fg(Color::Yellow), m),
            Feedback::Error(m) => (Style::default().fg(Color::Red), m),
        };
        frame.render_widget(
            Paragraph::new(message.as_str())
                .style(style)
                .wrap(Wrap { trim: true }),
            chunks[3],
        );
    }

    // Submitting disables the submit affordance; the hint says so.
    let help = if form.submitting {
        "Sending... | Esc=close"
    } else {
        "Tab=next field | Ctrl+Enter=send | Esc=close"
    };
    frame.render_widget(
        Paragraph::new(help)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        chunks[4],
    );
}

fn render_field(
    frame: &mut Frame,
    label: &str,
    value: &str,
    max: Option<usize>,
    focused: bool,
    area: Rect,
) {
    let border_style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let count = value.chars().count();
    let title = match max {
        Some(max) if focused => format!(" {} ({}/{}) ", label, count, max),
        _ => format!(" {} ", label),
    };
    let over_limit = max.is_some_and(|max| count > max);
    let text_style = if over_limit {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };

    let shown = if focused {
        format!("{}_", text::sanitize_line(value))
    } else {
        text::sanitize_line(value)
    };
    let field = Paragraph::new(shown)
        .style(text_style)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        );
    frame.render_widget(field, area);
}
