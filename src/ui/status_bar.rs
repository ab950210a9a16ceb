//! Bottom status bar: page tabs, key hints, transient status message.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::{App, Page};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for (i, page) in Page::ALL.iter().enumerate() {
        let style = if *page == app.page {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {}:{} ", i + 1, page.title()), style));
    }

    if let Some(message) = &app.status_message {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    } else {
        let hints = match app.page {
            Page::Home => "  ←/→:wall Enter:lightbox r:reload ?:help q:quit",
            Page::Photos | Page::Videos => {
                "  j/k:select f:filter n/p:page Enter:lightbox r:reload q:quit"
            }
            Page::Timeline => "  j/k:select f:featured r:reload q:quit",
            Page::Messages => "  c:compose n/p:page r:reload q:quit",
        };
        spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
