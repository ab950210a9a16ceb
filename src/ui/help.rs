//! Help overlay.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

pub fn render(frame: &mut Frame, area: Rect) {
    let dialog_width = 52.min(area.width.saturating_sub(4));
    let dialog_height = 18.min(area.height.saturating_sub(4));

    let x = (area.width - dialog_width) / 2;
    let y = (area.height - dialog_height) / 2;

    let dialog_area = Rect::new(x, y, dialog_width, dialog_height);

    frame.render_widget(Clear, dialog_area);

    let help_text = vec![
        Line::from(Span::styled(
            "Souvenir",
            Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from("  1-5 / Tab      Switch page"),
        Line::from("  j/k, ↓/↑       Move selection"),
        Line::from("  ←/→            Move along the photo wall"),
        Line::from("  Enter          Open lightbox"),
        Line::from("  f              Cycle category / featured filter"),
        Line::from("  n / p          Next / previous page of results"),
        Line::from("  c              Compose a guestbook message"),
        Line::from("  r              Reload current page"),
        Line::from(""),
        Line::from("  In the lightbox: ←/→ navigate, Esc closes"),
        Line::from(""),
        Line::from("  Esc/q          Quit"),
        Line::from("  ?              Toggle this help"),
    ];

    let paragraph = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Help "),
    );

    frame.render_widget(paragraph, dialog_area);
}
