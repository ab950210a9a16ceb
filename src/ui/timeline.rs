//! Timeline view: chronological event list with a featured-only filter.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::LoadState;
use crate::api::{self, TimelineEvent};
use crate::app::App;
use crate::{text, timefmt};

#[derive(Debug)]
pub struct TimelineView {
    pub events: LoadState<Vec<TimelineEvent>>,
    pub selected: usize,
    pub featured_only: bool,
}

impl TimelineView {
    pub fn new() -> Self {
        Self {
            events: LoadState::Loading,
            selected: 0,
            featured_only: false,
        }
    }

    pub fn toggle_featured(&mut self) {
        self.featured_only = !self.featured_only;
        self.selected = 0;
    }

    pub fn select_next(&mut self) {
        if let Some(events) = self.events.loaded() {
            if self.selected + 1 < events.len() {
                self.selected += 1;
            }
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

impl Default for TimelineView {
    fn default() -> Self {
        Self::new()
    }
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let view = &app.timeline;
    let title = if view.featured_only {
        "Timeline [featured]"
    } else {
        "Timeline [all]"
    };

    let Some((events, _)) = super::section_frame(frame, title, &view.events, "No events yet", area)
    else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .margin(1)
        .split(area);

    let items: Vec<ListItem> = events
        .iter()
        .map(|event| {
            let star = if event.is_featured { "★ " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<9}", timefmt::absolute_date(&event.event_date)),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(star, Style::default().fg(Color::Yellow)),
                Span::raw(text::truncate(&text::sanitize_line(&event.title), 28)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ");
    let mut state = ListState::default();
    state.select(Some(view.selected.min(events.len().saturating_sub(1))));
    frame.render_stateful_widget(list, chunks[0], &mut state);

    render_detail(frame, app, events, chunks[1]);
}

fn render_detail(frame: &mut Frame, app: &App, events: &[TimelineEvent], area: Rect) {
    let block = Block::default().borders(Borders::LEFT);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(event) = events.get(app.timeline.selected) else {
        return;
    };

    let mut subtitle = timefmt::absolute_date(&event.event_date);
    if let Some(location) = &event.location {
        subtitle.push_str(" · ");
        subtitle.push_str(&text::sanitize_line(location));
    }

    let mut lines = vec![
        Line::from(Span::styled(
            text::sanitize_line(&event.title),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, Style::default().fg(Color::Green))),
        Line::from(Span::styled(
            api::event_type_label(&event.event_type).to_string(),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(text::sanitize(&event.description)),
    ];
    if let Some(image) = &event.image {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            api::url::resolve_media(&app.config.server.media_url, image),
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_toggle_resets_selection() {
        let mut view = TimelineView::new();
        view.selected = 4;
        view.toggle_featured();
        assert!(view.featured_only);
        assert_eq!(view.selected, 0);
        view.toggle_featured();
        assert!(!view.featured_only);
    }

    #[test]
    fn test_selection_noop_while_loading() {
        let mut view = TimelineView::new();
        view.select_next();
        assert_eq!(view.selected, 0);
    }
}
