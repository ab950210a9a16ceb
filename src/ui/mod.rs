pub mod help;
pub mod home;
pub mod lightbox;
pub mod message_form;
pub mod messages;
pub mod photos;
pub mod status_bar;
pub mod timeline;
pub mod videos;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, AppMode, Page};

/// Load state of one view's data.
///
/// A failed fetch replaces the loading indicator with its message; it never
/// leaves the indicator stuck or the previous payload half-rendered.
#[derive(Debug, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Main layout: page body + status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    match app.page {
        Page::Home => home::render(frame, app, chunks[0]),
        Page::Photos => photos::render(frame, app, chunks[0]),
        Page::Videos => videos::render(frame, app, chunks[0]),
        Page::Timeline => timeline::render(frame, app, chunks[0]),
        Page::Messages => messages::render(frame, app, chunks[0]),
    }

    status_bar::render(frame, app, chunks[1]);

    // Overlays
    match app.mode {
        AppMode::Lightbox => lightbox::render(frame, &app.lightbox, area),
        AppMode::Compose => message_form::render(frame, &app.form, area),
        AppMode::Help => help::render(frame, area),
        AppMode::Browse => {}
    }
}

/// Render a titled section whose data is loading, failed, or empty.
/// Returns the inner area when there is content to draw into.
pub fn section_frame<'a, T>(
    frame: &mut Frame,
    title: &str,
    state: &'a LoadState<Vec<T>>,
    empty_label: &str,
    area: Rect,
) -> Option<(&'a [T], Rect)> {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match state {
        LoadState::Loading => {
            frame.render_widget(placeholder("Loading..."), inner);
            None
        }
        LoadState::Failed(message) => {
            frame.render_widget(
                Paragraph::new(message.as_str())
                    .style(Style::default().fg(Color::Red))
                    .alignment(Alignment::Center),
                inner,
            );
            None
        }
        LoadState::Loaded(items) if items.is_empty() => {
            frame.render_widget(placeholder(empty_label), inner);
            None
        }
        LoadState::Loaded(items) => Some((items.as_slice(), inner)),
    }
}

pub fn placeholder(label: &str) -> Paragraph<'_> {
    Paragraph::new(label)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn draw(state: &LoadState<Vec<u8>>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();
        terminal
            .draw(|frame| {
                section_frame(frame, "Things", state, "Nothing here yet", frame.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_section_frame_shows_loading_indicator() {
        assert!(draw(&LoadState::Loading).contains("Loading..."));
    }

    #[test]
    fn test_section_frame_shows_failure_message() {
        let screen = draw(&LoadState::Failed("connection refused".to_string()));
        assert!(screen.contains("connection refused"));
        assert!(!screen.contains("Loading"));
    }

    #[test]
    fn test_section_frame_shows_empty_placeholder() {
        assert!(draw(&LoadState::Loaded(vec![])).contains("Nothing here yet"));
    }

    #[test]
    fn test_section_frame_yields_items_when_loaded() {
        let state = LoadState::Loaded(vec![1u8, 2]);
        let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();
        terminal
            .draw(|frame| {
                let result =
                    section_frame(frame, "Things", &state, "Nothing here yet", frame.area());
                let (items, inner) = result.unwrap();
                assert_eq!(items.len(), 2);
                assert!(inner.width < frame.area().width);
            })
            .unwrap();
    }
}
