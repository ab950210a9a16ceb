//! Video catalog view, same shape as the photos view.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::LoadState;
use crate::api::{self, Video};
use crate::app::App;
use crate::text;

#[derive(Debug)]
pub struct VideosView {
    pub videos: LoadState<Vec<Video>>,
    pub selected: usize,
    pub skip: usize,
    pub limit: usize,
    pub filter: usize,
}

impl VideosView {
    pub fn new(limit: usize) -> Self {
        Self {
            videos: LoadState::Loading,
            selected: 0,
            skip: 0,
            // A zero page size from config would break the page math
            limit: limit.max(1),
            filter: 0,
        }
    }

    pub fn category(&self) -> Option<&'static str> {
        if self.filter == 0 {
            None
        } else {
            api::CATEGORIES.get(self.filter - 1).copied()
        }
    }

    pub fn cycle_filter(&mut self) {
        self.filter = (self.filter + 1) % (api::CATEGORIES.len() + 1);
        self.skip = 0;
        self.selected = 0;
    }

    pub fn next_page(&mut self) -> bool {
        match self.videos.loaded() {
            Some(videos) if videos.len() == self.limit => {
                self.skip += self.limit;
                self.selected = 0;
                true
            }
            _ => false,
        }
    }

    pub fn prev_page(&mut self) -> bool {
        if self.skip > 0 {
            self.skip = self.skip.saturating_sub(self.limit);
            self.selected = 0;
            true
        } else {
            false
        }
    }

    pub fn select_next(&mut self) {
        if let Some(videos) = self.videos.loaded() {
            if self.selected + 1 < videos.len() {
                self.selected += 1;
            }
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let view = &app.videos;

    let filter_label = match view.category() {
        Some(category) => api::category_label(category).to_string(),
        None => "All".to_string(),
    };
    let title = format!(
        "Videos [{}] page {}",
        filter_label,
        view.skip / view.limit + 1
    );

    let Some((videos, _)) = super::section_frame(frame, &title, &view.videos, "No videos yet", area)
    else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .margin(1)
        .split(area);

    let items: Vec<ListItem> = videos
        .iter()
        .map(|video| {
            let marker = if video.embed_link.is_some() { "▶ " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::raw(text::truncate(&text::sanitize_line(&video.title), 28)),
                Span::styled(
                    format!("  {}", api::category_label(&video.category)),
                    Style::default().fg(Color::DarkGray),
                ),
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
    state.select(Some(view.selected.min(videos.len().saturating_sub(1))));
    frame.render_stateful_widget(list, chunks[0], &mut state);

    render_detail(frame, app, videos, chunks[1]);
}

fn render_detail(frame: &mut Frame, app: &App, videos: &[Video], area: Rect) {
    let block = Block::default().borders(Borders::LEFT);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(video) = videos.get(app.videos.selected) else {
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            text::sanitize_line(&video.title),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            api::category_label(&video.category).to_string(),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
    ];
    if let Some(description) = &video.description {
        lines.push(Line::from(text::sanitize(description)));
        lines.push(Line::from(""));
    }
    if let Some(thumbnail) = &video.thumbnail {
        lines.push(Line::from(Span::styled(
            api::url::resolve_media(&app.config.server.media_url, thumbnail),
            Style::default().fg(Color::DarkGray),
        )));
    }
    if let Some(embed) = &video.embed_link {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Watch: ", Style::default().fg(Color::Green)),
            Span::raw(text::sanitize_line(embed)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
