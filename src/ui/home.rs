//! Home view: hero image, featured photos/videos/events, wall photo strip.
//!
//! Each section loads independently and fails independently to its own
//! placeholder; one broken endpoint never blanks the rest of the page.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::LoadState;
use crate::api::{Photo, TimelineEvent, Video, WallPhoto};
use crate::app::App;
use crate::{text, timefmt};

/// Featured photo/video/event counts shown on the home page.
const FEATURED_PHOTOS: usize = 6;
const FEATURED_VIDEOS: usize = 3;
const FEATURED_EVENTS: usize = 5;

#[derive(Debug)]
pub struct HomeView {
    pub hero: LoadState<String>,
    pub featured_photos: LoadState<Vec<Photo>>,
    pub featured_videos: LoadState<Vec<Video>>,
    pub featured_events: LoadState<Vec<TimelineEvent>>,
    pub wall: LoadState<Vec<WallPhoto>>,
    pub wall_selected: usize,
}

impl HomeView {
    pub fn new() -> Self {
        Self {
            hero: LoadState::Loading,
            featured_photos: LoadState::Loading,
            featured_videos: LoadState::Loading,
            featured_events: LoadState::Loading,
            wall: LoadState::Loading,
            wall_selected: 0,
        }
    }

    pub fn wall_next(&mut self) {
        if let Some(wall) = self.wall.loaded() {
            if self.wall_selected + 1 < wall.len() {
                self.wall_selected += 1;
            }
        }
    }

    pub fn wall_prev(&mut self) {
        self.wall_selected = self.wall_selected.saturating_sub(1);
    }
}

impl Default for HomeView {
    fn default() -> Self {
        Self::new()
    }
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let view = &app.home;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Hero
            Constraint::Min(6),    // Featured photos | videos
            Constraint::Length(7), // Featured events
            Constraint::Length(3), // Wall photo strip
        ])
        .split(area);

    render_hero(frame, view, chunks[0]);

    let featured = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_featured_photos(frame, view, featured[0]);
    render_featured_videos(frame, view, featured[1]);
    render_featured_events(frame, view, chunks[2]);
    render_wall_strip(frame, view, chunks[3]);
}

fn render_hero(frame: &mut Frame, view: &HomeView, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Souvenir ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = match &view.hero {
        LoadState::Loading => Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Color::DarkGray),
        )),
        // A missing hero is cosmetic; keep the banner rather than an error.
        LoadState::Failed(_) => Line::from(Span::styled(
            "A quiet corner for photos, films and guestbook notes",
            Style::default().fg(Color::DarkGray),
        )),
        LoadState::Loaded(url) => Line::from(vec![
            Span::styled("Today's hero: ", Style::default().fg(Color::Cyan)),
            Span::styled(url.as_str(), Style::default().fg(Color::DarkGray)),
        ]),
    };
    frame.render_widget(Paragraph::new(line), inner);
}

fn render_featured_photos(frame: &mut Frame, view: &HomeView, area: Rect) {
    let Some((photos, inner)) = super::section_frame(
        frame,
        "Featured photos",
        &view.featured_photos,
        "No photos yet",
        area,
    ) else {
        return;
    };

    let lines: Vec<Line> = photos
        .iter()
        .take(FEATURED_PHOTOS)
        .map(|photo| {
            Line::from(vec![
                Span::raw("· "),
                Span::raw(text::truncate(&text::sanitize_line(&photo.title), 32)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_featured_videos(frame: &mut Frame, view: &HomeView, area: Rect) {
    let Some((videos, inner)) = super::section_frame(
        frame,
        "Featured videos",
        &view.featured_videos,
        "No videos yet",
        area,
    ) else {
        return;
    };

    let lines: Vec<Line> = videos
        .iter()
        .take(FEATURED_VIDEOS)
        .map(|video| {
            Line::from(vec![
                Span::raw("▶ "),
                Span::raw(text::truncate(&text::sanitize_line(&video.title), 32)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_featured_events(frame: &mut Frame, view: &HomeView, area: Rect) {
    let Some((events, inner)) = super::section_frame(
        frame,
        "Featured moments",
        &view.featured_events,
        "No events yet",
        area,
    ) else {
        return;
    };

    let lines: Vec<Line> = events
        .iter()
        .take(FEATURED_EVENTS)
        .map(|event| {
            Line::from(vec![
                Span::styled(
                    format!("{:<9}", timefmt::absolute_date(&event.event_date)),
                    Style::default().fg(Color::Green),
                ),
                Span::raw(text::truncate(&text::sanitize_line(&event.title), 40)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_wall_strip(frame: &mut Frame, view: &HomeView, area: Rect) {
    let Some((wall, inner)) =
        super::section_frame(frame, "Photo wall", &view.wall, "No wall photos", area)
    else {
        return;
    };

    let selected = view.wall_selected.min(wall.len() - 1);
    let mut spans = vec![Span::styled(
        format!("{}/{}  ", selected + 1, wall.len()),
        Style::default().fg(Color::DarkGray),
    )];
    for (i, photo) in wall.iter().enumerate() {
        let style = if i == selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(
            format!("{} ", text::truncate(&photo.filename, 18)),
            style,
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall(n: usize) -> Vec<WallPhoto> {
        (0..n)
            .map(|i| WallPhoto {
                url: format!("/media/wall-pic/{}.jpg", i),
                filename: format!("{}.jpg", i),
            })
            .collect()
    }

    #[test]
    fn test_wall_selection_saturates_at_edges() {
        let mut view = HomeView::new();
        view.wall = LoadState::Loaded(wall(3));
        view.wall_prev();
        assert_eq!(view.wall_selected, 0);
        view.wall_next();
        view.wall_next();
        view.wall_next();
        assert_eq!(view.wall_selected, 2);
    }

    #[test]
    fn test_wall_selection_noop_before_load() {
        let mut view = HomeView::new();
        view.wall_next();
        assert_eq!(view.wall_selected, 0);
    }
}
