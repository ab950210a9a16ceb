//! Photo catalog view: paged list with a detail pane and category filter.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::LoadState;
use crate::api::{self, Photo};
use crate::app::App;
use crate::text;

/// Photo catalog view state.
#[derive(Debug)]
pub struct PhotosView {
    pub photos: LoadState<Vec<Photo>>,
    pub selected: usize,
    pub skip: usize,
    pub limit: usize,
    /// Index into the filter cycle: 0 is "all", then `api::CATEGORIES`.
    pub filter: usize,
}

impl PhotosView {
    pub fn new(limit: usize) -> Self {
        Self {
            photos: LoadState::Loading,
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

    /// Advance the category filter; resets pagination.
    pub fn cycle_filter(&mut self) {
        self.filter = (self.filter + 1) % (api::CATEGORIES.len() + 1);
        self.skip = 0;
        self.selected = 0;
    }

    /// Move to the next page if the current one was full.
    pub fn next_page(&mut self) -> bool {
        match self.photos.loaded() {
            Some(photos) if photos.len() == self.limit => {
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
        if let Some(photos) = self.photos.loaded() {
            if self.selected + 1 < photos.len() {
                self.selected += 1;
            }
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn current(&self) -> Option<&Photo> {
        self.photos.loaded()?.get(self.selected)
    }
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let view = &app.photos;

    let filter_label = match view.category() {
        Some(category) => api::category_label(category).to_string(),
        None => "All".to_string(),
    };
    let title = format!(
        "Photos [{}] page {}",
        filter_label,
        view.skip / view.limit + 1
    );

    let Some((photos, _)) = super::section_frame(frame, &title, &view.photos, "No photos yet", area)
    else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .margin(1)
        .split(area);

    let items: Vec<ListItem> = photos
        .iter()
        .map(|photo| {
            ListItem::new(Line::from(vec![
                Span::raw(text::truncate(&text::sanitize_line(&photo.title), 30)),
                Span::styled(
                    format!("  {}", api::category_label(&photo.category)),
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
    state.select(Some(view.selected.min(photos.len().saturating_sub(1))));
    frame.render_stateful_widget(list, chunks[0], &mut state);

    render_detail(frame, app, photos, chunks[1]);
}

fn render_detail(frame: &mut Frame, app: &App, photos: &[Photo], area: Rect) {
    let block = Block::default().borders(Borders::LEFT);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(photo) = photos.get(app.photos.selected) else {
        return;
    };

    let url = api::url::resolve_media(&app.config.server.media_url, &photo.file_path);
    let mut lines = vec![
        Line::from(Span::styled(
            text::sanitize_line(&photo.title),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            api::category_label(&photo.category).to_string(),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
    ];
    if let Some(description) = &photo.description {
        lines.push(Line::from(text::sanitize(description)));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        url,
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter: open in lightbox",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photos(n: usize) -> Vec<Photo> {
        (0..n)
            .map(|i| Photo {
                id: i as i64,
                title: format!("photo {}", i),
                file_path: format!("/media/pic/{}.jpg", i),
                description: None,
                category: "travel".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_next_page_requires_full_page() {
        let mut view = PhotosView::new(20);
        view.photos = LoadState::Loaded(photos(20));
        assert!(view.next_page());
        assert_eq!(view.skip, 20);

        // Short page means there is nothing further
        view.photos = LoadState::Loaded(photos(3));
        assert!(!view.next_page());
        assert_eq!(view.skip, 20);
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let view = PhotosView::new(0);
        assert_eq!(view.limit, 1);
    }

    #[test]
    fn test_prev_page_stops_at_zero() {
        let mut view = PhotosView::new(20);
        assert!(!view.prev_page());
        view.skip = 40;
        assert!(view.prev_page());
        assert_eq!(view.skip, 20);
    }

    #[test]
    fn test_filter_cycles_through_all_and_back() {
        let mut view = PhotosView::new(20);
        assert_eq!(view.category(), None);
        view.cycle_filter();
        assert_eq!(view.category(), Some("travel"));
        for _ in 0..api::CATEGORIES.len() {
            view.cycle_filter();
        }
        assert_eq!(view.category(), None);
    }

    #[test]
    fn test_filter_resets_pagination() {
        let mut view = PhotosView::new(20);
        view.skip = 60;
        view.selected = 7;
        view.cycle_filter();
        assert_eq!(view.skip, 0);
        assert_eq!(view.selected, 0);
    }

    #[test]
    fn test_selection_clamped_to_loaded_items() {
        let mut view = PhotosView::new(20);
        view.photos = LoadState::Loaded(photos(2));
        view.select_next();
        view.select_next();
        view.select_next();
        assert_eq!(view.selected, 1);
        view.select_prev();
        view.select_prev();
        assert_eq!(view.selected, 0);
    }
}
