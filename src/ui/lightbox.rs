//! Fullscreen lightbox for paging through an ordered photo sequence.
//!
//! Two-state machine: closed, or open over a non-empty entry list with a
//! current index that wraps cyclically. The struct is a singleton owned by
//! `App` and reused across opens; `open` replaces the entry set wholesale
//! and `close` empties it. Key events only reach it while it is open (the
//! dispatcher in `app` routes by mode), so no closed-state guards are needed
//! in the handlers themselves.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// One viewable photo: a resolved URL and a display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxEntry {
    pub url: String,
    pub filename: String,
}

/// Lightbox state machine.
#[derive(Debug, Default)]
pub struct Lightbox {
    entries: Vec<LightboxEntry>,
    index: usize,
    open: bool,
}

impl Lightbox {
    /// Open over `entries` starting at `index`. Replaces any previous state.
    /// Opening over an empty sequence stays closed; an out-of-range index is
    /// clamped to the last entry.
    pub fn open(&mut self, entries: Vec<LightboxEntry>, index: usize) {
        if entries.is_empty() {
            self.close();
            return;
        }
        self.index = index.min(entries.len() - 1);
        self.entries = entries;
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.entries.clear();
        self.index = 0;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Advance cyclically. No-op with a single entry.
    pub fn next(&mut self) {
        if self.open && self.entries.len() > 1 {
            self.index = (self.index + 1) % self.entries.len();
        }
    }

    /// Step back cyclically. No-op with a single entry.
    pub fn prev(&mut self) {
        if self.open && self.entries.len() > 1 {
            self.index = (self.index + self.entries.len() - 1) % self.entries.len();
        }
    }

    pub fn current(&self) -> Option<&LightboxEntry> {
        if self.open {
            self.entries.get(self.index)
        } else {
            None
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Render the lightbox overlay. Call only while open.
pub fn render(frame: &mut Frame, lightbox: &Lightbox, area: Rect) {
    let Some(entry) = lightbox.current() else {
        return;
    };

    frame.render_widget(Clear, area);
    let backdrop = Block::default().style(Style::default().bg(Color::Black));
    frame.render_widget(backdrop, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Photo panel
            Constraint::Length(2), // Status + controls
        ])
        .margin(1)
        .split(area);

    let title = format!(" {} ", entry.filename);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title);
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    let body = vec![
        Line::from(""),
        Line::from(Span::styled(
            &*entry.filename,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            &*entry.url,
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let photo = Paragraph::new(body)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(photo, inner);

    let position = format!("{}/{}", lightbox.index() + 1, lightbox.len());
    // Navigation hints are hidden when there is nothing to navigate to.
    let controls = if lightbox.len() > 1 {
        format!(" {} | ←/→:prev/next | Esc:close ", position)
    } else {
        format!(" {} | Esc:close ", position)
    };
    let status = Paragraph::new(controls).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(n: usize) -> Vec<LightboxEntry> {
        (0..n)
            .map(|i| LightboxEntry {
                url: format!("/media/wall-pic/{}.jpg", i),
                filename: format!("{}.jpg", i),
            })
            .collect()
    }

    #[test]
    fn test_next_then_prev_is_identity() {
        let mut lb = Lightbox::default();
        for start in 0..5 {
            lb.open(entries(5), start);
            lb.next();
            lb.prev();
            assert_eq!(lb.index(), start);
            lb.prev();
            lb.next();
            assert_eq!(lb.index(), start);
        }
    }

    #[test]
    fn test_navigation_wraps_cyclically() {
        let mut lb = Lightbox::default();
        lb.open(entries(3), 2);
        lb.next();
        assert_eq!(lb.index(), 0);
        lb.prev();
        assert_eq!(lb.index(), 2);
    }

    #[test]
    fn test_single_entry_navigation_is_noop() {
        let mut lb = Lightbox::default();
        lb.open(entries(1), 0);
        lb.next();
        lb.prev();
        assert_eq!(lb.index(), 0);
        assert!(lb.is_open());
    }

    #[test]
    fn test_open_on_empty_sequence_stays_closed() {
        let mut lb = Lightbox::default();
        lb.open(Vec::new(), 0);
        assert!(!lb.is_open());
        assert!(lb.current().is_none());
    }

    #[test]
    fn test_out_of_range_index_is_clamped() {
        let mut lb = Lightbox::default();
        lb.open(entries(3), 99);
        assert_eq!(lb.index(), 2);
    }

    #[test]
    fn test_open_replaces_previous_state() {
        let mut lb = Lightbox::default();
        lb.open(entries(5), 4);
        lb.open(entries(2), 1);
        assert_eq!(lb.len(), 2);
        assert_eq!(lb.index(), 1);
    }

    #[test]
    fn test_close_empties_state() {
        let mut lb = Lightbox::default();
        lb.open(entries(3), 1);
        lb.close();
        assert!(!lb.is_open());
        assert_eq!(lb.len(), 0);
        // Navigation while closed never touches the index.
        lb.next();
        assert_eq!(lb.index(), 0);
    }
}
