use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use std::time::Duration;

use crate::api::{self, ApiClient};
use crate::config::Config;
use crate::fetch::{FetchPool, FetchResult};
use crate::form::{self, Feedback, MessageForm};
use crate::ui;
use crate::ui::home::HomeView;
use crate::ui::lightbox::{Lightbox, LightboxEntry};
use crate::ui::messages::MessagesView;
use crate::ui::photos::PhotosView;
use crate::ui::timeline::TimelineView;
use crate::ui::videos::VideosView;
use crate::ui::LoadState;

/// The fixed set of navigable pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Photos,
    Videos,
    Timeline,
    Messages,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Photos,
        Page::Videos,
        Page::Timeline,
        Page::Messages,
    ];

    /// Look up a page by its wire name. Unknown names are `None`, never an
    /// error: callers show nothing additional and trigger no load.
    pub fn from_name(name: &str) -> Option<Page> {
        match name {
            "home" => Some(Page::Home),
            "photos" => Some(Page::Photos),
            "videos" => Some(Page::Videos),
            "timeline" => Some(Page::Timeline),
            "messages" => Some(Page::Messages),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Photos => "Photos",
            Page::Videos => "Videos",
            Page::Timeline => "Timeline",
            Page::Messages => "Messages",
        }
    }

    fn next(self) -> Page {
        let i = Page::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Page::ALL[(i + 1) % Page::ALL.len()]
    }

    fn prev(self) -> Page {
        let i = Page::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Page::ALL[(i + Page::ALL.len() - 1) % Page::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Browse,
    Lightbox,
    Compose,
    Help,
}

pub struct App {
    pub config: Config,
    client: ApiClient,
    pool: FetchPool,
    pub page: Page,
    pub mode: AppMode,
    pub home: HomeView,
    pub photos: PhotosView,
    pub videos: VideosView,
    pub timeline: TimelineView,
    pub messages: MessagesView,
    pub lightbox: Lightbox,
    pub form: MessageForm,
    /// Transient status-bar notice, cleared on the next page switch.
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let client = ApiClient::new(&config.server.api_url);
        let page_size = config.ui.page_size;
        let mut app = Self {
            client,
            pool: FetchPool::new(),
            page: Page::Home,
            mode: AppMode::Browse,
            home: HomeView::new(),
            photos: PhotosView::new(page_size),
            videos: VideosView::new(page_size),
            timeline: TimelineView::new(),
            messages: MessagesView::new(page_size),
            lightbox: Lightbox::default(),
            form: MessageForm::default(),
            status_message: None,
            should_quit: false,
            config,
        };
        app.show_page(Page::Home);
        Ok(app)
    }

    pub async fn run(
        &mut self,
        terminal: &mut Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        while !self.should_quit {
            for result in self.pool.poll() {
                self.apply(result);
            }

            terminal.draw(|frame| ui::render(frame, self))?;

            if event::poll(Duration::from_millis(100))? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Switch to `page` and trigger its data load. Called on every
    /// navigation, so revisiting a page refetches it.
    pub fn show_page(&mut self, page: Page) {
        self.page = page;
        self.status_message = None;
        match page {
            Page::Home => self.load_home(),
            Page::Photos => self.load_photos(),
            Page::Videos => self.load_videos(),
            Page::Timeline => self.load_timeline(),
            Page::Messages => self.load_messages(),
        }
    }

    /// Switch by wire name; unknown names do nothing.
    pub fn show_page_named(&mut self, name: &str) {
        if let Some(page) = Page::from_name(name) {
            self.show_page(page);
        }
    }

    fn load_home(&mut self) {
        self.home.hero = LoadState::Loading;
        self.home.featured_photos = LoadState::Loading;
        self.home.featured_videos = LoadState::Loading;
        self.home.featured_events = LoadState::Loading;
        self.home.wall = LoadState::Loading;
        self.home.wall_selected = 0;

        let client = self.client.clone();
        self.pool
            .spawn(move || FetchResult::Hero(client.get_random_hero().map(|h| h.image_url)));
        let client = self.client.clone();
        self.pool
            .spawn(move || FetchResult::Featured(client.get_featured()));
        let client = self.client.clone();
        self.pool
            .spawn(move || FetchResult::FeaturedEvents(client.get_featured_events().map(|f| f.events)));
        let client = self.client.clone();
        self.pool
            .spawn(move || FetchResult::WallPhotos(client.get_wall_photos().map(|w| w.photos)));
    }

    fn load_photos(&mut self) {
        self.photos.photos = LoadState::Loading;
        let client = self.client.clone();
        let (skip, limit) = (self.photos.skip, self.photos.limit);
        let category = self.photos.category();
        self.pool
            .spawn(move || FetchResult::Photos(client.get_photos(skip, limit, category)));
    }

    fn load_videos(&mut self) {
        self.videos.videos = LoadState::Loading;
        let client = self.client.clone();
        let (skip, limit) = (self.videos.skip, self.videos.limit);
        let category = self.videos.category();
        self.pool
            .spawn(move || FetchResult::Videos(client.get_videos(skip, limit, category)));
    }

    fn load_timeline(&mut self) {
        self.timeline.events = LoadState::Loading;
        let client = self.client.clone();
        let featured_only = self.timeline.featured_only;
        self.pool
            .spawn(move || FetchResult::Timeline(client.get_timeline_events(featured_only)));
    }

    fn load_messages(&mut self) {
        self.messages.messages = LoadState::Loading;
        let client = self.client.clone();
        let (skip, limit) = (self.messages.skip, self.messages.limit);
        self.pool
            .spawn(move || FetchResult::Messages(client.get_messages(skip, limit)));
        self.load_message_stats();
    }

    /// Stats are decorative: a failed refresh is logged and the previous
    /// value stays on screen.
    fn load_message_stats(&mut self) {
        let client = self.client.clone();
        self.pool
            .spawn(move || FetchResult::MessageStats(client.get_message_stats()));
    }

    /// Apply one completed fetch to its view state. Results are applied even
    /// when their page is no longer the visible one; the state exists either
    /// way and the next visit shows fresh data.
    fn apply(&mut self, result: FetchResult) {
        match result {
            FetchResult::Hero(result) => {
                self.home.hero = match result {
                    Ok(path) => LoadState::Loaded(api::url::resolve_media(
                        &self.config.server.media_url,
                        &path,
                    )),
                    Err(e) => {
                        tracing::warn!("hero image load failed: {}", e);
                        LoadState::Failed(e.to_string())
                    }
                };
            }
            FetchResult::Featured(result) => match result {
                Ok(featured) => {
                    self.home.featured_photos = LoadState::Loaded(featured.photos);
                    self.home.featured_videos = LoadState::Loaded(featured.videos);
                }
                Err(e) => {
                    tracing::warn!("featured content load failed: {}", e);
                    self.status_message = Some("Failed to load featured content".to_string());
                    self.home.featured_photos = LoadState::Failed(e.to_string());
                    self.home.featured_videos = LoadState::Failed(e.to_string());
                }
            },
            FetchResult::FeaturedEvents(result) => {
                self.home.featured_events =
                    into_state(result, "featured events", &mut self.status_message);
            }
            FetchResult::WallPhotos(result) => {
                self.home.wall = into_state(result, "wall photos", &mut self.status_message);
                self.home.wall_selected = 0;
            }
            FetchResult::Photos(result) => {
                self.photos.photos = into_state(result, "photos", &mut self.status_message);
            }
            FetchResult::Videos(result) => {
                self.videos.videos = into_state(result, "videos", &mut self.status_message);
            }
            FetchResult::Timeline(result) => {
                self.timeline.events = into_state(result, "timeline", &mut self.status_message);
            }
            FetchResult::Messages(result) => {
                self.messages.messages = into_state(result, "messages", &mut self.status_message);
                self.messages.wall_seed = rand::random();
            }
            FetchResult::MessageStats(result) => match result {
                Ok(stats) => self.messages.stats = Some(stats),
                Err(e) => tracing::warn!("message stats refresh failed: {}", e),
            },
            FetchResult::Submit(result) => {
                let disposition = form::disposition(&result);
                self.form.finish(&disposition);
                if disposition.refresh_stats {
                    self.load_message_stats();
                }
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match self.mode {
            AppMode::Help => self.handle_help_key(key),
            AppMode::Lightbox => self.handle_lightbox_key(key),
            AppMode::Compose => self.handle_compose_key(key),
            AppMode::Browse => self.handle_browse_key(key),
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            self.mode = AppMode::Browse;
        }
    }

    fn handle_lightbox_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.lightbox.close();
                self.mode = AppMode::Browse;
            }
            KeyCode::Left | KeyCode::Char('h') => self.lightbox.prev(),
            KeyCode::Right | KeyCode::Char('l') => self.lightbox.next(),
            _ => {}
        }
    }

    fn handle_compose_key(&mut self, key: KeyEvent) {
        if self.form.submitting {
            // The request is not cancelable; its result is applied to the
            // form state whenever it lands, even if the dialog was closed.
            if key.code == KeyCode::Esc {
                self.mode = AppMode::Browse;
            }
            return;
        }
        match key.code {
            KeyCode::Esc => self.mode = AppMode::Browse,
            KeyCode::Tab => self.form.focus_next(),
            KeyCode::BackTab => self.form.focus_prev(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit_form(),
            KeyCode::Enter => {
                if self.form.focus == form::Field::Content {
                    self.form.handle_char('\n');
                } else {
                    self.form.focus_next();
                }
            }
            KeyCode::Char(c) => self.form.handle_char(c),
            _ => {}
        }
    }

    fn submit_form(&mut self) {
        match self.form.validate() {
            Err(message) => self.form.feedback = Some(Feedback::Error(message)),
            Ok(body) => {
                self.form.begin_submit();
                let client = self.client.clone();
                self.pool
                    .spawn(move || FetchResult::Submit(client.post_message(&body)));
            }
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('?') => {
                self.mode = AppMode::Help;
                return;
            }
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                self.show_page(Page::ALL[index]);
                return;
            }
            KeyCode::Tab => {
                self.show_page(self.page.next());
                return;
            }
            KeyCode::BackTab => {
                self.show_page(self.page.prev());
                return;
            }
            KeyCode::Char('r') => {
                self.show_page(self.page);
                return;
            }
            _ => {}
        }

        match self.page {
            Page::Home => self.handle_home_key(key),
            Page::Photos => self.handle_photos_key(key),
            Page::Videos => self.handle_videos_key(key),
            Page::Timeline => self.handle_timeline_key(key),
            Page::Messages => self.handle_messages_key(key),
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.home.wall_prev(),
            KeyCode::Right | KeyCode::Char('l') => self.home.wall_next(),
            KeyCode::Enter => self.open_wall_lightbox(),
            _ => {}
        }
    }

    fn open_wall_lightbox(&mut self) {
        let Some(wall) = self.home.wall.loaded() else {
            return;
        };
        let entries: Vec<LightboxEntry> = wall
            .iter()
            .map(|photo| LightboxEntry {
                url: api::url::resolve_media(&self.config.server.media_url, &photo.url),
                filename: photo.filename.clone(),
            })
            .collect();
        if entries.is_empty() {
            return;
        }
        self.lightbox.open(entries, self.home.wall_selected);
        self.mode = AppMode::Lightbox;
    }

    fn handle_photos_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.photos.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.photos.select_prev(),
            KeyCode::Char('f') => {
                self.photos.cycle_filter();
                self.load_photos();
            }
            KeyCode::Char('n') => {
                if self.photos.next_page() {
                    self.load_photos();
                }
            }
            KeyCode::Char('p') => {
                if self.photos.prev_page() {
                    self.load_photos();
                }
            }
            KeyCode::Enter => self.open_photos_lightbox(),
            _ => {}
        }
    }

    fn open_photos_lightbox(&mut self) {
        let Some(photos) = self.photos.photos.loaded() else {
            return;
        };
        let entries: Vec<LightboxEntry> = photos
            .iter()
            .map(|photo| LightboxEntry {
                url: api::url::resolve_media(&self.config.server.media_url, &photo.file_path),
                filename: photo.title.clone(),
            })
            .collect();
        if entries.is_empty() {
            return;
        }
        self.lightbox.open(entries, self.photos.selected);
        self.mode = AppMode::Lightbox;
    }

    fn handle_videos_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.videos.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.videos.select_prev(),
            KeyCode::Char('f') => {
                self.videos.cycle_filter();
                self.load_videos();
            }
            KeyCode::Char('n') => {
                if self.videos.next_page() {
                    self.load_videos();
                }
            }
            KeyCode::Char('p') => {
                if self.videos.prev_page() {
                    self.load_videos();
                }
            }
            _ => {}
        }
    }

    fn handle_timeline_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.timeline.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.timeline.select_prev(),
            KeyCode::Char('f') => {
                self.timeline.toggle_featured();
                self.load_timeline();
            }
            _ => {}
        }
    }

    fn handle_messages_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') => {
                self.form.feedback = None;
                self.mode = AppMode::Compose;
            }
            KeyCode::Char('n') => {
                if self.messages.next_page() {
                    self.load_messages();
                }
            }
            KeyCode::Char('p') => {
                if self.messages.prev_page() {
                    self.load_messages();
                }
            }
            _ => {}
        }
    }
}

fn into_state<T>(
    result: Result<T, api::ApiError>,
    what: &str,
    notice: &mut Option<String>,
) -> LoadState<T> {
    match result {
        Ok(value) => LoadState::Loaded(value),
        Err(e) => {
            tracing::warn!("{} load failed: {}", what, e);
            *notice = Some(format!("Failed to load {}", what));
            LoadState::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, Message, Photo, SubmitReceipt};

    fn app() -> App {
        App::new(Config::default()).unwrap()
    }

    #[test]
    fn test_unknown_page_name_is_ignored() {
        assert_eq!(Page::from_name("home"), Some(Page::Home));
        assert_eq!(Page::from_name("guestbook"), None);

        let mut app = app();
        app.show_page(Page::Photos);
        app.show_page_named("definitely-not-a-page");
        assert_eq!(app.page, Page::Photos);
    }

    #[test]
    fn test_page_cycle_wraps() {
        assert_eq!(Page::Messages.next(), Page::Home);
        assert_eq!(Page::Home.prev(), Page::Messages);
    }

    #[test]
    fn test_apply_photos_replaces_loading_state() {
        let mut app = app();
        app.apply(FetchResult::Photos(Ok(vec![Photo {
            id: 1,
            title: "Dawn".to_string(),
            file_path: "/media/pic/dawn.jpg".to_string(),
            description: None,
            category: "travel".to_string(),
        }])));
        assert_eq!(app.photos.photos.loaded().unwrap().len(), 1);
    }

    #[test]
    fn test_apply_failure_replaces_loading_indicator() {
        let mut app = app();
        app.apply(FetchResult::Timeline(Err(ApiError::Network(
            "connection refused".to_string(),
        ))));
        assert!(matches!(app.timeline.events, LoadState::Failed(_)));
    }

    #[test]
    fn test_stats_failure_keeps_previous_value() {
        let mut app = app();
        app.apply(FetchResult::MessageStats(Ok(crate::api::MessageStats {
            approved_messages: 3,
            pending_messages: 1,
            total_messages: 4,
        })));
        app.apply(FetchResult::MessageStats(Err(ApiError::Network(
            "down".to_string(),
        ))));
        assert_eq!(app.messages.stats.unwrap().approved_messages, 3);
    }

    #[test]
    fn test_submit_result_reenables_form() {
        let mut app = app();
        app.form.nickname = "ann".to_string();
        app.form.content = "hi".to_string();
        app.form.begin_submit();
        app.apply(FetchResult::Submit(Err(ApiError::RateLimited)));
        assert!(!app.form.submitting);
        // Rate limiting keeps the typed message
        assert_eq!(app.form.content, "hi");

        app.form.begin_submit();
        app.apply(FetchResult::Submit(Ok(SubmitReceipt {
            status: "pending".to_string(),
            message: None,
        })));
        assert!(!app.form.submitting);
        assert!(app.form.content.is_empty());
    }

    #[test]
    fn test_zero_page_size_config_renders_every_page() {
        let mut config = Config::default();
        config.ui.page_size = 0;
        let mut app = App::new(config).unwrap();
        let backend = ratatui::backend::TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        for page in Page::ALL {
            app.show_page(page);
            terminal.draw(|frame| ui::render(frame, &mut app)).unwrap();
        }
    }

    #[test]
    fn test_fetch_failure_sets_status_notice() {
        let mut app = app();
        app.apply(FetchResult::Timeline(Err(ApiError::Network(
            "connection refused".to_string(),
        ))));
        assert_eq!(
            app.status_message.as_deref(),
            Some("Failed to load timeline")
        );

        // The notice is transient: switching pages clears it
        app.show_page(Page::Photos);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_esc_quits_only_from_browse() {
        let mut app = app();
        app.mode = AppMode::Help;
        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(app.mode, AppMode::Browse);
        assert!(!app.should_quit);

        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(app.should_quit);
    }

    #[test]
    fn test_late_message_fetch_applies_off_page() {
        let mut app = app();
        app.show_page(Page::Home);
        app.apply(FetchResult::Messages(Ok(vec![Message {
            id: 1,
            nickname: "ann".to_string(),
            content: "hello".to_string(),
            email: None,
            created_at: "2024-06-01T10:00:00".to_string(),
            status: "approved".to_string(),
        }])));
        assert_eq!(app.messages.messages.loaded().unwrap().len(), 1);
        assert_eq!(app.page, Page::Home);
    }
}
