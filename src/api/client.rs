//! Blocking HTTP adapter for the gallery backend.

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::{
    url, FeaturedContent, FeaturedEvents, Message, MessageStats, NewMessage, Photo, RandomHero,
    SubmitReceipt, TimelineEvent, Video, WallPhotosResponse,
};

/// Typed failure taxonomy for API calls.
///
/// Rate limiting is kept distinct from other server rejections because the
/// guestbook flow shows a fixed message for it rather than the server detail.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("rate limited")]
    RateLimited,
    #[error("server rejected request ({status}): {detail}")]
    Server { status: u16, detail: String },
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Error payload shape used by the backend for all rejections.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Client for the gallery REST API.
///
/// All methods are blocking; callers run them off the UI thread (see the
/// `fetch` module). No explicit timeout is set, the transport default applies.
#[derive(Debug, Clone)]
pub struct ApiClient {
    api_base: String,
}

impl ApiClient {
    pub fn new(api_base: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        url::join(&self.api_base, path)
    }

    fn get_json<T: DeserializeOwned>(&self, request: ureq::Request) -> Result<T, ApiError> {
        let response = request.call().map_err(map_ureq_error)?;
        response
            .into_json::<T>()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub fn get_photos(
        &self,
        skip: usize,
        limit: usize,
        category: Option<&str>,
    ) -> Result<Vec<Photo>, ApiError> {
        let mut request = ureq::get(&self.endpoint("gallery/photos"))
            .query("skip", &skip.to_string())
            .query("limit", &limit.to_string());
        if let Some(category) = category {
            request = request.query("category", category);
        }
        self.get_json(request)
    }

    pub fn get_videos(
        &self,
        skip: usize,
        limit: usize,
        category: Option<&str>,
    ) -> Result<Vec<Video>, ApiError> {
        let mut request = ureq::get(&self.endpoint("gallery/videos"))
            .query("skip", &skip.to_string())
            .query("limit", &limit.to_string());
        if let Some(category) = category {
            request = request.query("category", category);
        }
        self.get_json(request)
    }

    pub fn get_featured(&self) -> Result<FeaturedContent, ApiError> {
        self.get_json(ureq::get(&self.endpoint("gallery/featured")))
    }

    pub fn get_random_hero(&self) -> Result<RandomHero, ApiError> {
        self.get_json(ureq::get(&self.endpoint("gallery/random-hero")))
    }

    pub fn get_wall_photos(&self) -> Result<WallPhotosResponse, ApiError> {
        self.get_json(ureq::get(&self.endpoint("gallery/wall-photos")))
    }

    pub fn get_timeline_events(
        &self,
        featured_only: bool,
    ) -> Result<Vec<TimelineEvent>, ApiError> {
        let mut request = ureq::get(&self.endpoint("timeline/events"));
        if featured_only {
            request = request.query("is_featured", "true");
        }
        self.get_json(request)
    }

    pub fn get_featured_events(&self) -> Result<FeaturedEvents, ApiError> {
        self.get_json(ureq::get(&self.endpoint("timeline/featured")))
    }

    pub fn get_messages(&self, skip: usize, limit: usize) -> Result<Vec<Message>, ApiError> {
        self.get_json(
            ureq::get(&self.endpoint("messages"))
                .query("skip", &skip.to_string())
                .query("limit", &limit.to_string()),
        )
    }

    pub fn get_message_stats(&self) -> Result<MessageStats, ApiError> {
        self.get_json(ureq::get(&self.endpoint("messages/stats")))
    }

    pub fn post_message(&self, body: &NewMessage) -> Result<SubmitReceipt, ApiError> {
        let response = ureq::post(&self.endpoint("messages"))
            .send_json(body)
            .map_err(map_ureq_error)?;
        response
            .into_json::<SubmitReceipt>()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn map_ureq_error(err: ureq::Error) -> ApiError {
    match err {
        ureq::Error::Status(429, _) => ApiError::RateLimited,
        ureq::Error::Status(status, response) => {
            let detail = response
                .into_json::<ErrorBody>()
                .ok()
                .and_then(|b| b.detail)
                .unwrap_or_else(|| format!("HTTP {}", status));
            ApiError::Server { status, detail }
        }
        ureq::Error::Transport(t) => ApiError::Network(t.to_string()),
    }
}
