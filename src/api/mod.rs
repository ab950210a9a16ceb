//! Domain types for the gallery API and their display helpers.

mod client;
pub mod url;

use serde::{Deserialize, Serialize};

pub use client::{ApiClient, ApiError};

/// Maximum nickname length accepted by the backend.
pub const MAX_NICKNAME_LEN: usize = 50;
/// Maximum message content length accepted by the backend.
pub const MAX_CONTENT_LEN: usize = 2000;

/// A catalog photo.
#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    pub id: i64,
    pub title: String,
    pub file_path: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: String,
}

/// A catalog video. `embed_link` is an external watch URL when present.
#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub embed_link: Option<String>,
}

/// An event on the life timeline.
#[derive(Debug, Clone, Deserialize)]
pub struct TimelineEvent {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub event_date: String,
    #[serde(default)]
    pub event_type: String,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// An approved guestbook message.
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub id: i64,
    pub nickname: String,
    pub content: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub status: String,
}

/// Guestbook moderation counters.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct MessageStats {
    pub approved_messages: u64,
    pub pending_messages: u64,
    pub total_messages: u64,
}

/// One photo of the curated wall set, distinct from the paginated catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct WallPhoto {
    pub url: String,
    pub filename: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WallPhotosResponse {
    #[serde(default)]
    pub photos: Vec<WallPhoto>,
}

/// Homepage featured selection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeaturedContent {
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub videos: Vec<Video>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeaturedEvents {
    #[serde(default)]
    pub events: Vec<TimelineEvent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RandomHero {
    pub image_url: String,
}

/// Outbound body for a guestbook submission.
#[derive(Debug, Clone, Serialize)]
pub struct NewMessage {
    pub nickname: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Server receipt for a guestbook submission.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitReceipt {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Photo/video categories recognized by the backend, in filter-cycle order.
pub const CATEGORIES: &[&str] = &["travel", "family", "life", "work", "other"];

/// Display label for a photo/video category.
/// Unknown keys pass through unchanged so new server-side categories
/// still render instead of failing.
pub fn category_label(category: &str) -> &str {
    match category {
        "travel" => "Travel",
        "family" => "Family",
        "life" => "Life",
        "work" => "Work",
        "other" => "Other",
        other => other,
    }
}

/// Display label for a timeline event type. Unknown keys pass through.
pub fn event_type_label(event_type: &str) -> &str {
    match event_type {
        "milestone" => "Milestone",
        "achievement" => "Achievement",
        "travel" => "Travel",
        "work" => "Work",
        "education" => "Education",
        "family" => "Family",
        "other" => "Other",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_category_labels() {
        assert_eq!(category_label("travel"), "Travel");
        assert_eq!(category_label("other"), "Other");
        assert_eq!(event_type_label("milestone"), "Milestone");
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        assert_eq!(category_label("astro"), "astro");
        assert_eq!(event_type_label("graduation"), "graduation");
    }

    #[test]
    fn test_photo_deserializes_with_missing_optionals() {
        let photo: Photo = serde_json::from_str(
            r#"{"id": 1, "title": "Dawn", "file_path": "/media/pic/dawn.jpg"}"#,
        )
        .unwrap();
        assert!(photo.description.is_none());
        assert_eq!(photo.category, "");
    }

    #[test]
    fn test_new_message_omits_absent_email() {
        let body = NewMessage {
            nickname: "ann".to_string(),
            content: "hello".to_string(),
            email: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(!json.contains("email"));
    }
}
