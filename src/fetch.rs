//! Background fetch layer.
//!
//! Every API call runs on its own spawned thread and reports back through a
//! single mpsc channel that the UI loop drains once per tick, so all view
//! state is only ever touched from the UI thread. Requests are not
//! cancelable: navigating away from a page does not abort its in-flight
//! fetch, and the late result is still applied to that page's state.

use std::sync::mpsc;

use crate::api::{
    ApiError, FeaturedContent, Message, MessageStats, Photo, SubmitReceipt, TimelineEvent, Video,
    WallPhoto,
};

/// A completed fetch, tagged with the view state it belongs to.
pub enum FetchResult {
    Hero(Result<String, ApiError>),
    Featured(Result<FeaturedContent, ApiError>),
    FeaturedEvents(Result<Vec<TimelineEvent>, ApiError>),
    Photos(Result<Vec<Photo>, ApiError>),
    Videos(Result<Vec<Video>, ApiError>),
    Timeline(Result<Vec<TimelineEvent>, ApiError>),
    Messages(Result<Vec<Message>, ApiError>),
    MessageStats(Result<MessageStats, ApiError>),
    WallPhotos(Result<Vec<WallPhoto>, ApiError>),
    Submit(Result<SubmitReceipt, ApiError>),
}

/// Hands fetch closures to worker threads and collects their results.
pub struct FetchPool {
    sender: mpsc::Sender<FetchResult>,
    receiver: mpsc::Receiver<FetchResult>,
}

impl FetchPool {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Run `fetch` on a background thread. The result is delivered on the
    /// next `poll` after completion; if the app is already shutting down the
    /// send fails and the result is dropped, which is fine.
    pub fn spawn<F>(&self, fetch: F)
    where
        F: FnOnce() -> FetchResult + Send + 'static,
    {
        let sender = self.sender.clone();
        std::thread::spawn(move || {
            let _ = sender.send(fetch());
        });
    }

    /// Drain all completed fetches.
    pub fn poll(&self) -> Vec<FetchResult> {
        let mut results = Vec::new();
        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }
        results
    }
}

impl Default for FetchPool {
    fn default() -> Self {
        Self::new()
    }
}
