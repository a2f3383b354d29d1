//! YouTube Data API client — two-phase lookup (search, then video details)
//! for skill tutorial videos.
//!
//! The client is disabled when no API key is configured: lookups return an
//! empty list so learning resources degrade to their fallback links.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

const YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

#[derive(Debug, Error)]
pub enum YouTubeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// A tutorial video with the metadata the frontend renders.
#[derive(Debug, Clone)]
pub struct Video {
    pub title: String,
    pub url: String,
    pub thumbnail: Option<String>,
    pub channel: String,
    pub published_at: String,
    pub view_count: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
}

#[derive(Debug, Deserialize)]
struct SearchItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VideosResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    id: String,
    snippet: VideoSnippet,
    statistics: Option<VideoStatistics>,
}

#[derive(Debug, Deserialize)]
struct VideoSnippet {
    title: String,
    description: Option<String>,
    #[serde(rename = "channelTitle")]
    channel_title: String,
    #[serde(rename = "publishedAt")]
    published_at: String,
    thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Deserialize)]
struct Thumbnails {
    high: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

#[derive(Debug, Deserialize)]
struct VideoStatistics {
    #[serde(rename = "viewCount")]
    view_count: Option<String>,
}

#[derive(Clone)]
pub struct YouTubeClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl YouTubeClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, YOUTUBE_API_BASE.to_string())
    }

    pub fn with_base_url(api_key: Option<String>, base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            base_url,
        }
    }

    /// Searches for "learn {skill} tutorial" videos and resolves their
    /// details. Returns an empty list when the client has no API key.
    pub async fn search_videos(
        &self,
        skill: &str,
        max_results: u32,
        language: &str,
    ) -> Result<Vec<Video>, YouTubeError> {
        let api_key = match &self.api_key {
            Some(key) => key,
            None => return Ok(vec![]),
        };

        let query = format!("learn {skill} tutorial");
        let max_results = max_results.to_string();
        let response = self
            .request(&format!("{}/search", self.base_url))
            .query(&[
                ("part", "snippet"),
                ("q", query.as_str()),
                ("type", "video"),
                ("maxResults", max_results.as_str()),
                ("relevanceLanguage", language),
                ("key", api_key.as_str()),
            ])
            .send()
            .await?;
        let search: SearchResponse = check_status(response).await?.json().await?;

        let video_ids: Vec<String> = search
            .items
            .into_iter()
            .filter_map(|item| item.id.video_id)
            .collect();
        debug!("YouTube search for '{skill}' found {} videos", video_ids.len());
        if video_ids.is_empty() {
            return Ok(vec![]);
        }

        let ids = video_ids.join(",");
        let response = self
            .request(&format!("{}/videos", self.base_url))
            .query(&[
                ("part", "snippet,statistics"),
                ("id", ids.as_str()),
                ("key", api_key.as_str()),
            ])
            .send()
            .await?;
        let details: VideosResponse = check_status(response).await?.json().await?;

        Ok(details
            .items
            .into_iter()
            .map(|item| Video {
                url: format!("https://www.youtube.com/watch?v={}", item.id),
                title: item.snippet.title,
                thumbnail: item.snippet.thumbnails.and_then(|t| t.high).map(|t| t.url),
                channel: item.snippet.channel_title,
                published_at: item.snippet.published_at,
                view_count: item.statistics.and_then(|s| s.view_count),
                description: item.snippet.description,
            })
            .collect())
    }

    fn request(&self, url: &str) -> reqwest::RequestBuilder {
        self.client.get(url)
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, YouTubeError> {
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(YouTubeError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response)
}
