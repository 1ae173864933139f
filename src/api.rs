use eyre::{Result, bail};
use log::debug;
use regex::Regex;
use serde::Deserialize;

const API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// YouTube Data API v3 client. The API key is passed in explicitly at
/// construction; nothing is read from the environment here.
pub struct YouTubeApi {
    client: reqwest::Client,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<Video>,
}

#[derive(Debug, Deserialize)]
pub struct Video {
    pub snippet: VideoSnippet,
    pub statistics: VideoStatistics,
    #[serde(rename = "contentDetails")]
    pub content_details: VideoContentDetails,
}

#[derive(Debug, Deserialize)]
pub struct VideoSnippet {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct VideoStatistics {
    #[serde(rename = "viewCount", default)]
    pub view_count: String,
}

#[derive(Debug, Deserialize)]
pub struct VideoContentDetails {
    pub duration: String,
}

#[derive(Debug, Deserialize)]
struct CommentThreadListResponse {
    #[serde(default)]
    items: Vec<CommentThread>,
}

#[derive(Debug, Deserialize)]
pub struct CommentThread {
    pub snippet: ThreadSnippet,
    pub replies: Option<Replies>,
}

#[derive(Debug, Deserialize)]
pub struct ThreadSnippet {
    #[serde(rename = "topLevelComment")]
    pub top_level_comment: Comment,
}

#[derive(Debug, Deserialize)]
pub struct Comment {
    pub snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
pub struct CommentSnippet {
    #[serde(rename = "authorDisplayName", default)]
    pub author_display_name: String,
    #[serde(rename = "textDisplay", default)]
    pub text_display: String,
    #[serde(rename = "likeCount", default)]
    pub like_count: u64,
}

#[derive(Debug, Deserialize)]
pub struct Replies {
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl YouTubeApi {
    pub fn new(client: reqwest::Client, api_key: String) -> Self {
        Self { client, api_key }
    }

    /// Look up a single video resource (snippet, statistics, content details).
    pub async fn video(&self, video_id: &str) -> Result<Video> {
        debug!("Fetching video resource for {video_id}");

        let resp = self
            .client
            .get(format!("{API_BASE}/videos"))
            .query(&[
                ("part", "snippet,statistics,contentDetails"),
                ("id", video_id),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("YouTube API returned {status}: {body}");
        }

        let list: VideoListResponse = resp.json().await?;
        list.items
            .into_iter()
            .next()
            .ok_or_else(|| eyre::eyre!("no video found for ID {video_id}"))
    }

    /// List the most relevant top-level comments for a video (no replies).
    pub async fn top_comments(&self, video_id: &str, max_results: u32) -> Result<Vec<CommentThread>> {
        debug!("Fetching top {max_results} comments for {video_id}");

        let max_results = max_results.to_string();
        let resp = self
            .client
            .get(format!("{API_BASE}/commentThreads"))
            .query(&[
                ("part", "snippet"),
                ("videoId", video_id),
                ("order", "relevance"),
                ("maxResults", max_results.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("YouTube API returned {status}: {body}");
        }

        let list: CommentThreadListResponse = resp.json().await?;
        Ok(list.items)
    }

    /// List comment threads with their replies, as plain text. Single page
    /// only, in the API's default order.
    pub async fn comment_threads(&self, video_id: &str, max_results: u32) -> Result<Vec<CommentThread>> {
        debug!("Fetching up to {max_results} comment threads for {video_id}");

        let max_results = max_results.to_string();
        let resp = self
            .client
            .get(format!("{API_BASE}/commentThreads"))
            .query(&[
                ("part", "snippet,replies"),
                ("videoId", video_id),
                ("textFormat", "plainText"),
                ("maxResults", max_results.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("YouTube API returned {status}: {body}");
        }

        let list: CommentThreadListResponse = resp.json().await?;
        Ok(list.items)
    }
}

/// Parse an ISO-8601 `PT#H#M#S` duration into whole minutes.
///
/// The seconds component never contributes a minute: `PT1H2M3S` is 62
/// minutes and `PT90S` is 0.
pub fn parse_duration(duration: &str) -> Result<u64> {
    let re = Regex::new(r"(?i)PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?")?;
    let caps = re
        .captures(duration)
        .ok_or_else(|| eyre::eyre!("invalid duration string: {duration}"))?;

    let group = |i: usize| {
        caps.get(i)
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .unwrap_or(0)
    };

    Ok(group(1).saturating_mul(60).saturating_add(group(2)))
}
