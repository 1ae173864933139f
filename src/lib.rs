pub mod api;
pub mod config;
pub mod output;
pub mod transcript;

/// Extract the 11-character video ID from a YouTube URL.
///
/// One pattern covers the accepted shapes: `watch?v=`, `youtu.be/`,
/// `/embed/`, `/v/`, `/e/`. A bare video ID is not a URL and does not match.
pub fn extract_video_id(url: &str) -> Option<String> {
    let url = url.trim();

    let re = regex::Regex::new(
        r"(?:https?://)?(?:www\.)?(?:youtube\.com/(?:[^/\n\s]+/\S+/|(?:v|e(?:mbed)?)/|\S*?[?&]v=)|youtu\.be/)([a-zA-Z0-9_-]{11})",
    )
    .unwrap();

    re.captures(url).map(|caps| caps[1].to_string())
}
