use eyre::{Result, bail};
use log::debug;
use regex::Regex;
use serde::Deserialize;

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

#[derive(Debug, Deserialize)]
struct CaptionTrack {
    #[serde(rename = "baseUrl")]
    base_url: String,
}

/// Fetch the transcript for a video by scraping its watch page.
///
/// The watch page embeds a `captionTracks` manifest in an inline script;
/// the first track's timed-text document is fetched and flattened to plain
/// text. A page with no manifest assembles to nothing and fails with the
/// same error as an empty caption track.
pub async fn fetch_transcript(client: &reqwest::Client, video_id: &str) -> Result<String> {
    let watch_url = format!("https://www.youtube.com/watch?v={video_id}");
    debug!("Fetching watch page: {watch_url}");

    let page_html = client
        .get(&watch_url)
        .header("User-Agent", USER_AGENT)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let caption_xml = match caption_track_url(&page_html) {
        Some(url) => {
            debug!("Fetching caption track: {url}");
            client
                .get(&url)
                .header("User-Agent", USER_AGENT)
                .send()
                .await?
                .error_for_status()?
                .text()
                .await?
        }
        None => String::new(),
    };

    assemble_transcript(video_id, &caption_xml)
}

/// Locate the `captionTracks` manifest in the watch-page HTML and return the
/// first track's base URL. Anything the regex or the decoder does not
/// recognize counts as "no captions" rather than a distinct error.
fn caption_track_url(html: &str) -> Option<String> {
    let re = Regex::new(r#""captionTracks":(\[.*?\])"#).ok()?;
    let raw = re.captures(html)?.get(1)?.as_str();
    let tracks: Vec<CaptionTrack> = serde_json::from_str(raw).ok()?;
    tracks.into_iter().next().map(|t| t.base_url)
}

/// Flatten a timed-text document into a single string: every `<text>` node's
/// content, HTML-unescaped, each followed by one space.
fn assemble_transcript(video_id: &str, caption_xml: &str) -> Result<String> {
    use quick_xml::Reader;
    use quick_xml::events::Event;

    let mut reader = Reader::from_str(caption_xml);
    let mut text = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"text" => in_text = true,
            Ok(Event::End(ref e)) if e.name().as_ref() == b"text" => in_text = false,
            Ok(Event::Text(ref e)) if in_text => {
                let raw = e.unescape().unwrap_or_default();
                text.push_str(&html_escape::decode_html_entities(&raw));
                text.push(' ');
            }
            Ok(Event::Eof) => break,
            Err(e) => bail!("error parsing caption XML: {e}"),
            _ => {}
        }
    }

    if text.is_empty() {
        bail!("no transcript found for video {video_id} or it is empty");
    }

    Ok(text)
}
