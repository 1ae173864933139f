use std::path::PathBuf;

use eyre::Result;
use log::info;

mod cli;

use cli::{Cli, Command};

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytq.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytq")
        .join("logs")
}

fn resolve_video_id(url: &str) -> Result<String> {
    ytq::extract_video_id(url)
        .ok_or_else(|| eyre::eyre!("could not extract video ID from: {url}\n\nSupported formats:\n  https://www.youtube.com/watch?v=ID\n  https://youtu.be/ID\n  https://www.youtube.com/embed/ID\n  https://www.youtube.com/v/ID\n  https://www.youtube.com/e/ID"))
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let after_help = format!("Logs are written to: {}", log_dir().join("ytq.log").display());
    let cmd = <Cli as clap::CommandFactory>::command().after_help(after_help);
    let matches = cmd.get_matches();
    let cli = <Cli as clap::FromArgMatches>::from_arg_matches(&matches)?;

    let client = reqwest::Client::new();

    match cli.command {
        Command::Details { url } => {
            let video_id = resolve_video_id(&url)?;

            let config = ytq::config::Config::load()?;
            let api = ytq::api::YouTubeApi::new(client, config.api_key()?);

            let video = api.video(&video_id).await?;
            let minutes = ytq::api::parse_duration(&video.content_details.duration)?;
            let comments = api.top_comments(&video_id, 5).await?;

            print!("{}", ytq::output::render_details(&video, minutes, &comments));
        }
        Command::Comments { url } => {
            let video_id = resolve_video_id(&url)?;

            let config = ytq::config::Config::load()?;
            let api = ytq::api::YouTubeApi::new(client, config.api_key()?);

            let threads = api.comment_threads(&video_id, 100).await?;

            println!("{}", ytq::output::render_comments_json(&threads)?);
        }
        Command::Transcript { url } => {
            let video_id = resolve_video_id(&url)?;

            let text = ytq::transcript::fetch_transcript(&client, &video_id).await?;

            println!("{text}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_video_id() {
        assert_eq!(resolve_video_id("https://youtu.be/dQw4w9WgXcQ").unwrap(), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_resolve_video_id_error_lists_accepted_shapes() {
        let err = resolve_video_id("https://example.com/watch?v=dQw4w9WgXcQ").unwrap_err();
        let msg = err.to_string();

        for line in [
            "https://www.youtube.com/watch?v=ID",
            "https://youtu.be/ID",
            "https://www.youtube.com/embed/ID",
            "https://www.youtube.com/v/ID",
            "https://www.youtube.com/e/ID",
        ] {
            assert!(msg.contains(line), "missing {line} in: {msg}");
        }
    }
}
