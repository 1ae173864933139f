use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ytq",
    about = "Fetch YouTube video details, comments, and transcripts",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Get the details of a YouTube video
    Details {
        /// YouTube video URL
        url: String,
    },

    /// Get comments from a YouTube video
    Comments {
        /// YouTube video URL
        url: String,
    },

    /// Generate a transcript from a YouTube URL
    Transcript {
        /// YouTube video URL
        url: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_subcommand_about_lines() {
        let cmd = Cli::command();
        let about = |name: &str| {
            cmd.find_subcommand(name)
                .and_then(|sub| sub.get_about())
                .map(|about| about.to_string())
                .unwrap_or_default()
        };

        assert_eq!(about("details"), "Get the details of a YouTube video");
        assert_eq!(about("comments"), "Get comments from a YouTube video");
        assert_eq!(about("transcript"), "Generate a transcript from a YouTube URL");
    }
}
