use eyre::Result;

use crate::api::{CommentThread, Video};

/// Render the `details` block: title, description, view count, duration,
/// then one `Author/Comment/Likes` paragraph per top comment.
pub fn render_details(video: &Video, duration_minutes: u64, comments: &[CommentThread]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Title: {}\n", video.snippet.title));
    out.push_str(&format!("Description: {}\n", video.snippet.description));
    out.push_str(&format!("View Count: {}\n", video.statistics.view_count));
    out.push_str(&format!("Duration: {duration_minutes} minutes\n"));
    out.push_str("Top Comments:\n");

    for thread in comments {
        let comment = &thread.snippet.top_level_comment.snippet;
        out.push_str(&format!(
            "Author: {}\nComment: {}\nLikes: {}\n\n",
            comment.author_display_name, comment.text_display, comment.like_count
        ));
    }

    out
}

/// Flatten comment threads in API order: each top-level comment's text,
/// then its replies prefixed with `    - `.
pub fn comment_lines(threads: &[CommentThread]) -> Vec<String> {
    let mut lines = Vec::new();

    for thread in threads {
        lines.push(thread.snippet.top_level_comment.snippet.text_display.clone());

        if let Some(replies) = &thread.replies {
            for reply in &replies.comments {
                lines.push(format!("    - {}", reply.snippet.text_display));
            }
        }
    }

    lines
}

/// Render the flattened comments as an indented JSON array of strings.
pub fn render_comments_json(threads: &[CommentThread]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&comment_lines(threads))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{
        Comment, CommentSnippet, Replies, ThreadSnippet, VideoContentDetails, VideoSnippet,
        VideoStatistics,
    };

    fn sample_video() -> Video {
        Video {
            snippet: VideoSnippet {
                title: "Test Video".to_string(),
                description: "A description.".to_string(),
            },
            statistics: VideoStatistics {
                view_count: "1234567".to_string(),
            },
            content_details: VideoContentDetails {
                duration: "PT1H2M3S".to_string(),
            },
        }
    }

    fn comment(author: &str, text: &str, likes: u64) -> Comment {
        Comment {
            snippet: CommentSnippet {
                author_display_name: author.to_string(),
                text_display: text.to_string(),
                like_count: likes,
            },
        }
    }

    fn thread(author: &str, text: &str, likes: u64, replies: &[&str]) -> CommentThread {
        CommentThread {
            snippet: ThreadSnippet {
                top_level_comment: comment(author, text, likes),
            },
            replies: if replies.is_empty() {
                None
            } else {
                Some(Replies {
                    comments: replies.iter().map(|r| comment("", r, 0)).collect(),
                })
            },
        }
    }

    #[test]
    fn test_render_details() {
        let video = sample_video();
        let comments = vec![thread("Alice", "Great video", 42, &[])];
        let out = render_details(&video, 62, &comments);
        assert_eq!(
            out,
            "Title: Test Video\n\
             Description: A description.\n\
             View Count: 1234567\n\
             Duration: 62 minutes\n\
             Top Comments:\n\
             Author: Alice\nComment: Great video\nLikes: 42\n\n"
        );
    }

    #[test]
    fn test_render_details_no_comments() {
        let out = render_details(&sample_video(), 62, &[]);
        assert!(out.ends_with("Top Comments:\n"));
    }

    #[test]
    fn test_render_details_multiple_comments() {
        let comments = vec![thread("Alice", "First", 2, &[]), thread("Bob", "Second", 1, &[])];
        let out = render_details(&sample_video(), 62, &comments);
        assert!(out.contains("Author: Alice\nComment: First\nLikes: 2\n\n"));
        assert!(out.ends_with("Author: Bob\nComment: Second\nLikes: 1\n\n"));
    }

    #[test]
    fn test_comment_lines_with_replies() {
        let threads = vec![thread("Alice", "Top comment", 0, &["first reply", "second reply"])];
        assert_eq!(
            comment_lines(&threads),
            vec![
                "Top comment".to_string(),
                "    - first reply".to_string(),
                "    - second reply".to_string(),
            ]
        );
    }

    #[test]
    fn test_comment_lines_without_replies() {
        let threads = vec![thread("Alice", "Only comment", 0, &[])];
        assert_eq!(comment_lines(&threads), vec!["Only comment".to_string()]);
    }

    #[test]
    fn test_comment_lines_interleaves_threads() {
        let threads = vec![
            thread("Alice", "First", 0, &["reply to first"]),
            thread("Bob", "Second", 0, &[]),
        ];
        assert_eq!(
            comment_lines(&threads),
            vec![
                "First".to_string(),
                "    - reply to first".to_string(),
                "Second".to_string(),
            ]
        );
    }

    #[test]
    fn test_render_comments_json() {
        let threads = vec![thread("Alice", "Top comment", 0, &["first reply", "second reply"])];
        let json = render_comments_json(&threads).unwrap();

        let parsed: Vec<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, vec!["Top comment", "    - first reply", "    - second reply"]);

        // Indented output, one element per line
        assert!(json.contains("\n"));
    }

    #[test]
    fn test_render_comments_json_empty() {
        assert_eq!(render_comments_json(&[]).unwrap(), "[]");
    }
}
