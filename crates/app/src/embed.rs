//! Rewrites video page URLs into their embeddable player form.

use regex::Regex;
use std::sync::OnceLock;

fn youtube_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#,
        )
        .expect("youtube pattern is valid")
    })
}

fn vimeo_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"vimeo\.com/(?:.*/)?(\d+)").expect("vimeo pattern is valid"))
}

/// Rewrite a YouTube or Vimeo page URL to its canonical embeddable form.
/// Any URL matching neither pattern passes through unchanged.
pub fn embed_url(url: &str) -> String {
    if url.is_empty() {
        return url.to_string();
    }

    if let Some(caps) = youtube_pattern().captures(url) {
        if let Some(id) = caps.get(1) {
            return format!("https://www.youtube.com/embed/{}", id.as_str());
        }
    }

    if let Some(caps) = vimeo_pattern().captures(url) {
        if let Some(id) = caps.get(1) {
            return format!("https://player.vimeo.com/video/{}", id.as_str());
        }
    }

    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn youtube_watch_url_rewrites_to_embed() {
        assert_eq!(
            embed_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
    }

    #[test]
    fn youtube_short_url_rewrites_to_same_embed() {
        assert_eq!(
            embed_url("https://youtu.be/dQw4w9WgXcQ"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
    }

    #[test]
    fn youtube_existing_embed_url_keeps_its_id() {
        assert_eq!(
            embed_url("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
    }

    // Regression: the digit class must actually match numeric Vimeo ids.
    #[test]
    fn vimeo_numeric_id_rewrites_to_player() {
        assert_eq!(
            embed_url("https://vimeo.com/76979871"),
            "https://player.vimeo.com/video/76979871"
        );
        assert_eq!(
            embed_url("https://vimeo.com/channels/staffpicks/76979871"),
            "https://player.vimeo.com/video/76979871"
        );
    }

    #[test]
    fn non_matching_url_passes_through() {
        assert_eq!(
            embed_url("https://cdn.example.org/clips/session.mp4"),
            "https://cdn.example.org/clips/session.mp4"
        );
    }

    #[test]
    fn empty_url_passes_through() {
        assert_eq!(embed_url(""), "");
    }
}
