//! Normalization of share links into embeddable player URLs. Unrecognized
//! URLs pass through unchanged; the preview falls back to a plain link.

/// Rewrite a YouTube, Vimeo or TikTok share URL into its player form.
pub fn normalize_embed_url(url: &str) -> String {
    youtube_embed(url)
        .or_else(|| vimeo_embed(url))
        .or_else(|| tiktok_embed(url))
        .unwrap_or_else(|| url.to_string())
}

fn youtube_embed(url: &str) -> Option<String> {
    if let Some(rest) = url.split("youtube.com/watch").nth(1) {
        let id = rest
            .split(['?', '&'])
            .find_map(|param| param.strip_prefix("v="))?;
        return Some(format!("https://www.youtube.com/embed/{}", trim_id(id)));
    }
    if let Some(rest) = url.split("youtu.be/").nth(1) {
        return Some(format!("https://www.youtube.com/embed/{}", trim_id(rest)));
    }
    if let Some(rest) = url.split("youtube.com/shorts/").nth(1) {
        return Some(format!("https://www.youtube.com/embed/{}", trim_id(rest)));
    }
    None
}

fn vimeo_embed(url: &str) -> Option<String> {
    let rest = url.split("vimeo.com/").nth(1)?;
    let id = trim_id(rest);
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(format!("https://player.vimeo.com/video/{id}"))
}

fn tiktok_embed(url: &str) -> Option<String> {
    if !url.contains("tiktok.com/") {
        return None;
    }
    let rest = url.split("/video/").nth(1)?;
    let id = trim_id(rest);
    if id.is_empty() {
        return None;
    }
    Some(format!("https://www.tiktok.com/embed/v2/{id}"))
}

fn trim_id(raw: &str) -> &str {
    raw.split(['?', '&', '/', '#']).next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn youtube_watch_link() {
        assert_eq!(
            normalize_embed_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
    }

    #[test]
    fn youtube_watch_link_with_extra_params() {
        assert_eq!(
            normalize_embed_url("https://www.youtube.com/watch?t=42&v=dQw4w9WgXcQ&list=x"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
    }

    #[test]
    fn youtube_short_and_shorts_links() {
        assert_eq!(
            normalize_embed_url("https://youtu.be/dQw4w9WgXcQ?si=abc"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ"
        );
        assert_eq!(
            normalize_embed_url("https://www.youtube.com/shorts/abc123"),
            "https://www.youtube.com/embed/abc123"
        );
    }

    #[test]
    fn vimeo_link() {
        assert_eq!(
            normalize_embed_url("https://vimeo.com/76979871"),
            "https://player.vimeo.com/video/76979871"
        );
    }

    #[test]
    fn tiktok_link() {
        assert_eq!(
            normalize_embed_url("https://www.tiktok.com/@maldives/video/7245678901234567890"),
            "https://www.tiktok.com/embed/v2/7245678901234567890"
        );
    }

    #[test]
    fn unknown_urls_pass_through() {
        assert_eq!(
            normalize_embed_url("https://example.com/some-page"),
            "https://example.com/some-page"
        );
    }
}
