//! Secondary page scraping
//!
//! Two details never make it into the embed entity record: the album a track
//! belongs to, and an album's release date. Both are lifted from the public
//! page markup instead. Failures here only cost the one field, callers fall
//! back to an empty value rather than abandoning enrichment.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::enrichment::domain::ScrapeError;
use crate::enrichment::traits::SpotifyApi;

static ALBUM_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https://open\.spotify\.com/album/[a-zA-Z0-9]+")
        .expect("album URL regex should compile")
});

static JSON_LD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<script type="application/ld\+json">(.+?)</script>"#)
        .expect("JSON-LD regex should compile")
});

/// Find the album URL referenced by a track page.
///
/// Track pages link their parent album in the markup; the first album URL in
/// the document is it. Returns `Ok(None)` when the page has no such link.
pub async fn album_url_from_track_page(
    api: &dyn SpotifyApi,
    track_url: &str,
) -> Result<Option<String>, ScrapeError> {
    let document = api.page_document(track_url).await?;
    Ok(find_album_url(&document))
}

/// Read the release date from a page's JSON-LD block.
///
/// Album pages embed a structured-data script whose `datePublished` field
/// carries the release date. Returns `Ok(None)` when the block or the field
/// is absent.
pub async fn release_date_from_page(
    api: &dyn SpotifyApi,
    page_url: &str,
) -> Result<Option<String>, ScrapeError> {
    let document = api.page_document(page_url).await?;
    find_release_date(&document)
}

fn find_album_url(document: &str) -> Option<String> {
    ALBUM_URL_RE
        .find(document)
        .map(|m| m.as_str().to_string())
}

fn find_release_date(document: &str) -> Result<Option<String>, ScrapeError> {
    let Some(captures) = JSON_LD_RE.captures(document) else {
        return Ok(None);
    };

    let block: serde_json::Value =
        serde_json::from_str(&captures[1]).map_err(|e| ScrapeError::Parse(e.to_string()))?;

    Ok(block
        .get("datePublished")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string))
}
