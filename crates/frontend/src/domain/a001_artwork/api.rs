use contracts::domain::a001_artwork::ArtworkListResponse;
use gloo_net::http::Request;

const API_BASE: &str = "https://api.artic.edu/api/v1/artworks";

// Restricts the payload to the columns the gallery displays
const FIELDS: &str = "id,title,place_of_origin,artist_display,inscriptions,date_start,date_end";

/// Fetch one page of artworks (1-indexed)
///
/// The response carries the page's records plus the collection-wide total.
/// Degrading a failure to an empty page is the caller's job; this function
/// only reports it.
pub async fn fetch_artworks(page: usize) -> Result<ArtworkListResponse, String> {
    let url = format!("{}?page={}&fields={}", API_BASE, page, FIELDS);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: ArtworkListResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
