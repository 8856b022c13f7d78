use serde::{Deserialize, Serialize};

use super::aggregate::Artwork;

/// Collection-wide pagination block of a listing response
///
/// `total` counts the whole collection, not the page. The remaining fields
/// describe the server's own view of the paging and are informational; the
/// client drives its paginator from the fixed page-size constant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub total: u64,

    #[serde(default)]
    pub limit: u32,

    #[serde(default)]
    pub offset: u64,

    #[serde(default)]
    pub total_pages: u64,

    #[serde(default)]
    pub current_page: u64,
}

/// One page of artworks plus the collection-wide total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtworkListResponse {
    pub data: Vec<Artwork>,
    pub pagination: PaginationInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_listing_response() {
        let json = r#"{
            "pagination": {
                "total": 126260,
                "limit": 12,
                "offset": 0,
                "total_pages": 10522,
                "current_page": 1
            },
            "data": [
                {
                    "id": 13752,
                    "title": "Ballet at the Paris Opéra",
                    "place_of_origin": "France",
                    "artist_display": "Edgar Degas\nFrench, 1834-1917",
                    "inscriptions": "signed: Degas",
                    "date_start": 1877,
                    "date_end": 1877
                },
                {
                    "id": 16568,
                    "title": "Water Lilies",
                    "place_of_origin": "France",
                    "artist_display": "Claude Monet\nFrench, 1840-1926",
                    "inscriptions": null,
                    "date_start": 1906,
                    "date_end": 1906
                }
            ]
        }"#;

        let resp: ArtworkListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.pagination.total, 126260);
        assert_eq!(resp.pagination.limit, 12);
        assert_eq!(resp.data.len(), 2);
        assert_eq!(resp.data[0].id, 13752);
        assert_eq!(resp.data[0].title.as_deref(), Some("Ballet at the Paris Opéra"));
        assert_eq!(resp.data[1].inscriptions, None);
        assert_eq!(resp.data[1].date_start, Some(1906));
    }

    #[test]
    fn tolerates_null_and_missing_record_fields() {
        let json = r#"{
            "pagination": { "total": 1 },
            "data": [ { "id": 5 } ]
        }"#;

        let resp: ArtworkListResponse = serde_json::from_str(json).unwrap();
        let artwork = &resp.data[0];
        assert_eq!(artwork.id, 5);
        assert_eq!(artwork.title, None);
        assert_eq!(artwork.place_of_origin, None);
        assert_eq!(artwork.date_end, None);
        assert_eq!(resp.pagination.limit, 0);
    }

    #[test]
    fn ignores_extra_api_fields() {
        let json = r#"{
            "pagination": { "total": 3, "limit": 12, "next_url": "https://example.org/?page=2" },
            "data": [
                { "id": 7, "title": "Untitled", "image_id": "abc", "is_boosted": false }
            ],
            "info": { "license_text": "CC0" }
        }"#;

        let resp: ArtworkListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.pagination.total, 3);
        assert_eq!(resp.data[0].title.as_deref(), Some("Untitled"));
    }
}
