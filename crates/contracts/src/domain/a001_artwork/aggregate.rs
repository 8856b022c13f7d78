use serde::{Deserialize, Serialize};

/// One artwork entry of the catalog API.
///
/// Every field except `id` may be null or absent in the source data, so they
/// all deserialize with defaults. Records are immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: i64,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub place_of_origin: Option<String>,

    #[serde(default)]
    pub artist_display: Option<String>,

    #[serde(default)]
    pub inscriptions: Option<String>,

    #[serde(default)]
    pub date_start: Option<i32>,

    #[serde(default)]
    pub date_end: Option<i32>,
}
