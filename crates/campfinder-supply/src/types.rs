//! Serde models of the upstream facility service payload.
//!
//! The service wraps everything in a `response.header`/`response.body`
//! envelope. `items` is an object with an `item` field holding either an
//! array (list endpoint) or a single object (detail endpoint), and
//! degrades to an empty string when a query matches nothing — all three
//! shapes are accepted here.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub response: Response,
}

#[derive(Debug, Deserialize)]
pub struct Response {
    pub header: Header,
    #[serde(default)]
    pub body: Option<Body>,
}

#[derive(Debug, Deserialize)]
pub struct Header {
    #[serde(rename = "resultCode")]
    pub result_code: String,
    #[serde(rename = "resultMsg", default)]
    pub result_msg: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Body {
    #[serde(default)]
    pub items: Option<Items>,
    #[serde(rename = "totalCount", default)]
    pub total_count: Option<u64>,
    #[serde(rename = "numOfRows", default)]
    pub num_of_rows: Option<u64>,
    #[serde(rename = "pageNo", default)]
    pub page_no: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Items {
    Wrapped {
        #[serde(default)]
        item: ItemField,
    },
    /// The service sends `"items": ""` instead of an empty object when a
    /// query matches nothing.
    Empty(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ItemField {
    Many(Vec<RawCampRecord>),
    One(Box<RawCampRecord>),
}

impl Default for ItemField {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl Items {
    /// Flatten the list/single/empty shapes into one record vector.
    #[must_use]
    pub fn into_records(self) -> Vec<RawCampRecord> {
        match self {
            Self::Wrapped {
                item: ItemField::Many(records),
            } => records,
            Self::Wrapped {
                item: ItemField::One(record),
            } => vec![*record],
            Self::Empty(_) => Vec::new(),
        }
    }
}

/// One facility entry as the upstream service ships it. Every field is
/// optional; defaulting to the record shape happens in [`crate::decode`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawCampRecord {
    #[serde(rename = "contentId", default)]
    pub content_id: Option<String>,
    #[serde(rename = "facltNm", default)]
    pub name: Option<String>,
    #[serde(rename = "addr1", default)]
    pub address: Option<String>,
    #[serde(rename = "tel", default)]
    pub phone: Option<String>,
    /// Latitude; the service ships coordinates as strings, but numbers
    /// are tolerated.
    #[serde(rename = "mapY", default)]
    pub map_y: Option<serde_json::Value>,
    /// Longitude.
    #[serde(rename = "mapX", default)]
    pub map_x: Option<serde_json::Value>,
    /// Comma-separated amenity list, e.g. `"전기,온수,샤워장"`.
    #[serde(rename = "sbrsCltr", default)]
    pub amenities: Option<String>,
    /// Free-form price description, e.g. `"무료"` or `"30,000원"`.
    #[serde(rename = "chrgeInfo", default)]
    pub charge_info: Option<String>,
    #[serde(rename = "resveUrl", default)]
    pub reservation_url: Option<String>,
    #[serde(rename = "firstImageUrl", default)]
    pub first_image_url: Option<String>,
    #[serde(rename = "intro", default)]
    pub intro: Option<String>,
    #[serde(rename = "operDeCl", default)]
    pub operating_hours: Option<String>,
}
