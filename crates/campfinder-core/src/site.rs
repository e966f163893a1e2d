//! Domain types for camp site records and filter criteria.
//!
//! Records arrive from the data-supply boundary already validated and
//! defaulted; nothing in this crate mutates them. Derived views (filtered,
//! sorted, paginated) are always fresh sequences over the same records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// One camp site record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampSite {
    /// Upstream content id; opaque, unique within one load.
    pub id: String,
    pub name: String,
    /// Free-form road address, e.g. `"강원도 춘천시 남산면 …"`. Region
    /// attribution is recomputed from this string on demand, never cached.
    pub address: String,
    pub phone: String,
    pub latitude: f64,
    pub longitude: f64,
    pub facilities: Vec<FacilityTag>,
    pub price: Price,
    pub reservation: Reservation,
    pub images: Vec<String>,
    pub description: String,
    pub operating_hours: String,
    /// When this record was last converted from the upstream payload.
    pub last_updated: DateTime<Utc>,
}

impl CampSite {
    /// The site's coordinates as a [`GeoPoint`].
    #[must_use]
    pub fn location(&self) -> GeoPoint {
        GeoPoint {
            lat: self.latitude,
            lon: self.longitude,
        }
    }
}

/// Amenity tags recognised from the upstream facility string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FacilityTag {
    Electricity,
    HotWater,
    Shower,
    Toilet,
    Parking,
    Store,
    Pool,
    Playground,
}

/// Price descriptor. Paid sites may or may not expose a numeric amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Price {
    Free,
    Paid { amount: Option<u32> },
}

/// Reservation descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub available: bool,
    /// Booking URL when available, otherwise the upstream "not bookable" label.
    pub method: String,
}

/// Region filter built by the caller on user interaction. Passed by value,
/// never stored beyond the current session state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Canonical province name to match exactly, if any.
    pub province: Option<String>,
    /// Canonical city name to match exactly, if any.
    pub city: Option<String>,
}

impl FilterCriteria {
    /// Criteria restricted to a province.
    #[must_use]
    pub fn province(name: impl Into<String>) -> Self {
        Self {
            province: Some(name.into()),
            city: None,
        }
    }

    /// Criteria restricted to a province and a city within it.
    #[must_use]
    pub fn province_and_city(province: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            province: Some(province.into()),
            city: Some(city.into()),
        }
    }

    /// True when no region constraint is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.province.is_none() && self.city.is_none()
    }
}
