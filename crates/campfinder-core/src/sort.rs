//! Ordering of a filtered record view.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::geo::{distance_km, GeoPoint};
use crate::site::CampSite;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Name,
    Distance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Sort a view of records by the given field and direction.
///
/// `Name` compares lowercased display names; ties keep input order
/// (stable sort). `Distance` orders by haversine distance to the
/// reference point; when no reference point is given the view is
/// returned unchanged — switching onto the field at all is refused
/// upstream by [`crate::search::SearchSession::toggle_sort`]. Each call
/// recomputes the full ordering; nothing incremental is kept.
#[must_use]
pub fn sort_sites<'a>(
    sites: Vec<&'a CampSite>,
    field: SortField,
    direction: SortDirection,
    reference: Option<GeoPoint>,
) -> Vec<&'a CampSite> {
    match field {
        SortField::Name => {
            let mut keyed: Vec<(String, &CampSite)> = sites
                .into_iter()
                .map(|site| (site.name.to_lowercase(), site))
                .collect();
            keyed.sort_by(|a, b| direction.apply(a.0.cmp(&b.0)));
            keyed.into_iter().map(|(_, site)| site).collect()
        }
        SortField::Distance => {
            let Some(origin) = reference else {
                tracing::debug!("distance sort without a reference point; order unchanged");
                return sites;
            };
            let mut keyed: Vec<(f64, &CampSite)> = sites
                .into_iter()
                .map(|site| (distance_km(origin, site.location()), site))
                .collect();
            keyed.sort_by(|a, b| direction.apply(a.0.total_cmp(&b.0)));
            keyed.into_iter().map(|(_, site)| site).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::site::{Price, Reservation};

    fn make_site(id: &str, name: &str, lat: f64, lon: f64) -> CampSite {
        CampSite {
            id: id.to_owned(),
            name: name.to_owned(),
            address: String::new(),
            phone: String::new(),
            latitude: lat,
            longitude: lon,
            facilities: vec![],
            price: Price::Free,
            reservation: Reservation {
                available: false,
                method: "예약 불가".to_owned(),
            },
            images: vec![],
            description: String::new(),
            operating_hours: "24시간".to_owned(),
            last_updated: Utc::now(),
        }
    }

    fn ids(sites: &[&CampSite]) -> Vec<String> {
        sites.iter().map(|s| s.id.clone()).collect()
    }

    #[test]
    fn name_sort_is_case_insensitive() {
        let a = make_site("1", "banana camp", 0.0, 0.0);
        let b = make_site("2", "Apple Camp", 0.0, 0.0);
        let c = make_site("3", "cherry camp", 0.0, 0.0);
        let sorted = sort_sites(
            vec![&a, &b, &c],
            SortField::Name,
            SortDirection::Ascending,
            None,
        );
        assert_eq!(ids(&sorted), vec!["2", "1", "3"]);
    }

    #[test]
    fn name_sort_ties_keep_input_order() {
        let a = make_site("1", "같은이름", 0.0, 0.0);
        let b = make_site("2", "같은이름", 0.0, 0.0);
        let sorted = sort_sites(
            vec![&a, &b],
            SortField::Name,
            SortDirection::Descending,
            None,
        );
        assert_eq!(ids(&sorted), vec!["1", "2"]);
    }

    #[test]
    fn distance_sort_orders_by_proximity() {
        let origin = GeoPoint {
            lat: 37.5665,
            lon: 126.9780,
        };
        let near = make_site("near", "가까운 캠핑장", 37.6, 127.0);
        let far = make_site("far", "먼 캠핑장", 35.1, 129.0);
        let mid = make_site("mid", "중간 캠핑장", 36.5, 127.5);

        let sorted = sort_sites(
            vec![&far, &near, &mid],
            SortField::Distance,
            SortDirection::Ascending,
            Some(origin),
        );
        assert_eq!(ids(&sorted), vec!["near", "mid", "far"]);

        let reversed = sort_sites(
            vec![&far, &near, &mid],
            SortField::Distance,
            SortDirection::Descending,
            Some(origin),
        );
        assert_eq!(ids(&reversed), vec!["far", "mid", "near"]);
    }

    #[test]
    fn distance_sort_without_reference_leaves_order() {
        let a = make_site("1", "b", 37.0, 127.0);
        let b = make_site("2", "a", 36.0, 128.0);
        let sorted = sort_sites(
            vec![&a, &b],
            SortField::Distance,
            SortDirection::Ascending,
            None,
        );
        assert_eq!(ids(&sorted), vec!["1", "2"]);
    }

    #[test]
    fn direction_flip_round_trips() {
        assert_eq!(
            SortDirection::Ascending.flipped(),
            SortDirection::Descending
        );
        assert_eq!(
            SortDirection::Descending.flipped(),
            SortDirection::Ascending
        );
    }
}
