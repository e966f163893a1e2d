//! Region filter facets derived from the loaded record set.
//!
//! Facets come from the data itself, not a fixed taxonomy: a province or
//! city is offered as a filter option only when at least one record
//! resolves to it.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::region::{canonical_region, COUNTY_MARKER};
use crate::site::CampSite;

/// One selectable filter option, shaped for selection controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub value: String,
    pub label: String,
}

impl FacetOption {
    fn new(name: &str) -> Self {
        Self {
            value: name.to_owned(),
            label: name.to_owned(),
        }
    }
}

/// Distinct canonical provinces and, per province, the distinct canonical
/// cities observed in one load of records.
///
/// Rebuilt whole whenever the record set is replaced, never patched
/// incrementally. Holds derived strings only, no record references.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RegionIndex {
    /// Province options, sorted by canonical name.
    pub provinces: Vec<FacetOption>,
    /// City options per province key, each list sorted by canonical name.
    pub cities: BTreeMap<String, Vec<FacetOption>>,
}

impl RegionIndex {
    /// Derive the facet index from a record set in one pass.
    ///
    /// A record with no resolvable province contributes nothing. A
    /// county-suffixed canonical name (contains 군) is kept out of the
    /// top-level province list, while its cities remain indexed under
    /// that same key — carried-over behavior that callers rely on.
    #[must_use]
    pub fn build(sites: &[CampSite]) -> Self {
        let mut provinces: BTreeSet<String> = BTreeSet::new();
        let mut cities: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for site in sites {
            let region = canonical_region(&site.address);
            let Some(province) = region.province else {
                continue;
            };

            if !province.contains(COUNTY_MARKER) {
                provinces.insert(province.clone());
            }

            if let Some(city) = region.city {
                cities.entry(province).or_default().insert(city);
            }
        }

        tracing::debug!(
            provinces = provinces.len(),
            keyed_provinces = cities.len(),
            "derived region facets"
        );

        Self {
            provinces: provinces.iter().map(|p| FacetOption::new(p)).collect(),
            cities: cities
                .into_iter()
                .map(|(province, names)| {
                    (
                        province,
                        names.iter().map(|c| FacetOption::new(c)).collect(),
                    )
                })
                .collect(),
        }
    }

    /// City options recorded under a province, empty when none.
    #[must_use]
    pub fn cities_for(&self, province: &str) -> &[FacetOption] {
        self.cities.get(province).map_or(&[], Vec::as_slice)
    }
}
