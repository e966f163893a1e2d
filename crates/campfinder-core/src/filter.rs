//! Region filtering over an in-memory record set.

use crate::region::canonical_region;
use crate::site::{CampSite, FilterCriteria};

/// Keep the records whose canonical region matches the criteria.
///
/// Empty criteria return every record. Matching is exact string equality
/// on canonical names: a record whose address yields no province (or no
/// city, while a city filter is active) is excluded. Survivors keep their
/// input relative order; the input is never reordered or mutated.
#[must_use]
pub fn filter_sites<'a>(sites: &'a [CampSite], criteria: &FilterCriteria) -> Vec<&'a CampSite> {
    if criteria.is_empty() {
        return sites.iter().collect();
    }

    let survivors: Vec<&CampSite> = sites
        .iter()
        .filter(|site| matches_criteria(site, criteria))
        .collect();

    tracing::debug!(
        total = sites.len(),
        kept = survivors.len(),
        province = criteria.province.as_deref(),
        city = criteria.city.as_deref(),
        "applied region filter"
    );

    survivors
}

fn matches_criteria(site: &CampSite, criteria: &FilterCriteria) -> bool {
    let region = canonical_region(&site.address);

    if let Some(province) = &criteria.province {
        if region.province.as_deref() != Some(province.as_str()) {
            return false;
        }
    }

    if let Some(city) = &criteria.city {
        if region.city.as_deref() != Some(city.as_str()) {
            return false;
        }
    }

    true
}
