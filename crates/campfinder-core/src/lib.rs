pub mod facets;
pub mod filter;
pub mod geo;
pub mod region;
pub mod search;
pub mod site;
pub mod sort;

pub use facets::{FacetOption, RegionIndex};
pub use filter::filter_sites;
pub use geo::{distance_km, format_distance, map_bounds, GeoPoint, MapBounds};
pub use region::{
    canonical_region, normalize_city, normalize_province, parse_address, CanonicalRegion,
    RawRegion,
};
pub use search::SearchSession;
pub use site::{CampSite, FacilityTag, FilterCriteria, Price, Reservation};
pub use sort::{sort_sites, SortDirection, SortField};
