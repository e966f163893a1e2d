//! Composed search state over one load of records.
//!
//! The session owns the authoritative record snapshot plus the interaction
//! state (filter criteria, sort selection, reference point, page). Every
//! derived view is recomputed whole from the snapshot on read, so a reader
//! never observes a partially updated sequence.

use crate::facets::RegionIndex;
use crate::filter::filter_sites;
use crate::geo::{distance_km, format_distance, map_bounds, GeoPoint, MapBounds};
use crate::site::{CampSite, FilterCriteria};
use crate::sort::{sort_sites, SortDirection, SortField};

const DEFAULT_PAGE_SIZE: usize = 20;

/// Filter, sort, and pagination state over one record snapshot.
#[derive(Debug, Clone)]
pub struct SearchSession {
    sites: Vec<CampSite>,
    region_index: RegionIndex,
    criteria: FilterCriteria,
    sort_field: SortField,
    sort_direction: SortDirection,
    reference: Option<GeoPoint>,
    page: usize,
    page_size: usize,
}

impl SearchSession {
    /// Start a session over a freshly loaded record set.
    #[must_use]
    pub fn new(sites: Vec<CampSite>) -> Self {
        let region_index = RegionIndex::build(&sites);
        Self {
            sites,
            region_index,
            criteria: FilterCriteria::default(),
            sort_field: SortField::Name,
            sort_direction: SortDirection::Ascending,
            reference: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Replace the record snapshot. The facet index is rebuilt and the
    /// view returns to page one; filter and sort selections persist.
    pub fn load(&mut self, sites: Vec<CampSite>) {
        tracing::debug!(count = sites.len(), "replacing record snapshot");
        self.region_index = RegionIndex::build(&sites);
        self.sites = sites;
        self.page = 1;
    }

    /// Facets derived from the current snapshot.
    #[must_use]
    pub fn region_index(&self) -> &RegionIndex {
        &self.region_index
    }

    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    #[must_use]
    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }

    #[must_use]
    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    #[must_use]
    pub fn reference(&self) -> Option<GeoPoint> {
        self.reference
    }

    /// Replace the filter criteria. Every criteria change starts a fresh
    /// paginated view at page one.
    pub fn set_filter(&mut self, criteria: FilterCriteria) {
        tracing::debug!(
            province = criteria.province.as_deref(),
            city = criteria.city.as_deref(),
            "filter changed"
        );
        self.criteria = criteria;
        self.page = 1;
    }

    /// Select a sort field.
    ///
    /// Selecting the current field flips the direction. Selecting a new
    /// field resets the direction to ascending and the view to page one.
    /// Distance is refused while no reference point is known: the call is
    /// a silent no-op and the previous selection stays in effect.
    pub fn toggle_sort(&mut self, field: SortField) {
        if field == SortField::Distance && self.reference.is_none() {
            tracing::debug!("ignoring distance sort request before reference point arrival");
            return;
        }

        if field == self.sort_field {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Ascending;
            self.page = 1;
        }
    }

    /// Supply the reference point once device location resolves. Arriving
    /// after the first render is expected; distance sorting and distance
    /// labels unlock from the next read onward.
    pub fn set_reference(&mut self, point: GeoPoint) {
        self.reference = Some(point);
    }

    /// The filtered, sorted view — recomputed whole on every call.
    #[must_use]
    pub fn visible(&self) -> Vec<&CampSite> {
        sort_sites(
            filter_sites(&self.sites, &self.criteria),
            self.sort_field,
            self.sort_direction,
            self.reference,
        )
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// Number of pages in the current view; at least one even when empty.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.visible().len().div_ceil(self.page_size).max(1)
    }

    /// The records on the current page of the view.
    #[must_use]
    pub fn page_items(&self) -> Vec<&CampSite> {
        let visible = self.visible();
        let start = (self.page - 1) * self.page_size;
        let end = (start + self.page_size).min(visible.len());
        if start >= visible.len() {
            return Vec::new();
        }
        visible[start..end].to_vec()
    }

    pub fn next_page(&mut self) {
        if self.page < self.page_count() {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Formatted distance from the reference point to a site, once the
    /// reference point is known.
    #[must_use]
    pub fn distance_label(&self, site: &CampSite) -> Option<String> {
        self.reference
            .map(|origin| format_distance(distance_km(origin, site.location())))
    }

    /// Viewport framing the reference point and a selected site, once the
    /// reference point is known.
    #[must_use]
    pub fn frame_selection(&self, site: &CampSite) -> Option<MapBounds> {
        self.reference
            .map(|origin| map_bounds(origin, site.location()))
    }
}
