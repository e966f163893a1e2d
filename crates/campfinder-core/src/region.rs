//! Address parsing and administrative-region canonicalization.
//!
//! Upstream addresses are free-form strings whose first two whitespace
//! segments name a province-level and a city/county-level division, in
//! any of several historical or abbreviated spellings. Everything here is
//! a pure function of the input string and the static lookup tables, so
//! filtering and facet derivation always agree on a record's region
//! without sharing any cached state.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Marker suffix of county-level divisions (군).
pub(crate) const COUNTY_MARKER: &str = "군";

/// Raw tokens extracted from an address, before table lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRegion {
    pub province: Option<String>,
    pub city: Option<String>,
}

/// Canonical (province, city) attribution of one address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalRegion {
    pub province: Option<String>,
    pub city: Option<String>,
}

/// Metropolitan spellings that use the generic 시 suffix instead of the
/// official one, plus the bare capital and special-administrative-city
/// shorthands. These are rewritten to the full official name during
/// parsing; the segment after them is still the city token.
static SHORT_FORM_REWRITES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("서울시", "서울특별시"),
        ("부산시", "부산광역시"),
        ("대구시", "대구광역시"),
        ("인천시", "인천광역시"),
        ("광주시", "광주광역시"),
        ("대전시", "대전광역시"),
        ("울산시", "울산광역시"),
        ("서울", "서울특별시"),
        ("세종", "세종특별자치시"),
        ("세종시", "세종특별자치시"),
    ])
});

/// Raw province token → canonical official name. Many-to-one: short
/// forms, bare abbreviations, and renamed divisions all collapse to the
/// spelling the upstream dataset predominantly uses.
static PROVINCE_TABLE: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("서울", "서울특별시"),
        ("서울시", "서울특별시"),
        ("부산", "부산광역시"),
        ("부산시", "부산광역시"),
        ("대구", "대구광역시"),
        ("대구시", "대구광역시"),
        ("인천", "인천광역시"),
        ("인천시", "인천광역시"),
        ("광주", "광주광역시"),
        ("광주시", "광주광역시"),
        ("대전", "대전광역시"),
        ("대전시", "대전광역시"),
        ("울산", "울산광역시"),
        ("울산시", "울산광역시"),
        ("세종", "세종특별자치시"),
        ("세종시", "세종특별자치시"),
        ("경기", "경기도"),
        ("강원", "강원도"),
        ("강원특별자치도", "강원도"),
        ("충북", "충청북도"),
        ("충남", "충청남도"),
        ("전북", "전라북도"),
        ("전북특별자치도", "전라북도"),
        ("전남", "전라남도"),
        ("경북", "경상북도"),
        ("경남", "경상남도"),
        ("제주", "제주특별자치도"),
        ("제주도", "제주특별자치도"),
    ])
});

/// Raw city token → canonical city name. Covers county spellings that
/// were since promoted to cities and still appear in older records.
static CITY_TABLE: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("고양군", "고양시"),
        ("포천군", "포천시"),
        ("양주군", "양주시"),
        ("여주군", "여주시"),
        ("김포군", "김포시"),
        ("파주군", "파주시"),
        ("화성군", "화성시"),
        ("광주군", "광주시"),
        ("이천군", "이천시"),
        ("용인군", "용인시"),
        ("당진군", "당진시"),
        ("춘성군", "춘천시"),
    ])
});

/// Split an address into its raw (province, city) tokens.
///
/// The first whitespace segment is the province candidate; short-form
/// metropolitan spellings are rewritten to their full official names. The
/// second segment, when present, is the city token. An empty or
/// whitespace-only address yields neither token.
#[must_use]
pub fn parse_address(address: &str) -> RawRegion {
    let mut segments = address.split_whitespace();
    let Some(first) = segments.next() else {
        return RawRegion::default();
    };

    let province = match SHORT_FORM_REWRITES.get(first) {
        Some(official) => (*official).to_owned(),
        None => first.to_owned(),
    };
    let city = segments.next().map(str::to_owned);

    RawRegion {
        province: Some(province),
        city,
    }
}

/// Canonical spelling of a raw province token.
///
/// Unknown tokens are returned unchanged — they act as their own
/// canonical form. Idempotent.
#[must_use]
pub fn normalize_province(raw: &str) -> &str {
    PROVINCE_TABLE.get(raw).copied().unwrap_or(raw)
}

/// Canonical spelling of a raw city token. Same contract as
/// [`normalize_province`], independent table.
#[must_use]
pub fn normalize_city(raw: &str) -> &str {
    CITY_TABLE.get(raw).copied().unwrap_or(raw)
}

/// Parse and normalize an address into its canonical region.
#[must_use]
pub fn canonical_region(address: &str) -> CanonicalRegion {
    let raw = parse_address(address);
    CanonicalRegion {
        province: raw
            .province
            .map(|p| normalize_province(&p).to_owned()),
        city: raw.city.map(|c| normalize_city(&c).to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_short_form_capital() {
        let raw = parse_address("서울시 강남구 테헤란로 123");
        assert_eq!(raw.province.as_deref(), Some("서울특별시"));
        assert_eq!(raw.city.as_deref(), Some("강남구"));
    }

    #[test]
    fn parse_plain_province() {
        let raw = parse_address("강원도 춘천시 남산면");
        assert_eq!(raw.province.as_deref(), Some("강원도"));
        assert_eq!(raw.city.as_deref(), Some("춘천시"));
    }

    #[test]
    fn parse_bare_special_city_shorthand() {
        let raw = parse_address("세종 연기면");
        assert_eq!(raw.province.as_deref(), Some("세종특별자치시"));
        assert_eq!(raw.city.as_deref(), Some("연기면"));
    }

    #[test]
    fn parse_single_segment_has_no_city() {
        let raw = parse_address("경기도");
        assert_eq!(raw.province.as_deref(), Some("경기도"));
        assert_eq!(raw.city, None);
    }

    #[test]
    fn parse_empty_address_has_no_region() {
        assert_eq!(parse_address(""), RawRegion::default());
        assert_eq!(parse_address("   "), RawRegion::default());
    }

    #[test]
    fn parse_collapses_repeated_whitespace() {
        let raw = parse_address("  경기도   가평군  청평면");
        assert_eq!(raw.province.as_deref(), Some("경기도"));
        assert_eq!(raw.city.as_deref(), Some("가평군"));
    }

    #[test]
    fn normalize_province_known_variants() {
        assert_eq!(normalize_province("서울시"), "서울특별시");
        assert_eq!(normalize_province("강원특별자치도"), "강원도");
        assert_eq!(normalize_province("충북"), "충청북도");
        assert_eq!(normalize_province("제주도"), "제주특별자치도");
    }

    #[test]
    fn normalize_province_unknown_passes_through() {
        assert_eq!(normalize_province("가평군"), "가평군");
        assert_eq!(normalize_province("somewhere"), "somewhere");
    }

    #[test]
    fn normalize_province_is_idempotent() {
        for raw in ["서울시", "서울특별시", "강원", "강원도", "모름"] {
            let once = normalize_province(raw);
            assert_eq!(normalize_province(once), once);
        }
    }

    #[test]
    fn normalize_city_promoted_county() {
        assert_eq!(normalize_city("고양군"), "고양시");
        assert_eq!(normalize_city("춘성군"), "춘천시");
    }

    #[test]
    fn normalize_city_is_idempotent() {
        for raw in ["고양군", "고양시", "강남구", "청평면"] {
            let once = normalize_city(raw);
            assert_eq!(normalize_city(once), once);
        }
    }

    #[test]
    fn canonical_region_is_deterministic() {
        let address = "서울시 강남구 어딘가 1-2";
        assert_eq!(canonical_region(address), canonical_region(address));
    }

    #[test]
    fn canonical_region_composes_parse_and_lookup() {
        let region = canonical_region("전북 고양군 어딘가");
        assert_eq!(region.province.as_deref(), Some("전라북도"));
        assert_eq!(region.city.as_deref(), Some("고양시"));
    }
}
