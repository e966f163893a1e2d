//! String parsing helpers for upstream amenity and price fields.

use std::sync::LazyLock;

use regex::Regex;

use campfinder_core::{FacilityTag, Price};

/// Upstream label for a free site.
const FREE_LABEL: &str = "무료";

static NON_DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]+").expect("valid regex"));

/// Map one upstream amenity token to its tag, if recognised.
fn facility_tag_for_token(token: &str) -> Option<FacilityTag> {
    match token {
        "전기" => Some(FacilityTag::Electricity),
        "온수" => Some(FacilityTag::HotWater),
        "샤워장" => Some(FacilityTag::Shower),
        "화장실" => Some(FacilityTag::Toilet),
        "주차장" => Some(FacilityTag::Parking),
        "매점" => Some(FacilityTag::Store),
        "수영장" => Some(FacilityTag::Pool),
        "놀이터" => Some(FacilityTag::Playground),
        _ => None,
    }
}

/// Parse the comma-separated amenity string into recognised tags.
///
/// Tokens are trimmed; unknown tokens are dropped; duplicates collapse
/// while the first-seen order is kept.
#[must_use]
pub fn parse_facility_tags(raw: &str) -> Vec<FacilityTag> {
    let mut tags = Vec::new();
    for token in raw.split(',') {
        if let Some(tag) = facility_tag_for_token(token.trim()) {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
    }
    tags
}

/// Interpret the upstream price description.
///
/// The literal free label maps to [`Price::Free`]; anything else —
/// including a missing field — is paid, with the amount taken from the
/// digits of the description when any are present.
#[must_use]
pub fn parse_price(charge_info: Option<&str>) -> Price {
    match charge_info {
        Some(FREE_LABEL) => Price::Free,
        Some(raw) => Price::Paid {
            amount: NON_DIGIT_RE.replace_all(raw, "").parse().ok(),
        },
        None => Price::Paid { amount: None },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facility_tags_parse_known_tokens() {
        let tags = parse_facility_tags("전기,온수,샤워장,화장실");
        assert_eq!(
            tags,
            vec![
                FacilityTag::Electricity,
                FacilityTag::HotWater,
                FacilityTag::Shower,
                FacilityTag::Toilet,
            ]
        );
    }

    #[test]
    fn facility_tags_trim_and_drop_unknown() {
        let tags = parse_facility_tags(" 전기 , 장작판매 , 주차장 ");
        assert_eq!(tags, vec![FacilityTag::Electricity, FacilityTag::Parking]);
    }

    #[test]
    fn facility_tags_collapse_duplicates() {
        let tags = parse_facility_tags("전기,전기,매점");
        assert_eq!(tags, vec![FacilityTag::Electricity, FacilityTag::Store]);
    }

    #[test]
    fn facility_tags_empty_input() {
        assert!(parse_facility_tags("").is_empty());
    }

    #[test]
    fn price_free_label() {
        assert_eq!(parse_price(Some("무료")), Price::Free);
    }

    #[test]
    fn price_paid_with_amount() {
        assert_eq!(
            parse_price(Some("30,000원")),
            Price::Paid {
                amount: Some(30_000)
            }
        );
    }

    #[test]
    fn price_paid_without_digits() {
        assert_eq!(parse_price(Some("문의")), Price::Paid { amount: None });
    }

    #[test]
    fn price_missing_field_is_paid_unknown() {
        assert_eq!(parse_price(None), Price::Paid { amount: None });
    }
}
