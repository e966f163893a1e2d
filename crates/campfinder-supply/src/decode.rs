//! Decoding of upstream payloads into [`CampSite`] records.
//!
//! All field defaulting lives here: downstream code receives records with
//! every field populated. Unparseable coordinates default to zero rather
//! than dropping the record, so such entries stay listed even though any
//! computed distance to them is meaningless.

use chrono::Utc;

use campfinder_core::{CampSite, Reservation};

use crate::error::SupplyError;
use crate::parse::{parse_facility_tags, parse_price};
use crate::types::{Envelope, RawCampRecord, Response};

const RESULT_CODE_OK: &str = "0000";

/// Upstream placeholder name for a facility that ships without one.
const FALLBACK_NAME: &str = "캠핑장";
/// Upstream label for a site that cannot be booked.
const NO_RESERVATION_LABEL: &str = "예약 불가";
const FALLBACK_OPERATING_HOURS: &str = "24시간";

/// Decode a list-endpoint payload into records.
///
/// # Errors
///
/// Returns [`SupplyError::Json`] when the payload is not the expected
/// envelope, or [`SupplyError::Upstream`] when the service reports a
/// non-success result code.
pub fn decode_site_list(payload: &str) -> Result<Vec<CampSite>, SupplyError> {
    let response = decode_envelope(payload)?;

    let records = response
        .body
        .and_then(|body| body.items)
        .map(crate::types::Items::into_records)
        .unwrap_or_default();

    tracing::debug!(count = records.len(), "decoded facility list payload");

    Ok(records
        .into_iter()
        .enumerate()
        .map(|(index, record)| into_site(index, record))
        .collect())
}

/// Decode a detail-endpoint payload into its single record, if any.
///
/// # Errors
///
/// Same contract as [`decode_site_list`].
pub fn decode_site_detail(payload: &str) -> Result<Option<CampSite>, SupplyError> {
    Ok(decode_site_list(payload)?.into_iter().next())
}

/// Extract the total record count the service reports for a query, for
/// callers that page through the remote set.
///
/// # Errors
///
/// Same contract as [`decode_site_list`].
pub fn decode_total_count(payload: &str) -> Result<u64, SupplyError> {
    let response = decode_envelope(payload)?;
    Ok(response
        .body
        .and_then(|body| body.total_count)
        .unwrap_or(0))
}

fn decode_envelope(payload: &str) -> Result<Response, SupplyError> {
    let envelope: Envelope = serde_json::from_str(payload)?;
    let response = envelope.response;

    if response.header.result_code != RESULT_CODE_OK {
        return Err(SupplyError::Upstream {
            code: response.header.result_code,
            message: response
                .header
                .result_msg
                .unwrap_or_else(|| "unknown error".to_owned()),
        });
    }

    Ok(response)
}

/// Convert one raw upstream record, applying every default.
fn into_site(index: usize, record: RawCampRecord) -> CampSite {
    let reservation_url = record
        .reservation_url
        .filter(|url| !url.trim().is_empty());

    CampSite {
        id: record
            .content_id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| format!("unknown-{index}")),
        name: record
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| FALLBACK_NAME.to_owned()),
        address: record.address.unwrap_or_default(),
        phone: record.phone.unwrap_or_default(),
        latitude: coordinate(record.map_y.as_ref()),
        longitude: coordinate(record.map_x.as_ref()),
        facilities: parse_facility_tags(record.amenities.as_deref().unwrap_or("")),
        price: parse_price(record.charge_info.as_deref()),
        reservation: match reservation_url {
            Some(url) => Reservation {
                available: true,
                method: url,
            },
            None => Reservation {
                available: false,
                method: NO_RESERVATION_LABEL.to_owned(),
            },
        },
        images: record
            .first_image_url
            .filter(|url| !url.is_empty())
            .into_iter()
            .collect(),
        description: record.intro.unwrap_or_default(),
        operating_hours: record
            .operating_hours
            .filter(|hours| !hours.is_empty())
            .unwrap_or_else(|| FALLBACK_OPERATING_HOURS.to_owned()),
        last_updated: Utc::now(),
    }
}

/// A coordinate field as number-or-string, defaulted to zero on anything
/// unparseable.
fn coordinate(value: Option<&serde_json::Value>) -> f64 {
    value
        .and_then(|v| {
            v.as_f64()
                .or_else(|| v.as_str().and_then(|s| s.trim().parse().ok()))
        })
        .unwrap_or(0.0)
}
