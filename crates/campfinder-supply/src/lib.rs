//! Boundary conversion from the upstream facility service payload to
//! [`campfinder_core`] records.
//!
//! The network retrieval itself lives with the caller; this crate takes an
//! already-fetched JSON payload and performs all validation and defaulting
//! in one place, so nothing downstream re-checks field shapes.

pub mod decode;
pub mod error;
pub mod parse;
pub mod types;

pub use decode::{decode_site_detail, decode_site_list, decode_total_count};
pub use error::SupplyError;
