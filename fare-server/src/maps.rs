//! Google Maps directions URL generation.
//!
//! Each leg links out to Google Maps so the rider can see the segment on a
//! map. We only have place names (no coordinates), so the link asks Maps to
//! route between the names.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Base URL of the Maps directions endpoint.
const DIRECTIONS_BASE_URL: &str = "https://www.google.com/maps/dir/";

/// Characters left unescaped: RFC 3986 unreserved characters plus `/`.
const NAME_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// Generate a directions URL between two named places.
///
/// # Example
///
/// ```
/// use fare_server::maps::directions_url;
///
/// let url = directions_url("Oxford Circus", "Bond Street", "tube");
/// assert_eq!(
///     url,
///     "https://www.google.com/maps/dir/?api=1&origin=Oxford%20Circus&destination=Bond%20Street&travelmode=tube"
/// );
/// ```
pub fn directions_url(origin: &str, destination: &str, travel_mode: &str) -> String {
    format!(
        "{}?api=1&origin={}&destination={}&travelmode={}",
        DIRECTIONS_BASE_URL,
        utf8_percent_encode(origin, NAME_ENCODE_SET),
        utf8_percent_encode(destination, NAME_ENCODE_SET),
        utf8_percent_encode(travel_mode, NAME_ENCODE_SET),
    )
}
