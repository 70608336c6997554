//! Navigation addressing for the `(state, place)` identity.
//!
//! # Responsibility
//! - Render detail routes with percent-encoded state and place segments.
//! - Decode route segments back to the exact strings used as catalog keys.
//!
//! # Invariants
//! - `decode_segment(encode_segment(s)) == s` for every string, so a place
//!   shown in a listing is resolvable by the detail lookup.
//! - Decoded strings are handed to the catalog verbatim; no normalization
//!   happens here or in the lookup.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Escape set of JS `encodeURIComponent`: alphanumerics and
/// `- _ . ! ~ * ' ( )` stay literal, everything else is percent-escaped.
/// The bundled dataset was addressed by a JS router; matching its escape set
/// keeps previously shared links resolving to the same keys.
const SEGMENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const PLACE_ROUTE_PREFIX: &str = "/place/";

pub type RouteResult<T> = Result<T, RouteError>;

/// Route decoding error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The route does not address a known page shape.
    UnknownRoute(String),
    /// A `%` escape is truncated or not followed by two hex digits.
    MalformedEscape { segment: String },
    /// Escapes decoded to bytes that are not valid UTF-8.
    InvalidUtf8 { segment: String },
}

impl Display for RouteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownRoute(route) => write!(f, "unknown route `{route}`"),
            Self::MalformedEscape { segment } => {
                write!(f, "malformed percent escape in `{segment}`")
            }
            Self::InvalidUtf8 { segment } => {
                write!(f, "segment `{segment}` does not decode to UTF-8")
            }
        }
    }
}

impl Error for RouteError {}

/// Percent-encodes one route segment.
pub fn encode_segment(raw: &str) -> String {
    utf8_percent_encode(raw, SEGMENT_SET).to_string()
}

/// Decodes one route segment to the exact catalog key string.
pub fn decode_segment(segment: &str) -> RouteResult<String> {
    check_escapes(segment)?;
    percent_decode_str(segment)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| RouteError::InvalidUtf8 {
            segment: segment.to_string(),
        })
}

/// Renders the detail route for one `(state, place)` identity.
pub fn place_route(state: &str, place: &str) -> String {
    format!(
        "{PLACE_ROUTE_PREFIX}{}/{}",
        encode_segment(state),
        encode_segment(place)
    )
}

/// Parses a detail route back into its `(state, place)` identity.
///
/// Exact inverse of [`place_route`]; anything else is [`RouteError`].
pub fn parse_place_route(route: &str) -> RouteResult<(String, String)> {
    let rest = route
        .strip_prefix(PLACE_ROUTE_PREFIX)
        .ok_or_else(|| RouteError::UnknownRoute(route.to_string()))?;

    let (state_segment, place_segment) = match rest.split_once('/') {
        Some((state, place)) if !state.is_empty() && !place.is_empty() && !place.contains('/') => {
            (state, place)
        }
        _ => return Err(RouteError::UnknownRoute(route.to_string())),
    };

    Ok((decode_segment(state_segment)?, decode_segment(place_segment)?))
}

/// Rejects truncated or non-hex `%` escapes.
///
/// The decoder itself passes malformed escapes through literally; the JS
/// router this mirrors throws instead, and silently keeping a stray `%`
/// would produce a key that never existed in any listing.
fn check_escapes(segment: &str) -> RouteResult<()> {
    let bytes = segment.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                return Err(RouteError::MalformedEscape {
                    segment: segment.to_string(),
                });
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{decode_segment, encode_segment, parse_place_route, place_route, RouteError};

    #[test]
    fn encoding_matches_the_js_unreserved_set() {
        assert_eq!(encode_segment("Hawa Mahal"), "Hawa%20Mahal");
        assert_eq!(encode_segment("Fort & Sea"), "Fort%20%26%20Sea");
        assert_eq!(encode_segment("A-Z_a.z!~*'()"), "A-Z_a.z!~*'()");
        assert_eq!(encode_segment("Café"), "Caf%C3%A9");
    }

    #[test]
    fn decode_round_trips_awkward_names() {
        for raw in ["Jammu & Kashmir", "Baga/Calangute", "100% Waterfall", "Café"] {
            assert_eq!(decode_segment(&encode_segment(raw)).unwrap(), raw);
        }
    }

    #[test]
    fn truncated_escape_is_rejected() {
        assert_eq!(
            decode_segment("Hawa%2"),
            Err(RouteError::MalformedEscape {
                segment: "Hawa%2".to_string()
            })
        );
        assert!(matches!(
            decode_segment("Hawa%GZ"),
            Err(RouteError::MalformedEscape { .. })
        ));
    }

    #[test]
    fn non_utf8_escapes_are_rejected() {
        assert!(matches!(
            decode_segment("%FF%FE"),
            Err(RouteError::InvalidUtf8 { .. })
        ));
    }

    #[test]
    fn place_route_round_trips_the_identity() {
        let route = place_route("Jammu & Kashmir", "Dal Lake / Shikara");
        assert_eq!(
            parse_place_route(&route).unwrap(),
            (
                "Jammu & Kashmir".to_string(),
                "Dal Lake / Shikara".to_string()
            )
        );
    }

    #[test]
    fn foreign_routes_are_rejected() {
        for route in ["/state/Kerala", "/place/OnlyState", "/place/a/b/c", "/place//x"] {
            assert!(matches!(
                parse_place_route(route),
                Err(RouteError::UnknownRoute(_))
            ));
        }
    }
}
