//! SPARQL JSON result decoding and coordinate parsing.

use crate::types::location::LatLon;
use log::warn;
use serde::Deserialize;

/// A named point of interest with its map coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Attraction {
    pub name: String,
    pub coordinate: LatLon,
}

/// Standard SPARQL 1.1 JSON results envelope, narrowed to the bindings the
/// attraction query selects.
#[derive(Debug, Deserialize)]
pub struct SparqlResponse {
    pub results: SparqlResults,
}

#[derive(Debug, Deserialize)]
pub struct SparqlResults {
    pub bindings: Vec<SparqlBinding>,
}

#[derive(Debug, Deserialize)]
pub struct SparqlBinding {
    #[serde(rename = "attractionLabel")]
    pub attraction_label: SparqlValue,
    pub gps: SparqlValue,
}

#[derive(Debug, Deserialize)]
pub struct SparqlValue {
    pub value: String,
}

impl SparqlResponse {
    /// Converts bindings to [`Attraction`]s.
    ///
    /// Bindings with a malformed coordinate literal are logged and skipped
    /// rather than failing the whole result set.
    pub fn into_attractions(self) -> Vec<Attraction> {
        self.results
            .bindings
            .into_iter()
            .filter_map(|binding| {
                let name = binding.attraction_label.value;
                match parse_wkt_point(&binding.gps.value) {
                    Some(coordinate) => Some(Attraction { name, coordinate }),
                    None => {
                        warn!(
                            "Invalid GPS coordinate format for attraction '{}': {}",
                            name, binding.gps.value
                        );
                        None
                    }
                }
            })
            .collect()
    }
}

/// Parses a WKT `Point(lon lat)` literal.
///
/// Note the order: WKT puts longitude first, [`LatLon`] puts latitude first.
pub fn parse_wkt_point(wkt: &str) -> Option<LatLon> {
    let inner = wkt.strip_prefix("Point(")?.strip_suffix(')')?;
    let mut parts = inner.split_whitespace();
    let lon: f64 = parts.next()?.parse().ok()?;
    let lat: f64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(LatLon(lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wkt_points_with_swapped_axis_order() {
        let point = parse_wkt_point("Point(-80.0534 26.7153)").unwrap();
        assert_eq!(point, LatLon(26.7153, -80.0534));
    }

    #[test]
    fn rejects_malformed_wkt() {
        for wkt in [
            "Point(-80.0534)",
            "Point(-80.0534 26.7153 3.0)",
            "POINT(-80 26)",
            "-80.0534 26.7153",
            "Point(abc def)",
            "",
        ] {
            assert_eq!(parse_wkt_point(wkt), None, "accepted {wkt:?}");
        }
    }

    #[test]
    fn decodes_sparql_bindings_and_skips_bad_points() {
        let json = r#"{
            "results": {
                "bindings": [
                    {
                        "attractionLabel": {"type": "literal", "value": "Norton Museum of Art"},
                        "gps": {"type": "literal", "value": "Point(-80.056 26.7045)"}
                    },
                    {
                        "attractionLabel": {"type": "literal", "value": "Broken"},
                        "gps": {"type": "literal", "value": "not a point"}
                    }
                ]
            }
        }"#;
        let response: SparqlResponse = serde_json::from_str(json).unwrap();
        let attractions = response.into_attractions();
        assert_eq!(attractions.len(), 1);
        assert_eq!(attractions[0].name, "Norton Museum of Art");
        assert_eq!(attractions[0].coordinate, LatLon(26.7045, -80.056));
    }

    #[test]
    fn empty_bindings_decode_to_no_attractions() {
        let response: SparqlResponse =
            serde_json::from_str(r#"{"results": {"bindings": []}}"#).unwrap();
        assert!(response.into_attractions().is_empty());
    }
}
