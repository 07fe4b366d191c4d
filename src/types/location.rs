use haversine::{distance, Location as HaversineLocation, Units};
use std::fmt;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
/// Both values are represented as `f64`.
///
/// # Examples
///
/// ```
/// use soflo::LatLon;
///
/// let downtown_miami = LatLon(25.7743, -80.1937);
/// assert_eq!(downtown_miami.0, 25.7743); // Latitude
/// assert_eq!(downtown_miami.1, -80.1937); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    /// Great-circle distance to another point, in kilometers.
    pub fn distance_km(&self, other: LatLon) -> f64 {
        distance(
            HaversineLocation {
                latitude: self.0,
                longitude: self.1,
            },
            HaversineLocation {
                latitude: other.0,
                longitude: other.1,
            },
            Units::Kilometers,
        )
    }
}

/// One of the fixed geographic points for which weather history is fetched.
///
/// Each reference location owns its own independently fetched and cached
/// series of daily observations; the three share nothing but the
/// aggregation logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceLocation {
    /// West Palm Beach, reference point for Palm Beach County.
    WestPalmBeach,
    /// Fort Lauderdale, reference point for Broward County.
    FortLauderdale,
    /// City of Miami, reference point for Miami-Dade County.
    Miami,
}

impl ReferenceLocation {
    /// All reference locations, in north-to-south order.
    pub const ALL: [ReferenceLocation; 3] = [
        ReferenceLocation::WestPalmBeach,
        ReferenceLocation::FortLauderdale,
        ReferenceLocation::Miami,
    ];

    /// The coordinate the archive series is fetched for.
    pub fn coordinate(&self) -> LatLon {
        match self {
            ReferenceLocation::WestPalmBeach => LatLon(26.7153, -80.0534),
            ReferenceLocation::FortLauderdale => LatLon(26.1223, -80.1434),
            ReferenceLocation::Miami => LatLon(25.7743, -80.1937),
        }
    }

    /// The reference location closest to `point` by great-circle distance.
    ///
    /// # Examples
    ///
    /// ```
    /// use soflo::{LatLon, ReferenceLocation};
    ///
    /// // Boca Raton sits between the reference points; Fort Lauderdale wins.
    /// let nearest = ReferenceLocation::nearest(LatLon(26.3683, -80.1289));
    /// assert_eq!(nearest, ReferenceLocation::FortLauderdale);
    /// ```
    pub fn nearest(point: LatLon) -> ReferenceLocation {
        // Three candidates, a linear scan is all this needs.
        Self::ALL
            .into_iter()
            .min_by(|a, b| {
                point
                    .distance_km(a.coordinate())
                    .total_cmp(&point.distance_km(b.coordinate()))
            })
            .expect("ALL is non-empty")
    }

    pub(crate) fn cache_key(&self) -> &'static str {
        match self {
            ReferenceLocation::WestPalmBeach => "west-palm-beach",
            ReferenceLocation::FortLauderdale => "fort-lauderdale",
            ReferenceLocation::Miami => "miami",
        }
    }
}

/// A selectable South Florida county.
///
/// Each county maps to the reference location whose weather series stands
/// in for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum County {
    PalmBeach,
    Broward,
    MiamiDade,
}

impl County {
    pub const ALL: [County; 3] = [County::PalmBeach, County::Broward, County::MiamiDade];

    /// The display name the region API reports for this county.
    pub fn name(&self) -> &'static str {
        match self {
            County::PalmBeach => "Palm Beach County",
            County::Broward => "Broward County",
            County::MiamiDade => "Miami-Dade County",
        }
    }

    /// Resolves a region-API division name to a known county, if any.
    pub fn from_name(name: &str) -> Option<County> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// The reference point whose archive series represents this county.
    pub fn reference_location(&self) -> ReferenceLocation {
        match self {
            County::PalmBeach => ReferenceLocation::WestPalmBeach,
            County::Broward => ReferenceLocation::FortLauderdale,
            County::MiamiDade => ReferenceLocation::Miami,
        }
    }
}

impl From<County> for ReferenceLocation {
    fn from(county: County) -> Self {
        county.reference_location()
    }
}

impl fmt::Display for County {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for ReferenceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReferenceLocation::WestPalmBeach => "West Palm Beach",
            ReferenceLocation::FortLauderdale => "Fort Lauderdale",
            ReferenceLocation::Miami => "Miami",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_picks_each_reference_point_for_itself() {
        for location in ReferenceLocation::ALL {
            assert_eq!(ReferenceLocation::nearest(location.coordinate()), location);
        }
    }

    #[test]
    fn nearest_resolves_county_seats() {
        // Miami Beach city hall -> Miami.
        assert_eq!(
            ReferenceLocation::nearest(LatLon(25.7907, -80.1300)),
            ReferenceLocation::Miami
        );
        // Jupiter -> West Palm Beach.
        assert_eq!(
            ReferenceLocation::nearest(LatLon(26.9342, -80.0942)),
            ReferenceLocation::WestPalmBeach
        );
    }

    #[test]
    fn county_names_round_trip() {
        for county in County::ALL {
            assert_eq!(County::from_name(county.name()), Some(county));
        }
        assert_eq!(County::from_name("County Club Acres"), None);
    }

    #[test]
    fn counties_map_to_their_reference_city() {
        assert_eq!(
            County::PalmBeach.reference_location(),
            ReferenceLocation::WestPalmBeach
        );
        assert_eq!(
            County::Broward.reference_location(),
            ReferenceLocation::FortLauderdale
        );
        assert_eq!(
            County::MiamiDade.reference_location(),
            ReferenceLocation::Miami
        );
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_self() {
        let a = ReferenceLocation::Miami.coordinate();
        let b = ReferenceLocation::FortLauderdale.coordinate();
        assert!(a.distance_km(a) < 1e-9);
        assert!((a.distance_km(b) - b.distance_km(a)).abs() < 1e-9);
        // Miami to Fort Lauderdale is roughly 39 km.
        assert!(a.distance_km(b) > 30.0 && a.distance_km(b) < 50.0);
    }
}
