use std::fmt::Display;

use tracing::debug;

use crate::{
    projections::transverse_mercator::TransverseMercator,
    utm::{self, central_meridian, zonespec, Hemisphere, Utm},
    Error, ParseCoord,
};

/// Mean radius of Earth in meters
///
/// <https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius>
const EARTH_MEAN_RADIUS_M: f64 = 6371.0088 * 1000.0;

/// Representation of a WGS84 Latitude/Longitude point, in degrees. Can be
/// converted to/from [`Utm`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLon {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
}

impl LatLon {
    /// Internal-only constructor that doesn't check the bounds of lat/lon
    pub(crate) fn new(lat: f64, lon: f64) -> LatLon {
        Self {
            latitude: lat,
            longitude: lon,
        }
    }

    /// Tries to create a latitude/longitude point from a lat/lon pair. First checks if the
    /// values are valid:
    /// * Latitude must be in range [-90,90]
    /// * Longitude must be in range [-180,180)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either latitude or longitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconv::LatLon;
    ///
    /// let coord = LatLon::create(37.766, -122.476);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.latitude(), 37.766);
    /// assert_eq!(coord.longitude(), -122.476);
    ///
    /// let invalid_coord_lat = LatLon::create(100.0, 0.0);
    /// assert!(invalid_coord_lat.is_err());
    ///
    /// let invalid_coord_lon = LatLon::create(0.0, -200.0);
    /// assert!(invalid_coord_lon.is_err());
    /// ```
    pub fn create(lat: f64, lon: f64) -> Result<LatLon, Error> {
        if !(-90_f64..=90_f64).contains(&lat) {
            Err(Error::InvalidCoord(format!("Latitude {lat} outside of valid range [-90, 90].")))
        } else if !(-180_f64..180_f64).contains(&lon) {
            Err(Error::InvalidCoord(format!("Longitude {lon} outside of valid range [-180, 180).")))
        } else {
            Ok(LatLon::new(lat, lon))
        }
    }

    /// Converts UTM coordinates into latitude and longitude.
    ///
    /// Nothing is validated: a zone outside `[1, 60]` extrapolates the central
    /// meridian (`6 * zone - 183` degrees), and any finite easting/northing
    /// produces a result, physically meaningful or not. NaN and infinities
    /// propagate. Use [`Utm::create`] first for a checked conversion.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconv::{Hemisphere, LatLon};
    ///
    /// let coord = LatLon::from_utm(Hemisphere::North, 10, 500000.0, 0.0);
    ///
    /// assert!(coord.latitude().abs() < 1e-12);
    /// assert!((coord.longitude() - -123.0).abs() < 1e-12);
    /// ```
    pub fn from_utm(hemisphere: Hemisphere, zone: i32, easting: f64, northing: f64) -> LatLon {
        if !(zonespec::MINUTMZONE..=zonespec::MAXUTMZONE).contains(&zone) {
            debug!(zone, "UTM zone outside [1, 60], extrapolating central meridian");
        }

        let (x, y) = utm::adjust(hemisphere, easting, northing);
        let lambda0 = central_meridian(zone).to_radians();

        TransverseMercator::wgs84().to_latlon(lambda0, x, y)
    }

    /// Returns the latitude value.
    ///
    /// # Example
    /// ```
    /// use utmconv::LatLon;
    ///
    /// let coord = LatLon::create(37.766, -122.476).unwrap();
    /// assert_eq!(coord.latitude(), 37.766);
    /// ```
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude value.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn is_north(&self) -> bool {
        self.latitude.is_sign_positive()
    }

    /// Returns the distance in meters between two [`LatLon`] points
    /// using the [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).
    /// Uses the [mean radius of the Earth](https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius)
    /// in the calculation: `6371.0088`
    pub fn haversine(&self, other: &LatLon) -> f64 {
        let lat1_r = self.latitude.to_radians();
        let lat2_r = other.latitude.to_radians();

        2.0 * EARTH_MEAN_RADIUS_M * (
            ((other.latitude - self.latitude).to_radians() / 2.0).sin().powi(2) +
            lat1_r.cos() * lat2_r.cos() *
            ((other.longitude - self.longitude).to_radians() / 2.0).sin().powi(2)
        ).sqrt().asin()
    }

    /// Converts from [`LatLon`] to [`Utm`] in the standard zone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] for polar latitudes, see [`Utm::from_latlon`].
    pub fn to_utm(&self) -> Result<Utm, Error> {
        Utm::from_latlon(self)
    }
}

impl ParseCoord for LatLon {
    /// Parses `"{latitude} {longitude}"` in decimal degrees, the format
    /// [`Display`] writes.
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let mut pieces = value.split_whitespace();

        let (Some(lat), Some(lon), None) = (pieces.next(), pieces.next(), pieces.next()) else {
            return Err(Error::InvalidCoord(format!("{value:?}: expected latitude and longitude")));
        };

        let lat = lat.parse::<f64>()
            .map_err(|_| Error::InvalidCoord(format!("{value:?}: latitude is not a number")))?;
        let lon = lon.parse::<f64>()
            .map_err(|_| Error::InvalidCoord(format!("{value:?}: longitude is not a number")))?;

        LatLon::create(lat, lon)
    }
}

impl Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(
            f,
            "{lat} {lon}",
        )
    }
}
