use std::fmt::Display;

use crate::{
    constants::{FALSE_EASTING, FALSE_NORTHING_SOUTH, UTM_K0},
    latlon::LatLon,
    projections::transverse_mercator::TransverseMercator,
    utility::{dms, GeoMath},
    Error, ParseCoord, ThisOrThat,
};

pub mod zonespec {
    pub const MINUTMZONE: i32 = 1;
    pub const MAXUTMZONE: i32 = 60;
}

// Band limits in meters, indexed by `Hemisphere::index`. One 100km square of
// slop on either side, the same allowance MGRS makes.
const MIN_EASTING: [f64; 2] = [0., 0.];
const MAX_EASTING: [f64; 2] = [1_000_000., 1_000_000.];
const MIN_NORTHING: [f64; 2] = [900_000., -100_000.];
const MAX_NORTHING: [f64; 2] = [10_100_000., 9_600_000.];

// Latitudes covered by UTM, beyond these lies UPS
const MIN_UTM_LAT: f64 = -80.;
const MAX_UTM_LAT: f64 = 84.;

/// Which side of the equator a UTM coordinate's northing is measured from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    /// Hemisphere of a latitude in degrees. Zero counts as north, negative
    /// zero as south.
    ///
    /// ```
    /// use utmconv::Hemisphere;
    ///
    /// assert_eq!(Hemisphere::from_latitude(37.0), Hemisphere::North);
    /// assert_eq!(Hemisphere::from_latitude(-0.5), Hemisphere::South);
    /// ```
    pub fn from_latitude(lat: f64) -> Hemisphere {
        lat.is_sign_positive().ternary(Hemisphere::North, Hemisphere::South)
    }

    pub fn is_north(self) -> bool {
        self == Hemisphere::North
    }

    fn index(self) -> usize {
        self.is_north().ternary(1, 0)
    }
}

impl Display for Hemisphere {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.is_north().ternary('n', 's'))
    }
}

/// Representation of a WGS84
/// [UTM](https://en.wikipedia.org/wiki/Universal_Transverse_Mercator_coordinate_system)
/// point: zone, hemisphere, and easting/northing in meters, including the
/// 500km false easting and, in the south, the 10 000km false northing.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Utm {
    pub(crate) zone: i32,
    #[cfg_attr(feature = "serde", serde(alias = "hemi"))]
    pub(crate) hemisphere: Hemisphere,
    pub(crate) easting: f64,
    pub(crate) northing: f64,
}

impl Utm {
    /// Builds a UTM point without checking it. Conversion of an unchecked
    /// point still computes, see [`LatLon::from_utm`].
    pub fn new(zone: i32, hemisphere: Hemisphere, easting: f64, northing: f64) -> Utm {
        Self {
            zone,
            hemisphere,
            easting,
            northing,
        }
    }

    /// Tries to create a UTM point from its constituent parts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZone`] if the zone is outside the range `[1, 60]`.
    /// Returns [`Error::InvalidUtmCoords`] if the easting or northing is outside
    /// the UTM band for the hemisphere.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconv::{Hemisphere, Utm};
    ///
    /// let coord = Utm::create(18, Hemisphere::North, 585664.121, 4511315.422);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.zone(), 18);
    /// assert!(coord.is_north());
    ///
    /// let invalid_zone = Utm::create(0, Hemisphere::North, 585664.121, 4511315.422);
    /// assert!(invalid_zone.is_err());
    ///
    /// let invalid_northing = Utm::create(18, Hemisphere::South, 585664.121, 100.0);
    /// assert!(invalid_northing.is_err());
    /// ```
    pub fn create(zone: i32, hemisphere: Hemisphere, easting: f64, northing: f64) -> Result<Utm, Error> {
        if !(zonespec::MINUTMZONE..=zonespec::MAXUTMZONE).contains(&zone) {
            return Err(Error::InvalidZone(zone));
        }

        check_coords(hemisphere, easting, northing)?;

        Ok(Utm::new(zone, hemisphere, easting, northing))
    }

    pub fn zone(&self) -> i32 {
        self.zone
    }

    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    pub fn is_north(&self) -> bool {
        self.hemisphere.is_north()
    }

    pub fn easting(&self) -> f64 {
        self.easting
    }

    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Converts to [`LatLon`].
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconv::{Hemisphere, LatLon, Utm};
    ///
    /// let coord = LatLon::create(40.748333, -73.985278).unwrap();
    /// let coord_utm = Utm::create(18, Hemisphere::North, 585664.121, 4511315.422).unwrap();
    ///
    /// let converted = coord_utm.to_latlon();
    ///
    /// assert!((converted.latitude() - coord.latitude()).abs() < 1e-6);
    /// assert!((converted.longitude() - coord.longitude()).abs() < 1e-6);
    /// ```
    pub fn to_latlon(&self) -> LatLon {
        LatLon::from_utm(self.hemisphere, self.zone, self.easting, self.northing)
    }

    /// Converts from [`LatLon`] in the standard zone for that position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if the latitude is outside `[-80, 84)`,
    /// where UPS applies instead of UTM.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconv::{LatLon, Utm};
    ///
    /// let coord = LatLon::create(40.748333, -73.985278).unwrap();
    /// let converted = Utm::from_latlon(&coord).unwrap();
    ///
    /// assert_eq!(converted.zone(), 18);
    /// assert!(converted.is_north());
    /// assert!((converted.easting() - 585664.121).abs() < 1e-2);
    /// assert!((converted.northing() - 4511315.422).abs() < 1e-2);
    /// ```
    pub fn from_latlon(value: &LatLon) -> Result<Utm, Error> {
        let zone = standard_zone(value.latitude, value.longitude)
            .ok_or_else(|| Error::InvalidRange {
                coord_type: "LatLon".to_string(),
                dest_type: "Utm".to_string(),
                msg: format!(
                    "Latitude {} not in UTM range [{MIN_UTM_LAT}, {MAX_UTM_LAT})",
                    value.latitude,
                ),
            })?;

        Ok(Utm::from_latlon_in_zone(value, zone))
    }

    /// Converts from [`LatLon`] projecting onto a chosen zone, which need not
    /// be the zone the point lies in. Survey data often keeps a whole site in
    /// one zone across a boundary.
    pub fn from_latlon_in_zone(value: &LatLon, zone: i32) -> Utm {
        let hemisphere = Hemisphere::from_latitude(value.latitude);
        let lambda0 = central_meridian(zone).to_radians();

        let (x, y) = TransverseMercator::wgs84().latlon_to_tm(
            lambda0,
            value.latitude.to_radians(),
            value.longitude.to_radians(),
        );

        let easting = x * UTM_K0 + FALSE_EASTING;
        let mut northing = y * UTM_K0;
        if hemisphere == Hemisphere::South {
            northing += FALSE_NORTHING_SOUTH;
        }

        Utm {
            zone,
            hemisphere,
            easting,
            northing,
        }
    }
}

/// Central meridian of a UTM zone, in degrees. Zone 1 is centered on -177 and
/// each zone is 6 degrees wide. Zones outside `[1, 60]` are extrapolated with
/// the same formula.
///
/// ```
/// use utmconv::utm::central_meridian;
///
/// assert_eq!(central_meridian(1), -177.0);
/// assert_eq!(central_meridian(10), -123.0);
/// assert_eq!(central_meridian(60), 177.0);
/// ```
pub fn central_meridian(zone: i32) -> f64 {
    6.0 * f64::from(zone) - 183.
}

/// Removes the false origin and the `k0` scale from a UTM easting/northing,
/// giving plain Transverse Mercator meters.
pub(crate) fn adjust(hemisphere: Hemisphere, easting: f64, northing: f64) -> (f64, f64) {
    let x = (easting - FALSE_EASTING) / UTM_K0;

    let mut y = northing;
    if hemisphere == Hemisphere::South {
        y -= FALSE_NORTHING_SOUTH;
    }
    y /= UTM_K0;

    (x, y)
}

pub(crate) fn to_latitude_band(lat: f64) -> i32 {
    #[allow(clippy::cast_possible_truncation)]
    let lat_int = lat.floor() as i32;
    (-10).max(9.min((lat_int + 80) / 8 - 10))
}

// Standard UTM zone for a lat/lon, or None in the polar (UPS) regions.
fn standard_zone(lat: f64, lon: f64) -> Option<i32> {
    if !(MIN_UTM_LAT..MAX_UTM_LAT).contains(&lat) {
        return None;
    }

    #[allow(clippy::cast_possible_truncation)]
    let mut lon_int = lon.ang_normalize().floor() as i32;
    if lon_int == dms::HD {
        lon_int = -dms::HD;
    }

    let mut zone = (lon_int + 186) / 6;
    let band = to_latitude_band(lat);
    // The Norway exception
    if band == 7 && zone == 31 && lon_int >= 3 {
        zone = 32;
    }
    // The Svalbard exception
    else if band == 9 && (0..42).contains(&lon_int) {
        zone = 2 * ((lon_int + 183) / 12) + 1;
    }

    Some(zone)
}

pub(crate) fn check_coords(hemisphere: Hemisphere, x: f64, y: f64) -> Result<(), Error> {
    let ind = hemisphere.index();

    if !(MIN_EASTING[ind]..=MAX_EASTING[ind]).contains(&x) {
        return Err(Error::InvalidUtmCoords(
            format!(
                "Easting {:.2}km not in UTM range for {} hemisphere [{:.2}km, {:.2}km]",
                x / 1000.0,
                hemisphere.is_north().ternary("N", "S"),
                MIN_EASTING[ind] / 1000.0,
                MAX_EASTING[ind] / 1000.0,
            )
        ));
    }

    if !(MIN_NORTHING[ind]..=MAX_NORTHING[ind]).contains(&y) {
        return Err(Error::InvalidUtmCoords(
            format!(
                "Northing {:.2}km not in UTM range for {} hemisphere [{:.2}km, {:.2}km]",
                y / 1000.0,
                hemisphere.is_north().ternary("N", "S"),
                MIN_NORTHING[ind] / 1000.0,
                MAX_NORTHING[ind] / 1000.0,
            )
        ));
    }

    Ok(())
}

impl ParseCoord for Utm {
    /// Parses `"{zone}{hemisphere} {easting} {northing}"`, e.g.
    /// `"10n 552000 4180000"`. The hemisphere letter is case insensitive.
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let invalid = |msg: &str| Error::InvalidUtmString(format!("{value:?}: {msg}"));

        let mut pieces = value.split_whitespace();
        let (Some(zone_hemi), Some(easting), Some(northing), None) =
            (pieces.next(), pieces.next(), pieces.next(), pieces.next())
        else {
            return Err(invalid("expected zone+hemisphere, easting and northing"));
        };

        let mut chars = zone_hemi.chars();
        let hemisphere = match chars.next_back() {
            Some('n' | 'N') => Hemisphere::North,
            Some('s' | 'S') => Hemisphere::South,
            _ => return Err(invalid("hemisphere must be one of N, S")),
        };

        let zone = chars.as_str().parse::<i32>()
            .map_err(|_| invalid("zone is not an integer"))?;
        let easting = easting.parse::<f64>()
            .map_err(|_| invalid("easting is not a number"))?;
        let northing = northing.parse::<f64>()
            .map_err(|_| invalid("northing is not a number"))?;

        Utm::create(zone, hemisphere, easting, northing)
    }
}

impl Display for Utm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{} {} {}",
            self.zone,
            self.hemisphere,
            self.easting,
            self.northing
        )
    }
}
