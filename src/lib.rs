#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]
//! Conversion of WGS84 UTM coordinates to latitude/longitude using the
//! closed-form Transverse Mercator series of Hoffmann-Wellenhof et al.
//!
//! ```
//! use utmconv::{Hemisphere, LatLon};
//!
//! let site = LatLon::from_utm(Hemisphere::North, 10, 552_000.0, 4_180_000.0);
//!
//! assert!((site.latitude() - 37.766).abs() < 0.01);
//! assert!((site.longitude() - -122.410).abs() < 0.01);
//! ```

use thiserror::Error;

pub mod batch;
pub mod latlon;
pub mod utm;
pub(crate) mod utility;

pub use latlon::LatLon;
pub use utm::{Hemisphere, Utm};

pub(crate) mod projections {
    pub mod transverse_mercator;
}

pub(crate) mod constants;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Coordinate parameters are not valid: {0}")]
    InvalidCoord(String),
    #[error("UTM string is invalid: {0}")]
    InvalidUtmString(String),
    #[error("UTM coords are invalid: {0}")]
    InvalidUtmCoords(String),
    #[error("UTM zone {0} not in range [1, 60]")]
    InvalidZone(i32),
    #[error("Coordinate type {coord_type} not valid for conversion to {dest_type}: {msg}")]
    InvalidRange {
        coord_type: String,
        dest_type: String,
        msg: String,
    },
}

pub trait ParseCoord {
    /// Parses a coordinate from its [`Display`](std::fmt::Display) form.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the string is malformed or the coordinate is
    /// out of range.
    fn parse_coord(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

/// Parses any [`ParseCoord`] type.
///
/// # Errors
///
/// See [`ParseCoord::parse_coord`].
///
/// ```
/// use utmconv::{Utm, LatLon};
///
/// let utm: Utm = utmconv::from_str("10n 552000 4180000").unwrap();
/// assert_eq!(utm.zone(), 10);
///
/// let latlon: LatLon = utmconv::from_str("37.766 -122.404").unwrap();
/// assert_eq!(latlon.latitude(), 37.766);
/// ```
pub fn from_str<S, T>(value: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(value.as_ref())
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}
