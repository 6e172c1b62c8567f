// Semi-major axis a
pub(crate) const MAJOR_RADIUS: f64 = 6_378_137.;
// Semi-minor axis b
#[allow(clippy::unreadable_literal)]
pub(crate) const MINOR_RADIUS: f64 = 6_356_752.314;

// UTM central scale factor
pub(crate) const UTM_K0: f64 = 9996.0 / 10_000.;

pub(crate) const FALSE_EASTING: f64 = 500_000.;
// Added to northings south of the equator
pub(crate) const FALSE_NORTHING_SOUTH: f64 = 10_000_000.;
