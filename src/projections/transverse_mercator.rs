//! Transverse Mercator series after Hoffmann-Wellenhof, B., Lichtenegger, H.,
//! and Collins, J., *GPS: Theory and Practice*, 3rd ed. Springer-Verlag Wien,
//! 1994, chapter 10.
//!
//! All `x`/`y` values here are plain Transverse Mercator meters, i.e. with the
//! UTM false origin removed and the `k0` scale undone.

use lazy_static::lazy_static;

use crate::{constants::{MAJOR_RADIUS, MINOR_RADIUS}, latlon::LatLon};

lazy_static! {
    static ref WGS84: TransverseMercator = TransverseMercator::new(MAJOR_RADIUS, MINOR_RADIUS);
}

/// Meridian arc series coefficients (Eq. 10.17 forward, Eq. 10.22 inverse)
struct MeridianArc {
    alpha: f64,
    beta: f64,
    gamma: f64,
    delta: f64,
    epsilon: f64,
    alpha_: f64,
    beta_: f64,
    gamma_: f64,
    delta_: f64,
    epsilon_: f64,
}

impl MeridianArc {
    fn new(a: f64, b: f64) -> MeridianArc {
        // Eq. 10.18
        let n = (a - b) / (a + b);

        // Eq. 10.17, the inverse alpha_ is the same quantity
        let alpha = ((a + b) / 2.) * (1. + n.powi(2) / 4. + n.powi(4) / 64.);

        Self {
            alpha,
            beta: (-3. * n / 2.) + (9. * n.powi(3) / 16.) + (-3. * n.powi(5) / 32.),
            gamma: (15. * n.powi(2) / 16.) + (-15. * n.powi(4) / 32.),
            delta: (-35. * n.powi(3) / 48.) + (105. * n.powi(5) / 256.),
            epsilon: 315. * n.powi(4) / 512.,
            alpha_: alpha,
            beta_: (3. * n / 2.) + (-27. * n.powi(3) / 32.) + (269. * n.powi(5) / 512.),
            gamma_: (21. * n.powi(2) / 16.) + (-55. * n.powi(4) / 32.),
            delta_: (151. * n.powi(3) / 96.) + (-417. * n.powi(5) / 128.),
            epsilon_: 1097. * n.powi(4) / 512.,
        }
    }
}

pub(crate) struct TransverseMercator {
    a: f64,
    b: f64,
    /// Second eccentricity squared
    ep2: f64,
    arc: MeridianArc,
}

impl TransverseMercator {
    fn new(a: f64, b: f64) -> TransverseMercator {
        Self {
            a,
            b,
            ep2: (a.powi(2) - b.powi(2)) / b.powi(2),
            arc: MeridianArc::new(a, b),
        }
    }

    pub fn wgs84() -> &'static TransverseMercator {
        &WGS84
    }

    /// Ellipsoidal distance from the equator to latitude `phi` (radians),
    /// in meters.
    pub fn arc_length_of_meridian(&self, phi: f64) -> f64 {
        let arc = &self.arc;

        arc.alpha * (phi
            + arc.beta * (2. * phi).sin()
            + arc.gamma * (4. * phi).sin()
            + arc.delta * (6. * phi).sin()
            + arc.epsilon * (8. * phi).sin())
    }

    /// Footpoint latitude in radians for northing `y` in meters: the latitude
    /// whose meridian arc length equals `y`.
    pub fn footpoint_latitude(&self, y: f64) -> f64 {
        let arc = &self.arc;
        // Eq. 10.23
        let y_ = y / arc.alpha_;

        // Eq. 10.21
        y_ + arc.beta_ * (2. * y_).sin()
            + arc.gamma_ * (4. * y_).sin()
            + arc.delta_ * (6. * y_).sin()
            + arc.epsilon_ * (8. * y_).sin()
    }

    /// Inverse projection of `(x, y)` about the central meridian `lambda0`
    /// (radians). Inputs are not range checked.
    pub fn to_latlon(&self, lambda0: f64, x: f64, y: f64) -> LatLon {
        let phif = self.footpoint_latitude(y);

        let cf = phif.cos();
        let nuf2 = self.ep2 * cf.powi(2);

        let nf = self.a.powi(2) / (self.b * (1. + nuf2).sqrt());
        let mut nf_pow = nf;

        let tf = phif.tan();
        let tf2 = tf * tf;
        let tf4 = tf2 * tf2;

        // Fractional coefficients for x^n, the n-th one carries Nf^n
        let x1frac = 1. / (nf_pow * cf);

        nf_pow *= nf;
        let x2frac = tf / (2. * nf_pow);

        nf_pow *= nf;
        let x3frac = 1. / (6. * nf_pow * cf);

        nf_pow *= nf;
        let x4frac = tf / (24. * nf_pow);

        nf_pow *= nf;
        let x5frac = 1. / (120. * nf_pow * cf);

        nf_pow *= nf;
        let x6frac = tf / (720. * nf_pow);

        nf_pow *= nf;
        let x7frac = 1. / (5040. * nf_pow * cf);

        nf_pow *= nf;
        let x8frac = tf / (40320. * nf_pow);

        // x^1 has no polynomial coefficient
        let x2poly = -1. - nuf2;

        let x3poly = -1. - 2. * tf2 - nuf2;

        let x4poly = 5. + 3. * tf2 + 6. * nuf2 - 6. * tf2 * nuf2
            - 3. * (nuf2 * nuf2) - 9. * tf2 * (nuf2 * nuf2);

        let x5poly = 5. + 28. * tf2 + 24. * tf4 + 6. * nuf2 + 8. * tf2 * nuf2;

        let x6poly = -61. - 90. * tf2 - 45. * tf4 - 107. * nuf2 + 162. * tf2 * nuf2;

        let x7poly = -61. - 662. * tf2 - 1320. * tf4 - 720. * (tf4 * tf2);

        let x8poly = 1385. + 3633. * tf2 + 4095. * tf4 + 1575. * (tf4 * tf2);

        let lat = phif
            + x2frac * x2poly * (x * x)
            + x4frac * x4poly * x.powi(4)
            + x6frac * x6poly * x.powi(6)
            + x8frac * x8poly * x.powi(8);

        let lon = lambda0
            + x1frac * x
            + x3frac * x3poly * x.powi(3)
            + x5frac * x5poly * x.powi(5)
            + x7frac * x7poly * x.powi(7);

        LatLon::new(lat.to_degrees(), lon.to_degrees())
    }

    /// Forward projection of `(phi, lambda)` about `lambda0`, all in radians.
    /// Returns `(x, y)` in meters.
    pub fn latlon_to_tm(&self, lambda0: f64, phi: f64, lambda: f64) -> (f64, f64) {
        let cos_phi = phi.cos();
        let nu2 = self.ep2 * cos_phi.powi(2);
        let nu_n = self.a.powi(2) / (self.b * (1. + nu2).sqrt());

        let tan_phi = phi.tan();
        let t2 = tan_phi * tan_phi;

        let dl = lambda - lambda0;

        // dl^1 and dl^2 have unit coefficients
        let l3coef = 1. - t2 + nu2;
        let l4coef = 5. - t2 + 9. * nu2 + 4. * (nu2 * nu2);
        let l5coef = 5. - 18. * t2 + (t2 * t2) + 14. * nu2 - 58. * t2 * nu2;
        let l6coef = 61. - 58. * t2 + (t2 * t2) + 270. * nu2 - 330. * t2 * nu2;
        let l7coef = 61. - 479. * t2 + 179. * (t2 * t2) - (t2 * t2 * t2);
        let l8coef = 1385. - 3111. * t2 + 543. * (t2 * t2) - (t2 * t2 * t2);

        let x = nu_n * cos_phi * dl
            + (nu_n / 6. * cos_phi.powi(3) * l3coef * dl.powi(3))
            + (nu_n / 120. * cos_phi.powi(5) * l5coef * dl.powi(5))
            + (nu_n / 5040. * cos_phi.powi(7) * l7coef * dl.powi(7));

        let y = self.arc_length_of_meridian(phi)
            + (tan_phi / 2. * nu_n * cos_phi.powi(2) * dl.powi(2))
            + (tan_phi / 24. * nu_n * cos_phi.powi(4) * l4coef * dl.powi(4))
            + (tan_phi / 720. * nu_n * cos_phi.powi(6) * l6coef * dl.powi(6))
            + (tan_phi / 40320. * nu_n * cos_phi.powi(8) * l8coef * dl.powi(8));

        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::TransverseMercator;

    #[test]
    fn footpoint_of_equator_is_zero() {
        assert_abs_diff_eq!(TransverseMercator::wgs84().footpoint_latitude(0.), 0., epsilon = 1e-15);
    }

    #[test]
    fn footpoint_inverts_arc_length() {
        let tm = TransverseMercator::wgs84();

        for deg in [-80., -45.5, -12., 0.25, 30., 38.2, 60., 84.] {
            let phi = f64::to_radians(deg);
            let y = tm.arc_length_of_meridian(phi);

            assert_abs_diff_eq!(tm.footpoint_latitude(y), phi, epsilon = 1e-10);
        }
    }

    #[test]
    fn quarter_meridian_length() {
        // WGS84 quarter meridian is 10 001 965.729 m
        let tm = TransverseMercator::wgs84();
        let quarter = tm.arc_length_of_meridian(std::f64::consts::FRAC_PI_2);

        assert_abs_diff_eq!(quarter, 10_001_965.729, epsilon = 0.01);
    }

    #[test]
    fn central_meridian_maps_to_zero_easting() {
        let tm = TransverseMercator::wgs84();
        let lambda0 = f64::to_radians(-123.);
        let (x, y) = tm.latlon_to_tm(lambda0, f64::to_radians(37.5), lambda0);

        assert_abs_diff_eq!(x, 0., epsilon = 1e-9);
        assert_abs_diff_eq!(y, tm.arc_length_of_meridian(f64::to_radians(37.5)), epsilon = 1e-9);
    }
}
