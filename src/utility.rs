pub(crate) mod dms {
    /// Degrees per half turn
    pub const HD: i32 = 180;
    /// Degrees per turn
    pub const TD: i32 = 2 * HD;
}

pub(crate) trait GeoMath {
    fn eps_eq(&self, other: Self) -> bool;
    fn ang_normalize(&self) -> Self;
    fn remainder(&self, denom: Self) -> Self;
}

impl GeoMath for f64 {
    fn eps_eq(&self, other: f64) -> bool {
        (*self - other).abs() < f64::EPSILON
    }

    /// Reduce an angle in degrees to `[-180, 180]`, keeping the sign of the
    /// input on the boundary.
    fn ang_normalize(&self) -> f64 {
        let value = self.remainder(f64::from(dms::TD));
        let hd = f64::from(dms::HD);

        if value.abs().eps_eq(hd) {
            hd.copysign(*self)
        }
        else {
            value
        }
    }

    fn remainder(&self, denom: Self) -> Self {
        *self - (*self / denom).round() * denom
    }
}

#[cfg(test)]
mod tests {
    use super::GeoMath;

    #[test]
    fn normalizes_angles() {
        assert!((190_f64.ang_normalize() - -170.).abs() < 1e-12);
        assert!(((-190_f64).ang_normalize() - 170.).abs() < 1e-12);
        assert!((540_f64.ang_normalize() - 180.).abs() < 1e-12);
        assert!(((-540_f64).ang_normalize() - -180.).abs() < 1e-12);
        assert!((45_f64.ang_normalize() - 45.).abs() < 1e-12);
    }
}
