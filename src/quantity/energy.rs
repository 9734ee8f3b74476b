use std::ops::Div;

quantity!(KilowattHours, f64, "kWh");

impl KilowattHours {
    pub const ZERO: Self = Self(0.0);

    /// Round to watt-hours for display.
    #[must_use]
    pub fn round_to_watt_hours(self) -> Self {
        Self((self.0 * 1000.0).round() / 1000.0)
    }
}

impl Div<f64> for KilowattHours {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_ordering() {
        assert!(KilowattHours(1.0) < KilowattHours(2.0));
        assert_eq!(KilowattHours(2.0).max(KilowattHours(1.0)), KilowattHours(2.0));
    }

    #[test]
    fn test_sum_and_average() {
        let total: KilowattHours = [1.0, 2.0, 4.5].into_iter().map(KilowattHours).sum();
        assert_abs_diff_eq!((total / 3.0).0, 2.5);
    }

    #[test]
    fn test_round_to_watt_hours() {
        assert_abs_diff_eq!(KilowattHours(1.234_56).round_to_watt_hours().0, 1.235);
    }

    #[test]
    fn test_display() {
        assert_eq!(KilowattHours(34.0).to_string(), "34 kWh");
        assert_eq!(format!("{:?}", KilowattHours(1.5)), "1.5kWh");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("12.5".parse::<KilowattHours>().unwrap(), KilowattHours(12.5));
    }
}
