//! Percentage change between two closes and the alert trigger.

use crate::core::AlertError;

/// Direction of a price move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The price went up.
    Up,
    /// The price went down or did not move.
    Down,
}

impl Direction {
    /// Direction of a signed percent change. Zero counts as down.
    #[must_use]
    pub fn of(pct: f64) -> Self {
        if pct > 0.0 { Self::Up } else { Self::Down }
    }

    /// Marker shown in alert messages.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Up => "🔺",
            Self::Down => "🔻",
        }
    }
}

/// `((current / previous) - 1) * 100`.
///
/// Prices are not otherwise validated; negative values pass through.
///
/// # Errors
///
/// Returns `AlertError::ZeroPreviousPrice` when `previous` is zero.
pub fn percent_change(current: f64, previous: f64) -> Result<f64, AlertError> {
    if previous == 0.0 {
        return Err(AlertError::ZeroPreviousPrice);
    }
    Ok(((current / previous) - 1.0) * 100.0)
}

/// `true` when the magnitude of `pct` reaches `threshold`.
#[must_use]
pub fn exceeds_threshold(pct: f64, threshold: f64) -> bool {
    pct.abs() >= threshold
}

/// Whole-percent magnitude shown to users: `floor(|pct|)`.
#[must_use]
pub fn display_magnitude(pct: f64) -> u64 {
    // Saturating float-to-int cast; the value is already non-negative.
    pct.abs().floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn percent_change_up_and_down() {
        assert!(close(percent_change(105.0, 100.0).unwrap(), 5.0));
        assert!(close(percent_change(95.0, 100.0).unwrap(), -5.0));
        assert!(close(percent_change(100.0, 95.0).unwrap(), 5.263_157_894_736_842));
        assert!(close(percent_change(42.0, 42.0).unwrap(), 0.0));
    }

    #[test]
    fn zero_previous_price_is_an_arithmetic_error() {
        for current in [0.0, 1.0, -3.5, 1e9] {
            let err = percent_change(current, 0.0).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Arithmetic);
        }
        assert!(percent_change(1.0, -0.0).is_err());
    }

    #[test]
    fn negative_prices_pass_through() {
        assert!(close(percent_change(-10.0, -5.0).unwrap(), 100.0));
    }

    #[test]
    fn threshold_is_inclusive_on_magnitude() {
        assert!(exceeds_threshold(5.0, 5.0));
        assert!(!exceeds_threshold(4.999, 5.0));
        assert!(exceeds_threshold(-6.0, 5.0));
        assert!(!exceeds_threshold(-4.0, 5.0));
    }

    #[test]
    fn magnitude_truncates() {
        assert_eq!(display_magnitude(5.26), 5);
        assert_eq!(display_magnitude(-7.99), 7);
        assert_eq!(display_magnitude(0.4), 0);
    }

    #[test]
    fn direction_follows_sign() {
        assert_eq!(Direction::of(0.1), Direction::Up);
        assert_eq!(Direction::of(-0.1), Direction::Down);
        assert_eq!(Direction::of(0.0), Direction::Down);
        assert_eq!(Direction::Up.emoji(), "🔺");
        assert_eq!(Direction::Down.emoji(), "🔻");
    }
}
