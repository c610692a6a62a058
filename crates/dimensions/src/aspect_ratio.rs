//! Aspect-ratio labeling.
//!
//! Turns a width/height pair into the label shown under the size inputs of
//! the dimension dialog. Common ratios get their conventional name, small
//! reduced pairs are printed as-is and everything else falls back to a
//! decimal `"N.NN:1"` form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label shown once the user has typed a size by hand.
pub const CUSTOM_LABEL: &str = "Custom";

/// Absolute tolerance used when comparing a reduced ratio to [`NAMED_RATIOS`].
pub const RATIO_TOLERANCE: f64 = 0.01;

/// Named ratios as `(width, height, label)`.
///
/// Checked in order and the first match wins.
pub const NAMED_RATIOS: &[(u32, u32, &str)] = &[
    (16, 9, "16:9"),
    (4, 3, "4:3"),
    (3, 2, "3:2"),
    (9, 16, "9:16"),
    (2, 1, "2:1"),
];

/// Largest reduced term still printed as an integer pair.
const MAX_SMALL_TERM: u32 = 20;

/// Greatest common divisor (Euclid).
///
/// `gcd(a, 0) == a`, so `gcd(0, 0) == 0`.
///
/// # Example
/// ```
/// use canvas_dimensions::gcd;
///
/// assert_eq!(gcd(1920, 1080), 120);
/// assert_eq!(gcd(7, 0), 7);
/// ```
pub fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 { a } else { gcd(b, a % b) }
}

/// A width/height ratio reduced to lowest terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AspectRatio {
    /// Reduced width term
    pub width: u32,
    /// Reduced height term
    pub height: u32,
}

impl AspectRatio {
    /// Reduces `width:height` by their greatest common divisor.
    ///
    /// A `0:0` pair stays `0:0`.
    pub fn reduce(width: u32, height: u32) -> Self {
        match gcd(width, height) {
            0 => Self { width, height },
            g => Self {
                width: width / g,
                height: height / g,
            },
        }
    }

    /// Decimal value `width / height`.
    #[inline]
    pub fn as_f64(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Conventional name of this ratio, if it is one of [`NAMED_RATIOS`].
    pub fn named(&self) -> Option<&'static str> {
        let value = self.as_f64();
        NAMED_RATIOS
            .iter()
            .find(|(w, h, _)| (value - f64::from(*w) / f64::from(*h)).abs() < RATIO_TOLERANCE)
            .map(|(_, _, label)| *label)
    }

    /// True when both reduced terms are small enough to print as a pair.
    #[inline]
    pub fn is_small(&self) -> bool {
        self.width <= MAX_SMALL_TERM && self.height <= MAX_SMALL_TERM
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

/// Classify a width/height pair into a human-readable ratio label.
///
/// `height` must be positive. The dimension controller never hands a zero
/// side to this function; a zero height yields a meaningless label rather
/// than a panic.
///
/// # Example
/// ```
/// use canvas_dimensions::classify;
///
/// assert_eq!(classify(1920, 1080), "16:9");
/// assert_eq!(classify(1050, 600), "7:4");
/// assert_eq!(classify(2480, 3508), "0.71:1");
/// ```
pub fn classify(width: u32, height: u32) -> String {
    if width == height {
        return "1:1".to_string();
    }

    let ratio = AspectRatio::reduce(width, height);

    if let Some(label) = ratio.named() {
        return label.to_string();
    }

    if ratio.is_small() {
        return ratio.to_string();
    }

    format!("{:.2}:1", f64::from(width) / f64::from(height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(1920, 1080), 120);
        assert_eq!(gcd(1080, 1920), 120);
        assert_eq!(gcd(2480, 3508), 4);
        assert_eq!(gcd(13, 7), 1);
        assert_eq!(gcd(5, 0), 5);
        assert_eq!(gcd(0, 5), 5);
    }

    #[test]
    fn test_named_ratios() {
        assert_eq!(classify(1920, 1080), "16:9");
        assert_eq!(classify(1600, 1200), "4:3");
        assert_eq!(classify(1500, 1000), "3:2");
        assert_eq!(classify(1080, 1920), "9:16");
        assert_eq!(classify(2000, 1000), "2:1");
    }

    #[test]
    fn test_square() {
        assert_eq!(classify(1080, 1080), "1:1");
        assert_eq!(classify(1, 1), "1:1");
    }

    #[test]
    fn test_small_reduced_pair() {
        // 1050x600 reduces to 7:4, which is not a named ratio
        assert_eq!(classify(1050, 600), "7:4");
        assert_eq!(classify(1080, 1350), "4:5");
        assert_eq!(classify(1000, 1500), "2:3");
    }

    #[test]
    fn test_decimal_fallback() {
        // A4 at 300 DPI: 620:877 after reduction
        assert_eq!(classify(2480, 3508), "0.71:1");
        assert_eq!(classify(3508, 2480), "1.41:1");
        assert_eq!(classify(820, 312), "2.63:1");
    }

    #[test]
    fn test_near_named_ratio_within_tolerance() {
        // 1366x768 is 683:384, ~1.7786, inside the 16:9 tolerance
        assert_eq!(classify(1366, 768), "16:9");
        // 1200x627 is ~1.914, outside every tolerance, and 400:209 is not small
        assert_eq!(classify(1200, 627), "1.91:1");
    }

    #[test]
    fn test_scale_invariance_examples() {
        assert_eq!(classify(16 * 7, 9 * 7), classify(16, 9));
        assert_eq!(classify(2480 * 3, 3508 * 3), classify(2480, 3508));
        assert_eq!(classify(7 * 150, 4 * 150), "7:4");
    }

    #[test]
    fn test_zero_height_does_not_panic() {
        assert_eq!(classify(0, 0), "1:1");
        let _ = classify(1920, 0);
    }

    #[test]
    fn test_reduce_and_display() {
        let ratio = AspectRatio::reduce(1920, 1080);
        assert_eq!(ratio, AspectRatio { width: 16, height: 9 });
        assert_eq!(ratio.to_string(), "16:9");
        assert_eq!(ratio.named(), Some("16:9"));
        assert!(ratio.is_small());
        assert_eq!(AspectRatio::reduce(0, 0), AspectRatio { width: 0, height: 0 });
    }

    proptest! {
        #[test]
        fn prop_square_is_one_to_one(w in 1u32..100_000) {
            prop_assert_eq!(classify(w, w), "1:1");
        }

        #[test]
        fn prop_scale_invariant(w in 1u32..2_000, h in 1u32..2_000, k in 1u32..50) {
            prop_assert_eq!(classify(w * k, h * k), classify(w, h));
        }

        #[test]
        fn prop_deterministic(w in 1u32..100_000, h in 1u32..100_000) {
            prop_assert_eq!(classify(w, h), classify(w, h));
        }

        #[test]
        fn prop_label_shape(w in 1u32..100_000, h in 1u32..100_000) {
            let label = classify(w, h);
            prop_assert_eq!(label.matches(':').count(), 1);
        }
    }
}
