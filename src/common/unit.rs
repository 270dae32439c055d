//! Unit conversion utilities.
//!
//! WordprocessingML measures page geometry and paragraph spacing in twips
//! (1/20 of a point), run sizes in half-points and border widths in eighths
//! of a point.

pub const TWIPS_PER_INCH: i32 = 1440;
pub const TWIPS_PER_POINT: i32 = 20;
pub const HALF_POINTS_PER_POINT: u32 = 2;
pub const EIGHTHS_PER_POINT: u32 = 8;

/// Convert inches to twips, rounding to the nearest twip.
#[inline]
pub fn inches_to_twips(inches: f64) -> i32 {
    (inches * TWIPS_PER_INCH as f64).round() as i32
}

/// Convert points to twips, rounding to the nearest twip.
#[inline]
pub fn points_to_twips(points: f64) -> i32 {
    (points * TWIPS_PER_POINT as f64).round() as i32
}

/// Convert a point size to the half-point value used by `w:sz`.
#[inline]
pub fn points_to_half_points(points: f64) -> u32 {
    (points * HALF_POINTS_PER_POINT as f64).round().max(0.0) as u32
}

/// Convert points to the eighths-of-a-point value used by border widths.
#[inline]
pub fn points_to_eighths(points: f64) -> u32 {
    (points * EIGHTHS_PER_POINT as f64).round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches() {
        assert_eq!(inches_to_twips(1.0), 1440);
        assert_eq!(inches_to_twips(0.5), 720);
        assert_eq!(inches_to_twips(8.5), 12240);
    }

    #[test]
    fn test_points() {
        assert_eq!(points_to_twips(12.0), 240);
        assert_eq!(points_to_half_points(11.0), 22);
        assert_eq!(points_to_half_points(10.5), 21);
        assert_eq!(points_to_eighths(0.5), 4);
    }

    #[test]
    fn test_negative_sizes_clamp_to_zero() {
        assert_eq!(points_to_half_points(-3.0), 0);
        assert_eq!(points_to_eighths(-1.0), 0);
    }
}
