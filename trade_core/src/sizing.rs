//! # Sizing and Rounding Helpers
//!
//! Shared numeric plumbing for every calculator: standard-size bucket
//! selection and fixed-precision rounding.
//!
//! ## Bucket selection policy
//!
//! Standard-size tables (boiler outputs, cylinder volumes, fan ratings) are
//! sorted ascending. Selection is a forward scan returning the first entry
//! whose capacity is greater than or equal to the computed demand. When no
//! entry qualifies the largest entry is returned; callers that need to flag
//! an out-of-range demand compare the demand against the last table entry.

/// Select the smallest table entry `>=` demand, falling back to the largest.
///
/// The table must be non-empty and sorted ascending.
///
/// ```rust
/// use trade_core::sizing::smallest_at_least;
///
/// let outputs = [24.0, 30.0, 35.0];
/// assert_eq!(smallest_at_least(&outputs, 26.0), 30.0);
/// assert_eq!(smallest_at_least(&outputs, 50.0), 35.0);
/// ```
pub fn smallest_at_least(table: &[f64], demand: f64) -> f64 {
    debug_assert!(!table.is_empty());
    debug_assert!(table.windows(2).all(|pair| pair[0] <= pair[1]));
    table
        .iter()
        .copied()
        .find(|&capacity| capacity >= demand)
        .unwrap_or(table[table.len() - 1])
}

/// Integer-rated variant for device ratings (MCBs, main fuses).
///
/// Same policy as [`smallest_at_least`]: first rating `>=` demand, else the
/// largest rating in the table.
pub fn smallest_rating_at_least(table: &[u32], demand_a: f64) -> u32 {
    debug_assert!(!table.is_empty());
    debug_assert!(table.windows(2).all(|pair| pair[0] <= pair[1]));
    table
        .iter()
        .copied()
        .find(|&rating| f64::from(rating) >= demand_a)
        .unwrap_or(table[table.len() - 1])
}

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10_f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// Round to the nearest multiple of `step` (e.g. nearest 10 W).
pub fn round_to_nearest(value: f64, step: f64) -> f64 {
    debug_assert!(step > 0.0);
    (value / step).round() * step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selects_smallest_qualifying_entry() {
        let table = [24.0, 25.0, 27.0, 28.0, 30.0, 32.0, 35.0, 38.0, 40.0, 45.0];
        assert_eq!(smallest_at_least(&table, 24.0), 24.0);
        assert_eq!(smallest_at_least(&table, 26.1), 27.0);
        assert_eq!(smallest_at_least(&table, 39.0), 40.0);
    }

    #[test]
    fn test_falls_back_to_largest_entry() {
        let table = [24.0, 25.0, 27.0, 28.0, 30.0, 32.0, 35.0, 38.0, 40.0, 45.0];
        assert_eq!(smallest_at_least(&table, 46.0), 45.0);
    }

    #[test]
    fn test_exact_match_is_selected_not_skipped() {
        let table = [60.0, 80.0, 100.0];
        assert_eq!(smallest_at_least(&table, 80.0), 80.0);
    }

    #[test]
    fn test_rating_selection() {
        let ratings = [6_u32, 10, 16, 20, 25, 32, 40, 50, 63];
        assert_eq!(smallest_rating_at_least(&ratings, 31.3), 32);
        assert_eq!(smallest_rating_at_least(&ratings, 32.0), 32);
        assert_eq!(smallest_rating_at_least(&ratings, 70.0), 63);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(18.5214, 1), 18.5);
        assert_eq!(round_to(9.0, 2), 9.0);
        assert_eq!(round_to(3.913, 1), 3.9);
    }

    #[test]
    fn test_round_to_nearest_ten() {
        assert_eq!(round_to_nearest(2162.0, 10.0), 2160.0);
        assert_eq!(round_to_nearest(2165.0, 10.0), 2170.0);
        assert_eq!(round_to_nearest(2112.0, 10.0), 2110.0);
    }
}
