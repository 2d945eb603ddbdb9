use std::fmt;

pub const MINUTES_PER_DAY: i128 = 60 * 24;

/// One `X Y Z` triple read from input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestCase {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Yes,
    No,
}

impl TestCase {
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// `Yes` iff `x * y <= z * 60 * 24`. Products are taken in i128 so they
    /// cannot overflow for any i64 operands.
    pub fn verdict(&self) -> Verdict {
        let demand = i128::from(self.x) * i128::from(self.y);
        let budget = i128::from(self.z) * MINUTES_PER_DAY;

        if demand <= budget {
            Verdict::Yes
        } else {
            Verdict::No
        }
    }
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Yes => "YES",
            Verdict::No => "NO",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_product_fits_in_one_day() {
        assert_eq!(TestCase::new(1, 1, 1).verdict(), Verdict::Yes);
    }

    #[test]
    fn test_product_exceeding_budget_is_rejected() {
        assert_eq!(TestCase::new(100, 100, 1).verdict(), Verdict::No);
    }

    #[test]
    fn test_equal_sides_are_accepted() {
        assert_eq!(TestCase::new(1440, 1, 1).verdict(), Verdict::Yes);
        assert_eq!(TestCase::new(720, 4, 2).verdict(), Verdict::Yes);
        assert_eq!(TestCase::new(1441, 1, 1).verdict(), Verdict::No);
    }

    #[test]
    fn test_zero_values() {
        assert_eq!(TestCase::new(0, 0, 0).verdict(), Verdict::Yes);
        assert_eq!(TestCase::new(1, 1, 0).verdict(), Verdict::No);
    }

    #[test]
    fn test_products_beyond_32_bits_compare_exactly() {
        // 2^31-1 squared overflows i32; 10^9 * 1440 overflows it too.
        let max = i64::from(i32::MAX);
        assert_eq!(TestCase::new(max, max, 1_000_000_000).verdict(), Verdict::No);
        assert_eq!(
            TestCase::new(1_000_000_000, 1_440, 1_000_000_000).verdict(),
            Verdict::Yes
        );
    }

    #[test]
    fn test_products_beyond_64_bits_compare_exactly() {
        assert_eq!(TestCase::new(i64::MAX, i64::MAX, i64::MAX).verdict(), Verdict::No);
        assert_eq!(TestCase::new(i64::MAX, 1, i64::MAX).verdict(), Verdict::Yes);
        assert_eq!(TestCase::new(i64::MAX, 1440, i64::MAX).verdict(), Verdict::Yes);
        assert_eq!(TestCase::new(i64::MAX, 1441, i64::MAX).verdict(), Verdict::No);
    }

    #[test]
    fn test_verdict_renders_as_upper_case_word() {
        assert_eq!(Verdict::Yes.to_string(), "YES");
        assert_eq!(Verdict::No.to_string(), "NO");
    }
}
