//! Multiplicity ranges of structural features

use serde::{Deserialize, Serialize};
use std::fmt;

/// `lower..upper`; `upper == None` means unbounded (`*`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplicityRange {
    pub lower: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper: Option<i64>,
}

impl MultiplicityRange {
    pub fn new(lower: i64, upper: Option<i64>) -> Self {
        Self { lower, upper }
    }

    /// `lower >= 0`, and a bounded upper is at least 1 and at least `lower`
    pub fn is_valid(&self) -> bool {
        if self.lower < 0 {
            return false;
        }
        match self.upper {
            Some(upper) => upper >= 1 && upper >= self.lower,
            None => true,
        }
    }
}

impl fmt::Display for MultiplicityRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upper {
            Some(upper) if upper == self.lower => write!(f, "{}", upper),
            Some(upper) => write!(f, "{}..{}", self.lower, upper),
            None => write!(f, "{}..*", self.lower),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Multiplicity {
    pub ranges: Vec<MultiplicityRange>,
}

impl Multiplicity {
    pub fn new(ranges: Vec<MultiplicityRange>) -> Self {
        Self { ranges }
    }

    pub fn range(lower: i64, upper: Option<i64>) -> Self {
        Self::new(vec![MultiplicityRange::new(lower, upper)])
    }

    /// `1`
    pub fn one() -> Self {
        Self::range(1, Some(1))
    }

    /// `0..1`
    pub fn optional() -> Self {
        Self::range(0, Some(1))
    }

    /// `0..*`
    pub fn many() -> Self {
        Self::range(0, None)
    }

    /// `1..*`
    pub fn one_or_more() -> Self {
        Self::range(1, None)
    }

    /// Smallest allowed cardinality
    pub fn lower(&self) -> i64 {
        self.ranges.iter().map(|r| r.lower).min().unwrap_or(0)
    }

    /// Largest allowed cardinality (`None` = unbounded)
    pub fn upper(&self) -> Option<i64> {
        let mut max = 0;
        for range in &self.ranges {
            match range.upper {
                None => return None,
                Some(upper) => max = max.max(upper),
            }
        }
        Some(max)
    }

    pub fn is_multi_valued(&self) -> bool {
        self.upper().map_or(true, |u| u > 1)
    }

    /// Ranges are individually valid, non-empty, and do not overlap
    pub fn is_valid(&self) -> bool {
        if self.ranges.is_empty() || !self.ranges.iter().all(MultiplicityRange::is_valid) {
            return false;
        }
        let mut sorted = self.ranges.clone();
        sorted.sort_by_key(|r| r.lower);
        sorted.windows(2).all(|pair| match pair[0].upper {
            Some(upper) => upper < pair[1].lower,
            None => false,
        })
    }
}

impl fmt::Display for Multiplicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.ranges.iter().map(|r| r.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_multiplicities() {
        assert!(Multiplicity::one().is_valid());
        assert!(Multiplicity::many().is_valid());
        assert_eq!(Multiplicity::many().to_string(), "0..*");
        assert_eq!(Multiplicity::one().to_string(), "1");
        assert_eq!(Multiplicity::optional().to_string(), "0..1");
        assert!(!Multiplicity::one().is_multi_valued());
        assert!(Multiplicity::one_or_more().is_multi_valued());
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(!Multiplicity::range(-1, Some(3)).is_valid());
        assert!(!Multiplicity::range(3, Some(2)).is_valid());
        assert!(!Multiplicity::range(0, Some(0)).is_valid());
        assert!(!Multiplicity::new(vec![]).is_valid());
    }

    #[test]
    fn test_overlapping_ranges() {
        let disjoint = Multiplicity::new(vec![
            MultiplicityRange::new(0, Some(1)),
            MultiplicityRange::new(3, Some(5)),
        ]);
        assert!(disjoint.is_valid());
        assert_eq!(disjoint.to_string(), "0..1,3..5");
        assert_eq!(disjoint.upper(), Some(5));

        let overlapping = Multiplicity::new(vec![
            MultiplicityRange::new(0, Some(4)),
            MultiplicityRange::new(3, Some(5)),
        ]);
        assert!(!overlapping.is_valid());

        let after_unbounded = Multiplicity::new(vec![
            MultiplicityRange::new(0, None),
            MultiplicityRange::new(3, Some(5)),
        ]);
        assert!(!after_unbounded.is_valid());
    }
}
