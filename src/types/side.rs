//! Book side: bids (buy interest) or asks (sell interest).

use std::fmt;

/// Book side
///
/// Represented as u8 for compact fingerprints:
/// - Bid = 0
/// - Ask = 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Buy side - best price is the highest
    #[default]
    Bid,
    /// Sell side - best price is the lowest
    Ask,
}

impl Side {
    /// Convert to u8 for hashing
    pub fn to_u8(self) -> u8 {
        match self {
            Side::Bid => 0,
            Side::Ask => 1,
        }
    }

    /// Convert from u8
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Side::Bid),
            1 => Some(Side::Ask),
            _ => None,
        }
    }

    /// Returns the opposite side
    pub fn opposite(self) -> Self {
        match self {
            Side::Bid => Side::Ask,
            Side::Ask => Side::Bid,
        }
    }

    /// True if `price` is at least as good as `limit` on this side.
    ///
    /// Bids: `price >= limit`. Asks: `price <= limit`.
    #[inline]
    pub fn at_least_as_good(self, price: i64, limit: i64) -> bool {
        match self {
            Side::Bid => price >= limit,
            Side::Ask => price <= limit,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Bid => f.write_str("bid"),
            Side::Ask => f.write_str("ask"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_conversion() {
        assert_eq!(Side::Bid.to_u8(), 0);
        assert_eq!(Side::Ask.to_u8(), 1);
        assert_eq!(Side::from_u8(0), Some(Side::Bid));
        assert_eq!(Side::from_u8(1), Some(Side::Ask));
        assert_eq!(Side::from_u8(2), None);
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Bid.opposite(), Side::Ask);
        assert_eq!(Side::Ask.opposite(), Side::Bid);
    }

    #[test]
    fn test_at_least_as_good() {
        assert!(Side::Bid.at_least_as_good(60, 50));
        assert!(Side::Bid.at_least_as_good(50, 50));
        assert!(!Side::Bid.at_least_as_good(40, 50));

        assert!(Side::Ask.at_least_as_good(40, 50));
        assert!(Side::Ask.at_least_as_good(50, 50));
        assert!(!Side::Ask.at_least_as_good(60, 50));
    }

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Bid.to_string(), "bid");
        assert_eq!(Side::Ask.to_string(), "ask");
    }
}
