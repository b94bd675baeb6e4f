/// The decimal precision of the reward token.
pub const TOKEN_DECIMALS: u8 = 18;

/// One reward token, denominated in indivisible units.
pub const ONE_TOKEN: u128 = 10u128.pow(TOKEN_DECIMALS as u32);

/// Denominator for basis-point weights and shares.
pub const DENOMINATOR_BPS: u128 = 10_000;

/// The number of prize brackets (1 to 6 trailing digits matched).
pub const BRACKET_COUNT: usize = 6;

/// The lowest valid ticket number. The leading 1 is a sentinel, not a prize digit.
pub const MIN_TICKET_NUMBER: u32 = 1_000_000;

/// The highest valid ticket number.
pub const MAX_TICKET_NUMBER: u32 = 1_999_999;

// ============================================================================
// BRACKET TALLY OFFSETS
// ============================================================================

/// Tally offset for a 1-digit match. Keys span 1..=10.
pub const OFFSET_MATCH_1: u64 = 1;

/// Tally offset for a 2-digit match. Keys span 11..=110.
pub const OFFSET_MATCH_2: u64 = 11;

/// Tally offset for a 3-digit match. Keys span 111..=1_110.
pub const OFFSET_MATCH_3: u64 = 111;

/// Tally offset for a 4-digit match. Keys span 1_111..=11_110.
pub const OFFSET_MATCH_4: u64 = 1_111;

/// Tally offset for a 5-digit match. Keys span 11_111..=111_110.
pub const OFFSET_MATCH_5: u64 = 11_111;

/// Tally offset for a 6-digit match. Keys span 111_111..=1_111_110.
pub const OFFSET_MATCH_6: u64 = 111_111;

/// Per-bracket offsets, indexed by bracket level.
/// Adding an offset to `number % 10^(level+1)` gives a key that is unique across
/// all levels, so one counter map can tally every bracket at once.
pub const BRACKET_OFFSETS: [u64; BRACKET_COUNT] = [
    OFFSET_MATCH_1,
    OFFSET_MATCH_2,
    OFFSET_MATCH_3,
    OFFSET_MATCH_4,
    OFFSET_MATCH_5,
    OFFSET_MATCH_6,
];

/// Returns true if every level's key range ends below the next level's first key.
pub const fn offsets_are_disjoint(offsets: &[u64; BRACKET_COUNT]) -> bool {
    let mut level = 0;
    let mut modulus: u64 = 10;
    while level + 1 < BRACKET_COUNT {
        let last_key = offsets[level] + modulus - 1;
        if last_key >= offsets[level + 1] {
            return false;
        }
        level += 1;
        modulus *= 10;
    }
    true
}

const _: () = assert!(offsets_are_disjoint(&BRACKET_OFFSETS));

// ============================================================================
// ROUND DEFAULTS
// ============================================================================

/// Default reward weights per bracket, in basis points.
pub const DEFAULT_REWARD_BREAKDOWN: [u16; BRACKET_COUNT] = [250, 375, 625, 1250, 2500, 5000];

/// Smallest discount divisor accepted for bulk ticket pricing.
pub const MIN_DISCOUNT_DIVISOR: u128 = 300;

/// Default discount divisor for bulk ticket pricing.
pub const DEFAULT_DISCOUNT_DIVISOR: u128 = 10_000;

/// Default number of tickets allowed in a single purchase.
pub const DEFAULT_MAX_TICKETS_PER_BUY: u64 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_are_disjoint() {
        assert!(offsets_are_disjoint(&BRACKET_OFFSETS));
        // 1-digit keys reach 10, so an offset of 10 for 2 digits collides.
        assert!(!offsets_are_disjoint(&[1, 10, 111, 1_111, 11_111, 111_111]));
        assert!(!offsets_are_disjoint(&[0, 0, 0, 0, 0, 0]));
    }

    #[test]
    fn test_default_breakdown_is_whole_pool() {
        let total: u128 = DEFAULT_REWARD_BREAKDOWN.iter().map(|&w| w as u128).sum();
        assert_eq!(total, DENOMINATOR_BPS);
    }
}
