use lottery_api::prelude::*;

/// The part of the collected funds sent to burning, competitions and referrals.
///
/// The share is taken per whole basis point of the collected amount, so any
/// remainder below 10_000 units stays in the prize pool.
pub fn withheld_amount(
    collected: u128,
    burning_share: u16,
    competition_and_ref_share: u16,
) -> Result<u128, LotteryError> {
    validate_shares(burning_share, competition_and_ref_share)?;
    let shares = burning_share as u128 + competition_and_ref_share as u128;
    (collected / DENOMINATOR_BPS)
        .checked_mul(shares)
        .ok_or(LotteryError::ArithmeticOverflow)
}

/// The prize pool of a round: collected funds minus the withheld shares,
/// plus whatever the previous rounds rolled over.
pub fn amount_to_distribute(
    collected: u128,
    burning_share: u16,
    competition_and_ref_share: u16,
    pending_injection: u128,
) -> Result<u128, LotteryError> {
    let withheld = withheld_amount(collected, burning_share, competition_and_ref_share)?;
    collected
        .checked_sub(withheld)
        .and_then(|amount| amount.checked_add(pending_injection))
        .ok_or(LotteryError::ArithmeticOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_withheld_amount() {
        assert_eq!(withheld_amount(100 * ONE_TOKEN, 1_000, 500), Ok(15 * ONE_TOKEN));
        // 19_999 / 10_000 = 1 whole basis point.
        assert_eq!(withheld_amount(19_999, 1_000, 500), Ok(1_500));
        assert_eq!(withheld_amount(9_999, 1_000, 500), Ok(0));
        assert_eq!(withheld_amount(100, 0, 0), Ok(0));
    }

    #[test]
    fn test_amount_to_distribute() {
        assert_eq!(
            amount_to_distribute(100 * ONE_TOKEN, 1_000, 500, 0),
            Ok(85 * ONE_TOKEN)
        );
        assert_eq!(
            amount_to_distribute(100 * ONE_TOKEN, 1_000, 500, 7 * ONE_TOKEN),
            Ok(92 * ONE_TOKEN)
        );
        assert_eq!(amount_to_distribute(19_999, 1_000, 500, 1), Ok(18_500));
        assert_eq!(amount_to_distribute(0, 0, 0, 42), Ok(42));
    }

    #[test]
    fn test_whole_pool_withheld() {
        assert_eq!(amount_to_distribute(50_000, 6_000, 4_000, 0), Ok(0));
    }

    #[test]
    fn test_invalid_shares() {
        assert_eq!(
            amount_to_distribute(100, 6_000, 4_001, 0),
            Err(LotteryError::InvalidShares)
        );
    }

    #[test]
    fn test_injection_overflow() {
        assert_eq!(
            amount_to_distribute(u128::MAX, 0, 0, 1),
            Err(LotteryError::ArithmeticOverflow)
        );
    }
}
