use crate::models::{u256_to_f64, Pair, RawOffer, Wad};

/// Execution price for buying `amount` (common units) against the given
/// best-to-worst offer snapshot.
///
/// Offers are normalized to the common scale, then consumed in order until
/// the requested amount is covered. The reported price is `pay / buy` of the
/// marginal offer at the cutoff, the worst rate an aggressive taker would
/// actually pay, not a volume-weighted average over the consumed ladder.
///
/// Returns `0.0` when the request meets or exceeds the book's total buy-side
/// liquidity; the caller must treat that as "unfillable", not as a price.
pub fn compute_price(pair: &Pair, amount: Wad, raw_offers: &[RawOffer]) -> f64 {
    let offers: Vec<(Wad, Wad)> = raw_offers
        .iter()
        .map(|offer| {
            (
                Wad::from_native(offer.pay_amount, pair.from_decimals),
                Wad::from_native(offer.buy_amount, pair.to_decimals),
            )
        })
        .collect();

    let total = offers
        .iter()
        .fold(Wad::ZERO, |acc, (_, buy)| acc + *buy);
    if amount >= total {
        return 0.0;
    }

    let mut remaining = amount;
    for (pay, buy) in offers {
        if buy >= remaining {
            return u256_to_f64(pay.raw()) / u256_to_f64(buy.raw());
        }
        remaining = remaining - buy;
    }
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pair::testing::weth_dai;
    use crate::models::OfferId;
    use alloy_primitives::U256;

    const WAD: u128 = 1_000_000_000_000_000_000;

    fn offers_18(entries: &[(u128, u128)]) -> Vec<RawOffer> {
        entries
            .iter()
            .enumerate()
            .map(|(i, &(pay, buy))| RawOffer {
                id: OfferId::from(i as u64 + 1),
                pay_amount: U256::from(pay * WAD),
                buy_amount: U256::from(buy * WAD),
            })
            .collect()
    }

    #[test]
    fn marginal_offer_sets_the_price() {
        // 80 requested: offer 1 covers 50, the cutoff lands in offer 2,
        // so the price is 300/100 = 3
        let offers = offers_18(&[(100, 50), (300, 100)]);
        let price = compute_price(&weth_dai(), Wad::parse("80").unwrap(), &offers);
        assert_eq!(price, 3.0);
    }

    #[test]
    fn best_offer_alone_fills_small_requests() {
        let offers = offers_18(&[(100, 50), (300, 100)]);
        let price = compute_price(&weth_dai(), Wad::parse("10").unwrap(), &offers);
        assert_eq!(price, 2.0);
    }

    #[test]
    fn unfillable_request_is_zero() {
        let offers = offers_18(&[(100, 50), (300, 100)]);
        // exactly the total liquidity is already unfillable
        assert_eq!(
            compute_price(&weth_dai(), Wad::parse("150").unwrap(), &offers),
            0.0
        );
        assert_eq!(
            compute_price(&weth_dai(), Wad::parse("1000").unwrap(), &offers),
            0.0
        );
        assert_eq!(compute_price(&weth_dai(), Wad::parse("1").unwrap(), &[]), 0.0);
    }

    #[test]
    fn idempotent_over_a_frozen_snapshot() {
        let offers = offers_18(&[(100, 50), (300, 100), (900, 200)]);
        let amount = Wad::parse("120").unwrap();
        let first = compute_price(&weth_dai(), amount, &offers);
        let second = compute_price(&weth_dai(), amount, &offers);
        assert_eq!(first, second);
    }

    #[test]
    fn price_is_monotone_in_requested_amount() {
        let offers = offers_18(&[(100, 50), (300, 100), (900, 200)]);
        let pair = weth_dai();
        let mut last = 0.0;
        for amount in ["1", "49", "50", "80", "149", "150", "250", "349"] {
            let price = compute_price(&pair, Wad::parse(amount).unwrap(), &offers);
            assert!(
                price >= last,
                "price {} for amount {} dropped below {}",
                price,
                amount,
                last
            );
            last = price;
        }
    }

    #[test]
    fn normalizes_mixed_decimals() {
        // to-side token at 9 decimals: buy amount 4.0 in native units is
        // 4 * 10^9
        let mut pair = weth_dai();
        pair.to_decimals = 9;
        let offers = vec![RawOffer {
            id: OfferId::from(1),
            pay_amount: U256::from(2 * WAD),
            buy_amount: U256::from(4_000_000_000u64),
        }];
        let price = compute_price(&pair, Wad::parse("3").unwrap(), &offers);
        assert_eq!(price, 0.5);
    }
}
