use alloy_primitives::U256;
use serde::Serialize;
use std::fmt;

use crate::models::amount::native_to_display;
use crate::models::Pair;

/// Opaque handle into the market contract's offer linked list. Only ever
/// produced by the gateway and fed back to it; the list itself is never
/// materialized locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfferId(U256);

impl OfferId {
    pub fn new(raw: U256) -> Self {
        OfferId(raw)
    }

    pub fn raw(&self) -> U256 {
        self.0
    }
}

impl From<u64> for OfferId {
    fn from(id: u64) -> Self {
        OfferId(U256::from(id))
    }
}

impl fmt::Display for OfferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One offer snapshot as read from the chain, amounts in native token units.
#[derive(Debug, Clone)]
pub struct RawOffer {
    pub id: OfferId,
    pub pay_amount: U256,
    pub buy_amount: U256,
}

/// A historical take (completed trade) pulled from the event log.
#[derive(Debug, Clone)]
pub struct TradeEvent {
    pub give_amount: U256,
    pub take_amount: U256,
    pub block_number: u64,
}

/// Human-scale view of an offer or take, for display and JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct Offer {
    pub pair: String,
    pub pay_amt: f64,
    pub buy_amt: f64,
}

impl Offer {
    pub fn from_raw(pair: &Pair, raw: &RawOffer) -> Self {
        Offer {
            pair: pair.text.clone(),
            pay_amt: native_to_display(raw.pay_amount, pair.from_decimals),
            buy_amt: native_to_display(raw.buy_amount, pair.to_decimals),
        }
    }

    /// A take event viewed as an offer: what the maker gave is the pay side,
    /// what the taker took is the buy side.
    pub fn from_take_event(pair: &Pair, event: &TradeEvent) -> Self {
        Offer {
            pair: pair.text.clone(),
            pay_amt: native_to_display(event.give_amount, pair.from_decimals),
            buy_amt: native_to_display(event.take_amount, pair.to_decimals),
        }
    }
}

impl fmt::Display for Offer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (from, to) = self.pair.split_once('/').unwrap_or((self.pair.as_str(), ""));
        write!(f, "{} {} for {} {}", from, self.pay_amt, to, self.buy_amt)
    }
}

/// Result of one price query. `price == 0.0` means the requested amount
/// exceeds the visible liquidity and cannot be filled, not a free trade.
#[derive(Debug, Clone, Serialize)]
pub struct PriceQuote {
    pub price: f64,
    pub offers: Vec<Offer>,
    pub takes: Vec<Offer>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pair::testing::weth_dai as pair;

    #[test]
    fn display_format_matches_cli_output() {
        let offer = Offer {
            pair: "W-ETH/DAI".to_string(),
            pay_amt: 1.5,
            buy_amt: 4500.0,
        };
        assert_eq!(offer.to_string(), "W-ETH 1.5 for DAI 4500");
    }

    #[test]
    fn raw_offer_scales_to_display_units() {
        let raw = RawOffer {
            id: OfferId::from(1),
            pay_amount: U256::from(2_000_000_000_000_000_000u128),
            buy_amount: U256::from(6_000_000_000_000_000_000u128),
        };
        let offer = Offer::from_raw(&pair(), &raw);
        assert_eq!(offer.pay_amt, 2.0);
        assert_eq!(offer.buy_amt, 6.0);
    }

    #[test]
    fn take_event_maps_give_to_pay_side() {
        let event = TradeEvent {
            give_amount: U256::from(1_000_000_000_000_000_000u128),
            take_amount: U256::from(3_000_000_000_000_000_000u128),
            block_number: 7_000_000,
        };
        let offer = Offer::from_take_event(&pair(), &event);
        assert_eq!(offer.pay_amt, 1.0);
        assert_eq!(offer.buy_amt, 3.0);
    }
}
