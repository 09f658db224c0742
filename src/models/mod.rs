pub mod amount;
pub mod offer;
pub mod pair;

pub use amount::{native_to_display, u256_to_f64, Wad, COMMON_DECIMALS};
pub use offer::{Offer, OfferId, PriceQuote, RawOffer, TradeEvent};
pub use pair::Pair;
