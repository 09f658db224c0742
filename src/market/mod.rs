//! Price-quote pipeline over a [`MarketGateway`]: pair resolution, the
//! order-book walk, the marginal-offer price calculation, and recent-take
//! history, tied together by the [`OasisMarket`] façade.

use tokio::try_join;

use crate::config::{MarketConfig, TokenRegistry};
use crate::error::QuoteError;
use crate::gateway::MarketGateway;
use crate::models::{Offer, Pair, PriceQuote, Wad};

pub mod book;
pub mod history;
pub mod price;
pub mod resolver;

/// One market, one gateway. Everything is per-request: the façade holds only
/// the gateway, the token registry, and the query tunables.
pub struct OasisMarket<G: MarketGateway> {
    gateway: G,
    registry: TokenRegistry,
    config: MarketConfig,
}

impl<G: MarketGateway> OasisMarket<G> {
    /// Mainnet token registry and default tunables.
    pub fn new(gateway: G) -> Self {
        Self::with_config(gateway, TokenRegistry::mainnet(), MarketConfig::default())
    }

    pub fn with_config(gateway: G, registry: TokenRegistry, config: MarketConfig) -> Self {
        Self {
            gateway,
            registry,
            config,
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub async fn resolve_pair(&self, pair_text: &str) -> Result<Pair, QuoteError> {
        resolver::resolve_pair(&self.gateway, &self.registry, pair_text).await
    }

    /// Quote buying `amount` (common units) of the pair's to-token. The book
    /// walk and the take-history fetch are independent and run concurrently;
    /// a failure in either aborts the quote.
    pub async fn quote(&self, pair: &Pair, amount: Wad) -> Result<PriceQuote, QuoteError> {
        let (raw_offers, trades) = try_join!(
            book::fetch_top_offers(
                &self.gateway,
                pair,
                self.config.max_offer_count,
                self.config.walk_attempts,
            ),
            history::fetch_recent_trades(
                &self.gateway,
                pair,
                self.config.takes_limit,
                self.config.event_block_step,
                self.config.floor_block,
            ),
        )?;

        let price = price::compute_price(pair, amount, &raw_offers);
        let offers = raw_offers
            .iter()
            .take(self.config.offers_limit)
            .map(|offer| Offer::from_raw(pair, offer))
            .collect();
        let takes = trades
            .iter()
            .map(|event| Offer::from_take_event(pair, event))
            .collect();

        Ok(PriceQuote {
            price,
            offers,
            takes,
        })
    }
}
