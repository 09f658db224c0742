use tokio::try_join;

use crate::error::QuoteError;
use crate::gateway::MarketGateway;
use crate::models::{Pair, RawOffer};
use crate::utils;

/// Pull up to `max_count` offers for the pair, best price first.
///
/// The offer list lives on the ledger as a singly-linked list, so the walk is
/// count + best-offer reads followed by strictly sequential steps; each step
/// fetches the offer's amounts and the next-worse handle concurrently.
///
/// Other participants can take offers between the count read and the
/// traversal. When that happens the walk runs into the zero sentinel before
/// the expected number of offers and the whole traversal is retried, up to
/// `max_attempts` extra times. A truncated book is never returned as if it
/// were complete.
pub async fn fetch_top_offers<G: MarketGateway>(
    gateway: &G,
    pair: &Pair,
    max_count: u64,
    max_attempts: u32,
) -> Result<Vec<RawOffer>, QuoteError> {
    let offers = utils::retry(max_attempts, || walk_once(gateway, pair, max_count)).await?;
    offers.ok_or(QuoteError::MarketTooVolatile)
}

/// One traversal. `Ok(None)` means the book changed underneath us.
async fn walk_once<G: MarketGateway>(
    gateway: &G,
    pair: &Pair,
    max_count: u64,
) -> Result<Option<Vec<RawOffer>>, QuoteError> {
    let (count, mut id) = try_join!(
        gateway.offer_count(pair.from_address, pair.to_address),
        gateway.best_offer(pair.from_address, pair.to_address),
    )?;

    let mut remaining = count.min(max_count);
    let mut offers = Vec::with_capacity(remaining as usize);
    while remaining > 0 {
        let ((pay_amount, buy_amount), next) = try_join!(gateway.offer(id), gateway.worse_offer(id))?;
        if pay_amount.is_zero() {
            // an offer was taken between the count read and this step
            return Ok(None);
        }
        offers.push(RawOffer {
            id,
            pay_amount,
            buy_amount,
        });
        id = next;
        remaining -= 1;
    }
    Ok(Some(offers))
}
