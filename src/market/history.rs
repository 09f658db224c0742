use alloy_primitives::B256;

use crate::error::QuoteError;
use crate::gateway::MarketGateway;
use crate::models::{Pair, TradeEvent};

/// Most recent takes for the pair, newest first.
///
/// The log is scanned backward from the chain head in fixed-size block
/// windows. Within a window the node returns events oldest-first, so each
/// window is reversed before being appended after the newer ones already
/// collected. Scanning stops once more than `limit` events are accumulated or
/// the window would reach below `floor_block`; the result is truncated to
/// `limit + 1` entries.
pub async fn fetch_recent_trades<G: MarketGateway>(
    gateway: &G,
    pair: &Pair,
    limit: usize,
    step: u64,
    floor_block: u64,
) -> Result<Vec<TradeEvent>, QuoteError> {
    let topic = pair.take_topic();
    let head = gateway.block_number().await?;

    let mut events = window(gateway, topic, head, head).await?;
    let mut to_block = head;
    let mut from_block = head.saturating_sub(step);
    while events.len() <= limit && to_block > floor_block {
        let mut older = window(gateway, topic, from_block, to_block).await?;
        events.append(&mut older);
        to_block = from_block;
        from_block = from_block.saturating_sub(step);
    }

    events.truncate(limit + 1);
    Ok(events)
}

async fn window<G: MarketGateway>(
    gateway: &G,
    topic: B256,
    from_block: u64,
    to_block: u64,
) -> Result<Vec<TradeEvent>, QuoteError> {
    let mut events = gateway.take_events(topic, from_block, to_block).await?;
    events.reverse();
    Ok(events)
}
