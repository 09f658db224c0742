use alloy_primitives::Address;
use anyhow::anyhow;
use tokio::try_join;

use crate::config::TokenRegistry;
use crate::error::QuoteError;
use crate::gateway::MarketGateway;
use crate::models::{Pair, COMMON_DECIMALS};

/// Parse `"<FROM>/<TO>"`, resolve both tokens against the registry, confirm
/// the pair is whitelisted on the market contract, and resolve per-token
/// decimals (override table first, token contract otherwise; both sides
/// fetched concurrently).
pub async fn resolve_pair<G: MarketGateway>(
    gateway: &G,
    registry: &TokenRegistry,
    pair_text: &str,
) -> Result<Pair, QuoteError> {
    let (from_symbol, to_symbol) = pair_text
        .split_once('/')
        .ok_or_else(|| QuoteError::MalformedPair(pair_text.to_string()))?;

    let from_address = registry
        .address(from_symbol)
        .ok_or_else(|| QuoteError::UnknownToken(from_symbol.to_string()))?;
    let to_address = registry
        .address(to_symbol)
        .ok_or_else(|| QuoteError::UnknownToken(to_symbol.to_string()))?;
    if from_address == to_address {
        return Err(QuoteError::MalformedPair(pair_text.to_string()));
    }

    if !gateway.is_pair_whitelisted(from_address, to_address).await? {
        return Err(QuoteError::PairNotWhitelisted(pair_text.to_string()));
    }

    let (from_decimals, to_decimals) = try_join!(
        decimals_for(gateway, registry, from_symbol, from_address),
        decimals_for(gateway, registry, to_symbol, to_address),
    )?;

    Ok(Pair {
        text: pair_text.to_string(),
        from_address,
        from_symbol: from_symbol.to_string(),
        from_decimals,
        to_address,
        to_symbol: to_symbol.to_string(),
        to_decimals,
    })
}

async fn decimals_for<G: MarketGateway>(
    gateway: &G,
    registry: &TokenRegistry,
    symbol: &str,
    address: Address,
) -> Result<u8, QuoteError> {
    let decimals = match registry.decimals_override(symbol) {
        Some(decimals) => decimals,
        None => gateway.token_decimals(address).await?,
    };
    if decimals > COMMON_DECIMALS {
        return Err(QuoteError::Transport(anyhow!(
            "token {} reports {} decimals, above the {}-decimal common scale",
            symbol,
            decimals,
            COMMON_DECIMALS
        )));
    }
    Ok(decimals)
}
