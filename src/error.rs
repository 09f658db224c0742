use thiserror::Error;

/// Errors surfaced by pair resolution and price quoting.
///
/// The first three variants are user errors and fail immediately. The
/// volatility variant is only produced after the order-book walker has
/// exhausted its retry budget. Transport failures from the RPC layer are
/// carried through untouched.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("can't parse pair '{0}', expected format FROM/TO (e.g. W-ETH/DAI)")]
    MalformedPair(String),

    #[error("unknown token '{0}'")]
    UnknownToken(String),

    #[error("pair '{0}' is not whitelisted on the market contract")]
    PairNotWhitelisted(String),

    #[error("order book is changing too fast to take a consistent snapshot")]
    MarketTooVolatile,

    #[error("transport error: {0}")]
    Transport(#[from] anyhow::Error),
}
