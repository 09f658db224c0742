//! # oasisdex-rs
//!
//! A Rust client for the OasisDEX on-chain order book. Walks the ledger-side
//! offer list over Ethereum JSON-RPC and computes the effective execution
//! price for buying a requested amount of a token, plus recent trade history.
//!
//! ## Components
//!
//! | Component | Module | Role |
//! |-----------|--------|------|
//! | `EthRpc` | `rpc` | JSON-RPC transport (eth_call, eth_getLogs, eth_blockNumber) |
//! | `OasisGateway` | `gateway` | market + token contract reads behind `MarketGateway` |
//! | `resolve_pair` | `market::resolver` | pair parsing, whitelist check, decimals |
//! | `fetch_top_offers` | `market::book` | linked-list walk with retry on races |
//! | `compute_price` | `market::price` | marginal-offer price over normalized amounts |
//! | `fetch_recent_trades` | `market::history` | backward-expanding LogTake scan |
//! | `OasisMarket` | `market` | ties the above into `resolve_pair` + `quote` |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use oasisdex_rs::{EthRpc, OasisGateway, OasisMarket, Wad};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let rpc = EthRpc::new("https://mainnet.infura.io/v3/<key>");
//!     let market = OasisMarket::new(OasisGateway::new(rpc));
//!
//!     let pair = market.resolve_pair("W-ETH/DAI").await?;
//!     let quote = market.quote(&pair, Wad::parse("5")?).await?;
//!
//!     if quote.price > 0.0 {
//!         println!("Price for {} is {}", pair.text, quote.price);
//!     } else {
//!         println!("Not enough visible liquidity");
//!     }
//!     for offer in &quote.offers {
//!         println!("{}", offer);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! oasisdex-rs --pair W-ETH/DAI --amount 5 --endpoint https://mainnet.infura.io/v3/<key>
//! ```

pub mod abi;
pub mod config;
pub mod error;
pub mod gateway;
pub mod market;
pub mod models;
pub mod rpc;
pub mod utils;

pub use config::{MarketConfig, TokenRegistry, OASIS_CONTRACT};
pub use error::QuoteError;
pub use gateway::{MarketGateway, OasisGateway};
pub use market::OasisMarket;
pub use models::{Offer, OfferId, Pair, PriceQuote, RawOffer, TradeEvent, Wad};
pub use rpc::EthRpc;
