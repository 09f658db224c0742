use alloy_primitives::{address, Address};
use std::collections::HashMap;

/// OasisDEX matching market contract on Ethereum mainnet.
pub const OASIS_CONTRACT: Address = address!("14fbca95be7e99c15cc2996c6c9d841e54b79425");

/// Tunables for a price query. Plain values, injected into the market
/// façade; the mechanisms that consume them live in the market modules.
#[derive(Debug, Clone)]
pub struct MarketConfig {
    /// Most offers to pull out of the book in one traversal.
    pub max_offer_count: u64,
    /// Extra traversal attempts when the book mutates mid-walk.
    pub walk_attempts: u32,
    /// How far each backward event-scan window reaches.
    pub event_block_step: u64,
    /// Event scanning never goes below this block.
    pub floor_block: u64,
    /// Offers shown in the quote output.
    pub offers_limit: usize,
    /// Takes fetched for the quote output.
    pub takes_limit: usize,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            max_offer_count: 1000,
            walk_attempts: 5,
            event_block_step: 50_000,
            floor_block: 6_500_000,
            offers_limit: 10,
            takes_limit: 10,
        }
    }
}

/// Read-only table of tradable tokens: symbol to mainnet address, plus the
/// decimal overrides for tokens whose contracts misreport or predate the
/// `decimals()` convention.
#[derive(Debug, Clone, Default)]
pub struct TokenRegistry {
    tokens: HashMap<String, Address>,
    decimal_overrides: HashMap<String, u8>,
}

impl TokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The token set tradable on the mainnet OasisDEX deployment.
    pub fn mainnet() -> Self {
        let mut registry = Self::new();
        for (symbol, addr) in [
            ("OW-ETH", address!("0000000000000000000000000000000000000000")),
            ("W-ETH", address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2")),
            ("DAI", address!("89d24a6b4ccb1b6faa2625fe562bdd9a23260359")),
            ("SAI", address!("59adcf176ed2f6788a41b8ea4c4904518e62b6a4")),
            ("MKR", address!("9f8f72aa9304c8b593d555f12ef6589cc3a579a2")),
            ("DGD", address!("e0b7927c4af23765cb51314a0e0521a9645f0e2a")),
            ("GNT", address!("a74476443119a942de498590fe1f2454d7d4ac0d")),
            ("W-GNT", address!("01afc37f4f85babc47c0e2d0eababc7fb49793c8")),
            ("REP", address!("e94327d07fc17907b4db788e5adf2ed424addff6")),
            ("ICN", address!("888666ca69e0f178ded6d75b5726cee99a87d698")),
            ("1ST", address!("af30d2a7e90d7dc361c8c4585e9bb7d2f6f15bc7")),
            ("SNGLS", address!("aec2e87e0a235266d9c5adc9deb4b2e29b54d009")),
            ("VSL", address!("5c543e7ae0a1104f78406c340e9c64fd9fce5170")),
            ("PLU", address!("d8912c10681d8b21fd3742244f44658dba12264e")),
            ("MLN", address!("beb9ef514a379b997e0798fdcc901ee474b6d9a1")),
            ("RHOC", address!("168296bb09e24a88805cb9c33356536b980d3fc5")),
            ("TIME", address!("6531f133e6deebe7f2dce5a0441aa7ef330b4e53")),
            ("GUP", address!("f7b098298f7c69fc14610bf71d5e02c60792894c")),
            ("BAT", address!("0d8775f648430679a709e98d2b0cb6250d2887ef")),
            ("NMR", address!("1776e1f26f98b1a5df9cd347953a26dd3cb46671")),
        ] {
            registry.insert(symbol, addr);
        }
        // DGD predates the 18-decimal convention
        registry.override_decimals("DGD", 9);
        registry
    }

    pub fn insert(&mut self, symbol: &str, addr: Address) {
        self.tokens.insert(symbol.to_string(), addr);
    }

    pub fn override_decimals(&mut self, symbol: &str, decimals: u8) {
        self.decimal_overrides.insert(symbol.to_string(), decimals);
    }

    pub fn address(&self, symbol: &str) -> Option<Address> {
        self.tokens.get(symbol).copied()
    }

    pub fn decimals_override(&self, symbol: &str) -> Option<u8> {
        self.decimal_overrides.get(symbol).copied()
    }
}
