//! Minimal ABI plumbing for the handful of contract calls the market gateway
//! makes. Arguments are all single 32-byte words (addresses and uints), so a
//! full ABI coder would be dead weight; selectors are derived from canonical
//! signatures at call time.

use alloy_primitives::{keccak256, B256, U256};
use anyhow::{anyhow, Result};

/// First four bytes of `keccak256(signature)`.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// Topic-0 for an event: `keccak256(signature)` whole.
pub fn event_topic(signature: &str) -> B256 {
    keccak256(signature.as_bytes())
}

/// Build `eth_call` calldata: selector followed by the argument words.
pub fn encode_call(signature: &str, args: &[B256]) -> Vec<u8> {
    let mut data = Vec::with_capacity(4 + 32 * args.len());
    data.extend_from_slice(&selector(signature));
    for word in args {
        data.extend_from_slice(word.as_slice());
    }
    data
}

/// Decode a `0x`-prefixed hex payload from an RPC response.
pub fn decode_hex(text: &str) -> Result<Vec<u8>> {
    let text = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(text).map_err(|e| anyhow!("invalid hex in RPC response: {}", e))
}

/// Split ABI return data into 32-byte words.
pub fn decode_words(data: &[u8]) -> Result<Vec<U256>> {
    if data.len() % 32 != 0 {
        return Err(anyhow!(
            "return data length {} is not a multiple of 32",
            data.len()
        ));
    }
    Ok(data.chunks(32).map(U256::from_be_slice).collect())
}

/// Pick word `index` out of decoded return data, with a readable error when
/// the contract returned fewer words than the call expects.
pub fn word_at(words: &[U256], index: usize) -> Result<U256> {
    words
        .get(index)
        .copied()
        .ok_or_else(|| anyhow!("return data has {} words, wanted index {}", words.len(), index))
}

/// Parse a JSON-RPC quantity like `"0x6f9c3a"` into a block number.
pub fn parse_quantity(text: &str) -> Result<u64> {
    let stripped = text.strip_prefix("0x").unwrap_or(text);
    u64::from_str_radix(stripped, 16)
        .map_err(|e| anyhow!("invalid quantity '{}': {}", text, e))
}

/// Format a block number the way `eth_getLogs` wants it.
pub fn to_quantity(value: u64) -> String {
    format!("0x{:x}", value)
}
